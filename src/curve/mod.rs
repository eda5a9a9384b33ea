//! The curve module provides the elliptic-curve groups that the key
//! agreement and signature schemes operate over. Group elements are
//! affine coordinate pairs over a prime field, arithmetic is exact
//! big-integer arithmetic, and every modular division goes through the
//! extended-Euclid kernel in [`crate::arith`].
//!
//! Two curve shapes are supported: the general form
//! `y^2 = x^3 + a*x^2 + b*x + c (mod p)`, which covers both the
//! Montgomery-form [`CURVE25519`] group and the short-Weierstrass
//! constants ([`SECP256K1`], [`P256`]), and the twisted-Edwards form
//! behind [`ED25519`]. The [`Group`] trait is the seam the schemes are
//! generic over.
//!
//! # Examples
//!
//! ```
//! use num::BigInt;
//! use pkc_rs::curve::{Group, CURVE25519};
//!
//! let g = CURVE25519.generator();
//! let p = CURVE25519.scalar_mul(&BigInt::from(5), g);
//! assert!(CURVE25519.is_on_curve(&p));
//!
//! // 5*G + 2*G = 7*G
//! let q = CURVE25519.add(&p, &CURVE25519.scalar_mul(&BigInt::from(2), g));
//! assert_eq!(q, CURVE25519.scalar_mul(&BigInt::from(7), g));
//! ```

use std::fmt;

use num::{BigInt, Integer};
use num_traits::{One, Signed, Zero};

use crate::arith;

mod params;

pub use params::{CURVE25519, ED25519, P256, SECP256K1};

/// A point on a general-form curve: either the distinguished identity
/// element or an affine coordinate pair. Curve operations pattern-match
/// on the two cases explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CurvePoint {
    /// The point at infinity, identity of the group law.
    Infinity,
    /// An affine point with coordinates in `[0, p)`.
    Affine {
        /// x-coordinate.
        x: BigInt,
        /// y-coordinate.
        y: BigInt,
    },
}

/// A point on a twisted-Edwards curve. Edwards curves have no point at
/// infinity; the identity is the ordinary point `(0, 1)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdwardsPoint {
    /// x-coordinate.
    pub x: BigInt,
    /// y-coordinate.
    pub y: BigInt,
}

/// An additive group of points over a prime field, with a fixed
/// generator of known order. Implemented by the two curve shapes; the
/// signature schemes only speak this trait.
pub trait Group {
    /// The point representation of this curve shape.
    type Point: Clone + PartialEq + Eq + fmt::Debug;

    /// The identity element of the group law.
    fn identity(&self) -> Self::Point;

    /// The fixed base point.
    fn generator(&self) -> &Self::Point;

    /// The order of the subgroup generated by the base point.
    fn order(&self) -> &BigInt;

    /// Adds two points.
    fn add(&self, p: &Self::Point, q: &Self::Point) -> Self::Point;

    /// Doubles a point.
    fn double(&self, p: &Self::Point) -> Self::Point {
        self.add(p, p)
    }

    /// The additive inverse of a point.
    fn negate(&self, p: &Self::Point) -> Self::Point;

    /// Checks the curve equation exactly, modulo the field prime. The
    /// identity is trivially valid.
    fn is_on_curve(&self, p: &Self::Point) -> bool;

    /// The coordinate a scheme reduces to a scalar (x for the general
    /// form, y for Edwards); `None` for the identity.
    fn coordinate<'a>(&self, p: &'a Self::Point) -> Option<&'a BigInt>;

    /// Computes `k * p` by double-and-add over the bits of `k`, least
    /// significant first. Zero and negative scalars yield the identity,
    /// and the walk stops early once the running base collapses to it.
    fn scalar_mul(&self, k: &BigInt, p: &Self::Point) -> Self::Point {
        let mut acc = self.identity();
        let mut base = p.clone();
        let mut k = k.clone();
        while k.is_positive() {
            if k.is_odd() {
                acc = self.add(&acc, &base);
            }
            k >>= 1;
            if !k.is_positive() {
                break;
            }
            base = self.double(&base);
            if base == self.identity() {
                break;
            }
        }
        acc
    }
}

/// A curve in the general form `y^2 = x^3 + a*x^2 + b*x + c (mod p)`.
///
/// With `a = 0` this is a short-Weierstrass curve; with `c = 0`, `b = 1`
/// it is a Montgomery curve. Domain parameters are fixed at construction
/// and never change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EllipticCurve {
    /// Coefficient of `x^2`.
    a: BigInt,
    /// Coefficient of `x`.
    b: BigInt,
    /// Constant term.
    c: BigInt,
    /// Field prime.
    p: BigInt,
    /// Base point.
    g: CurvePoint,
    /// Order of the base point.
    n: BigInt,
}

/// A twisted-Edwards curve `a*x^2 + y^2 = 1 + d*x^2*y^2 (mod p)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdwardsCurve {
    a: BigInt,
    d: BigInt,
    p: BigInt,
    g: EdwardsPoint,
    l: BigInt,
}

/// Divides in the field, panicking only when the divisor is not a unit.
/// Every call site guarantees a nonzero divisor against a prime modulus.
fn field_div(num: &BigInt, den: &BigInt, p: &BigInt) -> BigInt {
    arith::mod_div(num, den, p).expect("nonzero element of a prime field is invertible")
}

impl Group for EllipticCurve {
    type Point = CurvePoint;

    fn identity(&self) -> CurvePoint {
        CurvePoint::Infinity
    }

    fn generator(&self) -> &CurvePoint {
        &self.g
    }

    fn order(&self) -> &BigInt {
        &self.n
    }

    fn add(&self, p: &CurvePoint, q: &CurvePoint) -> CurvePoint {
        let (x1, y1, x2, y2) = match (p, q) {
            (CurvePoint::Infinity, _) => return q.clone(),
            (_, CurvePoint::Infinity) => return p.clone(),
            (CurvePoint::Affine { x: x1, y: y1 }, CurvePoint::Affine { x: x2, y: y2 }) => {
                (x1, y1, x2, y2)
            }
        };
        if x1 == x2 {
            // same x: either a vertical chord between inverses, which
            // closes at infinity, or the same point twice
            if (y1 + y2).mod_floor(&self.p).is_zero() {
                return CurvePoint::Infinity;
            }
            return self.double(p);
        }
        let s = field_div(&(y1 - y2), &(x1 - x2), &self.p);
        let x3 = (&s * &s - &self.a - x1 - x2).mod_floor(&self.p);
        let y3 = (&s * (x1 - &x3) - y1).mod_floor(&self.p);
        CurvePoint::Affine { x: x3, y: y3 }
    }

    fn double(&self, p: &CurvePoint) -> CurvePoint {
        let (x, y) = match p {
            CurvePoint::Infinity => return CurvePoint::Infinity,
            CurvePoint::Affine { x, y } => (x, y),
        };
        if y.is_zero() {
            // the tangent is vertical on a 2-torsion point
            return CurvePoint::Infinity;
        }
        let s = field_div(&(3 * x * x + 2 * &self.a * x + &self.b), &(2 * y), &self.p);
        let x2 = (&s * &s - &self.a - x - x).mod_floor(&self.p);
        let y2 = (&s * (x - &x2) - y).mod_floor(&self.p);
        CurvePoint::Affine { x: x2, y: y2 }
    }

    fn negate(&self, p: &CurvePoint) -> CurvePoint {
        match p {
            CurvePoint::Infinity => CurvePoint::Infinity,
            CurvePoint::Affine { x, y } => CurvePoint::Affine {
                x: x.clone(),
                y: (-y).mod_floor(&self.p),
            },
        }
    }

    fn is_on_curve(&self, p: &CurvePoint) -> bool {
        match p {
            CurvePoint::Infinity => true,
            CurvePoint::Affine { x, y } => {
                (y * y).mod_floor(&self.p)
                    == (x * x * x + &self.a * x * x + &self.b * x + &self.c).mod_floor(&self.p)
            }
        }
    }

    fn coordinate<'a>(&self, p: &'a CurvePoint) -> Option<&'a BigInt> {
        match p {
            CurvePoint::Infinity => None,
            CurvePoint::Affine { x, .. } => Some(x),
        }
    }
}

impl Group for EdwardsCurve {
    type Point = EdwardsPoint;

    fn identity(&self) -> EdwardsPoint {
        EdwardsPoint {
            x: Zero::zero(),
            y: One::one(),
        }
    }

    fn generator(&self) -> &EdwardsPoint {
        &self.g
    }

    fn order(&self) -> &BigInt {
        &self.l
    }

    fn add(&self, p: &EdwardsPoint, q: &EdwardsPoint) -> EdwardsPoint {
        if p == q {
            return self.double(p);
        }
        let EdwardsPoint { x: x1, y: y1 } = p;
        let EdwardsPoint { x: x2, y: y2 } = q;
        // the curve is complete: the denominators below are never zero
        let t = (&self.d * x1 * x2).mod_floor(&self.p);
        EdwardsPoint {
            x: field_div(&(x1 * y2 + x2 * y1), &(1 + &t * y1 * y2), &self.p),
            y: field_div(&(y1 * y2 - &self.a * x1 * x2), &(1 - &t * y1 * y2), &self.p),
        }
    }

    fn double(&self, p: &EdwardsPoint) -> EdwardsPoint {
        let EdwardsPoint { x, y } = p;
        EdwardsPoint {
            x: field_div(&(2 * x * y), &(&self.a * x * x + y * y), &self.p),
            y: field_div(
                &(y * y - &self.a * x * x),
                &(2 - &self.a * x * x - y * y),
                &self.p,
            ),
        }
    }

    fn negate(&self, p: &EdwardsPoint) -> EdwardsPoint {
        EdwardsPoint {
            x: (-&p.x).mod_floor(&self.p),
            y: p.y.clone(),
        }
    }

    fn is_on_curve(&self, p: &EdwardsPoint) -> bool {
        let EdwardsPoint { x, y } = p;
        (&self.a * x * x + y * y).mod_floor(&self.p)
            == (BigInt::from(1) + (&self.d * x * x).mod_floor(&self.p) * y * y).mod_floor(&self.p)
    }

    fn coordinate<'a>(&self, p: &'a EdwardsPoint) -> Option<&'a BigInt> {
        Some(&p.y)
    }
}
