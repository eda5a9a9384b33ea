//! Domain parameters for the shipped curves. Each set is a process-wide
//! constant, initialized once on first use and read-only afterwards.

use num::BigInt;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

use super::{CurvePoint, EdwardsCurve, EdwardsPoint, EllipticCurve};
use crate::arith;

/// Curve25519 in its Montgomery shape `y^2 = x^3 + 486662*x^2 + x` over
/// the field of `2^255 - 19` elements, with the conventional base point
/// at `x = 9` and its prime subgroup order.
pub static CURVE25519: Lazy<EllipticCurve> = Lazy::new(|| EllipticCurve {
    a: 486662.into(),
    b: One::one(),
    c: Zero::zero(),
    p: (BigInt::one() << 255u32) - 19,
    g: CurvePoint::Affine {
        x: 9.into(),
        y: BigInt::parse_bytes(
            b"43114425171068552920764898935933967039370386198203806730763910166200978582548",
            10,
        )
        .unwrap(),
    },
    n: (BigInt::one() << 252u32)
        + BigInt::parse_bytes(b"27742317777372353535851937790883648493", 10).unwrap(),
});

/// secp256k1, the Bitcoin curve `y^2 = x^3 + 7`.
pub static SECP256K1: Lazy<EllipticCurve> = Lazy::new(|| EllipticCurve {
    a: Zero::zero(),
    b: Zero::zero(),
    c: 7.into(),
    p: BigInt::parse_bytes(
        b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
        16,
    )
    .unwrap(),
    g: CurvePoint::Affine {
        x: BigInt::parse_bytes(
            b"79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
            16,
        )
        .unwrap(),
        y: BigInt::parse_bytes(
            b"483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
            16,
        )
        .unwrap(),
    },
    n: BigInt::parse_bytes(
        b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
        16,
    )
    .unwrap(),
});

/// NIST P-256 (secp256r1), `y^2 = x^3 - 3*x + b`.
pub static P256: Lazy<EllipticCurve> = Lazy::new(|| EllipticCurve {
    a: Zero::zero(),
    b: (-3).into(),
    c: BigInt::parse_bytes(
        b"41058363725152142129326129780047268409114441015993725554835256314039467401291",
        10,
    )
    .unwrap(),
    p: (BigInt::one() << 256u32) - (BigInt::one() << 224u32)
        + (BigInt::one() << 192u32)
        + (BigInt::one() << 96u32)
        - 1,
    g: CurvePoint::Affine {
        x: BigInt::parse_bytes(
            b"6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
            16,
        )
        .unwrap(),
        y: BigInt::parse_bytes(
            b"4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5",
            16,
        )
        .unwrap(),
    },
    n: BigInt::parse_bytes(
        b"FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551",
        16,
    )
    .unwrap(),
});

/// Ed25519, the twisted-Edwards companion of [`CURVE25519`]. They share
/// the field and the subgroup order; the Edwards constant `d` and the
/// base-point y-coordinate are exact field divisions.
pub static ED25519: Lazy<EdwardsCurve> = Lazy::new(|| {
    let p = (BigInt::one() << 255u32) - 19;
    let d = arith::mod_div(&(-121665).into(), &121666.into(), &p)
        .expect("121666 is a unit in the field");
    let g = EdwardsPoint {
        x: BigInt::parse_bytes(
            b"15112221349535400772501151409588531511454012693041857206046113283949847762202",
            10,
        )
        .unwrap(),
        y: arith::mod_div(&4.into(), &5.into(), &p).expect("5 is a unit in the field"),
    };
    let l = (BigInt::one() << 252u32)
        + BigInt::parse_bytes(b"27742317777372353535851937790883648493", 10).unwrap();
    EdwardsCurve {
        a: (-1).into(),
        d,
        p,
        g,
        l,
    }
});
