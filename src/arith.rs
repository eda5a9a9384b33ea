//! The arith module is the modular-arithmetic kernel shared by the RSA
//! engine and the elliptic-curve groups: extended-Euclid inversion,
//! modular division, and the convention for feeding big integers into a
//! caller-supplied digest.
//!
//! # Examples
//!
//! ```
//! use num::BigInt;
//! use pkc_rs::arith::mod_inv;
//!
//! let inv = mod_inv(&BigInt::from(3), &BigInt::from(7)).unwrap();
//! assert_eq!(inv, BigInt::from(5));
//! ```

use digest::{Digest, FixedOutputReset};
use num::{BigInt, BigUint, Integer};
use num_traits::{One, Zero};

use crate::error::Error;

/// Computes the unique `y` in `[0, n)` with `x * y = 1 (mod n)` by running
/// the extended Euclidean algorithm on `(x mod n, n)`.
///
/// Fails with [`Error::NotInvertible`] when `gcd(x, n) != 1`; no inverse
/// exists in that case and returning a residue anyway would poison every
/// computation downstream.
pub fn mod_inv(x: &BigInt, n: &BigInt) -> Result<BigInt, Error> {
    let mut r = x.mod_floor(n);
    let mut r_prev = n.clone();
    let mut y: BigInt = One::one();
    let mut y_prev: BigInt = Zero::zero();
    while !r.is_zero() {
        let (q, r_next) = r_prev.div_mod_floor(&r);
        r_prev = r;
        r = r_next;

        let y_next = y_prev - &q * &y;
        y_prev = y;
        y = y_next;
    }
    // the last nonzero remainder is gcd(x, n)
    if !r_prev.is_one() {
        return Err(Error::NotInvertible {
            value: x.clone(),
            modulus: n.clone(),
        });
    }
    Ok(y_prev.mod_floor(n))
}

/// Computes `x / y (mod n)` via [`mod_inv`]. Fails when `y` has no
/// inverse modulo `n`.
pub fn mod_div(x: &BigInt, y: &BigInt, n: &BigInt) -> Result<BigInt, Error> {
    Ok((x.mod_floor(n) * mod_inv(&y.mod_floor(n), n)?).mod_floor(n))
}

/// Feeds `n` into the digest and reads the output back as a non-negative
/// integer. The encoding is the sign byte followed by the native-endian
/// bytes of each 64-bit digit, least-significant digit first.
pub fn hash_bigint<D: Digest + FixedOutputReset>(n: &BigInt, h: &mut D) -> BigInt {
    update_with(n, h);
    BigInt::from(BigUint::from_bytes_le(&h.finalize_reset()))
}

/// Hashes two integers jointly with a single digest invocation. This is
/// the challenge computation for Schnorr signatures, where the nonce
/// commitment and the message must be bound together.
pub fn hash_bigint_pair<D: Digest + FixedOutputReset>(
    a: &BigInt,
    b: &BigInt,
    h: &mut D,
) -> BigInt {
    update_with(a, h);
    update_with(b, h);
    BigInt::from(BigUint::from_bytes_le(&h.finalize_reset()))
}

fn update_with<D: Digest + FixedOutputReset>(n: &BigInt, h: &mut D) {
    Digest::update(h, [n.sign() as u8]);
    for digit in n.iter_u64_digits() {
        Digest::update(h, digit.to_ne_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::Sha256;

    #[test]
    fn mod_inv_test() {
        let cases: [(i64, i64, i64); 4] = [(3, 7, 5), (2, 11, 6), (10, 17, 12), (1, 97, 1)];
        for (x, n, expect) in cases {
            let inv = mod_inv(&x.into(), &n.into()).unwrap();
            assert_eq!(inv, expect.into(), "inverse of {} mod {}", x, n);
        }
    }

    #[test]
    fn mod_inv_reduces_input() {
        // negative and oversized inputs are reduced before the search
        let inv = mod_inv(&BigInt::from(-4), &BigInt::from(7)).unwrap();
        assert_eq!((BigInt::from(-4) * inv).mod_floor(&7.into()), One::one());
        let inv = mod_inv(&BigInt::from(24), &BigInt::from(7)).unwrap();
        assert_eq!((BigInt::from(24) * inv).mod_floor(&7.into()), One::one());
    }

    #[test]
    fn mod_inv_rejects_shared_factor() {
        match mod_inv(&BigInt::from(6), &BigInt::from(9)) {
            Err(Error::NotInvertible { value, modulus }) => {
                assert_eq!(value, 6.into());
                assert_eq!(modulus, 9.into());
            }
            other => panic!("expected NotInvertible, got {:?}", other),
        }
    }

    #[test]
    fn mod_div_test() {
        // 3 / 4 mod 7 = 3 * 2 mod 7 = 6
        assert_eq!(
            mod_div(&3.into(), &4.into(), &7.into()).unwrap(),
            BigInt::from(6)
        );
        assert!(mod_div(&3.into(), &6.into(), &9.into()).is_err());
    }

    #[test]
    fn hash_bigint_is_deterministic() {
        let mut h = Sha256::new();
        let a = hash_bigint(&BigInt::from(123456789), &mut h);
        let b = hash_bigint(&BigInt::from(123456789), &mut h);
        assert_eq!(a, b);
        assert!(a > Zero::zero());
    }

    #[test]
    fn hash_bigint_sees_the_sign() {
        let mut h = Sha256::new();
        let pos = hash_bigint(&BigInt::from(42), &mut h);
        let neg = hash_bigint(&BigInt::from(-42), &mut h);
        assert_ne!(pos, neg);
    }

    #[test]
    fn hash_bigint_pair_binds_both_inputs() {
        let mut h = Sha256::new();
        let joint = hash_bigint_pair(&1.into(), &2.into(), &mut h);
        let swapped = hash_bigint_pair(&2.into(), &1.into(), &mut h);
        assert_ne!(joint, swapped);
    }
}
