//! ECDSA signing and verification, generic over [`Group`].

use digest::{Digest, FixedOutputReset};
use num::{BigInt, Integer};
use num_bigint::RandBigInt;
use num_traits::{One, Zero};
use rand::CryptoRng;

use super::SIGNING_ATTEMPTS;
use crate::arith::{hash_bigint, mod_div, mod_inv};
use crate::curve::Group;
use crate::error::Error;

/// An ECDSA signature. Both components lie in `(0, n)` where `n` is the
/// group order; the sign loop never emits a zero component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// The reduced x-coordinate of the nonce commitment.
    pub r: BigInt,
    /// The proof scalar `(hash(m) + r*sk) / k mod n`.
    pub s: BigInt,
}

/// Signs the digest of `m` under the secret scalar `sk`.
///
/// Each attempt draws a fresh ephemeral `k` from `[1, n - 1]`; an attempt
/// that produces a zero `r` or `s` is thrown away and redrawn, since a
/// zero component makes the signature algebraically worthless. The loop
/// is bounded: exhausting it means the random source is handing out
/// degenerate nonces and the call fails with
/// [`Error::DegenerateNonces`].
pub fn sign<D, C, R>(
    m: &BigInt,
    sk: &BigInt,
    curve: &'static C,
    rng: &mut R,
    h: &mut D,
) -> Result<Signature, Error>
where
    D: Digest + FixedOutputReset,
    C: Group,
    R: RandBigInt + CryptoRng,
{
    let n = curve.order();
    let z = hash_bigint(m, h).mod_floor(n);
    for _ in 0..SIGNING_ATTEMPTS {
        let k = rng.gen_bigint_range(&One::one(), n);
        let commitment = curve.scalar_mul(&k, curve.generator());
        let r = match curve.coordinate(&commitment) {
            Some(x) => x.mod_floor(n),
            None => continue,
        };
        if r.is_zero() {
            continue;
        }
        let s = mod_div(&(&z + &r * sk), &k, n)?;
        if s.is_zero() {
            continue;
        }
        return Ok(Signature { r, s });
    }
    Err(Error::DegenerateNonces(SIGNING_ATTEMPTS))
}

/// Verifies `signature` over `m` against the public point `pk`.
///
/// The public key is gated first: it must not be the identity, must
/// satisfy the curve equation, and must lie in the prime-order subgroup
/// (`n * pk` is the identity). Both signature components must lie in
/// `(0, n)`. Any gate failing rejects; verification never errors on
/// malformed input.
pub fn verify<D, C>(
    m: &BigInt,
    pk: &C::Point,
    signature: &Signature,
    curve: &'static C,
    h: &mut D,
) -> bool
where
    D: Digest + FixedOutputReset,
    C: Group,
{
    let n = curve.order();
    if *pk == curve.identity()
        || !curve.is_on_curve(pk)
        || curve.scalar_mul(n, pk) != curve.identity()
    {
        return false;
    }
    let Signature { r, s } = signature;
    if !(r > &Zero::zero() && r < n && s > &Zero::zero() && s < n) {
        return false;
    }
    let z = hash_bigint(m, h).mod_floor(n);
    let s_inv = match mod_inv(s, n) {
        Ok(inv) => inv,
        Err(_) => return false,
    };
    let u1 = (&z * &s_inv).mod_floor(n);
    let u2 = (r * &s_inv).mod_floor(n);
    let recovered = curve.add(
        &curve.scalar_mul(&u1, curve.generator()),
        &curve.scalar_mul(&u2, pk),
    );
    match curve.coordinate(&recovered) {
        Some(x) => *r == x.mod_floor(n),
        None => false,
    }
}
