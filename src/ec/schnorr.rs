//! Schnorr signing and verification, generic over [`Group`].
//!
//! The challenge binds the nonce commitment and the message through a
//! single joint hash, so flipping either recomputes a different
//! challenge.

use digest::{Digest, FixedOutputReset};
use num::{BigInt, Integer};
use num_bigint::RandBigInt;
use num_traits::{One, Zero};
use rand::CryptoRng;

use super::SIGNING_ATTEMPTS;
use crate::arith::hash_bigint_pair;
use crate::curve::Group;
use crate::error::Error;

/// A Schnorr signature: the response scalar `s` and the challenge `e`,
/// both in `(0, n)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// Response scalar `(k - sk*e) mod n`.
    pub s: BigInt,
    /// Challenge `hash(r, m) mod n`.
    pub e: BigInt,
}

/// Signs the digest of `m` under the secret scalar `sk`.
///
/// Draws an ephemeral `k`, commits to it through the x-coordinate of
/// `k * G`, derives the challenge from commitment and message jointly,
/// and answers with `s = k - sk*e`. An attempt where any of the
/// commitment, challenge, or response reduces to zero is redrawn inside
/// the same bounded loop as ECDSA.
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
        let e = hash_bigint_pair(&r, m, h).mod_floor(n);
        if e.is_zero() {
            continue;
        }
        let s = (&k - sk * &e).mod_floor(n);
        if s.is_zero() {
            continue;
        }
        return Ok(Signature { s, e });
    }
    Err(Error::DegenerateNonces(SIGNING_ATTEMPTS))
}

/// Verifies `signature` over `m` against the public point `pk`.
///
/// Recomputes the commitment as `s*G + e*pk` and accepts iff hashing its
/// reduced coordinate with the message reproduces the challenge. The
/// public key must be a non-identity point on the curve and both
/// components must lie in `(0, n)`; otherwise the signature rejects.
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
    if *pk == curve.identity() || !curve.is_on_curve(pk) {
        return false;
    }
    let Signature { s, e } = signature;
    if !(s > &Zero::zero() && s < n && e > &Zero::zero() && e < n) {
        return false;
    }
    let recovered = curve.add(
        &curve.scalar_mul(s, curve.generator()),
        &curve.scalar_mul(e, pk),
    );
    let r = match curve.coordinate(&recovered) {
        Some(x) => x.mod_floor(n),
        None => return false,
    };
    *e == hash_bigint_pair(&r, m, h).mod_floor(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{CurvePoint, CURVE25519, SECP256K1};
    use crate::ec::KeyPair;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sha2::Sha256;

    #[test]
    fn sign_verify_round_trip() {
        let mut rng = StdRng::seed_from_u64(40);
        let mut hasher = Sha256::new();
        let keys = KeyPair::generate(&*CURVE25519, &mut rng);
        let m = BigInt::from(8675309);

        let sig = sign(&m, keys.secret(), &*CURVE25519, &mut rng, &mut hasher).unwrap();
        assert!(sig.s > Zero::zero() && sig.s < *CURVE25519.order());
        assert!(sig.e > Zero::zero() && sig.e < *CURVE25519.order());
        assert!(verify(&m, keys.public(), &sig, &*CURVE25519, &mut hasher));
    }

    #[test]
    fn round_trip_on_secp256k1() {
        let mut rng = StdRng::seed_from_u64(41);
        let mut hasher = Sha256::new();
        let keys = KeyPair::generate(&*SECP256K1, &mut rng);
        let m = BigInt::from(112233);

        let sig = sign(&m, keys.secret(), &*SECP256K1, &mut rng, &mut hasher).unwrap();
        assert!(verify(&m, keys.public(), &sig, &*SECP256K1, &mut hasher));
    }

    #[test]
    fn rejects_wrong_message() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut hasher = Sha256::new();
        let keys = KeyPair::generate(&*CURVE25519, &mut rng);

        let sig = sign(
            &BigInt::from(10),
            keys.secret(),
            &*CURVE25519,
            &mut rng,
            &mut hasher,
        )
        .unwrap();
        assert!(!verify(
            &BigInt::from(11),
            keys.public(),
            &sig,
            &*CURVE25519,
            &mut hasher
        ));
    }

    #[test]
    fn rejects_flipped_signature_bits() {
        let mut rng = StdRng::seed_from_u64(43);
        let mut hasher = Sha256::new();
        let keys = KeyPair::generate(&*CURVE25519, &mut rng);
        let m = BigInt::from(4096);

        let sig = sign(&m, keys.secret(), &*CURVE25519, &mut rng, &mut hasher).unwrap();
        for bit in [0u32, 64] {
            let flipped = Signature {
                s: &sig.s ^ (BigInt::one() << bit),
                e: sig.e.clone(),
            };
            assert!(
                !verify(&m, keys.public(), &flipped, &*CURVE25519, &mut hasher),
                "s flipped at bit {}",
                bit
            );
            let flipped = Signature {
                s: sig.s.clone(),
                e: &sig.e ^ (BigInt::one() << bit),
            };
            assert!(
                !verify(&m, keys.public(), &flipped, &*CURVE25519, &mut hasher),
                "e flipped at bit {}",
                bit
            );
        }
    }

    #[test]
    fn rejects_out_of_range_and_bad_keys() {
        let mut rng = StdRng::seed_from_u64(44);
        let mut hasher = Sha256::new();
        let keys = KeyPair::generate(&*CURVE25519, &mut rng);
        let m = BigInt::from(6174);
        let sig = sign(&m, keys.secret(), &*CURVE25519, &mut rng, &mut hasher).unwrap();

        let zero_s = Signature {
            s: Zero::zero(),
            e: sig.e.clone(),
        };
        assert!(!verify(&m, keys.public(), &zero_s, &*CURVE25519, &mut hasher));

        let oversized_e = Signature {
            s: sig.s.clone(),
            e: CURVE25519.order() + 1,
        };
        assert!(!verify(
            &m,
            keys.public(),
            &oversized_e,
            &*CURVE25519,
            &mut hasher
        ));

        assert!(!verify(
            &m,
            &CurvePoint::Infinity,
            &sig,
            &*CURVE25519,
            &mut hasher
        ));
    }
}
