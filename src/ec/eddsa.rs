//! EdDSA-style signing and verification, generic over [`Group`].
//!
//! Unlike ECDSA and Schnorr, the nonce commitment travels inside the
//! signature as a full group point, and verification is a single group
//! equation `s*G = r + hash(m)*pk` with no modular inversion anywhere.

use std::fmt;

use digest::{Digest, FixedOutputReset};
use num::{BigInt, Integer};
use num_bigint::RandBigInt;
use num_traits::Zero;
use rand::CryptoRng;

use crate::arith::hash_bigint;
use crate::curve::Group;

/// An EdDSA signature: the commitment point and the response scalar.
pub struct Signature<C: Group> {
    /// Commitment `k * G`.
    pub r: C::Point,
    /// Response `(k + hash(m)*sk) mod n`.
    pub s: BigInt,
}

impl<C: Group> Clone for Signature<C> {
    fn clone(&self) -> Self {
        Signature {
            r: self.r.clone(),
            s: self.s.clone(),
        }
    }
}

impl<C: Group> fmt::Debug for Signature<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("r", &self.r)
            .field("s", &self.s)
            .finish()
    }
}

/// Signs the digest of `m` under the secret scalar `sk`. Infallible: no
/// component of the signature can degenerate, so there is no retry loop.
pub fn sign<D, C, R>(
    m: &BigInt,
    sk: &BigInt,
    curve: &'static C,
    rng: &mut R,
    h: &mut D,
) -> Signature<C>
where
    D: Digest + FixedOutputReset,
    C: Group,
    R: RandBigInt + CryptoRng,
{
    let n = curve.order();
    let k = rng.gen_bigint_range(&Zero::zero(), n);
    let r = curve.scalar_mul(&k, curve.generator());
    let z = hash_bigint(m, h).mod_floor(n);
    let s = (k + z * sk).mod_floor(n);
    Signature { r, s }
}

/// Verifies `signature` over `m` against the public point `pk`.
///
/// The public key gate matches ECDSA: non-identity, on the curve, and in
/// the prime-order subgroup. The check itself is
/// `s*G = r + hash(m)*pk`.
pub fn verify<D, C>(
    m: &BigInt,
    pk: &C::Point,
    signature: &Signature<C>,
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
    let z = hash_bigint(m, h).mod_floor(n);
    let lhs = curve.scalar_mul(&signature.s, curve.generator());
    let rhs = curve.add(&signature.r, &curve.scalar_mul(&z, pk));
    lhs == rhs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{EdwardsPoint, ED25519};
    use crate::ec::KeyPair;
    use num_traits::One;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sha2::Sha512;

    #[test]
    fn sign_verify_round_trip() {
        let mut rng = StdRng::seed_from_u64(50);
        let mut hasher = Sha512::new();
        let keys = KeyPair::generate(&*ED25519, &mut rng);
        let m = BigInt::from(20220101);

        let sig = sign(&m, keys.secret(), &*ED25519, &mut rng, &mut hasher);
        assert!(ED25519.is_on_curve(&sig.r));
        assert!(verify(&m, keys.public(), &sig, &*ED25519, &mut hasher));
    }

    #[test]
    fn rejects_wrong_message() {
        let mut rng = StdRng::seed_from_u64(51);
        let mut hasher = Sha512::new();
        let keys = KeyPair::generate(&*ED25519, &mut rng);

        let sig = sign(
            &BigInt::from(7),
            keys.secret(),
            &*ED25519,
            &mut rng,
            &mut hasher,
        );
        assert!(!verify(
            &BigInt::from(8),
            keys.public(),
            &sig,
            &*ED25519,
            &mut hasher
        ));
    }

    #[test]
    fn rejects_tampered_components() {
        let mut rng = StdRng::seed_from_u64(52);
        let mut hasher = Sha512::new();
        let keys = KeyPair::generate(&*ED25519, &mut rng);
        let m = BigInt::from(123123);
        let sig = sign(&m, keys.secret(), &*ED25519, &mut rng, &mut hasher);

        let bad_s = Signature::<crate::curve::EdwardsCurve> {
            r: sig.r.clone(),
            s: &sig.s ^ BigInt::one(),
        };
        assert!(!verify(&m, keys.public(), &bad_s, &*ED25519, &mut hasher));

        let bad_r = Signature {
            r: ED25519.negate(&sig.r),
            s: sig.s.clone(),
        };
        assert!(!verify(&m, keys.public(), &bad_r, &*ED25519, &mut hasher));
    }

    #[test]
    fn rejects_bad_public_keys() {
        let mut rng = StdRng::seed_from_u64(53);
        let mut hasher = Sha512::new();
        let keys = KeyPair::generate(&*ED25519, &mut rng);
        let m = BigInt::from(64206);
        let sig = sign(&m, keys.secret(), &*ED25519, &mut rng, &mut hasher);

        // the Edwards identity (0, 1) is gated out
        assert!(!verify(&m, &ED25519.identity(), &sig, &*ED25519, &mut hasher));

        let off_curve = EdwardsPoint {
            x: BigInt::from(3),
            y: BigInt::from(4),
        };
        assert!(!verify(&m, &off_curve, &sig, &*ED25519, &mut hasher));
    }

    #[test]
    fn seeded_signing_is_reproducible() {
        let m = BigInt::from(31337);
        let mut hasher = Sha512::new();

        let mut rng_a = StdRng::seed_from_u64(54);
        let keys_a = KeyPair::generate(&*ED25519, &mut rng_a);
        let sig_a = sign(&m, keys_a.secret(), &*ED25519, &mut rng_a, &mut hasher);

        let mut rng_b = StdRng::seed_from_u64(54);
        let keys_b = KeyPair::generate(&*ED25519, &mut rng_b);
        let sig_b = sign(&m, keys_b.secret(), &*ED25519, &mut rng_b, &mut hasher);

        assert_eq!(sig_a.r, sig_b.r);
        assert_eq!(sig_a.s, sig_b.s);
    }
}
