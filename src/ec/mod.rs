//! Key agreement and signature schemes over the groups in
//! [`crate::curve`]: Diffie–Hellman shared secrets, ECDSA, Schnorr, and
//! EdDSA. The schemes are generic over [`Group`], so the same code runs
//! over Curve25519, secp256k1, P-256, or Ed25519.
//!
//! The caller supplies the digest and the random source; the library
//! never constructs either. The security of everything here rests on the
//! random source being cryptographically strong, which the `CryptoRng`
//! bound asks for but cannot enforce.
//!
//! # Examples
//!
//! ```
//! use num::BigInt;
//! use pkc_rs::curve::CURVE25519;
//! use pkc_rs::ec::{ecdsa, KeyPair};
//! use sha2::{Digest, Sha512};
//!
//! let mut rng = rand::thread_rng();
//! let mut hasher = Sha512::new();
//!
//! let keys = KeyPair::generate(&*CURVE25519, &mut rng);
//! let message = BigInt::from(1234567);
//! let signature =
//!     ecdsa::sign(&message, keys.secret(), &*CURVE25519, &mut rng, &mut hasher).unwrap();
//! assert!(ecdsa::verify(&message, keys.public(), &signature, &*CURVE25519, &mut hasher));
//! ```

use digest::{Digest, FixedOutputReset};
use num::BigInt;
use num_bigint::RandBigInt;
use num_traits::One;
use rand::CryptoRng;

use crate::arith::hash_bigint;
use crate::curve::Group;
use crate::error::Error;

pub mod ecdsa;
pub mod eddsa;
pub mod schnorr;

/// Attempts granted to the ephemeral-nonce loops before signing fails
/// with [`Error::DegenerateNonces`]. Any retry at all is already a
/// once-in-a-lifetime event with an honest random source.
pub(crate) const SIGNING_ATTEMPTS: usize = 100;

/// A secret scalar and the public point derived from it. The public key
/// is always `secret * G`; no other construction exists.
pub struct KeyPair<C: Group + 'static> {
    curve: &'static C,
    secret: BigInt,
    public: C::Point,
}

impl<C: Group> KeyPair<C> {
    /// Draws a secret uniformly from `[1, n - 1]` and derives the public
    /// point.
    pub fn generate<R: RandBigInt + CryptoRng>(curve: &'static C, rng: &mut R) -> Self {
        let secret = rng.gen_bigint_range(&One::one(), curve.order());
        let public = curve.scalar_mul(&secret, curve.generator());
        KeyPair {
            curve,
            secret,
            public,
        }
    }

    /// The group this pair belongs to.
    pub fn curve(&self) -> &'static C {
        self.curve
    }

    /// The public point.
    pub fn public(&self) -> &C::Point {
        &self.public
    }

    /// The secret scalar.
    pub fn secret(&self) -> &BigInt {
        &self.secret
    }
}

/// Derives the Diffie–Hellman shared secret `hash(coord(sk * peer_pk))`.
///
/// Both sides arrive at the same point, so both derive the same value.
/// This primitive does not validate the peer's point; the caller decides
/// where that check belongs. A peer point that collapses the product to
/// the identity yields [`Error::IdentityPoint`] since there is no
/// coordinate to hash.
pub fn shared_secret<D: Digest + FixedOutputReset, C: Group>(
    curve: &'static C,
    sk: &BigInt,
    peer_pk: &C::Point,
    h: &mut D,
) -> Result<BigInt, Error> {
    let shared = curve.scalar_mul(sk, peer_pk);
    let coord = curve.coordinate(&shared).ok_or(Error::IdentityPoint)?;
    Ok(hash_bigint(coord, h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{CurvePoint, CURVE25519, SECP256K1};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sha2::Sha256;

    #[test]
    fn generated_public_keys_are_on_curve() {
        let mut rng = StdRng::seed_from_u64(20);
        let keys = KeyPair::generate(&*CURVE25519, &mut rng);
        assert!(CURVE25519.is_on_curve(keys.public()));
        assert!(keys.secret() >= &BigInt::from(1));
        assert!(keys.secret() < CURVE25519.order());
    }

    #[test]
    fn shared_secret_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut hasher = Sha256::new();
        for _ in 0..2 {
            let alice = KeyPair::generate(&*CURVE25519, &mut rng);
            let bob = KeyPair::generate(&*CURVE25519, &mut rng);
            let from_alice =
                shared_secret(&*CURVE25519, alice.secret(), bob.public(), &mut hasher).unwrap();
            let from_bob =
                shared_secret(&*CURVE25519, bob.secret(), alice.public(), &mut hasher).unwrap();
            assert_eq!(from_alice, from_bob);
        }
    }

    #[test]
    fn shared_secret_works_on_other_curves() {
        let mut rng = StdRng::seed_from_u64(22);
        let mut hasher = Sha256::new();
        let alice = KeyPair::generate(&*SECP256K1, &mut rng);
        let bob = KeyPair::generate(&*SECP256K1, &mut rng);
        let from_alice =
            shared_secret(&*SECP256K1, alice.secret(), bob.public(), &mut hasher).unwrap();
        let from_bob =
            shared_secret(&*SECP256K1, bob.secret(), alice.public(), &mut hasher).unwrap();
        assert_eq!(from_alice, from_bob);
    }

    #[test]
    fn identity_peer_is_rejected() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut hasher = Sha256::new();
        let alice = KeyPair::generate(&*CURVE25519, &mut rng);
        let result = shared_secret(
            &*CURVE25519,
            alice.secret(),
            &CurvePoint::Infinity,
            &mut hasher,
        );
        assert_eq!(result, Err(Error::IdentityPoint));
    }
}
