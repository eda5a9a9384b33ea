//! Asymmetric-cryptography primitives over exact big-integer arithmetic:
//! RSA on one side, a family of elliptic-curve schemes (Diffie–Hellman,
//! ECDSA, Schnorr, EdDSA) on the other. The two sides share nothing but
//! the modular-arithmetic kernel in [`arith`] and the same calling
//! convention: the consumer supplies a [`digest::Digest`] and a seeded
//! random source, the library owns key generation, the number theory,
//! and the protocols.
//!
//! None of the arithmetic here is constant-time; operation timing can
//! depend on secret values. Deployments that face side-channel attackers
//! need a hardened implementation instead.
//!
//! # Examples
//!
//! Generating an elliptic-curve key pair and producing a signature over
//! Curve25519:
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
//!
//! Agreeing on a shared secret:
//!
//! ```
//! use pkc_rs::curve::CURVE25519;
//! use pkc_rs::ec::{self, KeyPair};
//! use sha2::{Digest, Sha256};
//!
//! let mut rng = rand::thread_rng();
//! let mut hasher = Sha256::new();
//!
//! let alice = KeyPair::generate(&*CURVE25519, &mut rng);
//! let bob = KeyPair::generate(&*CURVE25519, &mut rng);
//! let k_a = ec::shared_secret(&*CURVE25519, alice.secret(), bob.public(), &mut hasher).unwrap();
//! let k_b = ec::shared_secret(&*CURVE25519, bob.secret(), alice.public(), &mut hasher).unwrap();
//! assert_eq!(k_a, k_b);
//! ```

#![deny(unsafe_code)]

pub mod arith;
pub mod curve;
pub mod ec;
pub mod error;
pub mod prime;
pub mod rsa;

pub use error::Error;
