//! The rsa module implements textbook RSA over [`num::BigInt`]: prime
//! generation, key-pair construction, the raw modular-exponentiation
//! transform, and the sign/verify and encrypt/decrypt wrappers built on
//! top of it.
//!
//! The caller supplies the digest; any [`digest::Digest`] works as long
//! as its output is smaller than the modulus, which holds for every
//! practical hash at the default 3072-bit key size.
//!
//! # Examples
//!
//! ```
//! use num::BigInt;
//! use sha2::{Digest, Sha256};
//!
//! let mut rng = rand::thread_rng();
//! let mut hasher = Sha256::new();
//!
//! // 512-bit keys keep the example fast; production callers use
//! // `generate_key_pair` and get the full default size.
//! let keys = pkc_rs::rsa::generate_key_pair_sized(512, &mut rng);
//! let message = BigInt::from(1_000_003);
//! let signature = keys.secret.sign(&mut hasher, &message);
//! assert!(keys.public.verify(&mut hasher, &message, &signature));
//! ```

use digest::{Digest, FixedOutputReset};
use num::{BigInt, Integer};
use num_bigint::RandBigInt;
use num_traits::{One, Zero};
use rand::CryptoRng;

use crate::arith::{hash_bigint, mod_inv};
use crate::error::Error;
use crate::prime::is_prime;

/// Modulus size, in bits, of a key pair from [`generate_key_pair`].
pub const BITS: u64 = 3072;

/// Generates a probable prime of exactly `bits` bits.
///
/// Draws one random candidate with its top bit forced to 1 and then walks
/// upward (`n`, `n + 1`, `n + 2`, ...) until [`is_prime`] passes. The
/// walk lands on the first prime above the starting draw rather than on a
/// uniformly random prime; that bias is a known property of incremental
/// search and is accepted here.
pub fn generate_prime<R: RandBigInt + CryptoRng>(bits: u64, rng: &mut R) -> BigInt {
    let mut candidate = rng.gen_biguint(bits);
    candidate.set_bit(bits - 1, true);
    let mut n = BigInt::from(candidate);
    while !is_prime(&n, rng) {
        n += 1;
    }
    n
}

/// The public half of a key pair: exponent `e` and modulus `n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    e: BigInt,
    n: BigInt,
}

/// The secret half of a key pair: exponent `d` and modulus `n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretKey {
    d: BigInt,
    n: BigInt,
}

/// A freshly generated RSA key pair. Keys are immutable once built:
/// create once, use many times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    /// The distributable half.
    pub public: PublicKey,
    /// The half that stays with the owner.
    pub secret: SecretKey,
}

/// Generates a [`BITS`]-bit key pair.
pub fn generate_key_pair<R: RandBigInt + CryptoRng>(rng: &mut R) -> KeyPair {
    generate_key_pair_sized(BITS, rng)
}

/// Generates a key pair with a modulus of roughly `bits` bits from two
/// independent `bits / 2`-bit primes.
///
/// The public exponent is the first integer coprime to
/// `lcm(p - 1, q - 1)` at or above a uniform draw, and the secret
/// exponent is its modular inverse.
pub fn generate_key_pair_sized<R: RandBigInt + CryptoRng>(bits: u64, rng: &mut R) -> KeyPair {
    let p = generate_prime(bits / 2, rng);
    let q = generate_prime(bits / 2, rng);
    let n = &p * &q;
    let lambda: BigInt = (p - BigInt::from(1)).lcm(&(q - BigInt::from(1)));
    let mut e = rng.gen_bigint_range(&Zero::zero(), &lambda);
    while !lambda.gcd(&e).is_one() {
        e += 1;
    }
    // the search above guarantees gcd(e, lambda) = 1
    let d = mod_inv(&e, &lambda).expect("e is coprime to the totient");
    KeyPair {
        public: PublicKey { e, n: n.clone() },
        secret: SecretKey { d, n },
    }
}

impl PublicKey {
    /// The raw RSA transform `m^e mod n`.
    pub fn transform(&self, m: &BigInt) -> BigInt {
        m.modpow(&self.e, &self.n)
    }

    /// Encrypts `m` for the holder of the matching secret key. The
    /// message must lie strictly between 1 and `n - 1`; anything outside
    /// that range would be silently reduced into a different residue, so
    /// it is rejected instead.
    pub fn encrypt(&self, m: &BigInt) -> Result<BigInt, Error> {
        if *m <= BigInt::one() || *m >= &self.n - 1 {
            return Err(Error::MessageOutOfRange);
        }
        Ok(self.transform(m))
    }

    /// Returns `true` iff `signature` transforms back to the digest of
    /// `m`. Never fails: a malformed signature simply does not verify.
    pub fn verify<D: Digest + FixedOutputReset>(
        &self,
        h: &mut D,
        m: &BigInt,
        signature: &BigInt,
    ) -> bool {
        self.transform(signature) == hash_bigint(m, h)
    }

    /// The public modulus.
    pub fn modulus(&self) -> &BigInt {
        &self.n
    }
}

impl SecretKey {
    /// The raw RSA transform `c^d mod n`.
    pub fn transform(&self, c: &BigInt) -> BigInt {
        c.modpow(&self.d, &self.n)
    }

    /// Recovers a message encrypted against the matching public key,
    /// under the same range rule as [`PublicKey::encrypt`].
    pub fn decrypt(&self, c: &BigInt) -> Result<BigInt, Error> {
        if *c <= BigInt::one() || *c >= &self.n - 1 {
            return Err(Error::MessageOutOfRange);
        }
        Ok(self.transform(c))
    }

    /// Signs the digest of `m`.
    pub fn sign<D: Digest + FixedOutputReset>(&self, h: &mut D, m: &BigInt) -> BigInt {
        self.transform(&hash_bigint(m, h))
    }

    /// The public modulus.
    pub fn modulus(&self) -> &BigInt {
        &self.n
    }
}
