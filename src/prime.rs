//! Probabilistic primality testing: a trial-division screen against a
//! fixed table of small primes, then Miller–Rabin. Only RSA key
//! generation draws on this module, but the functions stand on their own.

use num::{BigInt, Integer};
use num_bigint::RandBigInt;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

/// Number of primes held by the trial-division screen.
const SMALL_PRIME_COUNT: usize = 50;

/// Rounds of Miller–Rabin run by [`is_prime`]. At 40 rounds the
/// false-positive bound of `4^-k` is far below anything observable.
pub const MILLER_RABIN_ROUNDS: usize = 40;

/// The first [`SMALL_PRIME_COUNT`] primes, sieved once on first use and
/// read-only afterwards.
static SMALL_PRIMES: Lazy<Vec<u32>> = Lazy::new(|| {
    let mut primes: Vec<u32> = Vec::with_capacity(SMALL_PRIME_COUNT);
    let mut candidate = 2u32;
    while primes.len() < SMALL_PRIME_COUNT {
        if primes.iter().all(|p| candidate % *p != 0) {
            primes.push(candidate);
        }
        candidate += 1;
    }
    primes
});

/// Trial division against the small-prime table. `Some` is a definite
/// verdict; `None` means the candidate survived the screen and needs the
/// full test.
fn small_prime_screen(n: &BigInt) -> Option<bool> {
    for p in SMALL_PRIMES.iter().copied() {
        if *n == p.into() {
            return Some(true);
        }
        if (n % p).is_zero() {
            return Some(false);
        }
    }
    None
}

/// The Miller–Rabin primality test with `rounds` independent witnesses.
///
/// Writes `n - 1 = 2^r * d` with `d` odd and draws each base uniformly
/// from `[2, n - 2]`. A round passes when `a^d` lands on `1` or `n - 1`,
/// or when one of up to `r - 1` squarings reaches `n - 1`; a single
/// failing round proves `n` composite and short-circuits.
pub fn miller_rabin<R: RandBigInt>(n: &BigInt, rounds: usize, rng: &mut R) -> bool {
    if *n < 5.into() {
        return *n == 2.into() || *n == 3.into();
    }
    if n.is_even() {
        return false;
    }
    let n_minus_one: BigInt = n - 1;
    let mut d = n_minus_one.clone();
    let mut r = 0usize;
    while d.is_even() {
        d >>= 1;
        r += 1;
    }
    'rounds: for _ in 0..rounds {
        let a = rng.gen_bigint_range(&2.into(), &n_minus_one);
        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..r {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'rounds;
            }
        }
        return false;
    }
    true
}

/// Returns whether `n` is (probably) prime: the trial-division screen
/// first, then [`MILLER_RABIN_ROUNDS`] rounds of Miller–Rabin for
/// whatever survives it.
pub fn is_prime<R: RandBigInt>(n: &BigInt, rng: &mut R) -> bool {
    if *n < 2.into() {
        return false;
    }
    match small_prime_screen(n) {
        Some(verdict) => verdict,
        None => miller_rabin(n, MILLER_RABIN_ROUNDS, rng),
    }
}
