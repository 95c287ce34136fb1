//! Pseudo-random helpers for Rono programs.
//!
//! A single process-wide source is seeded from the wall clock on first use.
//! Range reduction is a plain modulo over the generator output, so ranges
//! that do not divide 2^64 carry a small bias.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

pub const ALPHANUMERIC: &[u8; 62] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Returned by [`RandomSource::char_in_range`] when a bound is missing.
pub const FALLBACK_CHAR: char = 'a';

pub struct RandomSource<R = StdRng> {
    rng: R,
}

impl RandomSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        tracing::debug!(seed, "seeding random source from wall clock");
        Self::seeded(seed)
    }
}

impl<R: RngCore> RandomSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn below(&mut self, span: u128) -> u128 {
        u128::from(self.rng.next_u64()) % span
    }

    /// Uniform pick from the closed range; bounds may come in either order.
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if min > max { (max, min) } else { (min, max) };
        if lo == hi {
            return lo;
        }
        // At most 2^64, so the full i64 range needs no special case.
        let span = (i128::from(hi) - i128::from(lo) + 1) as u128;
        (i128::from(lo) + self.below(span) as i128) as i64
    }

    /// Pick from `[min, max)`; bounds may come in either order.
    pub fn float(&mut self, min: f64, max: f64) -> f64 {
        let (lo, hi) = if min > max { (max, min) } else { (min, max) };
        if lo == hi {
            return lo;
        }
        let u = self.rng.gen::<f64>();
        let span = hi - lo;
        let value = if span.is_finite() {
            lo + u * span
        } else {
            // Wide ranges such as (-MAX, MAX) overflow the span; interpolate.
            lo * (1.0 - u) + hi * u
        };
        // Rounding can land exactly on `hi`.
        if lo <= value && value < hi {
            value
        } else {
            lo
        }
    }

    /// `None` when a buffer of `length` bytes cannot be allocated.
    pub fn string(&mut self, length: i64) -> Option<String> {
        if length <= 0 {
            return Some(String::new());
        }
        let length = usize::try_from(length).ok()?;
        let mut out = String::new();
        // One spare byte so the C caller's terminator fits without regrowing.
        out.try_reserve_exact(length.checked_add(1)?).ok()?;

        let span = ALPHANUMERIC.len() as u128;
        for _ in 0..length {
            out.push(char::from(ALPHANUMERIC[self.below(span) as usize]));
        }
        Some(out)
    }

    /// Only the first character of each bound counts. Missing or empty
    /// bounds give [`FALLBACK_CHAR`].
    pub fn char_in_range(&mut self, from: Option<&str>, to: Option<&str>) -> char {
        let (Some(from), Some(to)) = (first_char(from), first_char(to)) else {
            return FALLBACK_CHAR;
        };
        let (lo, hi) = if from > to { (to, from) } else { (from, to) };
        let span = u128::from(u32::from(hi) - u32::from(lo)) + 1;
        loop {
            let code = u32::from(lo) + self.below(span) as u32;
            // Surrogates are not chars; draw again.
            if let Some(c) = char::from_u32(code) {
                return c;
            }
        }
    }
}

fn first_char(s: Option<&str>) -> Option<char> {
    s?.chars().next()
}

static SOURCE: OnceLock<Mutex<RandomSource>> = OnceLock::new();

fn source() -> MutexGuard<'static, RandomSource> {
    SOURCE
        .get_or_init(|| Mutex::new(RandomSource::from_clock()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Seeds the process-wide source if nothing has used it yet.
pub fn init() {
    SOURCE.get_or_init(|| Mutex::new(RandomSource::from_clock()));
}

pub fn random_int(min: i64, max: i64) -> i64 {
    source().int(min, max)
}

pub fn random_float(min: f64, max: f64) -> f64 {
    source().float(min, max)
}

pub fn random_string(length: i64) -> Option<String> {
    source().string(length)
}

pub fn random_char_in_range(from: Option<&str>, to: Option<&str>) -> char {
    source().char_in_range(from, to)
}
