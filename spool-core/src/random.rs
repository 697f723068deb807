use rand::{Rng, distributions::Alphanumeric, thread_rng};
use std::ops::RangeInclusive;

/// Unbounded source of random integers in a range, exposed as an infinite
/// iterator. Used by tests to generate argument values.
#[derive(Debug, Clone)]
pub struct RandomInts {
    range: RangeInclusive<i64>,
}

impl RandomInts {
    pub fn new(range: RangeInclusive<i64>) -> Self {
        Self { range }
    }
}

impl Default for RandomInts {
    fn default() -> Self {
        Self::new(i64::MIN..=i64::MAX)
    }
}

impl Iterator for RandomInts {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        Some(thread_rng().gen_range(self.range.clone()))
    }
}

/// Unbounded source of random ASCII letters and digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAlphanumerics;

impl Iterator for RandomAlphanumerics {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        Some(thread_rng().sample(Alphanumeric) as char)
    }
}

/// A random ASCII alphanumeric string of the given length.
pub fn random_token(len: usize) -> String {
    RandomAlphanumerics.take(len).collect()
}
