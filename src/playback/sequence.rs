// Base sequence generation and parsing

use rand::Rng;

/// Number of elements in the default generated sequence
pub const DEFAULT_SIZE: usize = 20;

/// Smallest array size the resize commands accept
pub const MIN_SIZE: usize = 5;

/// Largest array size the resize commands accept
pub const MAX_SIZE: usize = 80;

/// Smallest generated element value
pub const MIN_VALUE: i64 = 10;

/// Largest generated element value
pub const MAX_VALUE: i64 = 100;

/// Generate `len` random values in `MIN_VALUE..=MAX_VALUE`
pub fn random_sequence(len: usize) -> Vec<i64> {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| rng.random_range(MIN_VALUE..=MAX_VALUE))
        .collect()
}

/// Parse a comma-separated list of integers.
///
/// Tokens that do not parse after trimming are silently discarded, so the
/// result can be empty. Callers treat an empty result as "keep the
/// current sequence".
pub fn parse_sequence(input: &str) -> Vec<i64> {
    input
        .split(',')
        .filter_map(|token| token.trim().parse::<i64>().ok())
        .collect()
}
