//! Short code generation.
//!
//! Codes are 6 characters drawn uniformly and independently from the 62-symbol
//! alphabet `A-Z a-z 0-9`.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 6;

/// Number of generation attempts before a create gives up with a conflict.
pub const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Source of candidate short codes.
///
/// Strategies call [`generate`](Self::generate) once per attempt; tests swap in
/// a mock to force collisions.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces a fresh candidate code.
    fn generate(&self) -> String;
}

/// Default generator backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code(CODE_LENGTH)
    }
}

/// Generates a random alphanumeric code of `length` characters.
///
/// # Examples
///
/// ```
/// use shortlink::utils::code_generator::generate_code;
///
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
