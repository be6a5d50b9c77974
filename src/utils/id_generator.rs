//! Random identifier generation with denylist filtering.
//!
//! Identifiers are drawn uniformly at random, one character position at a
//! time, from a configured URL-safe alphabet using the `nanoid` crate (backed
//! by a cryptographically secure RNG). Per-position uniformity is what keeps
//! the alphabet's collision-probability math honest — see
//! <https://zelark.github.io/nano-id-cc/> for length/collision trade-offs.

use crate::error::AppError;
use crate::utils::denylist::Denylist;

/// Default alphabet: every character is safe in a URL path without encoding.
pub const DEFAULT_ALPHABET: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz-";

/// Default identifier length.
pub const DEFAULT_ID_LENGTH: usize = 10;

/// Default bound on generation attempts before giving up on the denylist.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Configuration for [`IdGenerator`], validated by [`IdGenerator::new`].
///
/// Field defaults (via [`Default`]):
///
/// - `alphabet` — [`DEFAULT_ALPHABET`] (64 URL-safe characters)
/// - `length` — [`DEFAULT_ID_LENGTH`]
/// - `max_attempts` — [`DEFAULT_MAX_ATTEMPTS`]
/// - `denylist` — `None`, meaning the embedded [`Denylist::default`] list;
///   pass `Some(Denylist::empty())` to disable filtering entirely
#[derive(Debug, Clone)]
pub struct IdGeneratorConfig {
    pub alphabet: String,
    pub length: usize,
    pub max_attempts: u32,
    pub denylist: Option<Denylist>,
}

impl Default for IdGeneratorConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            length: DEFAULT_ID_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            denylist: None,
        }
    }
}

/// Generates fixed-length random identifiers that pass the denylist.
pub struct IdGenerator {
    alphabet: Vec<char>,
    length: usize,
    max_attempts: u32,
    denylist: Denylist,
}

impl IdGenerator {
    /// Validates the configuration and builds a generator.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the alphabet is empty, `length` is
    /// zero, or `max_attempts` is zero.
    pub fn new(config: IdGeneratorConfig) -> Result<Self, AppError> {
        if config.alphabet.is_empty() {
            return Err(AppError::config("ID alphabet must not be empty"));
        }

        if config.length == 0 {
            return Err(AppError::config("ID length must be greater than 0"));
        }

        if config.max_attempts == 0 {
            return Err(AppError::config("ID max attempts must be at least 1"));
        }

        Ok(Self {
            alphabet: config.alphabet.chars().collect(),
            length: config.length,
            max_attempts: config.max_attempts,
            denylist: config.denylist.unwrap_or_default(),
        })
    }

    /// Generates an identifier that does not match the denylist.
    ///
    /// Draws a fresh random candidate per attempt and returns the first
    /// allowed one. With an empty denylist the first attempt always wins.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::IdGenerationExhausted`] when every candidate
    /// within the attempt budget was denylisted.
    pub fn generate(&self) -> Result<String, AppError> {
        let length = self.length;
        for _ in 0..self.max_attempts {
            let id = nanoid::nanoid!(length, &self.alphabet);

            if self.denylist.is_allowed(&id) {
                return Ok(id);
            }
        }

        Err(AppError::IdGenerationExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Configured identifier length.
    pub fn length(&self) -> usize {
        self.length
    }
}
