//! Name generator integration: fetching the remote list page and extracting
//! candidate names from it.

pub mod extract;
pub mod fetch;

use rand::RngExt;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length category of the requested name list. Selects which variant of the
/// generator page is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameLength {
    Short,
    Medium,
    Long,
}

impl NameLength {
    pub const ALL: [NameLength; 3] = [NameLength::Short, NameLength::Medium, NameLength::Long];

    pub fn as_str(&self) -> &'static str {
        match self {
            NameLength::Short => "short",
            NameLength::Medium => "medium",
            NameLength::Long => "long",
        }
    }

    /// Pick a category uniformly at random, for commands that omit one.
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for NameLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameLength {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(NameLength::Short),
            "medium" => Ok(NameLength::Medium),
            "long" => Ok(NameLength::Long),
            _ => Err(()),
        }
    }
}

/// Failure modes of the remote fetch. A non-success HTTP status is folded
/// into `Transport`; the body is never inspected in that case.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("timeout calling the name API")]
    Timeout,
    #[error("transport error calling the name API: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_from_str() {
        assert_eq!("short".parse(), Ok(NameLength::Short));
        assert_eq!("MEDIUM".parse(), Ok(NameLength::Medium));
        assert_eq!("Long".parse(), Ok(NameLength::Long));
        assert_eq!("tiny".parse::<NameLength>(), Err(()));
        assert_eq!("".parse::<NameLength>(), Err(()));
    }

    #[test]
    fn test_length_display_roundtrip() {
        for length in NameLength::ALL {
            assert_eq!(length.to_string().parse(), Ok(length));
        }
    }

    #[test]
    fn test_random_is_a_valid_category() {
        for _ in 0..50 {
            assert!(NameLength::ALL.contains(&NameLength::random()));
        }
    }
}
