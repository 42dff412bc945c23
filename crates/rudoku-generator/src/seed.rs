//! Seeds identifying generated puzzles.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display, Error};

/// A 32-byte seed identifying a generated puzzle.
///
/// Seeds render as 64 hexadecimal characters and parse back losslessly, so
/// a puzzle can be regenerated exactly from its printed seed.
///
/// # Examples
///
/// ```
/// use rudoku_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::random();
/// let restored: PuzzleSeed = seed.to_string().parse()?;
/// assert_eq!(seed, restored);
/// # Ok::<(), rudoku_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed {
    bytes: [u8; 32],
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn bytes(self) -> [u8; 32] {
        self.bytes
    }

    /// Draws a fresh seed from the thread RNG.
    #[must_use]
    pub fn random() -> Self {
        Self {
            bytes: rand::random(),
        }
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors from parsing a puzzle seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The input was not exactly 64 characters.
    #[display("expected 64 hex characters, got {len}")]
    WrongLength {
        /// Number of characters found.
        len: usize,
    },
    /// The input contained a character outside `0-9a-fA-F`.
    #[display("invalid hex character {c:?}")]
    InvalidCharacter {
        /// The offending character.
        c: char,
    },
}

fn hex_value(c: char) -> Result<u8, ParseSeedError> {
    let value = c
        .to_digit(16)
        .ok_or(ParseSeedError::InvalidCharacter { c })?;
    u8::try_from(value).map_err(|_| ParseSeedError::InvalidCharacter { c })
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 64 {
            return Err(ParseSeedError::WrongLength { len: chars.len() });
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(chars.chunks_exact(2)) {
            *byte = hex_value(pair[0])? * 16 + hex_value(pair[1])?;
        }
        Ok(Self { bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        let seed = PuzzleSeed::from_bytes([0xab; 32]);
        let rendered = seed.to_string();
        assert_eq!(rendered.len(), 64);
        assert_eq!(rendered, "ab".repeat(32));
        assert_eq!(rendered.parse::<PuzzleSeed>(), Ok(seed));
    }

    #[test]
    fn test_parse_accepts_mixed_case() {
        let seed: PuzzleSeed = format!("{}{}", "AB".repeat(16), "cd".repeat(16))
            .parse()
            .unwrap();
        assert_eq!(seed.bytes()[0], 0xab);
        assert_eq!(seed.bytes()[31], 0xcd);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(ParseSeedError::WrongLength { len: 3 })
        );
        assert_eq!(
            format!("g{}", "0".repeat(63)).parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidCharacter { c: 'g' })
        );
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }
}
