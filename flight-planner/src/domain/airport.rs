//! Airport code type.

use std::fmt;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirport {
    reason: &'static str,
}

/// A valid 3-letter IATA-style airport code.
///
/// Airport codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `Airport` value is valid by construction.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::Airport;
///
/// let sfo = Airport::parse("SFO").unwrap();
/// assert_eq!(sfo.as_str(), "SFO");
///
/// // Lowercase is rejected
/// assert!(Airport::parse("sfo").is_err());
///
/// // Wrong length is rejected
/// assert!(Airport::parse("SF").is_err());
/// assert!(Airport::parse("SFOX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Airport([u8; 3]);

impl Airport {
    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAirport> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAirport {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidAirport {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(Airport([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Airport({})", self.as_str())
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
