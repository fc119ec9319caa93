//! Airline carrier code type.

use std::fmt;

/// Error returned when parsing an invalid carrier code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid carrier code: {reason}")]
pub struct InvalidCarrier {
    reason: &'static str,
}

/// A valid 2-character IATA-style airline code.
///
/// Carrier codes identify airlines (e.g., "AA" for American Airlines,
/// "B6" for JetBlue). They are always 2 uppercase ASCII letters or digits.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::Carrier;
///
/// let aa = Carrier::parse("AA").unwrap();
/// assert_eq!(aa.as_str(), "AA");
///
/// // Digits are allowed (e.g. JetBlue, Frontier)
/// assert!(Carrier::parse("B6").is_ok());
/// assert!(Carrier::parse("F9").is_ok());
///
/// // Lowercase is rejected
/// assert!(Carrier::parse("aa").is_err());
///
/// // Wrong length is rejected
/// assert!(Carrier::parse("A").is_err());
/// assert!(Carrier::parse("AAL").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Carrier([u8; 2]);

impl Carrier {
    /// Parse a carrier code from a string.
    ///
    /// The input must be exactly 2 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidCarrier> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidCarrier {
                reason: "must be exactly 2 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() && !b.is_ascii_digit() {
                return Err(InvalidCarrier {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(Carrier([bytes[0], bytes[1]]))
    }

    /// Returns the carrier code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII letters and digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Carrier({})", self.as_str())
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
