use crate::core::errors::Error;
use std::fmt;
use std::str::FromStr;

/*-------------------------------------------------------------------------------------------------
  ASN Identifier
-------------------------------------------------------------------------------------------------*/

/// An autonomous-system number. Parsed from digit-only tokens; compared and
/// sorted numerically, so leading zeros normalize away (`"0456"` == `"456"`).
/// Storage is wider than 32 bits to leave headroom past 4-byte ASNs.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AsnIdentifier(u64);

impl AsnIdentifier {
    /// The numeric value of this ASN.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for AsnIdentifier {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for AsnIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("invalid ASN token: {s:?}").into());
        }
        Ok(Self(s.parse()?))
    }
}

impl fmt::Display for AsnIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
