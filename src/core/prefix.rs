use crate::core::errors::{Error, Result};
use ipnetwork::Ipv4Network;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/*-------------------------------------------------------------------------------------------------
  Network Prefix
-------------------------------------------------------------------------------------------------*/

/// A canonical IPv4 CIDR block: a base address plus a prefix length, with no
/// host bits set beyond the prefix length. Construction rejects non-canonical
/// input, so a `NetworkPrefix` value is always safe to compare by exact value.
///
/// ```
/// use asnranges::NetworkPrefix;
///
/// let prefix: NetworkPrefix = "10.0.0.0/8".parse().unwrap();
/// assert_eq!(prefix.prefix_len(), 8);
/// assert!("10.0.0.1/8".parse::<NetworkPrefix>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NetworkPrefix(Ipv4Network);

impl NetworkPrefix {
    /// Create a network prefix from a base address and prefix length. Fails
    /// when the prefix length exceeds 32 or the address has host bits set.
    pub fn new(address: Ipv4Addr, prefix_len: u8) -> Result<Self> {
        let network = Ipv4Network::new(address, prefix_len)?;
        if network.ip() != network.network() {
            return Err(format!("host bits set in network prefix: {address}/{prefix_len}").into());
        }
        Ok(Self(network))
    }

    /// The base (network) address.
    pub fn network(&self) -> Ipv4Addr {
        self.0.network()
    }

    /// The prefix length, in bits. Smaller means a broader address range.
    pub fn prefix_len(&self) -> u8 {
        self.0.prefix()
    }

    /// The dotted-decimal network mask for this prefix length.
    pub fn mask(&self) -> Ipv4Addr {
        self.0.mask()
    }

    /// Non-strict containment: `true` when every address in `self` is also in
    /// `other`, including when the two prefixes are equal.
    pub fn is_subnet_of(&self, other: &NetworkPrefix) -> bool {
        self.0.is_subnet_of(other.0)
    }
}

impl FromStr for NetworkPrefix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let network: Ipv4Network = s.parse()?;
        if network.ip() != network.network() {
            return Err(format!("host bits set in network prefix: {s}").into());
        }
        Ok(Self(network))
    }
}

impl fmt::Display for NetworkPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
