//! Collect and reduce the IP ranges announced by autonomous systems.
//!
//! `asnranges` accumulates the IPv4 prefixes announced by a set of ASNs
//! (fetched one ASN at a time from a BGP data API) across one or more
//! collection passes, deduplicates them, and reduces the result to the
//! minimal set of non-nested CIDR blocks. A secondary path harvests the ASN
//! identifiers registered to a country from a paginated report.
//!
//! ```no_run
//! use asnranges::{Client, Command, QueuedCommands, SessionDriver};
//!
//! let client = Client::new().unwrap();
//! let mut driver = SessionDriver::new(&client);
//!
//! let mut commands = QueuedCommands::from(vec![
//!     Command::ScanAsn(12880.into()),
//!     Command::ScanPageRange(1, 3),
//! ]);
//! driver.run(&mut commands, |_, report| {
//!     println!("added {} (total {})", report.added, report.total);
//! });
//!
//! let outcome = driver.finish();
//! for prefix in &outcome.prefixes {
//!     println!("{prefix}");
//! }
//! ```

/*-------------------------------------------------------------------------------------------------
  Modules
-------------------------------------------------------------------------------------------------*/

pub mod core;

/*-------------------------------------------------------------------------------------------------
  Public Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::asn::AsnIdentifier;
pub use crate::core::client::{Client, ClientBuilder};
pub use crate::core::commands::{Command, CommandSource, QueuedCommands};
pub use crate::core::driver::{PassKind, PassReport, PrefixSource, SessionDriver, SessionOutcome};
pub use crate::core::errors::{Error, FetchError, FetchErrorKind, Result};
pub use crate::core::prefix::NetworkPrefix;
pub use crate::core::reduce::reduce;
pub use crate::core::session::Session;
pub use crate::core::sink::{save_to_file, write_lines};
