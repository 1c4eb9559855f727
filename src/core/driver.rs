use crate::core::asn::AsnIdentifier;
use crate::core::commands::{Command, CommandSource};
use crate::core::prefix::NetworkPrefix;
use crate::core::reduce::reduce;
use crate::core::session::Session;
use log::debug;
use std::collections::BTreeSet;
use std::thread;
use std::time::Duration;

/*-------------------------------------------------------------------------------------------------
  Prefix Source
-------------------------------------------------------------------------------------------------*/

/// The fetch operations the driver needs from a source adapter. Implemented
/// by [Client](crate::Client); test drivers substitute a canned source.
/// Implementations must isolate their own failures: a failed fetch is an
/// empty result, never a panic or an error the driver has to route.
pub trait PrefixSource {
    fn fetch_prefixes_for_asn(&self, asn: AsnIdentifier) -> BTreeSet<NetworkPrefix>;

    fn fetch_asn_ids_for_page(&self, page: u32) -> Vec<AsnIdentifier>;
}

/*-------------------------------------------------------------------------------------------------
  Pass Reports
-------------------------------------------------------------------------------------------------*/

/// Which session a collection pass fed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PassKind {
    Prefixes,
    AsnIds,
}

/// Outcome of one collection pass: the number of genuinely new values the
/// pass added (the accumulator's delta, not the raw batch size) and the
/// session's running unique total.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PassReport {
    pub kind: PassKind,
    pub added: usize,
    pub total: usize,
}

/*-------------------------------------------------------------------------------------------------
  Session Outcome
-------------------------------------------------------------------------------------------------*/

/// Final result of a session: the reduced prefix set (no member nested in
/// another, ordered by prefix length then base address) and the unique ASN
/// identifiers in ascending numeric order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SessionOutcome {
    pub prefixes: Vec<NetworkPrefix>,
    pub asn_ids: Vec<AsnIdentifier>,
}

/*-------------------------------------------------------------------------------------------------
  Session Driver
-------------------------------------------------------------------------------------------------*/

const DEFAULT_PAUSE: Duration = Duration::from_millis(100);

/// Drives a collection session: executes scan commands against a
/// [PrefixSource], accumulates results into the prefix and ASN sessions, and
/// finalizes into a [SessionOutcome].
///
/// Execution is single-threaded and synchronous. Only the source's fetch
/// calls block; a short fixed pause separates consecutive requests within a
/// multi-identifier pass to avoid hammering the remote service. The sessions
/// are owned exclusively by the driver for the duration of the run.
#[derive(Debug)]
pub struct SessionDriver<'s, S: PrefixSource> {
    source: &'s S,
    pause: Duration,
    prefixes: Session<NetworkPrefix>,
    asn_ids: Session<AsnIdentifier>,
}

impl<'s, S: PrefixSource> SessionDriver<'s, S> {
    pub fn new(source: &'s S) -> Self {
        Self {
            source,
            pause: DEFAULT_PAUSE,
            prefixes: Session::new(),
            asn_ids: Session::new(),
        }
    }

    /// Set the pause between consecutive requests within a pass.
    pub fn pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Unique prefixes accumulated so far.
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }

    /// Unique ASN identifiers accumulated so far.
    pub fn asn_count(&self) -> usize {
        self.asn_ids.len()
    }

    /*-------------------------------------------------------------------------
      Command Execution
    -------------------------------------------------------------------------*/

    /// Execute one collection pass. Returns `None` for [Command::Exit];
    /// otherwise fetches per identifier, merges the pass batch into the
    /// owning session, and reports the pass delta.
    pub fn execute(&mut self, command: &Command) -> Option<PassReport> {
        match command {
            Command::ScanAsn(asn) => Some(self.prefix_pass(&[*asn])),
            Command::ScanAsnList(asns) => Some(self.prefix_pass(asns)),
            Command::ScanPage(page) => Some(self.page_pass(*page..=*page)),
            Command::ScanPageRange(start, end) => Some(self.page_pass(*start..=*end)),
            Command::Exit => None,
        }
    }

    /// Drain the command source, invoking `on_pass` after every collection
    /// pass, until [Command::Exit] or source exhaustion.
    pub fn run<C, F>(&mut self, commands: &mut C, mut on_pass: F)
    where
        C: CommandSource + ?Sized,
        F: FnMut(&Command, PassReport),
    {
        while let Some(command) = commands.next_command() {
            match self.execute(&command) {
                Some(report) => on_pass(&command, report),
                None => break,
            }
        }
    }

    /// Consume the driver: reduce the prefix session to its broadest
    /// non-nested blocks and drain the ASN session in ascending numeric
    /// order.
    pub fn finish(self) -> SessionOutcome {
        SessionOutcome {
            prefixes: reduce(self.prefixes.into_items()),
            asn_ids: self.asn_ids.into_items().into_iter().collect(),
        }
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    fn prefix_pass(&mut self, asns: &[AsnIdentifier]) -> PassReport {
        let mut batch: BTreeSet<NetworkPrefix> = BTreeSet::new();
        for (index, asn) in asns.iter().enumerate() {
            if index > 0 {
                thread::sleep(self.pause);
            }
            batch.extend(self.source.fetch_prefixes_for_asn(*asn));
        }

        debug!("Prefix pass batch: {} prefixes", batch.len());
        let added = self.prefixes.merge_batch(batch);
        PassReport {
            kind: PassKind::Prefixes,
            added,
            total: self.prefixes.len(),
        }
    }

    fn page_pass(&mut self, pages: std::ops::RangeInclusive<u32>) -> PassReport {
        let mut batch: Vec<AsnIdentifier> = Vec::new();
        for (index, page) in pages.enumerate() {
            if index > 0 {
                thread::sleep(self.pause);
            }
            batch.extend(self.source.fetch_asn_ids_for_page(page));
        }

        debug!("Page pass batch: {} identifiers", batch.len());
        let added = self.asn_ids.merge_batch(batch);
        PassReport {
            kind: PassKind::AsnIds,
            added,
            total: self.asn_ids.len(),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::QueuedCommands;
    use crate::core::prefix::tests::prefix;
    use std::collections::BTreeMap;

    /*----------------------------------------------------------------------------------
      Test Source
    ----------------------------------------------------------------------------------*/

    /// Canned source: fetches resolve against fixed tables; anything not in
    /// a table behaves like a failed fetch (empty result).
    #[derive(Default)]
    struct FakeSource {
        prefixes: BTreeMap<u64, Vec<&'static str>>,
        pages: BTreeMap<u32, Vec<u64>>,
    }

    impl PrefixSource for FakeSource {
        fn fetch_prefixes_for_asn(&self, asn: AsnIdentifier) -> BTreeSet<NetworkPrefix> {
            self.prefixes
                .get(&asn.value())
                .map(|cidrs| cidrs.iter().map(|s| prefix(s)).collect())
                .unwrap_or_default()
        }

        fn fetch_asn_ids_for_page(&self, page: u32) -> Vec<AsnIdentifier> {
            self.pages
                .get(&page)
                .map(|ids| ids.iter().map(|id| AsnIdentifier::from(*id)).collect())
                .unwrap_or_default()
        }
    }

    fn fake_source() -> FakeSource {
        FakeSource {
            prefixes: BTreeMap::from([
                (100, vec!["10.0.0.0/8", "10.1.0.0/16"]),
                (200, vec!["10.1.0.0/16", "192.168.0.0/24"]),
            ]),
            pages: BTreeMap::from([(1, vec![30, 10]), (2, vec![10, 20])]),
        }
    }

    fn driver(source: &FakeSource) -> SessionDriver<'_, FakeSource> {
        SessionDriver::new(source).pause(Duration::ZERO)
    }

    /*----------------------------------------------------------------------------------
      Command Execution
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_scan_asn_pass_reports_accumulator_delta() {
        let source = fake_source();
        let mut driver = driver(&source);

        let report = driver.execute(&Command::ScanAsn(100.into())).unwrap();
        assert_eq!(
            report,
            PassReport {
                kind: PassKind::Prefixes,
                added: 2,
                total: 2
            }
        );

        // Second pass overlaps on 10.1.0.0/16: only the new prefix counts
        let report = driver.execute(&Command::ScanAsn(200.into())).unwrap();
        assert_eq!(report.added, 1);
        assert_eq!(report.total, 3);
    }

    #[test]
    fn test_failed_fetch_leaves_session_unchanged() {
        let source = fake_source();
        let mut driver = driver(&source);
        driver.execute(&Command::ScanAsn(100.into()));

        // ASN 999 is not in the table: the adapter yields an empty set
        let report = driver.execute(&Command::ScanAsn(999.into())).unwrap();
        assert_eq!(report.added, 0);
        assert_eq!(report.total, 2);
        assert_eq!(driver.prefix_count(), 2);
    }

    #[test]
    fn test_scan_asn_list_deduplicates_across_the_pass() {
        let source = fake_source();
        let mut driver = driver(&source);

        let report = driver
            .execute(&Command::ScanAsnList(vec![100.into(), 200.into()]))
            .unwrap();
        assert_eq!(report.added, 3); // Union of both ASNs' announcements
    }

    #[test]
    fn test_page_range_pass_feeds_asn_session() {
        let source = fake_source();
        let mut driver = driver(&source);

        let report = driver.execute(&Command::ScanPageRange(1, 2)).unwrap();
        assert_eq!(
            report,
            PassReport {
                kind: PassKind::AsnIds,
                added: 3,
                total: 3
            }
        );
        assert_eq!(driver.asn_count(), 3);
        assert_eq!(driver.prefix_count(), 0); // Sessions never cross
    }

    #[test]
    fn test_rescanning_a_page_adds_zero() {
        let source = fake_source();
        let mut driver = driver(&source);

        driver.execute(&Command::ScanPage(1));
        let report = driver.execute(&Command::ScanPage(1)).unwrap();
        assert_eq!(report.added, 0);
        assert_eq!(report.total, 2);
    }

    /*----------------------------------------------------------------------------------
      Run Loop
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_run_stops_at_exit() {
        let source = fake_source();
        let mut driver = driver(&source);
        let mut commands = QueuedCommands::from(vec![
            Command::ScanAsn(100.into()),
            Command::Exit,
            Command::ScanAsn(200.into()), // Never reached
        ]);

        let mut passes = 0;
        driver.run(&mut commands, |_, _| passes += 1);
        assert_eq!(passes, 1);
        assert_eq!(driver.prefix_count(), 2);
    }

    #[test]
    fn test_run_stops_on_source_exhaustion() {
        let source = fake_source();
        let mut driver = driver(&source);
        let mut commands = QueuedCommands::from(vec![Command::ScanPage(2)]);

        let mut reports = Vec::new();
        driver.run(&mut commands, |_, report| reports.push(report));
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].added, 2);
    }

    /*----------------------------------------------------------------------------------
      Finalization
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_finish_reduces_prefixes_and_sorts_asn_ids() {
        let source = fake_source();
        let mut driver = driver(&source);

        driver.execute(&Command::ScanAsnList(vec![100.into(), 200.into()]));
        driver.execute(&Command::ScanPageRange(1, 2));

        let outcome = driver.finish();

        let prefixes: Vec<String> = outcome.prefixes.iter().map(|p| p.to_string()).collect();
        assert_eq!(prefixes, ["10.0.0.0/8", "192.168.0.0/24"]); // The /16 is absorbed

        let asn_ids: Vec<u64> = outcome.asn_ids.iter().map(AsnIdentifier::value).collect();
        assert_eq!(asn_ids, vec![10, 20, 30]); // Numeric order, duplicates gone
    }

    #[test]
    fn test_finish_on_empty_session() {
        let source = FakeSource::default();
        let outcome = driver(&source).finish();
        assert!(outcome.prefixes.is_empty());
        assert!(outcome.asn_ids.is_empty());
    }
}
