use crate::core::asn::AsnIdentifier;
use std::collections::VecDeque;

/*-------------------------------------------------------------------------------------------------
  Commands
-------------------------------------------------------------------------------------------------*/

/// One instruction for the session driver. Scan commands trigger a collection
/// pass; [Command::Exit] ends the session and hands the accumulated data to
/// the finalize step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Fetch the announced prefixes for a single ASN.
    ScanAsn(AsnIdentifier),

    /// Fetch the announced prefixes for each ASN in the list, in order.
    ScanAsnList(Vec<AsnIdentifier>),

    /// Fetch the ASN identifiers from one country report page.
    ScanPage(u32),

    /// Fetch the ASN identifiers from an inclusive range of report pages.
    ScanPageRange(u32, u32),

    /// End the session.
    Exit,
}

/*-------------------------------------------------------------------------------------------------
  Command Source
-------------------------------------------------------------------------------------------------*/

/// An abstract source of driver commands. The interactive prompt implements
/// this over stdin; batch invocations and tests use [QueuedCommands].
/// Returning `None` means the source is exhausted, which the driver treats
/// like [Command::Exit].
pub trait CommandSource {
    fn next_command(&mut self) -> Option<Command>;
}

/*--------------------------------------------------------------------------------------
  Queued Commands
--------------------------------------------------------------------------------------*/

/// A fixed queue of commands, drained front to back.
#[derive(Clone, Debug, Default)]
pub struct QueuedCommands {
    queue: VecDeque<Command>,
}

impl From<Vec<Command>> for QueuedCommands {
    fn from(commands: Vec<Command>) -> Self {
        Self {
            queue: commands.into(),
        }
    }
}

impl CommandSource for QueuedCommands {
    fn next_command(&mut self) -> Option<Command> {
        self.queue.pop_front()
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
