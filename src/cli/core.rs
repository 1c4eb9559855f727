use asnranges::{AsnIdentifier, Command, Result};
use log::warn;
use std::fs;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Core functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Build the batch command queue from CLI arguments
--------------------------------------------------------------------------------------*/

/// Translate batch scan arguments into driver commands. Single `--asn`
/// values must parse; file tokens are filtered tolerantly. Fails before any
/// fetch is attempted, so an invalid invocation never mutates a session.
pub fn build_commands(args: &crate::cli::Args) -> Result<Vec<Command>> {
    let mut commands = Vec::new();

    if let Some(asns) = &args.asns {
        let asns: Result<Vec<AsnIdentifier>> = asns.iter().map(|s| parse_asn(s)).collect();
        commands.push(Command::ScanAsnList(asns?));
    }

    if let Some(path) = &args.asn_file {
        let asns = read_asn_file(path)?;
        if asns.is_empty() {
            warn!("No ASN tokens found in {:?}", path);
        } else {
            commands.push(Command::ScanAsnList(asns));
        }
    }

    if let Some(spec) = &args.pages {
        commands.push(parse_page_spec(spec)?);
    }

    Ok(commands)
}

/*--------------------------------------------------------------------------------------
  Parse user-entered identifiers
--------------------------------------------------------------------------------------*/

/// Strict single-ASN parse for explicitly entered values.
pub fn parse_asn(token: &str) -> Result<AsnIdentifier> {
    token
        .trim()
        .parse()
        .map_err(|_| format!("invalid ASN (expected a number): {:?}", token.trim()).into())
}

/// Tolerant tokenizing for pasted or file-sourced ASN lists: every
/// whitespace-separated token that parses is kept, the rest are skipped with
/// a warning.
pub fn asn_tokens(text: &str) -> Vec<AsnIdentifier> {
    text.split_whitespace()
        .filter_map(|token| match token.parse() {
            Ok(asn) => Some(asn),
            Err(_) => {
                warn!("Skipping non-numeric ASN token: {token:?}");
                None
            }
        })
        .collect()
}

/// Read a whitespace-separated ASN list from a text file.
pub fn read_asn_file(path: &Path) -> Result<Vec<AsnIdentifier>> {
    let content =
        fs::read_to_string(path).map_err(|error| format!("cannot read {path:?}: {error}"))?;
    Ok(asn_tokens(&content))
}

/// Parse a page spec: a single page number (`5`) or an inclusive range
/// (`1-9`). Pages are 1-based; a range must satisfy `start <= end`.
pub fn parse_page_spec(spec: &str) -> Result<Command> {
    let spec = spec.trim();

    let page = |s: &str| -> Result<u32> {
        let page: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid page number: {:?}", s.trim()))?;
        if page < 1 {
            return Err(format!("page numbers start at 1, got {page}").into());
        }
        Ok(page)
    };

    match spec.split_once('-') {
        Some((start, end)) => {
            let (start, end) = (page(start)?, page(end)?);
            if start > end {
                return Err(format!("invalid page range: {start}-{end}").into());
            }
            Ok(Command::ScanPageRange(start, end))
        }
        None => Ok(Command::ScanPage(page(spec)?)),
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
