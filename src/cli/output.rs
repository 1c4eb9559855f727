use asnranges::{save_to_file, PassKind, PassReport, SessionOutcome};
use comfy_table::presets::NOTHING;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use log::error;

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Pass Summary
--------------------------------------------------------------------------------------*/

pub fn pass_summary(report: &PassReport) {
    let noun = match report.kind {
        PassKind::Prefixes => "prefixes",
        PassKind::AsnIds => "ASNs",
    };

    println!();
    println!("--- Collection Summary ---");
    println!("  [+] This scan added {} new unique {noun}.", report.added);
    println!("  [>] Total unique {noun} in session: {}", report.total);
}

/*--------------------------------------------------------------------------------------
  Save Session Outcome
--------------------------------------------------------------------------------------*/

/// Persist the finalized session. A failure on one artifact is logged and
/// does not stop the others; the in-memory outcome is never affected by a
/// failed save.
pub fn save_outcome(outcome: &SessionOutcome, args: &crate::cli::Args) {
    if outcome.prefixes.is_empty() {
        println!("  [i] No prefixes were collected; nothing to save.");
    } else {
        match save_to_file(&args.prefix_output, &outcome.prefixes) {
            Ok(count) => println!(
                "  [+] {count} reduced prefixes saved to {:?}.",
                args.prefix_output
            ),
            Err(err) => error!("Could not save {:?}: {err}", args.prefix_output),
        }

        if let Some(csv_path) = &args.csv_file {
            match crate::cli::csv::save(&outcome.prefixes, csv_path) {
                Ok(count) => println!("  [+] {count} prefix records saved to {csv_path:?}."),
                Err(err) => error!("Could not save {csv_path:?}: {err}"),
            }
        }
    }

    if outcome.asn_ids.is_empty() {
        println!("  [i] No ASNs were collected; nothing to save.");
    } else {
        match save_to_file(&args.asn_output, &outcome.asn_ids) {
            Ok(count) => println!("  [+] {count} unique ASNs saved to {:?}.", args.asn_output),
            Err(err) => error!("Could not save {:?}: {err}", args.asn_output),
        }
    }
}

/*--------------------------------------------------------------------------------------
  Session Summary Table
--------------------------------------------------------------------------------------*/

pub fn session_summary(outcome: &SessionOutcome) {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(outcome.prefixes.len()),
        Cell::new("Reduced IP prefixes"),
    ]);
    table.add_row(vec![
        Cell::new(outcome.asn_ids.len()),
        Cell::new("Unique ASN identifiers"),
    ]);

    let numbers_column = table.column_mut(0).expect("The first column exists");
    numbers_column.set_cell_alignment(CellAlignment::Right);

    println!("{table}");
}
