use clap::Parser;
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(author, version, about = "Collect and reduce the IP ranges announced by autonomous systems.", long_about = None)]
pub struct Args {
    /// Scan these ASNs (digit-only, e.g. 12880); repeatable
    #[arg(short = 'a', long = "asn")]
    pub asns: Option<Vec<String>>,

    /// Scan the ASNs listed in this file (whitespace-separated tokens)
    #[arg(short = 'f', long = "asn-file")]
    pub asn_file: Option<PathBuf>,

    /// Scan country report pages: a single page (5) or a range (1-9)
    #[arg(short = 'p', long = "pages")]
    pub pages: Option<String>,

    /// Two-letter country code for the ASN report
    #[arg(short = 'c', long, default_value = "IR")]
    pub country: String,

    /// Write the reduced prefixes to this file
    #[arg(short = 'o', long, default_value = "prefixes.txt")]
    pub prefix_output: PathBuf,

    /// Write the collected ASN identifiers to this file
    #[arg(long, default_value = "asns.txt")]
    pub asn_output: PathBuf,

    /// Also save the reduced prefixes to a CSV file
    #[arg(long = "csv")]
    pub csv_file: Option<PathBuf>,

    /// Pause between consecutive requests, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub pause: u64,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = 20)]
    pub timeout: u64,

    /// Run the interactive menu even when scan arguments are present
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}
