use crate::cli::core::{asn_tokens, parse_asn, parse_page_spec, read_asn_file};
use asnranges::{Command, CommandSource};
use std::io::{self, BufRead};
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Interactive Prompt
-------------------------------------------------------------------------------------------------*/

/// Interactive menu over a line-based input, implementing [CommandSource].
/// Invalid selections re-prompt without producing a command; end of input is
/// treated as save-and-exit.
pub struct PromptSource<R> {
    input: R,
    pending_continue: bool,
}

impl PromptSource<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> PromptSource<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending_continue: false,
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        println!("{message}");
        self.read_line()
    }

    fn single_asn(&mut self) -> Option<Command> {
        let line = self.prompt("Enter a single ASN:")?;
        match parse_asn(&line) {
            Ok(asn) => Some(Command::ScanAsn(asn)),
            Err(error) => {
                println!("  [!] {error}");
                None
            }
        }
    }

    fn multi_line_asns(&mut self) -> Option<Command> {
        println!("Enter ASNs, one per line (empty line to finish):");
        let mut lines: Vec<String> = Vec::new();
        loop {
            let line = self.read_line()?;
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }

        let asns = asn_tokens(&lines.join(" "));
        if asns.is_empty() {
            println!("  [!] No valid ASN tokens entered.");
            return None;
        }
        Some(Command::ScanAsnList(asns))
    }

    fn asns_from_file(&mut self) -> Option<Command> {
        let line = self.prompt("Enter the path to an ASN list file:")?;
        match read_asn_file(Path::new(&line)) {
            Ok(asns) if !asns.is_empty() => Some(Command::ScanAsnList(asns)),
            Ok(_) => {
                println!("  [!] No valid ASN tokens in that file.");
                None
            }
            Err(error) => {
                println!("  [!] {error}");
                None
            }
        }
    }

    fn single_page(&mut self) -> Option<Command> {
        let line = self.prompt("Enter a page number (e.g. 5):")?;
        match parse_page_spec(&line) {
            Ok(command @ Command::ScanPage(_)) => Some(command),
            Ok(_) => {
                println!("  [!] Expected a single page number.");
                None
            }
            Err(error) => {
                println!("  [!] {error}");
                None
            }
        }
    }

    fn page_range(&mut self) -> Option<Command> {
        let line = self.prompt("Enter a page range (e.g. 1-9):")?;
        match parse_page_spec(&line) {
            Ok(command @ Command::ScanPageRange(..)) => Some(command),
            Ok(_) => {
                println!("  [!] Expected a page range like 1-9.");
                None
            }
            Err(error) => {
                println!("  [!] {error}");
                None
            }
        }
    }
}

fn print_menu() {
    println!();
    println!("================= ASN RANGES =================");
    println!(" [1] Single ASN scan");
    println!(" [2] Multi-line ASN entry");
    println!(" [3] Scan ASNs from a file");
    println!(" [4] Single report page scan");
    println!(" [5] Report page range scan");
    println!(" [E] Exit");
    println!("==============================================");
    println!("Select an option:");
}

impl<R: BufRead> CommandSource for PromptSource<R> {
    fn next_command(&mut self) -> Option<Command> {
        loop {
            if self.pending_continue {
                self.pending_continue = false;
                let line =
                    self.prompt("\nPress Enter to return to the menu, or S to save and exit:")?;
                if line.eq_ignore_ascii_case("s") {
                    return Some(Command::Exit);
                }
            }

            print_menu();
            let selection = self.read_line()?;
            let command = match selection.as_str() {
                "1" => self.single_asn(),
                "2" => self.multi_line_asns(),
                "3" => self.asns_from_file(),
                "4" => self.single_page(),
                "5" => self.page_range(),
                "e" | "E" => return Some(Command::Exit),
                _ => {
                    println!("  [!] Invalid selection: choose 1-5 or E.");
                    None
                }
            };

            if let Some(command) = command {
                self.pending_continue = true;
                return Some(command);
            }
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn source(input: &str) -> PromptSource<Cursor<Vec<u8>>> {
        PromptSource::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn test_single_asn_then_save_and_exit() {
        let mut prompt = source("1\n12880\ns\n");
        assert_eq!(
            prompt.next_command(),
            Some(Command::ScanAsn(12880.into()))
        );
        assert_eq!(prompt.next_command(), Some(Command::Exit));
    }

    #[test]
    fn test_continue_returns_to_menu() {
        let mut prompt = source("4\n2\n\ne\n");
        assert_eq!(prompt.next_command(), Some(Command::ScanPage(2)));
        // Enter (not "s") returns to the menu, where E exits
        assert_eq!(prompt.next_command(), Some(Command::Exit));
    }

    #[test]
    fn test_multi_line_entry_tokenizes() {
        let mut prompt = source("2\n100 200\nbogus\n300\n\ns\n");
        assert_eq!(
            prompt.next_command(),
            Some(Command::ScanAsnList(vec![
                100.into(),
                200.into(),
                300.into()
            ]))
        );
    }

    #[test]
    fn test_invalid_selection_reprompts() {
        let mut prompt = source("9\nE\n");
        assert_eq!(prompt.next_command(), Some(Command::Exit));
    }

    #[test]
    fn test_invalid_asn_reprompts_without_command() {
        let mut prompt = source("1\nnot-a-number\ne\n");
        assert_eq!(prompt.next_command(), Some(Command::Exit));
    }

    #[test]
    fn test_page_range_flow() {
        let mut prompt = source("5\n1-3\ns\n");
        assert_eq!(prompt.next_command(), Some(Command::ScanPageRange(1, 3)));
        assert_eq!(prompt.next_command(), Some(Command::Exit));
    }

    #[test]
    fn test_range_rejected_in_single_page_option() {
        let mut prompt = source("4\n1-3\ne\n");
        assert_eq!(prompt.next_command(), Some(Command::Exit));
    }

    #[test]
    fn test_eof_ends_session() {
        let mut prompt = source("");
        assert_eq!(prompt.next_command(), None);

        let mut prompt = source("1\n"); // EOF mid-prompt
        assert_eq!(prompt.next_command(), None);
    }
}
