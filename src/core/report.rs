use crate::core::asn::AsnIdentifier;
use lazy_static::lazy_static;
use regex::Regex;

/*-------------------------------------------------------------------------------------------------
  Country Report Parsing
-------------------------------------------------------------------------------------------------*/

lazy_static! {
    // The country report carries one table, identified by id, with the ASN in
    // the first cell of each body row.
    static ref REPORT_TABLE: Regex =
        Regex::new(r#"(?is)<table[^>]*\bid="country-report"[^>]*>(.*?)</table>"#).unwrap();
    static ref FIRST_CELL: Regex = Regex::new(r"(?is)<tr[^>]*>\s*<td[^>]*>(.*?)</td>").unwrap();
    static ref MARKUP: Regex = Regex::new(r"<[^>]+>").unwrap();
}

/// Extract the ASN identifiers from a country report page. Each row whose
/// first cell reads `AS<digits>` contributes one identifier; rows of any other
/// shape are ignored. A page without the report table yields an empty list.
pub fn extract_asn_ids(html: &str) -> Vec<AsnIdentifier> {
    let table = match REPORT_TABLE.captures(html) {
        Some(captures) => captures.get(1).map_or("", |m| m.as_str()),
        None => return Vec::new(),
    };

    FIRST_CELL
        .captures_iter(table)
        .filter_map(|captures| {
            let cell = captures.get(1)?.as_str();
            let text = MARKUP.replace_all(cell, "");
            asn_token(text.trim())
        })
        .collect()
}

/// Parse a cell's text as an `AS<digits>` token. Only fully numeric
/// remainders count; anything else is not an ASN cell.
fn asn_token(text: &str) -> Option<AsnIdentifier> {
    text.to_ascii_uppercase()
        .strip_prefix("AS")
        .and_then(|digits| digits.trim().parse().ok())
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
