use crate::core::errors::Result;
use serde::Deserialize;

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

pub fn parse(json: &str) -> Result<JsonAsnPrefixes<'_>> {
    Ok(serde_json::from_str(json)?)
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  JSON ASN Prefixes Response
--------------------------------------------------------------------------------------*/

/// Body of an ASN prefix lookup response. Only the announced IPv4 prefixes are
/// consumed; the rest of the payload is ignored.
#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct JsonAsnPrefixes<'j> {
    #[serde(borrow)]
    pub data: JsonPrefixData<'j>,
}

/*--------------------------------------------------------------------------------------
  JSON Prefix Data
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct JsonPrefixData<'j> {
    #[serde(borrow, default)]
    pub ipv4_prefixes: Vec<JsonPrefixEntry<'j>>,
}

/*--------------------------------------------------------------------------------------
  JSON Prefix Entry
--------------------------------------------------------------------------------------*/

/// One announced prefix entry. The CIDR text is kept as a borrowed string so
/// that a syntactically invalid entry never fails the whole response; each
/// entry is validated independently by the caller.
#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct JsonPrefixEntry<'j> {
    pub prefix: &'j str,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefix_response() {
        let body = r#"{
          "status": "ok",
          "data": {
            "ipv4_prefixes": [
              { "prefix": "5.10.248.0/21", "ip": "5.10.248.0", "cidr": 21 },
              { "prefix": "not-a-cidr", "ip": "x", "cidr": 0 }
            ],
            "ipv6_prefixes": []
          }
        }"#;

        let parsed = parse(body).unwrap();
        assert_eq!(parsed.data.ipv4_prefixes.len(), 2);
        assert_eq!(parsed.data.ipv4_prefixes[0].prefix, "5.10.248.0/21");
        // Syntactic validation is deferred; the malformed entry survives parsing
        assert_eq!(parsed.data.ipv4_prefixes[1].prefix, "not-a-cidr");
    }

    #[test]
    fn test_parse_missing_ipv4_prefixes_defaults_to_empty() {
        let body = r#"{ "status": "ok", "data": { "ipv6_prefixes": [] } }"#;
        let parsed = parse(body).unwrap();
        assert!(parsed.data.ipv4_prefixes.is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_body() {
        assert!(parse("<html>rate limited</html>").is_err());
        assert!(parse(r#"{ "status": "ok" }"#).is_err());
    }
}
