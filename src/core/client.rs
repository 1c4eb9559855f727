use crate::core::asn::AsnIdentifier;
use crate::core::driver::PrefixSource;
use crate::core::errors::{FetchError, Result};
use crate::core::json;
use crate::core::prefix::NetworkPrefix;
use crate::core::report;
use log::{debug, error, info, warn};
use std::collections::BTreeSet;
use std::time::Duration;

/*-------------------------------------------------------------------------------------------------
  Defaults
-------------------------------------------------------------------------------------------------*/

const DEFAULT_PREFIX_URL: &str = "https://api.bgpview.io/asn";
const DEFAULT_REPORT_BASE: &str = "https://bgpview.io/reports/countries";
const DEFAULT_COUNTRY: &str = "IR";
const DEFAULT_TIMEOUT_SECS: u64 = 20;

// The report endpoint serves browsers; requests without a browser user agent
// get challenged.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

/*-------------------------------------------------------------------------------------------------
  Client Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [Client] struct with setters for each configuration
/// value.
///
/// ```
/// let client = asnranges::ClientBuilder::new()
///     .country("DE")
///     .timeout(15)
///     .build()
///     .unwrap();
///
/// assert!(client.report_url().ends_with("/DE"));
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    prefix_url: String,
    report_url: String,
    timeout: u64,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            prefix_url: DEFAULT_PREFIX_URL.to_string(),
            report_url: format!("{DEFAULT_REPORT_BASE}/{DEFAULT_COUNTRY}"),
            timeout: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the base URL of the ASN prefix lookup endpoint; prefixes for one
    /// ASN are fetched from `{prefix_url}/{asn}/prefixes`.
    pub fn prefix_url(&mut self, url: &str) -> &mut Self {
        self.prefix_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the full URL of the country ASN report; pages are fetched from
    /// `{report_url}?page={n}`.
    pub fn report_url(&mut self, url: &str) -> &mut Self {
        self.report_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Point the country report at the given country code, keeping the
    /// default report endpoint.
    pub fn country(&mut self, code: &str) -> &mut Self {
        self.report_url = format!("{DEFAULT_REPORT_BASE}/{}", code.to_uppercase());
        self
    }

    /// Set the per-request timeout, in seconds; defaults to 20. A request
    /// exceeding the timeout is treated as a failed fetch.
    pub fn timeout(&mut self, seconds: u64) -> &mut Self {
        self.timeout = seconds;
        self
    }

    /// Set the user-agent header sent with every request.
    pub fn user_agent(&mut self, user_agent: &str) -> &mut Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(&self) -> Result<Client> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(self.timeout))
            .user_agent(self.user_agent.clone())
            .build()?;

        Ok(Client {
            prefix_url: self.prefix_url.clone(),
            report_url: self.report_url.clone(),
            timeout: self.timeout,
            http,
        })
    }
}

/*-------------------------------------------------------------------------------------------------
  Client
-------------------------------------------------------------------------------------------------*/

/// A client for the two remote data sources: the per-ASN prefix lookup and
/// the paginated country ASN report. One blocking request at a time, bounded
/// by the configured timeout; no retry and no backoff.
///
/// Both fetch operations isolate every failure inside the client boundary:
/// the caller always receives a usable (possibly empty) result, and the
/// failure is reported through the logger instead of the caller's control
/// flow. The `try_` variants expose the underlying [Result] for callers that
/// need to distinguish failure modes.
#[derive(Debug, Clone)]
pub struct Client {
    prefix_url: String,
    report_url: String,
    timeout: u64,
    http: reqwest::blocking::Client,
}

impl Client {
    /// Create a client with the default configuration.
    pub fn new() -> Result<Self> {
        ClientBuilder::default().build()
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// Base URL of the ASN prefix lookup endpoint.
    pub fn prefix_url(&self) -> &str {
        &self.prefix_url
    }

    /// Full URL of the country ASN report.
    pub fn report_url(&self) -> &str {
        &self.report_url
    }

    /// Per-request timeout, in seconds.
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /*-------------------------------------------------------------------------
      Fetch Operations
    -------------------------------------------------------------------------*/

    /// Fetch the announced IPv4 prefixes for one ASN. Any transport failure,
    /// non-success status, or unparseable body is logged and yields an empty
    /// set. Within a successful response, each entry is validated
    /// independently; a malformed CIDR is skipped without discarding the rest
    /// of the batch.
    pub fn fetch_prefixes_for_asn(&self, asn: AsnIdentifier) -> BTreeSet<NetworkPrefix> {
        info!("Fetching announced prefixes for AS{asn}");
        match self.try_fetch_prefixes_for_asn(asn) {
            Ok(prefixes) => {
                info!("AS{asn}: {} announced IPv4 prefixes", prefixes.len());
                prefixes
            }
            Err(error) => {
                error!("AS{asn}: {error}");
                BTreeSet::new()
            }
        }
    }

    /// Fallible variant of [Client::fetch_prefixes_for_asn].
    pub fn try_fetch_prefixes_for_asn(
        &self,
        asn: AsnIdentifier,
    ) -> Result<BTreeSet<NetworkPrefix>> {
        let url = format!("{}/{asn}/prefixes", self.prefix_url);
        let body = self.get(&url)?;
        let parsed = json::parse(&body).map_err(|error| FetchError::body(error.to_string()))?;

        let mut prefixes = BTreeSet::new();
        for entry in &parsed.data.ipv4_prefixes {
            match entry.prefix.parse::<NetworkPrefix>() {
                Ok(prefix) => {
                    prefixes.insert(prefix);
                }
                Err(_) => warn!("AS{asn}: skipping malformed prefix entry {:?}", entry.prefix),
            }
        }
        Ok(prefixes)
    }

    /// Fetch the ASN identifiers listed on one page of the country report.
    /// A failed fetch is logged and yields an empty sequence; a successful
    /// fetch of a page with no report rows also yields an empty sequence,
    /// logged as a probable last page rather than a failure.
    pub fn fetch_asn_ids_for_page(&self, page: u32) -> Vec<AsnIdentifier> {
        info!("Fetching ASN report page {page}");
        match self.try_fetch_asn_ids_for_page(page) {
            Ok(asn_ids) if asn_ids.is_empty() => {
                info!("No ASNs found on page {page}; this may be the last page with data");
                asn_ids
            }
            Ok(asn_ids) => {
                info!("Extracted {} ASNs from page {page}", asn_ids.len());
                asn_ids
            }
            Err(error) => {
                error!("Report page {page}: {error}");
                Vec::new()
            }
        }
    }

    /// Fallible variant of [Client::fetch_asn_ids_for_page].
    pub fn try_fetch_asn_ids_for_page(&self, page: u32) -> Result<Vec<AsnIdentifier>> {
        let url = format!("{}?page={page}", self.report_url);
        let body = self.get(&url)?;
        Ok(report::extract_asn_ids(&body))
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    fn get(&self, url: &str) -> Result<String> {
        debug!("GET {url}");
        let response = self.http.get(url).send().map_err(FetchError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(status.as_u16()).into());
        }

        Ok(response.text().map_err(FetchError::from)?)
    }
}

/*--------------------------------------------------------------------------------------
  Prefix Source Implementation
--------------------------------------------------------------------------------------*/

impl PrefixSource for Client {
    fn fetch_prefixes_for_asn(&self, asn: AsnIdentifier) -> BTreeSet<NetworkPrefix> {
        Client::fetch_prefixes_for_asn(self, asn)
    }

    fn fetch_asn_ids_for_page(&self, page: u32) -> Vec<AsnIdentifier> {
        Client::fetch_asn_ids_for_page(self, page)
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = Client::new().unwrap();
        assert_eq!(client.prefix_url(), "https://api.bgpview.io/asn");
        assert_eq!(
            client.report_url(),
            "https://bgpview.io/reports/countries/IR"
        );
        assert_eq!(client.timeout(), 20);
    }

    #[test]
    fn test_builder_country() {
        let client = ClientBuilder::new().country("de").build().unwrap();
        assert_eq!(
            client.report_url(),
            "https://bgpview.io/reports/countries/DE"
        );
    }

    #[test]
    fn test_builder_trims_trailing_slashes() {
        let client = ClientBuilder::new()
            .prefix_url("http://localhost:8080/asn/")
            .report_url("http://localhost:8080/report/")
            .build()
            .unwrap();
        assert_eq!(client.prefix_url(), "http://localhost:8080/asn");
        assert_eq!(client.report_url(), "http://localhost:8080/report");
    }
}
