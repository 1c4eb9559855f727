use crate::core::prefix::NetworkPrefix;

/*-------------------------------------------------------------------------------------------------
  Prefix Reducer
-------------------------------------------------------------------------------------------------*/

/// Collapse a collection of network prefixes into the minimal set of
/// non-nested blocks: every input prefix is contained in (or equal to) exactly
/// one output prefix, and no output prefix is a subnet of another.
///
/// Candidates are walked broadest-first (ascending prefix length), so an
/// accepted block is always at least as broad as any later candidate and can
/// never be evicted once accepted. Containment is tested against every
/// accepted member; quadratic in the worst case, which is fine at the scale
/// one collection session produces.
///
/// The result is ordered by (prefix length ascending, base address ascending)
/// for reproducible output.
///
/// ```
/// use asnranges::{reduce, NetworkPrefix};
///
/// let prefixes: Vec<NetworkPrefix> = ["10.0.0.0/8", "10.1.0.0/16", "192.168.0.0/24"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// let reduced = reduce(prefixes);
/// let reduced: Vec<String> = reduced.iter().map(|p| p.to_string()).collect();
/// assert_eq!(reduced, ["10.0.0.0/8", "192.168.0.0/24"]);
/// ```
pub fn reduce<I>(prefixes: I) -> Vec<NetworkPrefix>
where
    I: IntoIterator<Item = NetworkPrefix>,
{
    let mut candidates: Vec<NetworkPrefix> = prefixes.into_iter().collect();
    if candidates.is_empty() {
        return candidates;
    }

    // Broadest blocks first
    candidates.sort_by_key(NetworkPrefix::prefix_len);

    let mut accepted: Vec<NetworkPrefix> = Vec::new();
    for candidate in candidates {
        if !accepted.iter().any(|kept| candidate.is_subnet_of(kept)) {
            accepted.push(candidate);
        }
    }

    accepted.sort_by_key(|prefix| (prefix.prefix_len(), u32::from(prefix.network())));
    accepted
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
