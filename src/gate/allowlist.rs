//! Allowlist parsing and matching.

/// Allowlist entry that admits every source address.
pub const SENTINEL_ALLOW_ALL: &str = "0.0.0.0";

/// An ordered allowlist of source addresses.
///
/// Entries are compared by exact string equality; no IPv4/IPv6 textual
/// normalization is performed. `"10.0.0.1 "` and `"10.0.0.1"` are distinct
/// entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allowlist {
    entries: Vec<String>,
}

impl Allowlist {
    /// Parse an allowlist from the raw configured string.
    ///
    /// The full-width comma `，` is normalized to `,` before splitting.
    /// Individual entries are not trimmed. Parsing never fails; a string
    /// without separators yields a single-entry list.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.replace('\u{FF0C}', ",");
        Self {
            entries: normalized.split(',').map(ToString::to_string).collect(),
        }
    }

    /// Whether the list contains the given address verbatim.
    #[must_use]
    pub fn contains(&self, address: &str) -> bool {
        self.entries.iter().any(|entry| entry == address)
    }

    /// Whether the all-allowing sentinel is present anywhere in the list.
    #[must_use]
    pub fn allows_everyone(&self) -> bool {
        self.contains(SENTINEL_ALLOW_ALL)
    }

    /// The parsed entries, in configuration order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let list = Allowlist::parse("10.0.0.1,10.0.0.2");
        assert_eq!(list.entries(), &["10.0.0.1", "10.0.0.2"]);
    }

    #[test]
    fn test_parse_full_width_comma() {
        let list = Allowlist::parse("1.1.1.1\u{FF0C}2.2.2.2");
        assert_eq!(list.entries(), &["1.1.1.1", "2.2.2.2"]);
    }

    #[test]
    fn test_parse_mixed_commas() {
        let list = Allowlist::parse("1.1.1.1\u{FF0C}2.2.2.2,3.3.3.3");
        assert_eq!(list.entries(), &["1.1.1.1", "2.2.2.2", "3.3.3.3"]);
    }

    #[test]
    fn test_parse_single_entry() {
        // No separator: one entry, never a parse failure
        let list = Allowlist::parse("not even an ip");
        assert_eq!(list.entries(), &["not even an ip"]);
    }

    #[test]
    fn test_entries_not_trimmed() {
        let list = Allowlist::parse("10.0.0.1, 10.0.0.2");
        assert!(list.contains("10.0.0.1"));
        assert!(!list.contains("10.0.0.2"));
        assert!(list.contains(" 10.0.0.2"));
    }

    #[test]
    fn test_exact_match_no_ip_semantics() {
        let list = Allowlist::parse("010.0.0.1");
        // Leading zero is a different string, so a different entry
        assert!(!list.contains("10.0.0.1"));
    }

    #[test]
    fn test_sentinel() {
        assert!(Allowlist::parse("0.0.0.0").allows_everyone());
        assert!(Allowlist::parse("10.0.0.1,0.0.0.0,10.0.0.2").allows_everyone());
        assert!(!Allowlist::parse("10.0.0.1").allows_everyone());
        // Sentinel must appear as a whole entry
        assert!(!Allowlist::parse("10.0.0.0.0.0").allows_everyone());
    }
}
