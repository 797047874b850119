//! First-match classification of free-form text into canonical tags.
//!
//! An [`AliasTable`] is an ordered list of `(tag, patterns)` groups. Order is
//! significant: tags are tried in declaration order, and so are the patterns
//! within a tag, and the first pattern found anywhere in the text wins.
//!
//! A [`TieredAliases`] stacks several tables so that a tier of specific tags
//! (`2k12r2`) is consulted before a general tier whose shorter patterns
//! (`windows.?server.?2012`) would otherwise also match.

use regex::{Regex, RegexBuilder};
use tracing::debug;

/// Ordered `(tag, patterns)` groups with their patterns compiled.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: Vec<(String, Vec<Regex>)>,
}

impl AliasTable {
    /// Compiles every pattern case-insensitively.
    pub fn new(entries: &[(&str, &[&str])]) -> Result<Self, regex::Error> {
        let entries = entries
            .iter()
            .map(|(tag, patterns)| {
                let compiled = patterns
                    .iter()
                    .map(|p| RegexBuilder::new(p).case_insensitive(true).build())
                    .collect::<Result<Vec<_>, _>>()?;
                Ok::<_, regex::Error>((tag.to_string(), compiled))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    /// Returns the tag of the first pattern found in `desc`.
    pub fn match_str(&self, desc: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|re| re.is_match(desc)))
            .map(|(tag, _)| tag.as_str())
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(tag, _)| tag.as_str())
    }
}

/// Alias tables consulted in priority order.
#[derive(Debug, Clone)]
pub struct TieredAliases {
    tiers: Vec<AliasTable>,
}

impl TieredAliases {
    pub fn new(tiers: Vec<AliasTable>) -> Self {
        Self { tiers }
    }

    pub fn match_str(&self, desc: &str) -> Option<&str> {
        self.tiers.iter().enumerate().find_map(|(tier, table)| {
            let tag = table.match_str(desc)?;
            debug!(desc, tag, tier, "matched alias");
            Some(tag)
        })
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tiers.iter().flat_map(AliasTable::tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_declared_tag_wins() {
        let table = AliasTable::new(&[("long", &["abc"]), ("short", &["ab"])]).unwrap();
        assert_eq!(table.match_str("xxABCxx"), Some("long"));
        assert_eq!(table.match_str("xxABxx"), Some("short"));
        assert_eq!(table.match_str("xx"), None);
    }

    #[test]
    fn invalid_pattern_is_rejected_at_build_time() {
        assert!(AliasTable::new(&[("bad", &["(unclosed"])]).is_err());
    }

    #[test]
    fn earlier_tier_shadows_later_tier() {
        let general = AliasTable::new(&[("base", &["foo"])]).unwrap();
        let specific = AliasTable::new(&[("variant", &["foo.?bar"])]).unwrap();
        let tiers = TieredAliases::new(vec![specific, general]);

        assert_eq!(tiers.match_str("foo-bar"), Some("variant"));
        assert_eq!(tiers.match_str("foo"), Some("base"));
        assert_eq!(tiers.tags().collect::<Vec<_>>(), ["variant", "base"]);
    }
}
