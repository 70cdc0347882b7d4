//! Grouping of raw contributions by email address.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::entry::RawContribution;

/// Operator-supplied substitutions from a raw identity (display name or
/// email) to a canonical display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityAliases(BTreeMap<String, String>);

impl IdentityAliases {
    /// Creates an empty alias table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `other` on top of `self`; entries in `other` win.
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Returns the canonical name for a contribution, if one is configured.
    ///
    /// The display name is checked before the email.
    pub fn lookup(&self, raw: &RawContribution) -> Option<&str> {
        self.0
            .get(&raw.name)
            .or_else(|| self.0.get(&raw.email))
            .map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for IdentityAliases {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// All contributions recorded under one email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailGroup {
    /// Grouping key.
    pub email: String,
    /// Distinct display names, in first-seen order.
    pub names: Vec<String>,
    /// Number of contributions mapped to this email.
    pub count: u64,
}

impl EmailGroup {
    fn new(email: String) -> Self {
        Self {
            email,
            names: Vec::new(),
            count: 0,
        }
    }

    fn record(&mut self, name: String) {
        if !self.names.contains(&name) {
            self.names.push(name);
        }
        self.count += 1;
    }

    /// Returns the longest observed name; the earliest wins a tie.
    pub fn canonical_name(&self) -> &str {
        self.names
            .iter()
            .fold(None::<&String>, |best, name| match best {
                Some(best) if best.chars().count() >= name.chars().count() => Some(best),
                _ => Some(name),
            })
            .map_or("", String::as_str)
    }
}

/// Groups contributions by email, keeping groups in first-seen order.
pub fn group_by_email<I>(contributions: I, aliases: &IdentityAliases) -> Vec<EmailGroup>
where
    I: IntoIterator<Item = RawContribution>,
{
    let mut groups: Vec<EmailGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for raw in contributions {
        let name = match aliases.lookup(&raw) {
            Some(canonical) => {
                debug!(raw = %raw.name, canonical, "Applying identity alias");
                canonical.to_string()
            }
            None => raw.name,
        };

        let slot = *index.entry(raw.email.clone()).or_insert_with(|| {
            groups.push(EmailGroup::new(raw.email));
            groups.len() - 1
        });
        groups[slot].record(name);
    }

    groups
}
