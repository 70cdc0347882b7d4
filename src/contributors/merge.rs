//! Cross-email identity merging.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::group::EmailGroup;

/// A distinct person credited in the acknowledgements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// Canonical display name.
    pub name: String,
    /// Email of an unmerged identity; `None` once merged with another.
    pub email: Option<String>,
    /// Number of commits credited to this person.
    pub contributions: u64,
}

impl From<&EmailGroup> for Contributor {
    fn from(group: &EmailGroup) -> Self {
        Self {
            name: group.canonical_name().to_string(),
            email: Some(group.email.clone()),
            contributions: group.count,
        }
    }
}

/// First whitespace-separated word of a name.
pub fn first_token(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

fn token_count(name: &str) -> usize {
    name.split_whitespace().count()
}

/// Decides whether two names sharing a first token are one person.
///
/// Exact matches merge. Otherwise a bare first name merges into a fuller
/// name, but two different multi-word names never do.
pub fn should_merge(existing: &str, incoming: &str) -> bool {
    if existing == incoming {
        return true;
    }

    let existing_tokens = token_count(existing);
    let incoming_tokens = token_count(incoming);
    let single_existing = existing_tokens == 1;
    let single_incoming = incoming_tokens == 1;

    single_existing != single_incoming && existing_tokens != incoming_tokens
}

fn combine(existing: &Contributor, incoming: Contributor) -> Contributor {
    let name = if incoming.name.chars().count() > existing.name.chars().count() {
        incoming.name
    } else {
        existing.name.clone()
    };

    Contributor {
        name,
        email: None,
        contributions: existing.contributions + incoming.contributions,
    }
}

/// Merges contributors that share an identity, preserving input order.
///
/// Each incoming contributor folds into the first earlier entry that shares
/// its first token and passes [`should_merge`]; otherwise it is appended.
pub fn merge_identities<I>(contributors: I) -> Vec<Contributor>
where
    I: IntoIterator<Item = Contributor>,
{
    let mut merged: Vec<Contributor> = Vec::new();

    for incoming in contributors {
        let token = first_token(&incoming.name);
        let target = merged.iter().position(|existing| {
            first_token(&existing.name) == token && should_merge(&existing.name, &incoming.name)
        });

        match target {
            Some(i) => {
                debug!(
                    existing = %merged[i].name,
                    incoming = %incoming.name,
                    "Merging contributor identities"
                );
                merged[i] = combine(&merged[i], incoming);
            }
            None => merged.push(incoming),
        }
    }

    merged
}

/// Orders by contributions descending, then case-insensitive name.
pub fn ranking(a: &Contributor, b: &Contributor) -> Ordering {
    b.contributions
        .cmp(&a.contributions)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, email: &str, contributions: u64) -> Contributor {
        Contributor {
            name: name.to_string(),
            email: Some(email.to_string()),
            contributions,
        }
    }

    #[test]
    fn first_token_of_names() {
        assert_eq!(first_token("John Smith"), "John");
        assert_eq!(first_token("John"), "John");
        assert_eq!(first_token("  Mary\tAnn Lee"), "Mary");
        assert_eq!(first_token(""), "");
    }

    #[test]
    fn should_merge_rules() {
        assert!(should_merge("John", "John"));
        assert!(should_merge("John Smith", "John Smith"));
        assert!(should_merge("John", "John Smith"));
        assert!(should_merge("John Smith", "John"));
        assert!(should_merge("John", "John Ronald Reuel Tolkien"));
        assert!(!should_merge("John Smith", "John Doe"));
        assert!(!should_merge("John Smith", "John Smith Jr"));
    }

    #[test]
    fn bare_first_name_merges_into_full_name() {
        let merged = merge_identities(vec![
            person("John", "john@example.com", 3),
            person("John Smith", "js@example.com", 2),
        ]);

        assert_eq!(
            merged,
            vec![Contributor {
                name: "John Smith".to_string(),
                email: None,
                contributions: 5,
            }]
        );
    }

    #[test]
    fn unmerged_contributor_keeps_email() {
        let merged = merge_identities(vec![person("Kent Clark", "k@example.com", 1)]);
        assert_eq!(merged[0].email.as_deref(), Some("k@example.com"));
    }

    #[test]
    fn name_tie_keeps_existing_name() {
        let merged = merge_identities(vec![
            person("Li", "a@example.com", 1),
            person("Li", "b@example.com", 1),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "Li");
        assert_eq!(merged[0].contributions, 2);
        assert_eq!(merged[0].email, None);
    }

    #[test]
    fn bare_name_merges_into_first_match_only() {
        let merged = merge_identities(vec![
            person("John Smith", "js@example.com", 4),
            person("John Doe", "jd@example.com", 2),
            person("John", "j@example.com", 1),
        ]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].name, "John Smith");
        assert_eq!(merged[0].contributions, 5);
        assert_eq!(merged[1].name, "John Doe");
        assert_eq!(merged[1].contributions, 2);
        assert_eq!(merged[1].email.as_deref(), Some("jd@example.com"));

        let total: u64 = merged.iter().map(|c| c.contributions).sum();
        assert_eq!(total, 7);
    }

    #[test]
    fn skips_non_mergeable_candidate_sharing_first_token() {
        let merged = merge_identities(vec![
            person("John Doe", "jd@example.com", 1),
            person("John", "j@example.com", 1),
            person("John Smith", "js@example.com", 1),
        ]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].name, "John Doe");
        assert_eq!(merged[0].contributions, 2);
        assert_eq!(merged[1].name, "John Smith");
    }

    #[test]
    fn ranking_orders_by_count_then_name() {
        let mut list = vec![
            person("bob", "b@example.com", 1),
            person("Alice", "a@example.com", 1),
            person("Zed", "z@example.com", 5),
        ];
        list.sort_by(ranking);
        let names: Vec<_> = list.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Alice", "bob"]);
    }
}
