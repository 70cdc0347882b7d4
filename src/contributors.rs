//! Contributor identity resolution.
//!
//! Turns one `Display Name <email>` entry per commit into a ranked list of
//! distinct people. Entries are grouped by email first, then groups whose
//! names share a first word are merged when one of them is a bare first name
//! ("John" folds into "John Smith"). Two different full names sharing a first
//! word ("Jane Doe", "Jane Roe") stay separate.
//!
//! Resolution depends on input order, so callers must pass history entries in
//! the order they were read.

use tracing::debug;

pub mod entry;
pub mod group;
pub mod merge;

pub use entry::RawContribution;
pub use group::{group_by_email, EmailGroup, IdentityAliases};
pub use merge::{first_token, merge_identities, ranking, should_merge, Contributor};

/// Resolves raw history entries into ranked contributors.
pub fn resolve<I, S>(entries: I, aliases: &IdentityAliases) -> Vec<Contributor>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let contributions = entries.into_iter().filter_map(|entry| {
        let parsed = RawContribution::parse(entry.as_ref());
        if parsed.is_none() {
            debug!(entry = entry.as_ref(), "Skipping blank history entry");
        }
        parsed
    });

    let groups = group_by_email(contributions, aliases);
    debug!(groups = groups.len(), "Grouped contributions by email");

    let mut contributors = merge_identities(groups.iter().map(Contributor::from));
    contributors.sort_by(ranking);
    contributors
}
