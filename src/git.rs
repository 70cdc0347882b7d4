//! Git history access.

use std::path::Path;

use anyhow::Result;

pub mod repository;

pub use repository::GitRepository;

/// Collects one `Name <email>` entry per commit of the repository at `path`.
pub fn collect_author_entries<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    GitRepository::open_at(path)?.author_entries()
}
