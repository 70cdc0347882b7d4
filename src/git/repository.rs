//! Git repository operations

use std::path::Path;

use anyhow::{Context, Result};
use git2::{ErrorCode, Repository, Sort};
use tracing::debug;

/// Git repository wrapper
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open the repository containing the specified path
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path)
            .with_context(|| format!("Not in a git repository: {}", path.display()))?;

        Ok(Self { repo })
    }

    /// Returns one `Name <email>` entry per commit reachable from HEAD,
    /// newest first.
    ///
    /// A repository without commits yields no entries.
    pub fn author_entries(&self) -> Result<Vec<String>> {
        match self.repo.head() {
            Ok(_) => {}
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                debug!("Repository has no commits yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e).context("Failed to get HEAD reference"),
        }

        let mut walker = self.repo.revwalk().context("Failed to create revwalk")?;
        walker
            .set_sorting(Sort::TIME)
            .context("Failed to configure revwalk")?;
        walker.push_head().context("Failed to push HEAD")?;

        let mut entries = Vec::new();
        for oid in walker {
            let oid = oid.context("Failed to get commit OID from walker")?;
            let commit = self
                .repo
                .find_commit(oid)
                .context("Failed to find commit")?;

            let author = commit.author();
            entries.push(format!(
                "{} <{}>",
                String::from_utf8_lossy(author.name_bytes()),
                String::from_utf8_lossy(author.email_bytes())
            ));
        }

        debug!(commits = entries.len(), "Collected history entries");
        Ok(entries)
    }
}
