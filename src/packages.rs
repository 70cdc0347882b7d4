//! Acknowledgement records for resolved package dependencies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod resolved;

pub use resolved::{PackageResolved, Pin};

/// License file contents keyed by package name.
pub type LicenseMap = BTreeMap<String, String>;

/// One dependency credited in the acknowledgements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcknowledgementPackage {
    /// Package name.
    pub name: String,
    /// Repository URL without a `.git` suffix.
    pub url: String,
    /// Owner segment of the URL, when it has one.
    pub author: Option<String>,
    /// License text found in the package checkout.
    pub license: Option<String>,
}

impl AcknowledgementPackage {
    /// Creates a record for a pin, attaching its license if one was found.
    pub fn from_pin(pin: Pin, licenses: &LicenseMap) -> Self {
        let author = author_from_url(&pin.url).map(str::to_string);
        let license = licenses.get(&pin.name).cloned();
        if license.is_none() {
            debug!(package = %pin.name, "No license found for package");
        }

        Self {
            name: pin.name,
            url: pin.url,
            author,
            license,
        }
    }
}

/// Second-to-last `/` segment of a URL, e.g. `acme` for
/// `https://github.com/acme/Foo`. A trailing `/` is ignored.
pub fn author_from_url(url: &str) -> Option<&str> {
    let mut segments = url.trim_end_matches('/').rsplit('/');
    segments.next()?;
    segments.next().filter(|s| !s.is_empty())
}

/// Builds one acknowledgement record per pin, in pin order.
pub fn build(resolved: &PackageResolved, licenses: &LicenseMap) -> Vec<AcknowledgementPackage> {
    resolved
        .pins()
        .into_iter()
        .map(|pin| AcknowledgementPackage::from_pin(pin, licenses))
        .collect()
}
