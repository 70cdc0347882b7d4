//! Xcode project discovery and package checkout inspection.

pub mod build_settings;
pub mod licenses;
pub mod workspace;

pub use build_settings::{checkouts_dir, checkouts_dir_from_settings, query_build_settings};
pub use licenses::{license_matcher, scan_licenses};
pub use workspace::{find_project, find_workspace, resolved_file_path};
