//! Error handling for acknowledgement generation.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration and data-shape errors raised before any output is written.
#[derive(Error, Debug)]
pub enum AckError {
    /// No `.xcworkspace` entry in the project directory.
    #[error("Workspace not found at root: {0}")]
    WorkspaceNotFound(PathBuf),

    /// No `.xcodeproj` entry in the project directory.
    #[error("Project not found at root: {0}")]
    ProjectNotFound(PathBuf),

    /// `xcodebuild -showBuildSettings` output had no `BUILD_DIR` line.
    #[error("Build directory not found in build settings output")]
    BuildDirNotFound,

    /// `xcodebuild` could not be run or exited unsuccessfully.
    #[error("xcodebuild failed: {0}")]
    BuildSettingsFailed(String),

    /// `Package.resolved` did not match any known schema.
    #[error("Invalid Package.resolved: {0}")]
    InvalidLockFile(String),

    /// Output directory does not exist.
    #[error("Output directory does not exist: {0}")]
    OutputDirMissing(PathBuf),

    /// A license file pattern could not be compiled.
    #[error("Invalid license file pattern '{pattern}': {reason}")]
    InvalidLicensePattern {
        /// The offending glob.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },
}
