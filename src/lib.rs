//! # acknowledger
//!
//! Builds an `Acknowledgements.json` for an Xcode project from two sources:
//! the Swift packages pinned in `Package.resolved`, with their license texts,
//! and the people found in the project's git history.
//!
//! ## Quick Start
//!
//! ```rust
//! use acknowledger::contributors::{resolve, IdentityAliases};
//!
//! let people = resolve(
//!     ["John <john@example.com>", "John Smith <js@example.com>"],
//!     &IdentityAliases::new(),
//! );
//! assert_eq!(people[0].name, "John Smith");
//! assert_eq!(people[0].contributions, 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod contributors;
pub mod data;
pub mod error;
pub mod git;
pub mod packages;
pub mod xcode;

pub use crate::cli::Cli;
pub use crate::error::AckError;

/// The current version of acknowledger.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
