//! cs-testkit: test fixture and assertion helpers for csutil
//!
//! This crate provides the shared scaffolding used by unit and integration
//! tests across the workspace: uniquely named temporary files, directories,
//! and fifos with controllable POSIX attributes, guaranteed best-effort
//! cleanup, and a few assertion helpers.
//!
//! # Usage
//!
//! Add this to your crate's `Cargo.toml` dev-dependencies:
//! ```toml
//! [dev-dependencies]
//! cs-testkit = { workspace = true }
//! ```
//!
//! Then in your tests:
//! ```rust,no_run
//! use cs_testkit::{TestApiConfig, TestFiles, TestFixtures};
//!
//! #[test]
//! fn my_test() {
//!     let mut fixtures = TestFixtures::new("my_test", TestApiConfig::default());
//!     let dir = fixtures.create_temp_dir(TestFiles::Count(3), None).unwrap();
//!     // ... test logic; cleanup happens on drop
//! }
//! ```

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

pub mod assertions;
pub mod config;
pub mod descriptor;
pub mod fixtures;
pub mod naming;
pub mod posix;

pub use assertions::{assert_num_lines, assert_regex_matches_with_flags, Pattern, RegexFlags};
pub use config::{Provider, TestApi, TestApiConfig};
pub use descriptor::{TestAttrs, TestDescriptor};
pub use fixtures::{TempFileOptions, TestFiles, TestFixtures};
pub use naming::{make_bucket_name_valid, FixtureKind, MAX_BUCKET_LENGTH};
pub use posix::{PosixAttrs, NA_ID, NA_MODE};
