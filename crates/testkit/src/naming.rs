//! Temporary fixture naming
//!
//! Names combine a fixed prefix, the invoking test's name, and a kind tag,
//! then get an 8-hex-digit random suffix. The pre-suffix portion is truncated
//! so the whole name fits the 63-character bucket limit with the suffix
//! intact.

use rand::Rng;

/// Longest bucket name accepted by the supported providers
pub const MAX_BUCKET_LENGTH: usize = 63;

/// Reserved for the `-` separator plus the 8-hex-digit random suffix
const SUFFIX_LENGTH: usize = 9;

/// What kind of fixture a generated name is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureKind {
    File,
    Directory,
    Fifo,
    Bucket,
    Contents,
}

impl FixtureKind {
    /// Tag embedded in generated names
    pub const fn as_str(self) -> &'static str {
        match self {
            FixtureKind::File => "file",
            FixtureKind::Directory => "directory",
            FixtureKind::Fifo => "fifo",
            FixtureKind::Bucket => "bucket",
            FixtureKind::Contents => "contents",
        }
    }
}

/// 8 hex characters drawn uniformly from [0, 256^4)
pub(crate) fn random_test_string() -> String {
    let value = rand::thread_rng().gen_range(0..256u64.pow(4));
    format!("{value:08x}")
}

/// Coerce a name so it is valid as a bucket name across all supported
/// providers: no uppercase letters, no underscores.
pub fn make_bucket_name_valid(name: &str) -> String {
    name.to_lowercase().replace('_', "-")
}

/// Build a most-likely-unique temporary name
///
/// Bucket-kind names are coerced with [`make_bucket_name_valid`], including
/// any supplied prefix.
pub(crate) fn make_temp_name(method_name: &str, kind: FixtureKind, prefix: &str) -> String {
    let name = format!("{prefix}csutil-test-{method_name}-{}", kind.as_str());
    let truncated: String = name.chars().take(MAX_BUCKET_LENGTH - SUFFIX_LENGTH).collect();
    let name = format!("{truncated}-{}", random_test_string());
    if kind == FixtureKind::Bucket {
        make_bucket_name_valid(&name)
    } else {
        name
    }
}
