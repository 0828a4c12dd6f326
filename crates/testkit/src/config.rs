//! Provider/API selection for a test run
//!
//! Which storage provider a test run targets is explicit input, constructed
//! once and handed to [`TestFixtures`](crate::fixtures::TestFixtures). There
//! is no process-global lookup.

use cs_core::Config;

/// Storage provider a test run targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Google Cloud Storage
    Gs,
    /// S3-compatible storage
    S3,
}

impl Provider {
    /// URL scheme for this provider
    pub const fn scheme(self) -> &'static str {
        match self {
            Provider::Gs => "gs",
            Provider::S3 => "s3",
        }
    }

    /// Vendor prefix used in custom metadata headers
    pub const fn custom_metadata_prefix(self) -> &'static str {
        match self {
            Provider::Gs => "goog",
            Provider::S3 => "amz",
        }
    }
}

/// Wire API used by a test run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestApi {
    Json,
    Xml,
}

/// Provider and API selection handed to the fixture layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestApiConfig {
    pub provider: Provider,
    pub test_api: TestApi,
}

impl TestApiConfig {
    /// Derive the test selection from a loaded cs configuration
    ///
    /// S3 endpoints only speak XML, so the preferred API is overridden for
    /// the s3 provider.
    pub fn from_config(config: &Config) -> Self {
        if config.provider.name.eq_ignore_ascii_case("s3") {
            return Self {
                provider: Provider::S3,
                test_api: TestApi::Xml,
            };
        }
        let test_api = if config.provider.prefer_api.eq_ignore_ascii_case("xml") {
            TestApi::Xml
        } else {
            TestApi::Json
        };
        Self {
            provider: Provider::Gs,
            test_api,
        }
    }

    /// Vendor prefix used in custom metadata headers
    pub const fn custom_metadata_prefix(&self) -> &'static str {
        self.provider.custom_metadata_prefix()
    }
}

impl Default for TestApiConfig {
    fn default() -> Self {
        Self {
            provider: Provider::Gs,
            test_api: TestApi::Json,
        }
    }
}
