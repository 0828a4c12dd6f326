//! Test descriptor metadata
//!
//! Scheduling constraints are data on a descriptor, consumed by whatever
//! runner executes the suite, rather than markers smuggled onto functions.

/// Scheduling attributes for one test case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestAttrs {
    /// May run concurrently with other cases
    pub parallelizable: bool,
    /// Must run in its own process
    pub requires_isolation: bool,
}

impl Default for TestAttrs {
    fn default() -> Self {
        Self {
            parallelizable: true,
            requires_isolation: false,
        }
    }
}

impl TestAttrs {
    /// Mark the case as unsafe to run concurrently
    pub const fn not_parallelizable(mut self) -> Self {
        self.parallelizable = false;
        self
    }

    /// Mark the case as requiring a separate process
    pub const fn requires_isolation(mut self) -> Self {
        self.requires_isolation = true;
        self
    }
}

/// A test case as seen by an external runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestDescriptor {
    /// Test case name
    pub name: &'static str,
    /// Scheduling attributes
    pub attrs: TestAttrs,
}

impl TestDescriptor {
    /// Descriptor with default attributes
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: TestAttrs {
                parallelizable: true,
                requires_isolation: false,
            },
        }
    }

    /// Descriptor with explicit attributes
    pub const fn with_attrs(name: &'static str, attrs: TestAttrs) -> Self {
        Self { name, attrs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_parallel_and_in_process() {
        let descriptor = TestDescriptor::new("case");
        assert!(descriptor.attrs.parallelizable);
        assert!(!descriptor.attrs.requires_isolation);
    }

    #[test]
    fn test_attrs_compose() {
        let attrs = TestAttrs::default().not_parallelizable().requires_isolation();
        let descriptor = TestDescriptor::with_attrs("case", attrs);
        assert!(!descriptor.attrs.parallelizable);
        assert!(descriptor.attrs.requires_isolation);
    }
}
