//! Temporary filesystem fixtures
//!
//! [`TestFixtures`] creates uniquely named files, directories, and fifos for
//! one test, tracks every directory it makes, and removes them all on
//! teardown. Teardown is best-effort: removal errors are ignored so cleanup
//! can never mask a test's actual failure.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::TestApiConfig;
use crate::naming::{self, FixtureKind};
use crate::posix::{self, PosixAttrs};

/// How to populate a temporary directory
#[derive(Debug, Clone)]
pub enum TestFiles {
    /// Generate this many files with generated names
    Count(usize),
    /// Create files with exactly these names
    Named(Vec<String>),
}

impl From<usize> for TestFiles {
    fn from(count: usize) -> Self {
        TestFiles::Count(count)
    }
}

impl From<Vec<String>> for TestFiles {
    fn from(names: Vec<String>) -> Self {
        TestFiles::Named(names)
    }
}

impl From<&[&str]> for TestFiles {
    fn from(names: &[&str]) -> Self {
        TestFiles::Named(names.iter().map(|s| s.to_string()).collect())
    }
}

/// Options for [`TestFixtures::create_temp_file`]
///
/// Everything is optional; the defaults produce a file with a generated name
/// and generated contents in a fresh temporary directory, touching neither
/// ownership, mode, nor timestamps.
#[derive(Debug, Clone, Default)]
pub struct TempFileOptions<'a> {
    /// Directory to place the file in; a new tracked directory if absent
    pub tmpdir: Option<&'a Path>,

    /// File name, possibly with `/`-separated parent components that will
    /// be created as needed; a generated name if absent
    pub file_name: Option<&'a str>,

    /// Bytes to write; a generated test string if absent
    pub contents: Option<&'a [u8]>,

    /// Modification time in seconds since the Unix epoch. The access time
    /// is set to the same value.
    pub mtime: Option<i64>,

    /// Ownership and permission bits, applied only for fields that differ
    /// from their sentinels
    pub attrs: PosixAttrs,
}

impl<'a> TempFileOptions<'a> {
    pub fn in_dir(mut self, tmpdir: &'a Path) -> Self {
        self.tmpdir = Some(tmpdir);
        self
    }

    pub fn named(mut self, file_name: &'a str) -> Self {
        self.file_name = Some(file_name);
        self
    }

    pub fn contents(mut self, contents: &'a [u8]) -> Self {
        self.contents = Some(contents);
        self
    }

    /// Text contents, encoded to bytes
    pub fn text(mut self, contents: &'a str) -> Self {
        self.contents = Some(contents.as_bytes());
        self
    }

    pub fn mtime(mut self, mtime: i64) -> Self {
        self.mtime = Some(mtime);
        self
    }

    pub fn attrs(mut self, attrs: PosixAttrs) -> Self {
        self.attrs = attrs;
        self
    }
}

/// Per-test fixture factory and owner
///
/// One instance belongs to exactly one test. Directories it creates are
/// removed recursively when [`teardown`](Self::teardown) runs or the value
/// is dropped, whichever comes first.
#[derive(Debug)]
pub struct TestFixtures {
    method_name: String,
    config: TestApiConfig,
    tempdirs: Vec<PathBuf>,
}

impl TestFixtures {
    /// Create a fixture factory for the named test
    ///
    /// The provider/API selection is explicit input; see
    /// [`TestApiConfig::from_config`].
    pub fn new(method_name: impl Into<String>, config: TestApiConfig) -> Self {
        Self {
            method_name: method_name.into(),
            config,
            tempdirs: Vec::new(),
        }
    }

    /// Name of the test that owns these fixtures
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Provider/API selection this test run targets
    pub fn config(&self) -> &TestApiConfig {
        &self.config
    }

    /// Generate a most-likely-unique name for a fixture of `kind`
    pub fn make_temp_name(&self, kind: FixtureKind) -> String {
        naming::make_temp_name(&self.method_name, kind, "")
    }

    /// Like [`make_temp_name`](Self::make_temp_name), with a leading prefix
    pub fn make_temp_name_with_prefix(&self, kind: FixtureKind, prefix: &str) -> String {
        naming::make_temp_name(&self.method_name, kind, prefix)
    }

    /// Create a tracked temporary directory
    ///
    /// The directory and everything in it is removed at teardown. It is
    /// optionally populated according to `test_files`; generated files get
    /// `contents` if supplied, otherwise ASCII `"test <i>"` by index.
    pub fn create_temp_dir(
        &mut self,
        test_files: TestFiles,
        contents: Option<&[u8]>,
    ) -> io::Result<PathBuf> {
        let prefix = self.make_temp_name(FixtureKind::Directory);
        let tmpdir = tempfile::Builder::new().prefix(&prefix).tempdir()?.keep();
        self.tempdirs.push(tmpdir.clone());

        let names = match test_files {
            TestFiles::Count(count) => (0..count)
                .map(|_| self.make_temp_name(FixtureKind::File))
                .collect(),
            TestFiles::Named(names) => names,
        };
        for (i, name) in names.iter().enumerate() {
            let default_contents;
            let file_contents = match contents {
                Some(bytes) => bytes,
                None => {
                    default_contents = format!("test {i}");
                    default_contents.as_bytes()
                }
            };
            self.create_temp_file(
                TempFileOptions::default()
                    .in_dir(&tmpdir)
                    .named(name)
                    .contents(file_contents),
            )?;
        }
        Ok(tmpdir)
    }

    /// Create a temporary file
    ///
    /// Parent directories of a nested `file_name` are created as needed.
    /// Filesystem errors are propagated unmodified; there is no retry.
    pub fn create_temp_file(&mut self, opts: TempFileOptions<'_>) -> io::Result<PathBuf> {
        let tmpdir = match opts.tmpdir {
            Some(dir) => dir.to_path_buf(),
            None => self.create_temp_dir(TestFiles::Count(0), None)?,
        };
        let file_name = match opts.file_name {
            Some(name) => name.to_string(),
            None => self.make_temp_name(FixtureKind::File),
        };
        let fpath = tmpdir.join(&file_name);

        if let Some(parent) = fpath.parent() {
            if !parent.is_dir() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let generated;
        let contents = match opts.contents {
            Some(bytes) => bytes,
            None => {
                generated = self.make_temp_name(FixtureKind::Contents);
                generated.as_bytes()
            }
        };
        std::fs::write(&fpath, contents)?;

        if let Some(mtime) = opts.mtime {
            posix::set_file_times(&fpath, mtime)?;
        }
        opts.attrs.apply(&fpath)?;

        Ok(fpath)
    }

    /// Create a temporary named pipe
    ///
    /// Not available on Windows, which has no fifos.
    #[cfg(unix)]
    pub fn create_temp_fifo(
        &mut self,
        tmpdir: Option<&Path>,
        file_name: Option<&str>,
    ) -> io::Result<PathBuf> {
        let tmpdir = match tmpdir {
            Some(dir) => dir.to_path_buf(),
            None => self.create_temp_dir(TestFiles::Count(0), None)?,
        };
        let file_name = match file_name {
            Some(name) => name.to_string(),
            None => self.make_temp_name(FixtureKind::Fifo),
        };
        let fpath = tmpdir.join(file_name);

        nix::unistd::mkfifo(&fpath, nix::sys::stat::Mode::from_bits_truncate(0o600))
            .map_err(|e| io::Error::from_raw_os_error(e as i32))?;
        Ok(fpath)
    }

    /// Remove every tracked temporary directory
    ///
    /// Removal errors are ignored. Safe to call more than once; later calls
    /// see an empty tracked list.
    pub fn teardown(&mut self) {
        while let Some(tmpdir) = self.tempdirs.pop() {
            debug!(path = %tmpdir.display(), "removing fixture directory");
            let _ = std::fs::remove_dir_all(&tmpdir);
        }
    }
}

impl Drop for TestFixtures {
    fn drop(&mut self) {
        self.teardown();
    }
}
