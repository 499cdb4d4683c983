// src/config/env.rs

//! Snapshot of the environment variables the test workflow understands.
//!
//! The workflow never reads the process environment itself; the snapshot is
//! taken once at the outermost boundary and passed in.

pub const REBUILD: &str = "REBUILD";
pub const PATH_TO_LIBWEBRTC_SOURCES: &str = "PATH_TO_LIBWEBRTC_SOURCES";
pub const PATH_TO_LIBWEBRTC_BINARY: &str = "PATH_TO_LIBWEBRTC_BINARY";
pub const TEST_ARGS: &str = "TEST_ARGS";

/// The only `REBUILD` value that enables the rebuild branch.
const REBUILD_ENABLED: &str = "true";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestEnv {
    pub rebuild: Option<String>,
    pub libwebrtc_sources: Option<String>,
    pub libwebrtc_binary: Option<String>,
    pub test_args: Option<String>,
}

impl TestEnv {
    /// Read the recognised variables from the process environment.
    ///
    /// Variables that are unset or not valid unicode are treated as absent.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a snapshot from an arbitrary lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            rebuild: lookup(REBUILD),
            libwebrtc_sources: lookup(PATH_TO_LIBWEBRTC_SOURCES),
            libwebrtc_binary: lookup(PATH_TO_LIBWEBRTC_BINARY),
            test_args: lookup(TEST_ARGS),
        }
    }

    /// `true` only for the exact string `"true"`.
    pub fn rebuild_requested(&self) -> bool {
        self.rebuild.as_deref() == Some(REBUILD_ENABLED)
    }

    /// Extra test arguments, if set and non-empty.
    pub fn extra_test_args(&self) -> Option<&str> {
        self.test_args.as_deref().filter(|s| !s.is_empty())
    }
}
