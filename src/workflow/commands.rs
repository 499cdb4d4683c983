// src/workflow/commands.rs

//! Command strings for the native build.
//!
//! All builders are pure: they only format what they are given. Missing path
//! variables become empty strings, so a misconfigured rebuild fails later in
//! CMake rather than here.

use crate::config::{BuildSection, TestEnv};
use crate::types::HostOs;

/// Compiler flags that hide symbols unless explicitly exported.
pub const HIDDEN_VISIBILITY_FLAGS: &str = "-fvisibility=hidden";

/// CMake configure invocation for a fresh build directory.
pub fn configure_command(build: &BuildSection, env: &TestEnv) -> String {
    format!(
        "{cmake} . -B{dir} -DLIBWEBRTC_INCLUDE_PATH:PATH={sources} -DLIBWEBRTC_BINARY_PATH:PATH={binary} -DMEDIASOUPCLIENT_BUILD_TESTS=\"true\" -DCMAKE_CXX_FLAGS=\"{flags}\"",
        cmake = build.cmake,
        dir = build.dir,
        sources = env.libwebrtc_sources.as_deref().unwrap_or_default(),
        binary = env.libwebrtc_binary.as_deref().unwrap_or_default(),
        flags = HIDDEN_VISIBILITY_FLAGS,
    )
}

pub fn build_command(build: &BuildSection) -> String {
    format!("{} --build {}", build.cmake, build.dir)
}

/// Relative path of the test executable for the given host.
///
/// macOS produces an application bundle; every other host a flat binary.
pub fn test_binary_path(os: HostOs, build: &BuildSection) -> String {
    let target = &build.test_target;
    match os {
        HostOs::Darwin => format!(
            "{dir}/test/{target}.app/Contents/MacOS/{target}",
            dir = build.dir
        ),
        HostOs::Other => format!("{dir}/test/{target}", dir = build.dir),
    }
}

/// Test executable path plus `TEST_ARGS`, joined by a single space.
pub fn test_command(os: HostOs, build: &BuildSection, env: &TestEnv) -> String {
    let binary = test_binary_path(os, build);
    match env.extra_test_args() {
        Some(args) => format!("{binary} {args}"),
        None => binary,
    }
}
