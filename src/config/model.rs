// src/config/model.rs

use std::path::{Component, Path};

use serde::Deserialize;

/// Name of the optional project file looked up in the project directory.
pub const DEFAULT_CONFIG_FILE: &str = "Devtasks.toml";

/// Source groups checked by the style tool: sources, headers, test sources,
/// test headers.
pub const DEFAULT_STYLE_FILES: [&str; 4] = [
    "src/**/*.cpp",
    "include/**/*.hpp",
    "test/src/**/*.cpp",
    "test/include/**/*.hpp",
];

/// Project configuration as read from a TOML file.
///
/// ```toml
/// [build]
/// dir = "build"
/// test_target = "test_mediasoupclient"
/// cmake = "cmake"
///
/// [style]
/// tool = "clang-format"
/// files = ["src/**/*.cpp", "include/**/*.hpp"]
/// ```
///
/// Every section and key is optional; a missing file is the same as an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawProjectConfig {
    #[serde(default)]
    pub build: BuildSection,

    #[serde(default)]
    pub style: StyleSection,
}

/// Validated project configuration. Construct via `TryFrom<RawProjectConfig>`.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    build: BuildSection,
    style: StyleSection,
}

impl ProjectConfig {
    pub(crate) fn new_unchecked(build: BuildSection, style: StyleSection) -> Self {
        Self { build, style }
    }

    pub fn build(&self) -> &BuildSection {
        &self.build
    }

    pub fn style(&self) -> &StyleSection {
        &self.style
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self::new_unchecked(BuildSection::default(), StyleSection::default())
    }
}

/// `[build]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSection {
    /// Build output directory, relative to the project root.
    #[serde(default = "default_build_dir")]
    pub dir: String,

    /// Name of the test executable target.
    #[serde(default = "default_test_target")]
    pub test_target: String,

    /// CMake executable used for both configure and build.
    #[serde(default = "default_cmake")]
    pub cmake: String,
}

impl BuildSection {
    /// `dir` names a subdirectory of the project root: relative, no `..`,
    /// and not the root itself. The rebuild step deletes it recursively.
    pub fn dir_is_inside_project(&self) -> bool {
        let mut has_normal = false;
        for component in Path::new(self.dir.trim()).components() {
            match component {
                Component::Normal(_) => has_normal = true,
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return false,
            }
        }
        has_normal
    }
}

fn default_build_dir() -> String {
    "build".to_string()
}

fn default_test_target() -> String {
    "test_mediasoupclient".to_string()
}

fn default_cmake() -> String {
    "cmake".to_string()
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            dir: default_build_dir(),
            test_target: default_test_target(),
            cmake: default_cmake(),
        }
    }
}

/// `[style]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleSection {
    /// clang-format compatible executable.
    #[serde(default = "default_style_tool")]
    pub tool: String,

    /// Glob patterns, relative to the project root.
    #[serde(default = "default_style_files")]
    pub files: Vec<String>,
}

fn default_style_tool() -> String {
    "clang-format".to_string()
}

fn default_style_files() -> Vec<String> {
    DEFAULT_STYLE_FILES.iter().map(|s| s.to_string()).collect()
}

impl Default for StyleSection {
    fn default() -> Self {
        Self {
            tool: default_style_tool(),
            files: default_style_files(),
        }
    }
}
