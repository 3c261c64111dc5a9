use std::path::Path;

use crate::error::Error;
use crate::render::MarkdownOptions;

/// File name looked up in the working directory when no config is given.
pub const CONFIG_FILE: &str = ".doctree.toml";

/// Project configuration loaded from `.doctree.toml`.
/// Include/exclude patterns are prefixes applied to schema file names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    exclude: Vec<String>,
    include: Vec<String>,
    markdown: MarkdownOptions,
    title: Option<String>,
}

/// Raw TOML structure for `.doctree.toml`.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct DoctreeTomlConfig {
    #[serde(default)]
    exclude: Vec<String>,
    #[serde(default)]
    include: Vec<String>,
    #[serde(default)]
    markdown: MarkdownTomlSection,
    title: Option<String>,
}

/// The `[markdown]` table.
#[derive(Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct MarkdownTomlSection {
    start_depth: Option<usize>,
    stylesheet: Option<bool>,
}

impl Config {
    /// Load config from `.doctree.toml` in the given root directory.
    /// Returns defaults if the file doesn't exist.
    /// Returns an error if the file exists but is malformed; a config the
    /// user wrote is never silently replaced by defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(Error::Io(e)),
        };
        Self::parse(&content)
    }

    /// Load config from an explicitly named file, which must exist.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigNotFound` if the file is missing,
    /// `Error::Io` for other read failures, or `Error::TomlDe` if it is malformed.
    pub fn load_file(path: &Path) -> Result<Self, Error> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::ConfigNotFound { path: path.to_path_buf() });
            },
            Err(e) => return Err(Error::Io(e)),
        };
        Self::parse(&content)
    }

    /// Parse config from TOML content.
    ///
    /// # Errors
    ///
    /// Returns `Error::TomlDe` if the TOML is malformed or has unknown keys.
    pub fn parse(content: &str) -> Result<Self, Error> {
        let raw: DoctreeTomlConfig = toml::from_str(content)?;
        let defaults = MarkdownOptions::default();
        Ok(Self {
            exclude: raw.exclude,
            include: raw.include,
            markdown: MarkdownOptions {
                start_depth: raw.markdown.start_depth.unwrap_or(defaults.start_depth).max(1),
                stylesheet: raw.markdown.stylesheet.unwrap_or(defaults.stylesheet),
            },
            title: raw.title,
        })
    }

    /// Check whether a schema file should be documented.
    ///
    /// A file is included if no include patterns are set,
    /// or if its name starts with at least one include pattern.
    /// An included file is then excluded if it starts with any exclude pattern.
    pub fn should_document(&self, file_name: &str) -> bool {
        let included = self.include.is_empty()
            || self.include.iter().any(|p| file_name.starts_with(p.as_str()));

        if !included {
            return false;
        }

        !self.exclude.iter().any(|p| file_name.starts_with(p.as_str()))
    }

    /// Options for the markdown renderer.
    pub const fn markdown_options(&self) -> MarkdownOptions {
        self.markdown
    }

    /// Root name override, if configured.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}
