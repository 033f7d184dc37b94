//! Configuration structures and loading.

use crate::error::{ConfigError, ConfigResult};
use crate::paths::AppPaths;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub documents: DocumentsConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> ConfigResult<Self> {
        let paths = AppPaths::new().ok_or(ConfigError::NoConfigDir)?;
        Self::load_from(&paths.config_file)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> ConfigResult<()> {
        let contents = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Create a default config file with comments.
    pub fn create_default_file(path: &PathBuf) -> ConfigResult<()> {
        let default_config = Self::default_config_string();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, default_config)?;
        Ok(())
    }

    /// Generate a default config file with helpful comments.
    pub fn default_config_string() -> String {
        r#"# Campus Assistant Configuration
# Document-grounded question answering for Babcock University

[gemini]
# Environment variable holding the Gemini API key
api_key_env = "GOOGLE_API_KEY"

# Model used for answer generation
model = "gemini-2.0-flash-exp"

# API base URL
host = "https://generativelanguage.googleapis.com"

# Request timeout in seconds
timeout_seconds = 120

[documents]
# Directory scanned for additional documents (created on first load)
scan_directory = "documents"

# Maximum characters of document context included in a prompt
max_context_chars = 15000

# Named sources loaded before the scan directory. Format is derived
# from the file extension (.pdf, .docx, .txt, .md).
[[documents.sources]]
name = "handbook"
path = "handbook.pdf"

[[documents.sources]]
name = "catalog"
path = "course_catalog.pdf"

[[documents.sources]]
name = "policies"
path = "student_policies.pdf"

[[documents.sources]]
name = "admissions"
path = "admissions_guide.pdf"

[[documents.sources]]
name = "faq"
path = "frequently_asked_questions.pdf"

[[documents.sources]]
name = "extra"
path = "extra_unit_form.pdf"

[[documents.sources]]
name = "bulletin"
path = "bulletin.pdf"

[[documents.sources]]
name = "info"
path = "information_policy.pdf"

[[documents.sources]]
name = "requirements"
path = "admission_requirements.txt"

[[documents.sources]]
name = "schedule"
path = "academic_schedule.txt"

[[documents.sources]]
name = "procedures"
path = "enrollment_procedures.docx"

[ui]
# Enable colored output
color = true
"#
        .to_string()
    }
}

/// Gemini API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub model: String,
    pub host: String,
    pub timeout_seconds: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GOOGLE_API_KEY".to_string(),
            model: "gemini-2.0-flash-exp".to_string(),
            host: "https://generativelanguage.googleapis.com".to_string(),
            timeout_seconds: 120,
        }
    }
}

/// A named document source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceEntry {
    pub name: String,
    pub path: String,
}

impl SourceEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Document loading settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    /// Named sources loaded before the scan directory, in order.
    pub sources: Vec<SourceEntry>,
    /// Directory scanned for additional documents.
    pub scan_directory: String,
    /// Maximum characters of document context included in a prompt.
    pub max_context_chars: usize,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            sources: vec![
                SourceEntry::new("handbook", "handbook.pdf"),
                SourceEntry::new("catalog", "course_catalog.pdf"),
                SourceEntry::new("policies", "student_policies.pdf"),
                SourceEntry::new("admissions", "admissions_guide.pdf"),
                SourceEntry::new("faq", "frequently_asked_questions.pdf"),
                SourceEntry::new("extra", "extra_unit_form.pdf"),
                SourceEntry::new("bulletin", "bulletin.pdf"),
                SourceEntry::new("info", "information_policy.pdf"),
                SourceEntry::new("requirements", "admission_requirements.txt"),
                SourceEntry::new("schedule", "academic_schedule.txt"),
                SourceEntry::new("procedures", "enrollment_procedures.docx"),
            ],
            scan_directory: "documents".to_string(),
            max_context_chars: 15000,
        }
    }
}

/// UI/Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.gemini.model, "gemini-2.0-flash-exp");
        assert_eq!(config.gemini.api_key_env, "GOOGLE_API_KEY");
        assert_eq!(config.documents.max_context_chars, 15000);
        assert_eq!(config.documents.scan_directory, "documents");
        assert_eq!(config.documents.sources.len(), 11);
        assert_eq!(config.documents.sources[0].name, "handbook");
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(config.gemini.model, deserialized.gemini.model);
        assert_eq!(
            config.documents.sources.len(),
            deserialized.documents.sources.len()
        );
    }

    #[test]
    fn test_default_config_string_parses() {
        let config: Config = toml::from_str(&Config::default_config_string()).unwrap();
        assert_eq!(config.documents.sources.len(), 11);
        assert_eq!(config.gemini.model, "gemini-2.0-flash-exp");
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
            [gemini]
            model = "gemini-1.5-pro"

            [documents]
            max_context_chars = 4000
            "#
        )
        .unwrap();

        let path = temp_file.path().to_path_buf();
        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.gemini.model, "gemini-1.5-pro");
        assert_eq!(config.documents.max_context_chars, 4000);
        // Defaults should still work
        assert_eq!(config.gemini.host, "https://generativelanguage.googleapis.com");
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let path = PathBuf::from("/nonexistent/campus/config.toml");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.gemini.api_key_env, "GOOGLE_API_KEY");
    }
}
