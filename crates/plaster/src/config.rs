//! Configuration file (plaster.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use plaster_markup::MarkdownOptions;
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub markdown: MarkdownOptions,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How translated elements are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented outline
    #[default]
    Tree,
    /// serde_json rendering of the element tree
    Json,
    /// Markup rendered back from the typed tree
    Html,
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("plaster.toml")).unwrap();

        assert_eq!(config.markdown, MarkdownOptions::default());
        assert_eq!(config.output.format, OutputFormat::Tree);
    }

    #[test]
    fn reads_markdown_and_output_sections() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("plaster.toml");
        fs::write(
            &path,
            r#"
[markdown]
tables = true

[output]
format = "json"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();

        assert!(config.markdown.tables);
        assert!(!config.markdown.strikethrough);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn errors_on_malformed_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("plaster.toml");
        fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();

        assert!(load_config(&path).is_err());
    }
}
