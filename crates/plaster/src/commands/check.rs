//! Batch check command.
//!
//! Translates every markup file under the given paths through one shared
//! translator and reports the files that fail.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use plaster_elements::{TranslateError, Translator};
use walkdir::WalkDir;

use crate::config::ConfigFile;

/// Kind of markup a file holds, by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Html,
    Markdown,
}

impl SourceKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_lowercase().as_str() {
            "html" | "htm" => Some(Self::Html),
            "md" | "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }
}

/// Outcome of a check run.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Number of files translated
    pub checked: usize,

    /// Files that failed, with the reason
    pub failures: Vec<(PathBuf, String)>,
}

/// Run the check command.
pub fn run(config: &ConfigFile, paths: &[PathBuf]) -> Result<()> {
    let translator = super::translator(config);
    let report = check_paths(&translator, paths)?;

    for (path, reason) in &report.failures {
        tracing::error!("{}: {}", path.display(), reason);
    }

    if !report.failures.is_empty() {
        anyhow::bail!(
            "{} of {} files failed to translate",
            report.failures.len(),
            report.checked
        );
    }

    tracing::info!("Checked {} files", report.checked);
    Ok(())
}

/// Translate every recognised file under `paths`.
pub fn check_paths(translator: &Translator, paths: &[PathBuf]) -> Result<CheckReport> {
    let mut report = CheckReport::default();

    for root in paths {
        if !root.exists() {
            anyhow::bail!("Path not found: {}", root.display());
        }

        for entry in WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(kind) = SourceKind::from_path(path) else {
                tracing::debug!("Skipping {}", path.display());
                continue;
            };

            report.checked += 1;

            let source = match fs::read_to_string(path) {
                Ok(s) => s,
                Err(e) => {
                    report.failures.push((path.to_path_buf(), e.to_string()));
                    continue;
                }
            };

            if let Err(e) = check_source(translator, kind, &source) {
                report.failures.push((path.to_path_buf(), e.to_string()));
            } else {
                tracing::debug!("Translated {}", path.display());
            }
        }
    }

    Ok(report)
}

fn check_source(translator: &Translator, kind: SourceKind, source: &str) -> Result<(), TranslateError> {
    match kind {
        SourceKind::Html => translator.translate_html(source).map(|_| ()),
        SourceKind::Markdown => translator.translate_markdown(source).map(|_| ()),
    }
}
