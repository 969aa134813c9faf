use crate::schema::Vocabulary;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Jsonc,
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;

        match ext {
            "jsonc" => Some(Self::Jsonc),
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

pub const VOCABULARY_CANDIDATES: &[&str] = &[
    "config.json",
    "vocabulary.json",
    "vocabulary.jsonc",
    "vocabulary.yml",
    "vocabulary.yaml",
];

/// Load the vocabulary from `path`, or from the first candidate file found in
/// the working directory.
pub fn load_vocabulary(path: Option<&Path>) -> Result<Vocabulary> {
    let path = path
        .map(|p| p.to_path_buf())
        .or_else(|| find_vocabulary_file(Path::new(".")))
        .ok_or_else(|| {
            anyhow!(
                "No vocabulary document found (looked for {})",
                VOCABULARY_CANDIDATES.join(", ")
            )
        })?;

    load_vocabulary_from_file(&path)
}

pub fn load_vocabulary_from_file(path: &Path) -> Result<Vocabulary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read vocabulary file: {}", path.display()))?;

    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| anyhow!("Unknown vocabulary format for: {}", path.display()))?;

    let vocabulary = parse_vocabulary_content(&content, format)
        .with_context(|| format!("Invalid vocabulary file: {}", path.display()))?;

    vocabulary
        .validate()
        .with_context(|| format!("Invalid vocabulary file: {}", path.display()))?;

    Ok(vocabulary)
}

fn parse_vocabulary_content(content: &str, format: ConfigFormat) -> Result<Vocabulary> {
    match format {
        ConfigFormat::Jsonc => json5::from_str(content).context("Failed to parse JSONC"),
        ConfigFormat::Json => serde_json::from_str(content).context("Failed to parse JSON"),
        ConfigFormat::Yaml => serde_yaml_ng::from_str(content).context("Failed to parse YAML"),
    }
}

pub fn find_vocabulary_file(dir: &Path) -> Option<PathBuf> {
    VOCABULARY_CANDIDATES
        .iter()
        .map(|candidate| dir.join(candidate))
        .find(|path| path.exists())
}
