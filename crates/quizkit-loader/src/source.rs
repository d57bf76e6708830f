//! Content-source abstraction.
//!
//! The loader never discovers files on its own; it reads whatever records
//! the injected source enumerates. That keeps filesystem layout a
//! deployment concern and lets tests run against in-memory fixtures.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Serialization format of a raw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Toml,
    Json,
}

impl RecordFormat {
    /// Map a file extension to a format, if it is one we load.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "toml" => Some(RecordFormat::Toml),
            "json" => Some(RecordFormat::Json),
            _ => None,
        }
    }
}

/// One unparsed quiz definition record.
#[derive(Debug, Clone)]
pub struct RawRecord {
    /// Name used in failure reports (e.g. the file name).
    pub name: String,
    /// Raw contents.
    pub contents: String,
    /// How `contents` is encoded.
    pub format: RecordFormat,
}

/// An enumerable set of raw quiz records.
///
/// Reading is the only side effect the loader performs; sources never
/// write.
pub trait ContentSource: Send + Sync {
    /// Enumerate every record. Called again on reload; the result is not
    /// cached here.
    fn records(&self) -> Result<Vec<RawRecord>>;
}

/// Filesystem source: recursively collects `.toml` and `.json` files
/// under a root directory, sorted by path for deterministic ordering.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn collect(dir: &Path, records: &mut Vec<RawRecord>) -> Result<()> {
        let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
            .with_context(|| format!("failed to read directory: {}", dir.display()))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<_>>()?;
        entries.sort();

        for path in entries {
            if path.is_dir() {
                Self::collect(&path, records)?;
                continue;
            }
            let Some(format) = path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(RecordFormat::from_extension)
            else {
                continue;
            };
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read quiz file: {}", path.display()))?;
            records.push(RawRecord {
                name: path.display().to_string(),
                contents,
                format,
            });
        }
        Ok(())
    }
}

impl ContentSource for DirSource {
    fn records(&self) -> Result<Vec<RawRecord>> {
        if !self.root.is_dir() {
            anyhow::bail!("not a directory: {}", self.root.display());
        }
        let mut records = Vec::new();
        Self::collect(&self.root, &mut records)?;
        Ok(records)
    }
}

/// In-memory source for tests and embedded content.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<RawRecord>,
}

impl MemorySource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    /// Convenience constructor for a set of named TOML records.
    pub fn from_toml(records: &[(&str, &str)]) -> Self {
        Self {
            records: records
                .iter()
                .map(|(name, contents)| RawRecord {
                    name: (*name).to_string(),
                    contents: (*contents).to_string(),
                    format: RecordFormat::Toml,
                })
                .collect(),
        }
    }
}

impl ContentSource for MemorySource {
    fn records(&self) -> Result<Vec<RawRecord>> {
        Ok(self.records.clone())
    }
}
