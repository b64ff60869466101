use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::templates::engine::TemplateResolver;
use crate::vars::clock::Clock;
use crate::vars::datemath::DateMathError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("template not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read template file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: {source}")]
    MalformedDate {
        line: usize,
        #[source]
        source: DateMathError,
    },
}

/// A template after every line has been resolved.
///
/// Lines are stored without their line endings and in source order. The
/// document is not validated here; see [`crate::invoice::StructuredInvoice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDocument {
    lines: Vec<String>,
}

impl InvoiceDocument {
    /// Load and resolve a template file.
    pub fn load<C: Clock>(
        path: &Path,
        resolver: &TemplateResolver<C>,
    ) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path: path.to_path_buf() },
            _ => LoadError::Io { path: path.to_path_buf(), source: e },
        })?;

        debug!(path = %path.display(), "loading invoice template");
        Self::read(BufReader::new(file), path, resolver)
    }

    /// Resolve a template from any reader, e.g. an in-memory string.
    pub fn from_reader<R: Read, C: Clock>(
        reader: R,
        resolver: &TemplateResolver<C>,
    ) -> Result<Self, LoadError> {
        Self::read(BufReader::new(reader), Path::new("<memory>"), resolver)
    }

    fn read<R: BufRead, C: Clock>(
        reader: R,
        origin: &Path,
        resolver: &TemplateResolver<C>,
    ) -> Result<Self, LoadError> {
        let mut lines = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let raw = line
                .map_err(|e| LoadError::Io { path: origin.to_path_buf(), source: e })?;
            let raw = raw.strip_suffix('\r').unwrap_or(&raw);

            let resolved = resolver
                .resolve_line(raw)
                .map_err(|source| LoadError::MalformedDate { line: idx + 1, source })?;
            lines.push(resolved);
        }

        debug!(lines = lines.len(), "template resolved");
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl From<Vec<String>> for InvoiceDocument {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}
