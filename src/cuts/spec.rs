use std::fs;
use std::path::Path;

use thiserror::Error;

use super::cut::{Comparator, Cut};
use crate::types::CutsVersion;

/// Label of the cutflow bin that every valid event fills.
pub const INITIAL_LABEL: &str = "INITIAL";

#[derive(Debug, Error)]
pub enum CutSpecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line {line}: expected '<name> <comparator> <value>', got '{content}'")]
    Malformed { line: usize, content: String },
    #[error("Line {line}: unknown comparator '{symbol}'")]
    UnknownComparator { line: usize, symbol: String },
    #[error("Line {line}: threshold '{value}' is not a number")]
    InvalidThreshold { line: usize, value: String },
}

/// Ordered list of cuts for one named selection.
#[derive(Clone, Debug, PartialEq)]
pub struct CutSpec {
    cuts: Vec<Cut>,
}

impl CutSpec {
    pub fn new(cuts: Vec<Cut>) -> Self {
        Self { cuts }
    }

    pub fn from_path(path: &Path) -> Result<Self, CutSpecError> {
        let text = fs::read_to_string(path)?;
        let spec = Self::parse(&text)?;
        log::debug!(
            "CUTS : loaded {} cuts from {}",
            spec.len(),
            path.display()
        );
        Ok(spec)
    }

    /// Parse `<name> <comparator> <value>` lines. `#` starts a comment;
    /// blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, CutSpecError> {
        let mut cuts = Vec::new();

        for (i, raw) in text.lines().enumerate() {
            let line = i + 1;
            let content = match raw.find('#') {
                Some(pos) => &raw[..pos],
                None => raw,
            };
            let content = content.trim();
            if content.is_empty() {
                continue;
            }

            let tokens: Vec<&str> = content.split_whitespace().collect();
            let [name, symbol, value] = tokens[..] else {
                return Err(CutSpecError::Malformed {
                    line,
                    content: content.to_string(),
                });
            };

            let comparator: Comparator = symbol
                .parse()
                .map_err(|symbol| CutSpecError::UnknownComparator { line, symbol })?;
            let value: f64 = value.parse().map_err(|_| CutSpecError::InvalidThreshold {
                line,
                value: value.to_string(),
            })?;

            cuts.push(Cut::new(name, comparator, value));
        }

        Ok(Self { cuts })
    }

    pub fn cuts(&self) -> &[Cut] {
        &self.cuts
    }

    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cuts.iter().map(|c| c.name.as_str())
    }

    /// `INITIAL` followed by the cut names in declaration order.
    pub fn cutflow_labels(&self) -> Vec<String> {
        std::iter::once(INITIAL_LABEL.to_string())
            .chain(self.names().map(str::to_string))
            .collect()
    }

    /// Hash over the normalized cut lines; whitespace and comments in the
    /// source do not affect it.
    pub fn version(&self) -> CutsVersion {
        let normalized: String = self
            .cuts
            .iter()
            .map(|c| format!("{c}\n"))
            .collect();
        CutsVersion::from_content(normalized.as_bytes())
    }
}
