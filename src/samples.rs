//! Sample files: a flat sequence of `f32` values preceded by a shape header.
//!
//! ```text
//! # (8)
//! 1.0 2.0 3.0 4.0
//! 5.0 6.0 7.0 8.0
//! ```
//!
//! The header lists the dimensions, comma separated and optionally parenthesized. Values may be
//! separated by whitespace or commas and their count must equal the product of the dimensions.
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::SampleFileError;

/// Samples loaded from, or destined for, a sample file.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleFile {
    pub shape: Vec<usize>,
    pub data: Vec<f32>,
}

impl SampleFile {
    /// A one dimensional file holding `data`.
    pub fn from_samples(data: Vec<f32>) -> Self {
        Self {
            shape: vec![data.len()],
            data,
        }
    }

    /// Read and parse the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SampleFileError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SampleFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = text.parse::<Self>()?;
        debug!(path = %path.display(), shape = ?file.shape, "loaded sample file");
        Ok(file)
    }

    /// Write the samples to `path` in the format [`SampleFile::load`] reads.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SampleFileError> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|source| SampleFileError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Length along the first dimension, the transform length.
    pub fn rows(&self) -> usize {
        self.shape.first().copied().unwrap_or(0)
    }
}

fn parse_header(line: &str) -> Result<Vec<usize>, SampleFileError> {
    let malformed = || SampleFileError::MalformedHeader(line.to_string());

    let dims = line.trim().strip_prefix('#').ok_or_else(malformed)?.trim();
    let dims = dims
        .strip_prefix('(')
        .and_then(|d| d.strip_suffix(')'))
        .unwrap_or(dims);

    let shape = dims
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| d.parse::<usize>().map_err(|_| malformed()))
        .collect::<Result<Vec<_>, _>>()?;

    if shape.is_empty() {
        return Err(malformed());
    }
    // the sample count must fit in a usize
    shape
        .iter()
        .try_fold(1usize, |acc, d| acc.checked_mul(*d))
        .ok_or_else(malformed)?;
    Ok(shape)
}

impl FromStr for SampleFile {
    type Err = SampleFileError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines = text.lines().skip_while(|l| l.trim().is_empty());
        let header = lines.next().ok_or(SampleFileError::MissingHeader)?;
        let shape = parse_header(header)?;

        let data = lines
            .flat_map(|l| l.split(|c: char| c.is_whitespace() || c == ','))
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<f32>()
                    .map_err(|source| SampleFileError::InvalidValue {
                        token: token.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(SampleFileError::ShapeMismatch {
                expected,
                found: data.len(),
            });
        }

        Ok(Self { shape, data })
    }
}

impl std::fmt::Display for SampleFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dims = self
            .shape
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "# ({dims})")?;

        for x in &self.data {
            writeln!(f, "{x}")?;
        }
        Ok(())
    }
}
