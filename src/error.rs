//! Error types
//!
//! The transform itself has no failure modes once its inputs are valid, so [`FftError`] only
//! describes rejected inputs. [`SampleFileError`] belongs to the sample file reader used by the
//! verification binary.

use std::path::PathBuf;

/// Error returned when a buffer cannot be transformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FftError {
    /// The transform length must be a non-zero power of two.
    #[error("transform length must be a non-zero power of two, got {len}")]
    NotPowerOfTwo {
        /// The offending length
        len: usize,
    },

    /// The real and imaginary buffers must describe the same number of samples.
    #[error("real and imaginary buffers differ in length ({reals} != {imags})")]
    LengthMismatch {
        /// Length of the real buffer
        reals: usize,
        /// Length of the imaginary buffer
        imags: usize,
    },
}

/// Error returned while reading or writing a sample file.
#[derive(Debug, thiserror::Error)]
pub enum SampleFileError {
    /// The file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file has no shape header.
    #[error("missing shape header")]
    MissingHeader,

    /// The shape header could not be parsed.
    #[error("malformed shape header: {0:?}")]
    MalformedHeader(String),

    /// A sample could not be parsed as a float.
    #[error("invalid sample value {token:?}")]
    InvalidValue {
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// The number of samples disagrees with the shape header.
    #[error("shape header describes {expected} samples but the file holds {found}")]
    ShapeMismatch { expected: usize, found: usize },
}
