//! # Error reporting for reading of linear program files
//!
//! A collection of errors describing any problems encountered during reading and parsing.
use std::io;

use thiserror::Error;

use crate::data::linear_program::canonical_form::DimensionError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("could not read problem file: {0}")]
    IO(#[from] io::Error),
    /// Contents of the file could not be parsed.
    ///
    /// # Note
    ///
    /// If the dimensions of the linear program are inconsistent, that will not be represented with
    /// this error. This variant should only be created for syntactically incorrect files.
    #[error("could not parse problem file: {0}")]
    Parse(#[from] serde_json::Error),
    /// There is a logical inconsistency in the linear program described by a file.
    #[error("inconsistent linear program: {0}")]
    LinearProgram(#[from] DimensionError),
}
