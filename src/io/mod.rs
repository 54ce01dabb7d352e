//! # Reading of linear programs
//!
//! This module provides read functionality for linear program files.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::io::error::ImportError;

pub mod error;
pub mod json;

/// Import a problem from a file.
///
/// Currently only supports the JSON filetype, see the `json` module for the layout.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, or the dimensions in the
/// problem file don't fit together, an error type is returned.
pub fn import(file_path: &Path) -> Result<CanonicalForm<f64>, ImportError> {
    // Open and read the file
    let mut program = String::new();
    File::open(file_path)?
        .read_to_string(&mut program)?;

    // Choose the right parser
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("json") => json::parse(&program),
            Some(extension_string) => Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path,
            ))),
            None => Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension,
            ))),
        },
        None => Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path,
        ))),
    }
}
