//! # Problems in JSON format
//!
//! A problem is a single object:
//!
//! ```json
//! {
//!     "objective": [3, 1, 2],
//!     "constant": 0,
//!     "constraints": [[1, 1, 3], [2, 2, 5], [4, 1, 2]],
//!     "b": [30, 24, 36]
//! }
//! ```
//!
//! It is read as maximizing `objective^T x + constant` subject to `constraints x <= b` and
//! `x >= 0`. The `constant` field may be omitted.
use serde::Deserialize;

use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::io::error::ImportError;

/// Layout of a problem file, before the dimensions are checked.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProblemFile {
    objective: Vec<f64>,
    #[serde(default)]
    constant: f64,
    constraints: Vec<Vec<f64>>,
    b: Vec<f64>,
}

/// Parse the contents of a problem file.
pub fn parse(program: &str) -> Result<CanonicalForm<f64>, ImportError> {
    let file: ProblemFile = serde_json::from_str(program)?;

    CanonicalForm::with_offset(file.objective, file.constant, file.constraints, file.b)
        .map_err(ImportError::from)
}
