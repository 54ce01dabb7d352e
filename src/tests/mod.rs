//! # Problems shared by the tests inside the crate.
//!
//! Convention for function names:
//!
//! * `fn canonical_form()`
//! * `fn artificial_tableau_form()`
//! * `fn tableau_form()`
