//! Domain types and rules shared by the store and the HTTP layer.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod patch;
pub mod search;
pub mod types;
pub mod validation;
