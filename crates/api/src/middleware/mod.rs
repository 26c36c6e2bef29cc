//! Request extractors shared by the handlers.
//!
//! - [`validated_json::ValidatedJson`] -- Parses a JSON body and runs its `validator` rules.

pub mod validated_json;
