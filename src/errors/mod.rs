//! Error types for the tokenizer.
//!
//! The recognised grammar never rejects input, so the only failure a token
//! can carry today comes from the character source itself. New grammar rules
//! that detect malformed input add a variant to `ErrorImpl` and attach it to
//! the offending token instead of aborting the scan.

pub mod errors;
