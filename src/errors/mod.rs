//! Error types for lexical analysis.
//!
//! Every lexical error is fatal to the scan that raised it. The types here
//! carry:
//!
//! - The kind of fault and the offending text, if any
//! - The line the scanner was on when it gave up
//! - A short suggestion used when the error is rendered

pub mod errors;
