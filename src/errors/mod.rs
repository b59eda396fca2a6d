//! Diagnostics reported by the lexer.
//!
//! Scanning never stops on bad input. Each problem becomes a [`Diagnostic`]
//! carrying its kind and source position, which is logged and also handed
//! back to the caller next to the tokens.
//!
//! [`Diagnostic`]: errors::Diagnostic

pub mod errors;
