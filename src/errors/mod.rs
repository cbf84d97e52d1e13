//! Error types for the driver.
//!
//! Lexical problems never surface here: the scanner reports them as
//! `Error`-kind tokens and keeps going. This module only covers the fatal
//! stream-level failures the surrounding driver can hit before scanning
//! starts.

pub mod errors;
