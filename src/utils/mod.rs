//! Utility functions shared by the strategies.
//!
//! - [`code_generator`] - Random base-62 short code generation

pub mod code_generator;
