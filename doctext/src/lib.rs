//! doctext: a small HTTP service that turns uploaded PDF, DOCX, TXT and ZIP files into
//! plain text.
//!
//! The extraction pipeline lives in [`processing`]; [`api`] wires it to axum.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod processing;
pub mod telemetry;
