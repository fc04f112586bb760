//! # IO Layer
//!
//! Everything that crosses the process boundary: REST endpoints and
//! upload-file parsing.

pub mod ingest;
pub mod rest;
