//! # REST API Interface Layer
//!
//! HTTP endpoints for the lending tracker. This layer handles
//! request/response serialization, translation of domain errors to
//! HTTP status codes, and request logging; business logic stays in
//! the domain layer.

pub mod credit_apis;
pub mod performance_apis;
pub mod plan_apis;
