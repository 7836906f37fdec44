//! # IO Module
//!
//! Adapter layer between the browser app and the domain layer: the JSON
//! REST API under `/api`, request validation, and translation of domain
//! errors into HTTP status codes with a structured error body.

pub mod rest;

pub use rest::*;
