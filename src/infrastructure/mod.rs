//! # Infrastructure Layer
//!
//! Adapters to external systems. Currently only persistence; the HTTP
//! surface lives under `api`.

pub mod persistence;
