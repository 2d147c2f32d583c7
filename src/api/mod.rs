//! # API Layer
//!
//! External interfaces. Only a REST surface is exposed.

pub mod rest;
