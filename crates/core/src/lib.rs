//! Yahrzeit Core - Shared types library.
//!
//! This crate provides the types used across the Yahrzeit client components:
//! - `client` - Form, lookup and result-page handlers
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Credentials, password policy, anti-forgery token, sunset
//!   lookup values, response statuses, view modes and routes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
