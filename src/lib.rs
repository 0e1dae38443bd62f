//! canimerge library.
//!
//! Queries a CI server's JSON API to decide whether the master view and a
//! branch view are blue, and lists failing test cases on request.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
