//! Networking and data-source modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `source` defines the `DataSource` seam, `api` implements it over HTTP,
//! `demo` implements it over a fixed dataset, and `types` defines the wire
//! schema both share.

pub mod api;
pub mod demo;
pub mod source;
pub mod types;
