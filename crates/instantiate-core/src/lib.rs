//! Core library for the instantiate tool.
//!
//! Scaffolds a numbered project directory from a template tree:
//! - [`numbering`] infers the next sequence number from sibling directories
//! - [`context`] loads YAML/JSON context files into named namespaces
//! - [`copier`] copies the template tree into a fresh destination
//! - [`substitution`] renders every copied file in place with Handlebars
//! - [`pipeline`] runs the stages in order and reports which one failed
//!
//! The CLI lives in the `instantiate` crate; everything here is synchronous
//! and usable on its own.

pub mod config;
pub mod context;
pub mod copier;
pub mod error;
pub mod numbering;
pub mod pipeline;
pub mod project;
pub mod substitution;
pub mod templates;
