//! Display name generation for test suites
//!
//! Turns metadata about test classes, nested test classes and test methods
//! into human-readable labels, using one of the built-in styles or a custom
//! generator, and serves the same over MCP.

pub mod config;
pub mod entity;
pub mod generate;
pub mod handler;
pub mod mcp_types;
pub mod naming;
pub mod tools;
