//! Model Context Protocol (MCP) server implementation.
//!
//! This module provides an MCP server that exposes otazo functionality to AI
//! assistants, so an agent can audit the dataset, pick up untranslated
//! strings and check overlay dictionaries it edits.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: MCP tool parameter and result types

mod server;
pub mod types;

pub use server::{OtazoMcpServer, run_server};
