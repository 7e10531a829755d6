//! Otazo - multilingual question dataset toolkit
//!
//! Otazo resolves the text of a question-card dataset in ten languages. Each
//! record carries per-language values; missing or placeholder values are
//! filled from per-language overlay dictionaries keyed by the normalized
//! reference text, then from a fixed fallback chain. It also audits dataset
//! completeness and lists the strings that still need translating.
//!
//! ## Module Structure
//!
//! - `language`: Supported language codes and their properties
//! - `text`: Tag/number stripping and key normalization
//! - `dataset`: Records, topics and dataset loading
//! - `overlay`: Overlay dictionary store and loading
//! - `resolve`: Localized text resolution with fallbacks
//! - `audit`: Completeness statistics and gap lists
//! - `draw`: Random question draw
//! - `config`: Configuration file loading and parsing
//! - `project`: Loading a project directory
//! - `logging`: Diagnostic logging setup
//! - `cli`: Command-line interface layer
//! - `mcp`: Model Context Protocol server implementation

pub mod audit;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod draw;
pub mod language;
pub mod logging;
pub mod mcp;
pub mod overlay;
pub mod project;
pub mod resolve;
pub mod text;
