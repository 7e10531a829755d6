pub mod audit;
mod command_context;
pub mod draw;
pub mod init;
pub mod languages;
pub mod missing;
pub mod overlays;
pub mod resolve;
