mod config;
mod dataset;
