// Module structure for the log viewer engine.

// Core engine
pub mod filter;
pub mod format;
pub mod highlight;
pub mod parser;

// Session state
pub mod session;
pub mod view;

// Host-facing configuration
pub mod config;
