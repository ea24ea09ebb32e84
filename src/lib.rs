pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod progress;
pub mod read;
pub mod source;
pub mod write;
