pub mod core;
pub mod document;
pub mod error;
pub mod filter;
pub mod normalizer;
pub mod observer;
pub mod report;
pub mod token;
pub mod tokenizer;
pub mod tracker;
pub mod util;
