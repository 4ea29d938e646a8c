// Library surface for tests and embedding callers

pub mod aggregator;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod processor;
pub mod scanner;
pub mod writer;
