// aiseo - SEO assistant: content scoring, AI-assisted analysis and markup generation
// Author: kelexine (https://github.com/kelexine)

pub mod ai;
pub mod analyzer;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod markup;
pub mod metrics;
pub mod server;
pub mod utils;
