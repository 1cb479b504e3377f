pub mod config;
pub mod preferences;
pub mod recommendation;
pub mod scoring;
pub mod tool;
