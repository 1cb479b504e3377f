//! Rule-based AI tool recommendations.
//!
//! A [`Catalog`] of tools is filtered and scored against one [`Preferences`]
//! record to produce a ranked list of [`Recommendation`]s. An optional
//! [`advisory::AdvisoryPort`] can re-score the ranked list.

pub mod advisory;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod observe;
pub mod report;
pub mod types;

pub use catalog::Catalog;
pub use error::{Result, ToolmatchError};
pub use types::preferences::Preferences;
pub use types::recommendation::Recommendation;
