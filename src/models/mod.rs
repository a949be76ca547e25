//! Data models for hhconvert.
//!
//! - [`ConverterSettings`]: Tunables loaded from `hhconvert.yaml`
//! - [`RunConfig`]: The immutable configuration of one conversion run
//!
//! Nothing here outlives a single invocation; the only persisted state is the
//! optional settings file.

pub mod config;

pub use config::{ConverterSettings, RunConfig, has_extension};
