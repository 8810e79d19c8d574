//! Core module - Shared types for the word count job
//!
//! This module provides:
//! - Directory layout and job configuration
//! - Error type for pipeline stages
//! - Run reports
//! - Logging setup

pub mod error;
pub mod logging;
pub mod model;
pub mod paths;
