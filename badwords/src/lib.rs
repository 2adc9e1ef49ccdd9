// badwords/src/lib.rs
//! # badwords CLI Application
//!
//! Command-line front end for `badwords-core`: cleaning and checking text
//! against the blacklist, and AI moderation through OpenModerator.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod utils;
