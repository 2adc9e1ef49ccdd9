//! Helpers shared by the `badwords` commands.

pub mod input;
