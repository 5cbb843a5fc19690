// ChromeLike shared type definitions
// Each submodule defines types used across the application.

pub mod action;
pub mod config;
pub mod errors;
pub mod tab;
