//! UI Module
//!
//! Terminal rendering for the login list screen.

pub mod components;
pub mod renderer;
