//! # Process-level plumbing
//!
//! Everything the screens never see: configuration discovery and
//! resolution. The component core is deliberately configuration-blind;
//! resolved settings feed the entry point and dispatcher selection
//! only.

pub mod config;
