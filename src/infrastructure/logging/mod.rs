//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber. The crate
//! itself only emits events; embedding applications call [`logger::init`]
//! once (or install their own subscriber).

pub mod logger;

pub use logger::init;
