//! Core application setup.
//!
//! App construction, plugin wiring, and platform window configuration for
//! both native and WASM targets.

/// App and system schedule construction.
pub mod app_setup;

/// Platform-specific window configuration for native and WASM builds.
pub mod window_config;
