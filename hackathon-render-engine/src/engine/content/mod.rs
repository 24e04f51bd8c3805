//! Static content: sponsor and judge records and their optional JSON override.

/// Roster asset loading with fallback to the built-in lists.
pub mod loader;

/// Record shapes and the built-in roster.
pub mod records;
