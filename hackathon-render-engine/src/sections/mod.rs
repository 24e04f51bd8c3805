//! Page sections and the systems that track and navigate them.

/// Hero content and its scroll fade.
pub mod hero;

/// Hover feedback, outbound links, and registration presses.
pub mod interactions;

/// Floating navigation dots and smooth scroll-to-section.
pub mod nav_indicator;

/// Sponsor, judge, and call-to-action blocks with reveal and parallax.
pub mod showcase;

/// Section geometry, visibility tracking, and the active section.
pub mod tracker;
