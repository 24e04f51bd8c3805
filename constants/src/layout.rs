// Section visibility tracking
/// Fraction of a section's area that must be on screen before it counts
/// as visible.
pub const VISIBILITY_THRESHOLD: f32 = 0.15;
/// Fraction of the viewport height trimmed from top and bottom when
/// measuring visibility.
pub const VIEWPORT_MARGIN: f32 = 0.10;

// Section slots, in viewport heights
pub const HERO_HEIGHT_FACTOR: f32 = 1.0;
pub const SHOWCASE_HEIGHT_FACTOR: f32 = 3.0;

// Showcase block anchors, as fractions of the showcase slot
pub const SHOWCASE_TITLE_ANCHOR: f32 = 0.02;
pub const SPONSORS_ANCHOR: f32 = 0.12;
pub const JUDGES_ANCHOR: f32 = 0.45;
pub const CTA_ANCHOR: f32 = 0.78;

// Reveal trigger points, as fractions of the viewport height
pub const TITLE_REVEAL_POINT: f32 = 0.8;
pub const BLOCK_REVEAL_POINT: f32 = 0.7;

// Navigation indicator
pub const NAV_DOT_SIZE: f32 = 12.0;
pub const NAV_DOT_GAP: f32 = 8.0;
pub const NAV_MARGIN: f32 = 32.0;
pub const NAV_ACTIVE_SCALE: f32 = 1.25;

// Content column
pub const CONTENT_MAX_WIDTH: f32 = 1152.0;
pub const CARD_GAP: f32 = 32.0;
pub const CARD_PADDING: f32 = 24.0;
pub const CARD_BORDER_WIDTH: f32 = 1.0;
pub const CARD_CORNER_RADIUS: f32 = 12.0;
pub const AVATAR_SIZE: f32 = 128.0;
