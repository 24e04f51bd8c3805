use bevy::prelude::*;

/// Accent palette cycled across showcase cards by list position.
/// Purely decorative; card identity never depends on colour.
pub const CARD_PALETTE: [Color; 6] = [
    Color::srgb(0.298, 0.788, 0.941), // #4cc9f0
    Color::srgb(0.263, 0.380, 0.933), // #4361ee
    Color::srgb(0.227, 0.047, 0.639), // #3a0ca3
    Color::srgb(0.447, 0.035, 0.718), // #7209b7
    Color::srgb(0.969, 0.145, 0.522), // #f72585
    Color::srgb(0.282, 0.047, 0.659), // #480ca8
];

/// Subset cycled across judge cards.
pub const JUDGE_PALETTE: [Color; 4] = [
    Color::srgb(0.298, 0.788, 0.941), // #4cc9f0
    Color::srgb(0.263, 0.380, 0.933), // #4361ee
    Color::srgb(0.447, 0.035, 0.718), // #7209b7
    Color::srgb(0.969, 0.145, 0.522), // #f72585
];

pub const ACCENT_CYAN: Color = Color::srgb(0.298, 0.788, 0.941); // #4cc9f0
pub const ACCENT_PINK: Color = Color::srgb(0.969, 0.145, 0.522); // #f72585
pub const ACCENT_BLUE: Color = Color::srgb(0.263, 0.380, 0.933); // #4361ee
pub const ACCENT_PURPLE: Color = Color::srgb(0.576, 0.322, 0.918);
pub const ACCENT_GOLD: Color = Color::srgb(1.0, 0.745, 0.043); // #ffbe0b

/// Trophy point cloud tint.
pub const TROPHY_GOLD: Color = Color::srgb(1.0, 0.843, 0.0); // #ffd700

/// Drifting starfield tint, rendered at half opacity.
pub const STARFIELD_TINT: Color = Color::srgba(0.298, 0.788, 0.941, 0.5);

pub const TEXT_PRIMARY: Color = Color::WHITE;
pub const TEXT_MUTED: Color = Color::srgb(0.820, 0.835, 0.859); // gray-300
pub const TEXT_DIM: Color = Color::srgb(0.612, 0.639, 0.686); // gray-400

/// Card panel background, near-black with a violet cast.
pub const PANEL_BG: Color = Color::srgba(0.071, 0.004, 0.157, 0.9); // #120128
pub const PANEL_BORDER: Color = Color::srgba(1.0, 1.0, 1.0, 0.1);

/// Navigation dot when its section is not active.
pub const NAV_DOT_IDLE: Color = Color::srgba(1.0, 1.0, 1.0, 0.5);
