use std::f32::consts::FRAC_PI_4;

// Firework particle pool
pub const PARTICLE_COUNT: usize = 100;
/// Downward acceleration applied to particle vertical velocity, units/s.
pub const PARTICLE_GRAVITY: f32 = 0.1;
/// Half-range of the horizontal respawn velocity draw.
pub const PARTICLE_SPREAD: f32 = 0.1;
/// Upper bound of the vertical respawn velocity draw.
pub const PARTICLE_LIFT: f32 = 0.1;
/// Lifetime is this base plus a unit random draw, so always strictly positive.
pub const PARTICLE_BASE_LIFETIME: f32 = 1.0;
/// Spin rate of the emitter group, rad/s.
pub const EMITTER_SPIN_RATE: f32 = 0.2;

// Starfield
pub const STARFIELD_COUNT: usize = 100;
/// Half-size of the cube stars are scattered in.
pub const STARFIELD_EXTENT: f32 = 10.0;
pub const STARFIELD_SPIN_RATE: f32 = 0.02;

// Trophy silhouette
pub const TROPHY_POINT_COUNT: usize = 2000;
/// Fraction of points forming the base ring; the rest trace the cup spiral.
pub const TROPHY_RING_FRACTION: f32 = 0.3;
pub const TROPHY_RING_RADIUS: f32 = 0.3;
pub const TROPHY_CUP_BASE_RADIUS: f32 = 0.2;
pub const TROPHY_CUP_BULGE: f32 = 0.2;
pub const TROPHY_TILT: f32 = FRAC_PI_4;
pub const TROPHY_SCALE: f32 = 3.0;

// Virtual scroll
/// Logical pixels per wheel line tick.
pub const SCROLL_LINE_HEIGHT: f32 = 40.0;
/// Frame-rate-scaled lerp rate toward a smooth-scroll target.
pub const SCROLL_SMOOTH_RATE: f32 = 12.0;
/// Distance below which a smooth scroll snaps to its target, px.
pub const SCROLL_SNAP_EPSILON: f32 = 0.5;

// Hero fade-out while scrolling away
pub const HERO_FADE_THRESHOLD: f32 = 10.0;
pub const HERO_FADE_LIFT: f32 = 0.5;
/// Fraction of the viewport height over which the hero fades to zero.
pub const HERO_FADE_RANGE: f32 = 0.5;

// Scroll-linked 3D rig
/// Viewports of scroll covering the full rig travel.
pub const RIG_SCROLL_RANGE: f32 = 2.0;
pub const RIG_DROP: f32 = 4.0;
/// Rig pitch at full travel, as a fraction of pi.
pub const RIG_TILT: f32 = 0.1;
pub const RIG_RETREAT: f32 = 2.0;

// Showcase parallax depth factors
pub const SPONSOR_PARALLAX: f32 = 0.1;
pub const JUDGE_PARALLAX: f32 = 0.15;

// Pointer parallax shifts at full deflection, px
pub const POINTER_TITLE_SHIFT: f32 = 30.0;
pub const POINTER_STAT_SHIFT: f32 = 10.0;
pub const POINTER_PRIZE_SHIFT: f32 = 5.0;
pub const POINTER_SMOOTH_RATE: f32 = 4.0;

// Easing
/// Default overshoot of the back-out curve.
pub const BACK_OUT_DEFAULT: f32 = 1.7;
pub const BACK_OUT_SOFT: f32 = 1.2;

// Ambient loops
pub const STAT_BOB_AMPLITUDE: f32 = 10.0;
pub const STAT_BOB_PERIOD: f32 = 2.0;
pub const STAT_BOB_STAGGER: f32 = 0.3;
pub const PRIZE_PULSE_AMPLITUDE: f32 = 8.0;
pub const PRIZE_PULSE_SCALE: f32 = 0.03;
pub const PRIZE_PULSE_PERIOD: f32 = 2.5;
pub const PRIZE_PULSE_STAGGER: f32 = 0.2;

// Hover feedback
pub const HOVER_GROW_RATE: f32 = 10.0;
pub const CARD_HOVER_SCALE: f32 = 1.1;
pub const BUTTON_HOVER_SCALE: f32 = 1.05;
