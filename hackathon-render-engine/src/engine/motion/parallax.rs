use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::motion::Motion;
use constants::motion::POINTER_SMOOTH_RATE;

/// Normalised pointer position, eased so elements trail the cursor rather
/// than snapping to it.
#[derive(Resource, Debug, Default)]
pub struct PointerParallax {
    target: Vec2,
    smoothed: Vec2,
}

impl PointerParallax {
    /// Map a cursor position to [-1, 1] on both axes.
    pub fn set_from_cursor(&mut self, position: Vec2, window_size: Vec2) {
        if window_size.x <= 0.0 || window_size.y <= 0.0 {
            return;
        }
        self.target = (position / window_size - Vec2::splat(0.5)) * 2.0;
    }

    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    pub fn ease(&mut self, dt: f32) {
        let rate = (POINTER_SMOOTH_RATE * dt).min(1.0);
        self.smoothed += (self.target - self.smoothed) * rate;
    }
}

/// How far an element drifts at full pointer deflection, in px.
#[derive(Component, Debug, Clone, Copy)]
pub struct PointerShift {
    pub strength: f32,
}

pub fn pointer_input_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cursor_moved: EventReader<CursorMoved>,
    mut parallax: ResMut<PointerParallax>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    for cursor in cursor_moved.read() {
        parallax.set_from_cursor(cursor.position, size);
    }
}

pub fn ease_pointer_system(time: Res<Time>, mut parallax: ResMut<PointerParallax>) {
    parallax.ease(time.delta_secs());
}

pub fn apply_pointer_parallax(
    parallax: Res<PointerParallax>,
    mut query: Query<(&PointerShift, &mut Motion)>,
) {
    for (shift, mut motion) in &mut query {
        motion.pointer.offset = parallax.smoothed() * shift.strength;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_positions_normalise_into_unit_deflection() {
        let mut parallax = PointerParallax::default();
        let size = Vec2::new(1280.0, 720.0);

        parallax.set_from_cursor(Vec2::new(640.0, 360.0), size);
        assert_eq!(parallax.target, Vec2::ZERO);

        parallax.set_from_cursor(Vec2::ZERO, size);
        assert_eq!(parallax.target, Vec2::splat(-1.0));

        parallax.set_from_cursor(size, size);
        assert_eq!(parallax.target, Vec2::splat(1.0));
    }

    #[test]
    fn zero_sized_windows_are_ignored() {
        let mut parallax = PointerParallax::default();
        parallax.set_from_cursor(Vec2::new(10.0, 10.0), Vec2::ZERO);
        assert_eq!(parallax.target, Vec2::ZERO);
    }

    #[test]
    fn easing_converges_on_the_target() {
        let mut parallax = PointerParallax::default();
        parallax.set_from_cursor(Vec2::new(1280.0, 720.0), Vec2::new(1280.0, 720.0));
        for _ in 0..300 {
            parallax.ease(1.0 / 60.0);
        }
        assert!((parallax.smoothed() - Vec2::splat(1.0)).length() < 0.01);
    }
}
