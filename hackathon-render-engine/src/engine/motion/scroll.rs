use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::engine::motion::easing::lerp;
use constants::motion::{SCROLL_LINE_HEIGHT, SCROLL_SMOOTH_RATE, SCROLL_SNAP_EPSILON};

/// Virtual scroll position of the page in logical pixels. The single source
/// every scroll-linked effect derives from.
#[derive(Resource, Debug, Default)]
pub struct ScrollState {
    offset: f32,
    max_offset: f32,
    viewport_height: f32,
    target: Option<f32>,
}

impl ScrollState {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    /// Update the scrollable metrics, keeping the offset in range.
    pub fn set_metrics(&mut self, viewport_height: f32, content_height: f32) {
        self.viewport_height = viewport_height;
        self.max_offset = (content_height - viewport_height).max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_offset);
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.target = None;
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset);
    }

    /// Begin a smooth scroll toward an absolute offset.
    pub fn scroll_to(&mut self, offset: f32) {
        self.target = Some(offset.clamp(0.0, self.max_offset));
    }

    pub fn target(&self) -> Option<f32> {
        self.target
    }

    /// Normalised progress through a slice of the global scroll range,
    /// always clamped to [0, 1]. Slices for adjacent sections may overlap;
    /// each derives independently.
    pub fn progress(&self, start: f32, end: f32) -> f32 {
        if end <= start {
            return if self.offset >= end { 1.0 } else { 0.0 };
        }
        ((self.offset - start) / (end - start)).clamp(0.0, 1.0)
    }

    fn ease_toward_target(&mut self, dt: f32) {
        let Some(target) = self.target else {
            return;
        };
        let rate = (SCROLL_SMOOTH_RATE * dt).min(1.0);
        self.offset = lerp(self.offset, target, rate);
        if (self.offset - target).abs() < SCROLL_SNAP_EPSILON {
            self.offset = target;
            self.target = None;
        }
    }
}

/// Accumulate wheel input, handling both line and pixel scroll units. Any
/// manual input cancels an in-flight smooth scroll.
pub fn scroll_input_system(
    mut scroll: ResMut<ScrollState>,
    mut wheel_events: EventReader<MouseWheel>,
) {
    let mut accum = 0.0;
    for ev in wheel_events.read() {
        accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * SCROLL_LINE_HEIGHT,
            MouseScrollUnit::Pixel => ev.y,
        };
    }

    if accum.abs() > f32::EPSILON {
        // Wheel-up is positive in the event; the page offset moves opposite.
        scroll.scroll_by(-accum);
    }
}

/// Ease toward the smooth-scroll target, if one is set.
pub fn smooth_scroll_system(time: Res<Time>, mut scroll: ResMut<ScrollState>) {
    scroll.ease_toward_target(time.delta_secs());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(viewport: f32, content: f32) -> ScrollState {
        let mut scroll = ScrollState::default();
        scroll.set_metrics(viewport, content);
        scroll
    }

    #[test]
    fn offset_is_clamped_to_the_scrollable_range() {
        let mut scroll = state(800.0, 3200.0);
        scroll.scroll_by(-100.0);
        assert_eq!(scroll.offset(), 0.0);
        scroll.scroll_by(1_000_000.0);
        assert_eq!(scroll.offset(), 2400.0);
    }

    #[test]
    fn progress_is_always_within_unit_range() {
        let mut scroll = state(800.0, 3200.0);
        for raw in [-500.0_f32, 0.0, 100.0, 799.0, 2400.0, 9000.0] {
            scroll.offset = raw.clamp(0.0, scroll.max_offset());
            let p = scroll.progress(200.0, 1000.0);
            assert!((0.0..=1.0).contains(&p), "offset {raw} gave {p}");
        }
    }

    #[test]
    fn adjacent_slices_may_overlap_independently() {
        let mut scroll = state(800.0, 3200.0);
        scroll.offset = 750.0;
        // Both the outgoing and incoming slices report progress near the
        // boundary; neither clamps the other.
        assert!(scroll.progress(0.0, 800.0) > 0.9);
        assert!(scroll.progress(700.0, 1500.0) > 0.0);
    }

    #[test]
    fn degenerate_slice_steps_at_its_edge() {
        let mut scroll = state(800.0, 3200.0);
        scroll.offset = 100.0;
        assert_eq!(scroll.progress(400.0, 400.0), 0.0);
        scroll.offset = 400.0;
        assert_eq!(scroll.progress(400.0, 400.0), 1.0);
    }

    #[test]
    fn shrinking_content_pulls_the_offset_back_in_range() {
        let mut scroll = state(800.0, 3200.0);
        scroll.scroll_by(2400.0);
        scroll.set_metrics(800.0, 1200.0);
        assert_eq!(scroll.offset(), 400.0);
    }

    #[test]
    fn smooth_scroll_converges_and_clears_its_target() {
        let mut scroll = state(800.0, 3200.0);
        scroll.scroll_to(800.0);
        for _ in 0..240 {
            scroll.ease_toward_target(1.0 / 60.0);
        }
        assert_eq!(scroll.offset(), 800.0);
        assert_eq!(scroll.target(), None);
    }

    #[test]
    fn manual_input_cancels_a_smooth_scroll() {
        let mut scroll = state(800.0, 3200.0);
        scroll.scroll_to(800.0);
        scroll.scroll_by(10.0);
        assert_eq!(scroll.target(), None);
    }

    #[test]
    fn scroll_to_clamps_out_of_range_targets() {
        let mut scroll = state(800.0, 3200.0);
        scroll.scroll_to(99_999.0);
        assert_eq!(scroll.target(), Some(2400.0));
    }
}
