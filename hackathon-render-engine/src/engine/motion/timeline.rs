use bevy::prelude::*;

use crate::engine::motion::easing::{Ease, lerp};
use crate::engine::motion::{Channel, Motion};

/// A visual state an entrance tween moves between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub offset: Vec2,
    pub scale: f32,
    /// Z rotation in degrees.
    pub rotation: f32,
    pub opacity: f32,
}

impl Keyframe {
    /// The at-rest state every tween settles into.
    pub const REST: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
        rotation: 0.0,
        opacity: 1.0,
    };

    /// Common entrance origin: shifted down and transparent.
    pub fn raised(y: f32, scale: f32) -> Self {
        Self {
            offset: Vec2::new(0.0, y),
            scale,
            rotation: 0.0,
            opacity: 0.0,
        }
    }
}

fn channel_of(key: Keyframe) -> Channel {
    Channel {
        offset: key.offset,
        scale: key.scale,
        rotation: key.rotation,
        opacity: key.opacity,
    }
}

/// One element's tween inside its group timeline. `delay` is relative to
/// the group start; staggered grids just step the delay per card.
#[derive(Component, Debug, Clone, Copy)]
pub struct Entrance {
    pub delay: f32,
    pub duration: f32,
    pub ease: Ease,
    pub from: Keyframe,
    pub to: Keyframe,
}

impl Entrance {
    pub fn new(delay: f32, duration: f32, ease: Ease, from: Keyframe) -> Self {
        Self {
            delay,
            duration,
            ease,
            from,
            to: Keyframe::REST,
        }
    }

    /// Sample the tween `elapsed` seconds into its group timeline. Before
    /// the delay the element holds its from state; past the end it holds
    /// its to state. `back_out` easing may overshoot between the two; the
    /// motion composition clamps opacity afterwards.
    pub fn sample(&self, elapsed: f32) -> Channel {
        if elapsed <= self.delay {
            return channel_of(self.from);
        }
        if self.duration <= 0.0 {
            return channel_of(self.to);
        }
        let t = ((elapsed - self.delay) / self.duration).clamp(0.0, 1.0);
        let k = self.ease.apply(t);
        Channel {
            offset: self.from.offset.lerp(self.to.offset, k),
            scale: lerp(self.from.scale, self.to.scale, k),
            rotation: lerp(self.from.rotation, self.to.rotation, k),
            opacity: lerp(self.from.opacity, self.to.opacity, k),
        }
    }

    pub fn finished(&self, elapsed: f32) -> bool {
        elapsed >= self.delay + self.duration
    }
}

/// Timeline anchor for a block of entrance tweens. Descendants with
/// [`Entrance`] play relative to the group's start time; until the group
/// starts they hold their from state, so deferred blocks sit hidden.
#[derive(Component, Debug)]
pub struct EntranceGroup {
    pub start_time: Option<f32>,
    auto_start: bool,
}

impl EntranceGroup {
    /// Plays as soon as the timeline system first runs.
    pub fn auto() -> Self {
        Self {
            start_time: None,
            auto_start: true,
        }
    }

    /// Waits for an explicit start, e.g. a visibility reveal.
    pub fn deferred() -> Self {
        Self {
            start_time: None,
            auto_start: false,
        }
    }

    /// Start the timeline once; later calls are ignored.
    pub fn start(&mut self, now: f32) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
    }

    pub fn started(&self) -> bool {
        self.start_time.is_some()
    }
}

/// Drive every entrance group and write the sampled state into the
/// entrance channel of each tweened element.
pub fn advance_entrances(
    time: Res<Time>,
    mut groups: Query<(Entity, &mut EntranceGroup)>,
    children: Query<&Children>,
    mut targets: Query<(&Entrance, &mut Motion)>,
) {
    let now = time.elapsed_secs();
    for (entity, mut group) in &mut groups {
        if group.auto_start {
            group.start(now);
        }
        let elapsed = match group.start_time {
            Some(start) => now - start,
            None => 0.0,
        };

        if let Ok((entrance, mut motion)) = targets.get_mut(entity) {
            motion.entrance = entrance.sample(elapsed);
        }
        for descendant in children.iter_descendants(entity) {
            if let Ok((entrance, mut motion)) = targets.get_mut(descendant) {
                motion.entrance = entrance.sample(elapsed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tween() -> Entrance {
        Entrance::new(0.5, 1.0, Ease::Power2Out, Keyframe::raised(100.0, 0.8))
    }

    #[test]
    fn holds_the_from_state_until_its_delay() {
        let entrance = tween();
        let sampled = entrance.sample(0.0);
        assert_eq!(sampled.offset.y, 100.0);
        assert_eq!(sampled.opacity, 0.0);
        assert_eq!(entrance.sample(0.5), entrance.sample(0.0));
    }

    #[test]
    fn settles_at_rest_after_its_duration() {
        let entrance = tween();
        for elapsed in [1.5, 2.0, 100.0] {
            let sampled = entrance.sample(elapsed);
            assert_eq!(sampled.offset, Vec2::ZERO);
            assert_eq!(sampled.scale, 1.0);
            assert_eq!(sampled.opacity, 1.0);
            assert!(entrance.finished(elapsed));
        }
    }

    #[test]
    fn staggered_delays_preserve_ordering() {
        let first = Entrance::new(0.0, 0.5, Ease::Power2Out, Keyframe::raised(20.0, 0.9));
        let second = Entrance::new(0.1, 0.5, Ease::Power2Out, Keyframe::raised(20.0, 0.9));
        let a = first.sample(0.3);
        let b = second.sample(0.3);
        assert!(a.opacity > b.opacity);
        assert!(a.offset.y < b.offset.y);
    }

    #[test]
    fn zero_duration_snaps_to_rest() {
        let entrance = Entrance::new(0.2, 0.0, Ease::Linear, Keyframe::raised(10.0, 0.5));
        assert_eq!(entrance.sample(0.3).opacity, 1.0);
    }

    #[test]
    fn deferred_groups_only_start_once() {
        let mut group = EntranceGroup::deferred();
        assert!(!group.started());
        group.start(2.0);
        group.start(5.0);
        assert_eq!(group.start_time, Some(2.0));
    }
}
