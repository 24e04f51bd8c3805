//! Scroll- and pointer-driven motion for the page content.
//!
//! Every animated UI element carries a [`Motion`] component with independent
//! channels (entrance timeline, scroll effects, pointer parallax, ambient
//! loops). Writers own one channel each; a single apply pass composes them
//! into the element's inset offset, transform, and opacity.

use bevy::prelude::*;

/// Entrance timelines and reveal triggers.
pub mod timeline;

/// Easing curves shared by timelines and scroll effects.
pub mod easing;

/// Virtual scroll state and input.
pub mod scroll;

/// Pointer-tracking parallax.
pub mod parallax;

/// Endless bob and pulse loops.
pub mod loops;

/// One writer's contribution to an element's visual state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    pub offset: Vec2,
    pub scale: f32,
    /// Z rotation in degrees.
    pub rotation: f32,
    pub opacity: f32,
}

impl Channel {
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
        rotation: 0.0,
        opacity: 1.0,
    };
}

impl Default for Channel {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Composable visual state of an animated element. Offsets and rotations
/// add, scales and opacities multiply; composed opacity is clamped to [0, 1].
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Motion {
    pub entrance: Channel,
    pub scroll: Channel,
    pub pointer: Channel,
    pub ambient: Channel,
}

impl Motion {
    pub fn composed(&self) -> Channel {
        let channels = [self.entrance, self.scroll, self.pointer, self.ambient];
        let mut out = Channel::IDENTITY;
        for channel in channels {
            out.offset += channel.offset;
            out.scale *= channel.scale;
            out.rotation += channel.rotation;
            out.opacity *= channel.opacity;
        }
        out.opacity = out.opacity.clamp(0.0, 1.0);
        out
    }
}

/// Colours an element was spawned with, so opacity can be re-applied
/// without drifting.
#[derive(Component, Debug, Default, Clone)]
pub struct BaseTint {
    pub text: Option<Color>,
    pub background: Option<Color>,
    pub border: Option<Color>,
}

impl BaseTint {
    pub fn text(color: Color) -> Self {
        Self {
            text: Some(color),
            ..default()
        }
    }

    pub fn panel(background: Color, border: Color) -> Self {
        Self {
            background: Some(background),
            border: Some(border),
            ..default()
        }
    }

    pub fn background(color: Color) -> Self {
        Self {
            background: Some(color),
            ..default()
        }
    }
}

/// Write composed motion into the node inset and transform. Animated nodes
/// keep their layout slot; the inset only offsets them visually.
pub fn apply_motion(mut query: Query<(&Motion, &mut Node, &mut Transform)>) {
    for (motion, mut node, mut transform) in &mut query {
        let composed = motion.composed();
        node.left = Val::Px(composed.offset.x);
        node.top = Val::Px(composed.offset.y);
        transform.rotation = Quat::from_rotation_z(composed.rotation.to_radians());
        transform.scale = Vec3::splat(composed.scale);
    }
}

/// Re-tint every element with the product of its own and its ancestors'
/// composed opacities, over the colours captured at spawn.
pub fn apply_opacity(
    tinted: Query<(Entity, &BaseTint)>,
    motions: Query<&Motion>,
    parents: Query<&ChildOf>,
    mut text_colors: Query<&mut TextColor>,
    mut backgrounds: Query<&mut BackgroundColor>,
    mut borders: Query<&mut BorderColor>,
) {
    for (entity, tint) in &tinted {
        let mut alpha = 1.0;
        if let Ok(motion) = motions.get(entity) {
            alpha *= motion.composed().opacity;
        }
        for ancestor in parents.iter_ancestors(entity) {
            if let Ok(motion) = motions.get(ancestor) {
                alpha *= motion.composed().opacity;
            }
        }

        if let (Some(base), Ok(mut color)) = (tint.text, text_colors.get_mut(entity)) {
            color.0 = base.with_alpha(base.alpha() * alpha);
        }
        if let (Some(base), Ok(mut color)) = (tint.background, backgrounds.get_mut(entity)) {
            color.0 = base.with_alpha(base.alpha() * alpha);
        }
        if let (Some(base), Ok(mut color)) = (tint.border, borders.get_mut(entity)) {
            color.0 = base.with_alpha(base.alpha() * alpha);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_channels_compose_to_identity() {
        let composed = Motion::default().composed();
        assert_eq!(composed, Channel::IDENTITY);
    }

    #[test]
    fn offsets_add_and_scales_multiply() {
        let motion = Motion {
            entrance: Channel {
                offset: Vec2::new(10.0, 20.0),
                scale: 0.5,
                ..Channel::IDENTITY
            },
            scroll: Channel {
                offset: Vec2::new(-4.0, 6.0),
                scale: 2.0,
                ..Channel::IDENTITY
            },
            ..default()
        };
        let composed = motion.composed();
        assert_eq!(composed.offset, Vec2::new(6.0, 26.0));
        assert_eq!(composed.scale, 1.0);
    }

    #[test]
    fn composed_opacity_never_leaves_unit_range() {
        // back_out easing can push a channel's opacity past 1 briefly.
        let motion = Motion {
            entrance: Channel {
                opacity: 1.4,
                ..Channel::IDENTITY
            },
            scroll: Channel {
                opacity: 0.9,
                ..Channel::IDENTITY
            },
            ..default()
        };
        assert!(motion.composed().opacity <= 1.0);

        let faded = Motion {
            scroll: Channel {
                opacity: -0.3,
                ..Channel::IDENTITY
            },
            ..default()
        };
        assert_eq!(faded.composed().opacity, 0.0);
    }
}
