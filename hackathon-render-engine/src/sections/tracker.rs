use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use serde::{Deserialize, Serialize};

use crate::engine::motion::scroll::ScrollState;
use crate::engine::motion::timeline::EntranceGroup;
use constants::layout::{VIEWPORT_MARGIN, VISIBILITY_THRESHOLD};

/// Identifiers of the page's top-level sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Hero,
    SponsorsJudges,
}

impl SectionId {
    /// Convert a string identifier to a section for RPC compatibility.
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "hero" => Some(Self::Hero),
            "sponsors-judges" => Some(Self::SponsorsJudges),
            _ => None,
        }
    }

    /// String identifier used by the frontend and navigation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::SponsorsJudges => "sponsors-judges",
        }
    }
}

/// A top-level page section. `index` orders the stacked layout; only
/// identified sections can become the active one.
#[derive(Component, Debug)]
pub struct PageSection {
    pub index: usize,
    pub id: Option<SectionId>,
    /// Slot height in viewport heights.
    pub height_factor: f32,
}

/// Present while a section counts as revealed.
#[derive(Component)]
pub struct SectionVisible;

/// Content-space rectangle in logical px, derived from the window height
/// each frame.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct SectionGeometry {
    pub top: f32,
    pub height: f32,
}

/// Pins a showcase block at a fraction of its section's slot, so reveal
/// and parallax can be derived without querying computed layout.
#[derive(Component, Debug, Clone, Copy)]
pub struct BlockAnchor {
    pub section_index: usize,
    pub fraction: f32,
}

/// Starts a deferred entrance timeline once the block's top rises above
/// this fraction of the viewport height.
#[derive(Component, Debug, Clone, Copy)]
pub struct Reveal {
    pub trigger_fraction: f32,
}

/// The section currently in focus for navigation highlighting.
#[derive(Resource, Debug, PartialEq)]
pub struct ActiveSection {
    pub current: Option<SectionId>,
}

impl Default for ActiveSection {
    fn default() -> Self {
        Self {
            current: Some(SectionId::Hero),
        }
    }
}

/// Fired when the active section changes, feeding the navigation dots and
/// the host-page notification.
#[derive(Event, Debug, Clone, Copy)]
pub struct SectionChangedEvent {
    pub section: SectionId,
}

/// Scrollable column holding the stacked sections; its top tracks the
/// negated scroll offset.
#[derive(Component)]
pub struct PageRoot;

pub fn spawn_page_root(commands: &mut Commands) -> Entity {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            PageRoot,
        ))
        .id()
}

pub fn spawn_section(
    commands: &mut Commands,
    index: usize,
    id: Option<SectionId>,
    height_factor: f32,
) -> Entity {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            PageSection {
                index,
                id,
                height_factor,
            },
            SectionGeometry::default(),
        ))
        .id()
}

/// Recompute section and block rectangles from the window height and feed
/// the scroll metrics. Runs every frame so resizes are picked up without a
/// dedicated handler.
pub fn layout_sections(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut scroll: ResMut<ScrollState>,
    mut sections: Query<(&PageSection, &mut SectionGeometry, &mut Node), Without<BlockAnchor>>,
    mut blocks: Query<(&BlockAnchor, &mut SectionGeometry), Without<PageSection>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let viewport_height = window.height();
    if viewport_height <= 0.0 {
        return;
    }

    let mut slots: Vec<(usize, f32)> = sections
        .iter()
        .map(|(section, ..)| (section.index, section.height_factor * viewport_height))
        .collect();
    slots.sort_by_key(|(index, _)| *index);

    let mut tops = vec![0.0; slots.len()];
    let mut cursor = 0.0;
    for (position, (_, height)) in slots.iter().enumerate() {
        tops[position] = cursor;
        cursor += height;
    }
    scroll.set_metrics(viewport_height, cursor);

    let slot_rect = |index: usize| -> Option<(f32, f32)> {
        slots
            .iter()
            .position(|(slot_index, _)| *slot_index == index)
            .map(|position| (tops[position], slots[position].1))
    };

    for (section, mut geometry, mut node) in &mut sections {
        if let Some((top, height)) = slot_rect(section.index) {
            geometry.top = top;
            geometry.height = height;
            node.height = Val::Px(height);
        }
    }

    for (anchor, mut geometry) in &mut blocks {
        if let Some((top, height)) = slot_rect(anchor.section_index) {
            geometry.top = top + anchor.fraction * height;
            geometry.height = height * 0.25;
        }
    }
}

/// Shift the content column against the scroll offset.
pub fn apply_page_scroll(scroll: Res<ScrollState>, mut query: Query<&mut Node, With<PageRoot>>) {
    for mut node in &mut query {
        node.top = Val::Px(-scroll.offset());
    }
}

/// Fraction of a section's area inside the margin-adjusted viewport.
pub fn visible_fraction(screen_top: f32, height: f32, viewport_height: f32, margin: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    let band_top = viewport_height * margin;
    let band_bottom = viewport_height * (1.0 - margin);
    let overlap = (screen_top + height).min(band_bottom) - screen_top.max(band_top);
    (overlap / height).max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    Show,
    Hide,
    Unchanged,
}

/// Marker transition for one section this frame. A section that stops
/// intersecting only loses its marker when its top edge is still below the
/// viewport top, i.e. it left through the bottom after scrolling up. One
/// that left through the top stays revealed.
pub fn visibility_transition(
    was_visible: bool,
    fraction: f32,
    screen_top: f32,
    threshold: f32,
) -> VisibilityChange {
    let now_visible = fraction >= threshold;
    if !was_visible && now_visible {
        VisibilityChange::Show
    } else if was_visible && !now_visible && screen_top > 0.0 {
        VisibilityChange::Hide
    } else {
        VisibilityChange::Unchanged
    }
}

/// Track section visibility against the scroll offset and maintain the
/// active section.
pub fn update_section_visibility(
    scroll: Res<ScrollState>,
    mut active: ResMut<ActiveSection>,
    mut commands: Commands,
    sections: Query<(Entity, &PageSection, &SectionGeometry, Option<&SectionVisible>)>,
    mut changed: EventWriter<SectionChangedEvent>,
) {
    let viewport_height = scroll.viewport_height();
    if viewport_height <= 0.0 {
        return;
    }

    let mut ordered: Vec<_> = sections.iter().collect();
    ordered.sort_by_key(|(_, section, ..)| section.index);

    for (entity, section, geometry, visible) in ordered {
        let screen_top = geometry.top - scroll.offset();
        let fraction =
            visible_fraction(screen_top, geometry.height, viewport_height, VIEWPORT_MARGIN);

        match visibility_transition(
            visible.is_some(),
            fraction,
            screen_top,
            VISIBILITY_THRESHOLD,
        ) {
            VisibilityChange::Show => {
                commands.entity(entity).insert(SectionVisible);
                if let Some(id) = section.id
                    && active.current != Some(id)
                {
                    active.current = Some(id);
                    changed.write(SectionChangedEvent { section: id });
                }
            }
            VisibilityChange::Hide => {
                commands.entity(entity).remove::<SectionVisible>();
            }
            VisibilityChange::Unchanged => {}
        }
    }
}

/// Start deferred entrance timelines once their block scrolls into reach.
pub fn start_reveals(
    time: Res<Time>,
    scroll: Res<ScrollState>,
    mut query: Query<(&Reveal, &SectionGeometry, &mut EntranceGroup)>,
) {
    let viewport_height = scroll.viewport_height();
    if viewport_height <= 0.0 {
        return;
    }
    for (reveal, geometry, mut group) in &mut query {
        if group.started() {
            continue;
        }
        let screen_top = geometry.top - scroll.offset();
        if screen_top <= viewport_height * reveal.trigger_fraction {
            group.start(time.elapsed_secs());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f32 = 800.0;

    #[test]
    fn fully_on_screen_sections_report_high_fractions() {
        let fraction = visible_fraction(0.0, VIEWPORT, VIEWPORT, VIEWPORT_MARGIN);
        assert!(fraction >= 0.8 - 1e-5);
    }

    #[test]
    fn off_screen_sections_report_zero() {
        assert_eq!(
            visible_fraction(-2.0 * VIEWPORT, VIEWPORT, VIEWPORT, VIEWPORT_MARGIN),
            0.0
        );
        assert_eq!(
            visible_fraction(2.0 * VIEWPORT, VIEWPORT, VIEWPORT, VIEWPORT_MARGIN),
            0.0
        );
    }

    #[test]
    fn margin_trims_the_observation_band() {
        // A sliver inside the unadjusted viewport but within the trimmed
        // band contributes nothing.
        let fraction = visible_fraction(VIEWPORT * 0.95, VIEWPORT, VIEWPORT, VIEWPORT_MARGIN);
        assert_eq!(fraction, 0.0);
    }

    #[test]
    fn crossing_the_threshold_shows_a_section() {
        // Section top rising from below: 20% of it inside the band.
        let screen_top = VIEWPORT * 0.9 - VIEWPORT * 0.2;
        let fraction = visible_fraction(screen_top, VIEWPORT, VIEWPORT, VIEWPORT_MARGIN);
        assert!(fraction >= VISIBILITY_THRESHOLD);
        assert_eq!(
            visibility_transition(false, fraction, screen_top, VISIBILITY_THRESHOLD),
            VisibilityChange::Show
        );
    }

    #[test]
    fn leaving_through_the_bottom_clears_the_marker() {
        // Scrolled up: the section sits below the viewport, top edge well
        // under the viewport top.
        let screen_top = VIEWPORT * 1.5;
        let fraction = visible_fraction(screen_top, VIEWPORT, VIEWPORT, VIEWPORT_MARGIN);
        assert_eq!(
            visibility_transition(true, fraction, screen_top, VISIBILITY_THRESHOLD),
            VisibilityChange::Hide
        );
    }

    #[test]
    fn leaving_through_the_top_keeps_the_marker() {
        // Scrolled down past the section: it sits above the viewport.
        let screen_top = -1.5 * VIEWPORT;
        let fraction = visible_fraction(screen_top, VIEWPORT, VIEWPORT, VIEWPORT_MARGIN);
        assert!(fraction < VISIBILITY_THRESHOLD);
        assert_eq!(
            visibility_transition(true, fraction, screen_top, VISIBILITY_THRESHOLD),
            VisibilityChange::Unchanged
        );
    }

    #[test]
    fn a_kept_marker_survives_later_frames_above() {
        // Still above the viewport frames later; the transition stays
        // unchanged rather than re-evaluating into a hide.
        for screen_top in [-1.2 * VIEWPORT, -2.0 * VIEWPORT, -3.0 * VIEWPORT] {
            let fraction = visible_fraction(screen_top, VIEWPORT, VIEWPORT, VIEWPORT_MARGIN);
            assert_eq!(
                visibility_transition(true, fraction, screen_top, VISIBILITY_THRESHOLD),
                VisibilityChange::Unchanged
            );
        }
    }

    #[test]
    fn section_ids_round_trip_their_string_form() {
        for id in [SectionId::Hero, SectionId::SponsorsJudges] {
            assert_eq!(SectionId::from_string(id.as_str()), Some(id));
        }
        assert_eq!(SectionId::from_string("faq"), None);
    }
}
