use bevy::prelude::*;

use crate::engine::motion::scroll::ScrollState;
use crate::sections::tracker::{ActiveSection, PageSection, SectionGeometry, SectionId};
use constants::layout::{NAV_ACTIVE_SCALE, NAV_DOT_GAP, NAV_DOT_SIZE, NAV_MARGIN};
use constants::palette::{ACCENT_CYAN, ACCENT_PURPLE, NAV_DOT_IDLE};

/// One dot per identified section in the floating indicator.
#[derive(Component, Debug, Clone, Copy)]
pub struct NavDot {
    pub section: SectionId,
}

/// Request to bring a section into view.
#[derive(Event, Debug, Clone, Copy)]
pub struct SectionNavEvent {
    pub section: SectionId,
    pub source: NavSource,
}

/// Source of a navigation request for logging and conditional handling.
#[derive(Debug, Clone, Copy)]
pub enum NavSource {
    Indicator,
    Rpc,
}

fn dot_accent(section: SectionId) -> Color {
    match section {
        SectionId::Hero => ACCENT_PURPLE,
        SectionId::SponsorsJudges => ACCENT_CYAN,
    }
}

/// Fixed overlay of section dots in the lower-right corner.
pub fn spawn_nav_indicator(commands: &mut Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            right: Val::Px(NAV_MARGIN),
            bottom: Val::Px(NAV_MARGIN),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(NAV_DOT_GAP),
            ..default()
        })
        .with_children(|rail| {
            for section in [SectionId::Hero, SectionId::SponsorsJudges] {
                rail.spawn((
                    Button,
                    Node {
                        width: Val::Px(NAV_DOT_SIZE),
                        height: Val::Px(NAV_DOT_SIZE),
                        ..default()
                    },
                    BackgroundColor(NAV_DOT_IDLE),
                    BorderRadius::MAX,
                    NavDot { section },
                ));
            }
        });
}

pub fn nav_dot_pressed(
    mut nav_events: EventWriter<SectionNavEvent>,
    query: Query<(&Interaction, &NavDot), Changed<Interaction>>,
) {
    for (interaction, dot) in &query {
        if *interaction == Interaction::Pressed {
            nav_events.write(SectionNavEvent {
                section: dot.section,
                source: NavSource::Indicator,
            });
        }
    }
}

/// Resolve navigation requests to a smooth scroll toward the section's top.
/// Requests for sections with no geometry yet are skipped.
pub fn handle_section_nav_events(
    mut nav_events: EventReader<SectionNavEvent>,
    mut scroll: ResMut<ScrollState>,
    sections: Query<(&PageSection, &SectionGeometry)>,
) {
    for event in nav_events.read() {
        let Some((_, geometry)) = sections
            .iter()
            .find(|(section, _)| section.id == Some(event.section))
        else {
            warn!("No section geometry for {}", event.section.as_str());
            continue;
        };
        info!(
            "Scrolling to {} ({:?})",
            event.section.as_str(),
            event.source
        );
        scroll.scroll_to(geometry.top);
    }
}

/// Tint and enlarge the dot of the active section.
pub fn highlight_active_dot(
    active: Res<ActiveSection>,
    mut query: Query<(&NavDot, &mut BackgroundColor, &mut Transform)>,
) {
    if !active.is_changed() {
        return;
    }
    for (dot, mut background, mut transform) in &mut query {
        if active.current == Some(dot.section) {
            background.0 = dot_accent(dot.section);
            transform.scale = Vec3::splat(NAV_ACTIVE_SCALE);
        } else {
            background.0 = NAV_DOT_IDLE;
            transform.scale = Vec3::ONE;
        }
    }
}
