use bevy::prelude::*;
use bevy::ui::RepeatedGridTrack;

use crate::engine::content::records::{ActiveRoster, Judge, Roster, Sponsor};
use crate::engine::motion::easing::Ease;
use crate::engine::motion::scroll::ScrollState;
use crate::engine::motion::timeline::{Entrance, EntranceGroup, Keyframe};
use crate::engine::motion::{BaseTint, Motion};
use crate::sections::interactions::{HoverGrow, RegisterButton, SponsorLink};
use crate::sections::tracker::{BlockAnchor, Reveal, SectionGeometry};
use constants::layout::{
    AVATAR_SIZE, BLOCK_REVEAL_POINT, CARD_CORNER_RADIUS, CARD_GAP, CARD_PADDING,
    CONTENT_MAX_WIDTH, CTA_ANCHOR, JUDGES_ANCHOR, SHOWCASE_TITLE_ANCHOR, SPONSORS_ANCHOR,
    TITLE_REVEAL_POINT,
};
use constants::motion::{
    BUTTON_HOVER_SCALE, CARD_HOVER_SCALE, JUDGE_PARALLAX, SPONSOR_PARALLAX,
};
use constants::palette::{
    ACCENT_CYAN, ACCENT_GOLD, ACCENT_PINK, CARD_PALETTE, JUDGE_PALETTE, PANEL_BG, PANEL_BORDER,
    TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};

/// Showcase section entity the content is built under once the roster
/// resolves.
#[derive(Resource)]
pub struct ShowcaseAnchor(pub Entity);

#[derive(Resource, Default)]
pub struct ShowcaseBuilt {
    pub built: bool,
}

/// Parallax depth of a showcase block; deeper blocks drift faster against
/// the scroll.
#[derive(Component, Debug, Clone, Copy)]
pub struct ParallaxDepth {
    pub factor: f32,
}

#[derive(Component, Debug)]
pub struct SponsorCard {
    pub sponsor_id: u32,
}

#[derive(Component, Debug)]
pub struct JudgeCard {
    pub judge_id: u32,
}

/// Decorative accent for a card by its list position.
pub fn sponsor_accent(index: usize) -> Color {
    CARD_PALETTE[index % CARD_PALETTE.len()]
}

pub fn judge_accent(index: usize) -> Color {
    JUDGE_PALETTE[index % JUDGE_PALETTE.len()]
}

/// Build the showcase once the active roster is resolved.
pub fn build_showcase_when_ready(
    mut commands: Commands,
    roster: Option<Res<ActiveRoster>>,
    anchor: Option<Res<ShowcaseAnchor>>,
    mut built: ResMut<ShowcaseBuilt>,
) {
    if built.built {
        return;
    }
    let (Some(roster), Some(anchor)) = (roster, anchor) else {
        return;
    };
    spawn_showcase_content(&mut commands, anchor.0, &roster.0);
    built.built = true;
    info!(
        "Showcase built: {} sponsor cards, {} judge cards",
        roster.0.sponsors.len(),
        roster.0.judges.len()
    );
}

pub fn spawn_showcase_content(commands: &mut Commands, section: Entity, roster: &Roster) {
    let title = spawn_title_block(commands);
    let sponsors = spawn_sponsor_block(commands, &roster.sponsors);
    let judges = spawn_judge_block(commands, &roster.judges);
    let cta = spawn_cta_block(commands);
    commands
        .entity(section)
        .add_children(&[title, sponsors, judges, cta]);
}

fn block_node() -> Node {
    Node {
        width: Val::Percent(100.0),
        max_width: Val::Px(CONTENT_MAX_WIDTH),
        flex_direction: FlexDirection::Column,
        align_items: AlignItems::Center,
        row_gap: Val::Px(CARD_GAP),
        margin: UiRect::vertical(Val::Px(48.0)),
        ..default()
    }
}

fn spawn_title_block(commands: &mut Commands) -> Entity {
    commands
        .spawn((
            block_node(),
            BlockAnchor {
                section_index: 1,
                fraction: SHOWCASE_TITLE_ANCHOR,
            },
            SectionGeometry::default(),
            Reveal {
                trigger_fraction: TITLE_REVEAL_POINT,
            },
            EntranceGroup::deferred(),
            Motion::default(),
            Entrance::new(0.0, 1.2, Ease::BackOut, Keyframe::raised(60.0, 0.9)),
        ))
        .with_children(|block| {
            block.spawn((
                Text::new("Our Incredible Partners"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(ACCENT_CYAN),
                TextLayout::new_with_justify(JustifyText::Center),
                BaseTint::text(ACCENT_CYAN),
            ));
        })
        .id()
}

fn spawn_sponsor_block(commands: &mut Commands, sponsors: &[Sponsor]) -> Entity {
    let block = commands
        .spawn((
            block_node(),
            BlockAnchor {
                section_index: 1,
                fraction: SPONSORS_ANCHOR,
            },
            SectionGeometry::default(),
            Reveal {
                trigger_fraction: BLOCK_REVEAL_POINT,
            },
            EntranceGroup::deferred(),
            ParallaxDepth {
                factor: SPONSOR_PARALLAX,
            },
            Motion::default(),
        ))
        .id();

    let heading = commands
        .spawn((
            Text::new("SPONSORS"),
            TextFont {
                font_size: 38.0,
                ..default()
            },
            TextColor(ACCENT_CYAN),
            BaseTint::text(ACCENT_CYAN),
        ))
        .id();

    let grid = commands
        .spawn(Node {
            display: Display::Grid,
            grid_template_columns: RepeatedGridTrack::flex(3, 1.0),
            column_gap: Val::Px(CARD_GAP),
            row_gap: Val::Px(CARD_GAP),
            width: Val::Percent(100.0),
            ..default()
        })
        .id();

    let cards = spawn_sponsor_cards(commands, sponsors);
    commands.entity(grid).add_children(&cards);
    commands.entity(block).add_children(&[heading, grid]);
    block
}

/// One card per sponsor, in list order. Cards are outbound links.
pub fn spawn_sponsor_cards(commands: &mut Commands, sponsors: &[Sponsor]) -> Vec<Entity> {
    sponsors
        .iter()
        .enumerate()
        .map(|(index, sponsor)| {
            let accent = sponsor_accent(index);
            let border = accent.with_alpha(0.2);
            let card = commands
                .spawn((
                    Node {
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        padding: UiRect::all(Val::Px(CARD_PADDING)),
                        border: UiRect::all(Val::Px(1.0)),
                        min_height: Val::Px(120.0),
                        ..default()
                    },
                    BackgroundColor(PANEL_BG),
                    BorderColor(border),
                    BorderRadius::all(Val::Px(CARD_CORNER_RADIUS)),
                    Button,
                    SponsorCard {
                        sponsor_id: sponsor.id,
                    },
                    SponsorLink {
                        url: sponsor.url.clone(),
                    },
                    Motion::default(),
                    Entrance::new(
                        0.2 + 0.1 * index as f32,
                        0.8,
                        Ease::BackOut,
                        Keyframe::raised(60.0, 0.8),
                    ),
                    HoverGrow {
                        scale: CARD_HOVER_SCALE,
                    },
                    BaseTint::panel(PANEL_BG, border),
                ))
                .id();
            let label = commands
                .spawn((
                    Text::new(sponsor.name.clone()),
                    TextFont {
                        font_size: 22.0,
                        ..default()
                    },
                    TextColor(accent),
                    BaseTint::text(accent),
                ))
                .id();
            commands.entity(card).add_children(&[label]);
            card
        })
        .collect()
}

fn spawn_judge_block(commands: &mut Commands, judges: &[Judge]) -> Entity {
    let block = commands
        .spawn((
            block_node(),
            BlockAnchor {
                section_index: 1,
                fraction: JUDGES_ANCHOR,
            },
            SectionGeometry::default(),
            Reveal {
                trigger_fraction: BLOCK_REVEAL_POINT,
            },
            EntranceGroup::deferred(),
            ParallaxDepth {
                factor: JUDGE_PARALLAX,
            },
            Motion::default(),
        ))
        .id();

    let heading = commands
        .spawn((
            Text::new("JUDGES"),
            TextFont {
                font_size: 38.0,
                ..default()
            },
            TextColor(ACCENT_PINK),
            BaseTint::text(ACCENT_PINK),
        ))
        .id();

    let grid = commands
        .spawn(Node {
            display: Display::Grid,
            grid_template_columns: RepeatedGridTrack::flex(2, 1.0),
            column_gap: Val::Px(CARD_GAP + 8.0),
            row_gap: Val::Px(CARD_GAP + 8.0),
            width: Val::Percent(100.0),
            ..default()
        })
        .id();

    let cards = spawn_judge_cards(commands, judges);
    commands.entity(grid).add_children(&cards);
    commands.entity(block).add_children(&[heading, grid]);
    block
}

/// One card per judge, in list order. Title and photo are optional; the
/// avatar falls back to initials.
pub fn spawn_judge_cards(commands: &mut Commands, judges: &[Judge]) -> Vec<Entity> {
    judges
        .iter()
        .enumerate()
        .map(|(index, judge)| {
            let accent = judge_accent(index);
            let border = ACCENT_PINK.with_alpha(0.2);
            let card = commands
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(8.0),
                        padding: UiRect::all(Val::Px(CARD_PADDING + 8.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BackgroundColor(PANEL_BG),
                    BorderColor(border),
                    BorderRadius::all(Val::Px(CARD_CORNER_RADIUS)),
                    Button,
                    JudgeCard {
                        judge_id: judge.id,
                    },
                    Motion::default(),
                    Entrance::new(
                        0.2 + 0.1 * index as f32,
                        0.8,
                        Ease::BackOut,
                        Keyframe::raised(60.0, 0.8),
                    ),
                    HoverGrow {
                        scale: CARD_HOVER_SCALE,
                    },
                    BaseTint::panel(PANEL_BG, border),
                ))
                .id();

            let avatar = commands
                .spawn((
                    Node {
                        width: Val::Px(AVATAR_SIZE),
                        height: Val::Px(AVATAR_SIZE),
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                    BackgroundColor(accent.with_alpha(0.2)),
                    BorderRadius::MAX,
                    BaseTint::background(accent.with_alpha(0.2)),
                ))
                .with_children(|avatar| {
                    avatar.spawn((
                        Text::new(judge.initials()),
                        TextFont {
                            font_size: 34.0,
                            ..default()
                        },
                        TextColor(accent),
                        BaseTint::text(accent),
                    ));
                })
                .id();

            let name = commands
                .spawn((
                    Text::new(judge.name.clone()),
                    TextFont {
                        font_size: 24.0,
                        ..default()
                    },
                    TextColor(TEXT_PRIMARY),
                    BaseTint::text(TEXT_PRIMARY),
                ))
                .id();

            let mut children = vec![avatar, name];

            if let Some(title) = &judge.title {
                let title = commands
                    .spawn((
                        Text::new(title.clone()),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(ACCENT_CYAN),
                        BaseTint::text(ACCENT_CYAN),
                    ))
                    .id();
                children.push(title);
            }

            let bio = commands
                .spawn((
                    Text::new(judge.bio.clone()),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(TEXT_MUTED),
                    TextLayout::new_with_justify(JustifyText::Center),
                    BaseTint::text(TEXT_MUTED),
                ))
                .id();
            children.push(bio);

            commands.entity(card).add_children(&children);
            card
        })
        .collect()
}

fn spawn_cta_block(commands: &mut Commands) -> Entity {
    let block = commands
        .spawn((
            block_node(),
            BlockAnchor {
                section_index: 1,
                fraction: CTA_ANCHOR,
            },
            SectionGeometry::default(),
            Reveal {
                trigger_fraction: BLOCK_REVEAL_POINT,
            },
            EntranceGroup::deferred(),
            Motion::default(),
            Entrance::new(0.0, 1.0, Ease::Power3Out, Keyframe::raised(80.0, 1.0)),
            BackgroundColor(PANEL_BG),
            BorderColor(PANEL_BORDER),
            BorderRadius::all(Val::Px(24.0)),
            BaseTint::panel(PANEL_BG, PANEL_BORDER),
        ))
        .id();

    let badge = commands
        .spawn((
            Node {
                padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.05)),
            BorderColor(PANEL_BORDER),
            BorderRadius::MAX,
            Motion::default(),
            Entrance::new(0.4, 0.8, Ease::BackOut, Keyframe::raised(30.0, 1.0)),
            BaseTint::panel(Color::srgba(1.0, 1.0, 1.0, 0.05), PANEL_BORDER),
        ))
        .with_children(|badge| {
            badge.spawn((
                Text::new("\u{2726} Limited spots available"),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(ACCENT_GOLD),
                BaseTint::text(ACCENT_GOLD),
            ));
        })
        .id();

    let heading = commands
        .spawn((
            Text::new("Ready to Code, Create & Conquer?"),
            TextFont {
                font_size: 44.0,
                ..default()
            },
            TextColor(ACCENT_CYAN),
            TextLayout::new_with_justify(JustifyText::Center),
            Motion::default(),
            Entrance::new(0.5, 0.8, Ease::BackOut, Keyframe::raised(30.0, 1.0)),
            BaseTint::text(ACCENT_CYAN),
        ))
        .id();

    let pitch = commands
        .spawn((
            Text::new(
                "Join thousands of developers pushing the boundaries of innovation. \
                 Build mind-blowing projects, win incredible prizes, and launch your \
                 next big idea.",
            ),
            TextFont {
                font_size: 18.0,
                ..default()
            },
            TextColor(TEXT_MUTED),
            TextLayout::new_with_justify(JustifyText::Center),
            Motion::default(),
            Entrance::new(0.6, 0.8, Ease::BackOut, Keyframe::raised(30.0, 1.0)),
            BaseTint::text(TEXT_MUTED),
        ))
        .id();

    let register = commands
        .spawn((
            Button,
            Node {
                padding: UiRect::axes(Val::Px(32.0), Val::Px(16.0)),
                ..default()
            },
            BackgroundColor(ACCENT_PINK),
            BorderRadius::MAX,
            RegisterButton,
            Motion::default(),
            Entrance::new(0.7, 0.8, Ease::BackOut, Keyframe::raised(30.0, 1.0)),
            HoverGrow {
                scale: BUTTON_HOVER_SCALE,
            },
            BaseTint::background(ACCENT_PINK),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new("Register Now - It's Free"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
                BaseTint::text(TEXT_PRIMARY),
            ));
        })
        .id();

    let meta = commands
        .spawn((
            Text::new(
                "Registration closes in 7 days \u{2022} 48 hour competition window \
                 \u{2022} Global, virtual participation",
            ),
            TextFont {
                font_size: 13.0,
                ..default()
            },
            TextColor(TEXT_DIM),
            TextLayout::new_with_justify(JustifyText::Center),
            Motion::default(),
            Entrance::new(0.8, 0.6, Ease::BackOut, Keyframe::raised(20.0, 1.0)),
            BaseTint::text(TEXT_DIM),
        ))
        .id();

    commands
        .entity(block)
        .add_children(&[badge, heading, pitch, register, meta]);
    block
}

/// Drift parallax blocks against the scroll as they traverse the viewport.
pub fn showcase_parallax(
    scroll: Res<ScrollState>,
    mut query: Query<(&ParallaxDepth, &SectionGeometry, &mut Motion)>,
) {
    let viewport_height = scroll.viewport_height();
    if viewport_height <= 0.0 {
        return;
    }
    for (depth, geometry, mut motion) in &mut query {
        let screen_top = geometry.top - scroll.offset();
        let travel = ((viewport_height - screen_top) / (viewport_height + geometry.height))
            .clamp(0.0, 1.0);
        motion.scroll.offset.y = -travel * depth.factor * geometry.top;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_count<T: Component>(world: &mut World) -> usize {
        world.query::<&T>().iter(world).count()
    }

    #[test]
    fn one_sponsor_card_per_record_in_order() {
        let mut world = World::new();
        let roster = Roster::builtin();
        let entities = {
            let mut commands = world.commands();
            spawn_sponsor_cards(&mut commands, &roster.sponsors)
        };
        world.flush();

        assert_eq!(entities.len(), roster.sponsors.len());
        let ids: Vec<u32> = entities
            .iter()
            .map(|&entity| world.get::<SponsorCard>(entity).unwrap().sponsor_id)
            .collect();
        let expected: Vec<u32> = roster.sponsors.iter().map(|s| s.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn empty_sponsor_list_spawns_zero_cards() {
        let mut world = World::new();
        let entities = {
            let mut commands = world.commands();
            spawn_sponsor_cards(&mut commands, &[])
        };
        world.flush();
        assert!(entities.is_empty());
        assert_eq!(card_count::<SponsorCard>(&mut world), 0);
    }

    #[test]
    fn one_judge_card_per_record_with_no_duplicates() {
        let mut world = World::new();
        let roster = Roster::builtin();
        let entities = {
            let mut commands = world.commands();
            spawn_judge_cards(&mut commands, &roster.judges)
        };
        world.flush();

        assert_eq!(entities.len(), roster.judges.len());
        let mut ids: Vec<u32> = entities
            .iter()
            .map(|&entity| world.get::<JudgeCard>(entity).unwrap().judge_id)
            .collect();
        ids.dedup();
        assert_eq!(ids.len(), roster.judges.len());
    }

    #[test]
    fn palette_cycles_by_position() {
        assert_eq!(sponsor_accent(0), sponsor_accent(CARD_PALETTE.len()));
        assert_eq!(judge_accent(1), judge_accent(1 + JUDGE_PALETTE.len()));
        for index in 0..CARD_PALETTE.len() {
            assert_eq!(sponsor_accent(index), CARD_PALETTE[index]);
        }
    }

    #[test]
    fn judge_without_title_still_gets_a_card() {
        let mut world = World::new();
        let judges = vec![Judge {
            id: 42,
            name: "Ari Blank".into(),
            title: None,
            bio: "Keeps the builds green.".into(),
            photo: None,
        }];
        let entities = {
            let mut commands = world.commands();
            spawn_judge_cards(&mut commands, &judges)
        };
        world.flush();
        assert_eq!(entities.len(), 1);
    }
}
