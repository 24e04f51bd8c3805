use bevy::prelude::*;

use crate::engine::motion::loops::Bob;
use crate::engine::motion::parallax::PointerShift;
use crate::engine::motion::scroll::ScrollState;
use crate::engine::motion::timeline::{Entrance, EntranceGroup, Keyframe};
use crate::engine::motion::{BaseTint, Channel, Motion};
use crate::engine::motion::easing::Ease;
use crate::sections::interactions::{HoverGrow, RegisterButton};
use constants::layout::{CARD_CORNER_RADIUS, CARD_GAP, CARD_PADDING, CONTENT_MAX_WIDTH};
use constants::motion::{
    BUTTON_HOVER_SCALE, CARD_HOVER_SCALE, HERO_FADE_LIFT, HERO_FADE_RANGE, HERO_FADE_THRESHOLD,
    POINTER_PRIZE_SHIFT, POINTER_STAT_SHIFT, POINTER_TITLE_SHIFT,
};
use constants::palette::{
    ACCENT_BLUE, ACCENT_CYAN, ACCENT_GOLD, ACCENT_PINK, ACCENT_PURPLE, PANEL_BORDER, TEXT_DIM,
    TEXT_MUTED, TEXT_PRIMARY,
};

/// Hero blocks that lift and fade as the page scrolls away from the top.
#[derive(Component)]
pub struct HeroFade;

const PRIZE_CATEGORIES: [(&str, &str); 4] = [
    ("Grand Prize", "$250,000"),
    ("Web3", "$200,000"),
    ("AI/ML", "$200,000"),
    ("Community", "$150,000"),
];

const PRIZE_ACCENTS: [Color; 4] = [ACCENT_CYAN, ACCENT_PINK, ACCENT_BLUE, ACCENT_GOLD];

const STATS: [(&str, &str); 3] = [
    ("Global Event", "Connect with developers from over 100+ countries"),
    ("$1M+ Prizes", "Win big with multiple prize categories"),
    ("48 Hours", "Build something amazing in one weekend"),
];

/// Build the hero content under its section entity. The entrance group on
/// the content root plays the whole staggered timeline at startup.
pub fn spawn_hero_content(commands: &mut Commands, section: Entity) {
    let content = commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                max_width: Val::Px(CONTENT_MAX_WIDTH),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(CARD_GAP),
                padding: UiRect::axes(Val::Px(16.0), Val::Px(64.0)),
                ..default()
            },
            EntranceGroup::auto(),
        ))
        .id();
    commands.entity(section).add_children(&[content]);

    let title = commands
        .spawn((
            Text::new("The World's Largest Hackathon"),
            TextFont {
                font_size: 72.0,
                ..default()
            },
            TextColor(ACCENT_PURPLE),
            TextLayout::new_with_justify(JustifyText::Center),
            Motion::default(),
            Entrance::new(0.0, 1.4, Ease::BackOut, Keyframe::raised(100.0, 0.8)),
            PointerShift {
                strength: POINTER_TITLE_SHIFT,
            },
            HeroFade,
            BaseTint::text(ACCENT_PURPLE),
        ))
        .id();

    let subtitle = commands
        .spawn((
            Text::new("Join thousands of developers worldwide to compete for $1M+ in prizes"),
            TextFont {
                font_size: 22.0,
                ..default()
            },
            TextColor(TEXT_MUTED),
            TextLayout::new_with_justify(JustifyText::Center),
            Motion::default(),
            Entrance::new(0.6, 1.0, Ease::BackOutSoft, Keyframe::raised(50.0, 0.9)),
            HeroFade,
            BaseTint::text(TEXT_MUTED),
        ))
        .id();

    let prizes = spawn_prize_block(commands);
    let cta = spawn_cta_block(commands);
    let stats = spawn_stats_row(commands);
    let indicator = spawn_scroll_indicator(commands);

    commands
        .entity(content)
        .add_children(&[title, subtitle, prizes, cta, stats, indicator]);
}

fn spawn_prize_block(commands: &mut Commands) -> Entity {
    let block = commands
        .spawn((
            Node {
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            Motion::default(),
            Entrance::new(1.3, 0.8, Ease::BackOutSoft, Keyframe::raised(30.0, 0.95)),
            HeroFade,
        ))
        .id();

    let heading = commands
        .spawn((
            Text::new("PRIZE CATEGORIES"),
            TextFont {
                font_size: 26.0,
                ..default()
            },
            TextColor(ACCENT_CYAN),
            BaseTint::text(ACCENT_CYAN),
        ))
        .id();

    let row = commands
        .spawn(Node {
            column_gap: Val::Px(16.0),
            ..default()
        })
        .id();

    let mut cards = Vec::with_capacity(PRIZE_CATEGORIES.len());
    for (index, (name, amount)) in PRIZE_CATEGORIES.iter().enumerate() {
        let accent = PRIZE_ACCENTS[index % PRIZE_ACCENTS.len()];
        let background = accent.with_alpha(0.1);
        let border = accent.with_alpha(0.3);
        let card = commands
            .spawn((
                Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(4.0),
                    padding: UiRect::all(Val::Px(16.0)),
                    border: UiRect::all(Val::Px(1.0)),
                    ..default()
                },
                BackgroundColor(background),
                BorderColor(border),
                BorderRadius::all(Val::Px(CARD_CORNER_RADIUS)),
                Button,
                Motion::default(),
                Entrance::new(
                    1.6 + 0.1 * index as f32,
                    0.5,
                    Ease::BackOut,
                    Keyframe::raised(20.0, 0.9),
                ),
                Bob::prize_card(index),
                PointerShift {
                    strength: POINTER_PRIZE_SHIFT,
                },
                HoverGrow {
                    scale: CARD_HOVER_SCALE,
                },
                BaseTint::panel(background, border),
            ))
            .with_children(|card| {
                card.spawn((
                    Text::new(*name),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(TEXT_PRIMARY),
                    BaseTint::text(TEXT_PRIMARY),
                ));
                card.spawn((
                    Text::new(*amount),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(TEXT_MUTED),
                    BaseTint::text(TEXT_MUTED),
                ));
            })
            .id();
        cards.push(card);
    }
    commands.entity(row).add_children(&cards);

    let footnote = commands
        .spawn((
            Text::new("Plus additional prizes for industry-specific tracks"),
            TextFont {
                font_size: 13.0,
                ..default()
            },
            TextColor(TEXT_DIM),
            BaseTint::text(TEXT_DIM),
        ))
        .id();

    commands
        .entity(block)
        .add_children(&[heading, row, footnote]);
    block
}

fn spawn_cta_block(commands: &mut Commands) -> Entity {
    let block = commands
        .spawn((
            Node {
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(10.0),
                ..default()
            },
            Motion::default(),
            Entrance::new(
                2.1,
                0.8,
                Ease::BackOut,
                Keyframe {
                    offset: Vec2::new(0.0, 20.0),
                    scale: 0.8,
                    rotation: 0.0,
                    opacity: 0.0,
                },
            ),
            HeroFade,
        ))
        .id();

    let button = commands
        .spawn((
            Button,
            Node {
                padding: UiRect::axes(Val::Px(40.0), Val::Px(16.0)),
                ..default()
            },
            BackgroundColor(ACCENT_PINK),
            BorderRadius::MAX,
            RegisterButton,
            Motion::default(),
            HoverGrow {
                scale: BUTTON_HOVER_SCALE,
            },
            BaseTint::background(ACCENT_PINK),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new("Register Now"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
                BaseTint::text(TEXT_PRIMARY),
            ));
        })
        .id();

    let caption = commands
        .spawn((
            Text::new("Virtual Event \u{2022} Date TBD"),
            TextFont {
                font_size: 13.0,
                ..default()
            },
            TextColor(TEXT_DIM),
            BaseTint::text(TEXT_DIM),
        ))
        .id();

    commands.entity(block).add_children(&[button, caption]);
    block
}

fn spawn_stats_row(commands: &mut Commands) -> Entity {
    let row = commands
        .spawn(Node {
            column_gap: Val::Px(CARD_GAP),
            margin: UiRect::top(Val::Px(32.0)),
            ..default()
        })
        .id();

    let mut cards = Vec::with_capacity(STATS.len());
    for (index, (heading, body)) in STATS.iter().enumerate() {
        let background = Color::srgba(1.0, 1.0, 1.0, 0.05);
        let card = commands
            .spawn((
                Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(8.0),
                    max_width: Val::Px(280.0),
                    padding: UiRect::all(Val::Px(CARD_PADDING)),
                    border: UiRect::all(Val::Px(1.0)),
                    ..default()
                },
                BackgroundColor(background),
                BorderColor(PANEL_BORDER),
                BorderRadius::all(Val::Px(16.0)),
                Button,
                Motion::default(),
                Entrance::new(
                    2.4 + 0.15 * index as f32,
                    0.8,
                    Ease::BackOut,
                    Keyframe {
                        offset: Vec2::new(0.0, 50.0),
                        scale: 0.8,
                        rotation: -5.0,
                        opacity: 0.0,
                    },
                ),
                Bob::stat_card(index),
                PointerShift {
                    strength: POINTER_STAT_SHIFT,
                },
                HoverGrow {
                    scale: CARD_HOVER_SCALE,
                },
                BaseTint::panel(background, PANEL_BORDER),
            ))
            .with_children(|card| {
                card.spawn((
                    Text::new(*heading),
                    TextFont {
                        font_size: 24.0,
                        ..default()
                    },
                    TextColor(TEXT_PRIMARY),
                    BaseTint::text(TEXT_PRIMARY),
                ));
                card.spawn((
                    Text::new(*body),
                    TextFont {
                        font_size: 15.0,
                        ..default()
                    },
                    TextColor(TEXT_DIM),
                    TextLayout::new_with_justify(JustifyText::Center),
                    BaseTint::text(TEXT_DIM),
                ));
            })
            .id();
        cards.push(card);
    }
    commands.entity(row).add_children(&cards);
    row
}

fn spawn_scroll_indicator(commands: &mut Commands) -> Entity {
    commands
        .spawn((
            Node {
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(8.0),
                margin: UiRect::top(Val::Px(40.0)),
                ..default()
            },
            Motion::default(),
            Entrance::new(
                3.3,
                0.8,
                Ease::BackOutSoft,
                Keyframe {
                    offset: Vec2::new(0.0, -20.0),
                    scale: 1.0,
                    rotation: 0.0,
                    opacity: 0.0,
                },
            ),
        ))
        .with_children(|indicator| {
            indicator.spawn((
                Text::new("Scroll to discover more"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(TEXT_DIM),
                BaseTint::text(TEXT_DIM),
            ));
            indicator.spawn((
                Node {
                    width: Val::Px(16.0),
                    height: Val::Px(16.0),
                    ..default()
                },
                BackgroundColor(ACCENT_CYAN),
                BorderRadius::MAX,
                BaseTint::background(ACCENT_CYAN),
            ));
        })
        .id()
}

/// Lift and fade the hero blocks against scroll: beyond a small threshold
/// they rise at half scroll speed and fade out over half a viewport.
pub fn hero_scroll_fade(scroll: Res<ScrollState>, mut query: Query<&mut Motion, With<HeroFade>>) {
    let viewport_height = scroll.viewport_height();
    if viewport_height <= 0.0 {
        return;
    }
    let offset = scroll.offset();
    for mut motion in &mut query {
        motion.scroll = fade_channel(offset, viewport_height);
    }
}

/// Scroll fade formula, shared with tests.
pub fn fade_channel(offset: f32, viewport_height: f32) -> Channel {
    if offset <= HERO_FADE_THRESHOLD {
        return Channel::IDENTITY;
    }
    Channel {
        offset: Vec2::new(0.0, -offset * HERO_FADE_LIFT),
        opacity: (1.0 - offset / (viewport_height * HERO_FADE_RANGE)).clamp(0.0, 1.0),
        ..Channel::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f32 = 800.0;

    #[test]
    fn at_the_top_the_hero_rests() {
        let channel = fade_channel(0.0, VIEWPORT);
        assert_eq!(channel, Channel::IDENTITY);
    }

    #[test]
    fn below_the_threshold_nothing_moves() {
        let channel = fade_channel(HERO_FADE_THRESHOLD, VIEWPORT);
        assert_eq!(channel, Channel::IDENTITY);
    }

    #[test]
    fn half_a_viewport_down_the_hero_is_gone() {
        let channel = fade_channel(VIEWPORT * HERO_FADE_RANGE, VIEWPORT);
        assert_eq!(channel.opacity, 0.0);
        assert_eq!(channel.offset.y, -VIEWPORT * HERO_FADE_RANGE * HERO_FADE_LIFT);
    }

    #[test]
    fn opacity_never_leaves_unit_range() {
        for offset in [0.0, 5.0, 11.0, 120.0, 400.0, 4000.0] {
            let opacity = fade_channel(offset, VIEWPORT).opacity;
            assert!((0.0..=1.0).contains(&opacity), "offset {offset}");
        }
    }

    #[test]
    fn fade_is_monotonically_darker_with_scroll() {
        let mut last = 1.0;
        for i in 0..100 {
            let opacity = fade_channel(i as f32 * 8.0, VIEWPORT).opacity;
            assert!(opacity <= last + 1e-6);
            last = opacity;
        }
    }
}
