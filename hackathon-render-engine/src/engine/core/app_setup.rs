use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::content::loader::{RosterLoader, resolve_roster, start_roster_load};
use crate::engine::content::records::Roster;
use crate::engine::core::window_config::create_window_config;
use crate::engine::motion::loops::advance_bobs;
use crate::engine::motion::parallax::{
    PointerParallax, apply_pointer_parallax, ease_pointer_system, pointer_input_system,
};
use crate::engine::motion::scroll::{ScrollState, scroll_input_system, smooth_scroll_system};
use crate::engine::motion::timeline::advance_entrances;
use crate::engine::motion::{apply_motion, apply_opacity};
use crate::engine::scene::backdrop::{
    create_backdrop_camera, spawn_lighting, spawn_starfield, spin_starfield,
};
use crate::engine::scene::particles::{FireworkPool, update_fireworks};
use crate::engine::scene::trophy::{rig_scroll_motion, spawn_trophy, spin_trophy};

// Crate sections modules
use crate::sections::hero::{hero_scroll_fade, spawn_hero_content};
use crate::sections::interactions::{
    hover_grow_system, register_button_system, sponsor_link_system,
};
use crate::sections::nav_indicator::{
    SectionNavEvent, handle_section_nav_events, highlight_active_dot, nav_dot_pressed,
    spawn_nav_indicator,
};
use crate::sections::showcase::{
    ShowcaseAnchor, ShowcaseBuilt, build_showcase_when_ready, showcase_parallax,
};
use crate::sections::tracker::{
    ActiveSection, SectionChangedEvent, SectionId, apply_page_scroll, layout_sections,
    spawn_page_root, spawn_section, start_reveals, update_section_visibility,
};

// Web RPC modules
use crate::rpc::web_rpc::WebRpcPlugin;

use constants::layout::{HERO_HEIGHT_FACTOR, SHOWCASE_HEIGHT_FACTOR};
use constants::motion::PARTICLE_COUNT;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers the roster as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<Roster>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .insert_resource(ClearColor(Color::BLACK));

    app.init_resource::<ScrollState>()
        .init_resource::<ActiveSection>()
        .init_resource::<PointerParallax>()
        .init_resource::<RosterLoader>()
        .init_resource::<ShowcaseBuilt>()
        .add_event::<SectionNavEvent>()
        .add_event::<SectionChangedEvent>();

    app.add_systems(Startup, (setup_scene, setup_page, start_roster_load));

    // Content resolution runs until the roster settles and the showcase is
    // built; both are one-shot guards afterwards.
    app.add_systems(Update, (resolve_roster, build_showcase_when_ready).chain());

    // Input, scroll, layout, and visibility tracking in frame order.
    app.add_systems(
        Update,
        (
            pointer_input_system,
            ease_pointer_system,
            scroll_input_system,
            smooth_scroll_system,
            layout_sections,
            apply_page_scroll,
            update_section_visibility,
            start_reveals,
        )
            .chain(),
    );

    // Motion writers, then the compose/apply pass.
    app.add_systems(
        Update,
        (
            advance_entrances,
            hero_scroll_fade,
            showcase_parallax,
            apply_pointer_parallax,
            advance_bobs,
            hover_grow_system,
            apply_motion,
            apply_opacity,
        )
            .chain()
            .after(start_reveals),
    );

    // Ambient backdrop animation.
    app.add_systems(
        Update,
        (
            update_fireworks,
            spin_trophy,
            spin_starfield,
            rig_scroll_motion,
        ),
    );

    // Interaction and navigation.
    app.add_systems(
        Update,
        (
            nav_dot_pressed,
            handle_section_nav_events,
            highlight_active_dot,
            sponsor_link_system,
            register_button_system,
        ),
    );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

/// Spawn the 3D backdrop: camera, lighting, starfield, trophy, fireworks.
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::rng();
    create_backdrop_camera(&mut commands);
    spawn_lighting(&mut commands);
    spawn_starfield(&mut commands, &mut meshes, &mut materials, &mut rng);
    spawn_trophy(&mut commands, &mut meshes, &mut materials);
    commands.insert_resource(FireworkPool::new(PARTICLE_COUNT, &mut rng));
}

/// Spawn the page scaffold: section stack, hero content, and the floating
/// navigation indicator. Showcase content follows once the roster resolves.
fn setup_page(mut commands: Commands) {
    let root = spawn_page_root(&mut commands);
    let hero = spawn_section(&mut commands, 0, Some(SectionId::Hero), HERO_HEIGHT_FACTOR);
    let showcase = spawn_section(
        &mut commands,
        1,
        Some(SectionId::SponsorsJudges),
        SHOWCASE_HEIGHT_FACTOR,
    );
    commands.entity(root).add_children(&[hero, showcase]);

    spawn_hero_content(&mut commands, hero);
    commands.insert_resource(ShowcaseAnchor(showcase));
    spawn_nav_indicator(&mut commands);
}
