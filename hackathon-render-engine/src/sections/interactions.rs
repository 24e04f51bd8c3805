use bevy::prelude::*;

use crate::engine::motion::Motion;
use crate::engine::motion::easing::lerp;
use crate::rpc::web_rpc::WebRpcInterface;
use constants::motion::HOVER_GROW_RATE;

/// Eases the pointer channel's scale toward a hover target, giving cards
/// and buttons a soft grow instead of a snap.
#[derive(Component, Debug, Clone, Copy)]
pub struct HoverGrow {
    pub scale: f32,
}

/// Sponsor cards act as outbound links.
#[derive(Component, Debug)]
pub struct SponsorLink {
    pub url: String,
}

/// Registration call-to-action buttons; presses are forwarded to the host
/// page.
#[derive(Component)]
pub struct RegisterButton;

pub fn hover_grow_system(
    time: Res<Time>,
    mut query: Query<(&HoverGrow, &Interaction, &mut Motion)>,
) {
    let rate = (HOVER_GROW_RATE * time.delta_secs()).min(1.0);
    for (grow, interaction, mut motion) in &mut query {
        let target = match interaction {
            Interaction::Hovered | Interaction::Pressed => grow.scale,
            Interaction::None => 1.0,
        };
        motion.pointer.scale = lerp(motion.pointer.scale, target, rate);
    }
}

pub fn sponsor_link_system(
    query: Query<(&Interaction, &SponsorLink), Changed<Interaction>>,
) {
    for (interaction, link) in &query {
        if *interaction == Interaction::Pressed {
            open_external(&link.url);
        }
    }
}

pub fn register_button_system(
    mut rpc_interface: ResMut<WebRpcInterface>,
    query: Query<&Interaction, (Changed<Interaction>, With<RegisterButton>)>,
) {
    for interaction in &query {
        if *interaction == Interaction::Pressed {
            info!("Register pressed");
            rpc_interface.send_notification("register_clicked", serde_json::json!({}));
        }
    }
}

/// Open an outbound link in the hosting browser; on native builds the URL
/// is only logged.
fn open_external(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url(url) {
                error!("Failed to open link: {:?}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        info!("Outbound link: {url}");
    }
}
