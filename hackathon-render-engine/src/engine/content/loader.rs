use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::content::records::{ActiveRoster, Roster};

/// Asset path of the optional roster override, relative to the asset root.
const ROSTER_PATH: &str = "roster.json";

#[derive(Resource, Default)]
pub struct RosterLoader {
    handle: Option<Handle<Roster>>,
    resolved: bool,
}

/// Kick off the roster load at startup.
pub fn start_roster_load(mut loader: ResMut<RosterLoader>, asset_server: Res<AssetServer>) {
    loader.handle = Some(asset_server.load(ROSTER_PATH));
}

/// Resolve the active roster once the asset settles. A missing or invalid
/// file degrades to the built-in lists; the page never fails to render.
pub fn resolve_roster(
    mut loader: ResMut<RosterLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    rosters: Res<Assets<Roster>>,
) {
    if loader.resolved {
        return;
    }
    let Some(handle) = loader.handle.clone() else {
        return;
    };

    match asset_server.load_state(&handle) {
        LoadState::Loaded => {
            let Some(roster) = rosters.get(&handle) else {
                return;
            };
            if roster.has_unique_ids() {
                info!(
                    "Roster loaded: {} sponsors, {} judges",
                    roster.sponsors.len(),
                    roster.judges.len()
                );
                commands.insert_resource(ActiveRoster(roster.clone()));
            } else {
                warn!("Roster has duplicate ids, keeping built-in lists");
                commands.insert_resource(ActiveRoster(Roster::builtin()));
            }
            loader.resolved = true;
        }
        LoadState::Failed(_) => {
            warn!("No roster override found, using built-in lists");
            commands.insert_resource(ActiveRoster(Roster::builtin()));
            loader.resolved = true;
        }
        _ => {}
    }
}
