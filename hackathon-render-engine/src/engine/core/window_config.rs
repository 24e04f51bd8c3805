use bevy::prelude::*;
use bevy::window::PresentMode;

/// Platform-specific primary window. On the web the scene renders into the
/// page's `#bevy` canvas and tracks its size; default event handling stays
/// enabled so the hosting page keeps receiving input.
pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "The World's Largest Hackathon".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
