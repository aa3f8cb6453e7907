//! Reference layout for the retro desktop and the dashboard

use crate::carousel::{BackgroundVariant, Slide};
use crate::math::Vec2;
use crate::window::{PaneConfig, PaneContent};

/// Slide selected when the dashboard mounts ("games")
pub const DEFAULT_SLIDE: usize = 2;

/// Track played by the music player pane
pub const MUSIC_PLAYER_SRC: &str = "/OsamaSon - popstar [Official Music Video].mp3";

/// Sound played when the login banner activates
pub const ACHIEVEMENT_SOUND_SRC: &str = "src/assets/media/Achievement-mp3-sound.mp3";

/// The five dashboard slides in display order
pub fn dashboard_slides() -> Vec<Slide> {
    vec![
        Slide::new("marketplace", "1 | MARKETPLACE", BackgroundVariant::Marketplace),
        Slide::new("xboxlive", "2 | XBOXLIVE", BackgroundVariant::XboxLive),
        Slide::new("games", "3 | GAMES", BackgroundVariant::Games),
        Slide::new("media", "4 | MEDIA", BackgroundVariant::Media),
        Slide::new("system", "5 | SYSTEM", BackgroundVariant::System),
    ]
}

fn pane(id: u64, title: &str, content: PaneContent, x: f32, y: f32) -> PaneConfig {
    PaneConfig {
        id,
        title: title.to_string(),
        content,
        position: Vec2::new(x, y),
        z_index: id as u32,
    }
}

/// The five desktop panes, stacked in id order
pub fn desktop_panes() -> Vec<PaneConfig> {
    vec![
        pane(
            1,
            "Document 1",
            PaneContent::Notes {
                heading: "Important Notes".to_string(),
                bullets: vec![
                    "First important note".to_string(),
                    "Second important note".to_string(),
                    "Third important note".to_string(),
                ],
            },
            50.0,
            50.0,
        ),
        pane(
            2,
            "Image Viewer",
            PaneContent::ImageViewer { caption: "Image Placeholder".to_string() },
            500.0,
            50.0,
        ),
        pane(
            3,
            "Calculator",
            PaneContent::Notes { heading: "Calculator".to_string(), bullets: Vec::new() },
            200.0,
            200.0,
        ),
        pane(
            4,
            "Music Player",
            PaneContent::MusicPlayer { audio_src: MUSIC_PLAYER_SRC.to_string() },
            50.0,
            350.0,
        ),
        pane(
            5,
            "Email",
            PaneContent::Message { heading: "New Message".to_string() },
            500.0,
            350.0,
        ),
    ]
}
