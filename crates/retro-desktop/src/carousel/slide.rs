//! Slide definition

use serde::{Deserialize, Serialize};

/// Background artwork for a slide
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundVariant {
    Marketplace,
    XboxLive,
    Games,
    Media,
    System,
}

impl BackgroundVariant {
    /// CSS class carrying the artwork
    pub fn css_class(&self) -> &'static str {
        match self {
            BackgroundVariant::Marketplace => "marketplace-slide",
            BackgroundVariant::XboxLive => "xboxlive-slide",
            BackgroundVariant::Games => "games-slide",
            BackgroundVariant::Media => "media-slide",
            BackgroundVariant::System => "system-slide",
        }
    }
}

/// One page of the dashboard; immutable once the carousel is built
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Stable key, also the button label
    pub id: String,
    /// Heading shown on the slide
    pub title: String,
    /// Background artwork
    pub background: BackgroundVariant,
}

impl Slide {
    /// Create a slide
    pub fn new(id: &str, title: &str, background: BackgroundVariant) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            background,
        }
    }
}
