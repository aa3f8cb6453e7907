//! WASM exports for the retro front end
//!
//! This module provides wasm-bindgen controllers wrapping each state
//! container, allowing React to drive them and render from JSON commands.

use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

use crate::audio::{format_time, AudioOutput, AudioWidget, PlayerSkin};
use crate::carousel::CarouselController;
use crate::login::LoginBanner;
use crate::math::Vec2;
use crate::presets;
use crate::window::{PaneRegion, WindowManager};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// =============================================================================
// Audio output over an <audio> element
// =============================================================================

/// [`AudioOutput`] backed by a detached `HtmlAudioElement`
pub struct WebAudioOutput {
    element: HtmlAudioElement,
}

impl WebAudioOutput {
    /// Create an element loading `src`
    pub fn new(src: &str) -> Result<Self, JsValue> {
        let element = HtmlAudioElement::new_with_src(src)?;
        Ok(Self { element })
    }
}

impl AudioOutput for WebAudioOutput {
    fn play(&mut self) {
        // Autoplay rejections surface on the promise; nothing to recover.
        if let Err(e) = self.element.play() {
            log(&format!("[audio] play failed: {:?}", e));
        }
    }

    fn pause(&mut self) {
        if let Err(e) = self.element.pause() {
            log(&format!("[audio] pause failed: {:?}", e));
        }
    }

    fn seek(&mut self, seconds: f64) {
        self.element.set_current_time(seconds);
    }

    fn set_volume(&mut self, percent: u8) {
        self.element.set_volume(f64::from(percent) / 100.0);
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn duration(&self) -> f64 {
        self.element.duration()
    }
}

// =============================================================================
// Desktop
// =============================================================================

/// Desktop controller for WASM - wraps WindowManager with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    windows: WindowManager,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a desktop seeded with the reference panes
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let mut windows = WindowManager::new();
        if let Err(e) = windows.open(presets::desktop_panes()) {
            log(&format!("[desktop] Failed to seed panes: {}", e));
        }
        Self { windows }
    }

    /// Handle pointer down on a pane region ("titleBar", "content", ...)
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, id: u64, region: &str, x: f32, y: f32) -> String {
        let result = match PaneRegion::from_name(region) {
            Some(region) => self.windows.pointer_down(id, region, Vec2::new(x, y)),
            None => {
                log(&format!("[desktop] Unknown pane region: {}", region));
                crate::input::InputResult::Unhandled
            }
        };
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Handle pointer move anywhere in the viewport
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        let result = self.windows.pointer_move(Vec2::new(x, y));
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Handle pointer up or pointer leave
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        let result = self.windows.pointer_up();
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Close a pane
    #[wasm_bindgen]
    pub fn close_pane(&mut self, id: u64) {
        self.windows.close(id);
    }

    /// Focus a pane
    #[wasm_bindgen]
    pub fn focus_pane(&mut self, id: u64) {
        self.windows.focus(id);
    }

    /// Check if a pane is being dragged
    #[wasm_bindgen]
    pub fn is_dragging(&self) -> bool {
        self.windows.is_dragging()
    }

    /// Get all panes as JSON
    #[wasm_bindgen]
    pub fn get_panes_json(&self) -> String {
        let focused_id = self.windows.focused();
        let panes: Vec<serde_json::Value> = self
            .windows
            .panes()
            .iter()
            .map(|p| {
                serde_json::json!({
                    "id": p.id,
                    "title": p.title,
                    "content": p.content,
                    "position": { "x": p.position.x, "y": p.position.y },
                    "zIndex": p.z_index,
                    "focused": focused_id == Some(p.id)
                })
            })
            .collect();
        serde_json::to_string(&panes).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get pane placement commands as JSON
    #[wasm_bindgen]
    pub fn get_render_commands_json(&self) -> String {
        serde_json::to_string(&self.windows.render_commands()).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Dashboard
// =============================================================================

/// Dashboard controller for WASM - wraps CarouselController
#[wasm_bindgen]
pub struct DashboardController {
    carousel: CarouselController,
}

#[wasm_bindgen]
impl DashboardController {
    /// Create the reference dashboard for a slider of the given width
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: f32) -> Result<DashboardController, JsValue> {
        let carousel =
            CarouselController::new(presets::dashboard_slides(), presets::DEFAULT_SLIDE, viewport_width)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { carousel })
    }

    /// Select a slide; returns render commands as JSON
    #[wasm_bindgen]
    pub fn select_slide(&mut self, index: u32) -> Result<String, JsValue> {
        if let Err(e) = self.carousel.select_slide(index as usize) {
            log(&format!("[dashboard] {}", e));
            return Err(JsValue::from_str(&e.to_string()));
        }
        Ok(self.get_render_commands_json())
    }

    /// Update the slider wrapper width
    #[wasm_bindgen]
    pub fn set_viewport_width(&mut self, width: f32) {
        self.carousel.set_viewport_width(width);
    }

    /// Get the active slide index
    #[wasm_bindgen]
    pub fn active_index(&self) -> u32 {
        self.carousel.active_index() as u32
    }

    /// Get scroll and button commands as JSON
    #[wasm_bindgen]
    pub fn get_render_commands_json(&self) -> String {
        serde_json::to_string(&self.carousel.render_commands()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get all slides as JSON
    #[wasm_bindgen]
    pub fn get_slides_json(&self) -> String {
        let slides: Vec<serde_json::Value> = self
            .carousel
            .slides()
            .iter()
            .map(|s| {
                serde_json::json!({
                    "id": s.id,
                    "title": s.title,
                    "bgClass": s.background.css_class()
                })
            })
            .collect();
        serde_json::to_string(&slides).unwrap_or_else(|_| "[]".to_string())
    }
}

// =============================================================================
// Audio widgets
// =============================================================================

/// Player widget controller for WASM - pairs AudioWidget with an element
#[wasm_bindgen]
pub struct MediaPlayerController {
    widget: AudioWidget,
    output: WebAudioOutput,
}

#[wasm_bindgen]
impl MediaPlayerController {
    /// Create a player; `skin` is "compact" or "artwork"
    #[wasm_bindgen(constructor)]
    pub fn new(skin: &str, src: &str) -> Result<MediaPlayerController, JsValue> {
        let skin = match skin {
            "compact" => PlayerSkin::Compact,
            "artwork" => PlayerSkin::Artwork,
            other => return Err(JsValue::from_str(&format!("unknown player skin: {}", other))),
        };
        let mut output = WebAudioOutput::new(src)?;
        let mut widget = AudioWidget::new(skin);
        widget.set_volume(skin.default_volume(), &mut output);
        Ok(Self { widget, output })
    }

    #[wasm_bindgen]
    pub fn toggle_play(&mut self) {
        self.widget.toggle_play(&mut self.output);
    }

    #[wasm_bindgen]
    pub fn stop(&mut self) {
        self.widget.stop(&mut self.output);
    }

    #[wasm_bindgen]
    pub fn skip_back(&mut self) {
        self.widget.skip_back(&mut self.output);
    }

    #[wasm_bindgen]
    pub fn skip_forward(&mut self) {
        self.widget.skip_forward(&mut self.output);
    }

    /// Set volume from the range input (0-100)
    #[wasm_bindgen]
    pub fn set_volume(&mut self, percent: u32) {
        self.widget.set_volume(percent.min(100) as u8, &mut self.output);
    }

    /// Seek from a progress bar click at `fraction` of its width
    #[wasm_bindgen]
    pub fn seek_fraction(&mut self, fraction: f64) {
        self.widget.seek_fraction(fraction, &mut self.output);
    }

    /// Refresh position and length (timeupdate / loadedmetadata)
    #[wasm_bindgen]
    pub fn sync(&mut self) {
        self.widget.sync(&self.output);
    }

    #[wasm_bindgen]
    pub fn is_playing(&self) -> bool {
        self.widget.is_playing()
    }

    #[wasm_bindgen]
    pub fn volume(&self) -> u32 {
        u32::from(self.widget.volume())
    }

    #[wasm_bindgen]
    pub fn progress(&self) -> f64 {
        self.widget.progress()
    }

    /// Get widget state as JSON, including formatted time labels
    #[wasm_bindgen]
    pub fn get_state_json(&self) -> String {
        serde_json::to_string(&serde_json::json!({
            "skin": self.widget.skin(),
            "playing": self.widget.is_playing(),
            "volume": self.widget.volume(),
            "progress": self.widget.progress(),
            "currentTime": format_time(self.widget.current_time()),
            "duration": format_time(self.widget.duration())
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }
}

// =============================================================================
// Login banner
// =============================================================================

/// Login banner controller for WASM
#[wasm_bindgen]
pub struct LoginController {
    banner: LoginBanner,
    chime: WebAudioOutput,
}

#[wasm_bindgen]
impl LoginController {
    /// Mount the banner now
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<LoginController, JsValue> {
        let now = date_now();
        // Cache-busting query so the chime replays on every visit
        let src = format!("{}?v={}", presets::ACHIEVEMENT_SOUND_SRC, now as u64);
        Ok(Self {
            banner: LoginBanner::new(now),
            chime: WebAudioOutput::new(&src)?,
        })
    }

    /// Advance the banner; returns true when it activates
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        let activated = self.banner.tick(date_now(), &mut self.chime);
        if activated {
            log("[login] Banner active");
        }
        activated
    }

    /// Milliseconds until activation
    #[wasm_bindgen]
    pub fn remaining_ms(&self) -> f64 {
        self.banner.remaining_ms(date_now())
    }

    #[wasm_bindgen]
    pub fn is_active(&self) -> bool {
        self.banner.is_active()
    }

    #[wasm_bindgen]
    pub fn css_class(&self) -> String {
        self.banner.css_class().to_string()
    }
}
