//! Audio widget state shared by both player skins

use serde::Serialize;
use super::AudioOutput;

/// Seconds moved by the skip buttons
pub const SKIP_SECONDS: f64 = 5.0;

/// Which player chrome the widget drives
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerSkin {
    /// Windows Media Player bar: stop, skip, play, volume
    Compact,
    /// Album art player: click-to-play artwork and a seekable progress bar
    Artwork,
}

impl PlayerSkin {
    /// Slider position when the widget mounts
    pub fn default_volume(&self) -> u8 {
        match self {
            PlayerSkin::Compact => 75,
            PlayerSkin::Artwork => 100,
        }
    }
}

/// Play/pause flag, volume and playback clock for one widget
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioWidget {
    skin: PlayerSkin,
    playing: bool,
    volume: u8,
    current_time: f64,
    duration: f64,
}

impl AudioWidget {
    /// Create a paused widget at the skin's default volume
    pub fn new(skin: PlayerSkin) -> Self {
        Self {
            skin,
            playing: false,
            volume: skin.default_volume(),
            current_time: 0.0,
            duration: 0.0,
        }
    }

    /// Play if paused, pause if playing
    pub fn toggle_play(&mut self, out: &mut dyn AudioOutput) {
        if self.playing {
            out.pause();
        } else {
            out.play();
        }
        self.playing = !self.playing;
    }

    /// Rewind to the start and pause
    pub fn stop(&mut self, out: &mut dyn AudioOutput) {
        out.seek(0.0);
        out.pause();
        self.current_time = 0.0;
        self.playing = false;
    }

    /// Jump back [`SKIP_SECONDS`], not before the start
    pub fn skip_back(&mut self, out: &mut dyn AudioOutput) {
        let target = out.current_time() - SKIP_SECONDS;
        self.seek_to(target, out);
    }

    /// Jump forward [`SKIP_SECONDS`], not past a known end
    pub fn skip_forward(&mut self, out: &mut dyn AudioOutput) {
        let target = out.current_time() + SKIP_SECONDS;
        self.seek_to(target, out);
    }

    /// Seek to a fraction of the track, as clicked on the progress bar
    pub fn seek_fraction(&mut self, fraction: f64, out: &mut dyn AudioOutput) {
        let fraction = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
        let target = fraction * self.duration;
        self.seek_to(target, out);
    }

    fn seek_to(&mut self, seconds: f64, out: &mut dyn AudioOutput) {
        let mut target = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        let length = known_length(out.duration());
        if length > 0.0 {
            target = target.min(length);
        }
        out.seek(target);
        self.current_time = target;
    }

    /// Set volume from the slider, clamped to 0-100
    pub fn set_volume(&mut self, percent: u8, out: &mut dyn AudioOutput) {
        self.volume = percent.min(100);
        out.set_volume(self.volume);
    }

    /// Pull position and length from the output (time update, metadata load)
    pub fn sync(&mut self, out: &dyn AudioOutput) {
        self.current_time = known_length(out.current_time());
        self.duration = known_length(out.duration());
    }

    /// Played fraction for the progress bar, 0 while the length is unknown
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.current_time / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Get the skin
    #[inline]
    pub fn skin(&self) -> PlayerSkin {
        self.skin
    }

    /// Check if playing
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Get volume percentage
    #[inline]
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Get last known position in seconds
    #[inline]
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Get last known length in seconds
    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

fn known_length(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}

/// Format seconds as `m:ss`
pub fn format_time(seconds: f64) -> String {
    let total = known_length(seconds).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::RecordingOutput;

    #[test]
    fn test_default_volumes() {
        assert_eq!(AudioWidget::new(PlayerSkin::Compact).volume(), 75);
        assert_eq!(AudioWidget::new(PlayerSkin::Artwork).volume(), 100);
        assert!(!AudioWidget::new(PlayerSkin::Compact).is_playing());
    }

    #[test]
    fn test_toggle_play() {
        let mut out = RecordingOutput::default();
        let mut widget = AudioWidget::new(PlayerSkin::Compact);

        widget.toggle_play(&mut out);
        assert!(widget.is_playing());
        widget.toggle_play(&mut out);
        assert!(!widget.is_playing());
        assert_eq!(out.calls, vec!["play", "pause"]);
    }

    #[test]
    fn test_stop_rewinds_and_pauses() {
        let mut out = RecordingOutput::with_track(200.0);
        out.position = 42.0;
        let mut widget = AudioWidget::new(PlayerSkin::Compact);
        widget.toggle_play(&mut out);

        widget.stop(&mut out);
        assert!(!widget.is_playing());
        assert_eq!(out.position, 0.0);
        assert_eq!(out.calls, vec!["play", "seek 0", "pause"]);
    }

    #[test]
    fn test_skip_bounds() {
        let mut out = RecordingOutput::with_track(12.0);
        out.position = 3.0;
        let mut widget = AudioWidget::new(PlayerSkin::Compact);

        widget.skip_back(&mut out);
        assert_eq!(out.position, 0.0);

        widget.skip_forward(&mut out);
        assert_eq!(out.position, 5.0);
        widget.skip_forward(&mut out);
        widget.skip_forward(&mut out);
        assert_eq!(out.position, 12.0);
        assert_eq!(widget.current_time(), 12.0);
    }

    #[test]
    fn test_skip_without_metadata_is_unbounded_forward() {
        let mut out = RecordingOutput::with_track(f64::NAN);
        let mut widget = AudioWidget::new(PlayerSkin::Compact);
        widget.skip_forward(&mut out);
        widget.skip_forward(&mut out);
        assert_eq!(out.position, 10.0);
    }

    #[test]
    fn test_volume_clamped() {
        let mut out = RecordingOutput::default();
        let mut widget = AudioWidget::new(PlayerSkin::Compact);
        widget.set_volume(180, &mut out);
        assert_eq!(widget.volume(), 100);
        widget.set_volume(30, &mut out);
        assert_eq!(widget.volume(), 30);
        assert_eq!(out.calls, vec!["volume 100", "volume 30"]);
    }

    #[test]
    fn test_seek_fraction_and_progress() {
        let mut out = RecordingOutput::with_track(180.0);
        let mut widget = AudioWidget::new(PlayerSkin::Artwork);
        assert_eq!(widget.progress(), 0.0);

        widget.sync(&out);
        widget.seek_fraction(0.5, &mut out);
        assert_eq!(out.position, 90.0);
        assert!((widget.progress() - 0.5).abs() < 0.001);

        widget.seek_fraction(4.0, &mut out);
        assert_eq!(out.position, 180.0);
    }

    #[test]
    fn test_sync_ignores_unloaded_metadata() {
        let out = RecordingOutput::with_track(f64::NAN);
        let mut widget = AudioWidget::new(PlayerSkin::Artwork);
        widget.sync(&out);
        assert_eq!(widget.duration(), 0.0);
        assert_eq!(widget.progress(), 0.0);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(7.9), "0:07");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(3600.0), "60:00");
        assert_eq!(format_time(f64::NAN), "0:00");
    }
}
