//! Playback capability

/// Something that can play one audio track
///
/// Implemented over an `<audio>` element in the browser and by recording
/// doubles in tests. Times are seconds; `duration` is NaN or 0 until the
/// track's metadata has loaded.
pub trait AudioOutput {
    /// Start or resume playback
    fn play(&mut self);
    /// Pause playback, keeping the position
    fn pause(&mut self);
    /// Jump to a position
    fn seek(&mut self, seconds: f64);
    /// Set loudness, 0-100
    fn set_volume(&mut self, percent: u8);
    /// Current playback position
    fn current_time(&self) -> f64;
    /// Track length
    fn duration(&self) -> f64;
}
