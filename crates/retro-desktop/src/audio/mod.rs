//! Audio widget module
//!
//! Play/pause and volume state for the two skinned players. Actual playback
//! goes through the [`AudioOutput`] capability supplied by the host.

mod output;
mod widget;

pub use output::AudioOutput;
pub use widget::{format_time, AudioWidget, PlayerSkin, SKIP_SECONDS};

#[cfg(test)]
pub(crate) mod testing {
    use super::AudioOutput;

    /// Output double recording every call
    #[derive(Debug, Default)]
    pub struct RecordingOutput {
        pub calls: Vec<String>,
        pub position: f64,
        pub length: f64,
    }

    impl RecordingOutput {
        pub fn with_track(length: f64) -> Self {
            Self {
                length,
                ..Default::default()
            }
        }
    }

    impl AudioOutput for RecordingOutput {
        fn play(&mut self) {
            self.calls.push("play".to_string());
        }

        fn pause(&mut self) {
            self.calls.push("pause".to_string());
        }

        fn seek(&mut self, seconds: f64) {
            self.position = seconds;
            self.calls.push(format!("seek {seconds}"));
        }

        fn set_volume(&mut self, percent: u8) {
            self.calls.push(format!("volume {percent}"));
        }

        fn current_time(&self) -> f64 {
            self.position
        }

        fn duration(&self) -> f64 {
            self.length
        }
    }
}
