//! Login banner that slides in shortly after the page mounts

use crate::audio::AudioOutput;

/// Delay between mount and activation in milliseconds
pub const LOGIN_DELAY_MS: f64 = 1000.0;

/// One-shot "login successful" banner
///
/// Time is supplied by the caller, so the banner is deterministic under test.
#[derive(Clone, Debug, PartialEq)]
pub struct LoginBanner {
    mounted_at_ms: f64,
    active: bool,
}

impl LoginBanner {
    /// Create an inactive banner mounted at `now_ms`
    pub fn new(now_ms: f64) -> Self {
        Self {
            mounted_at_ms: now_ms,
            active: false,
        }
    }

    /// Advance the banner clock
    ///
    /// Returns `true` on the tick that activates the banner; the achievement
    /// sound plays on that tick only.
    pub fn tick(&mut self, now_ms: f64, chime: &mut dyn AudioOutput) -> bool {
        if self.active || now_ms - self.mounted_at_ms < LOGIN_DELAY_MS {
            return false;
        }
        self.active = true;
        chime.play();
        true
    }

    /// Milliseconds left before activation
    pub fn remaining_ms(&self, now_ms: f64) -> f64 {
        if self.active {
            0.0
        } else {
            (LOGIN_DELAY_MS - (now_ms - self.mounted_at_ms)).max(0.0)
        }
    }

    /// Check if the banner has activated
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// CSS classes for the banner root
    pub fn css_class(&self) -> &'static str {
        if self.active {
            "login out"
        } else {
            "login"
        }
    }
}
