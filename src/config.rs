use crate::blacklist::Blacklist;

/// Largest blur radius accepted by [`CaptureConfig::with_blur_radius`].
pub const MAX_BLUR_RADIUS: u32 = 50;

/// How a single capture request is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    /// Privacy mode: no frame is returned at all.
    Withheld,
    /// The whole frame is blurred with the given radius.
    Uniform(u32),
    /// Only the visible part of the top‑most blacklisted window is blurred.
    Selective(u32),
    /// Blur radius is zero; the frame is returned as captured.
    Passthrough,
}

/// Immutable per‑request capture settings.
///
/// The settings editor owns the authoritative copy and hands a fresh value to
/// each capture call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Gaussian blur radius in pixels.
    /// Default: 5
    pub blur_radius: u32,
    /// Blur the whole frame instead of only blacklisted windows.
    /// Default: true
    pub blur_enabled: bool,
    /// Refuse to hand out frames at all.
    /// Default: false
    pub privacy_mode: bool,
    /// Applications whose windows are always blurred.
    /// Default: empty
    pub blacklist: Blacklist,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            blur_radius: 5,
            blur_enabled: true,
            privacy_mode: false,
            blacklist: Blacklist::default(),
        }
    }
}

impl CaptureConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the blur radius
    ///
    /// # Panics
    /// Panics if the radius is greater than [`MAX_BLUR_RADIUS`]
    pub fn with_blur_radius(mut self, radius: u32) -> Self {
        if radius > MAX_BLUR_RADIUS {
            panic!("Blur radius cannot be greater than {MAX_BLUR_RADIUS} pixels");
        }
        self.blur_radius = radius;
        self
    }

    pub fn with_blur_enabled(mut self, enabled: bool) -> Self {
        self.blur_enabled = enabled;
        self
    }

    pub fn with_privacy_mode(mut self, enabled: bool) -> Self {
        self.privacy_mode = enabled;
        self
    }

    /// Replace the blacklist with the given executable names or paths
    pub fn with_blacklist<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blacklist = Blacklist::new(entries);
        self
    }

    /// Decide which capture path serves a request with these settings.
    pub fn mode(&self) -> CaptureMode {
        if self.privacy_mode {
            CaptureMode::Withheld
        } else if self.blur_radius == 0 {
            CaptureMode::Passthrough
        } else if self.blur_enabled {
            CaptureMode::Uniform(self.blur_radius)
        } else {
            CaptureMode::Selective(self.blur_radius)
        }
    }
}
