use crate::{
    PeekShieldResult,
    blacklist::Blacklist,
    config::{CaptureConfig, CaptureMode},
    geometry::Rect,
    occlusion::{OcclusionResult, compute_visible},
    render::{apply_blur, blur_frame},
    resolver::resolve,
    window::{WindowRecord, WindowSource},
};
use image::RgbImage;
use tracing::{debug, info, warn};

#[cfg(feature = "async")]
use std::sync::Arc;

/// Produces full-screen frames.
pub trait FrameGrabber {
    fn grab(&self) -> PeekShieldResult<RgbImage>;
}

impl<F> FrameGrabber for F
where
    F: Fn() -> PeekShieldResult<RgbImage>,
{
    fn grab(&self) -> PeekShieldResult<RgbImage> {
        self()
    }
}

/// Outcome of a capture request.
#[derive(Debug, Clone, PartialEq)]
pub enum Capture {
    /// Privacy mode is on; no pixels leave the machine.
    Withheld,
    Frame(RgbImage),
}

impl Capture {
    pub fn into_frame(self) -> Option<RgbImage> {
        match self {
            Capture::Withheld => None,
            Capture::Frame(frame) => Some(frame),
        }
    }
}

/// Blur the visible part of the top-most blacklisted window in `frame`.
///
/// Returns the rectangles that were blurred; an empty result means the frame
/// is untouched. If enumerating windows fails the frame is left as it was.
pub fn selective_blur<W>(
    frame: &mut RgbImage,
    source: &W,
    blacklist: &Blacklist,
    radius: u32,
) -> PeekShieldResult<OcclusionResult>
where
    W: WindowSource + ?Sized,
{
    if blacklist.is_empty() {
        return Ok(OcclusionResult::default());
    }
    let snapshot = source.snapshot()?;
    Ok(selective_blur_with_snapshot(frame, &snapshot, blacklist, radius))
}

/// Same as [`selective_blur`] on a snapshot the caller already took.
pub fn selective_blur_with_snapshot(
    frame: &mut RgbImage,
    snapshot: &[WindowRecord],
    blacklist: &Blacklist,
    radius: u32,
) -> OcclusionResult {
    if radius == 0 {
        warn!("Selective blur requested with radius 0, leaving frame unblurred");
        return OcclusionResult::default();
    }

    let screen = Rect::from_size(frame.width(), frame.height());
    let Some(target) = resolve(snapshot, blacklist, screen) else {
        debug!("No blacklisted window on screen");
        return OcclusionResult::default();
    };

    let visible = compute_visible(target.rect, target.z_order, snapshot);
    if visible.is_empty() {
        debug!("Blacklisted window {:?} is fully covered", target.handle);
        return visible;
    }

    apply_blur(frame, &visible, radius);
    visible
}

/// Serves capture requests: grabs a frame and blurs it as the config asks.
#[derive(Debug, Clone)]
pub struct Capturer<W, G> {
    windows: W,
    grabber: G,
}

impl<W, G> Capturer<W, G>
where
    W: WindowSource,
    G: FrameGrabber,
{
    pub fn new(windows: W, grabber: G) -> Self {
        Self { windows, grabber }
    }

    pub fn capture(&self, config: &CaptureConfig) -> PeekShieldResult<Capture> {
        let mode = config.mode();
        if mode == CaptureMode::Withheld {
            info!("Privacy mode enabled, withholding frame");
            return Ok(Capture::Withheld);
        }

        let mut frame = self.grabber.grab()?;
        match mode {
            CaptureMode::Uniform(radius) => {
                debug!("Blurring whole frame with radius {}", radius);
                frame = blur_frame(&frame, radius);
            }
            CaptureMode::Selective(radius) => {
                let blurred =
                    selective_blur(&mut frame, &self.windows, &config.blacklist, radius)?;
                if !blurred.is_empty() {
                    info!(
                        "Blurred {} rectangle(s), {} px of a blacklisted window",
                        blurred.len(),
                        blurred.area()
                    );
                }
            }
            CaptureMode::Passthrough | CaptureMode::Withheld => {}
        }
        Ok(Capture::Frame(frame))
    }
}

#[cfg(feature = "async")]
impl<W, G> Capturer<W, G>
where
    W: WindowSource + Send + Sync + 'static,
    G: FrameGrabber + Send + Sync + 'static,
{
    /// Async version of capture - requires the "async" feature
    ///
    /// The pipeline runs on the blocking pool so each request gets its own
    /// window snapshot and frame.
    pub async fn capture_async(
        self: Arc<Self>,
        config: CaptureConfig,
    ) -> PeekShieldResult<Capture> {
        tokio::task::spawn_blocking(move || self.capture(&config))
            .await
            .map_err(|e| crate::PeekShieldError::Platform(format!("Capture task failed: {e}")))?
    }
}
