use crate::{geometry::Rect, occlusion::OcclusionResult};
use image::{RgbImage, imageops};
use tracing::{debug, warn};

/// Blur each visible rectangle of `frame` in place.
///
/// Rectangles are clamped to the frame first; anything that clamps to nothing
/// is skipped. Pixels outside the rectangles are never touched. `radius` is
/// used as the Gaussian sigma and must be positive.
pub fn apply_blur(frame: &mut RgbImage, visible: &OcclusionResult, radius: u32) {
    debug_assert!(radius > 0, "blur radius must be positive");
    if radius == 0 {
        warn!("Ignoring selective blur request with radius 0");
        return;
    }

    let bounds = Rect::from_size(frame.width(), frame.height());
    for rect in visible {
        let Some(region) = rect.intersect(&bounds) else {
            debug!("Visible rectangle {:?} lies outside the frame", rect);
            continue;
        };
        // Clamped to the frame, so all coordinates are non-negative.
        let (x, y) = (region.left as u32, region.top as u32);
        let (width, height) = (region.width() as u32, region.height() as u32);

        let patch = imageops::crop_imm(&*frame, x, y, width, height).to_image();
        let blurred = imageops::blur(&patch, radius as f32);
        imageops::replace(frame, &blurred, i64::from(x), i64::from(y));
    }
}

/// Blur the whole frame uniformly. A radius of 0 returns an unmodified copy.
pub fn blur_frame(frame: &RgbImage, radius: u32) -> RgbImage {
    if radius == 0 {
        return frame.clone();
    }
    imageops::blur(frame, radius as f32)
}
