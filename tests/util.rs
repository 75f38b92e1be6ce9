//! Common test utilities for peek-shield integration tests

#![allow(dead_code)]

use image::{Rgb, RgbImage};
use peek_shield::{PeekShieldResult, Rect, WindowHandle, WindowRecord, WindowSource};
use std::env;

/// A window source that always returns the same front-to-back listing
pub struct SyntheticWindows {
    windows: Vec<WindowRecord>,
}

impl SyntheticWindows {
    /// Build a source from `(rect, process name)` pairs, top-most first
    pub fn new(windows: &[(Rect, &str)]) -> Self {
        Self {
            windows: windows
                .iter()
                .enumerate()
                .map(|(z_order, (rect, name))| WindowRecord {
                    handle: WindowHandle(0x1000 + z_order as u64),
                    z_order,
                    rect: *rect,
                    owner_process_name: name.to_lowercase(),
                })
                .collect(),
        }
    }

    pub fn records(&self) -> &[WindowRecord] {
        &self.windows
    }
}

impl WindowSource for SyntheticWindows {
    fn snapshot(&self) -> PeekShieldResult<Vec<WindowRecord>> {
        Ok(self.windows.clone())
    }
}

/// High-contrast 2x2 checker pattern; any blur of it changes pixels
pub fn patterned_frame(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let v = if (x / 2 + y / 2) % 2 == 0 { 230 } else { 20 };
        Rgb([v, (x * 7 % 251) as u8, (y * 13 % 251) as u8])
    })
}

/// Whether pixel (x, y) lies inside any of `rects`
pub fn inside_any(rects: &[Rect], x: u32, y: u32) -> bool {
    let (x, y) = (x as i32, y as i32);
    rects
        .iter()
        .any(|r| x >= r.left && x < r.right && y >= r.top && y < r.bottom)
}

/// Check if integration tests should run
///
/// Tests will only run if INTEGRATION_TEST=1 environment variable is set
pub fn should_run_integration_tests() -> bool {
    env::var("INTEGRATION_TEST")
        .map(|v| v == "1")
        .unwrap_or(false)
}
