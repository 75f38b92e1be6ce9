mod blacklist;
mod capture;
mod config;
mod error;
mod geometry;
mod idle;
mod occlusion;
mod processes;
mod render;
mod resolver;
mod window;
mod window_directory;

#[cfg(target_os = "macos")]
#[path = "macos/mod.rs"]
pub(crate) mod platform;

#[cfg(target_os = "linux")]
#[path = "linux/mod.rs"]
pub(crate) mod platform;
#[cfg(target_os = "windows")]
#[path = "windows/mod.rs"]
pub(crate) mod platform;

pub use blacklist::Blacklist;
pub use capture::{Capture, Capturer, FrameGrabber, selective_blur, selective_blur_with_snapshot};
pub use config::{CaptureConfig, CaptureMode, MAX_BLUR_RADIUS};
pub use error::{PeekShieldError, PeekShieldResult};
pub use geometry::{Rect, subtract};
pub use idle::{DEFAULT_IDLE_THRESHOLD, IdleTracker};
pub use occlusion::{OcclusionResult, compute_visible};
pub use processes::{
    ProcessInfo, SYSTEM_PROCESS_NAMES, running_processes, running_user_processes, user_processes,
};
pub use render::{apply_blur, blur_frame};
pub use resolver::{Target, resolve};
pub use window::{
    ForegroundWindow, RawWindow, WindowHandle, WindowRecord, WindowSource, build_snapshot,
};
pub use window_directory::WindowDirectory;

/// The window that currently has keyboard focus, if any.
pub fn foreground_window() -> PeekShieldResult<Option<ForegroundWindow>> {
    platform::foreground_window()
}

/// Take a front-to-back snapshot of the windows on this desktop.
pub fn snapshot_windows() -> PeekShieldResult<Vec<WindowRecord>> {
    WindowDirectory::new().snapshot()
}
