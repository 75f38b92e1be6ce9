use super::{procfs, xorg::X11Session};
use crate::{
    PeekShieldResult,
    processes::ProcessInfo,
    window::{ForegroundWindow, WindowRecord, build_snapshot},
};

#[derive(Debug, Clone)]
pub(crate) struct ImplWindowSource {}

impl ImplWindowSource {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

impl ImplWindowSource {
    /// Each snapshot opens its own X11 connection so concurrent captures
    /// never share protocol state.
    pub fn snapshot(&self) -> PeekShieldResult<Vec<WindowRecord>> {
        let session = X11Session::connect()?;
        Ok(build_snapshot(session.stacked_windows()?))
    }
}

pub(crate) fn cursor_position() -> PeekShieldResult<(i32, i32)> {
    X11Session::connect()?.cursor_position()
}

pub(crate) fn foreground_window() -> PeekShieldResult<Option<ForegroundWindow>> {
    X11Session::connect()?.foreground_window()
}

pub(crate) fn running_processes() -> PeekShieldResult<Vec<ProcessInfo>> {
    procfs::running_processes()
}
