use crate::{
    PeekShieldError, PeekShieldResult,
    processes::ProcessInfo,
    window::{ForegroundWindow, WindowRecord},
};

#[derive(Debug, Clone)]
pub(crate) struct ImplWindowSource {}

impl ImplWindowSource {
    pub(crate) fn new() -> Self {
        Self {}
    }

    pub fn snapshot(&self) -> PeekShieldResult<Vec<WindowRecord>> {
        Err(PeekShieldError::Unsupported)
    }
}

pub(crate) fn cursor_position() -> PeekShieldResult<(i32, i32)> {
    Err(PeekShieldError::Unsupported)
}

pub(crate) fn foreground_window() -> PeekShieldResult<Option<ForegroundWindow>> {
    Err(PeekShieldError::Unsupported)
}

pub(crate) fn running_processes() -> PeekShieldResult<Vec<ProcessInfo>> {
    Err(PeekShieldError::Unsupported)
}
