use super::utils;
use crate::{
    PeekShieldResult,
    processes::ProcessInfo,
    window::{ForegroundWindow, RawWindow, WindowHandle, WindowRecord, build_snapshot},
};

#[derive(Debug, Clone)]
pub(crate) struct ImplWindowSource {}

impl ImplWindowSource {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

impl ImplWindowSource {
    pub fn snapshot(&self) -> PeekShieldResult<Vec<WindowRecord>> {
        let handles = utils::enum_windows()?;

        let raw_windows = handles
            .into_iter()
            // SAFETY: every handle comes from the enumeration above.
            .filter(|&hwnd| unsafe { utils::is_window_visible(hwnd) })
            .map(|hwnd| RawWindow {
                handle: WindowHandle(hwnd as usize as u64),
                visible: true,
                rect: unsafe { utils::get_window_rect(hwnd) }.ok(),
                process_name: unsafe { utils::get_window_process_id(hwnd) }
                    .and_then(utils::get_process_name),
            });

        Ok(build_snapshot(raw_windows))
    }
}

pub(crate) fn cursor_position() -> PeekShieldResult<(i32, i32)> {
    utils::get_cursor_pos()
}

pub(crate) fn foreground_window() -> PeekShieldResult<Option<ForegroundWindow>> {
    let Some(hwnd) = utils::get_foreground_window() else {
        return Ok(None);
    };
    let (window_title, process_name) = unsafe { utils::get_window_info(hwnd) }?;
    Ok(Some(ForegroundWindow {
        window_title,
        process_name,
    }))
}

pub(crate) fn running_processes() -> PeekShieldResult<Vec<ProcessInfo>> {
    Ok(utils::get_process_ids()?
        .into_iter()
        .filter(|&pid| pid != 0)
        .filter_map(|pid| {
            utils::get_process_name(pid).ok().map(|name| ProcessInfo {
                pid,
                name,
                system_account: utils::is_service_session(pid),
            })
        })
        .collect())
}
