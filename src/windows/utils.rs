use crate::{PeekShieldError, PeekShieldResult, geometry::Rect};
use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;
use windows_sys::Win32::{
    Foundation::{CloseHandle, HWND, LPARAM, POINT, RECT},
    System::{
        ProcessStatus::EnumProcesses,
        RemoteDesktop::ProcessIdToSessionId,
        Threading::{
            OpenProcess, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION,
            QueryFullProcessImageNameW,
        },
    },
    UI::WindowsAndMessaging::{
        EnumWindows, GetCursorPos, GetForegroundWindow, GetWindowRect, GetWindowTextW,
        GetWindowThreadProcessId, IsWindow, IsWindowVisible,
    },
};

/// Get the handle of the currently focused window
pub fn get_foreground_window() -> Option<HWND> {
    let hwnd = unsafe { GetForegroundWindow() };
    if hwnd.is_null() || unsafe { IsWindow(hwnd) } == 0 {
        None
    } else {
        Some(hwnd)
    }
}

unsafe extern "system" fn collect_window(hwnd: HWND, lparam: LPARAM) -> i32 {
    let handles = unsafe { &mut *(lparam as *mut Vec<HWND>) };
    handles.push(hwnd);
    1
}

/// All top-level windows in Z order, top-most first.
pub fn enum_windows() -> PeekShieldResult<Vec<HWND>> {
    let mut handles: Vec<HWND> = Vec::new();
    let lparam = &mut handles as *mut Vec<HWND> as LPARAM;
    let ok = unsafe { EnumWindows(Some(collect_window), lparam) };
    if ok == 0 {
        return Err(PeekShieldError::Enumeration(
            std::io::Error::last_os_error().to_string(),
        ));
    }
    Ok(handles)
}

/// # Safety
/// The caller must ensure that the HWND came from a live enumeration.
pub unsafe fn is_window_visible(hwnd: HWND) -> bool {
    unsafe { IsWindowVisible(hwnd) != 0 }
}

/// Get the bounding rectangle of a window in screen coordinates
///
/// # Safety
/// The caller must ensure that the HWND came from a live enumeration.
pub unsafe fn get_window_rect(hwnd: HWND) -> PeekShieldResult<Rect> {
    let mut rect = RECT {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };
    if unsafe { GetWindowRect(hwnd, &mut rect) } == 0 {
        return Err(PeekShieldError::Platform(
            "Failed to get window rectangle".to_string(),
        ));
    }
    Ok(Rect::new(rect.left, rect.top, rect.right, rect.bottom))
}

/// Get the title of a window
///
/// # Safety
/// This function is unsafe because it dereferences a raw pointer (HWND).
/// The caller must ensure that the HWND is valid.
pub unsafe fn get_window_title(hwnd: HWND) -> PeekShieldResult<String> {
    let mut buffer = [0u16; 512];
    let len = unsafe { GetWindowTextW(hwnd, buffer.as_mut_ptr(), buffer.len() as i32) };

    if len == 0 {
        return Ok(String::new());
    }

    let title = OsString::from_wide(&buffer[..len as usize])
        .to_string_lossy()
        .into_owned();

    Ok(title)
}

/// Get the process ID of a window
///
/// # Safety
/// This function is unsafe because it dereferences a raw pointer (HWND).
/// The caller must ensure that the HWND is valid.
pub unsafe fn get_window_process_id(hwnd: HWND) -> PeekShieldResult<u32> {
    let mut process_id = 0u32;
    unsafe {
        GetWindowThreadProcessId(hwnd, &mut process_id);
    }

    if process_id == 0 {
        return Err(PeekShieldError::Platform(
            "Failed to get process ID".to_string(),
        ));
    }

    Ok(process_id)
}

/// Get the executable name (without directory) of a process
pub fn get_process_name(process_id: u32) -> PeekShieldResult<String> {
    let process_handle = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, 0, process_id) };

    if process_handle.is_null() {
        return Err(PeekShieldError::ProcessLookup {
            pid: process_id,
            reason: std::io::Error::last_os_error().to_string(),
        });
    }

    let mut buffer = [0u16; 1024];
    let mut len = buffer.len() as u32;
    let ok = unsafe {
        QueryFullProcessImageNameW(
            process_handle,
            PROCESS_NAME_WIN32,
            buffer.as_mut_ptr(),
            &mut len,
        )
    };

    // Close the process handle
    unsafe {
        CloseHandle(process_handle);
    }

    if ok == 0 || len == 0 {
        return Err(PeekShieldError::ProcessLookup {
            pid: process_id,
            reason: "Failed to get image name".to_string(),
        });
    }

    let path = OsString::from_wide(&buffer[..len as usize])
        .to_string_lossy()
        .into_owned();
    let name = path.rsplit('\\').next().unwrap_or(&path).to_owned();

    Ok(name)
}

/// Get window information (title and process name) for a given window handle
///
/// # Safety
/// This function is unsafe because it calls unsafe functions that dereference raw pointers.
/// The caller must ensure that the HWND is valid.
pub unsafe fn get_window_info(hwnd: HWND) -> PeekShieldResult<(String, Option<String>)> {
    let title = unsafe { get_window_title(hwnd) }.unwrap_or_else(|_| String::new());
    let process_id = unsafe { get_window_process_id(hwnd) }?;
    let process_name = get_process_name(process_id).ok();

    Ok((title, process_name))
}

pub fn get_cursor_pos() -> PeekShieldResult<(i32, i32)> {
    let mut point = POINT { x: 0, y: 0 };
    if unsafe { GetCursorPos(&mut point) } == 0 {
        return Err(PeekShieldError::Platform(
            "Failed to get cursor position".to_string(),
        ));
    }
    Ok((point.x, point.y))
}

/// IDs of every process on the system
pub fn get_process_ids() -> PeekShieldResult<Vec<u32>> {
    let mut ids = vec![0u32; 1024];
    loop {
        let capacity = (ids.len() * size_of::<u32>()) as u32;
        let mut needed = 0u32;
        if unsafe { EnumProcesses(ids.as_mut_ptr(), capacity, &mut needed) } == 0 {
            return Err(PeekShieldError::Platform(
                "Failed to enumerate processes".to_string(),
            ));
        }
        // A full buffer may have been truncated.
        if needed < capacity {
            ids.truncate(needed as usize / size_of::<u32>());
            return Ok(ids);
        }
        ids.resize(ids.len() * 2, 0);
    }
}

/// Session 0 hosts services and system accounts
pub fn is_service_session(process_id: u32) -> bool {
    let mut session_id = 0u32;
    let ok = unsafe { ProcessIdToSessionId(process_id, &mut session_id) };
    ok == 0 || session_id == 0
}
