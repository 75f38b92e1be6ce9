//! Shared window types for the cross‑platform window directory.
use crate::{PeekShieldResult, geometry::Rect};
use tracing::debug;

/// Opaque platform window identifier (HWND, X11 window id, ...).
///
/// Only ever compared, never dereferenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub u64);

/// One visible on‑screen window taken from a point‑in‑time snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub handle: WindowHandle,
    /// Position in the front‑to‑back snapshot, 0 is the top‑most window.
    pub z_order: usize,
    /// Bounding rectangle in screen coordinates.
    pub rect: Rect,
    /// Lower‑cased executable name without its directory (e.g. "wechat.exe").
    pub owner_process_name: String,
}

/// Something that can enumerate the windows currently on screen.
pub trait WindowSource {
    /// Visible windows ordered front to back.
    ///
    /// Fails only when enumeration as a whole fails; windows whose owner cannot
    /// be resolved are left out of the snapshot.
    fn snapshot(&self) -> PeekShieldResult<Vec<WindowRecord>>;
}

impl<T: WindowSource + ?Sized> WindowSource for &T {
    fn snapshot(&self) -> PeekShieldResult<Vec<WindowRecord>> {
        (**self).snapshot()
    }
}

/// Window as reported by the platform, before filtering.
#[derive(Debug)]
pub struct RawWindow {
    pub handle: WindowHandle,
    pub visible: bool,
    pub rect: Option<Rect>,
    pub process_name: PeekShieldResult<String>,
}

/// Turn a front‑to‑back platform listing into a snapshot.
///
/// Invisible windows, windows without a usable rectangle and windows whose
/// process could not be looked up are dropped. Indices are assigned after
/// filtering so `z_order` always matches the position in the result.
pub fn build_snapshot<I>(raw_windows: I) -> Vec<WindowRecord>
where
    I: IntoIterator<Item = RawWindow>,
{
    let mut records = Vec::new();
    for raw in raw_windows {
        if !raw.visible {
            continue;
        }
        let Some(rect) = raw.rect.filter(|r| !r.is_empty()) else {
            continue;
        };
        let name = match raw.process_name {
            Ok(name) => name,
            Err(e) => {
                debug!("Skipping window {:?}: {}", raw.handle, e);
                continue;
            }
        };
        records.push(WindowRecord {
            handle: raw.handle,
            z_order: records.len(),
            rect,
            owner_process_name: name.to_lowercase(),
        });
    }
    records
}

/// The window that currently has keyboard focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForegroundWindow {
    pub window_title: String,
    pub process_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PeekShieldError;

    fn raw(id: u64, visible: bool, rect: Option<Rect>, name: Option<&str>) -> RawWindow {
        RawWindow {
            handle: WindowHandle(id),
            visible,
            rect,
            process_name: name.map(str::to_owned).ok_or(PeekShieldError::ProcessLookup {
                pid: id as u32,
                reason: "process exited".to_string(),
            }),
        }
    }

    #[test]
    fn test_build_snapshot_filters_and_reindexes() {
        let full = Some(Rect::new(0, 0, 100, 100));
        let snapshot = build_snapshot([
            raw(1, true, full, Some("Explorer.EXE")),
            raw(2, false, full, Some("hidden.exe")),
            raw(3, true, Some(Rect::new(10, 10, 10, 50)), Some("flat.exe")),
            raw(4, true, None, Some("norect.exe")),
            raw(5, true, full, None),
            raw(6, true, full, Some("WeChat.exe")),
        ]);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].handle, WindowHandle(1));
        assert_eq!(snapshot[0].z_order, 0);
        assert_eq!(snapshot[0].owner_process_name, "explorer.exe");
        assert_eq!(snapshot[1].handle, WindowHandle(6));
        assert_eq!(snapshot[1].z_order, 1);
        assert_eq!(snapshot[1].owner_process_name, "wechat.exe");
    }

    #[test]
    fn test_build_snapshot_empty() {
        assert!(build_snapshot(Vec::new()).is_empty());
    }
}
