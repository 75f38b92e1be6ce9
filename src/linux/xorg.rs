use super::procfs;
use crate::{
    PeekShieldError, PeekShieldResult,
    geometry::Rect,
    window::{ForegroundWindow, RawWindow, WindowHandle},
};
use tracing::debug;
use x11rb::{
    connection::Connection,
    protocol::xproto::{AtomEnum, ConnectionExt, MapState, Window},
    rust_connection::RustConnection,
};

#[derive(Debug, Clone)]
struct X11Atoms {
    net_client_list_stacking: u32,
    net_active_window: u32,
    net_wm_name: u32,
    net_wm_pid: u32,
    net_frame_extents: u32,
    utf8_string: u32,
}

/// A short‑lived connection to the X server used for one query.
pub(super) struct X11Session {
    conn: RustConnection,
    root: Window,
    atoms: X11Atoms,
}

impl X11Session {
    pub(super) fn connect() -> PeekShieldResult<Self> {
        let (conn, screen_num) = connect_to_x11()?;
        let root = conn.setup().roots[screen_num].root;
        let atoms = setup_atoms(&conn)?;
        Ok(Self { conn, root, atoms })
    }

    /// Viewable client windows, top‑most first.
    pub(super) fn stacked_windows(&self) -> PeekShieldResult<Vec<RawWindow>> {
        // _NET_CLIENT_LIST_STACKING is ordered bottom to top.
        let clients = get_window_list(&self.conn, self.root, self.atoms.net_client_list_stacking)
            .map_err(|e| PeekShieldError::Enumeration(e.to_string()))?;

        Ok(clients
            .into_iter()
            .rev()
            .filter(|&window| is_viewable(&self.conn, window))
            .map(|window| RawWindow {
                handle: WindowHandle(u64::from(window)),
                visible: true,
                rect: get_window_rect(&self.conn, self.root, window)
                    .map(|rect| self.frame_rect(window, rect))
                    .inspect_err(|e| debug!("No geometry for window {}: {}", window, e))
                    .ok(),
                process_name: get_process_name(&self.conn, window, self.atoms.net_wm_pid),
            })
            .collect())
    }

    /// Client rectangle widened by the window manager's decorations, if it reports them.
    fn frame_rect(&self, window: Window, client: Rect) -> Rect {
        get_frame_extents(&self.conn, window, self.atoms.net_frame_extents)
            .map_or(client, |extents| widen_by_frame_extents(client, extents))
    }

    pub(super) fn cursor_position(&self) -> PeekShieldResult<(i32, i32)> {
        let reply = self
            .conn
            .query_pointer(self.root)
            .map_err(|e| PeekShieldError::Platform(format!("Failed to query pointer: {e}")))?
            .reply()
            .map_err(|e| PeekShieldError::Platform(format!("Failed to query pointer: {e}")))?;
        Ok((i32::from(reply.root_x), i32::from(reply.root_y)))
    }

    pub(super) fn foreground_window(&self) -> PeekShieldResult<Option<ForegroundWindow>> {
        let Some(window) = get_active_window(&self.conn, self.root, self.atoms.net_active_window)?
        else {
            return Ok(None);
        };
        if window == x11rb::NONE {
            return Ok(None);
        }

        let window_title = get_window_name(&self.conn, window, &self.atoms).unwrap_or_else(|e| {
            debug!("Failed to get window title for window {}: {}", window, e);
            String::new()
        });
        let process_name = get_process_name(&self.conn, window, self.atoms.net_wm_pid)
            .inspect_err(|e| debug!("Failed to get process for window {}: {}", window, e))
            .ok();

        Ok(Some(ForegroundWindow {
            window_title,
            process_name,
        }))
    }
}

/// Connect to X11 server with proper error handling.
fn connect_to_x11() -> PeekShieldResult<(RustConnection, usize)> {
    RustConnection::connect(None).map_err(|e| {
        let error_str = e.to_string();
        if error_str.contains("DISPLAY")
            || error_str.contains("display")
            || error_str.contains("No such file or directory")
        {
            PeekShieldError::NoDisplay
        } else {
            PeekShieldError::Platform(error_str)
        }
    })
}

fn setup_atoms<C: Connection>(conn: &C) -> PeekShieldResult<X11Atoms> {
    Ok(X11Atoms {
        net_client_list_stacking: get_atom(conn, b"_NET_CLIENT_LIST_STACKING")?,
        net_active_window: get_atom(conn, b"_NET_ACTIVE_WINDOW")?,
        net_wm_name: get_atom(conn, b"_NET_WM_NAME")?,
        net_wm_pid: get_atom(conn, b"_NET_WM_PID")?,
        net_frame_extents: get_atom(conn, b"_NET_FRAME_EXTENTS")?,
        utf8_string: get_atom(conn, b"UTF8_STRING")?,
    })
}

fn get_atom<C: Connection>(conn: &C, name: &[u8]) -> PeekShieldResult<u32> {
    let cookie = conn
        .intern_atom(false, name)
        .map_err(|e| PeekShieldError::Platform(e.to_string()))?;

    let reply = cookie
        .reply()
        .map_err(|e| PeekShieldError::Platform(e.to_string()))?;

    Ok(reply.atom)
}

fn get_window_list<C: Connection>(
    conn: &C,
    root: Window,
    property: u32,
) -> PeekShieldResult<Vec<Window>> {
    let reply = conn
        .get_property(false, root, property, AtomEnum::WINDOW, 0, u32::MAX)
        .map_err(|e| PeekShieldError::Platform(format!("Failed to get client list: {e}")))?
        .reply()
        .map_err(|e| PeekShieldError::Platform(format!("Failed to get client list: {e}")))?;

    reply
        .value32()
        .map(|windows| windows.collect())
        .ok_or_else(|| PeekShieldError::Platform("Window manager publishes no client list".into()))
}

fn is_viewable<C: Connection>(conn: &C, window: Window) -> bool {
    conn.get_window_attributes(window)
        .ok()
        .and_then(|cookie| cookie.reply().ok())
        .is_some_and(|attrs| attrs.map_state == MapState::VIEWABLE)
}

/// Window rectangle in root (screen) coordinates.
fn get_window_rect<C: Connection>(
    conn: &C,
    root: Window,
    window: Window,
) -> PeekShieldResult<Rect> {
    let geometry = conn
        .get_geometry(window)
        .map_err(|e| PeekShieldError::Platform(format!("Failed to get geometry: {e}")))?
        .reply()
        .map_err(|e| PeekShieldError::Platform(format!("Failed to get geometry: {e}")))?;

    let origin = conn
        .translate_coordinates(window, root, 0, 0)
        .map_err(|e| PeekShieldError::Platform(format!("Failed to translate coordinates: {e}")))?
        .reply()
        .map_err(|e| PeekShieldError::Platform(format!("Failed to translate coordinates: {e}")))?;

    let left = i32::from(origin.dst_x);
    let top = i32::from(origin.dst_y);
    Ok(Rect::new(
        left,
        top,
        left + i32::from(geometry.width),
        top + i32::from(geometry.height),
    ))
}

/// Decoration sizes added by the window manager as `[left, right, top, bottom]`.
fn get_frame_extents<C: Connection>(
    conn: &C,
    window: Window,
    net_frame_extents: u32,
) -> Option<[u32; 4]> {
    let reply = conn
        .get_property(false, window, net_frame_extents, AtomEnum::CARDINAL, 0, 4)
        .ok()?
        .reply()
        .ok()?;
    let mut values = reply.value32()?;
    Some([values.next()?, values.next()?, values.next()?, values.next()?])
}

/// Grow a client rectangle to include its title bar and borders.
fn widen_by_frame_extents(client: Rect, [left, right, top, bottom]: [u32; 4]) -> Rect {
    let extent = |value: u32| i32::try_from(value).unwrap_or(i32::MAX);
    Rect::new(
        client.left.saturating_sub(extent(left)),
        client.top.saturating_sub(extent(top)),
        client.right.saturating_add(extent(right)),
        client.bottom.saturating_add(extent(bottom)),
    )
}

fn get_active_window<C: Connection>(
    conn: &C,
    root: Window,
    net_active_window: u32,
) -> PeekShieldResult<Option<Window>> {
    let cookie = conn
        .get_property(false, root, net_active_window, AtomEnum::WINDOW, 0, 1)
        .map_err(|e| PeekShieldError::Platform(format!("Failed to get active window: {e}")))?;

    let reply = cookie
        .reply()
        .map_err(|e| PeekShieldError::Platform(format!("Failed to get active window: {e}")))?;

    Ok(reply.value32().and_then(|mut v| v.next()))
}

fn get_window_name<C: Connection>(
    conn: &C,
    window: Window,
    atoms: &X11Atoms,
) -> PeekShieldResult<String> {
    // Try UTF‑8 first
    match try_get_property_string(conn, window, atoms.net_wm_name, atoms.utf8_string) {
        Ok(Some(title)) => Ok(title),
        _ => try_get_property_string(
            conn,
            window,
            AtomEnum::WM_NAME.into(),
            AtomEnum::STRING.into(),
        )
        .and_then(|opt| {
            opt.ok_or_else(|| PeekShieldError::Platform("No window name found".to_string()))
        }),
    }
}

fn try_get_property_string<C: Connection>(
    conn: &C,
    window: Window,
    property: u32,
    property_type: u32,
) -> PeekShieldResult<Option<String>> {
    let cookie = conn
        .get_property(false, window, property, property_type, 0, u32::MAX)
        .map_err(|e| PeekShieldError::Platform(format!("Failed to get property: {e}")))?;

    let reply = cookie
        .reply()
        .map_err(|e| PeekShieldError::Platform(format!("Failed to get property: {e}")))?;

    if reply.value_len > 0 {
        Ok(Some(String::from_utf8_lossy(&reply.value).into_owned()))
    } else {
        Ok(None)
    }
}

/// Owning process name via `_NET_WM_PID`.
fn get_process_name<C: Connection>(
    conn: &C,
    window: Window,
    net_wm_pid: u32,
) -> PeekShieldResult<String> {
    let reply = conn
        .get_property(false, window, net_wm_pid, AtomEnum::CARDINAL, 0, 1)
        .map_err(|e| PeekShieldError::Platform(format!("Failed to get PID: {e}")))?
        .reply()
        .map_err(|e| PeekShieldError::Platform(format!("Failed to get PID: {e}")))?;

    let pid = reply
        .value32()
        .and_then(|mut v| v.next())
        .ok_or_else(|| PeekShieldError::Platform(format!("No PID found for window {window}")))?;

    procfs::process_name(pid)
}
