use crate::{
    blacklist::Blacklist,
    geometry::Rect,
    window::{WindowHandle, WindowRecord},
};
use tracing::debug;

/// The blacklisted window chosen for protection in one capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub z_order: usize,
    pub handle: WindowHandle,
    /// Window rectangle clamped to the screen.
    pub rect: Rect,
}

/// Find the top‑most blacklisted window that is at least partly on screen.
///
/// Only the first match is returned; a second blacklisted window further back
/// is not protected by the same capture. `None` means there is nothing to blur.
pub fn resolve(snapshot: &[WindowRecord], blacklist: &Blacklist, screen: Rect) -> Option<Target> {
    if blacklist.is_empty() {
        return None;
    }

    let target = snapshot.iter().find_map(|window| {
        if !blacklist.matches(&window.owner_process_name) {
            return None;
        }
        let rect = window.rect.intersect(&screen);
        if rect.is_none() {
            debug!(
                "Blacklisted window {:?} ({}) is off screen",
                window.handle, window.owner_process_name
            );
        }
        rect.map(|rect| Target {
            z_order: window.z_order,
            handle: window.handle,
            rect,
        })
    });

    if let Some(target) = &target {
        debug!(
            "Resolved blacklisted window {:?} at z-order {} with {:?}",
            target.handle, target.z_order, target.rect
        );
    }
    target
}
