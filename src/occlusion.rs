use crate::{
    geometry::{Rect, subtract},
    window::WindowRecord,
};
use tracing::debug;

/// Visible part of a target window as disjoint rectangles.
///
/// An empty result means the window is fully covered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OcclusionResult {
    rects: Vec<Rect>,
}

impl OcclusionResult {
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Total visible area in pixels.
    pub fn area(&self) -> i64 {
        self.rects.iter().map(Rect::area).sum()
    }
}

impl From<Vec<Rect>> for OcclusionResult {
    fn from(rects: Vec<Rect>) -> Self {
        Self { rects }
    }
}

impl<'a> IntoIterator for &'a OcclusionResult {
    type Item = &'a Rect;
    type IntoIter = std::slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}

/// Compute which part of `target` is not hidden by windows stacked above it.
pub fn compute_visible(
    target: Rect,
    target_z_order: usize,
    snapshot: &[WindowRecord],
) -> OcclusionResult {
    let covers: Vec<Rect> = snapshot
        .iter()
        .filter(|window| window.z_order < target_z_order)
        .filter_map(|window| window.rect.intersect(&target))
        .collect();

    let visible = subtract(target, &covers);
    debug!(
        "{} covering window(s) leave {} visible rectangle(s) of {:?}",
        covers.len(),
        visible.len(),
        target
    );
    OcclusionResult::from(visible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowHandle;

    fn window(z_order: usize, rect: Rect) -> WindowRecord {
        WindowRecord {
            handle: WindowHandle(z_order as u64),
            z_order,
            rect,
            owner_process_name: format!("app{z_order}.exe"),
        }
    }

    #[test]
    fn test_unoccluded_target_is_fully_visible() {
        let target = Rect::new(100, 100, 400, 300);
        let snapshot = vec![window(0, Rect::new(500, 0, 800, 200)), window(1, target)];
        let visible = compute_visible(target, 1, &snapshot);
        assert_eq!(visible.rects(), &[target]);
        assert_eq!(visible.area(), target.area());
    }

    #[test]
    fn test_windows_below_target_are_ignored() {
        let target = Rect::new(0, 0, 100, 100);
        let snapshot = vec![window(0, target), window(1, Rect::new(0, 0, 1000, 1000))];
        assert_eq!(compute_visible(target, 0, &snapshot).rects(), &[target]);
    }

    #[test]
    fn test_partial_occlusion() {
        let target = Rect::new(0, 0, 100, 100);
        let snapshot = vec![window(0, Rect::new(40, 40, 140, 140)), window(1, target)];
        let visible = compute_visible(target, 1, &snapshot);
        assert_eq!(
            visible.rects(),
            &[Rect::new(0, 0, 100, 40), Rect::new(0, 40, 40, 100)]
        );
        assert_eq!(visible.area(), 6_400);
    }

    #[test]
    fn test_fully_occluded_target() {
        let target = Rect::new(10, 10, 90, 90);
        let snapshot = vec![
            window(0, Rect::new(0, 0, 50, 100)),
            window(1, Rect::new(50, 0, 100, 100)),
            window(2, target),
        ];
        let visible = compute_visible(target, 2, &snapshot);
        assert!(visible.is_empty());
        assert_eq!(visible.area(), 0);
    }

    #[test]
    fn test_result_stays_inside_target() {
        let target = Rect::new(0, 0, 200, 120);
        let snapshot = vec![
            window(0, Rect::new(-20, 30, 60, 80)),
            window(1, Rect::new(150, -10, 260, 40)),
            window(2, Rect::new(90, 100, 110, 400)),
            window(3, target),
        ];
        let visible = compute_visible(target, 3, &snapshot);
        assert!(visible.rects().iter().all(|r| target.contains(r)));
        let covered = 60 * 50 + 50 * 40 + 20 * 20;
        assert_eq!(visible.area(), target.area() - covered);
    }
}
