//! End-to-end tests of the selective blur pipeline on synthetic desktops.

mod util;

use peek_shield::{
    Blacklist, OcclusionResult, Rect, apply_blur, compute_visible, resolve, selective_blur,
    selective_blur_with_snapshot,
};
use util::*;

const WIDTH: u32 = 160;
const HEIGHT: u32 = 120;

fn screen() -> Rect {
    Rect::from_size(WIDTH, HEIGHT)
}

#[test]
fn test_unoccluded_blacklisted_window_below_normal_window() {
    let windows = SyntheticWindows::new(&[
        (Rect::new(0, 0, 50, 40), "explorer.exe"),
        (Rect::new(60, 50, 150, 110), "WeChat.exe"),
    ]);
    let blacklist = Blacklist::new(["WeChat.exe"]);

    let target = resolve(windows.records(), &blacklist, screen()).unwrap();
    assert_eq!(target.z_order, 1);

    let visible = compute_visible(target.rect, target.z_order, windows.records());
    assert_eq!(visible.rects(), &[Rect::new(60, 50, 150, 110)]);
}

#[test]
fn test_fully_covered_window_leaves_frame_byte_identical() {
    let windows = SyntheticWindows::new(&[
        (Rect::new(0, 0, 160, 120), "code.exe"),
        (Rect::new(20, 20, 80, 80), "wechat.exe"),
    ]);
    let original = patterned_frame(WIDTH, HEIGHT);
    let mut frame = original.clone();

    let blurred = selective_blur(&mut frame, &windows, &Blacklist::new(["wechat"]), 4).unwrap();

    assert!(blurred.is_empty());
    assert_eq!(frame.as_raw(), original.as_raw());
}

#[test]
fn test_partial_occlusion_blurs_exactly_the_visible_strips() {
    let windows = SyntheticWindows::new(&[
        (Rect::new(40, 40, 140, 140), "notepad.exe"),
        (Rect::new(0, 0, 100, 100), "keepass.exe"),
    ]);
    let original = patterned_frame(WIDTH, HEIGHT);
    let mut frame = original.clone();

    let blurred = selective_blur(&mut frame, &windows, &Blacklist::new(["KeePass"]), 2).unwrap();

    assert_eq!(
        blurred.rects(),
        &[Rect::new(0, 0, 100, 40), Rect::new(0, 40, 40, 100)]
    );
    assert_eq!(blurred.area(), 6_400);

    let mut changed = 0;
    for (x, y, pixel) in frame.enumerate_pixels() {
        if inside_any(blurred.rects(), x, y) {
            if pixel != original.get_pixel(x, y) {
                changed += 1;
            }
        } else {
            assert_eq!(pixel, original.get_pixel(x, y), "pixel ({x}, {y}) outside changed");
        }
    }
    assert!(changed > 0);
}

#[test]
fn test_covers_below_target_do_not_occlude() {
    let windows = SyntheticWindows::new(&[
        (Rect::new(10, 10, 70, 70), "signal.exe"),
        (Rect::new(0, 0, 160, 120), "explorer.exe"),
    ]);
    let mut frame = patterned_frame(WIDTH, HEIGHT);
    let blurred = selective_blur(&mut frame, &windows, &Blacklist::new(["signal"]), 1).unwrap();
    assert_eq!(blurred.rects(), &[Rect::new(10, 10, 70, 70)]);
}

#[test]
fn test_window_partly_off_screen_is_clamped() {
    let windows = SyntheticWindows::new(&[(Rect::new(-40, 90, 60, 300), "wechat.exe")]);
    let mut frame = patterned_frame(WIDTH, HEIGHT);
    let blurred = selective_blur(&mut frame, &windows, &Blacklist::new(["wechat"]), 2).unwrap();
    assert_eq!(blurred.rects(), &[Rect::new(0, 90, 60, 120)]);
}

#[test]
fn test_only_top_most_blacklisted_window_is_blurred() {
    let windows = SyntheticWindows::new(&[
        (Rect::new(0, 0, 40, 40), "wechat.exe"),
        (Rect::new(100, 60, 150, 110), "telegram.exe"),
    ]);
    let original = patterned_frame(WIDTH, HEIGHT);
    let mut frame = original.clone();
    let blacklist = Blacklist::new(["wechat.exe", "telegram.exe"]);

    let blurred = selective_blur_with_snapshot(&mut frame, windows.records(), &blacklist, 2);

    assert_eq!(blurred.rects(), &[Rect::new(0, 0, 40, 40)]);
    assert_eq!(frame.get_pixel(120, 80), original.get_pixel(120, 80));
}

#[test]
fn test_no_blacklisted_window_leaves_frame() {
    let windows = SyntheticWindows::new(&[(Rect::new(0, 0, 160, 120), "code.exe")]);
    let original = patterned_frame(WIDTH, HEIGHT);
    let mut frame = original.clone();
    let blurred = selective_blur(&mut frame, &windows, &Blacklist::new(["wechat"]), 3).unwrap();
    assert!(blurred.is_empty());
    assert_eq!(frame, original);
}

#[test]
fn test_apply_blur_skips_rects_outside_frame() {
    let original = patterned_frame(WIDTH, HEIGHT);
    let mut frame = original.clone();
    let outside = vec![Rect::new(200, 200, 260, 260), Rect::new(-50, -50, -10, -10)];
    apply_blur(&mut frame, &OcclusionResult::from(outside), 3);
    assert_eq!(frame, original);
}
