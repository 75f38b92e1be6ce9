//! Print the current window stack, top-most first
//!
//! Usage: cargo run --example snapshot [blacklisted.exe ...]

use peek_shield::{Blacklist, Rect, compute_visible, foreground_window, resolve, snapshot_windows};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let blacklist = Blacklist::new(std::env::args().skip(1));
    let snapshot = snapshot_windows()?;

    println!("{} visible window(s):", snapshot.len());
    for window in &snapshot {
        let marker = if blacklist.matches(&window.owner_process_name) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} #{:<3} {:<28} {:?}",
            window.z_order, window.owner_process_name, window.rect
        );
    }

    if let Some(focused) = foreground_window()? {
        println!();
        println!(
            "Foreground: {} ({})",
            focused.window_title,
            focused.process_name.as_deref().unwrap_or("unknown")
        );
    }

    // Without a captured frame, treat the union of all windows as the screen.
    let screen = snapshot.iter().fold(Rect::new(0, 0, 0, 0), |acc, w| {
        Rect::new(
            acc.left.min(w.rect.left),
            acc.top.min(w.rect.top),
            acc.right.max(w.rect.right),
            acc.bottom.max(w.rect.bottom),
        )
    });
    if let Some(target) = resolve(&snapshot, &blacklist, screen) {
        let visible = compute_visible(target.rect, target.z_order, &snapshot);
        println!();
        println!(
            "Would blur {} px of window #{} in {} rectangle(s): {:?}",
            visible.area(),
            target.z_order,
            visible.len(),
            visible.rects()
        );
    }

    Ok(())
}
