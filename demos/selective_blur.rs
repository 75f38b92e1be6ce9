//! Blur the blacklisted window in a saved screenshot
//!
//! The screenshot must have been taken of the current desktop, with its
//! top-left pixel at the top-left corner of the primary screen.
//!
//! Usage: cargo run --example selective_blur -- <screenshot.png> <out.png> <app.exe> [app.exe ...]

use peek_shield::{Blacklist, PeekShieldError, WindowDirectory, selective_blur};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        eprintln!("usage: selective_blur <screenshot> <out> <app> [app ...]");
        std::process::exit(2);
    };
    let blacklist = Blacklist::new(args);

    let mut frame = image::open(&input)
        .map_err(|e| PeekShieldError::Capture(format!("{input}: {e}")))?
        .to_rgb8();
    let blurred = selective_blur(&mut frame, &WindowDirectory::new(), &blacklist, 8)?;

    if blurred.is_empty() {
        println!("Nothing to blur");
    } else {
        println!(
            "Blurred {} px in {} rectangle(s)",
            blurred.area(),
            blurred.len()
        );
    }
    frame.save(&output)?;
    Ok(())
}
