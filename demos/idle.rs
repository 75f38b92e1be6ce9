//! Report how long the mouse has been idle, twice a second
//!
//! Usage: cargo run --example idle

use peek_shield::IdleTracker;
use std::time::{Duration, Instant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut tracker = IdleTracker::new(Instant::now());
    for _ in 0..40 {
        let idle = tracker.poll(Instant::now())?;
        println!("Idle for {}s", idle.as_secs());
        std::thread::sleep(Duration::from_millis(500));
    }
    Ok(())
}
