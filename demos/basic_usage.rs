//! Basic logger usage example
//!
//! Demonstrates presets, the three call shapes and caller locations.
//!
//! Run with: cargo run --example basic_usage

use rust_console_logger::prelude::*;
use rust_console_logger::{info, warnln};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Console Logger - Basic Usage Example ===\n");

    // Development preset: time, colors, caller location for errors
    let logger = Logger::builder()
        .on_fatal(Arc::new(|| println!("   (fatal handler replaced, not exiting)")))
        .try_build()?;

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.fatal("This is a fatal message");

    println!("\n2. Call shapes:");
    let port = 8080;
    logger.info(port);
    info!(logger, "Server listening on port {}", port);
    warnln!(logger, "disk", 93, "% full");

    println!("\n3. Production preset, INFO and up, no colors:");
    let prod = LoggerBuilder::prod().time_layout("%Y-%m-%d %H:%M:%S").build();
    prod.debug("Debug message (hidden)");
    prod.info("Info message (visible)");
    prod.error("Error message with caller location");

    println!("\n4. Zero-configuration logger:");
    default_logger().info("Shared console logger");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
