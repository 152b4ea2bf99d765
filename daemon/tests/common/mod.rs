// Common test helpers for handvol daemon tests
//
// This module provides utilities for:
// - Building landmark frames in known gesture configurations
// - User interaction for detector-dependent tests
// - Test output formatting

use shared::landmark::{HandFrame, LandmarkPoint, FINGER_BASES, FINGER_TIPS};
use std::io::{self, Write};

pub fn point(id: u8, x: f64, y: f64) -> LandmarkPoint {
    LandmarkPoint { id, x, y }
}

/// A hand with all four non-thumb fingers extended (tips above bases)
/// and a thumb–index pinch of the given distance along the x axis.
pub fn open_hand_frame(pinch_distance: f64) -> HandFrame {
    let mut points = Vec::new();
    for &tip in FINGER_TIPS.iter() {
        points.push(point(tip, 100.0, 100.0));
    }
    for &base in FINGER_BASES.iter() {
        points.push(point(base, 100.0, 150.0));
    }
    points.push(point(4, 100.0 - pinch_distance, 100.0));
    HandFrame::new(points)
}

/// A closed fist: every tip at or below its base joint, pinch collapsed.
pub fn fist_frame() -> HandFrame {
    let mut points = Vec::new();
    for &tip in FINGER_TIPS.iter() {
        points.push(point(tip, 100.0, 200.0));
    }
    for &base in FINGER_BASES.iter() {
        points.push(point(base, 100.0, 150.0));
    }
    points.push(point(4, 100.0, 200.0));
    HandFrame::new(points)
}

/// Serialize a frame the way the detector streams it: one JSON object
/// per line.
pub fn frame_line(frame: &HandFrame) -> String {
    format!("{}\n", serde_json::to_string(frame).unwrap())
}

/// Ask user to confirm an action
#[allow(dead_code)]
pub fn confirm_action(prompt: &str) -> bool {
    print!(
        "\n[CONFIRM] {}\nPress 'y' to confirm, any other key to skip: ",
        prompt
    );
    io::stdout().flush().unwrap();

    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();

    input.trim().to_lowercase() == "y"
}

/// Print a section header
#[allow(dead_code)]
pub fn print_header(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}", "=".repeat(60));
}

/// Print an info message
#[allow(dead_code)]
pub fn print_info(message: &str) {
    println!("\nℹ {}", message);
}
