//! Levels command
//!
//! Usage: wglog levels

use wg_log::Severity;

/// Print `number tag name` for each level, most severe first
pub fn execute() -> Result<(), Box<dyn std::error::Error>> {
    for level in Severity::ALL {
        println!("{} {} {}", level.number(), level.tag(), level);
    }
    Ok(())
}
