//! Linux pointer primitives via xdotool.
//!
//! Shells out to `xdotool`, which handles both the X11 protocol details and
//! the pointer warping semantics we need. Wayland compositors without an
//! XWayland bridge are not reachable this way.

use std::process::Command;

use tracing::debug;

use super::errors::InputError;

fn run_xdotool(args: &[&str]) -> Result<String, InputError> {
    let output = Command::new("xdotool")
        .args(args)
        .output()
        .map_err(|e| InputError::CommandFailed {
            tool: "xdotool",
            reason: format!("failed to execute: {}", e),
        })?;

    if !output.status.success() {
        return Err(InputError::CommandFailed {
            tool: "xdotool",
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Current pointer position in screen coordinates.
pub(crate) fn pointer_position() -> Result<(f64, f64), InputError> {
    // --shell prints lines like X=123 / Y=456 / SCREEN=0
    let stdout = run_xdotool(&["getmouselocation", "--shell"])?;

    let mut x = None;
    let mut y = None;
    for line in stdout.lines() {
        if let Some(value) = line.strip_prefix("X=") {
            x = value.trim().parse::<f64>().ok();
        } else if let Some(value) = line.strip_prefix("Y=") {
            y = value.trim().parse::<f64>().ok();
        }
    }

    match (x, y) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(InputError::PointerQueryFailed),
    }
}

/// Move the pointer to an absolute screen position.
pub(crate) fn move_to(x: f64, y: f64) -> Result<(), InputError> {
    let x = (x.round() as i64).to_string();
    let y = (y.round() as i64).to_string();
    run_xdotool(&["mousemove", "--sync", &x, &y])?;
    Ok(())
}

/// Issue a left click at the current pointer position.
pub(crate) fn left_click() -> Result<(), InputError> {
    debug!(event = "core.input.click_posting");
    run_xdotool(&["click", "1"])?;
    Ok(())
}
