//! macOS pointer primitives via CoreGraphics events.

use std::thread;
use std::time::Duration;

use core_graphics::event::{CGEvent, CGEventTapLocation, CGEventType, CGMouseButton};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use core_graphics::geometry::CGPoint;
use tracing::debug;

use super::errors::InputError;

/// Delay between mouse down and mouse up events
const MOUSE_EVENT_DELAY: Duration = Duration::from_millis(10);

fn event_source() -> Result<CGEventSource, InputError> {
    CGEventSource::new(CGEventSourceStateID::HIDSystemState)
        .map_err(|()| InputError::EventSourceFailed)
}

/// Current pointer position in screen coordinates.
pub(crate) fn pointer_position() -> Result<(f64, f64), InputError> {
    let source = event_source()?;
    let event = CGEvent::new(source).map_err(|()| InputError::PointerQueryFailed)?;
    let location = event.location();
    Ok((location.x, location.y))
}

/// Move the pointer to an absolute screen position.
pub(crate) fn move_to(x: f64, y: f64) -> Result<(), InputError> {
    let source = event_source()?;
    let event = CGEvent::new_mouse_event(
        source,
        CGEventType::MouseMoved,
        CGPoint::new(x, y),
        CGMouseButton::Left,
    )
    .map_err(|()| InputError::MouseEventFailed { x, y })?;

    event.post(CGEventTapLocation::HID);
    Ok(())
}

/// Issue a left click at the current pointer position.
pub(crate) fn left_click() -> Result<(), InputError> {
    let (x, y) = pointer_position()?;
    let point = CGPoint::new(x, y);

    let source = event_source()?;
    let mouse_down = CGEvent::new_mouse_event(
        source.clone(),
        CGEventType::LeftMouseDown,
        point,
        CGMouseButton::Left,
    )
    .map_err(|()| InputError::MouseEventFailed { x, y })?;

    let mouse_up =
        CGEvent::new_mouse_event(source, CGEventType::LeftMouseUp, point, CGMouseButton::Left)
            .map_err(|()| InputError::MouseEventFailed { x, y })?;

    debug!(event = "core.input.click_posting", x, y);
    mouse_down.post(CGEventTapLocation::HID);
    thread::sleep(MOUSE_EVENT_DELAY);
    mouse_up.post(CGEventTapLocation::HID);

    Ok(())
}
