//! Session-less input - wheel zoom and key forwarding.

use crate::constants::TOOL_NAME;
use crate::error::ZoomPanResult;
use crate::input::dispatch::dispatch;
use crate::input::events::{KeyEvent, WheelEvent};
use crate::input::state::Gesture;
use crate::time_handler;
use crate::tool::ZoomPan;
use crate::view::ViewAccess;

impl<A: ViewAccess> ZoomPan<A> {
    /// Each wheel event zooms by `-delta_y / wheel_divisor` around the pointer.
    pub fn handle_wheel(&mut self, event: &WheelEvent) -> ZoomPanResult<()> {
        time_handler!("handle_wheel");

        let gesture = Gesture::Wheel {
            step: -event.delta_y / self.settings.wheel_divisor,
            position: event.position,
        };
        dispatch(&mut self.app, &event.target, gesture, self.settings.scroll_axis)?;
        Ok(())
    }

    /// Tag the key event with this tool and hand it to the application.
    pub fn handle_keydown(&mut self, event: &KeyEvent) {
        let mut event = event.clone();
        event.context = Some(TOOL_NAME.to_string());
        self.app.on_keydown(&event);
    }
}
