//! Move handling - pan with one contact, pinch or scroll with two.
//!
//! Moves arrive at input rate, so both handlers exit early when the
//! session produces no gesture.

use crate::error::ZoomPanResult;
use crate::input::dispatch::dispatch;
use crate::input::events::{PointerEvent, TouchEvent};
use crate::time_handler;
use crate::tool::ZoomPan;
use crate::view::ViewAccess;
use tracing::trace;

impl<A: ViewAccess> ZoomPan<A> {
    pub fn handle_mouse_move(&mut self, event: &PointerEvent) -> ZoomPanResult<()> {
        time_handler!("handle_mouse_move");

        let Some(gesture) = self.state.single_move(event.position) else {
            return Ok(());
        };
        dispatch(&mut self.app, &event.target, gesture, self.settings.scroll_axis)?;
        Ok(())
    }

    pub fn handle_two_touch_move(&mut self, event: &TouchEvent) -> ZoomPanResult<()> {
        time_handler!("handle_two_touch_move");

        let Some((first, second)) = event.pair() else {
            return Ok(());
        };
        let Some(gesture) = self.state.two_move(first, second, &self.settings) else {
            return Ok(());
        };
        dispatch(&mut self.app, &event.target, gesture, self.settings.scroll_axis)?;
        Ok(())
    }

    pub fn handle_touch_move(&mut self, event: &TouchEvent) -> ZoomPanResult<()> {
        match event.touches.as_slice() {
            [only] => self.handle_mouse_move(&PointerEvent {
                position: *only,
                target: event.target.clone(),
            }),
            [_, _] => self.handle_two_touch_move(event),
            touches => {
                trace!("touch move with {} contacts ignored", touches.len());
                Ok(())
            }
        }
    }
}
