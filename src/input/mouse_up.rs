//! Release handling - close the interaction session.
//!
//! Every terminating event funnels into `end_session`, which is idempotent.

use crate::error::ZoomPanResult;
use crate::input::events::{PointerEvent, TouchEvent};
use crate::tool::ZoomPan;
use crate::view::ViewAccess;

impl<A: ViewAccess> ZoomPan<A> {
    fn end_session(&mut self) -> ZoomPanResult<()> {
        self.state.reset();
        Ok(())
    }

    pub fn handle_mouse_up(&mut self, _event: &PointerEvent) -> ZoomPanResult<()> {
        self.end_session()
    }

    /// Leaving the canvas ends the drag like a release.
    pub fn handle_mouse_out(&mut self, _event: &PointerEvent) -> ZoomPanResult<()> {
        self.end_session()
    }

    pub fn handle_touch_end(&mut self, _event: &TouchEvent) -> ZoomPanResult<()> {
        self.end_session()
    }

    pub fn handle_touch_cancel(&mut self, _event: &TouchEvent) -> ZoomPanResult<()> {
        self.end_session()
    }
}
