//! Press handling - open an interaction session.

use crate::error::ZoomPanResult;
use crate::geometry::Point2D;
use crate::input::events::{PointerEvent, TouchEvent};
use crate::tool::ZoomPan;
use crate::view::ViewAccess;
use tracing::trace;

impl<A: ViewAccess> ZoomPan<A> {
    pub fn handle_mouse_down(&mut self, event: &PointerEvent) -> ZoomPanResult<()> {
        self.state.begin_single(event.position);
        Ok(())
    }

    pub fn handle_two_touch_down(&mut self, first: Point2D, second: Point2D) -> ZoomPanResult<()> {
        self.state.begin_two(first, second);
        Ok(())
    }

    /// One contact opens a drag session, two open a pinch/scroll session.
    /// Any other count binds no behavior.
    pub fn handle_touch_start(&mut self, event: &TouchEvent) -> ZoomPanResult<()> {
        match event.touches.as_slice() {
            [only] => self.state.begin_single(*only),
            [first, second] => return self.handle_two_touch_down(*first, *second),
            touches => trace!("touch start with {} contacts ignored", touches.len()),
        }
        Ok(())
    }
}
