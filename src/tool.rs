//! The zoom/pan tool: owns the gesture session and the view-access handle.
//!
//! Handlers for each event kind live in the `input` submodules; this module
//! holds the struct, lifecycle hooks, event routing and the help descriptor.

use crate::constants::TOOL_NAME;
use crate::error::ZoomPanResult;
use crate::input::{GestureState, InputEvent};
use crate::settings::ZoomPanSettings;
use crate::view::ViewAccess;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Gesture-driven pan, zoom and slice-scroll controller.
///
/// Events must be delivered in arrival order, one at a time; each handler
/// runs to completion and applies at most one mutation.
pub struct ZoomPan<A: ViewAccess> {
    pub(crate) app: A,
    pub(crate) state: GestureState,
    pub(crate) settings: ZoomPanSettings,
}

impl<A: ViewAccess> ZoomPan<A> {
    pub fn new(app: A) -> Self {
        Self::with_settings(app, ZoomPanSettings::default())
    }

    pub fn with_settings(app: A, settings: ZoomPanSettings) -> Self {
        Self {
            app,
            state: GestureState::Idle,
            settings,
        }
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }

    /// Give back the view-access handle
    pub fn into_inner(self) -> A {
        self.app
    }

    /// Current interaction session
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn settings(&self) -> &ZoomPanSettings {
        &self.settings
    }

    /// Initialise the tool. Nothing to do: sessions start from Idle.
    pub fn init(&mut self) {}

    /// Enable or disable the tool. Enablement is owned by the tool selector.
    pub fn activate(&mut self, enabled: bool) {
        trace!("{TOOL_NAME}: activate({enabled})");
    }

    /// Route a normalized event to its handler.
    pub fn handle_event(&mut self, event: &InputEvent) -> ZoomPanResult<()> {
        match event {
            InputEvent::MouseDown(e) => self.handle_mouse_down(e),
            InputEvent::MouseMove(e) => self.handle_mouse_move(e),
            InputEvent::MouseUp(e) => self.handle_mouse_up(e),
            InputEvent::MouseOut(e) => self.handle_mouse_out(e),
            InputEvent::TouchStart(e) => self.handle_touch_start(e),
            InputEvent::TouchMove(e) => self.handle_touch_move(e),
            InputEvent::TouchEnd(e) => self.handle_touch_end(e),
            InputEvent::TouchCancel(e) => self.handle_touch_cancel(e),
            InputEvent::Wheel(e) => self.handle_wheel(e),
            InputEvent::KeyDown(e) => {
                self.handle_keydown(e);
                Ok(())
            }
        }
    }

    /// Help keys describing the tool's triggers.
    pub fn help() -> ToolHelp {
        ToolHelp::for_tool(TOOL_NAME)
    }
}

/// i18n keys for the user-facing description of the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolHelp {
    pub title: String,
    pub brief: String,
    pub mouse: MouseHelp,
    pub touch: TouchHelp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseHelp {
    pub mouse_wheel: String,
    pub mouse_drag: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchHelp {
    pub twotouch_pinch: String,
    pub touch_drag: String,
}

impl ToolHelp {
    fn for_tool(name: &str) -> Self {
        let key = |suffix: &str| format!("tool.{name}.{suffix}");
        Self {
            title: key("name"),
            brief: key("brief"),
            mouse: MouseHelp {
                mouse_wheel: key("mouse_wheel"),
                mouse_drag: key("mouse_drag"),
            },
            touch: TouchHelp {
                twotouch_pinch: key("twotouch_pinch"),
                touch_drag: key("touch_drag"),
            },
        }
    }
}
