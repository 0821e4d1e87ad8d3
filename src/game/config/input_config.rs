//! Input Configuration
//!
//! Key and mouse bindings for the placement session as a data structure, so
//! hosts can remap them and show the controls legend from one place.

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::input::{PlacementInput, RotateDirection};

/// Placement key bindings.
#[derive(Clone, Debug)]
pub struct PlacementBindings {
    pub rotate_left: KeyCode,
    pub rotate_right: KeyCode,
    pub floor_up: KeyCode,
    pub floor_down: KeyCode,
    pub cancel: KeyCode,
    pub confirm: MouseButton,
}

#[derive(Clone, Debug)]
pub struct InputConfig {
    pub placement: PlacementBindings,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            placement: PlacementBindings {
                rotate_left: KeyCode::KeyZ,
                rotate_right: KeyCode::KeyX,
                floor_up: KeyCode::PageUp,
                floor_down: KeyCode::PageDown,
                cancel: KeyCode::Escape,
                confirm: MouseButton::Left,
            },
        }
    }
}

impl InputConfig {
    /// Map a key press to a placement input. Releases are ignored by the
    /// caller; only presses reach here.
    pub fn map_key(&self, key: KeyCode) -> Option<PlacementInput> {
        let b = &self.placement;
        match key {
            k if k == b.rotate_left => Some(PlacementInput::Rotate(RotateDirection::Left)),
            k if k == b.rotate_right => Some(PlacementInput::Rotate(RotateDirection::Right)),
            k if k == b.floor_up => Some(PlacementInput::FloorUp),
            k if k == b.floor_down => Some(PlacementInput::FloorDown),
            k if k == b.cancel => Some(PlacementInput::Cancel),
            _ => None,
        }
    }

    /// Map a mouse button press to a placement input
    pub fn map_mouse_button(&self, button: MouseButton) -> Option<PlacementInput> {
        (button == self.placement.confirm).then_some(PlacementInput::Confirm)
    }

    /// Controls legend for the host's help panel
    pub fn help_text(&self) -> String {
        let b = &self.placement;
        format!(
            "Controls:\n\
             {:?} / {:?} -> rotate the module\n\
             {:?} / {:?} -> change floor\n\
             {:?} -> abort the placement\n\
             {:?} click -> confirm the placement",
            b.rotate_left, b.rotate_right, b.floor_up, b.floor_down, b.cancel, b.confirm
        )
    }
}
