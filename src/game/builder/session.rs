//! Placement Session
//!
//! State machine for interactive module placement.
//!
//! ```text
//! Idle --start_placing--> Previewing --Cancel--> Idle
//!                          |      ^
//!                          +------+ Confirm (commit, keep placing)
//! ```
//!
//! Each tick drains the input queue in a fixed order: key transitions first,
//! then the pointer ray is intersected with the ground plane and the result
//! snapped and validated, and only then is a confirm handled. The session
//! owns at most one preview object and destroys it on every exit path.

use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use glam::{Quat, Vec3};

use super::preview::PreviewTint;
use super::snapping::snap_position;
use super::validity::{PlacementError, check_placement};
use crate::camera::raycast::{Ray, raycast_to_ground};
use crate::game::config::BuilderConfig;
use crate::game::layout::{BuildingLayout, PlacedModule};
use crate::game::modules::{Catalog, ModulePrototype};
use crate::game::scene::{PreviewHandle, Scene};
use crate::input::{InputQueue, PlacementInput, RotateDirection};

/// Why a session returned to idle without the caller asking for it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Cancel input or [`PlacementSession::cancel`]
    User,
    /// The catalog no longer provides the active prototype
    PrototypeUnavailable,
    /// The workspace view went away
    SceneUnavailable,
    /// The preview object was destroyed outside the session
    PreviewLost,
}

/// Result of one tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// No placement in progress
    Idle,
    /// Preview updated
    Previewing { valid: bool },
    /// The pointer ray does not reach the ground plane; preview left as is
    NoPointerHit,
    /// A module was placed; the session keeps previewing the same prototype
    Committed(PlacedModule),
    /// Confirm was refused; the session is unchanged
    Rejected(PlacementError),
    Cancelled(CancelReason),
}

#[derive(Debug, Clone)]
enum SessionState {
    Idle,
    Previewing {
        prototype: Arc<ModulePrototype>,
        preview: PreviewHandle,
    },
}

/// The single interactive placement session of a workspace.
#[derive(Debug)]
pub struct PlacementSession {
    state: SessionState,
    /// Yaw in quarter turns, 0..4
    quarter_turns: u8,
    current_floor: u32,
    preview_position: Vec3,
    is_valid: bool,
    last_error: Option<PlacementError>,
    pointer_ray: Option<Ray>,
    inputs: InputQueue,
    config: BuilderConfig,
}

impl Default for PlacementSession {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

impl PlacementSession {
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            state: SessionState::Idle,
            quarter_turns: 0,
            current_floor: 0,
            preview_position: Vec3::ZERO,
            is_valid: false,
            last_error: None,
            pointer_ray: None,
            inputs: InputQueue::new(),
            config,
        }
    }

    // ------------------------------------------------------------------
    // Observation
    // ------------------------------------------------------------------

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Previewing { .. })
    }

    pub fn active_prototype(&self) -> Option<&Arc<ModulePrototype>> {
        match &self.state {
            SessionState::Previewing { prototype, .. } => Some(prototype),
            SessionState::Idle => None,
        }
    }

    pub fn preview_handle(&self) -> Option<PreviewHandle> {
        match self.state {
            SessionState::Previewing { preview, .. } => Some(preview),
            SessionState::Idle => None,
        }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.quarter_turns as f32 * FRAC_PI_2)
    }

    pub fn quarter_turns(&self) -> u8 {
        self.quarter_turns
    }

    pub fn current_floor(&self) -> u32 {
        self.current_floor
    }

    pub fn set_current_floor(&mut self, floor: u32) {
        self.current_floor = floor;
    }

    pub fn preview_position(&self) -> Vec3 {
        self.preview_position
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn last_error(&self) -> Option<PlacementError> {
        self.last_error
    }

    pub fn tint(&self) -> PreviewTint {
        PreviewTint::from_validity(self.is_valid)
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn pending_inputs(&self) -> usize {
        self.inputs.len()
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Begin placing `prototype`. Restarting while already previewing drops
    /// the old preview before the new one is spawned.
    pub fn start_placing(&mut self, prototype: Arc<ModulePrototype>, scene: &mut dyn Scene) {
        if let SessionState::Previewing { preview, .. } = self.state {
            scene.destroy_preview(preview);
        }

        let preview = scene.spawn_preview(&prototype);
        log::info!(
            "[Placement] Placing '{}' ({}) on floor {}",
            prototype.id(),
            prototype.kind().name(),
            self.current_floor
        );

        self.state = SessionState::Previewing { prototype, preview };
        self.quarter_turns = 0;
        self.is_valid = false;
        self.last_error = None;
        self.inputs.clear();
    }

    /// Abort the current placement. Returns false if nothing was active.
    pub fn cancel(&mut self, scene: &mut dyn Scene) -> bool {
        if !self.is_active() {
            return false;
        }
        self.end_session(scene, CancelReason::User);
        true
    }

    /// Queue an input for the next tick
    pub fn queue_input(&mut self, input: PlacementInput) {
        self.inputs.push(input);
    }

    pub fn rotate(&mut self, direction: RotateDirection) {
        self.quarter_turns = (self.quarter_turns as i32 + direction.quarter_turns()).rem_euclid(4) as u8;
        log::debug!("[Placement] Rotation: {} deg", self.quarter_turns as u32 * 90);
    }

    pub fn floor_up(&mut self) {
        self.current_floor = self.current_floor.saturating_add(1);
        log::info!("[Placement] Floor: {}", self.current_floor);
    }

    /// Move down one floor; stays at 0.
    pub fn floor_down(&mut self) {
        self.current_floor = self.current_floor.saturating_sub(1);
        log::info!("[Placement] Floor: {}", self.current_floor);
    }

    // ------------------------------------------------------------------
    // Tick
    // ------------------------------------------------------------------

    /// Run one tick: consume pending input, refresh the preview, and commit
    /// to `layout` on a valid confirm.
    pub fn tick(
        &mut self,
        catalog: &dyn Catalog,
        scene: &mut dyn Scene,
        layout: &mut BuildingLayout,
    ) -> TickOutcome {
        let (prototype, preview) = match &self.state {
            SessionState::Idle => return self.tick_idle(),
            SessionState::Previewing { prototype, preview } => (Arc::clone(prototype), *preview),
        };

        if !scene.is_available() {
            return self.abort(scene, CancelReason::SceneUnavailable);
        }
        if !scene.preview_alive(preview) {
            return self.abort(scene, CancelReason::PreviewLost);
        }
        let Some(prototype) = catalog.get(prototype.id()) else {
            return self.abort(scene, CancelReason::PrototypeUnavailable);
        };
        // Pick up a redefined prototype under the same id
        self.state = SessionState::Previewing {
            prototype: Arc::clone(&prototype),
            preview,
        };

        // 1. Key transitions, in arrival order. Confirm is only latched.
        let mut confirm = false;
        let mut pending = std::mem::take(&mut self.inputs);
        for input in pending.drain() {
            match input {
                PlacementInput::Rotate(direction) => self.rotate(direction),
                PlacementInput::FloorUp => self.floor_up(),
                PlacementInput::FloorDown => self.floor_down(),
                PlacementInput::PointerMoved(ray) => self.pointer_ray = Some(ray),
                PlacementInput::Confirm => confirm = true,
                PlacementInput::Cancel => {
                    return self.abort(scene, CancelReason::User);
                }
            }
        }

        // 2. Pointer ray against the ground plane
        let Some(hit) = self.pointer_ray.as_ref().and_then(raycast_to_ground) else {
            return TickOutcome::NoPointerHit;
        };

        // 3. Snap + validate, refresh preview
        self.evaluate(hit, &prototype, layout);
        scene.update_preview(preview, self.preview_position, self.rotation(), self.tint());

        // 4. Confirm
        if !confirm {
            return TickOutcome::Previewing { valid: self.is_valid };
        }

        if !self.is_valid {
            let err = self.last_error.unwrap_or(PlacementError::Overlap);
            log::warn!("[Placement] {}", err);
            return TickOutcome::Rejected(err);
        }

        let module = PlacedModule::new(Arc::clone(&prototype), self.preview_position, self.rotation());
        let committed = layout.commit(module, scene).clone();
        log::info!(
            "[Placement] Placed '{}' at ({:.2}, {:.2}, {:.2}) floor {}",
            committed.prototype_id(),
            committed.position.x,
            committed.position.y,
            committed.position.z,
            self.current_floor
        );

        // The spot is now taken; let the preview show it
        self.evaluate(hit, &prototype, layout);
        scene.update_preview(preview, self.preview_position, self.rotation(), self.tint());

        TickOutcome::Committed(committed)
    }

    /// Snap `hit` and run the validity check, updating the observable fields.
    fn evaluate(&mut self, hit: Vec3, prototype: &ModulePrototype, layout: &BuildingLayout) {
        let rotation = self.rotation();
        let position = snap_position(hit, rotation, self.current_floor, prototype, &self.config);
        let result = check_placement(
            position,
            rotation,
            Some(prototype),
            self.current_floor,
            layout,
            &self.config,
        );

        self.preview_position = position;
        self.is_valid = result.is_ok();
        self.last_error = result.err();
    }

    /// Idle ticks only look for a stray confirm.
    fn tick_idle(&mut self) -> TickOutcome {
        let mut pending = std::mem::take(&mut self.inputs);
        let confirmed = pending.drain().any(|input| matches!(input, PlacementInput::Confirm));
        if confirmed {
            self.last_error = Some(PlacementError::NoPrototypeSelected);
            return TickOutcome::Rejected(PlacementError::NoPrototypeSelected);
        }
        TickOutcome::Idle
    }

    fn abort(&mut self, scene: &mut dyn Scene, reason: CancelReason) -> TickOutcome {
        self.end_session(scene, reason);
        TickOutcome::Cancelled(reason)
    }

    /// Return to idle, destroying the preview.
    fn end_session(&mut self, scene: &mut dyn Scene, reason: CancelReason) {
        if let SessionState::Previewing { prototype, preview } =
            std::mem::replace(&mut self.state, SessionState::Idle)
        {
            scene.destroy_preview(preview);
            match reason {
                CancelReason::User => {
                    log::info!("[Placement] Cancelled '{}'", prototype.id());
                }
                other => {
                    log::warn!("[Placement] Cancelled '{}': {:?}", prototype.id(), other);
                }
            }
        }

        self.quarter_turns = 0;
        self.is_valid = false;
        self.last_error = None;
        self.inputs.clear();
    }
}
