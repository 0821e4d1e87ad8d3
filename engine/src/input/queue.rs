//! Input Queue
//!
//! FIFO of placement inputs collected between ticks and drained once per tick.

use std::collections::VecDeque;

use super::actions::PlacementInput;

#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: VecDeque<PlacementInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an input for the next tick
    pub fn push(&mut self, input: PlacementInput) {
        self.pending.push_back(input);
    }

    /// Take every pending input in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = PlacementInput> + '_ {
        self.pending.drain(..)
    }

    /// Drop everything still pending
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
