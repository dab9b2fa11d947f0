use crate::error::{DecodeError, DecodeResult};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use strata_ir::{LoopId, LoopRef};

/// Loop id to loop node, for `break`/`continue` targets
#[derive(Debug, Default)]
pub struct LoopRegistry {
    loops: FxHashMap<LoopId, LoopRef>,
}

impl LoopRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `node` under `id` unless the id is taken. Returns whether it was inserted.
    pub fn register(&mut self, id: LoopId, node: LoopRef) -> bool {
        match self.loops.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(node);
                true
            }
        }
    }

    pub fn lookup(&self, id: LoopId) -> DecodeResult<LoopRef> {
        self.loops
            .get(&id)
            .cloned()
            .ok_or(DecodeError::DanglingLoopReference { loop_id: id })
    }

    pub fn len(&self) -> usize {
        self.loops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }
}
