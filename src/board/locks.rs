//! Registry of grid positions claimed by in-flight shuffle tasks.
//!
//! The simulation updates monkeys one after another, but the presentation
//! thread may inspect the registry at any time, so the set sits behind a
//! mutex. Claims are all-or-nothing.

use std::collections::HashSet;

use parking_lot::Mutex;

use crate::board::Position;

#[derive(Debug, Default)]
pub struct LockRegistry {
    held: Mutex<HashSet<Position>>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim every position in `positions`, or none of them. Fails if any is
    /// already held or if the request names the same position twice.
    pub fn try_lock(&self, positions: &[Position]) -> bool {
        let mut held = self.held.lock();
        let mut wanted = HashSet::with_capacity(positions.len());
        for p in positions {
            if held.contains(p) || !wanted.insert(*p) {
                return false;
            }
        }
        held.extend(wanted);
        true
    }

    pub fn unlock(&self, positions: &[Position]) {
        let mut held = self.held.lock();
        for p in positions {
            held.remove(p);
        }
    }

    pub fn is_locked(&self, pos: Position) -> bool {
        self.held.lock().contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.held.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.lock().is_empty()
    }

    /// Drop every claim (session reset).
    pub fn clear(&self) {
        self.held.lock().clear();
    }
}
