//! The single boss slot.

use sortie_core::components::{Boss, BossLife};
use sortie_core::types::BossHandle;

/// Holds at most one boss. Occupying an occupied slot fails.
#[derive(Debug, Default)]
pub struct BossSlot {
    boss: Option<Boss>,
    next_handle: u32,
}

impl BossSlot {
    /// Place a new boss built by `make` if the slot is free.
    pub fn try_occupy(&mut self, make: impl FnOnce(BossHandle) -> Boss) -> Option<BossHandle> {
        if self.boss.is_some() {
            return None;
        }
        self.next_handle += 1;
        let handle = BossHandle(self.next_handle);
        self.boss = Some(make(handle));
        Some(handle)
    }

    pub fn is_occupied(&self) -> bool {
        self.boss.is_some()
    }

    pub fn get(&self) -> Option<&Boss> {
        self.boss.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut Boss> {
        self.boss.as_mut()
    }

    /// The boss `handle` refers to, if it still occupies the slot.
    pub fn resolve(&self, handle: BossHandle) -> Option<&Boss> {
        self.boss.as_ref().filter(|b| b.handle == handle)
    }

    pub fn resolve_mut(&mut self, handle: BossHandle) -> Option<&mut Boss> {
        self.boss.as_mut().filter(|b| b.handle == handle)
    }

    /// Remove the boss once its death sequence has completed.
    pub fn take_defeated(&mut self) -> Option<Boss> {
        if matches!(self.boss.as_ref().map(|b| b.life), Some(BossLife::Defeated)) {
            self.boss.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use sortie_ai::profiles::boss_profile;
    use sortie_core::enums::BossKind;

    fn dreadnought(handle: BossHandle) -> Boss {
        boss_profile(BossKind::Dreadnought).instantiate(
            BossKind::Dreadnought,
            handle,
            Vec2::new(400.0, 130.0),
            1.0,
        )
    }

    #[test]
    fn stale_handle_does_not_resolve() {
        let mut slot = BossSlot::default();
        let first = slot.try_occupy(dreadnought).unwrap();
        assert!(slot.try_occupy(dreadnought).is_none());

        slot.get_mut().unwrap().life = BossLife::Defeated;
        assert!(slot.take_defeated().is_some());
        assert!(!slot.is_occupied());

        let second = slot.try_occupy(dreadnought).unwrap();
        assert_ne!(first, second);
        assert!(slot.resolve(first).is_none());
        assert!(slot.resolve(second).is_some());
    }

    #[test]
    fn living_boss_is_not_taken() {
        let mut slot = BossSlot::default();
        slot.try_occupy(dreadnought);
        assert!(slot.take_defeated().is_none());
        assert!(slot.is_occupied());
    }
}
