//! Per-collection tick schedulers.
//!
//! Each animated collection (labels, particles, background flash) has its own
//! [`TickScheduler`], an explicit two-state machine:
//!
//! - [`TickPhase::Idle`] – no pending tick
//! - [`TickPhase::Active`] – one pending tick, due when `remaining` reaches 0
//!
//! # Transitions
//!
//! | From   | Trigger                                   | To                     |
//! |--------|-------------------------------------------|------------------------|
//! | Idle   | collection becomes live                   | Active (full interval) |
//! | Active | collection replaced by a tap or a reset   | Active (re-armed)      |
//! | Active | collection observed empty                 | Idle                   |
//! | Active | tick completed, still live                | Active (next interval) |
//! | Active | tick completed, now empty                 | Idle                   |
//! | any    | [`TickScheduler::cancel`]                 | Idle                   |
//!
//! The tick systems in [`crate::systems::ticks`] drive the machine once per
//! frame with the frame delta.

use bevy_ecs::prelude::Resource;
use log::debug;

/// Interval between label ticks, in seconds.
pub const LABEL_TICK_INTERVAL: f32 = 0.050;
/// Interval between particle ticks, in seconds.
pub const PARTICLE_TICK_INTERVAL: f32 = 0.030;
/// Interval between background flash ticks, in seconds.
pub const FLASH_TICK_INTERVAL: f32 = 0.030;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickPhase {
    Idle,
    Active {
        /// Seconds until the pending tick fires. May go negative while
        /// catching up after a long frame.
        remaining: f32,
        /// Collection revision the pending tick was scheduled against.
        armed_revision: u64,
    },
}

#[derive(Debug, Clone)]
pub struct TickScheduler {
    name: &'static str,
    interval: f32,
    phase: TickPhase,
    ticks_fired: u64,
}

impl TickScheduler {
    pub fn new(name: &'static str, interval: f32) -> Self {
        TickScheduler {
            name,
            interval,
            phase: TickPhase::Idle,
            ticks_fired: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn phase(&self) -> TickPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, TickPhase::Active { .. })
    }

    /// Total ticks fired since creation.
    pub fn ticks_fired(&self) -> u64 {
        self.ticks_fired
    }

    /// Reconcile with the governed collection before advancing time.
    ///
    /// Returns `true` when a fresh tick was armed during this call, in which
    /// case the caller should not charge the current frame's delta to it.
    pub fn observe(&mut self, live: bool, revision: u64) -> bool {
        match self.phase {
            TickPhase::Idle if live => {
                self.arm(revision);
                true
            }
            TickPhase::Idle => false,
            TickPhase::Active { .. } if !live => {
                debug!("[{}] collection empty, going idle", self.name);
                self.phase = TickPhase::Idle;
                false
            }
            TickPhase::Active { armed_revision, .. } if armed_revision != revision => {
                debug!("[{}] collection replaced, re-arming", self.name);
                self.arm(revision);
                true
            }
            TickPhase::Active { .. } => false,
        }
    }

    /// Charge `dt` seconds against the pending tick.
    pub fn advance(&mut self, dt: f32) {
        if let TickPhase::Active { remaining, .. } = &mut self.phase {
            *remaining -= dt;
        }
    }

    /// Whether the pending tick should fire now.
    pub fn is_due(&self) -> bool {
        matches!(self.phase, TickPhase::Active { remaining, .. } if remaining <= 0.0)
    }

    /// Record a fired tick and schedule the next one, or go idle.
    ///
    /// `live` and `revision` describe the collection after the tick replaced
    /// it. Overshoot from a late tick is carried into the next interval.
    pub fn complete(&mut self, live: bool, revision: u64) {
        self.ticks_fired += 1;
        self.phase = match self.phase {
            TickPhase::Active { remaining, .. } if live => TickPhase::Active {
                remaining: remaining + self.interval,
                armed_revision: revision,
            },
            _ => {
                debug!("[{}] idle after {} ticks", self.name, self.ticks_fired);
                TickPhase::Idle
            }
        };
    }

    /// Drop any pending tick.
    pub fn cancel(&mut self) {
        if self.is_active() {
            debug!("[{}] pending tick cancelled", self.name);
        }
        self.phase = TickPhase::Idle;
    }

    fn arm(&mut self, revision: u64) {
        self.phase = TickPhase::Active {
            remaining: self.interval,
            armed_revision: revision,
        };
    }
}

/// The three independent schedulers of the screen.
#[derive(Resource, Debug, Clone)]
pub struct TickSchedulers {
    pub labels: TickScheduler,
    pub particles: TickScheduler,
    pub flash: TickScheduler,
}

impl Default for TickSchedulers {
    fn default() -> Self {
        TickSchedulers {
            labels: TickScheduler::new("labels", LABEL_TICK_INTERVAL),
            particles: TickScheduler::new("particles", PARTICLE_TICK_INTERVAL),
            flash: TickScheduler::new("flash", FLASH_TICK_INTERVAL),
        }
    }
}

impl TickSchedulers {
    pub fn cancel_all(&mut self) {
        self.labels.cancel();
        self.particles.cancel();
        self.flash.cancel();
    }

    pub fn any_active(&self) -> bool {
        self.labels.is_active() || self.particles.is_active() || self.flash.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let s = TickScheduler::new("t", 0.05);
        assert_eq!(s.phase(), TickPhase::Idle);
        assert!(!s.is_due());
    }

    #[test]
    fn test_idle_stays_idle_when_not_live() {
        let mut s = TickScheduler::new("t", 0.05);
        assert!(!s.observe(false, 0));
        assert_eq!(s.phase(), TickPhase::Idle);
    }

    #[test]
    fn test_live_collection_arms_full_interval() {
        let mut s = TickScheduler::new("t", 0.05);
        assert!(s.observe(true, 3));
        assert_eq!(
            s.phase(),
            TickPhase::Active {
                remaining: 0.05,
                armed_revision: 3
            }
        );
    }

    #[test]
    fn test_due_after_interval_elapses() {
        let mut s = TickScheduler::new("t", 0.05);
        s.observe(true, 0);
        s.advance(0.02);
        assert!(!s.is_due());
        s.advance(0.03);
        assert!(s.is_due());
    }

    #[test]
    fn test_complete_reschedules_while_live() {
        let mut s = TickScheduler::new("t", 0.05);
        s.observe(true, 0);
        s.advance(0.05);
        s.complete(true, 1);
        assert_eq!(
            s.phase(),
            TickPhase::Active {
                remaining: 0.05,
                armed_revision: 1
            }
        );
        assert_eq!(s.ticks_fired(), 1);
        // Own write is not mistaken for a foreign replacement.
        assert!(!s.observe(true, 1));
    }

    #[test]
    fn test_complete_goes_idle_when_empty() {
        let mut s = TickScheduler::new("t", 0.05);
        s.observe(true, 0);
        s.advance(0.05);
        s.complete(false, 1);
        assert_eq!(s.phase(), TickPhase::Idle);
    }

    #[test]
    fn test_foreign_replacement_rearms() {
        let mut s = TickScheduler::new("t", 0.05);
        s.observe(true, 0);
        s.advance(0.04);
        assert!(s.observe(true, 7));
        assert_eq!(
            s.phase(),
            TickPhase::Active {
                remaining: 0.05,
                armed_revision: 7
            }
        );
    }

    #[test]
    fn test_emptied_collection_goes_idle() {
        let mut s = TickScheduler::new("t", 0.05);
        s.observe(true, 0);
        assert!(!s.observe(false, 1));
        assert_eq!(s.phase(), TickPhase::Idle);
    }

    #[test]
    fn test_overshoot_carries_into_next_interval() {
        let mut s = TickScheduler::new("t", 0.03);
        s.observe(true, 0);
        s.advance(0.07);
        let mut fired = 0;
        while s.is_due() {
            fired += 1;
            s.complete(true, fired);
        }
        assert_eq!(fired, 2);
        assert!(s.is_active());
    }

    #[test]
    fn test_cancel_drops_pending_tick() {
        let mut s = TickScheduler::new("t", 0.05);
        s.observe(true, 0);
        s.advance(0.1);
        s.cancel();
        assert!(!s.is_due());
        assert_eq!(s.phase(), TickPhase::Idle);
    }

    #[test]
    fn test_default_intervals() {
        let all = TickSchedulers::default();
        assert_eq!(all.labels.interval(), LABEL_TICK_INTERVAL);
        assert_eq!(all.particles.interval(), PARTICLE_TICK_INTERVAL);
        assert_eq!(all.flash.interval(), FLASH_TICK_INTERVAL);
        assert!(!all.any_active());
    }
}
