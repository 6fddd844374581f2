//! Counter store resource.
//!
//! [`CounterState`] holds everything the screen shows: the counter value, the
//! live floating labels and particles, the background flash intensity and the
//! history list. Reactions never patch it in place piecemeal:
//!
//! - a tap builds a whole new snapshot with [`CounterState::after_increment`]
//!   and swaps it in
//! - each tick builds a new collection from the old one and hands it to one of
//!   the `replace_*` methods
//!
//! Every replacement bumps that collection's revision. Tick schedulers
//! compare revisions to notice when a collection was replaced by someone else
//! (a tap or a reset) and re-arm their pending tick.

use std::collections::VecDeque;

use bevy_ecs::prelude::Resource;

use crate::entities::fade;
use crate::entities::floatinglabel::FloatingLabel;
use crate::entities::listentry::ListEntry;
use crate::entities::particle::{BURST_SIZE, Particle, spawn_burst};
use crate::resources::randomsource::RandomSource;

/// Default maximum number of history entries kept.
pub const DEFAULT_LIST_CAPACITY: usize = 500;

const FLASH_DECAY: f32 = 0.05;

/// Per-collection revision counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Revisions {
    pub labels: u64,
    pub particles: u64,
    pub flash: u64,
}

/// The screen's state store.
#[derive(Resource, Debug, Clone)]
pub struct CounterState {
    count: u64,
    labels: Vec<FloatingLabel>,
    particles: Vec<Particle>,
    entries: VecDeque<ListEntry>,
    flash: f32,
    /// Next unallocated entity ID. Never decreases.
    next_id: u64,
    /// Maximum history entries; 0 means unbounded.
    list_capacity: usize,
    revisions: Revisions,
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new(DEFAULT_LIST_CAPACITY)
    }
}

impl CounterState {
    pub fn new(list_capacity: usize) -> Self {
        CounterState {
            count: 0,
            labels: Vec::new(),
            particles: Vec::new(),
            entries: VecDeque::new(),
            flash: 0.0,
            next_id: 0,
            list_capacity,
            revisions: Revisions::default(),
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn labels(&self) -> &[FloatingLabel] {
        &self.labels
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// History entries, newest first.
    pub fn entries(&self) -> &VecDeque<ListEntry> {
        &self.entries
    }

    pub fn flash(&self) -> f32 {
        self.flash
    }

    pub fn list_capacity(&self) -> usize {
        self.list_capacity
    }

    pub fn revisions(&self) -> Revisions {
        self.revisions
    }

    /// Snapshot after one tap.
    ///
    /// The label takes the next free ID and the burst takes the
    /// [`BURST_SIZE`] IDs right after it. `time` is the wall-clock string
    /// recorded in the new history entry.
    pub fn after_increment<R: RandomSource>(&self, rng: &mut R, time: &str) -> Self {
        let count = self.count + 1;
        let label_id = self.next_id;

        let mut labels = self.labels.clone();
        labels.push(FloatingLabel::new(label_id));

        let mut particles = self.particles.clone();
        particles.extend(spawn_burst(label_id + 1, rng));

        let mut entries = self.entries.clone();
        entries.push_front(ListEntry::for_count(count, time));
        truncate_entries(&mut entries, self.list_capacity);

        CounterState {
            count,
            labels,
            particles,
            entries,
            flash: 1.0,
            next_id: label_id + 1 + BURST_SIZE as u64,
            list_capacity: self.list_capacity,
            revisions: Revisions {
                labels: self.revisions.labels + 1,
                particles: self.revisions.particles + 1,
                flash: self.revisions.flash + 1,
            },
        }
    }

    /// Fresh snapshot for a reset screen.
    ///
    /// The ID allocator and revisions carry over so no ID is ever handed out
    /// twice and schedulers see every collection as replaced.
    pub fn cleared(&self) -> Self {
        CounterState {
            next_id: self.next_id,
            revisions: Revisions {
                labels: self.revisions.labels + 1,
                particles: self.revisions.particles + 1,
                flash: self.revisions.flash + 1,
            },
            ..CounterState::new(self.list_capacity)
        }
    }

    pub fn replace_labels(&mut self, labels: Vec<FloatingLabel>) {
        self.labels = labels;
        self.revisions.labels += 1;
    }

    pub fn replace_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
        self.revisions.particles += 1;
    }

    pub fn replace_flash(&mut self, intensity: f32) {
        self.flash = intensity.clamp(0.0, 1.0);
        self.revisions.flash += 1;
    }

    /// Change the history cap, dropping the oldest entries if needed.
    pub fn set_list_capacity(&mut self, capacity: usize) {
        self.list_capacity = capacity;
        truncate_entries(&mut self.entries, capacity);
    }
}

/// Flash intensity one tick later.
pub fn tick_flash(intensity: f32) -> f32 {
    fade(intensity, FLASH_DECAY)
}

fn truncate_entries(entries: &mut VecDeque<ListEntry>, capacity: usize) {
    if capacity > 0 && entries.len() > capacity {
        entries.truncate(capacity);
    }
}
