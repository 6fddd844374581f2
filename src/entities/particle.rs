//! Particles emitted around the counter on every tap.
//!
//! A burst of [`BURST_SIZE`] particles starts near the horizontal centre of
//! the effect area, each with a random heading, speed, size and colour. Every
//! particle tick moves them along their heading while they shrink and fade;
//! fully transparent particles are dropped.
//!
//! # Coordinate System
//!
//! - `x`/`y` are percentages of the effect area (0-100 nominal, may drift out)
//! - 0° points right, angles increase clockwise (Y+ is down)
//! - `speed` and `size` are pixels

use crate::entities::fade;
use crate::resources::randomsource::{RandomSource, random_f32_range};

/// Number of particles spawned per tap.
pub const BURST_SIZE: usize = 20;

const ORIGIN_X: f32 = 50.0;
const ORIGIN_X_SPREAD: f32 = 15.0;
const ORIGIN_Y: f32 = 50.0;
const SIZE_RANGE: (f32, f32) = (5.0, 15.0);
const SPEED_RANGE: (f32, f32) = (1.0, 4.0);
const SIZE_DECAY: f32 = 0.2;
const OPACITY_DECAY: f32 = 0.02;

/// Fixed five-colour palette particles draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleColor {
    /// `#4a90e2`
    Blue,
    /// `#e24a4a`
    Red,
    /// `#4ae24a`
    Green,
    /// `#e2e24a`
    Yellow,
    /// `#e24ae2`
    Magenta,
}

impl ParticleColor {
    pub const ALL: [ParticleColor; 5] = [
        ParticleColor::Blue,
        ParticleColor::Red,
        ParticleColor::Green,
        ParticleColor::Yellow,
        ParticleColor::Magenta,
    ];

    /// RGB channels of the palette entry.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ParticleColor::Blue => (0x4a, 0x90, 0xe2),
            ParticleColor::Red => (0xe2, 0x4a, 0x4a),
            ParticleColor::Green => (0x4a, 0xe2, 0x4a),
            ParticleColor::Yellow => (0xe2, 0xe2, 0x4a),
            ParticleColor::Magenta => (0xe2, 0x4a, 0xe2),
        }
    }

    fn pick<R: RandomSource>(rng: &mut R) -> Self {
        Self::ALL[rng.next_index(Self::ALL.len())]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
    pub opacity: f32,
    /// Heading in degrees.
    pub angle: f32,
    pub color: ParticleColor,
}

impl Particle {
    /// Sample a fresh, fully opaque particle.
    pub fn spawn<R: RandomSource>(id: u64, rng: &mut R) -> Self {
        Particle {
            id,
            x: random_f32_range(rng, ORIGIN_X - ORIGIN_X_SPREAD, ORIGIN_X + ORIGIN_X_SPREAD),
            y: ORIGIN_Y,
            size: random_f32_range(rng, SIZE_RANGE.0, SIZE_RANGE.1),
            speed: random_f32_range(rng, SPEED_RANGE.0, SPEED_RANGE.1),
            opacity: 1.0,
            angle: random_f32_range(rng, 0.0, 360.0),
            color: ParticleColor::pick(rng),
        }
    }

    /// The particle one tick later.
    pub fn advanced(&self) -> Self {
        let theta = self.angle.to_radians();
        Particle {
            x: self.x + theta.cos() * self.speed,
            y: self.y + theta.sin() * self.speed,
            size: (self.size - SIZE_DECAY).max(0.0),
            opacity: fade(self.opacity, OPACITY_DECAY),
            ..self.clone()
        }
    }

    pub fn is_alive(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Spawn [`BURST_SIZE`] particles with consecutive IDs starting at `first_id`.
pub fn spawn_burst<R: RandomSource>(first_id: u64, rng: &mut R) -> Vec<Particle> {
    (0..BURST_SIZE as u64)
        .map(|i| Particle::spawn(first_id + i, rng))
        .collect()
}

/// Advance every particle by one tick and drop the ones that faded out.
pub fn tick_particles(particles: &[Particle]) -> Vec<Particle> {
    particles
        .iter()
        .map(Particle::advanced)
        .filter(Particle::is_alive)
        .collect()
}
