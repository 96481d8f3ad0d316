//! Decorative floating particles for the hero section.

use rand::Rng;

pub const PARTICLE_COUNT: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// 0.2 to 0.7
    pub opacity: f64,
    /// Percent of the container width
    pub left: f64,
    /// Percent of the container height
    pub top: f64,
    /// Seconds per float cycle, 10 to 20
    pub duration: f64,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            opacity: rng.random_range(0.2..0.7),
            left: rng.random_range(0.0..100.0),
            top: rng.random_range(0.0..100.0),
            duration: rng.random_range(10.0..20.0),
        }
    }

    /// Inline style for the particle element.
    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; left: {:.2}%; top: {:.2}%; animation: floatParticle {:.2}s infinite linear;",
            self.opacity, self.left, self.top, self.duration
        )
    }
}

pub fn generate<R: Rng>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}
