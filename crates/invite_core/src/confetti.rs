//! Particle math for the event-day confetti and the last-hour pulse.
//!
//! Everything here is a pure function of elapsed animation time; the GUI only
//! maps [`ConfettiPiece`]s onto its painter.

use std::f32::consts::PI;
use std::time::Duration;

use rand::Rng;

pub const PARTICLE_COUNT: usize = 100;
/// Colors a particle may pick from; the painter owns the actual palette.
pub const PALETTE_SIZE: usize = 7;

const DROP_PERIOD_MS: f32 = 3500.0;
const SPIN_PERIOD_MS: f32 = 2000.0;
const PULSE_PERIOD_MS: f32 = 600.0;
const PULSE_PEAK: f32 = 1.08;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position as a fraction of the canvas width.
    pub x_factor: f32,
    /// 0 = far, 1 = near; drives size, drift and spin.
    pub depth: f32,
    pub color_index: usize,
    pub offset: f32,
}

/// A single rectangle to paint, rotated about its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiPiece {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub rotation_degrees: f32,
    pub color_index: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfettiField {
    particles: Vec<Particle>,
}

impl ConfettiField {
    pub fn generate<R: Rng>(rng: &mut R, count: usize) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x_factor: rng.gen::<f32>(),
                depth: rng.gen::<f32>(),
                color_index: rng.gen_range(0..PALETTE_SIZE),
                offset: rng.gen::<f32>(),
            })
            .collect();
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pieces(&self, elapsed: Duration, width: f32, height: f32) -> Vec<ConfettiPiece> {
        let progress = drop_progress(elapsed);
        let rotation = spin_degrees(elapsed);
        self.particles
            .iter()
            .map(|particle| {
                let size = 6.0 + particle.depth * 12.0;
                let drift = (progress * 10.0 + particle.depth * 5.0).sin()
                    * (20.0 + particle.depth * 40.0);
                ConfettiPiece {
                    x: particle.x_factor * width + drift,
                    y: ((progress + particle.offset) % 1.2) * height - particle.depth * 600.0,
                    width: size,
                    height: size * 1.5,
                    rotation_degrees: rotation + particle.depth * 180.0,
                    color_index: particle.color_index,
                }
            })
            .collect()
    }
}

fn cycle_fraction(elapsed: Duration, period_ms: f32) -> f32 {
    let ms = elapsed.as_millis() as f32;
    (ms % period_ms) / period_ms
}

/// Vertical progress, restarting from -0.2 every 3.5 s and reaching 1.2.
pub fn drop_progress(elapsed: Duration) -> f32 {
    -0.2 + 1.4 * cycle_fraction(elapsed, DROP_PERIOD_MS)
}

pub fn spin_degrees(elapsed: Duration) -> f32 {
    360.0 * cycle_fraction(elapsed, SPIN_PERIOD_MS)
}

/// Scale for the last-hour countdown text: 1.0 up to 1.08 over 600 ms and back.
pub fn pulse_scale(elapsed: Duration) -> f32 {
    let phase = cycle_fraction(elapsed, 2.0 * PULSE_PERIOD_MS);
    let eased = (1.0 - (phase * 2.0 * PI).cos()) / 2.0;
    1.0 + (PULSE_PEAK - 1.0) * eased
}

#[cfg(test)]
#[path = "tests/confetti_tests.rs"]
mod tests;
