use rand::Rng;

/// Placement of one ambient particle, in CSS pixels / seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub left_px: f64,
    pub size_px: f64,
    pub delay_sec: f64,
}

pub const PARTICLE_SIZE_MIN_PX: f64 = 1.0;
pub const PARTICLE_SIZE_SPAN_PX: f64 = 3.0;
pub const PARTICLE_DELAY_MAX_SEC: f64 = 20.0;

pub const SPECIAL_PARTICLE_COLORS: [&str; 4] = ["#00f5d4", "#9b5de5", "#f15bb5", "#ffaa44"];

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport_width: f64) -> Self {
        Self {
            left_px: random_left(rng, viewport_width),
            size_px: PARTICLE_SIZE_MIN_PX + rng.gen::<f64>() * PARTICLE_SIZE_SPAN_PX,
            delay_sec: rng.gen::<f64>() * PARTICLE_DELAY_MAX_SEC,
        }
    }
}

#[inline]
pub fn random_left<R: Rng + ?Sized>(rng: &mut R, viewport_width: f64) -> f64 {
    rng.gen::<f64>() * viewport_width.max(0.0)
}

/// Particles that drifted past the right edge after a resize get re-placed.
#[inline]
pub fn needs_reposition(left_px: f64, viewport_width: f64) -> bool {
    left_px > viewport_width
}

pub fn special_color<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SPECIAL_PARTICLE_COLORS[rng.gen_range(0..SPECIAL_PARTICLE_COLORS.len())]
}
