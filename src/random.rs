//! Random sampling utilities for ray tracing.
//!
//! Every sampling function takes an explicit generator so callers control
//! seeding; rendering derives one ChaCha20 stream per pixel, which keeps
//! parallel renders deterministic for a fixed seed.

use glam::Vec3A;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Golden-ratio increment used by splitmix64.
const PHI: u64 = 0x9e3779b97f4a7c15;

/// splitmix64 finalizer, from Sebastiano Vigna's reference implementation.
///
/// Used to decorrelate per-pixel seeds: neighboring pixel coordinates differ
/// in few bits, and feeding them to the generator directly would produce
/// visibly correlated sample streams.
fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(PHI);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Create a generator from a bare seed.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(splitmix64(seed))
}

/// Create the generator for one pixel of a render.
///
/// Folds the render seed and the pixel coordinates into a single stream, so
/// every pixel samples independently and reproducibly regardless of which
/// thread renders it.
pub fn pixel_rng(seed: u64, x: u32, y: u32) -> ChaCha20Rng {
    let pixel = ((y as u64) << 32) | x as u64;
    ChaCha20Rng::seed_from_u64(splitmix64(seed ^ splitmix64(pixel)))
}

/// Generate a random f32 in [0.0, 1.0)
pub fn random_f32(rng: &mut impl Rng) -> f32 {
    rng.random()
}

/// Generate a random f32 in [min, max)
pub fn random_f32_range(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.random::<f32>()
}

/// Generate a uniform random point inside the unit ball.
///
/// Rejection-samples uniform points in [-1,1]^3 until one falls strictly
/// inside the sphere. Shared by Lambertian and Metal scattering.
pub fn random_in_unit_sphere(rng: &mut impl Rng) -> Vec3A {
    loop {
        let p = Vec3A::new(
            random_f32_range(rng, -1.0, 1.0),
            random_f32_range(rng, -1.0, 1.0),
            random_f32_range(rng, -1.0, 1.0),
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Generate random RGB color with components in [0.0, 1.0).
pub fn random_color(rng: &mut impl Rng) -> Vec3A {
    Vec3A::new(rng.random(), rng.random(), rng.random())
}

/// Generate random RGB color with components in [min, max).
pub fn random_color_range(rng: &mut impl Rng, min: f32, max: f32) -> Vec3A {
    Vec3A::new(
        random_f32_range(rng, min, max),
        random_f32_range(rng, min, max),
        random_f32_range(rng, min, max),
    )
}
