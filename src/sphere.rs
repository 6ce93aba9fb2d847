//! Sphere primitive for ray tracing.
//!
//! Implements ray-sphere intersection using the optimized quadratic formula.

use glam::Vec3A;

use crate::hittable::HitRecord;
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Signed radius of the sphere.
    ///
    /// A negative radius describes the same surface but flips the geometric
    /// outward normal, which is how hollow glass spheres are built: a
    /// dielectric sphere with a smaller negative-radius sphere inside it
    /// forms a thin shell.
    pub radius: f32,

    /// Material properties determining light interaction.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3A, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Test for ray intersection within the given parameter range.
    ///
    /// Solves |r(t) - center|^2 = radius^2 and returns the nearest root
    /// inside `ray_t`, or `None` when the ray misses.
    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = self.center - r.origin;

        let a = r.direction.length_squared();
        let h = r.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = r.at(root);
        // Division by a signed radius flips the normal for thin shells.
        let outward_normal = (p - self.center) / self.radius;
        Some(HitRecord::new(r, root, p, outward_normal, self.material))
    }
}
