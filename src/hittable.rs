//! Ray-object intersection system.
//!
//! Defines the hit record produced by intersection tests, the closed set of
//! shape variants, and the scene aggregate that keeps the closest hit.

use glam::Vec3A;

use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::sphere::Sphere;

/// Ray-object intersection information.
///
/// Contains intersection point, surface normal, distance, and material data
/// needed for shading. Lives only for the duration of one hit/scatter chain.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub p: Vec3A,
    /// Surface normal at the intersection point (unit vector)
    pub normal: Vec3A,
    /// Distance along the ray to the intersection point
    pub t: f32,
    /// True if the ray hit the front face, false if it hit the back face
    pub front_face: bool,
    /// Material of the object at the hit point
    pub material: Material,
}

impl HitRecord {
    /// Build a hit record, orienting the normal against the incident ray.
    ///
    /// `outward_normal` must be unit length. The stored normal always points
    /// against the ray; `front_face` records which side was hit, which the
    /// dielectric needs to pick the refraction ratio.
    pub fn new(r: &Ray, t: f32, p: Vec3A, outward_normal: Vec3A, material: Material) -> Self {
        let front_face = r.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        Self {
            p,
            normal,
            t,
            front_face,
            material,
        }
    }
}

/// Closed set of geometric primitives.
///
/// Shapes are plain values dispatched by pattern matching, so a scene stores
/// them in one contiguous vector with no boxing.
#[derive(Debug, Clone)]
pub enum Shape {
    /// Sphere primitive
    Sphere(Sphere),
}

impl Shape {
    /// Test for ray intersection within the given parameter range.
    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        match self {
            Shape::Sphere(sphere) => sphere.hit(r, ray_t),
        }
    }
}

/// Collection of shapes forming a scene.
///
/// Uses linear search for intersection testing; the closest hit across all
/// shapes wins.
#[derive(Debug, Default)]
pub struct Scene {
    /// Shapes in the scene, in insertion order
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Add a shape to the scene.
    pub fn add(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Return the closest intersection within the given parameter range.
    ///
    /// Each accepted hit shrinks the effective upper bound, so later shapes
    /// can only win by being strictly nearer along the ray.
    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest_so_far = ray_t.max;
        let mut closest_hit = None;

        for shape in &self.shapes {
            if let Some(rec) = shape.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest_hit = Some(rec);
            }
        }

        closest_hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray() -> Material {
        Material::Lambertian {
            albedo: Vec3A::splat(0.5),
        }
    }

    #[test]
    fn empty_scene_never_hits() {
        let scene = Scene::new();
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(scene.hit(&r, Interval::new(0.001, f32::INFINITY)).is_none());
    }

    #[test]
    fn closest_hit_wins_regardless_of_insertion_order() {
        let near = Shape::Sphere(Sphere::new(Vec3A::new(0.0, 0.0, -2.0), 0.5, gray()));
        let far = Shape::Sphere(Sphere::new(Vec3A::new(0.0, 0.0, -5.0), 0.5, gray()));
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let range = Interval::new(0.001, f32::INFINITY);

        let mut scene = Scene::new();
        scene.add(far.clone());
        scene.add(near.clone());
        let rec = scene.hit(&r, range).unwrap();
        assert!((rec.t - 1.5).abs() < 1e-4);

        // Same result with the near sphere inserted first.
        let mut scene = Scene::new();
        scene.add(near);
        scene.add(far);
        let rec = scene.hit(&r, range).unwrap();
        assert!((rec.t - 1.5).abs() < 1e-4);
    }

    #[test]
    fn normal_is_oriented_against_the_ray() {
        let sphere = Shape::Sphere(Sphere::new(Vec3A::new(0.0, 0.0, -2.0), 0.5, gray()));
        // Ray starting inside the sphere hits the back face.
        let r = Ray::new(Vec3A::new(0.0, 0.0, -2.0), Vec3A::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&r, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert!(!rec.front_face);
        assert!(rec.normal.dot(r.direction) < 0.0);
    }
}
