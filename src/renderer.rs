//! Monte-Carlo radiance estimation and the per-pixel sampling driver.

use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::Rng;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::hittable::Scene;
use crate::interval::Interval;
use crate::material::Color;
use crate::random;
use crate::ray::Ray;

/// Linear f32 framebuffer produced by [`render`].
pub type Framebuffer = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Sky gradient returned for rays that escape the scene.
///
/// Blends from white at the horizon to light blue at the zenith based on the
/// normalized ray direction's y component.
pub fn background(r: &Ray) -> Color {
    let unit_direction = r.direction.normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    (1.0 - t) * Color::new(1.0, 1.0, 1.0) + t * Color::new(0.5, 0.7, 1.0)
}

/// Estimate the radiance arriving along one ray.
///
/// Follows scattering events as an explicit loop carrying the accumulated
/// attenuation product, so the bounce limit never grows the stack. A ray
/// that escapes returns the attenuated sky; an absorbed ray, or one still
/// bouncing when the budget runs out, contributes nothing.
pub fn ray_color(r: &Ray, scene: &Scene, max_depth: u32, rng: &mut impl Rng) -> Color {
    let mut ray = *r;
    let mut attenuation = Color::ONE;
    let mut bounces = 0;

    loop {
        // t_min of 0.001 skips self-intersections at the scatter origin
        // (shadow acne).
        match scene.hit(&ray, Interval::new(0.001, f32::INFINITY)) {
            Some(rec) => {
                if bounces >= max_depth {
                    return Color::ZERO;
                }
                match rec.material.scatter(&ray, &rec, rng) {
                    Some(scatter) => {
                        attenuation *= scatter.attenuation;
                        ray = scatter.scattered;
                        bounces += 1;
                    }
                    None => return Color::ZERO,
                }
            }
            None => return attenuation * background(&ray),
        }
    }
}

/// Render the scene into a linear f32 framebuffer.
///
/// Pixels are processed in parallel; each pixel draws its samples from its
/// own seeded stream, so the output is identical for a fixed configuration
/// regardless of thread scheduling. The configuration must already be
/// validated.
pub fn render(config: &RenderConfig, scene: &Scene) -> Framebuffer {
    let camera = Camera::new(
        config.camera.look_from,
        config.camera.look_at,
        config.camera.view_up,
        config.camera.vfov,
        config.aspect_ratio(),
    );

    let nx = config.image_width;
    let ny = config.image_height;
    let sample_scale = 1.0 / config.samples_per_pixel as f32;

    let mut image: Framebuffer = ImageBuffer::new(nx, ny);

    info!(
        "Rendering {}x{} at {} spp on {} CPU cores...",
        nx,
        ny,
        config.samples_per_pixel,
        rayon::current_num_threads()
    );
    let render_start = std::time::Instant::now();
    let pb = ProgressBar::new((nx as u64) * (ny as u64));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40} {pos}/{len} ETA: {eta}")
            .unwrap(),
    );

    image.enumerate_pixels_mut().par_bridge().for_each(|(x, y, pixel)| {
        let mut rng = random::pixel_rng(config.seed, x, y);
        // Framebuffer row 0 is the top scanline; viewport v runs bottom-up.
        let j = ny - 1 - y;

        let mut color = Color::ZERO;
        for _ in 0..config.samples_per_pixel {
            let u = (x as f32 + rng.random::<f32>()) / nx as f32;
            let v = (j as f32 + rng.random::<f32>()) / ny as f32;
            let r = camera.get_ray(u, v);
            color += ray_color(&r, scene, config.max_depth, &mut rng);
        }

        color *= sample_scale;
        *pixel = Rgb([color.x, color.y, color.z]);
        pb.inc(1);
    });

    pb.finish();
    info!("Image generated in {:.2?}", render_start.elapsed());

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CameraConfig;
    use glam::Vec3A;
    use crate::hittable::Shape;
    use crate::material::Material;
    use crate::random::seeded_rng;
    use crate::sphere::Sphere;

    fn sky_lit_lambertian_scene(albedo: f32) -> Scene {
        let mut scene = Scene::new();
        scene.add(Shape::Sphere(Sphere::new(
            Vec3A::new(0.0, 0.0, -1.0),
            0.5,
            Material::Lambertian {
                albedo: Vec3A::splat(albedo),
            },
        )));
        scene
    }

    #[test]
    fn empty_scene_returns_the_exact_background() {
        let scene = Scene::new();
        let mut rng = seeded_rng(0);
        for direction in [
            Vec3A::new(0.0, 1.0, 0.0),
            Vec3A::new(0.0, -1.0, 0.0),
            Vec3A::new(0.3, 0.2, -1.0),
        ] {
            let r = Ray::new(Vec3A::ZERO, direction);
            assert_eq!(ray_color(&r, &scene, 50, &mut rng), background(&r));
        }
    }

    #[test]
    fn background_gradient_endpoints() {
        let up = Ray::new(Vec3A::ZERO, Vec3A::Y);
        assert!((background(&up) - Color::new(0.5, 0.7, 1.0)).length() < 1e-5);
        let down = Ray::new(Vec3A::ZERO, -Vec3A::Y);
        assert!((background(&down) - Color::ONE).length() < 1e-5);
    }

    #[test]
    fn depth_zero_hit_is_black_but_miss_still_sees_sky() {
        let scene = sky_lit_lambertian_scene(0.5);
        let mut rng = seeded_rng(0);

        let hit_ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert_eq!(ray_color(&hit_ray, &scene, 0, &mut rng), Color::ZERO);

        let miss_ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 1.0, 0.0));
        assert_eq!(ray_color(&miss_ray, &scene, 0, &mut rng), background(&miss_ray));
    }

    #[test]
    fn one_bounce_radiance_is_positive_and_bounded_by_albedo() {
        let albedo = 0.5;
        let scene = sky_lit_lambertian_scene(albedo);
        let mut rng = seeded_rng(3);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));

        let mut mean = Color::ZERO;
        let samples = 200;
        for _ in 0..samples {
            let c = ray_color(&r, &scene, 50, &mut rng);
            // Attenuation compounds multiplicatively; the sky never exceeds 1.
            assert!(c.max_element() <= albedo + 1e-5);
            mean += c;
        }
        mean /= samples as f32;
        // Deeper bounce budgets can only add energy over the depth-0 black.
        assert!(mean.min_element() > 0.0);
    }

    #[test]
    fn radiance_grows_with_bounce_budget() {
        let scene = sky_lit_lambertian_scene(0.8);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.1, -1.0));
        let samples = 500;

        let mean_luminance = |depth: u32| {
            let mut rng = seeded_rng(9);
            let mut total = 0.0;
            for _ in 0..samples {
                let c = ray_color(&r, &scene, depth, &mut rng);
                total += c.x + c.y + c.z;
            }
            total / samples as f32
        };

        assert_eq!(mean_luminance(0), 0.0);
        let shallow = mean_luminance(1);
        let deep = mean_luminance(16);
        assert!(shallow > 0.0);
        // With only sky illumination, truncating paths can only lose energy.
        assert!(deep >= shallow * 0.95);
    }

    #[test]
    fn render_is_reproducible_for_a_fixed_seed() {
        let scene = sky_lit_lambertian_scene(0.5);
        let config = RenderConfig {
            image_width: 8,
            image_height: 4,
            samples_per_pixel: 4,
            max_depth: 8,
            seed: 11,
            camera: CameraConfig {
                look_from: Vec3A::ZERO,
                look_at: Vec3A::new(0.0, 0.0, -1.0),
                view_up: Vec3A::Y,
                vfov: 90.0,
            },
        };

        let first = render(&config, &scene);
        let second = render(&config, &scene);
        assert_eq!(first.into_raw(), second.into_raw());
    }
}
