use std::fs::File;
use std::io::{self, BufWriter};

use clap::Parser;
use glam::Vec3A;
use log::{error, info};
use rand::Rng;

use prismpath::cli::{Args, ScenePreset};
use prismpath::config::{CameraConfig, RenderConfig};
use prismpath::hittable::{Scene, Shape};
use prismpath::logger::init_logger;
use prismpath::material::Material;
use prismpath::output::{save_image_as_png, write_ppm};
use prismpath::random;
use prismpath::renderer;
use prismpath::sphere::Sphere;

/// The three-material demo scene: two diffuse spheres, one metal sphere and
/// a hollow glass sphere built from an outer shell plus a negative-radius
/// inner surface.
fn three_spheres_scene() -> (Scene, CameraConfig) {
    let mut scene = Scene::new();

    scene.add(Shape::Sphere(Sphere::new(
        Vec3A::new(0.0, 0.0, -1.0),
        0.5,
        Material::Lambertian {
            albedo: Vec3A::new(0.8, 0.3, 0.3),
        },
    )));
    // Ground sphere
    scene.add(Shape::Sphere(Sphere::new(
        Vec3A::new(0.0, -100.5, -1.0),
        100.0,
        Material::Lambertian {
            albedo: Vec3A::new(0.8, 0.8, 0.0),
        },
    )));
    scene.add(Shape::Sphere(Sphere::new(
        Vec3A::new(1.0, 0.0, -1.0),
        0.5,
        Material::Metal {
            albedo: Vec3A::new(0.8, 0.6, 0.2),
            fuzz: 0.0,
        },
    )));
    scene.add(Shape::Sphere(Sphere::new(
        Vec3A::new(-1.0, 0.0, -1.0),
        0.5,
        Material::Dielectric {
            refraction_index: 1.5,
        },
    )));
    scene.add(Shape::Sphere(Sphere::new(
        Vec3A::new(-1.0, 0.0, -1.0),
        -0.45,
        Material::Dielectric {
            refraction_index: 1.5,
        },
    )));

    let camera = CameraConfig {
        look_from: Vec3A::new(-2.0, 2.0, 1.0),
        look_at: Vec3A::new(0.0, 0.0, -1.0),
        view_up: Vec3A::new(0.0, 1.0, 0.0),
        vfov: 90.0,
    };

    (scene, camera)
}

/// The book cover scene: a ground sphere, a grid of random small spheres and
/// three large feature spheres. Generated from the configured seed.
fn cover_scene(seed: u64) -> (Scene, CameraConfig) {
    let mut rng = random::seeded_rng(seed);
    let mut scene = Scene::new();

    // Ground sphere
    scene.add(Shape::Sphere(Sphere::new(
        Vec3A::new(0.0, -1000.0, 0.0),
        1000.0,
        Material::Lambertian {
            albedo: Vec3A::new(0.5, 0.5, 0.5),
        },
    )));

    // Generate 22x22 grid of small spheres
    for a in -11..11 {
        for b in -11..11 {
            let choose_mat: f32 = rng.random();
            let center = Vec3A::new(
                a as f32 + 0.9 * rng.random::<f32>(),
                0.2,
                b as f32 + 0.9 * rng.random::<f32>(),
            );

            // Keep the small spheres clear of the large feature spheres
            if (center - Vec3A::new(4.0, 0.2, 0.0)).length() > 0.9 {
                let material = if choose_mat < 0.8 {
                    Material::Lambertian {
                        albedo: random::random_color(&mut rng) * random::random_color(&mut rng),
                    }
                } else if choose_mat < 0.95 {
                    Material::Metal {
                        albedo: random::random_color_range(&mut rng, 0.5, 1.0),
                        fuzz: random::random_f32_range(&mut rng, 0.0, 0.5),
                    }
                } else {
                    Material::Dielectric {
                        refraction_index: 1.5,
                    }
                };
                scene.add(Shape::Sphere(Sphere::new(center, 0.2, material)));
            }
        }
    }

    // Three large feature spheres
    scene.add(Shape::Sphere(Sphere::new(
        Vec3A::new(0.0, 1.0, 0.0),
        1.0,
        Material::Dielectric {
            refraction_index: 1.5,
        },
    )));
    scene.add(Shape::Sphere(Sphere::new(
        Vec3A::new(-4.0, 1.0, 0.0),
        1.0,
        Material::Lambertian {
            albedo: Vec3A::new(0.4, 0.2, 0.1),
        },
    )));
    scene.add(Shape::Sphere(Sphere::new(
        Vec3A::new(4.0, 1.0, 0.0),
        1.0,
        Material::Metal {
            albedo: Vec3A::new(0.7, 0.6, 0.5),
            fuzz: 0.0,
        },
    )));

    let camera = CameraConfig {
        look_from: Vec3A::new(13.0, 2.0, 3.0),
        look_at: Vec3A::new(0.0, 0.0, 0.0),
        view_up: Vec3A::new(0.0, 1.0, 0.0),
        vfov: 20.0,
    };

    (scene, camera)
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    info!(
        "Prismpath - Git Version {} ({})",
        env!("GIT_HASH"),
        env!("GIT_DATE")
    );

    let (scene, camera) = match args.scene {
        ScenePreset::ThreeSpheres => three_spheres_scene(),
        ScenePreset::Cover => cover_scene(args.seed),
    };

    let config = RenderConfig {
        image_width: args.width,
        image_height: args.height,
        samples_per_pixel: args.samples_per_pixel,
        max_depth: args.max_depth,
        seed: args.seed,
        camera,
    };

    // Fail fast on bad configuration; no partial output.
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    info!(
        "Image resolution: {}x{}, samples per pixel: {}",
        config.image_width, config.image_height, config.samples_per_pixel
    );

    let image = renderer::render(&config, &scene);

    let result = if args.output == "-" {
        write_ppm(&image, &mut io::stdout().lock())
    } else if args.output.ends_with(".png") {
        save_image_as_png(&image, &args.output)
            .map_err(|e| io::Error::other(e.to_string()))
            .map(|_| info!("Image saved as {}", args.output))
    } else {
        File::create(&args.output)
            .and_then(|file| write_ppm(&image, &mut BufWriter::new(file)))
            .map(|_| info!("Image saved as {}", args.output))
    };

    if let Err(e) = result {
        error!("Failed to write output: {e}");
        std::process::exit(1);
    }
}
