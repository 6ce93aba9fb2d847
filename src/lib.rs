//! Prismpath path tracer
//!
//! A stochastic, recursive sphere path tracer with Lambertian, metal and
//! dielectric materials, deterministic per-pixel sampling, and plain-PPM or
//! PNG output.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod cli;
pub mod config;
pub mod hittable;
pub mod interval;
pub mod logger;
pub mod material;
pub mod output;
pub mod random;
pub mod ray;
pub mod renderer;
pub mod sphere;
