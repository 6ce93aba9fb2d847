//! Render configuration and fail-fast validation.
//!
//! Invalid configurations are rejected before the render loop starts, so no
//! partial output is ever emitted for a bad setup.

use glam::Vec3A;
use thiserror::Error;

/// Camera parameters, in world space.
#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    /// Eye position.
    pub look_from: Vec3A,
    /// Point the camera looks at.
    pub look_at: Vec3A,
    /// Up hint used to build the camera basis.
    pub view_up: Vec3A,
    /// Vertical field of view in degrees.
    pub vfov: f32,
}

/// Full configuration for one render.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output image width in pixels.
    pub image_width: u32,
    /// Output image height in pixels.
    pub image_height: u32,
    /// Stochastic samples per pixel.
    pub samples_per_pixel: u32,
    /// Maximum number of scattering bounces per sample.
    pub max_depth: u32,
    /// Seed for the per-pixel random streams.
    pub seed: u64,
    /// Camera parameters.
    pub camera: CameraConfig,
}

/// Configuration errors detected before rendering.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Image width or height is zero.
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },

    /// No samples requested.
    #[error("samples per pixel must be at least 1")]
    NoSamples,

    /// Field of view outside the open interval (0, 180) degrees.
    #[error("vertical field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    /// The camera basis cannot be constructed.
    #[error("camera basis is degenerate: {0}")]
    DegenerateCamera(&'static str),
}

impl RenderConfig {
    /// Aspect ratio (width / height) of the configured image.
    pub fn aspect_ratio(&self) -> f32 {
        self.image_width as f32 / self.image_height as f32
    }

    /// Check the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.image_width,
                height: self.image_height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::NoSamples);
        }
        if !self.camera.vfov.is_finite() || self.camera.vfov <= 0.0 || self.camera.vfov >= 180.0 {
            return Err(ConfigError::InvalidFov(self.camera.vfov));
        }

        let view = self.camera.look_from - self.camera.look_at;
        if view.length_squared() == 0.0 {
            return Err(ConfigError::DegenerateCamera(
                "look_from and look_at coincide",
            ));
        }
        if self.camera.view_up.cross(view).length_squared() == 0.0 {
            return Err(ConfigError::DegenerateCamera(
                "view_up is parallel to the view direction",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RenderConfig {
        RenderConfig {
            image_width: 400,
            image_height: 200,
            samples_per_pixel: 100,
            max_depth: 50,
            seed: 0,
            camera: CameraConfig {
                look_from: Vec3A::new(-2.0, 2.0, 1.0),
                look_at: Vec3A::new(0.0, 0.0, -1.0),
                view_up: Vec3A::Y,
                vfov: 90.0,
            },
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let mut config = valid();
        config.image_height = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn zero_samples_are_rejected() {
        let mut config = valid();
        config.samples_per_pixel = 0;
        assert!(matches!(config.validate(), Err(ConfigError::NoSamples)));
    }

    #[test]
    fn out_of_range_fov_is_rejected() {
        let mut config = valid();
        config.camera.vfov = 180.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidFov(_))));
    }

    #[test]
    fn degenerate_view_is_rejected() {
        let mut config = valid();
        config.camera.look_at = config.camera.look_from;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DegenerateCamera(_))
        ));

        let mut config = valid();
        config.camera.look_from = Vec3A::new(0.0, 1.0, -1.0);
        config.camera.look_at = Vec3A::new(0.0, 0.0, -1.0);
        config.camera.view_up = Vec3A::Y;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DegenerateCamera(_))
        ));
    }

    #[test]
    fn max_depth_zero_is_a_valid_rendering_mode() {
        // Depth 0 renders sky plus black silhouettes; it is not an error.
        let mut config = valid();
        config.max_depth = 0;
        assert!(config.validate().is_ok());
    }
}
