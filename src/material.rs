use crate::*;

/// Weights of the four contributions mixed at a surface point.
///
/// They are plain weights and do not have to sum to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Albedo {
    pub diffuse: f32,
    pub specular: f32,
    pub reflect: f32,
    pub refract: f32,
}

impl Albedo {
    pub fn new(diffuse: f32, specular: f32, reflect: f32, refract: f32) -> Self {
        Albedo {
            diffuse,
            specular,
            reflect,
            refract,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub refractive_index: f32,
    pub albedo: Albedo,
    pub diffuse_color: RGB,
    pub specular_exponent: f32,
}

impl Material {
    pub fn new(
        refractive_index: f32,
        albedo: Albedo,
        diffuse_color: RGB,
        specular_exponent: f32,
    ) -> Self {
        Material {
            refractive_index,
            albedo,
            diffuse_color,
            specular_exponent,
        }
    }

    pub fn with_diffuse_color(self, diffuse_color: RGB) -> Self {
        Material {
            diffuse_color,
            ..self
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material {
            refractive_index: 1.0,
            albedo: Albedo::new(1.0, 0.0, 0.0, 0.0),
            diffuse_color: RGB::black(),
            specular_exponent: 0.0,
        }
    }
}
