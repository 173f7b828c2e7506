use crate::*;

/// Pinhole camera looking down -z with +y up.
#[derive(Clone, Debug)]
pub struct PinHole {
    origin: P3,
    half_tan: f32,
}

impl PinHole {
    pub fn new(origin: P3, fov_degree: f32) -> Self {
        assert!(fov_degree > 0.0 && fov_degree < 180.0);
        let fov_rad = fov_degree * std::f32::consts::PI / 180.0;
        PinHole {
            origin,
            half_tan: (fov_rad / 2.0).tan(),
        }
    }

    /// Primary ray through the center of pixel (`x`, `y`) of a `w`×`h` film.
    /// `fov` spans the film height.
    pub fn ray_to(&self, x: u32, y: u32, w: u32, h: u32) -> Ray {
        let (w, h) = (w as f32, h as f32);
        let dx = x as f32 + 0.5 - w / 2.0;
        let dy = -(y as f32 + 0.5 - h / 2.0);
        let dz = -h / (2.0 * self.half_tan);
        Ray::new(self.origin, V3::new(dx, dy, dz).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn rays_span_the_film() {
        let cam = PinHole::new(P3::origin(), 90.0);
        let (w, h) = (4, 2);
        let center = cam.ray_to(2, 1, w, h);
        assert!(center.dir[0] > 0.0 && center.dir[1] < 0.0 && center.dir[2] < 0.0);
        assert!(approx_eq!(f32, center.dir.norm(), 1.0, epsilon = 1e-6));

        let top_left = cam.ray_to(0, 0, w, h);
        assert!(top_left.dir[0] < 0.0 && top_left.dir[1] > 0.0);
        let bottom_right = cam.ray_to(3, 1, w, h);
        assert!(bottom_right.dir[0] > 0.0 && bottom_right.dir[1] < 0.0);
        assert_eq!(top_left.origin, P3::origin());
    }

    #[test]
    fn fov_spans_height() {
        // 90 degrees: the film edge sits at 45 degrees from the axis
        let cam = PinHole::new(P3::origin(), 90.0);
        let ray = cam.ray_to(0, 0, 1, 1000);
        let v = ray.dir;
        let angle = (v[1] / -v[2]).atan();
        assert!(approx_eq!(f32, angle, std::f32::consts::FRAC_PI_4, epsilon = 1e-2));
    }
}
