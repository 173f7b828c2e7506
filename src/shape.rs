use crate::*;

#[derive(Clone, Debug)]
pub struct Hit {
    pub dist: f32,
    pub pos: P3,
    pub gnorm: V3,
}

#[derive(Clone, Debug)]
pub struct Sphere {
    pub center: P3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: P3, radius: f32) -> Self {
        assert!(radius > 0.0);
        Sphere { center, radius }
    }

    /// Distance along `ray` to the nearest non-negative crossing of the surface.
    ///
    /// When the origin is inside the sphere this is the exit point.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let rel_c = self.center - ray.origin;
        let tca = rel_c.dot(&ray.dir);
        let d2 = rel_c.norm_squared() - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }
        let thc = (r2 - d2).sqrt();
        let t0 = tca - thc;
        let t1 = tca + thc;
        let t = if t0 < 0.0 { t1 } else { t0 };
        if t < 0.0 {
            None
        } else {
            Some(t)
        }
    }

    pub fn make_hit(&self, ray: &Ray, dist: f32) -> Hit {
        let pos = ray.at(dist);
        Hit {
            dist,
            pos,
            gnorm: (pos - self.center).normalize(),
        }
    }
}

/// A horizontal checkered tile, bounded in x and z.
#[derive(Clone, Debug)]
pub struct Checkerboard {
    pub height: f32,
    /// The tile covers `-half_width < x < half_width`.
    pub half_width: f32,
    /// The tile covers `z_far < z < z_near`.
    pub z_near: f32,
    pub z_far: f32,
    pub odd: RGB,
    pub even: RGB,
}

impl Checkerboard {
    /// Rays closer to parallel than this never hit the plane.
    pub const PARALLEL_EPS: f32 = 1e-3;

    pub fn test_hit(&self, ray: &Ray) -> Option<Hit> {
        if ray.dir[1].abs() <= Self::PARALLEL_EPS {
            return None;
        }
        let dist = -(ray.origin[1] - self.height) / ray.dir[1];
        let pos = ray.at(dist);
        if dist > 0.0
            && pos[0].abs() < self.half_width
            && pos[2] < self.z_near
            && pos[2] > self.z_far
        {
            Some(Hit {
                dist,
                pos,
                gnorm: V3::y(),
            })
        } else {
            None
        }
    }

    pub fn color_at(&self, pos: &P3) -> RGB {
        // offset keeps the x cells from folding over at the origin
        let cell = (0.5 * pos[0] + 1000.0).floor() as i64 + (0.5 * pos[2]).floor() as i64;
        if cell & 1 == 1 {
            self.odd
        } else {
            self.even
        }
    }
}

impl Default for Checkerboard {
    fn default() -> Self {
        Checkerboard {
            height: -5.0,
            half_width: 10.0,
            z_near: -10.0,
            z_far: -30.0,
            odd: RGB::all(0.3),
            even: RGB::all(0.1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn forward() -> Ray {
        Ray::new(P3::origin(), V3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn sphere_entry_distance() {
        let s = Sphere::new(P3::new(0.0, 0.0, -10.0), 2.0);
        let d = s.intersect(&forward()).unwrap();
        assert!(approx_eq!(f32, d, 8.0, epsilon = 1e-5));
        let hit = s.make_hit(&forward(), d);
        assert!(approx_eq!(f32, hit.gnorm[2], 1.0, epsilon = 1e-5));
    }

    #[test]
    fn sphere_exit_distance_from_inside() {
        let s = Sphere::new(P3::new(0.0, 0.0, -1.0), 3.0);
        let d = s.intersect(&forward()).unwrap();
        assert!(approx_eq!(f32, d, 4.0, epsilon = 1e-5));
    }

    #[test]
    fn sphere_miss() {
        let behind = Sphere::new(P3::new(0.0, 0.0, 10.0), 2.0);
        assert!(behind.intersect(&forward()).is_none());
        let aside = Sphere::new(P3::new(5.0, 0.0, -10.0), 2.0);
        assert!(aside.intersect(&forward()).is_none());
    }

    #[test]
    fn sphere_grazing_hit() {
        let s = Sphere::new(P3::new(1.0, 0.0, -5.0), 1.0);
        let d = s.intersect(&forward()).unwrap();
        assert!(approx_eq!(f32, d, 5.0, epsilon = 1e-4));
    }

    #[test]
    fn checkerboard_hit_inside_tile() {
        let board = Checkerboard::default();
        let ray = Ray::new(P3::origin(), V3::new(0.0, -1.0, -4.0).normalize());
        let hit = board.test_hit(&ray).unwrap();
        assert!(approx_eq!(f32, hit.pos[1], -5.0, epsilon = 1e-4));
        assert!(approx_eq!(f32, hit.pos[2], -20.0, epsilon = 1e-3));
        assert_eq!(hit.gnorm, V3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn checkerboard_misses() {
        let board = Checkerboard::default();
        // near parallel
        let flat = Ray::new(P3::origin(), V3::new(0.0, -0.0005, -1.0).normalize());
        assert!(board.test_hit(&flat).is_none());
        // hits the plane outside the tile
        let short = Ray::new(P3::origin(), V3::new(0.0, -1.0, -1.0).normalize());
        assert!(board.test_hit(&short).is_none());
        let wide = Ray::new(P3::origin(), V3::new(3.0, -1.0, -4.0).normalize());
        assert!(board.test_hit(&wide).is_none());
        // plane is behind the ray
        let up = Ray::new(P3::origin(), V3::new(0.0, 1.0, -4.0).normalize());
        assert!(board.test_hit(&up).is_none());
    }

    #[test]
    fn checkerboard_parity() {
        let board = Checkerboard::default();
        assert_eq!(board.color_at(&P3::new(0.0, -5.0, 0.0)), RGB::all(0.1));
        assert_eq!(board.color_at(&P3::new(1.0, -5.0, 0.0)), RGB::all(0.1));
        assert_eq!(board.color_at(&P3::new(2.0, -5.0, 0.0)), RGB::all(0.3));
        assert_eq!(board.color_at(&P3::new(0.0, -5.0, -1.0)), RGB::all(0.3));
        assert_eq!(board.color_at(&P3::new(-1.0, -5.0, -2.0)), RGB::all(0.1));
    }
}
