use std::ops::{Add, AddAssign, Mul, MulAssign, Sub};
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RGB {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RGB {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        RGB { r, g, b }
    }
    pub fn all(x: f32) -> Self {
        Self::new(x, x, x)
    }
    pub fn black() -> Self {
        Self::all(0.0)
    }
    pub fn white() -> Self {
        Self::all(1.0)
    }

    pub fn max(&self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Scales the color down so that no channel exceeds 1, keeping the hue.
    pub fn tone_map(&self) -> Self {
        let max = self.max();
        if max > 1.0 {
            *self * (1.0 / max)
        } else {
            *self
        }
    }

    /// Tone maps, clamps to [0, 1] and quantizes each channel to 8 bits.
    pub fn to_bytes(&self) -> [u8; 3] {
        let c = self.tone_map();
        let q = |x: f32| (255.0 * x.min(1.0).max(0.0)) as u8;
        [q(c.r), q(c.g), q(c.b)]
    }
}

impl<'a> Add<&'a Self> for RGB {
    type Output = Self;
    fn add(self, rhs: &'a Self) -> Self {
        RGB {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl Add for RGB {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.add(&rhs)
    }
}

impl AddAssign for RGB {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<'a> Sub<&'a Self> for RGB {
    type Output = Self;
    fn sub(self, rhs: &'a Self) -> Self {
        RGB {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
        }
    }
}

impl Sub for RGB {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.sub(&rhs)
    }
}

impl<'a> Mul<&'a Self> for RGB {
    type Output = Self;
    fn mul(self, rhs: &'a Self) -> Self {
        RGB {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
        }
    }
}

impl Mul for RGB {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.mul(&rhs)
    }
}

impl Mul<f32> for RGB {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        RGB {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

impl MulAssign<f32> for RGB {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn tone_map_keeps_in_range_colors() {
        let c = RGB::new(0.2, 1.0, 0.75);
        assert_eq!(c.tone_map(), c);
        assert_eq!(RGB::black().tone_map(), RGB::black());
    }

    #[test]
    fn tone_map_scales_by_max() {
        let c = RGB::new(2.0, 1.0, 0.5).tone_map();
        assert!(approx_eq!(f32, c.r, 1.0));
        assert!(approx_eq!(f32, c.g, 0.5));
        assert!(approx_eq!(f32, c.b, 0.25));
    }

    #[test]
    fn bytes_are_clamped() {
        assert_eq!(RGB::new(1.0, 0.0, 0.5).to_bytes(), [255, 0, 127]);
        assert_eq!(RGB::new(-0.5, 0.0, 4.0).to_bytes(), [0, 0, 255]);
        assert_eq!(RGB::new(2.0, 1.0, 0.5).to_bytes(), [255, 127, 63]);
    }

    #[test]
    fn arithmetic() {
        let mut c = RGB::new(0.5, 0.25, 1.0) * RGB::all(2.0) + RGB::all(1.0);
        assert_eq!(c, RGB::new(2.0, 1.5, 3.0));
        c *= 0.5;
        c += RGB::new(0.0, 0.25, 0.0);
        assert_eq!(c - RGB::all(1.0), RGB::new(0.0, 0.0, 0.5));
        assert_eq!(c.max(), 1.5);
    }
}
