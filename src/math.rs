use nalgebra::{Point3, Vector3};
pub type P3 = Point3<f32>;
pub type V3 = Vector3<f32>;

/// Mirrors `i` about the normal `n`.
pub fn reflect(i: &V3, n: &V3) -> V3 {
    i - n * 2.0 * i.dot(n)
}

/// Bends `i` through a surface with normal `n` by Snell's law.
///
/// `eta_t` is the index on the far side of the surface and `eta_i` the index
/// the ray travels in. A ray arriving from inside (against the normal) is
/// handled by flipping the normal and swapping the indices. Under total
/// internal reflection there is no transmitted ray and `(1, 0, 0)` is returned.
pub fn refract(i: &V3, n: &V3, eta_t: f32, eta_i: f32) -> V3 {
    let cosi = -i.dot(n).min(1.0).max(-1.0);
    if cosi < 0.0 {
        return refract(i, &-n, eta_i, eta_t);
    }
    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        V3::x()
    } else {
        i * eta + n * (eta * cosi - k.sqrt())
    }
}

/// Nudges `p` off the surface so a ray leaving along `dir` does not hit it again.
pub fn offset_origin(p: &P3, dir: &V3, n: &V3, eps: f32) -> P3 {
    if dir.dot(n) < 0.0 {
        p - n * eps
    } else {
        p + n * eps
    }
}
