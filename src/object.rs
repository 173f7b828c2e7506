use crate::*;

pub struct ObjectHit {
    pub hit: shape::Hit,
    pub material: material::Material,
}

pub struct SimpleObject {
    pub shape: shape::Sphere,
    pub material: material::Material,
}

/// Objects tested one after another; no acceleration structure.
pub struct ObjectList {
    pub objects: Vec<SimpleObject>,
}

impl ObjectList {
    pub fn new(objects: Vec<SimpleObject>) -> Self {
        ObjectList { objects }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Nearest object crossed by `ray`. Ties keep the earlier object.
    pub fn test_hit(&self, ray: &ray::Ray) -> Option<ObjectHit> {
        let mut nearest: Option<(f32, &SimpleObject)> = None;
        for o in self.objects.iter() {
            if let Some(dist) = o.shape.intersect(ray) {
                if nearest.map_or(true, |(best, _)| dist < best) {
                    nearest = Some((dist, o));
                }
            }
        }
        nearest.map(|(dist, o)| ObjectHit {
            hit: o.shape.make_hit(ray, dist),
            material: o.material,
        })
    }
}
