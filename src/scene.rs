use crate::*;

use material::Material;
use object::{ObjectHit, ObjectList, SimpleObject};
use shape::Checkerboard;

#[derive(Clone, Debug)]
pub struct Light {
    pub pos: P3,
    pub intensity: f32,
}

impl Light {
    pub fn new(pos: P3, intensity: f32) -> Self {
        Light { pos, intensity }
    }
}

pub struct Scene {
    objects: ObjectList,
    lights: Vec<Light>,
    floor: Option<Checkerboard>,
    horizon: f32,
}

impl Scene {
    /// Hits at or beyond this distance are treated as escaping rays.
    pub const DEFAULT_HORIZON: f32 = 1000.0;

    pub fn new(objects: Vec<SimpleObject>, lights: Vec<Light>) -> Self {
        Scene {
            objects: ObjectList::new(objects),
            lights,
            floor: None,
            horizon: Self::DEFAULT_HORIZON,
        }
    }

    pub fn set_floor(mut self, floor: Checkerboard) -> Self {
        self.floor = Some(floor);
        self
    }

    pub fn set_horizon(mut self, horizon: f32) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn objects(&self) -> &[SimpleObject] {
        &self.objects.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn floor(&self) -> Option<&Checkerboard> {
        self.floor.as_ref()
    }

    /// Nearest surface crossed by `ray`, spheres first and then the floor,
    /// which must be strictly nearer to win.
    pub fn test_hit(&self, ray: &Ray) -> Option<ObjectHit> {
        let mut nearest = self.objects.test_hit(ray);
        if let Some(floor) = &self.floor {
            let best = nearest.as_ref().map_or(std::f32::MAX, |h| h.hit.dist);
            if let Some(hit) = floor.test_hit(ray).filter(|h| h.dist < best) {
                let material = Material::default().with_diffuse_color(floor.color_at(&hit.pos));
                nearest = Some(ObjectHit { hit, material });
            }
        }
        nearest.filter(|h| h.hit.dist < self.horizon)
    }

    /// Whether any surface lies along `dir` from `origin` strictly closer than `dist`.
    pub fn occluded(&self, origin: &P3, dir: &V3, dist: f32) -> bool {
        let ray = Ray::new(*origin, *dir);
        self.test_hit(&ray)
            .map_or(false, |h| (h.hit.pos - *origin).norm() < dist)
    }

    /// Whether nothing blocks the straight path from `origin` to `target`.
    pub fn visible(&self, origin: &P3, target: &P3) -> bool {
        let r = target - origin;
        let dist = r.norm();
        !self.occluded(origin, &(r / dist), dist)
    }
}
