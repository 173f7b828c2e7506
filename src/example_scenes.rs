use crate::*;
use camera::PinHole;
use material::{Albedo, Material};
use object::SimpleObject;
use scene::{Light, Scene};
use shape::{Checkerboard, Sphere};

pub fn glass() -> Material {
    Material::new(1.01, Albedo::new(0.0, 0.5, 0.1, 0.8), RGB::new(0.6, 0.8, 0.7), 125.0)
}

pub fn red_rubber() -> Material {
    Material::new(1.0, Albedo::new(0.9, 0.1, 0.0, 0.0), RGB::new(0.4, 0.1, 0.3), 10.0)
}

pub fn purple_rubber() -> Material {
    Material::new(1.0, Albedo::new(0.9, 0.1, 0.4, 0.0), RGB::new(0.3, 0.1, 0.4), 10.0)
}

pub fn mirror() -> Material {
    Material::new(1.0, Albedo::new(0.0, 10.0, 0.8, 0.0), RGB::new(1.0, 1.0, 1.0), 1425.0)
}

/// Four spheres over a checkerboard, lit by five point lights.
pub fn make_spheres() -> (PinHole, Scene) {
    let ball = |x: f32, y: f32, z: f32, radius: f32, material: Material| SimpleObject {
        shape: Sphere::new(P3::new(x, y, z), radius),
        material,
    };
    let objects = vec![
        ball(1.0, -1.5, -12.0, 3.0, glass()),
        ball(-3.5, 1.5, -18.0, 2.0, red_rubber()),
        ball(3.5, -1.5, -24.0, 2.0, purple_rubber()),
        ball(7.0, 5.0, -18.0, 4.0, mirror()),
    ];

    let lights = vec![
        Light::new(P3::new(-10.0, 10.0, 20.0), 1.4),
        Light::new(P3::new(-30.0, -30.0, 20.0), 1.2),
        Light::new(P3::new(-20.0, 20.0, 20.0), 1.5),
        Light::new(P3::new(30.0, 50.0, -25.0), 0.8),
        Light::new(P3::new(30.0, 20.0, 30.0), 3.0),
    ];

    let scene = Scene::new(objects, lights).set_floor(Checkerboard::default());
    let camera = PinHole::new(P3::origin(), 60.0);
    (camera, scene)
}

#[test]
fn spheres_scene_layout() {
    let (_, scene) = make_spheres();
    assert_eq!(scene.objects().len(), 4);
    assert_eq!(scene.lights().len(), 5);
    assert!(scene.floor().is_some());
    assert!(scene.lights().iter().all(|l| l.intensity >= 0.0));
}
