use super::*;

/// Radiance arriving along `ray`, traced recursively from `depth`.
///
/// Local Phong lighting from every unshadowed light is mixed with the
/// reflected and refracted radiance according to the material albedo.
/// Secondary rays with a zero albedo weight are not traced.
pub fn radiance(scene: &Scene, ray: &Ray, depth: usize, config: &RenderConfig) -> RGB {
    if depth > config.max_depth {
        return config.background;
    }
    let hit = match scene.test_hit(ray) {
        Some(hit) => hit,
        None => return config.background,
    };
    let pos = hit.hit.pos;
    let n = hit.hit.gnorm;
    let material = hit.material;
    let albedo = material.albedo;

    let reflect_color = if albedo.reflect != 0.0 {
        let dir = reflect(&ray.dir, &n).normalize();
        let origin = offset_origin(&pos, &dir, &n, config.epsilon);
        radiance(scene, &Ray::new(origin, dir), depth + 1, config)
    } else {
        RGB::black()
    };

    let refract_color = if albedo.refract != 0.0 {
        let dir = refract(&ray.dir, &n, material.refractive_index, config.ambient_index).normalize();
        let origin = offset_origin(&pos, &dir, &n, config.epsilon);
        radiance(scene, &Ray::new(origin, dir), depth + 1, config)
    } else {
        RGB::black()
    };

    let mut diffuse = 0.0;
    let mut specular = 0.0;
    for light in scene.lights() {
        let to_light = light.pos - pos;
        let light_dist = to_light.norm();
        let light_dir = to_light / light_dist;

        let shadow_origin = offset_origin(&pos, &light_dir, &n, config.epsilon);
        if scene.occluded(&shadow_origin, &light_dir, light_dist) {
            continue;
        }

        diffuse += light.intensity * light_dir.dot(&n).max(0.0);
        specular += (-reflect(&-light_dir, &n).dot(&ray.dir))
            .max(0.0)
            .powf(material.specular_exponent)
            * light.intensity;
    }

    material.diffuse_color * (diffuse * albedo.diffuse)
        + RGB::white() * (specular * albedo.specular)
        + reflect_color * albedo.reflect
        + refract_color * albedo.refract
}
