use std::sync::Arc;
use whitted::example_scenes;
use whitted::image::Image;
use whitted::renderer::{RenderConfig, Renderer};

#[test]
fn spheres_scene_to_ppm() {
    let (camera, scene) = example_scenes::make_spheres();
    let (w, h) = (1024, 768);
    let mut image = Image::new(w, h);
    let config = RenderConfig {
        nthread: num_cpus::get(),
        ..Default::default()
    };
    Renderer.render(Arc::new(scene), &camera, &mut image, config);

    let mut out = Vec::new();
    image.write_ppm(&mut out).unwrap();
    let header = b"P6\n1024 768\n255\n";
    assert_eq!(&out[..header.len()], &header[..]);
    assert_eq!(out.len() - header.len(), 1024 * 768 * 3);

    // the top-left corner looks past every object
    assert_eq!(*image.at(0, 0), config.background);
    assert_eq!(&out[header.len()..header.len() + 3], &[76, 51, 76]);
    // the glass sphere sits in front of the camera, slightly right and down
    assert_ne!(*image.at(w / 2 + 20, h / 2 + 40), config.background);
}

#[test]
fn save_to_file() {
    let (camera, scene) = example_scenes::make_spheres();
    let mut image = Image::new(16, 12);
    Renderer.render(Arc::new(scene), &camera, &mut image, RenderConfig::default());

    let path = std::env::temp_dir().join(format!("whitted-{}.ppm", std::process::id()));
    image.save_ppm(&path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(bytes.starts_with(b"P6\n16 12\n255\n"));
    assert_eq!(bytes.len(), b"P6\n16 12\n255\n".len() + 16 * 12 * 3);
}
