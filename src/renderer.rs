use crate::camera::PinHole;
use crate::image::*;
use crate::manager::*;
use crate::scene::Scene;
use crate::*;

use log::*;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};

pub mod whitted;

#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    /// Rays deeper than this return the background.
    pub max_depth: usize,
    pub background: RGB,
    /// Offset along the normal for secondary ray origins.
    pub epsilon: f32,
    /// Refractive index of the medium the camera sits in.
    pub ambient_index: f32,
    pub nthread: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            max_depth: 10,
            background: RGB::new(0.3, 0.2, 0.3),
            epsilon: 1e-3,
            ambient_index: 1.0,
            nthread: 1,
        }
    }
}

pub struct Renderer;

impl Renderer {
    /// Fills `image` with the radiance seen through `camera`, one primary ray per pixel.
    /// Returns once every row is done.
    pub fn render(&self, scene: Arc<Scene>, camera: &PinHole, image: &mut Image, config: RenderConfig) {
        use std::thread;
        let (w, h) = (image.w(), image.h());
        let nthread = config.nthread.max(1);
        let manager = Arc::new(Mutex::new(Manager::new(h)));
        let (tx, rx) = mpsc::channel();
        let mut threads = vec![];
        for i in 0..nthread {
            let camera = camera.clone();
            let scene = scene.clone();
            let manager = manager.clone();
            let tx = tx.clone();
            let thread = thread::spawn(move || {
                Self::render_thread(&scene, &camera, w, h, config, i, manager, tx)
            });
            threads.push(thread);
        }
        drop(tx);

        for (row, pixels) in rx {
            image.row_mut(row).copy_from_slice(&pixels);
        }
        for thread in threads {
            if let Err(panic) = thread.join() {
                std::panic::resume_unwind(panic);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_thread(
        scene: &Scene,
        camera: &PinHole,
        w: u32,
        h: u32,
        config: RenderConfig,
        thread_id: usize,
        manager: Arc<Mutex<Manager>>,
        tx: Sender<(u32, Vec<RGB>)>,
    ) {
        debug!("render thread {} started", thread_id);
        let mut rows = 0;
        loop {
            let task = match manager.lock() {
                Ok(mut manager) => manager.next(thread_id),
                Err(_) => None,
            };
            let Task { row } = match task {
                Some(task) => task,
                None => break,
            };

            let pixels: Vec<RGB> = (0..w)
                .map(|x| {
                    let ray = camera.ray_to(x, row, w, h);
                    let radiance = whitted::radiance(scene, &ray, 0, &config);
                    if !radiance.is_finite() {
                        warn!("radiance is not finite at ({}, {}): {:?}", x, row, radiance);
                    }
                    radiance
                })
                .collect();
            if tx.send((row, pixels)).is_err() {
                break;
            }
            rows += 1;
        }
        debug!("render thread {} finished after {} rows", thread_id, rows);
    }
}
