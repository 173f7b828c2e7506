use log::*;
use std::sync::Arc;
use std::time::Instant;
use whitted::cli::{self, Options};
use whitted::error::Result;
use whitted::renderer::{RenderConfig, Renderer};
use whitted::*;

fn run(opts: &Options) -> Result<()> {
    let (_, scene) = example_scenes::make_spheres();
    let camera = camera::PinHole::new(P3::origin(), opts.fov_degree);
    info!(
        "scene: {} spheres, {} lights, floor: {}",
        scene.objects().len(),
        scene.lights().len(),
        scene.floor().is_some()
    );

    let config = RenderConfig {
        max_depth: opts.max_depth,
        nthread: opts.nthread,
        ..Default::default()
    };
    let mut image = image::Image::new(opts.width, opts.height);
    info!(
        "rendering {}x{} with {} threads",
        opts.width, opts.height, config.nthread
    );
    let start = Instant::now();
    Renderer.render(Arc::new(scene), &camera, &mut image, config);
    info!("rendered in {:.2?}", start.elapsed());

    image.save_ppm(&opts.output)?;
    info!("wrote {}", opts.output.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("whitted", String::as_str);
    let opts = match Options::parse(&args[1.min(args.len())..]) {
        Ok(opts) => opts,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", cli::usage(program));
            std::process::exit(2);
        }
    };
    if opts.help {
        println!("{}", cli::usage(program));
        return;
    }

    if let Err(e) = run(&opts) {
        error!("{}", e);
        std::process::exit(1);
    }
}
