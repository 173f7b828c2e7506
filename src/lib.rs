pub mod math;
pub use math::*;

pub mod ray;
pub use ray::Ray;

pub mod rgb;
pub use rgb::RGB;

pub mod camera;
pub mod cli;
pub mod error;
pub mod example_scenes;
pub mod image;
pub mod manager;
pub mod material;
pub mod object;
pub mod renderer;
pub mod scene;
pub mod shape;
