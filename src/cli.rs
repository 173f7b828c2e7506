use crate::error::{Error, Result};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub fov_degree: f32,
    pub nthread: usize,
    pub max_depth: usize,
    pub help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            output: PathBuf::from("out.ppm"),
            width: 1024,
            height: 768,
            fov_degree: 60.0,
            nthread: num_cpus::get(),
            max_depth: 10,
            help: false,
        }
    }
}

fn option_table() -> getopts::Options {
    let mut opts = getopts::Options::new();
    opts.optopt("o", "output", "output PPM file (default out.ppm)", "FILE");
    opts.optopt("W", "width", "image width in pixels (default 1024)", "PX");
    opts.optopt("H", "height", "image height in pixels (default 768)", "PX");
    opts.optopt("", "fov", "vertical field of view in degrees (default 60)", "DEG");
    opts.optopt("j", "threads", "number of render threads (default: all cores)", "N");
    opts.optopt("d", "max-depth", "recursion limit for secondary rays (default 10)", "N");
    opts.optflag("", "help", "print this help");
    opts
}

pub fn usage(program: &str) -> String {
    option_table().usage(&format!("Usage: {} [options]", program))
}

fn parse_value<T: FromStr>(
    matches: &getopts::Matches,
    name: &'static str,
    default: T,
    valid: impl Fn(&T) -> bool,
) -> Result<T> {
    match matches.opt_str(name) {
        None => Ok(default),
        Some(value) => match value.parse::<T>() {
            Ok(v) if valid(&v) => Ok(v),
            _ => Err(Error::InvalidOption { name, value }),
        },
    }
}

impl Options {
    /// Parses command line arguments, not including the program name.
    pub fn parse<S: AsRef<std::ffi::OsStr>>(args: &[S]) -> Result<Self> {
        let matches = option_table().parse(args)?;
        let default = Options::default();
        Ok(Options {
            output: matches.opt_str("output").map_or(default.output, PathBuf::from),
            width: parse_value(&matches, "width", default.width, |w| *w > 0)?,
            height: parse_value(&matches, "height", default.height, |h| *h > 0)?,
            fov_degree: parse_value(&matches, "fov", default.fov_degree, |f| {
                *f > 0.0 && *f < 180.0
            })?,
            nthread: parse_value(&matches, "threads", default.nthread, |n| *n > 0)?,
            max_depth: parse_value(&matches, "max-depth", default.max_depth, |_| true)?,
            help: matches.opt_present("help"),
        })
    }
}
