use crate::*;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Linear RGB framebuffer, row-major.
pub struct Image {
    w: u32,
    h: u32,
    buf: Vec<RGB>,
}

impl Image {
    pub fn new(w: u32, h: u32) -> Self {
        let mut buf = Vec::new();
        buf.resize((w * h) as usize, RGB::black());
        Image { w, h, buf }
    }

    pub fn at(&self, x: u32, y: u32) -> &RGB {
        &self.buf[(y * self.w + x) as usize]
    }

    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut RGB {
        &mut self.buf[(y * self.w + x) as usize]
    }

    pub fn row_mut(&mut self, y: u32) -> &mut [RGB] {
        let start = (y * self.w) as usize;
        &mut self.buf[start..start + self.w as usize]
    }

    pub fn w(&self) -> u32 {
        self.w
    }
    pub fn h(&self) -> u32 {
        self.h
    }

    /// Binary PPM (P6): tone mapped, 8 bits per channel.
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.w, self.h)?;
        let body: Vec<u8> = self.buf.iter().flat_map(|c| c.to_bytes().to_vec()).collect();
        out.write_all(&body)?;
        out.flush()
    }

    pub fn save_ppm<P: AsRef<Path>>(&self, path: P) -> error::Result<()> {
        let file = std::fs::File::create(path)?;
        let mut out = BufWriter::new(file);
        self.write_ppm(&mut out)?;
        Ok(())
    }
}
