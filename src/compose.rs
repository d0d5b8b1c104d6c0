//! Stacking of decoded rasters onto one black canvas.
//!
//! Every input raster is held in memory until the last blit is done, so peak
//! memory is the sum of all decoded inputs (as RGBA8) plus the canvas itself.

use crate::{
    error::{ MergeError, Result },
    timer::Timer,
};

use image::{
    imageops,
    ImageReader,
    Limits,
    Rgba,
    RgbaImage,
};

use std::path::Path;

pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation{
    /// Top to bottom.
    Portrait,
    /// Left to right.
    Landscape,
}

impl Orientation{
    /// `0` means landscape, every other value portrait.
    pub fn from_flag(flag: i64) -> Self{
        if flag == 0 { Self::Landscape } else { Self::Portrait }
    }

    /// Size of a `w` x `h` raster along the stacking axis.
    pub fn stacking_extent(self, w: u32, h: u32) -> u32{
        match self{
            Self::Portrait => h,
            Self::Landscape => w,
        }
    }

    /// Top left corner of a raster placed `offset` pixels down the stacking axis.
    pub fn position(self, offset: u32) -> (u32, u32){
        match self{
            Self::Portrait => (0, offset),
            Self::Landscape => (offset, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanvasExtent{
    pub width: u32,
    pub height: u32,
}

impl CanvasExtent{
    /// Account for one more `w` x `h` raster: sum along the stacking axis,
    /// max across it.
    pub fn grow(&mut self, orientation: Orientation, w: u32, h: u32) -> Result<()>{
        let (width, height) = (self.width as u64, self.height as u64);
        let overflow = || MergeError::Resource{
            width: width + w as u64,
            height: height + h as u64,
        };
        match orientation{
            Orientation::Portrait => {
                self.height = self.height.checked_add(h).ok_or_else(overflow)?;
                self.width = self.width.max(w);
            },
            Orientation::Landscape => {
                self.width = self.width.checked_add(w).ok_or_else(overflow)?;
                self.height = self.height.max(h);
            },
        }
        Ok(())
    }

    pub fn of(orientation: Orientation, sizes: &[(u32, u32)]) -> Result<Self>{
        let mut extent = Self::default();
        for (w, h) in sizes{
            extent.grow(orientation, *w, *h)?;
        }
        Ok(extent)
    }
}

/// Offsets along the stacking axis at which each raster starts.
/// They partition the axis: each one is the previous plus that raster's extent.
pub fn stack_offsets(orientation: Orientation, sizes: &[(u32, u32)]) -> Vec<u32>{
    let mut offset = 0u32;
    sizes.iter().map(|(w, h)| {
        let at = offset;
        offset = offset.saturating_add(orientation.stacking_extent(*w, *h));
        at
    }).collect()
}

/// Decode without any size cap: inputs are only bounded by available memory,
/// the same as the canvas.
pub fn decode(path: &Path) -> Result<RgbaImage>{
    decode_with_limits(path, Limits::no_limits())
}

pub fn decode_with_limits(path: &Path, limits: Limits) -> Result<RgbaImage>{
    let mut reader = ImageReader::open(path)
        .map_err(|e| MergeError::decode(path, image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| MergeError::decode(path, image::ImageError::IoError(e)))?;
    reader.limits(limits);
    let img = reader.decode().map_err(|e| MergeError::decode(path, e))?;
    Ok(img.into_rgba8())
}

/// Allocate a canvas filled with [`BACKGROUND`], reporting a failed
/// allocation as an error rather than aborting.
pub fn allocate_canvas(extent: CanvasExtent) -> Result<RgbaImage>{
    let CanvasExtent{ width, height } = extent;
    let err = || MergeError::Resource{ width: width as u64, height: height as u64 };
    let pixels = (width as usize).checked_mul(height as usize).ok_or_else(err)?;
    let len = pixels.checked_mul(4).filter(|len| *len <= isize::MAX as usize).ok_or_else(err)?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| err())?;
    buf.extend(std::iter::repeat(BACKGROUND.0).take(pixels).flatten());
    RgbaImage::from_raw(width, height, buf).ok_or_else(err)
}

/// Decode every file in order and stack the results.
pub fn compose<P: AsRef<Path>>(files: &[P], orientation: Orientation) -> Result<RgbaImage>{
    if files.is_empty(){
        return Err(MergeError::NoInputs);
    }
    let mut timer = Timer::new();
    let mut rasters = Vec::with_capacity(files.len());
    let mut extent = CanvasExtent::default();
    for file in files{
        let file = file.as_ref();
        let raster = decode(file)?;
        log::debug!("Decoded {:?}: {}x{}", file, raster.width(), raster.height());
        extent.grow(orientation, raster.width(), raster.height())?;
        rasters.push(raster);
    }
    timer.lap("Decode");
    let canvas = stack(&rasters, extent, orientation)?;
    timer.lap("Stack");
    Ok(canvas)
}

/// Stack rasters that are already in memory.
pub fn compose_rasters(rasters: &[RgbaImage], orientation: Orientation) -> Result<RgbaImage>{
    if rasters.is_empty(){
        return Err(MergeError::NoInputs);
    }
    let sizes = rasters.iter().map(|r| r.dimensions()).collect::<Vec<_>>();
    let extent = CanvasExtent::of(orientation, &sizes)?;
    stack(rasters, extent, orientation)
}

fn stack(rasters: &[RgbaImage], extent: CanvasExtent, orientation: Orientation) -> Result<RgbaImage>{
    log::debug!("Canvas: {}x{} ({:?})", extent.width, extent.height, orientation);
    let mut canvas = allocate_canvas(extent)?;
    let sizes = rasters.iter().map(|r| r.dimensions()).collect::<Vec<_>>();
    for (raster, offset) in rasters.iter().zip(stack_offsets(orientation, &sizes)){
        let (x, y) = orientation.position(offset);
        log::trace!("Blit {}x{} at ({x}, {y})", raster.width(), raster.height());
        imageops::overlay(&mut canvas, raster, x as i64, y as i64);
    }
    Ok(canvas)
}
