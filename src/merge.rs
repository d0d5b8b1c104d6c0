use crate::{
    compose::{ self, Orientation },
    error::{ MergeError, Result },
    timer::Timer,
};

use image::{ DynamicImage, RgbaImage };

use std::{
    fmt,
    path::{ Path, PathBuf },
};

pub const LIST_SEPARATOR: char = ';';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStatus{
    Success,
    Error,
}

impl MergeStatus{
    pub fn as_str(self) -> &'static str{
        match self{
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for MergeStatus{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result{
        f.write_str(self.as_str())
    }
}

impl<T> From<&Result<T>> for MergeStatus{
    fn from(res: &Result<T>) -> Self{
        if res.is_ok() { Self::Success } else { Self::Error }
    }
}

/// Every `;` separated segment becomes one path, empty segments included.
pub fn split_list(list_files: &str) -> Vec<PathBuf>{
    list_files.split(LIST_SEPARATOR).map(PathBuf::from).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionRequest{
    pub files: Vec<PathBuf>,
    pub orientation: Orientation,
    pub output: PathBuf,
}

impl CompositionRequest{
    pub fn new(files: Vec<PathBuf>, orientation: Orientation, output: impl Into<PathBuf>) -> Self{
        Self{ files, orientation, output: output.into() }
    }

    pub fn parse(list_files: &str, is_portrait_mode: i64, result_file_path: impl Into<PathBuf>) -> Self{
        Self::new(split_list(list_files), Orientation::from_flag(is_portrait_mode), result_file_path)
    }

    pub fn compose(&self) -> Result<RgbaImage>{
        compose::compose(&self.files, self.orientation)
    }

    pub fn run(&self) -> Result<()>{
        let canvas = self.compose()?;
        save(canvas, &self.output)
    }
}

/// Encode the canvas in the format its path's extension names.
/// The canvas is opaque, so it is written as RGB.
pub fn save(canvas: RgbaImage, path: &Path) -> Result<()>{
    let mut timer = Timer::new();
    let rgb = DynamicImage::ImageRgba8(canvas).into_rgb8();
    rgb.save(path).map_err(|e| MergeError::encode(path, e))?;
    timer.lap("Save");
    log::debug!("Saved {}x{} to {:?}", rgb.width(), rgb.height(), path);
    Ok(())
}

pub fn try_merge_image_files(list_files: &str, is_portrait_mode: i64, result_file_path: impl AsRef<Path>) -> Result<()>{
    CompositionRequest::parse(list_files, is_portrait_mode, result_file_path.as_ref()).run()
}

/// Merge the `;` separated image files into one image at `result_file_path`.
/// Returns `"Success"` or `"Error"`, nothing else.
pub fn merge_image_files(list_files: &str, is_portrait_mode: i32, result_file_path: &str) -> String{
    let res = try_merge_image_files(list_files, is_portrait_mode as i64, result_file_path);
    MergeStatus::from(&res).to_string()
}
