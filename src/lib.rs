//! Stack a list of image files into one image, top to bottom (portrait) or
//! left to right (landscape), with the uncovered area left black.
//!
//! ```no_run
//! let status = mergeimg::merge_image_files("a.png;b.png", 1, "out.png");
//! assert!(status == "Success" || status == "Error");
//! ```
//!
//! All inputs are decoded into memory before the canvas is drawn, so memory
//! use grows with the summed size of the inputs. Decoding applies no size
//! cap of its own, so available memory is the only limit on input size.

pub mod compose;
pub mod error;
pub mod merge;
pub mod timer;

pub use compose::{ compose, compose_rasters, stack_offsets, CanvasExtent, Orientation };
pub use error::{ ErrorKind, MergeError, Result };
pub use merge::{ merge_image_files, save, split_list, try_merge_image_files, CompositionRequest, MergeStatus };
