use thiserror::Error;

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, MergeError>;

/// Coarse classification of a failed merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind{
    Decode,
    Encode,
    Resource,
}

#[derive(Error, Debug)]
pub enum MergeError{
    #[error("Mergeimg: no input images given")]
    NoInputs,

    #[error("Mergeimg: could not decode {path:?}: {source}")]
    Decode{
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Mergeimg: could not save {path:?}: {source}")]
    Encode{
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Mergeimg: cannot allocate a {width}x{height} canvas")]
    Resource{
        width: u64,
        height: u64,
    },
}

impl MergeError{
    pub fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self{
        Self::Decode{ path: path.into(), source }
    }

    pub fn encode(path: impl Into<PathBuf>, source: image::ImageError) -> Self{
        Self::Encode{ path: path.into(), source }
    }

    /// An empty input list can only surface as a decode failure at the
    /// string boundary, so it is classified with them.
    pub fn kind(&self) -> ErrorKind{
        match self{
            Self::NoInputs | Self::Decode{ .. } => ErrorKind::Decode,
            Self::Encode{ .. } => ErrorKind::Encode,
            Self::Resource{ .. } => ErrorKind::Resource,
        }
    }
}

#[cfg(test)]
mod tests{

    use super::*;

    use std::io;

    #[test]
    fn test_kind(){
        let io_err = || image::ImageError::IoError(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(MergeError::decode("a.png", io_err()).kind(), ErrorKind::Decode);
        assert_eq!(MergeError::encode("out.png", io_err()).kind(), ErrorKind::Encode);
        assert_eq!(MergeError::NoInputs.kind(), ErrorKind::Decode);
        assert_eq!(MergeError::Resource{ width: 1, height: 2 }.kind(), ErrorKind::Resource);
    }

    #[test]
    fn test_display_names_path(){
        let io_err = image::ImageError::IoError(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let msg = MergeError::decode("missing.png", io_err).to_string();
        assert!(msg.contains("missing.png"));
        assert!(msg.contains("gone"));
    }
}
