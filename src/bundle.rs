//! Multi-resolution icon containers (.icns for osx, .ico for windows).
//!
//! Written on top of the same source image as the per-file outputs, but as
//! an opt-in extra so a plain run produces exactly the catalog's file set.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use icns::{IconFamily, PixelFormat};
use image::DynamicImage;
use image::imageops::FilterType;

/// Resolutions packed into the .icns family.
const ICNS_SIZES: &[u32] = &[16, 32, 64, 128, 256, 512];
/// Resolutions packed into the .ico directory.
const ICO_SIZES: &[u32] = &[16, 24, 32, 48, 64, 128, 256];

/// Errors from container assembly.
#[derive(Debug)]
pub enum BundleError {
    /// Failed to create the destination directory.
    DirectoryCreation(io::Error),
    /// Failed to open or decode the source image.
    ImageRead { path: PathBuf, reason: String },
    /// Failed to encode or write the container.
    Encode { path: PathBuf, reason: String },
}

impl fmt::Display for BundleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundleError::DirectoryCreation(e) => {
                write!(f, "Failed to create directory: {}", e)
            }
            BundleError::ImageRead { path, reason } => {
                write!(f, "Failed to read '{}': {}", path.display(), reason)
            }
            BundleError::Encode { path, reason } => {
                write!(f, "Failed to write '{}': {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for BundleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BundleError::DirectoryCreation(e) => Some(e),
            _ => None,
        }
    }
}

/// Assemble an ICNS icon family at `dest` from the source image.
pub fn write_icns(source: &Path, dest: &Path) -> Result<(), BundleError> {
    let image = open_source(source)?;

    let mut family = IconFamily::new();
    for &size in ICNS_SIZES {
        let rgba = image
            .resize_exact(size, size, FilterType::Lanczos3)
            .to_rgba8();
        let icon = icns::Image::from_data(PixelFormat::RGBA, size, size, rgba.into_raw())
            .map_err(|e| encode_error(dest, e))?;
        family
            .add_icon(&icon)
            .map_err(|e| encode_error(dest, e))?;
    }

    ensure_parent(dest)?;
    let file = File::create(dest).map_err(|e| encode_error(dest, e))?;
    family
        .write(BufWriter::new(file))
        .map_err(|e| encode_error(dest, e))
}

/// Assemble a multi-resolution ICO at `dest` from the source image.
pub fn write_ico(source: &Path, dest: &Path) -> Result<(), BundleError> {
    let image = open_source(source)?;

    let mut dir = ico::IconDir::new(ico::ResourceType::Icon);
    for &size in ICO_SIZES {
        let rgba = image
            .resize_exact(size, size, FilterType::Lanczos3)
            .to_rgba8();
        let icon = ico::IconImage::from_rgba_data(size, size, rgba.into_raw());
        let entry = ico::IconDirEntry::encode(&icon).map_err(|e| encode_error(dest, e))?;
        dir.add_entry(entry);
    }

    ensure_parent(dest)?;
    let file = File::create(dest).map_err(|e| encode_error(dest, e))?;
    dir.write(BufWriter::new(file))
        .map_err(|e| encode_error(dest, e))
}

fn open_source(source: &Path) -> Result<DynamicImage, BundleError> {
    image::open(source).map_err(|e| BundleError::ImageRead {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })
}

fn ensure_parent(dest: &Path) -> Result<(), BundleError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(BundleError::DirectoryCreation)?;
    }
    Ok(())
}

fn encode_error(dest: &Path, e: impl fmt::Display) -> BundleError {
    BundleError::Encode {
        path: dest.to_path_buf(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::io::BufReader;
    use tempfile::TempDir;

    fn write_source(path: &Path, size: u32) {
        RgbaImage::from_pixel(size, size, Rgba([80, 120, 200, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn icns_contains_every_size() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("icon.png");
        write_source(&source, 512);
        let dest = dir.path().join("osx/icon.icns");

        write_icns(&source, &dest).unwrap();

        let file = File::open(&dest).unwrap();
        let family = IconFamily::read(BufReader::new(file)).unwrap();
        assert_eq!(family.available_icons().len(), ICNS_SIZES.len());
    }

    #[test]
    fn ico_contains_every_size() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("icon.png");
        write_source(&source, 256);
        let dest = dir.path().join("windows/icon.ico");

        write_ico(&source, &dest).unwrap();

        let file = File::open(&dest).unwrap();
        let read = ico::IconDir::read(file).unwrap();
        let mut widths: Vec<u32> = read.entries().iter().map(|e| e.width()).collect();
        widths.sort_unstable();
        assert_eq!(widths, ICO_SIZES.to_vec());
    }

    #[test]
    fn missing_source_is_an_error() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("icon.ico");

        let result = write_ico(&dir.path().join("nope.png"), &dest);

        assert!(matches!(result, Err(BundleError::ImageRead { .. })));
        assert!(!dest.exists());
    }
}
