//! Static catalog of per-platform icon requirements.
//!
//! Each platform ships a fixed list of output files with vendor-mandated
//! pixel sizes. The tables below are plain data so they can be diffed
//! directly against the platform vendor specs.

use std::path::{Path, PathBuf};

/// One required output file for a platform.
///
/// `file_name` is relative to the platform's output directory and may
/// contain subdirectories (e.g. `drawable-hdpi/icon.png`). `width` is the
/// square edge in pixels; `height`, when present, marks a wide asset that
/// is cropped to `width x height` after the square resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub file_name: &'static str,
    pub width: u32,
    pub height: Option<u32>,
}

const fn square(file_name: &'static str, width: u32) -> IconSpec {
    IconSpec {
        file_name,
        width,
        height: None,
    }
}

const fn wide(file_name: &'static str, width: u32, height: u32) -> IconSpec {
    IconSpec {
        file_name,
        width,
        height: Some(height),
    }
}

/// A target platform and its required icons.
#[derive(Debug, Clone, Copy)]
pub struct PlatformSpec {
    pub name: &'static str,
    pub icons: &'static [IconSpec],
}

impl PlatformSpec {
    /// Directory the platform's icons are written into, under the output root.
    pub fn output_dir(&self, target: &Path) -> PathBuf {
        target.join(self.name)
    }
}

/// Select platforms by name, or every platform for the sentinel `"all"`.
///
/// An unrecognized name yields an empty selection; that is zero work, not
/// an error.
pub fn select(requested: &str) -> Vec<&'static PlatformSpec> {
    if requested == "all" {
        CATALOG.iter().collect()
    } else {
        CATALOG.iter().filter(|p| p.name == requested).collect()
    }
}

/// The complete platform table, in generation order.
pub const CATALOG: &[PlatformSpec] = &[
    PlatformSpec {
        name: "ios",
        icons: IOS,
    },
    PlatformSpec {
        name: "android",
        icons: ANDROID,
    },
    PlatformSpec {
        name: "osx",
        icons: OSX,
    },
    PlatformSpec {
        name: "windows",
        icons: WINDOWS,
    },
];

const IOS: &[IconSpec] = &[
    square("icon-20.png", 20),
    square("icon-20@2x.png", 40),
    square("icon-20@3x.png", 60),
    square("icon-40.png", 40),
    square("icon-40@2x.png", 80),
    square("icon-50.png", 50),
    square("icon-50@2x.png", 100),
    square("icon-60@2x.png", 120),
    square("icon-60@3x.png", 180),
    square("icon-72.png", 72),
    square("icon-72@2x.png", 144),
    square("icon-76.png", 76),
    square("icon-76@2x.png", 152),
    square("icon-83.5@2x.png", 167),
    square("icon-1024.png", 1024),
    square("icon-small.png", 29),
    square("icon-small@2x.png", 58),
    square("icon-small@3x.png", 87),
    square("icon.png", 57),
    square("icon@2x.png", 114),
    square("AppIcon24x24@2x.png", 48),
    square("AppIcon27.5x27.5@2x.png", 55),
    square("AppIcon29x29@2x.png", 58),
    square("AppIcon29x29@3x.png", 87),
    square("AppIcon40x40@2x.png", 80),
    square("AppIcon44x44@2x.png", 88),
    square("AppIcon86x86@2x.png", 172),
    square("AppIcon98x98@2x.png", 196),
];

const ANDROID: &[IconSpec] = &[
    square("drawable/icon.png", 96),
    square("drawable-hdpi/icon.png", 72),
    square("drawable-ldpi/icon.png", 36),
    square("drawable-mdpi/icon.png", 48),
    square("drawable-xhdpi/icon.png", 96),
    square("drawable-xxhdpi/icon.png", 144),
    square("drawable-xxxhdpi/icon.png", 192),
    square("mipmap-hdpi/icon.png", 72),
    square("mipmap-ldpi/icon.png", 36),
    square("mipmap-mdpi/icon.png", 48),
    square("mipmap-xhdpi/icon.png", 96),
    square("mipmap-xxhdpi/icon.png", 144),
    square("mipmap-xxxhdpi/icon.png", 192),
];

const OSX: &[IconSpec] = &[
    square("icon-16x16.png", 16),
    square("icon-32x32.png", 32),
    square("icon-64x64.png", 64),
    square("icon-128x128.png", 128),
    square("icon-256x256.png", 256),
    square("icon-512x512.png", 512),
];

const WINDOWS: &[IconSpec] = &[
    square("StoreLogo.scale-100.png", 50),
    square("StoreLogo.scale-125.png", 63),
    square("StoreLogo.scale-140.png", 70),
    square("StoreLogo.scale-150.png", 75),
    square("StoreLogo.scale-180.png", 90),
    square("StoreLogo.scale-200.png", 100),
    square("StoreLogo.scale-240.png", 120),
    square("StoreLogo.scale-400.png", 200),
    square("Square44x44Logo.scale-100.png", 44),
    square("Square44x44Logo.scale-125.png", 55),
    square("Square44x44Logo.scale-140.png", 62),
    square("Square44x44Logo.scale-150.png", 66),
    square("Square44x44Logo.scale-200.png", 88),
    square("Square44x44Logo.scale-240.png", 106),
    square("Square44x44Logo.scale-400.png", 176),
    square("Square71x71Logo.scale-100.png", 71),
    square("Square71x71Logo.scale-125.png", 89),
    square("Square71x71Logo.scale-140.png", 99),
    square("Square71x71Logo.scale-150.png", 107),
    square("Square71x71Logo.scale-200.png", 142),
    square("Square71x71Logo.scale-240.png", 170),
    square("Square71x71Logo.scale-400.png", 284),
    square("Square150x150Logo.scale-100.png", 150),
    square("Square150x150Logo.scale-125.png", 188),
    square("Square150x150Logo.scale-140.png", 210),
    square("Square150x150Logo.scale-150.png", 225),
    square("Square150x150Logo.scale-200.png", 300),
    square("Square150x150Logo.scale-240.png", 360),
    square("Square150x150Logo.scale-400.png", 600),
    square("Square310x310Logo.scale-100.png", 310),
    square("Square310x310Logo.scale-125.png", 388),
    square("Square310x310Logo.scale-140.png", 434),
    square("Square310x310Logo.scale-150.png", 465),
    square("Square310x310Logo.scale-180.png", 558),
    square("Square310x310Logo.scale-200.png", 620),
    square("Square310x310Logo.scale-400.png", 1240),
    wide("Wide310x150Logo.scale-80.png", 248, 120),
    wide("Wide310x150Logo.scale-100.png", 310, 150),
    wide("Wide310x150Logo.scale-125.png", 388, 188),
    wide("Wide310x150Logo.scale-140.png", 434, 210),
    wide("Wide310x150Logo.scale-150.png", 465, 225),
    wide("Wide310x150Logo.scale-180.png", 558, 270),
    wide("Wide310x150Logo.scale-200.png", 620, 300),
    wide("Wide310x150Logo.scale-240.png", 744, 360),
    wide("Wide310x150Logo.scale-400.png", 1240, 600),
];
