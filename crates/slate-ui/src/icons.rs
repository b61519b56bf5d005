//! Menu icons.
//!
//! Each icon is looked up as `<name>.png`, or `<name>_dark.png` under the
//! dark theme. When the dark variant is missing the light one is loaded
//! and color-inverted instead. Anything that fails to load simply leaves
//! that menu entry without an icon.

use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use slate_core::ThemeName;

/// Icons are scaled down toward this edge length.
pub const ICON_TARGET: u32 = 16;

/// The logical icons of the file menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    New,
    Open,
    Save,
    SaveAs,
    Exit,
}

impl IconKind {
    pub const ALL: [IconKind; 5] = [
        IconKind::New,
        IconKind::Open,
        IconKind::Save,
        IconKind::SaveAs,
        IconKind::Exit,
    ];

    /// File stem of the light variant.
    pub fn file_stem(self) -> &'static str {
        match self {
            IconKind::New => "new",
            IconKind::Open => "open",
            IconKind::Save => "save",
            IconKind::SaveAs => "save_as",
            IconKind::Exit => "exit",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Icon loading errors. These never reach the user.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("Icon file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("Failed to decode icon: {0}")]
    Decode(#[from] image::ImageError),
}

/// An RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Wraps raw RGBA8 data. Returns `None` if the length does not match.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        (pixels.len() == width as usize * height as usize * 4).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Decodes an image file.
    pub fn decode(path: &Path) -> Result<Self, IconError> {
        if !path.is_file() {
            return Err(IconError::Missing(path.to_path_buf()));
        }
        let rgba = image::open(path)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The `[r, g, b, a]` value at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Replaces each visible pixel's color with `255 - channel`.
    ///
    /// Alpha is kept as is and fully transparent pixels are not touched.
    pub fn invert(&mut self) {
        self.pixels
            .chunks_exact_mut(4)
            .filter(|px| px[3] != 0)
            .for_each(|px| {
                px[0] = 255 - px[0];
                px[1] = 255 - px[1];
                px[2] = 255 - px[2];
            });
    }

    /// Keeps every `factor`-th pixel in both directions.
    pub fn subsample(&self, factor: u32) -> Bitmap {
        if factor <= 1 {
            return self.clone();
        }
        let width = self.width.div_ceil(factor);
        let height = self.height.div_ceil(factor);
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                let i = ((y * factor) as usize * self.width as usize + (x * factor) as usize) * 4;
                pixels.extend_from_slice(&self.pixels[i..i + 4]);
            }
        }
        Bitmap {
            width,
            height,
            pixels,
        }
    }

    /// Shrinks toward [`ICON_TARGET`] by the larger whole-number ratio of
    /// either side to the target.
    pub fn fit_to_icon(self) -> Bitmap {
        let factor = (self.width / ICON_TARGET).max(self.height / ICON_TARGET);
        if factor > 1 {
            self.subsample(factor)
        } else {
            self
        }
    }

    /// Uploadable handle for the renderer.
    pub fn to_handle(&self) -> Handle {
        Handle::from_rgba(self.width, self.height, self.pixels.clone())
    }
}

/// A loaded icon and its renderer handle.
#[derive(Debug, Clone)]
pub struct Icon {
    bitmap: Bitmap,
    handle: Handle,
}

impl Icon {
    fn new(bitmap: Bitmap) -> Self {
        let handle = bitmap.to_handle();
        Self { bitmap, handle }
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

/// The file menu's icons for one theme.
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    icons: [Option<Icon>; 5],
}

impl IconSet {
    /// Loads every icon for `theme` from `dir`.
    pub fn load(dir: &Path, theme: ThemeName) -> Self {
        let mut set = Self::default();
        for kind in IconKind::ALL {
            set.icons[kind.index()] = match load_icon(dir, kind, theme) {
                Ok(bitmap) => Some(Icon::new(bitmap)),
                Err(IconError::Missing(path)) => {
                    tracing::debug!("No icon at {}", path.display());
                    None
                }
                Err(e) => {
                    tracing::warn!("Skipping {} icon: {}", kind.file_stem(), e);
                    None
                }
            };
        }
        set
    }

    pub fn get(&self, kind: IconKind) -> Option<&Icon> {
        self.icons[kind.index()].as_ref()
    }

    /// Number of icons that loaded.
    pub fn len(&self) -> usize {
        self.icons.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PartialEq for IconSet {
    fn eq(&self, other: &Self) -> bool {
        IconKind::ALL.iter().all(|&kind| {
            self.get(kind).map(Icon::bitmap) == other.get(kind).map(Icon::bitmap)
        })
    }
}

/// Picks the file for `kind` and whether it must be inverted.
fn resolve(dir: &Path, kind: IconKind, theme: ThemeName) -> (PathBuf, bool) {
    let light = dir.join(format!("{}.png", kind.file_stem()));
    if !theme.is_dark() {
        return (light, false);
    }
    let dark = dir.join(format!("{}_dark.png", kind.file_stem()));
    if dark.exists() {
        (dark, false)
    } else {
        (light, true)
    }
}

fn load_icon(dir: &Path, kind: IconKind, theme: ThemeName) -> Result<Bitmap, IconError> {
    let (path, invert) = resolve(dir, kind, theme);
    let mut bitmap = Bitmap::decode(&path)?.fit_to_icon();
    if invert {
        bitmap.invert();
    }
    tracing::debug!(
        "Loaded {} icon from {} (inverted: {})",
        kind.file_stem(),
        path.display(),
        invert
    );
    Ok(bitmap)
}

/// Directory holding the icon files.
///
/// An `assets/icons` folder beside the executable wins; otherwise the
/// copy in the source tree is used.
pub fn assets_dir() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets").join("icons")));

    match beside_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/icons")),
    }
}
