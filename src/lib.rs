mod error;

use image::{DynamicImage, GenericImageView, ImageFormat};
use std::borrow::Cow;
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub use error::{Error, Result};

/// Sprite sheet the animal icons are packed into, relative to the project root.
pub const SOURCE_PATH: &str = "Assets/Textures/AnimalsSpriteSheet.png";
pub const OUTPUT_DIR: &str = "Assets/Textures";

/// One quarter of a sprite sheet. The discriminant is the position in `ALL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// File stem of the sprite stored in this quadrant.
    pub fn name(self) -> &'static str {
        match self {
            Quadrant::TopLeft => "Duck",
            Quadrant::TopRight => "Chicken",
            Quadrant::BottomLeft => "Goose",
            Quadrant::BottomRight => "Cow",
        }
    }

    /// Pixel rectangle covered by this quadrant on a `width` x `height` sheet.
    ///
    /// The split point is `width / 2`, `height / 2` rounded down, so on odd
    /// sizes the extra column and row land in the right and bottom quadrants.
    pub fn region(self, width: u32, height: u32) -> Region {
        let half_w = width / 2;
        let half_h = height / 2;

        let (x, region_width) = match self {
            Quadrant::TopLeft | Quadrant::BottomLeft => (0, half_w),
            Quadrant::TopRight | Quadrant::BottomRight => (half_w, width - half_w),
        };
        let (y, region_height) = match self {
            Quadrant::TopLeft | Quadrant::TopRight => (0, half_h),
            Quadrant::BottomLeft | Quadrant::BottomRight => (half_h, height - half_h),
        };

        Region {
            x,
            y,
            width: region_width,
            height: region_height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// The four sprites cut out of a sheet, in `Quadrant::ALL` order.
#[derive(Debug)]
pub struct Sprites {
    sprites: [(Quadrant, DynamicImage); 4],
}

impl Sprites {
    pub fn get(&self, quadrant: Quadrant) -> &DynamicImage {
        &self.sprites[quadrant as usize].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, &DynamicImage)> {
        self.sprites.iter().map(|(quadrant, image)| (*quadrant, image))
    }
}

pub fn load(path: &Path) -> Result<DynamicImage> {
    let image = image::open(path).map_err(|err| Error::from_load(path.to_path_buf(), err))?;

    log::debug!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    Ok(image)
}

pub fn split(image: &DynamicImage) -> Sprites {
    let (width, height) = image.dimensions();

    let sprites = Quadrant::ALL.map(|quadrant| {
        let region = quadrant.region(width, height);
        let sprite = image.crop_imm(region.x, region.y, region.width, region.height);
        (quadrant, sprite)
    });

    Sprites { sprites }
}

/// Writes `sprite` to `<output_dir>/<name>.png`, replacing any existing file.
///
/// Float sprites are stored as 16-bit PNG. The file is only touched once
/// encoding has succeeded.
pub fn save(sprite: &DynamicImage, output_dir: &Path, name: &str) -> Result<PathBuf> {
    let path = output_dir.join(format!("{}.png", name));
    let write_error = |source| Error::Write {
        path: path.clone(),
        source,
    };

    let mut buffer = Cursor::new(Vec::new());
    png_compatible(sprite)
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(write_error)?;

    std::fs::write(&path, buffer.into_inner())
        .map_err(|err| write_error(image::ImageError::IoError(err)))?;

    log::debug!(
        "Wrote {} ({}x{})",
        path.display(),
        sprite.width(),
        sprite.height()
    );

    Ok(path)
}

fn png_compatible(sprite: &DynamicImage) -> Cow<'_, DynamicImage> {
    match sprite {
        DynamicImage::ImageRgb32F(_) => Cow::Owned(DynamicImage::ImageRgb16(sprite.to_rgb16())),
        DynamicImage::ImageRgba32F(_) => {
            Cow::Owned(DynamicImage::ImageRgba16(sprite.to_rgba16()))
        }
        _ => Cow::Borrowed(sprite),
    }
}

/// Pastes the sprites back at their offsets. The result is always RGBA8.
pub fn reassemble(sprites: &Sprites) -> DynamicImage {
    let top_left = sprites.get(Quadrant::TopLeft);
    let width = top_left.width() + sprites.get(Quadrant::TopRight).width();
    let height = top_left.height() + sprites.get(Quadrant::BottomLeft).height();

    let mut sheet = image::RgbaImage::new(width, height);

    for (quadrant, sprite) in sprites.iter() {
        let region = quadrant.region(width, height);
        image::imageops::replace(
            &mut sheet,
            &sprite.to_rgba8(),
            region.x as i64,
            region.y as i64,
        );
    }

    DynamicImage::ImageRgba8(sheet)
}

/// Loads the sheet at `source` and writes its four sprites into `output_dir`.
///
/// Stops at the first failure. Nothing is written unless the sheet decodes.
pub fn run(source: &Path, output_dir: &Path) -> Result<()> {
    let sheet = load(source)?;
    let sprites = split(&sheet);

    for (quadrant, sprite) in sprites.iter() {
        save(sprite, output_dir, quadrant.name())?;
    }

    log::info!(
        "Split {} into {} sprites in {}",
        source.display(),
        Quadrant::ALL.len(),
        output_dir.display()
    );

    Ok(())
}
