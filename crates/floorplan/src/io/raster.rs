use std::path::Path;

use image::{GrayImage, RgbImage};
use tracing::info;

use crate::{
    config::{FloorFillerConfig, WallExtractorConfig},
    error::{FloorplanError, Result},
    floor::fill_floor,
    walls::extract_walls,
};

/// Decode any supported image file as 8-bit grayscale
pub fn load_grayscale(path: impl AsRef<Path>) -> Result<GrayImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| FloorplanError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let gray = img.to_luma8();
    info!(path = %path.display(), width = gray.width(), height = gray.height(), "loaded image");
    Ok(gray)
}

/// Decode the floor texture as RGB
pub fn load_texture(path: impl AsRef<Path>) -> Result<RgbImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| FloorplanError::Texture {
        path: path.to_path_buf(),
        source,
    })?;
    let texture = img.to_rgb8();
    if texture.width() == 0 || texture.height() == 0 {
        return Err(FloorplanError::EmptyTexture);
    }
    info!(path = %path.display(), width = texture.width(), height = texture.height(), "loaded texture");
    Ok(texture)
}

/// Encode `image` to `path`; the format follows the file extension
pub fn save_image<P>(image: &image::ImageBuffer<P, Vec<u8>>, path: impl AsRef<Path>) -> Result<()>
where
    P: image::PixelWithColorType<Subpixel = u8>,
{
    let path = path.as_ref();
    image.save(path).map_err(|source| FloorplanError::Save {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "saved image");
    Ok(())
}

/// Load a blueprint, extract its walls and write them black on white
pub fn remove_interior_lines(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &WallExtractorConfig,
) -> Result<()> {
    let gray = load_grayscale(input)?;
    let extraction = extract_walls(&gray, config)?;
    save_image(&extraction.image, output)
}

/// Load a walls-only image and the texture, fill the floor, write RGB
pub fn generate_floor_mask(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    texture: impl AsRef<Path>,
    config: &FloorFillerConfig,
) -> Result<()> {
    let gray = load_grayscale(input)?;
    let texture = load_texture(texture)?;
    let fill = fill_floor(&gray, &texture, config)?;
    save_image(&fill.image, output)
}
