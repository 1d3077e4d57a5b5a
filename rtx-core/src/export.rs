//! Export of preprocessed frames as images.
use crate::error::RtxError;
use anyhow::{anyhow, Result};
use image::{
    codecs::gif::GifEncoder, Delay, Frame, ImageBuffer, Rgb, RgbImage, Rgba, RgbaImage,
};
use ndarray::{concatenate, Array3, ArrayView3, Axis};
use std::{fs::File, io::BufWriter, path::Path};

/// Concatenates every `stride`-th frame along the width axis.
///
/// All frames must share the same height.
pub fn filmstrip(images: &[Array3<u8>], stride: usize) -> Result<Array3<u8>> {
    if stride == 0 {
        return Err(anyhow!("stride must be positive"));
    }
    let views: Vec<ArrayView3<u8>> = images.iter().step_by(stride).map(|im| im.view()).collect();
    if views.is_empty() {
        return Err(anyhow!("no frames to concatenate"));
    }
    Ok(concatenate(Axis(1), &views)?)
}

fn to_rgb_image(image: &Array3<u8>) -> Result<RgbImage> {
    let shape = image.shape();
    if shape[2] != 3 {
        return Err(RtxError::ImageShape(shape.to_vec()).into());
    }
    let (h, w) = (shape[0] as u32, shape[1] as u32);
    let raw: Vec<u8> = image.iter().cloned().collect();
    ImageBuffer::<Rgb<u8>, _>::from_raw(w, h, raw)
        .ok_or_else(|| anyhow!("failed to build a {}x{} image", w, h))
}

/// Saves a frame of shape `[height, width, 3]`. The format follows the extension of `path`.
pub fn save_image(image: &Array3<u8>, path: impl AsRef<Path>) -> Result<()> {
    to_rgb_image(image)?.save(path.as_ref())?;
    log::info!("Saved image to {:?}", path.as_ref());
    Ok(())
}

/// Saves frames as an animated GIF, showing each frame for `delay_ms` milliseconds.
pub fn save_gif(images: &[Array3<u8>], path: impl AsRef<Path>, delay_ms: u32) -> Result<()> {
    if images.is_empty() {
        return Err(anyhow!("no frames to encode"));
    }

    let mut frames = Vec::with_capacity(images.len());
    for image in images {
        let rgb = to_rgb_image(image)?;
        let rgba: RgbaImage = ImageBuffer::from_fn(rgb.width(), rgb.height(), |x, y| {
            let p = rgb.get_pixel(x, y);
            Rgba([p[0], p[1], p[2], 255])
        });
        frames.push(Frame::from_parts(
            rgba,
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms, 1),
        ));
    }

    let file = BufWriter::new(File::create(path.as_ref())?);
    let mut encoder = GifEncoder::new(file);
    encoder.encode_frames(frames)?;
    log::info!("Saved {} frames to {:?}", images.len(), path.as_ref());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use tempdir::TempDir;

    fn frames(n: usize) -> Vec<Array3<u8>> {
        (0..n)
            .map(|i| Array3::from_elem((4, 5, 3), i as u8))
            .collect()
    }

    #[test]
    fn test_filmstrip_subsamples() -> Result<()> {
        let strip = filmstrip(&frames(7), 3)?;
        assert_eq!(strip.shape(), &[4, 15, 3]);
        assert_eq!(strip[[0, 0, 0]], 0);
        assert_eq!(strip[[0, 5, 0]], 3);
        assert_eq!(strip[[3, 14, 2]], 6);
        Ok(())
    }

    #[test]
    fn test_filmstrip_errors() {
        assert!(filmstrip(&frames(3), 0).is_err());
        assert!(filmstrip(&[], 1).is_err());
    }

    #[test]
    fn test_save() -> Result<()> {
        let dir = TempDir::new("export")?;

        let gif = dir.path().join("episode.gif");
        save_gif(&frames(3), &gif, 100)?;
        assert!(std::fs::metadata(&gif)?.len() > 0);

        let png = dir.path().join("strip.png");
        save_image(&filmstrip(&frames(3), 1)?, &png)?;
        let img = image::open(&png)?;
        let img = img.as_rgb8().unwrap();
        assert_eq!((img.width(), img.height()), (15, 4));
        assert_eq!(img.get_pixel(10, 0)[0], 2);
        Ok(())
    }
}
