//! Resizing of camera frames to the input size of the policy.
use crate::error::RtxError;
use anyhow::Result;
use image::{
    imageops::{overlay, resize, FilterType},
    RgbImage,
};
use ndarray::{Array3, ArrayBase, Data, Dimension};
use num_traits::cast::AsPrimitive;
use serde::{Deserialize, Serialize};

/// Interpolation used when resizing frames.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Copy)]
pub enum ResizeFilter {
    /// Nearest neighbor.
    Nearest,
    /// Bilinear.
    Triangle,
    /// Cubic.
    CatmullRom,
    /// Gaussian.
    Gaussian,
    /// Lanczos with window 3.
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(f: ResizeFilter) -> Self {
        match f {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Configuration of [`ImagePreprocessor`].
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct PreprocessorConfig {
    /// Height of output frames.
    pub height: usize,

    /// Width of output frames.
    pub width: usize,

    /// Interpolation.
    pub filter: ResizeFilter,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self {
            height: 256,
            width: 320,
            filter: ResizeFilter::Triangle,
        }
    }
}

impl PreprocessorConfig {
    /// Sets the output size.
    pub fn size(mut self, height: usize, width: usize) -> Self {
        self.height = height;
        self.width = width;
        self
    }

    /// Sets the interpolation.
    pub fn filter(mut self, filter: ResizeFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Resizes RGB frames into a fixed box, keeping the aspect ratio and
/// padding the remainder with zeros.
///
/// The frame is scaled to fit and centered; nothing of the source is cropped.
#[derive(Debug, Clone)]
pub struct ImagePreprocessor {
    height: usize,
    width: usize,
    filter: ResizeFilter,
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        Self::build(&PreprocessorConfig::default())
    }
}

impl ImagePreprocessor {
    /// Builds the preprocessor.
    pub fn build(config: &PreprocessorConfig) -> Self {
        Self {
            height: config.height,
            width: config.width,
            filter: config.filter,
        }
    }

    /// Output shape `[height, width, 3]`.
    pub fn output_shape(&self) -> [usize; 3] {
        [self.height, self.width, 3]
    }

    /// Resizes an image of shape `[height, width, 3]` and casts it to `u8`.
    ///
    /// Values are cast like a numeric cast: clamped into `[0, 255]` and truncated.
    /// Non-finite values are rejected.
    pub fn preprocess<S, D, T>(&self, image: &ArrayBase<S, D>) -> Result<Array3<u8>>
    where
        S: Data<Elem = T>,
        D: Dimension,
        T: AsPrimitive<f32>,
    {
        let shape = image.shape();
        if shape.len() != 3 || shape[2] != 3 || shape[0] == 0 || shape[1] == 0 {
            return Err(RtxError::ImageShape(shape.to_vec()).into());
        }
        let (h, w) = (shape[0], shape[1]);

        let mut buf = Vec::with_capacity(h * w * 3);
        for &v in image.iter() {
            let v: f32 = v.as_();
            if !v.is_finite() {
                return Err(RtxError::ImageValue(format!("{} cannot be cast to u8", v)).into());
            }
            buf.push(v.max(0.0).min(255.0) as u8);
        }
        let img = RgbImage::from_raw(w as u32, h as u32, buf)
            .ok_or_else(|| RtxError::ImageShape(vec![h, w, 3]))?;

        let (rh, rw, top, left) = self.fit(h, w);
        log::trace!("Resize {}x{} to {}x{} at ({}, {})", h, w, rh, rw, top, left);

        let mut canvas = RgbImage::new(self.width as u32, self.height as u32);
        if rh == h && rw == w {
            overlay(&mut canvas, &img, left as u32, top as u32);
        } else {
            let resized = resize(&img, rw as u32, rh as u32, self.filter.into());
            overlay(&mut canvas, &resized, left as u32, top as u32);
        }

        Ok(Array3::from_shape_vec(
            (self.height, self.width, 3),
            canvas.into_raw(),
        )?)
    }

    /// Returns the resized size and the top-left offset of a `h x w` frame.
    fn fit(&self, h: usize, w: usize) -> (usize, usize, usize, usize) {
        let (th, tw) = (self.height as f64, self.width as f64);
        let ratio = (w as f64 / tw).max(h as f64 / th);
        let rh = ((h as f64 / ratio).floor() as usize).max(1).min(self.height);
        let rw = ((w as f64 / ratio).floor() as usize).max(1).min(self.width);
        let top = (self.height - rh) / 2;
        let left = (self.width - rw) / 2;
        (rh, rw, top, left)
    }
}
