//! Sliding-window patch extraction.

use serde::{Deserialize, Serialize};

use crate::error::{EmbedError, EmbedResult};
use crate::image::ImageDims;

/// A rectangular patch cut from an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubImage {
    /// `(row, col)` of the top-left pixel in the source image.
    pub origin: (u32, u32),
    /// Patch size.
    pub dims: ImageDims,
    /// Pixel values, row-major.
    pub values: Vec<f64>,
}

/// Cut `pixels` (row-major, `dims`) into `filter`-sized patches.
///
/// Patch corners sit at multiples of `stride` along both axes wherever the
/// whole patch fits. Patches are returned in row-major order of their
/// corners.
pub fn produce_sub_images(
    dims: ImageDims,
    pixels: &[f64],
    filter: (u32, u32),
    stride: u32,
) -> EmbedResult<Vec<SubImage>> {
    let (fr, fc) = filter;
    if fr == 0 || fc == 0 || fr > dims.rows() || fc > dims.cols() {
        return Err(EmbedError::InvalidFilterSize { rows: fr, cols: fc });
    }
    if stride == 0 {
        return Err(EmbedError::InvalidStride(stride));
    }
    if pixels.len() != dims.num_pixels() {
        return Err(EmbedError::PixelCountMismatch {
            got: pixels.len(),
            expected: dims.num_pixels(),
        });
    }

    let patch_dims = ImageDims::new(fr, fc)?;
    let cols = dims.cols() as usize;
    let mut patches = Vec::new();

    for row in (0..=dims.rows() - fr).step_by(stride as usize) {
        for col in (0..=dims.cols() - fc).step_by(stride as usize) {
            let values = (row..row + fr)
                .flat_map(|r| {
                    let start = r as usize * cols + col as usize;
                    pixels[start..start + fc as usize].iter().copied()
                })
                .collect();
            patches.push(SubImage {
                origin: (row, col),
                dims: patch_dims,
                values,
            });
        }
    }

    tracing::trace!(
        %dims,
        filter_rows = fr,
        filter_cols = fc,
        stride,
        patches = patches.len(),
        "produced sub-images"
    );
    Ok(patches)
}
