//! Separable box blur over RGB buffers.
//!
//! Each iteration runs a horizontal pass and a vertical pass with a
//! symmetric window of `2 * (kernel / 2) + 1` samples, clamping at the
//! image edges. The sequential and rayon variants share the per-row
//! arithmetic and produce byte-identical output.

use crate::core::data::pixel_image::PixelImage;
use rayon::prelude::*;

const BYTES_PER_PIXEL: usize = 3;

#[must_use]
pub fn box_blur(image: &PixelImage, kernel: u32, iterations: u32) -> PixelImage {
    blur(image, kernel, iterations, horizontal_pass, vertical_pass)
}

#[must_use]
pub fn box_blur_rayon(image: &PixelImage, kernel: u32, iterations: u32) -> PixelImage {
    blur(
        image,
        kernel,
        iterations,
        horizontal_pass_rayon,
        vertical_pass_rayon,
    )
}

fn blur(
    image: &PixelImage,
    kernel: u32,
    iterations: u32,
    horizontal: fn(&[u8], &mut [u8], usize, usize, usize),
    vertical: fn(&[u8], &mut [u8], usize, usize, usize),
) -> PixelImage {
    let radius = (kernel / 2) as usize;
    let width = image.width() as usize;
    let height = image.height() as usize;

    let mut out = image.clone();
    if radius == 0 || iterations == 0 || width == 0 || height == 0 {
        return out;
    }

    let mut scratch = vec![0u8; out.buffer().len()];
    for _ in 0..iterations {
        horizontal(out.buffer(), &mut scratch, width, height, radius);
        vertical(&scratch, out.buffer_mut(), width, height, radius);
    }

    out
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: usize, _height: usize, radius: usize) {
    let row_bytes = width * BYTES_PER_PIXEL;

    for (y, dst_row) in dst.chunks_exact_mut(row_bytes).enumerate() {
        let src_row = &src[y * row_bytes..(y + 1) * row_bytes];
        blur_row_horizontal(src_row, dst_row, width, radius);
    }
}

fn horizontal_pass_rayon(src: &[u8], dst: &mut [u8], width: usize, _height: usize, radius: usize) {
    let row_bytes = width * BYTES_PER_PIXEL;

    dst.par_chunks_exact_mut(row_bytes)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let src_row = &src[y * row_bytes..(y + 1) * row_bytes];
            blur_row_horizontal(src_row, dst_row, width, radius);
        });
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: usize, height: usize, radius: usize) {
    let row_bytes = width * BYTES_PER_PIXEL;

    for (y, dst_row) in dst.chunks_exact_mut(row_bytes).enumerate() {
        blur_row_vertical(src, dst_row, width, height, y, radius);
    }
}

fn vertical_pass_rayon(src: &[u8], dst: &mut [u8], width: usize, height: usize, radius: usize) {
    let row_bytes = width * BYTES_PER_PIXEL;

    dst.par_chunks_exact_mut(row_bytes)
        .enumerate()
        .for_each(|(y, dst_row)| {
            blur_row_vertical(src, dst_row, width, height, y, radius);
        });
}

fn blur_row_horizontal(src_row: &[u8], dst_row: &mut [u8], width: usize, radius: usize) {
    let window = (2 * radius + 1) as u32;

    for x in 0..width {
        let mut sums = [0u32; BYTES_PER_PIXEL];

        for offset in -(radius as isize)..=(radius as isize) {
            let sample = (x as isize + offset).clamp(0, (width - 1) as isize) as usize;
            let base = sample * BYTES_PER_PIXEL;
            sums[0] += u32::from(src_row[base]);
            sums[1] += u32::from(src_row[base + 1]);
            sums[2] += u32::from(src_row[base + 2]);
        }

        let base = x * BYTES_PER_PIXEL;
        dst_row[base] = (sums[0] / window) as u8;
        dst_row[base + 1] = (sums[1] / window) as u8;
        dst_row[base + 2] = (sums[2] / window) as u8;
    }
}

fn blur_row_vertical(
    src: &[u8],
    dst_row: &mut [u8],
    width: usize,
    height: usize,
    y: usize,
    radius: usize,
) {
    let window = (2 * radius + 1) as u32;
    let row_bytes = width * BYTES_PER_PIXEL;

    for x in 0..width {
        let mut sums = [0u32; BYTES_PER_PIXEL];

        for offset in -(radius as isize)..=(radius as isize) {
            let sample = (y as isize + offset).clamp(0, (height - 1) as isize) as usize;
            let base = sample * row_bytes + x * BYTES_PER_PIXEL;
            sums[0] += u32::from(src[base]);
            sums[1] += u32::from(src[base + 1]);
            sums[2] += u32::from(src[base + 2]);
        }

        let base = x * BYTES_PER_PIXEL;
        dst_row[base] = (sums[0] / window) as u8;
        dst_row[base + 1] = (sums[1] / window) as u8;
        dst_row[base + 2] = (sums[2] / window) as u8;
    }
}
