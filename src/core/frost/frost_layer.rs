use crate::core::data::colour::Rgb;
use crate::core::data::pixel_image::{PixelImage, PixelImageError};
use crate::core::frost::box_blur::box_blur_rayon;
use crate::core::slide::limits::SlideLimits;

/// Builds the static frost layer: the background snapshot layered over a
/// solid fill, box blurred with the configured kernel and iteration count.
///
/// This runs once at startup; the result is never regenerated.
pub fn build_frost_layer(
    background: &PixelImage,
    fill: Rgb,
    limits: &SlideLimits,
) -> Result<PixelImage, PixelImageError> {
    let mut base = PixelImage::filled(background.width(), background.height(), fill);
    base.copy_from(background)?;

    Ok(box_blur_rayon(
        &base,
        limits.blur_kernel,
        limits.blur_iterations,
    ))
}

#[cfg(test)]
mod tests {
    use super::build_frost_layer;
    use crate::core::data::colour::Rgb;
    use crate::core::data::pixel_image::PixelImage;
    use crate::core::frost::box_blur::box_blur;
    use crate::core::slide::limits::SlideLimits;

    #[test]
    fn frost_layer_is_the_blurred_background_snapshot() {
        let limits = SlideLimits::default();
        let mut background = PixelImage::filled(24, 18, Rgb { r: 30, g: 60, b: 90 });
        for x in 0..24 {
            background
                .set_pixel(x, 9, Rgb {
                    r: 220,
                    g: 220,
                    b: 220,
                })
                .expect("pixel in bounds");
        }

        let frost = build_frost_layer(&background, Rgb::AZURE, &limits)
            .expect("background fits the fill layer");

        assert_eq!(
            frost,
            box_blur(&background, limits.blur_kernel, limits.blur_iterations)
        );
    }

    #[test]
    fn frost_layer_keeps_the_background_dimensions() {
        let limits = SlideLimits::default();
        let background = PixelImage::filled(
            limits.panel_width,
            limits.panel_height,
            Rgb { r: 10, g: 20, b: 30 },
        );

        let frost = build_frost_layer(&background, Rgb::AZURE, &limits)
            .expect("background fits the fill layer");

        assert_eq!(frost.width(), limits.panel_width);
        assert_eq!(frost.height(), limits.panel_height);
    }
}
