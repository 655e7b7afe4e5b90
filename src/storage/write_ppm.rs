use crate::core::data::pixel_image::PixelImage;
use std::io::Write;
use std::path::Path;

pub fn write_ppm(image: &PixelImage, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let filepath = filepath.as_ref();
    if let Some(parent) = filepath.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", image.width(), image.height())?;
    writeln!(file, "255")?;
    file.write_all(image.buffer())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_ppm;
    use crate::core::data::colour::Rgb;
    use crate::core::data::pixel_image::PixelImage;

    #[test]
    fn writes_header_and_raw_rgb_bytes() {
        let image = PixelImage::filled(2, 1, Rgb { r: 1, g: 2, b: 3 });
        let path = std::env::temp_dir().join("frost_panel_write_ppm_test.ppm");

        write_ppm(&image, &path).expect("temp file is writable");

        let written = std::fs::read(&path).expect("file was written");
        assert_eq!(written, b"P6\n2 1\n255\n\x01\x02\x03\x01\x02\x03");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let image = PixelImage::filled(1, 1, Rgb { r: 0, g: 0, b: 0 });
        let dir = std::env::temp_dir().join("frost_panel_write_ppm_nested");
        let path = dir.join("nested").join("snapshot.ppm");

        write_ppm(&image, &path).expect("directories are created");

        assert!(path.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
