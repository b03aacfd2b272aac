use std::path::{Path, PathBuf};

use image::ImageEncoder;
use image::codecs::png::PngEncoder;

use crate::foundation::error::{VitrineError, VitrineResult};
use crate::render::pipeline::FrameRGBA;
use crate::render::surface::unpremultiply_rgba8_in_place;

/// Encode a frame as PNG bytes.
pub fn encode_png(frame: &FrameRGBA) -> VitrineResult<Vec<u8>> {
    let expected = (frame.width as usize)
        .saturating_mul(frame.height as usize)
        .saturating_mul(4);
    if frame.data.len() != expected {
        return Err(VitrineError::encode(format!(
            "frame byte length {} does not match {}x{}",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }

    let mut data = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut data);
    }

    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            &data,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| VitrineError::encode(e.to_string()))?;
    Ok(out)
}

/// Encode and write a frame to `path`, creating parent directories.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> VitrineResult<()> {
    let bytes = encode_png(frame)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| VitrineError::encode(format!("create {}: {e}", parent.display())))?;
        }
    }
    std::fs::write(path, bytes)
        .map_err(|e| VitrineError::encode(format!("write {}: {e}", path.display())))
}

/// Write a frame into `dir` under a `vitrine-<millis>.png` name.
pub fn export_timestamped(dir: &Path, frame: &FrameRGBA) -> VitrineResult<PathBuf> {
    let name = format!("vitrine-{}.png", chrono::Utc::now().timestamp_millis());
    let path = dir.join(name);
    write_png(&path, frame)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_frame(w: u32, h: u32, rgba_premul: [u8; 4]) -> FrameRGBA {
        let mut data = Vec::with_capacity((w * h * 4) as usize);
        for _ in 0..w * h {
            data.extend_from_slice(&rgba_premul);
        }
        FrameRGBA {
            width: w,
            height: h,
            data,
            premultiplied: true,
        }
    }

    #[test]
    fn output_carries_png_signature() {
        let bytes = encode_png(&solid_frame(2, 2, [255, 0, 0, 255])).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn encode_unpremultiplies_translucent_pixels() {
        // Premultiplied half-transparent red.
        let bytes = encode_png(&solid_frame(1, 1, [128, 0, 0, 128])).unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        let px = img.get_pixel(0, 0).0;
        assert!(px[0] >= 254, "red should round-trip to straight 255: {px:?}");
        assert_eq!(px[3], 128);
    }

    #[test]
    fn mismatched_length_is_rejected() {
        let frame = FrameRGBA {
            width: 2,
            height: 2,
            data: vec![0u8; 4],
            premultiplied: true,
        };
        let err = encode_png(&frame).unwrap_err();
        assert!(err.to_string().starts_with("encode error:"));
    }

    #[test]
    fn write_png_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/out.png");
        write_png(&path, &solid_frame(1, 1, [0, 0, 0, 255])).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn export_names_are_timestamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_timestamped(dir.path(), &solid_frame(1, 1, [0, 0, 0, 255])).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("vitrine-"));
        assert!(name.ends_with(".png"));
        let stamp: &str = &name["vitrine-".len()..name.len() - ".png".len()];
        assert!(!stamp.is_empty());
        assert!(stamp.bytes().all(|b| b.is_ascii_digit()));
    }
}
