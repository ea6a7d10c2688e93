use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use image::{imageops::FilterType, DynamicImage, GenericImageView};
use tracing::{debug, warn};

const POSTER_SUBDIR: &str = "posters";
const CACHED_EXTS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// On-disk poster store: `<root>/posters/<md5(url)>.jpg`.
#[derive(Clone, Debug)]
pub struct PosterCache {
    dir: PathBuf,
}

impl PosterCache {
    /// Create (if needed) the poster directory under `root`.
    pub fn open(root: &Path) -> Result<Self, String> {
        let dir = root.join(POSTER_SUBDIR);
        fs::create_dir_all(&dir).map_err(|e| format!("create {}: {e}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn key_for(url: &str) -> String {
        format!("{:x}", md5::compute(url.as_bytes()))
    }

    pub fn find(&self, key: &str) -> Option<PathBuf> {
        CACHED_EXTS
            .iter()
            .map(|ext| self.dir.join(format!("{key}.{ext}")))
            .find(|p| p.is_file())
    }

    /// Decode `bytes`, shrink to `max_width` keeping aspect, store as JPEG.
    pub fn store_bytes(
        &self,
        key: &str,
        bytes: &[u8],
        max_width: u32,
        quality: u8,
    ) -> Result<PathBuf, String> {
        let img = image::load_from_memory(bytes).map_err(|e| format!("decode: {e}"))?;
        let (w, h) = img.dimensions();
        let out: DynamicImage = if w > max_width {
            let new_h = ((h as f32) * (max_width as f32 / w as f32))
                .round()
                .max(1.0) as u32;
            img.resize_exact(max_width, new_h, FilterType::CatmullRom)
        } else {
            img
        };

        // JPEG has no alpha channel
        let rgb = out.to_rgb8();
        let mut jpeg_bytes: Vec<u8> = Vec::new();
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg_bytes, quality)
            .encode_image(&rgb)
            .map_err(|e| format!("jpeg encode: {e}"))?;

        let dest = self.dir.join(format!("{key}.jpg"));
        let tmp = dest.with_extension("jpg.part");
        {
            let mut f = fs::File::create(&tmp).map_err(|e| format!("create tmp: {e}"))?;
            f.write_all(&jpeg_bytes).map_err(|e| format!("write: {e}"))?;
        }
        fs::rename(&tmp, &dest).map_err(|e| format!("rename: {e}"))?;
        debug!("cached poster {}", dest.display());
        Ok(dest)
    }

    /// Delete cached posters older than `max_age` and any leftover `.part` files.
    pub fn prune_older_than(&self, max_age: Duration) -> std::io::Result<usize> {
        let cutoff = SystemTime::now()
            .checked_sub(max_age)
            .unwrap_or(SystemTime::UNIX_EPOCH);
        let mut removed = 0usize;
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|s| s.to_ascii_lowercase());
            let stale = match ext.as_deref() {
                Some("part") => true,
                Some(e) if CACHED_EXTS.contains(&e) => {
                    let modified = entry
                        .metadata()?
                        .modified()
                        .unwrap_or(SystemTime::UNIX_EPOCH);
                    modified < cutoff
                }
                _ => false,
            };
            if stale {
                if let Err(e) = fs::remove_file(&path) {
                    warn!("failed to prune {}: {e}", path.display());
                    continue;
                }
                removed += 1;
            }
        }
        Ok(removed)
    }
}

/// Read a cached image as (width, height, RGBA8 bytes).
pub fn load_rgba(path: &Path) -> Result<(u32, u32, Vec<u8>), String> {
    let img = image::ImageReader::open(path)
        .map_err(|e| format!("open image {}: {e}", path.display()))?
        .with_guessed_format()
        .map_err(|e| format!("guess format {}: {e}", path.display()))?
        .decode()
        .map_err(|e| format!("decode {}: {e}", path.display()))?;
    let (w, h) = img.dimensions();
    Ok((w, h, img.to_rgba8().into_raw()))
}

#[cfg(test)]
pub(crate) fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([200, 40, 40, 255]));
    let mut out = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut out), image::ImageFormat::Png)
        .expect("encode png");
    out
}
