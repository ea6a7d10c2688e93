// src/app/gfx.rs
use std::path::Path;

use eframe::egui::{self as eg, ColorImage, TextureHandle};

/// Upload an RGBA image to a GPU texture. (UI thread only)
pub fn upload_rgba(
    ctx: &eg::Context,
    w: u32,
    h: u32,
    bytes: &[u8],
    name: &str,
) -> TextureHandle {
    let img = ColorImage::from_rgba_unmultiplied([w as usize, h as usize], bytes);
    ctx.load_texture(name.to_string(), img, eg::TextureOptions::LINEAR)
}

/// Decode a cached poster and upload it. (UI thread only)
pub fn load_texture_from_path(
    ctx: &eg::Context,
    path: &Path,
    name: &str,
) -> Result<TextureHandle, String> {
    let (w, h, bytes) = crate::app::cache::load_rgba(path)?;
    if w == 0 || h == 0 {
        return Err(format!("empty image {}", path.display()));
    }
    Ok(upload_rgba(ctx, w, h, &bytes, name))
}

/// UV rect that centre-crops an image of `tex_size` to fill `target` without stretching.
pub fn crop_uv(tex_size: eg::Vec2, target: eg::Vec2) -> eg::Rect {
    let full = eg::Rect::from_min_max(eg::pos2(0.0, 0.0), eg::pos2(1.0, 1.0));
    if tex_size.x <= 0.0 || tex_size.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }
    let tex_ar = tex_size.x / tex_size.y;
    let target_ar = target.x / target.y;
    if tex_ar > target_ar {
        // too wide: trim left/right
        let keep = target_ar / tex_ar;
        let pad = (1.0 - keep) * 0.5;
        eg::Rect::from_min_max(eg::pos2(pad, 0.0), eg::pos2(1.0 - pad, 1.0))
    } else {
        let keep = tex_ar / target_ar;
        let pad = (1.0 - keep) * 0.5;
        eg::Rect::from_min_max(eg::pos2(0.0, pad), eg::pos2(1.0, 1.0 - pad))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn wide_texture_is_trimmed_horizontally() {
        let uv = crop_uv(eg::vec2(200.0, 100.0), eg::vec2(100.0, 100.0));
        assert!(approx(uv.min.x, 0.25) && approx(uv.max.x, 0.75));
        assert!(approx(uv.min.y, 0.0) && approx(uv.max.y, 1.0));
    }

    #[test]
    fn tall_texture_is_trimmed_vertically() {
        let uv = crop_uv(eg::vec2(100.0, 150.0), eg::vec2(300.0, 150.0));
        assert!(approx(uv.min.x, 0.0) && approx(uv.max.x, 1.0));
        let kept = uv.max.y - uv.min.y;
        assert!(approx(kept, (100.0 / 150.0) / 2.0));
        assert!(approx(uv.center().y, 0.5));
    }

    #[test]
    fn degenerate_sizes_use_whole_texture() {
        let uv = crop_uv(eg::vec2(0.0, 10.0), eg::vec2(10.0, 10.0));
        assert_eq!(uv, eg::Rect::from_min_max(eg::pos2(0.0, 0.0), eg::pos2(1.0, 1.0)));
    }
}
