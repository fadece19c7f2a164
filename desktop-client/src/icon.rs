use eframe::egui;
use image::{Rgba, RgbaImage};

pub const ICON_SIZE: u32 = 64;

const TILE: Rgba<u8> = Rgba([240, 240, 240, 255]);
const MARK: Rgba<u8> = Rgba([220, 50, 50, 255]);
const PADDING: u32 = 12;
const HALF_THICKNESS: i64 = 3;

/// Red X on a light tile, drawn per pixel.
pub fn build_icon() -> RgbaImage {
    let last = (ICON_SIZE - 1) as i64;
    RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let far = ICON_SIZE - 1 - PADDING;
        let inside = (PADDING..=far).contains(&x) && (PADDING..=far).contains(&y);
        let (x, y) = (x as i64, y as i64);
        let on_stroke =
            (x - y).abs() <= HALF_THICKNESS || (x + y - last).abs() <= HALF_THICKNESS;
        if inside && on_stroke { MARK } else { TILE }
    })
}

pub fn icon_data() -> egui::IconData {
    let image = build_icon();
    let (width, height) = image.dimensions();
    egui::IconData {
        rgba: image.into_raw(),
        width,
        height,
    }
}
