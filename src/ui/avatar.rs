//! Half-block image rendering with optional circular clipping.

use image::DynamicImage;
use image::imageops::{self, FilterType};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::view::Shape;

const UPPER_HALF: &str = "▀";
const LOWER_HALF: &str = "▄";
const OPAQUE_ALPHA: u8 = 128;

/// Draws an image into its area, one pixel per column and two per row.
///
/// With no image the area is left untouched, which leaves a blank gap of the
/// right size.
pub struct AvatarWidget<'a> {
    image: Option<&'a DynamicImage>,
    shape: Shape,
}

impl<'a> AvatarWidget<'a> {
    pub fn new(image: Option<&'a DynamicImage>, shape: Shape) -> Self {
        Self { image, shape }
    }
}

impl Widget for AvatarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(image) = self.image else {
            return;
        };
        let grid = pixel_grid(image, area.width as u32, area.height as u32 * 2, self.shape);

        for row in 0..area.height {
            for col in 0..area.width {
                let top = grid[(row * 2) as usize][col as usize];
                let bottom = grid[(row * 2 + 1) as usize][col as usize];
                let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) else {
                    continue;
                };
                match (top, bottom) {
                    (Some(top), Some(bottom)) => {
                        cell.set_symbol(UPPER_HALF).set_fg(top).set_bg(bottom);
                    }
                    (Some(top), None) => {
                        cell.set_symbol(UPPER_HALF).set_fg(top);
                    }
                    (None, Some(bottom)) => {
                        cell.set_symbol(LOWER_HALF).set_fg(bottom);
                    }
                    (None, None) => {}
                }
            }
        }
    }
}

/// Samples `image` into a `width` x `height` grid, scaled to fit with its
/// aspect ratio kept. `None` marks pixels that are transparent, letterboxed,
/// or clipped away by `shape`.
pub(crate) fn pixel_grid(
    image: &DynamicImage,
    width: u32,
    height: u32,
    shape: Shape,
) -> Vec<Vec<Option<Color>>> {
    let mut grid = vec![vec![None; width as usize]; height as usize];
    if width == 0 || height == 0 || image.width() == 0 || image.height() == 0 {
        return grid;
    }

    let scale = f64::min(
        width as f64 / image.width() as f64,
        height as f64 / image.height() as f64,
    );
    let fit_w = ((image.width() as f64 * scale).round() as u32).clamp(1, width);
    let fit_h = ((image.height() as f64 * scale).round() as u32).clamp(1, height);
    let offset_x = (width - fit_w) / 2;
    let offset_y = (height - fit_h) / 2;

    let scaled = imageops::resize(&image.to_rgba8(), fit_w, fit_h, FilterType::Triangle);

    for (x, y, pixel) in scaled.enumerate_pixels() {
        let gx = x + offset_x;
        let gy = y + offset_y;
        let [r, g, b, a] = pixel.0;
        if a < OPAQUE_ALPHA || !within_shape(shape, gx, gy, width, height) {
            continue;
        }
        grid[gy as usize][gx as usize] = Some(Color::Rgb(r, g, b));
    }
    grid
}

fn within_shape(shape: Shape, x: u32, y: u32, width: u32, height: u32) -> bool {
    match shape {
        Shape::Rectangle => true,
        Shape::Circle => {
            let rx = width as f64 / 2.0;
            let ry = height as f64 / 2.0;
            let dx = (x as f64 + 0.5 - rx) / rx;
            let dy = (y as f64 + 0.5 - ry) / ry;
            dx * dx + dy * dy <= 1.0
        }
    }
}
