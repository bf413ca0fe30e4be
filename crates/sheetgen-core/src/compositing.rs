use image::RgbaImage;

/// Blit `src` into `canvas` with its top-left at (dx, dy), optionally
/// rotated 90° clockwise. Pixels falling outside the canvas are dropped.
pub fn blit_rgba(src: &RgbaImage, canvas: &mut RgbaImage, dx: u32, dy: u32, rotated: bool) {
    let (cw, ch) = canvas.dimensions();
    let (sw, sh) = src.dimensions();
    // destination size is swapped when rotated
    let (rw, rh) = if rotated { (sh, sw) } else { (sw, sh) };
    for yy in 0..rh {
        for xx in 0..rw {
            let (ix, iy) = if rotated {
                (yy, sh - 1 - xx)
            } else {
                (xx, yy)
            };
            if dx + xx < cw && dy + yy < ch {
                canvas.put_pixel(dx + xx, dy + yy, *src.get_pixel(ix, iy));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn rotated_blit_maps_bottom_left_to_top_left() {
        // 2x3 source with unique pixels
        let mut src = RgbaImage::new(2, 3);
        for y in 0..3 {
            for x in 0..2 {
                src.put_pixel(x, y, Rgba([x as u8, y as u8, 0, 255]));
            }
        }
        let mut canvas = RgbaImage::new(8, 8);
        blit_rgba(&src, &mut canvas, 1, 1, true);
        // 90° CW: src (0, 2) lands at dest (1, 1); src (0, 0) at dest (3, 1)
        assert_eq!(*canvas.get_pixel(1, 1), Rgba([0, 2, 0, 255]));
        assert_eq!(*canvas.get_pixel(3, 1), Rgba([0, 0, 0, 255]));
        assert_eq!(*canvas.get_pixel(3, 2), Rgba([1, 0, 0, 255]));
    }
}
