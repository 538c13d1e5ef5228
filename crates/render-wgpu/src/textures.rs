//! Procedural RGBA8 images for the texture array.
//!
//! Row `r` of an image holds `v = r / TEXTURE_SIZE`, matching the mesh UVs
//! where `v` grows upward on every face.

use cglab_render::TextureSlot;

pub const TEXTURE_SIZE: u32 = 64;
const BRICK_HEIGHT: u32 = 8;
const BRICK_WIDTH: u32 = 16;

/// Deterministic value noise in `0.0..1.0`.
fn hash(x: u32, y: u32, seed: u32) -> f32 {
    let mut h = x
        .wrapping_mul(0x27d4_eb2d)
        ^ y.wrapping_mul(0x1656_67b1)
        ^ seed.wrapping_mul(0x9e37_79b9);
    h ^= h >> 15;
    h = h.wrapping_mul(0x2c1b_3c6d);
    h ^= h >> 12;
    h = h.wrapping_mul(0x297a_2d39);
    h ^= h >> 15;
    (h & 0xffff) as f32 / 65536.0
}

fn rgb(r: f32, g: f32, b: f32) -> [u8; 4] {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    [c(r), c(g), c(b), 255]
}

fn sky(x: u32, y: u32) -> [u8; 4] {
    let v = y as f32 / (TEXTURE_SIZE - 1) as f32;
    let cloud = hash(x / 4, y / 4, 1) * 0.08;
    rgb(0.45 + 0.35 * (1.0 - v) + cloud, 0.65 + 0.25 * (1.0 - v) + cloud, 0.95 + cloud)
}

fn grass(x: u32, y: u32) -> [u8; 4] {
    let n = hash(x, y, 2);
    let blade = if hash(x, y / 3, 3) > 0.85 { 0.1 } else { 0.0 };
    rgb(0.2 + 0.1 * n, 0.5 + 0.2 * n + blade, 0.15 + 0.05 * n)
}

fn dirt(x: u32, y: u32) -> [u8; 4] {
    let n = hash(x, y, 4);
    let pebble = if hash(x / 2, y / 2, 5) > 0.92 { -0.12 } else { 0.0 };
    rgb(0.45 + 0.1 * n + pebble, 0.3 + 0.08 * n + pebble, 0.15 + 0.05 * n + pebble)
}

fn block(x: u32, y: u32) -> [u8; 4] {
    let row = y / BRICK_HEIGHT;
    let offset = if row % 2 == 0 { 0 } else { BRICK_WIDTH / 2 };
    let mortar = y % BRICK_HEIGHT == 0 || (x + offset) % BRICK_WIDTH == 0;
    if mortar {
        return rgb(0.75, 0.72, 0.68);
    }
    let n = hash(x, y, 6) * 0.1 + hash((x + offset) / BRICK_WIDTH, row, 7) * 0.15;
    rgb(0.55 + n, 0.22 + n * 0.5, 0.15 + n * 0.3)
}

/// RGBA8 pixels for `slot`, `TEXTURE_SIZE` square, rows in order of `v`.
pub fn generate(slot: TextureSlot) -> Vec<u8> {
    let texel = match slot {
        TextureSlot::Sky => sky,
        TextureSlot::Grass => grass,
        TextureSlot::Dirt => dirt,
        TextureSlot::Block => block,
    };
    let mut pixels = Vec::with_capacity((TEXTURE_SIZE * TEXTURE_SIZE * 4) as usize);
    for y in 0..TEXTURE_SIZE {
        for x in 0..TEXTURE_SIZE {
            pixels.extend_from_slice(&texel(x, y));
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(pixels: &[u8], x: u32, y: u32) -> [u8; 4] {
        let i = ((y * TEXTURE_SIZE + x) * 4) as usize;
        [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
    }

    fn mean(pixels: &[u8]) -> [f32; 3] {
        let mut sum = [0.0_f32; 3];
        for px in pixels.chunks_exact(4) {
            for c in 0..3 {
                sum[c] += px[c] as f32;
            }
        }
        let n = (pixels.len() / 4) as f32;
        sum.map(|s| s / n)
    }

    #[test]
    fn every_slot_is_full_size_and_opaque() {
        for slot in TextureSlot::ALL {
            let pixels = generate(slot);
            assert_eq!(pixels.len(), (TEXTURE_SIZE * TEXTURE_SIZE * 4) as usize);
            assert!(pixels.chunks_exact(4).all(|p| p[3] == 255), "{slot:?}");
        }
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate(TextureSlot::Dirt), generate(TextureSlot::Dirt));
    }

    #[test]
    fn dominant_channels() {
        let [r, g, b] = mean(&generate(TextureSlot::Grass));
        assert!(g > r && g > b);

        let [r, g, b] = mean(&generate(TextureSlot::Dirt));
        assert!(r > g && g > b);

        let [r, _, b] = mean(&generate(TextureSlot::Sky));
        assert!(b > r);
    }

    #[test]
    fn sky_lightens_toward_the_bottom() {
        let sky = generate(TextureSlot::Sky);
        let bottom = pixel(&sky, 0, 0);
        let top = pixel(&sky, 0, TEXTURE_SIZE - 1);
        assert!(bottom[0] > top[0]);
    }

    #[test]
    fn bricks_have_mortar_lines() {
        let block = generate(TextureSlot::Block);
        let mortar = pixel(&block, 5, 0);
        assert_eq!(mortar, pixel(&block, 40, BRICK_HEIGHT));
        assert_ne!(pixel(&block, 5, 3), mortar);
    }

    #[test]
    fn hash_stays_in_unit_range() {
        for i in 0..1000 {
            let h = hash(i, i * 7, 3);
            assert!((0.0..1.0).contains(&h));
        }
    }
}
