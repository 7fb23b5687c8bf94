use beryl::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    color: Vec4,
}

impl Color {
    pub const BLACK: Color = Color { color: Vec4::new(0.0, 0.0, 0.0, 1.0) };
    pub const WHITE: Color = Color { color: Vec4::new(1.0, 1.0, 1.0, 1.0) };
    pub const RED: Color = Color { color: Vec4::new(1.0, 0.0, 0.0, 1.0) };
    pub const GREEN: Color = Color { color: Vec4::new(0.0, 1.0, 0.0, 1.0) };
    pub const BLUE: Color = Color { color: Vec4::new(0.0, 0.0, 1.0, 1.0) };

    const CLAMP_MAX: f32 = u8::MAX as f32;

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Vec4::new(
                f32::from(r) / Color::CLAMP_MAX,
                f32::from(g) / Color::CLAMP_MAX,
                f32::from(b) / Color::CLAMP_MAX,
                f32::from(a) / Color::CLAMP_MAX,
            ),
        }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, u8::MAX)
    }

    /// Hue, saturation and value all in [0, 1]; alpha fixed at 1.
    pub fn hsv(h: f32, s: f32, v: f32) -> Self {
        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match sector as i32 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Self {
            color: Vec4::new(r, g, b, 1.0),
        }
    }

    pub fn as_vec4(&self) -> Vec4 {
        self.color
    }

    pub fn as_rgba(&self) -> [f32; 4] {
        [self.color.x, self.color.y, self.color.z, self.color.w]
    }
}

/// Deterministic source of "random" HSV colors for the recolor event.
/// Seedable so scene tests stay reproducible; the host may seed it from
/// wall-clock time if it wants true variety.
#[derive(Debug, Clone)]
pub struct ColorSampler {
    state: u32,
}

impl ColorSampler {
    pub fn new(seed: u32) -> Self {
        Self {
            // xorshift must not start at zero
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }

    fn next_unit(&mut self) -> f32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        (x >> 8) as f32 / (1u32 << 24) as f32
    }

    pub fn next(&mut self) -> Color {
        let h = self.next_unit();
        let s = self.next_unit();
        let v = self.next_unit();
        Color::hsv(h, s, v)
    }
}

impl Default for ColorSampler {
    fn default() -> Self {
        Self::new(0)
    }
}
