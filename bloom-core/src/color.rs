use crate::foundation::math::wrap_unit;

/// Immutable HSV color with byte-range RGB derived at construction.
///
/// Hue is circular in `[0, 1)`; saturation and value are nominally `[0, 1]`.
/// Inputs outside those ranges are not rejected: the conversion saturates
/// instead of failing, so every `(h, s, v)` triple yields some color.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Color {
    /// Circular hue in `[0, 1)`.
    pub hue: f64,
    /// Saturation in `[0, 1]`.
    pub saturation: f64,
    /// Brightness in `[0, 1]`.
    pub value: f64,
    /// Derived red channel.
    pub red: u8,
    /// Derived green channel.
    pub green: u8,
    /// Derived blue channel.
    pub blue: u8,
}

impl Color {
    /// Build a color from HSV components, deriving the RGB bytes.
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        let [red, green, blue] = hsv_to_rgb(hue, saturation, value);
        Self {
            hue,
            saturation,
            value,
            red,
            green,
            blue,
        }
    }

    /// The derived RGB triple, ready for a pixel buffer.
    pub fn rgb(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Move this color toward `target` by `strength`, returning the result.
    ///
    /// Saturation and value interpolate linearly. Hue travels the shorter arc
    /// of the circle: when the two hues straddle the 0/1 wrap point the
    /// interpolation passes through it and the result is reduced modulo 1,
    /// so the blend never takes the long way around.
    pub fn blend_toward(&self, target: &Color, strength: f64) -> Color {
        let hue = if (target.hue - self.hue).abs() <= 0.5 {
            self.hue + (target.hue - self.hue) * strength
        } else if target.hue < self.hue {
            wrap_unit(self.hue + (target.hue + 1.0 - self.hue) * strength)
        } else {
            let lifted = self.hue + 1.0;
            wrap_unit(lifted + (target.hue - lifted) * strength)
        };
        let saturation = self.saturation + (target.saturation - self.saturation) * strength;
        let value = self.value + (target.value - self.value) * strength;
        Color::new(hue, saturation, value)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HSV({},{}%,{}%)",
            (self.hue * 360.0) as i64,
            (self.saturation * 100.0) as i64,
            (self.value * 100.0) as i64
        )
    }
}

/// Standard six-sector HSV conversion with truncating byte casts.
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [u8; 3] {
    if s == 0.0 {
        let grey = (v * 255.0) as u8;
        return [grey, grey, grey];
    }
    let sector = (h * 6.0) as i64;
    let f = h * 6.0 - sector as f64;
    let p = (255.0 * (v * (1.0 - s))) as u8;
    let q = (255.0 * (v * (1.0 - s * f))) as u8;
    let t = (255.0 * (v * (1.0 - s * (1.0 - f)))) as u8;
    let v = (v * 255.0) as u8;
    match sector.rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

#[cfg(test)]
#[path = "../tests/unit/color.rs"]
mod tests;
