//! RGB <-> HSV conversion.
//!
//! Both directions work on [`Vec3`] with **every channel in `[0, 1]`**,
//! including hue (`1.0` is a full turn). Colors from UI code with hue in
//! degrees go through [`hsv_degrees_to_unit`] first.
//!
//! # Example
//!
//! ```rust
//! use tessera_color::{hsv_to_rgb, rgb_to_hsv, HsvConvert};
//! use tessera_math::Vec3;
//!
//! let orange = Vec3::new(1.0, 0.5, 0.0);
//! let hsv = rgb_to_hsv(orange);
//! assert!((hsv.h() - 30.0 / 360.0).abs() < 1e-6);
//!
//! // Chained form: shift hue by a third of a turn
//! let mut shifted = orange.to_hsv();
//! shifted.set_h((shifted.h() + 1.0 / 3.0) % 1.0);
//! let green = shifted.to_rgb();
//! assert!(green.g() > green.r());
//! ```

use tessera_math::Vec3;

/// Converts RGB to HSV, all channels in `[0, 1]`.
///
/// Hue is `0` for grays (no chroma); saturation is `0` for black.
pub fn rgb_to_hsv(rgb: Vec3) -> Vec3 {
    let (r, g, b) = (rgb.r(), rgb.g(), rgb.b());

    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let delta = cmax - cmin;

    let v = cmax;
    let s = if cmax == 0.0 { 0.0 } else { delta / cmax };

    let mut h = 0.0;
    if delta != 0.0 {
        h = if cmax == r {
            ((g - b) / delta) % 6.0
        } else if cmax == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        h /= 6.0;
        if h < 0.0 {
            h += 1.0;
        }
    }

    Vec3::new(h, s, v)
}

/// Converts HSV to RGB, all channels in `[0, 1]`.
pub fn hsv_to_rgb(hsv: Vec3) -> Vec3 {
    let h = hsv.h() * 360.0;
    let (s, v) = (hsv.s(), hsv.v());

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    // Hue sector, 60 degrees each
    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Vec3::new(r + m, g + m, b + m)
}

/// Converts HSV with hue in degrees `[0, 360]` to unit hue.
#[inline]
pub fn hsv_degrees_to_unit(hsv: Vec3) -> Vec3 {
    Vec3::new(hsv.h() / 360.0, hsv.s(), hsv.v())
}

/// Converts HSV with unit hue to hue in degrees `[0, 360]`.
#[inline]
pub fn hsv_unit_to_degrees(hsv: Vec3) -> Vec3 {
    Vec3::new(hsv.h() * 360.0, hsv.s(), hsv.v())
}

/// Chainable RGB/HSV conversions on color triplets.
pub trait HsvConvert: Sized {
    /// Interprets `self` as RGB and converts to HSV.
    fn to_hsv(self) -> Self;

    /// Interprets `self` as HSV and converts to RGB.
    fn to_rgb(self) -> Self;
}

impl HsvConvert for Vec3 {
    #[inline]
    fn to_hsv(self) -> Self {
        rgb_to_hsv(self)
    }

    #[inline]
    fn to_rgb(self) -> Self {
        hsv_to_rgb(self)
    }
}
