use serde::Deserialize;
use thiserror::Error;

/// A style color. Accepts `#rrggbb`, `rgb(r, g, b)`, `oklch(l, c, h)` and a
/// handful of named colors when parsed from configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Mix `over` on top of `self` with the given coverage (0.0 - 1.0).
    /// Mixing happens in Oklab so partially transparent thumbs fade evenly.
    pub fn blend(self, over: Rgb, alpha: f32) -> Rgb {
        let alpha = if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { 0.0 };
        if alpha <= 0.0 {
            return self;
        }
        if alpha >= 1.0 {
            return over;
        }

        use palette::{IntoColor, Oklab, Srgb};

        let base: Oklab = to_srgb(self).into_color();
        let top: Oklab = to_srgb(over).into_color();
        let mixed = Oklab::new(
            base.l + (top.l - base.l) * alpha,
            base.a + (top.a - base.a) * alpha,
            base.b + (top.b - base.b) * alpha,
        );
        let srgb: Srgb = mixed.into_color();
        let (r, g, b) = srgb.into_format::<u8>().into_components();
        Rgb::new(r, g, b)
    }
}

fn to_srgb(rgb: Rgb) -> palette::Srgb {
    palette::Srgb::new(
        rgb.r as f32 / 255.0,
        rgb.g as f32 / 255.0,
        rgb.b as f32 / 255.0,
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color '{0}'")]
pub struct ColorParseError(pub String);

impl Color {
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
        }
    }

    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let s = input.trim().to_ascii_lowercase();
        let err = || ColorParseError(input.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(err());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
            return Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        if let Some(args) = function_args(&s, "rgb") {
            let [r, g, b] = parse_components::<u8, 3>(args).ok_or_else(err)?;
            return Ok(Self::rgb(r, g, b));
        }

        if let Some(args) = function_args(&s, "oklch") {
            let [l, c, h] = parse_components::<f32, 3>(args).ok_or_else(err)?;
            return Ok(Self::oklch(l, c, h));
        }

        match s.as_str() {
            "black" => Ok(Self::rgb(0, 0, 0)),
            "white" => Ok(Self::rgb(255, 255, 255)),
            "red" => Ok(Self::rgb(255, 0, 0)),
            "green" => Ok(Self::rgb(0, 128, 0)),
            "blue" => Ok(Self::BLUE),
            "gray" | "grey" => Ok(Self::rgb(128, 128, 128)),
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_components<T: std::str::FromStr, const N: usize>(args: &str) -> Option<[T; N]> {
    let parts = args
        .split(',')
        .map(|p| p.trim().parse::<T>().ok())
        .collect::<Option<Vec<T>>>()?;
    parts.try_into().ok()
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
