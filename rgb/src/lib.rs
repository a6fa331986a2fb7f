use std::{fmt, str::FromStr};

mod error;
mod percent;
mod sweep;

pub use error::{Error, Result};
pub use percent::Percent;
pub use sweep::{sweep, Adjustment, MAX_ADJUSTMENTS};

/// An sRGB color with one byte per channel, in `[red, green, blue]` order.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([255, 255, 255]);
    pub const BLACK: Rgb = Rgb([0, 0, 0]);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Rgb([red, green, blue])
    }

    /// Expects a packed `0xRRGGBB` value. Bits above the blue, green and red bytes are ignored.
    pub fn from_hex(hex: u32) -> Self {
        Rgb([
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        ])
    }

    pub fn to_hex(self) -> u32 {
        ((self.0[0] as u32) << 16) + ((self.0[1] as u32) << 8) + self.0[2] as u32
    }

    pub fn red(self) -> u8 {
        self.0[0]
    }

    pub fn green(self) -> u8 {
        self.0[1]
    }

    pub fn blue(self) -> u8 {
        self.0[2]
    }

    /// Multiplies every channel by `factor`, rounding half away from zero and clamping to
    /// `0..=255`.
    pub fn scaled(&self, factor: f64) -> Self {
        let [red, green, blue] = self.0;

        Self([
            scale_channel(red, factor),
            scale_channel(green, factor),
            scale_channel(blue, factor),
        ])
    }

    /// Brightens (positive) or darkens (negative) the color by `percent`.
    ///
    /// `-100` always yields black, `0` yields the same color.
    pub fn adjusted(&self, percent: Percent) -> Self {
        self.scaled(percent.factor())
    }

    pub fn sweep(&self, start: Percent, end: Percent, step: Percent) -> Result<Vec<Adjustment>> {
        sweep(*self, start, end, step)
    }
}

fn scale_channel(channel: u8, factor: f64) -> u8 {
    let scaled = (channel as f64 * factor).round();

    // clamp passes NaN through, `as` saturates it to 0
    scaled.clamp(0.0, 255.0) as u8
}

impl FromStr for Rgb {
    type Err = Error;

    /// Accepts `RRGGBB` with an optional leading `#`, in any case.
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidFormat(s.to_string()));
        }

        u32::from_str_radix(digits, 16)
            .map(Rgb::from_hex)
            .map_err(|_| Error::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [red, green, blue] = self.0;
        f.pad(&format!("#{:02x}{:02x}{:02x}", red, green, blue))
    }
}
