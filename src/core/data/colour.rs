#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const GREEN: Self = Self { r: 0, g: 255, b: 0 };

    /// Packs into the RGB565 word used by small SPI TFT panels.
    #[must_use]
    pub fn to_rgb565(self) -> u16 {
        (u16::from(self.r & 0xf8) << 8) | (u16::from(self.g & 0xfc) << 3) | (u16::from(self.b) >> 3)
    }
}

impl From<[u8; 3]> for Colour {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}
