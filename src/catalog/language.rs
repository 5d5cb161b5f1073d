/// A 24-bit color.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build a color from a `0xRRGGBB` literal.
    ///
    /// # Example
    ///
    /// ```
    /// use assembly_endgame::catalog::Rgb;
    /// assert_eq!(Rgb::from_hex(0xE2680F), Rgb(0xE2, 0x68, 0x0F));
    /// ```
    pub const fn from_hex(hex: u32) -> Self {
        Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

/// One of the programming languages standing between the player and Assembly.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Language {
    pub name: &'static str,
    pub color: Rgb,
    pub background: Rgb,
}

const LIGHT: Rgb = Rgb::from_hex(0xF9F4DA);
const DARK: Rgb = Rgb::from_hex(0x1E1E1E);

const fn language(name: &'static str, color: Rgb, background: u32) -> Language {
    Language {
        name,
        color,
        background: Rgb::from_hex(background),
    }
}

/// Languages in elimination order. Every wrong guess takes out the next one;
/// the last entry is whatever is left when the game is lost.
pub const LANGUAGES: [Language; 9] = [
    language("HTML", LIGHT, 0xE2680F),
    language("CSS", LIGHT, 0x328AF1),
    language("JavaScript", DARK, 0xF4EB13),
    language("React", DARK, 0x2ED3E9),
    language("TypeScript", LIGHT, 0x298EC6),
    language("Node.js", LIGHT, 0x599137),
    language("Python", DARK, 0xFFD742),
    language("Ruby", LIGHT, 0xD02B2B),
    language("Assembly", LIGHT, 0x2D519F),
];
