mod hex_color;

pub use hex_color::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0)
    }

    /// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    pub fn hex(raw: &str) -> Option<Self> {
        parse_hex(raw).map(|[r, g, b, a]| Self::rgba(r, g, b, a))
    }

    pub const fn to_rgba_u8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    pub const fn alpha(self) -> u8 {
        self.a
    }

    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::transparent()
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn hex_accepts_short_and_long_forms() {
        assert_eq!(Color::hex("#fff"), Some(Color::rgb(255, 255, 255)));
        assert_eq!(Color::hex("#f008"), Some(Color::rgba(255, 0, 0, 136)));
        assert_eq!(Color::hex("#102030"), Some(Color::rgb(16, 32, 48)));
        assert_eq!(Color::hex("#10203040"), Some(Color::rgba(16, 32, 48, 64)));
    }

    #[test]
    fn hex_rejects_malformed_input() {
        assert_eq!(Color::hex("fff"), None);
        assert_eq!(Color::hex("#ggg"), None);
        assert_eq!(Color::hex("#12345"), None);
    }

    #[test]
    fn default_is_transparent() {
        assert!(Color::default().is_transparent());
        assert_eq!(Color::rgb(1, 2, 3).alpha(), 255);
    }
}
