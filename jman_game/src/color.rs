use rand::Rng;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    White,
}

impl Color {
    /// The three colors that take part in the capture cycle.
    pub const ELEMENTAL: [Color; 3] = [Color::Red, Color::Green, Color::Yellow];

    pub fn random_elemental<R: Rng + ?Sized>(rng: &mut R) -> Color {
        Self::ELEMENTAL[rng.gen_range(0..Self::ELEMENTAL.len())]
    }

    pub fn is_elemental(&self) -> bool {
        *self != Color::White
    }

    /// Whether a piece of this color may capture a piece of `target` color.
    /// Green takes Red, Red takes Yellow, Yellow takes Green.
    pub fn captures(&self, target: Color) -> bool {
        match (self, target) {
            (Color::Green, Color::Red) => true,
            (Color::Red, Color::Yellow) => true,
            (Color::Yellow, Color::Green) => true,
            _ => false,
        }
    }

    pub fn word(&self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::White => "White",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.word())
    }
}
