use serde::{Deserialize, Serialize};

/// Red pockets on the wheel. Black is the complement within 1..=36.
pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Wheel color of a pocket. Zero is green and matches neither color bet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
    Green,
}

pub fn color_of(pocket: u8) -> Color {
    if pocket == 0 {
        Color::Green
    } else if RED_NUMBERS.contains(&pocket) {
        Color::Red
    } else {
        Color::Black
    }
}

/// A single roulette wager. Straight carries the backed pocket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouletteBet {
    Straight(u8),
    Even,
    Odd,
    Red,
    Black,
}
