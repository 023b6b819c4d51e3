use serde::{Deserialize, Serialize};
use std::fmt;

/// Slot reel symbol. The strip is fixed at six symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Cherry,
    Orange,
    Lemon,
    Diamond,
    Seven,
    Jackpot,
}

impl Symbol {
    pub const ALL: [Symbol; 6] = [
        Symbol::Cherry,
        Symbol::Orange,
        Symbol::Lemon,
        Symbol::Diamond,
        Symbol::Seven,
        Symbol::Jackpot,
    ];

    pub fn glyph(&self) -> &'static str {
        match self {
            Symbol::Cherry => "🍒",
            Symbol::Orange => "🍊",
            Symbol::Lemon => "🍋",
            Symbol::Diamond => "💎",
            Symbol::Seven => "7️⃣",
            Symbol::Jackpot => "🎰",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}
