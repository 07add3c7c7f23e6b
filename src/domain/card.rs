use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Масть карты.
///
/// Порядок мастей нужен только для детерминированной сортировки карт,
/// на силу руки он не влияет.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Suit {
    Clubs,    // ♣
    Diamonds, // ♦
    Hearts,   // ♥
    Spades,   // ♠
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

/// Ранг карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Числовое значение: 2..=14 (туз = 14).
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(v: u8) -> Option<Rank> {
        Rank::ALL.iter().copied().find(|r| r.value() == v)
    }
}

/// Обычная покерная карта (52-карточная колода).
///
/// Сравнение: сначала ранг, потом масть (порядок полей важен для derive).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            r => char::from(b'0' + r.value()),
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Парсинг строки вида "Ah", "Td", "7c" (а также "10h").
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (rank_part, suit_part) = match s.char_indices().last() {
            Some((idx, _)) if idx > 0 => s.split_at(idx),
            _ => return Err(format!("Некорректная карта: {s:?}")),
        };

        let rank = match rank_part {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "t" | "10" => Rank::Ten,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            "A" | "a" => Rank::Ace,
            _ => return Err(format!("Invalid rank: {rank_part}")),
        };

        let suit = match suit_part {
            "c" | "C" => Suit::Clubs,
            "d" | "D" => Suit::Diamonds,
            "h" | "H" => Suit::Hearts,
            "s" | "S" => Suit::Spades,
            _ => return Err(format!("Invalid suit: {suit_part}")),
        };

        Ok(Card { rank, suit })
    }
}

/// Распарсить список карт через пробел: "As Kd 7c".
pub fn parse_cards(s: &str) -> Result<Vec<Card>, String> {
    s.split_whitespace().map(Card::from_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_roundtrips_through_display() {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let card = Card::new(rank, suit);
                assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
            }
        }
    }

    #[test]
    fn ten_accepts_both_spellings() {
        assert_eq!("10h".parse::<Card>().unwrap(), "Th".parse::<Card>().unwrap());
    }

    #[test]
    fn ordering_is_rank_first() {
        let two_spades: Card = "2s".parse().unwrap();
        let three_clubs: Card = "3c".parse().unwrap();
        let three_hearts: Card = "3h".parse().unwrap();
        assert!(two_spades < three_clubs);
        assert!(three_clubs < three_hearts);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!("".parse::<Card>().is_err());
        assert!("X".parse::<Card>().is_err());
        assert!("1s".parse::<Card>().is_err());
        assert!("Ax".parse::<Card>().is_err());
    }
}
