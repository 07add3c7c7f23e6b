use crate::domain::card::Rank;
use crate::domain::hand::{HandCategory, HandValue};

impl HandCategory {
    /// Все категории от слабейшей к сильнейшей.
    pub const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    /// Человеческое название категории.
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl HandValue {
    /// Собрать HandValue из категории и значимых рангов (от старшего к младшему).
    /// Недостающие позиции тай-брейка заполняются нулями.
    pub fn from_category_and_ranks(category: HandCategory, ranks: &[Rank]) -> Self {
        let mut tiebreak = [0u8; 5];
        for (slot, rank) in tiebreak.iter_mut().zip(ranks.iter()) {
            *slot = rank.value();
        }
        HandValue { category, tiebreak }
    }

    /// Главный ранг руки (ранг пары/сета/каре или старшая карта стрита).
    pub fn primary_rank(&self) -> Option<Rank> {
        Rank::from_value(self.tiebreak[0])
    }
}

fn rank_name(rank: Rank) -> &'static str {
    match rank {
        Rank::Two => "Twos",
        Rank::Three => "Threes",
        Rank::Four => "Fours",
        Rank::Five => "Fives",
        Rank::Six => "Sixes",
        Rank::Seven => "Sevens",
        Rank::Eight => "Eights",
        Rank::Nine => "Nines",
        Rank::Ten => "Tens",
        Rank::Jack => "Jacks",
        Rank::Queen => "Queens",
        Rank::King => "Kings",
        Rank::Ace => "Aces",
    }
}

/// Человеческое описание руки: "Pair of Kings", "Straight, Five high" и т.п.
pub fn describe_hand(value: &HandValue) -> String {
    let name = value.category.name();
    let Some(primary) = value.primary_rank() else {
        return name.to_string();
    };
    let second = Rank::from_value(value.tiebreak[1]);

    match value.category {
        HandCategory::OnePair | HandCategory::ThreeOfAKind | HandCategory::FourOfAKind => {
            format!("{name}, {}", rank_name(primary))
        }
        HandCategory::TwoPair => match second {
            Some(low) => format!("{name}, {} and {}", rank_name(primary), rank_name(low)),
            None => name.to_string(),
        },
        HandCategory::FullHouse => match second {
            Some(pair) => format!("{name}, {} full of {}", rank_name(primary), rank_name(pair)),
            None => name.to_string(),
        },
        HandCategory::HighCard
        | HandCategory::Straight
        | HandCategory::Flush
        | HandCategory::StraightFlush => format!("{name}, {primary} high"),
    }
}
