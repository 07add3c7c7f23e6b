use serde::{Deserialize, Serialize};

/// Фаза раздачи (состояние HandController).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Стол создан, первая раздача ещё не начиналась.
    Setup,
    Preflop,
    Flop,
    Turn,
    River,
    /// Раздача завершена и выплачена, стол ждёт `start_hand`.
    Showdown,
    /// Фишки остались только у одного игрока.
    GameOver,
}

impl GamePhase {
    /// Идёт ли сейчас торговля (улица с активным раундом ставок).
    pub fn is_betting_street(self) -> bool {
        matches!(
            self,
            GamePhase::Preflop | GamePhase::Flop | GamePhase::Turn | GamePhase::River
        )
    }

    /// Следующая улица и сколько карт борда для неё открывается.
    pub fn next_street(self) -> Option<(GamePhase, usize)> {
        match self {
            GamePhase::Preflop => Some((GamePhase::Flop, 3)),
            GamePhase::Flop => Some((GamePhase::Turn, 1)),
            GamePhase::Turn => Some((GamePhase::River, 1)),
            _ => None,
        }
    }
}

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

/// Сила руки: категория + тай-брейк (ранги групп, затем кикеры по убыванию).
///
/// Сравнение лексикографическое: сначала категория, потом тай-брейк.
/// Неиспользуемые позиции тай-брейка заполнены нулями, поэтому внутри
/// одной категории длины всегда совпадают.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue {
    pub category: HandCategory,
    pub tiebreak: [u8; 5],
}
