use thiserror::Error;

use crate::domain::{Chips, EmptyDeck, SeatIndex};
use crate::eval::EvalError;

/// Ошибки протокола: действие отклонено, состояние стола не изменилось.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Места {0} нет за столом")]
    InvalidSeat(SeatIndex),

    #[error("Сейчас ход места {expected}, а не {actual}")]
    OutOfTurn { expected: SeatIndex, actual: SeatIndex },

    #[error("Игрок на месте {0} не может действовать в этой раздаче")]
    SeatNotActive(SeatIndex),

    #[error("Невозможно выполнить check – нужно доплатить {to_call}")]
    IllegalCheck { to_call: Chips },

    #[error("Рейз до {raise_to} меньше минимального {min_raise_to}")]
    IllegalRaise { raise_to: Chips, min_raise_to: Chips },

    #[error("Нет активного раунда ставок")]
    NoActiveRound,

    #[error("Раздача уже идёт")]
    HandAlreadyInProgress,

    #[error("Недостаточно игроков с фишками для раздачи")]
    NotEnoughPlayers,

    #[error("Игра окончена")]
    GameOver,

    #[error("Колода пуста")]
    EmptyDeck,
}

impl From<EmptyDeck> for EngineError {
    fn from(_: EmptyDeck) -> Self {
        EngineError::EmptyDeck
    }
}

/// Нарушение внутренних инвариантов движка (баг учёта).
///
/// Такие ошибки не возвращаются вызывающему коду: контроллер логирует их
/// и паникует, потому что фишки или карты могли появиться или исчезнуть.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("В колоде {found} карт вместо {expected}")]
    DeckCount { expected: usize, found: usize },

    #[error("В колоде только {unique} различных карт из {total}")]
    DuplicateCards { unique: usize, total: usize },

    #[error("Фишки не сходятся: было {expected}, стало {found}")]
    ChipsMismatch { expected: Chips, found: Chips },

    #[error("Банк {pot} не равен сумме вкладов {contributions}")]
    PotMismatch { pot: Chips, contributions: Chips },

    #[error("Не удалось оценить руку на шоудауне: {0}")]
    Evaluation(#[from] EvalError),
}
