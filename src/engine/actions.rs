use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex};

/// Тип действия игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    Fold,
    Check,
    Call,
    /// Рейз (или бет на пустой улице) до указанной суммы ставки на улице.
    Raise(Chips),
}

/// Конкретное действие игрока. Потребляется раундом ставок ровно один раз.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    /// Место действующего игрока.
    pub seat: SeatIndex,
    pub kind: PlayerActionKind,
}

impl PlayerAction {
    pub fn fold(seat: SeatIndex) -> Self {
        Self {
            seat,
            kind: PlayerActionKind::Fold,
        }
    }

    pub fn check(seat: SeatIndex) -> Self {
        Self {
            seat,
            kind: PlayerActionKind::Check,
        }
    }

    pub fn call(seat: SeatIndex) -> Self {
        Self {
            seat,
            kind: PlayerActionKind::Call,
        }
    }

    pub fn raise_to(seat: SeatIndex, amount: Chips) -> Self {
        Self {
            seat,
            kind: PlayerActionKind::Raise(amount),
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PlayerActionKind::Fold => write!(f, "seat {} folds", self.seat),
            PlayerActionKind::Check => write!(f, "seat {} checks", self.seat),
            PlayerActionKind::Call => write!(f, "seat {} calls", self.seat),
            PlayerActionKind::Raise(to) => write!(f, "seat {} raises to {}", self.seat, to),
        }
    }
}
