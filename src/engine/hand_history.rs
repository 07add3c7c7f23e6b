use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{GamePhase, HandValue};
use crate::domain::SeatIndex;
use crate::engine::actions::PlayerActionKind;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted {
        hand_no: u64,
        dealer: SeatIndex,
        /// Стеки по местам до блайндов.
        starting_stacks: Vec<Chips>,
    },

    /// Блайнды (сумма может быть меньше номинала, если не хватило стека).
    BlindsPosted {
        small_blind: (SeatIndex, Chips),
        big_blind: (SeatIndex, Chips),
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt {
        seat: SeatIndex,
        cards: Vec<Card>,
    },

    /// Открыты общие карты на борде.
    BoardDealt {
        phase: GamePhase,
        burned: Card,
        cards: Vec<Card>,
    },

    /// Действие игрока.
    PlayerActed {
        seat: SeatIndex,
        action: PlayerActionKind,
        /// Сколько фишек реально ушло в банк.
        committed: Chips,
        stack_after: Chips,
        pot_after: Chips,
    },

    /// Смена фазы раздачи.
    PhaseChanged {
        phase: GamePhase,
    },

    /// Шоудаун – открытие карт.
    ShowdownReveal {
        seat: SeatIndex,
        hole_cards: Vec<Card>,
        value: HandValue,
    },

    /// Выплата из пота `pot_index` (0 – основной пот).
    PotAwarded {
        pot_index: usize,
        seat: SeatIndex,
        amount: Chips,
    },

    /// Раздача завершена.
    HandFinished {
        hand_no: u64,
        finishing_stacks: Vec<Chips>,
    },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история одной раздачи (append-only).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistory {
    pub hand_no: u64,
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new(hand_no: u64) -> Self {
        Self {
            hand_no,
            events: Vec::new(),
        }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Все действия игроков по порядку.
    pub fn actions(&self) -> impl Iterator<Item = (SeatIndex, PlayerActionKind)> + '_ {
        self.events.iter().filter_map(|e| match e.kind {
            HandEventKind::PlayerActed { seat, action, .. } => Some((seat, action)),
            _ => None,
        })
    }

    /// Раздача записана до конца.
    pub fn is_finished(&self) -> bool {
        matches!(
            self.events.last().map(|e| &e.kind),
            Some(HandEventKind::HandFinished { .. })
        )
    }
}
