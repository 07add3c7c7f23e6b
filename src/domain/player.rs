use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::HandValue;
use crate::domain::SeatIndex;

/// Статус игрока в контексте стола/раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Игрок активен в текущей раздаче и может действовать.
    Active,
    /// Игрок сфолдил и больше не претендует на банк.
    Folded,
    /// Игрок в оллыне – не может больше делать ставки.
    AllIn,
    /// Игрок вылетел (нулевой стек) и больше не играет.
    Busted,
}

/// Статистика игрока за всю игру (для экрана конца игры).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerStats {
    /// Лучшая рука, показанная на шоудауне за всю игру.
    pub best_hand: Option<HandValue>,
    /// Пять карт этой руки.
    pub best_five: Vec<Card>,
    /// Самая крупная доля банка, выигранная за одну раздачу.
    pub largest_pot_share: Chips,
    /// Стек после каждой завершённой раздачи.
    pub stack_history: Vec<Chips>,
}

/// Состояние игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAtTable {
    pub seat: SeatIndex,
    /// Фишки, ещё не поставленные на этой улице.
    pub stack: Chips,
    /// Ставка на текущей улице (обнуляется каждую улицу).
    pub bet: Chips,
    /// Суммарный вклад за всю раздачу (для сайд-потов).
    pub hand_bet: Chips,
    pub status: PlayerStatus,
    /// Действовал ли игрок на этой улице.
    pub touched: bool,
    /// Карманные карты (0 или 2).
    pub hole_cards: Vec<Card>,
    /// Сила руки, посчитанная на последнем шоудауне.
    pub hand_value: Option<HandValue>,
    pub stats: PlayerStats,
}

impl PlayerAtTable {
    pub fn new(seat: SeatIndex, stack: Chips) -> Self {
        Self {
            seat,
            stack,
            bet: Chips::ZERO,
            hand_bet: Chips::ZERO,
            status: if stack.is_zero() {
                PlayerStatus::Busted
            } else {
                PlayerStatus::Active
            },
            touched: false,
            hole_cards: Vec::new(),
            hand_value: None,
            stats: PlayerStats::default(),
        }
    }

    pub fn is_folded(&self) -> bool {
        self.status == PlayerStatus::Folded
    }

    pub fn is_all_in(&self) -> bool {
        self.status == PlayerStatus::AllIn
    }

    pub fn is_playing(&self) -> bool {
        self.status != PlayerStatus::Busted
    }

    /// Может ли игрок ещё действовать на этой улице.
    pub fn can_act(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// Претендует ли игрок на банк (не сфолдил и не вылетел).
    pub fn is_in_hand(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    /// Поставить не более `amount` из стека. Возвращает реально поставленное.
    ///
    /// Фишки уходят в `bet` и `hand_bet`; пустой стек означает all-in.
    pub fn commit(&mut self, amount: Chips) -> Chips {
        let real = amount.min(self.stack);
        self.stack -= real;
        self.bet += real;
        self.hand_bet += real;
        if self.stack.is_zero() && self.status == PlayerStatus::Active {
            self.status = PlayerStatus::AllIn;
        }
        real
    }

    pub fn fold(&mut self) {
        self.status = PlayerStatus::Folded;
    }

    /// Сброс полей, живущих одну улицу.
    pub fn clear_for_new_street(&mut self) {
        self.bet = Chips::ZERO;
        self.touched = false;
    }

    /// Сброс полей, живущих одну раздачу. Карты возвращает контроллер.
    pub fn clear_for_new_hand(&mut self) {
        self.clear_for_new_street();
        self.hand_bet = Chips::ZERO;
        self.hand_value = None;
        self.status = if self.stack.is_zero() {
            PlayerStatus::Busted
        } else {
            PlayerStatus::Active
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_is_capped_by_stack_and_marks_all_in() {
        let mut p = PlayerAtTable::new(0, Chips(80));
        let paid = p.commit(Chips(100));
        assert_eq!(paid, Chips(80));
        assert_eq!(p.stack, Chips::ZERO);
        assert_eq!(p.bet, Chips(80));
        assert_eq!(p.hand_bet, Chips(80));
        assert!(p.is_all_in());
    }

    #[test]
    fn street_reset_keeps_hand_contribution() {
        let mut p = PlayerAtTable::new(3, Chips(1_000));
        p.commit(Chips(200));
        p.touched = true;
        p.clear_for_new_street();
        assert_eq!(p.bet, Chips::ZERO);
        assert_eq!(p.hand_bet, Chips(200));
        assert!(!p.touched);
    }

    #[test]
    fn empty_stack_busts_on_new_hand() {
        let mut p = PlayerAtTable::new(1, Chips(10));
        p.commit(Chips(10));
        p.stack = Chips::ZERO;
        p.clear_for_new_hand();
        assert!(!p.is_playing());
    }
}
