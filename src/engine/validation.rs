use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PlayerAtTable, TableState};
use crate::engine::actions::PlayerActionKind;
use crate::engine::errors::EngineError;

/// Действие после проверки правил, с уже посчитанными суммами.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Доплатить столько фишек (может быть меньше долга – колл в all-in).
    Call(Chips),
    /// Довести ставку на улице до `raise_to` (уже обрезано по стеку).
    Raise { raise_to: Chips },
}

/// Контекст допустимых действий для игрока, чей сейчас ход.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegalActions {
    pub to_call: Chips,
    pub can_check: bool,
    /// Сколько реально уйдёт при колле (не больше стека).
    pub call_amount: Chips,
    /// Минимальная сумма рейза (или весь стек, если его не хватает).
    pub min_raise_to: Chips,
    /// Максимум – all-in.
    pub max_raise_to: Chips,
    pub can_raise: bool,
}

/// Минимальная сумма, до которой можно повысить без all-in.
pub fn min_raise_to(table: &TableState) -> Chips {
    table.current_bet + table.last_raise_size
}

pub fn legal_actions(player: &PlayerAtTable, table: &TableState) -> LegalActions {
    let to_call = table.current_bet.saturating_sub(player.bet);
    let all_in_total = player.bet + player.stack;
    LegalActions {
        to_call,
        can_check: to_call.is_zero(),
        call_amount: to_call.min(player.stack),
        min_raise_to: min_raise_to(table).min(all_in_total),
        max_raise_to: all_in_total,
        can_raise: all_in_total > table.current_bet,
    }
}

/// Проверка, может ли игрок выполнить это действие при текущем состоянии ставок.
/// Ничего не меняет: при ошибке стол остаётся как был.
pub fn validate_action(
    player: &PlayerAtTable,
    action: &PlayerActionKind,
    table: &TableState,
) -> Result<ValidatedAction, EngineError> {
    if !player.can_act() {
        return Err(EngineError::SeatNotActive(player.seat));
    }

    let to_call = table.current_bet.saturating_sub(player.bet);

    match *action {
        PlayerActionKind::Fold => Ok(ValidatedAction::Fold),

        PlayerActionKind::Check => {
            if to_call.is_zero() {
                Ok(ValidatedAction::Check)
            } else {
                Err(EngineError::IllegalCheck { to_call })
            }
        }

        // Колл без долга – это просто check.
        PlayerActionKind::Call if to_call.is_zero() => Ok(ValidatedAction::Check),
        PlayerActionKind::Call => Ok(ValidatedAction::Call(to_call.min(player.stack))),

        PlayerActionKind::Raise(requested) => {
            let all_in_total = player.bet + player.stack;
            let raise_to = requested.min(all_in_total);
            let min_to = min_raise_to(table);

            // Короткий all-in разрешён всегда, обычный рейз – не меньше минимального.
            if raise_to < all_in_total && raise_to < min_to {
                return Err(EngineError::IllegalRaise {
                    raise_to,
                    min_raise_to: min_to,
                });
            }
            Ok(ValidatedAction::Raise { raise_to })
        }
    }
}
