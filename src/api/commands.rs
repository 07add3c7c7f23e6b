use serde::{Deserialize, Serialize};

use crate::api::dto::{table_view, TableView};
use crate::api::errors::ApiError;
use crate::domain::{Chips, SeatIndex};
use crate::engine::{HandController, PlayerAction, PlayerActionKind, RandomSource};

/// Тип действия во внешнем формате.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionType {
    Fold,
    Check,
    Call,
    Raise,
}

/// Действие игрока в том виде, в каком его присылает клиент:
/// `{"action_type": "Raise", "seat": 2, "raise_to_amount": 300}`.
///
/// `raise_to_amount` учитывается только для `Raise`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionCommand {
    pub action_type: ActionType,
    pub seat: SeatIndex,
    #[serde(default)]
    pub raise_to_amount: u64,
}

impl ActionCommand {
    pub fn from_json(s: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(s)?)
    }
}

impl From<ActionCommand> for PlayerAction {
    fn from(cmd: ActionCommand) -> Self {
        let kind = match cmd.action_type {
            ActionType::Fold => PlayerActionKind::Fold,
            ActionType::Check => PlayerActionKind::Check,
            ActionType::Call => PlayerActionKind::Call,
            ActionType::Raise => PlayerActionKind::Raise(Chips(cmd.raise_to_amount)),
        };
        PlayerAction {
            seat: cmd.seat,
            kind,
        }
    }
}

impl From<PlayerAction> for ActionCommand {
    fn from(action: PlayerAction) -> Self {
        let (action_type, raise_to_amount) = match action.kind {
            PlayerActionKind::Fold => (ActionType::Fold, 0),
            PlayerActionKind::Check => (ActionType::Check, 0),
            PlayerActionKind::Call => (ActionType::Call, 0),
            PlayerActionKind::Raise(to) => (ActionType::Raise, to.0),
        };
        Self {
            action_type,
            seat: action.seat,
            raise_to_amount,
        }
    }
}

/// Команда верхнего уровня для одного стола.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Запустить новую раздачу (если сейчас нет активной).
    StartHand,
    /// Действие игрока в раздаче.
    Action(ActionCommand),
}

/// Выполнить команду и вернуть снимок стола глазами `viewer`.
///
/// Отклонённая команда ничего не меняет на столе.
pub fn execute<R: RandomSource>(
    controller: &mut HandController<R>,
    command: Command,
    viewer: Option<SeatIndex>,
) -> Result<TableView, ApiError> {
    match command {
        Command::StartHand => controller.start_hand()?,
        Command::Action(cmd) => {
            controller.apply_action(cmd.into())?;
        }
    }
    Ok(table_view(controller, viewer))
}
