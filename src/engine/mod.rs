//! Покерный движок: ставки, переход улиц, сайд-поты, шоудаун.
//!
//! Высокоуровневый объект: `HandController`
//! Основные операции:
//!   - `start_hand` – запустить новую раздачу
//!   - `apply_action` – применить действие игрока (улицы и шоудаун – автоматически)
//!   - `reset_round` – вернуть карты в колоду и подготовить стол

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod observer;
pub mod positions;
pub mod profiles;
pub mod showdown;
pub mod side_pots;
pub mod validation;

pub use actions::{PlayerAction, PlayerActionKind};
pub use betting::{BettingRound, RoundStatus};
pub use errors::{EngineError, IntegrityError};
pub use game_loop::HandController;
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use observer::TableObserver;
pub use profiles::{PlayerProfiles, SeatProfile};
pub use showdown::{run_showdown, PotResult, RevealedHand, ShowdownResult};
pub use side_pots::{compute_side_pots, contributions_from_table, Contribution, SidePot};
pub use validation::{legal_actions, validate_action, LegalActions, ValidatedAction};

/// RNG интерфейс для engine.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        (**self).shuffle(slice)
    }
}
