use crate::domain::{GamePhase, TableState};
use crate::engine::actions::PlayerAction;
use crate::engine::showdown::ShowdownResult;

/// Наблюдатель за столом: боты, UI, логгеры.
///
/// Контроллер вызывает хуки после каждого перехода, когда состояние стола уже
/// обновлено. Все методы по умолчанию ничего не делают.
pub trait TableObserver {
    /// Новая фаза (улица, шоудаун, конец игры). Бот сбрасывает счётчики улицы.
    fn on_phase_change(&mut self, _phase: GamePhase, _table: &TableState) {}

    /// Действие принято и применено.
    fn on_action(&mut self, _action: &PlayerAction, _table: &TableState) {}

    /// Банк выплачен.
    fn on_hand_finished(&mut self, _result: &ShowdownResult, _table: &TableState) {}
}
