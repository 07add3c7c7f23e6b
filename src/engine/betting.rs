use serde::{Deserialize, Serialize};

use crate::domain::{PlayerAtTable, SeatIndex, TableState};
use crate::engine::actions::PlayerAction;
use crate::engine::errors::EngineError;
use crate::engine::positions::{first_actor_from, next_seat_where};
use crate::engine::side_pots::{compute_side_pots, contributions_from_table};
use crate::engine::validation::{legal_actions, validate_action, LegalActions, ValidatedAction};

/// Чем закончилось применение действия.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundStatus {
    /// Раунд продолжается, ход перешёл к `BettingRound::current_seat`.
    InProgress,
    /// Улица доторгована, сайд-поты посчитаны.
    StreetComplete,
    /// В раздаче остался один несфолдивший игрок.
    HandDecided,
}

/// Раунд ставок (одна улица).
///
/// Раунд не владеет столом: все операции получают `&mut TableState`,
/// так контроллер остаётся единственным владельцем состояния.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingRound {
    /// Чей сейчас ход (None, если раунд завершён).
    pub current_seat: Option<SeatIndex>,
    /// Seat последнего агрессора на этой улице.
    pub last_raiser: Option<SeatIndex>,
    pub active: bool,
    /// Раунд завершился, потому что претендент на банк остался один.
    pub hand_decided: bool,
}

/// Должен ли игрок ещё действовать на этой улице.
fn owes_action(p: &PlayerAtTable, table: &TableState) -> bool {
    p.can_act() && (p.bet < table.current_bet || !p.touched)
}

impl BettingRound {
    /// Начать раунд с первого, кто может действовать, начиная с `starting_index`.
    ///
    /// Если торговать некому (все в all-in или сфолдили), раунд сразу
    /// завершается, и сайд-поты уже посчитаны.
    pub fn new(table: &mut TableState, starting_index: SeatIndex) -> Self {
        let mut round = Self {
            current_seat: first_actor_from(table, starting_index),
            last_raiser: None,
            active: true,
            hand_decided: false,
        };
        if round.current_seat.is_none() || round.is_complete(table) {
            round.finish(table);
        }
        round
    }

    /// Применить действие игрока.
    pub fn apply(
        &mut self,
        table: &mut TableState,
        action: PlayerAction,
    ) -> Result<RoundStatus, EngineError> {
        if !self.active {
            return Err(EngineError::NoActiveRound);
        }
        let player = table
            .player(action.seat)
            .ok_or(EngineError::InvalidSeat(action.seat))?;
        let expected = self.current_seat.ok_or(EngineError::NoActiveRound)?;
        if expected != action.seat {
            return Err(EngineError::OutOfTurn {
                expected,
                actual: action.seat,
            });
        }

        // Сначала проверка, потом мутация.
        let validated = validate_action(player, &action.kind, table)?;

        let seat = action.seat;
        match validated {
            ValidatedAction::Fold => {
                // Поставленное остаётся в банке мёртвыми деньгами.
                table.players[seat].fold();
            }
            ValidatedAction::Check => {}
            ValidatedAction::Call(amount) => {
                let paid = table.players[seat].commit(amount);
                table.pot += paid;
            }
            ValidatedAction::Raise { raise_to } => {
                let put_in = raise_to.saturating_sub(table.players[seat].bet);
                let paid = table.players[seat].commit(put_in);
                table.pot += paid;

                if raise_to > table.current_bet {
                    table.last_raise_size = raise_to - table.current_bet;
                    table.current_bet = raise_to;
                    table.n_raises += 1;
                    self.last_raiser = Some(seat);
                }
            }
        }

        table.players[seat].touched = true;

        if self.is_complete(table) {
            self.finish(table);
            return Ok(if self.hand_decided {
                RoundStatus::HandDecided
            } else {
                RoundStatus::StreetComplete
            });
        }

        self.advance_turn(table, seat);
        Ok(RoundStatus::InProgress)
    }

    /// Допустимые действия для текущего игрока.
    pub fn legal_actions(&self, table: &TableState) -> Option<LegalActions> {
        if !self.active {
            return None;
        }
        let seat = self.current_seat?;
        table.player(seat).map(|p| legal_actions(p, table))
    }

    /// Проверка, завершён ли раунд ставок:
    /// - претендент на банк остался один, или
    /// - никто больше не должен действовать, или
    /// - действовать может максимум один игрок и он уже уравнял ставку.
    fn is_complete(&self, table: &TableState) -> bool {
        if table.in_hand_count() <= 1 {
            return true;
        }
        let owed = table.players.iter().filter(|p| owes_action(p, table)).count();
        if owed == 0 {
            return true;
        }
        table.can_act_count() <= 1
            && table
                .players
                .iter()
                .filter(|p| p.can_act())
                .all(|p| p.bet >= table.current_bet)
    }

    fn finish(&mut self, table: &mut TableState) {
        self.active = false;
        self.current_seat = None;
        self.hand_decided = table.in_hand_count() <= 1;
        table.side_pots = compute_side_pots(&contributions_from_table(table));
    }

    /// Передать ход следующему по кругу, кто ещё должен действовать.
    fn advance_turn(&mut self, table: &TableState, from: SeatIndex) {
        self.current_seat = next_seat_where(table, from, false, |p| owes_action(p, table));
    }
}
