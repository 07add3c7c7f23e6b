use crate::domain::chips::Chips;
use crate::domain::deck::{Deck, DECK_SIZE};
use crate::domain::hand::GamePhase;
use crate::domain::table::{ConfigError, TableConfig, TableState};
use crate::domain::SeatIndex;
use crate::engine::actions::PlayerAction;
use crate::engine::betting::{BettingRound, RoundStatus};
use crate::engine::errors::{EngineError, IntegrityError};
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::observer::TableObserver;
use crate::engine::positions::{blind_seats, next_playing_seat, seats_from};
use crate::engine::profiles::PlayerProfiles;
use crate::engine::showdown::{run_showdown, ShowdownResult};
use crate::engine::validation::LegalActions;
use crate::engine::RandomSource;

/// Нарушение инварианта учёта: логируем и падаем.
fn integrity_failure(err: IntegrityError) -> ! {
    log::error!("Нарушен инвариант движка: {err}");
    panic!("integrity violation: {err}");
}

/// Контроллер раздач одного стола.
///
/// Владеет колодой, столом, RNG и текущим раундом ставок. Фазы:
/// Setup → Preflop → Flop → Turn → River → Showdown → (Preflop | GameOver).
///
/// После шоудауна банк выплачивается и сразу вызывается `reset_round`, так
/// что стол остаётся в фазе `Showdown` в ожидании следующего `start_hand`
/// (или в `GameOver`, если фишки остались у одного игрока).
pub struct HandController<R: RandomSource> {
    table: TableState,
    deck: Deck,
    rng: R,
    phase: GamePhase,
    round: Option<BettingRound>,
    hand_no: u64,
    /// Фишки на столе в начале раздачи (для проверки сохранения).
    chips_at_start: Chips,
    /// Раздача сыграна, но стол ещё не сброшен.
    pending_reset: bool,
    history: HandHistory,
    profiles: PlayerProfiles,
    observers: Vec<Box<dyn TableObserver>>,
    last_showdown: Option<ShowdownResult>,
}

impl<R: RandomSource> HandController<R> {
    pub fn new(config: TableConfig, rng: R) -> Result<Self, ConfigError> {
        Ok(Self::with_table(TableState::new(config)?, rng))
    }

    /// Контроллер над уже подготовленным столом (например, с разными стеками).
    pub fn with_table(table: TableState, rng: R) -> Self {
        let profiles = PlayerProfiles::new(table.num_seats());
        let chips_at_start = table.total_chips();
        Self {
            table,
            deck: Deck::standard_52(),
            rng,
            phase: GamePhase::Setup,
            round: None,
            hand_no: 0,
            chips_at_start,
            pending_reset: false,
            history: HandHistory::default(),
            profiles,
            observers: Vec::new(),
            last_showdown: None,
        }
    }

    /// Заменить колоду (реплей, тесты). Карты сдаются с конца `deck.cards`.
    ///
    /// Колода всё равно тасуется в `start_hand` через RNG контроллера.
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    pub fn add_observer(&mut self, observer: Box<dyn TableObserver>) {
        self.observers.push(observer);
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn hand_no(&self) -> u64 {
        self.hand_no
    }

    /// История текущей (или последней сыгранной) раздачи.
    pub fn history(&self) -> &HandHistory {
        &self.history
    }

    pub fn last_showdown(&self) -> Option<&ShowdownResult> {
        self.last_showdown.as_ref()
    }

    pub fn profiles(&self) -> &PlayerProfiles {
        &self.profiles
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Чей ход.
    pub fn current_seat(&self) -> Option<SeatIndex> {
        self.round
            .as_ref()
            .filter(|r| r.active)
            .and_then(|r| r.current_seat)
    }

    /// Допустимые действия для того, чей ход.
    pub fn legal_actions(&self) -> Option<LegalActions> {
        self.round.as_ref()?.legal_actions(&self.table)
    }

    /// Победитель игры (единственный, у кого остались фишки).
    pub fn winner(&self) -> Option<SeatIndex> {
        if !self.is_game_over() {
            return None;
        }
        self.table.players.iter().find(|p| p.is_playing()).map(|p| p.seat)
    }

    /// Все карты: колода + руки + борд + сожжённые. Всегда 52.
    pub fn cards_accounted(&self) -> usize {
        self.deck.len()
            + self.table.board.len()
            + self.table.burned.len()
            + self
                .table
                .players
                .iter()
                .map(|p| p.hole_cards.len())
                .sum::<usize>()
    }

    /// Старт новой раздачи:
    /// - тасует колоду;
    /// - постит блайнды;
    /// - раздаёт по 2 карманные карты;
    /// - открывает раунд ставок префлопа с первого места после BB.
    pub fn start_hand(&mut self) -> Result<(), EngineError> {
        if self.phase == GamePhase::GameOver {
            return Err(EngineError::GameOver);
        }
        if self.phase.is_betting_street() {
            return Err(EngineError::HandAlreadyInProgress);
        }
        if self.pending_reset {
            self.reset_round()?;
            if self.phase == GamePhase::GameOver {
                return Err(EngineError::GameOver);
            }
        }
        if self.table.playing_count() < 2 {
            return Err(EngineError::NotEnoughPlayers);
        }

        // Кнопка должна стоять на играющем месте.
        let mut dealer = self.table.dealer;
        if !self.table.players[dealer].is_playing() {
            dealer = next_playing_seat(&self.table, dealer).ok_or(EngineError::NotEnoughPlayers)?;
        }
        let (sb_seat, bb_seat) =
            blind_seats(&self.table, dealer).ok_or(EngineError::NotEnoughPlayers)?;

        self.hand_no += 1;
        self.rng.shuffle(&mut self.deck.cards);
        self.chips_at_start = self.table.total_chips();
        self.last_showdown = None;
        self.pending_reset = true;

        self.table.dealer = dealer;
        self.table.small_blind_seat = sb_seat;
        self.table.big_blind_seat = bb_seat;
        self.table.side_pots.clear();

        self.history = HandHistory::new(self.hand_no);
        self.history.push(HandEventKind::HandStarted {
            hand_no: self.hand_no,
            dealer,
            starting_stacks: self.table.players.iter().map(|p| p.stack).collect(),
        });
        self.profiles.on_hand_started(&self.table);

        log::info!(
            "Раздача #{}: дилер {}, SB {}, BB {}",
            self.hand_no,
            dealer,
            sb_seat,
            bb_seat
        );

        self.post_blinds(sb_seat, bb_seat);
        self.deal_hole_cards(dealer)?;

        self.set_phase(GamePhase::Preflop);
        let first = (bb_seat + 1) % self.table.num_seats();
        let round = BettingRound::new(&mut self.table, first);
        let decided = round.hand_decided;
        let active = round.active;
        self.round = Some(round);
        if !active {
            // Торговать некому (все в all-in с блайндов).
            self.after_round(decided)?;
        }
        Ok(())
    }

    /// Блайнды: не больше стека, короткий блайнд – это all-in.
    fn post_blinds(&mut self, sb_seat: SeatIndex, bb_seat: SeatIndex) {
        let stakes = self.table.config.stakes.clone();

        let sb_paid = self.table.players[sb_seat].commit(stakes.small_blind);
        self.table.pot += sb_paid;
        let bb_paid = self.table.players[bb_seat].commit(stakes.big_blind);
        self.table.pot += bb_paid;

        self.table.current_bet = stakes.big_blind;
        self.table.last_raise_size = stakes.big_blind;

        self.history.push(HandEventKind::BlindsPosted {
            small_blind: (sb_seat, sb_paid),
            big_blind: (bb_seat, bb_paid),
        });
    }

    /// Раздача карманных карт – по одной за круг, начиная слева от дилера.
    fn deal_hole_cards(&mut self, dealer: SeatIndex) -> Result<(), EngineError> {
        let order: Vec<SeatIndex> = seats_from(&self.table, dealer + 1)
            .into_iter()
            .filter(|&s| self.table.players[s].is_playing())
            .collect();

        for _round in 0..2 {
            for &seat in &order {
                let card = self.deck.deal()?;
                self.table.players[seat].hole_cards.push(card);
            }
        }

        for &seat in &order {
            let cards = self.table.players[seat].hole_cards.clone();
            log::trace!("Место {seat}: {} {}", cards[0], cards[1]);
            self.history.push(HandEventKind::HoleCardsDealt { seat, cards });
        }
        Ok(())
    }

    /// Применить действие игрока. Возвращает фазу после действия.
    ///
    /// Ошибка означает, что действие отклонено и стол не изменился.
    pub fn apply_action(&mut self, action: PlayerAction) -> Result<GamePhase, EngineError> {
        if self.phase == GamePhase::GameOver {
            return Err(EngineError::GameOver);
        }
        let round = self.round.as_mut().ok_or(EngineError::NoActiveRound)?;

        let hand_bet_before = self
            .table
            .player(action.seat)
            .map(|p| p.hand_bet)
            .unwrap_or(Chips::ZERO);
        let raises_before = self.table.n_raises;

        let status = round.apply(&mut self.table, action)?;
        let decided = round.hand_decided;

        let player = &self.table.players[action.seat];
        let committed = player.hand_bet.saturating_sub(hand_bet_before);
        log::debug!("{action} (в банк {committed}, банк {})", self.table.pot);
        self.history.push(HandEventKind::PlayerActed {
            seat: action.seat,
            action: action.kind,
            committed,
            stack_after: player.stack,
            pot_after: self.table.pot,
        });

        if self.phase == GamePhase::Preflop {
            let raised = self.table.n_raises > raises_before;
            self.profiles
                .record_preflop_action(action.seat, !committed.is_zero(), raised);
        }

        for obs in self.observers.iter_mut() {
            obs.on_action(&action, &self.table);
        }

        if status != RoundStatus::InProgress {
            self.after_round(decided)?;
        }
        Ok(self.phase)
    }

    /// Раунд ставок закончился: следующая улица, докрутка борда или шоудаун.
    fn after_round(&mut self, mut decided: bool) -> Result<(), EngineError> {
        loop {
            // Торговать больше некому – открываем оставшийся борд без ставок.
            let run_out = decided || self.table.can_act_count() < 2;

            let Some((next, n_cards)) = self.phase.next_street() else {
                self.showdown();
                return Ok(());
            };

            self.table.reset_street();
            self.table.last_raise_size = self.table.config.stakes.big_blind;
            self.deal_street(next, n_cards)?;

            if run_out {
                self.round = None;
                continue;
            }

            let start = (self.table.dealer + 1) % self.table.num_seats();
            let round = BettingRound::new(&mut self.table, start);
            decided = round.hand_decided;
            let active = round.active;
            self.round = Some(round);
            if active {
                return Ok(());
            }
        }
    }

    /// Сжечь карту и открыть `n_cards` карт следующей улицы.
    fn deal_street(&mut self, next: GamePhase, n_cards: usize) -> Result<(), EngineError> {
        let burned = self.deck.deal()?;
        let cards = self.deck.deal_n(n_cards)?;
        self.table.burned.push(burned);
        self.table.board.extend_from_slice(&cards);

        log::debug!(
            "{next:?}: {}",
            cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
        );
        self.history.push(HandEventKind::BoardDealt {
            phase: next,
            burned,
            cards,
        });
        self.set_phase(next);
        Ok(())
    }

    fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
        self.history.push(HandEventKind::PhaseChanged { phase });
        for obs in self.observers.iter_mut() {
            obs.on_phase_change(phase, &self.table);
        }
    }

    /// Шоудаун: выплаты, история, уведомления, затем сброс стола.
    fn showdown(&mut self) {
        self.round = None;
        let result = match run_showdown(&mut self.table, self.hand_no) {
            Ok(r) => r,
            Err(e) => integrity_failure(e),
        };

        let total = self.table.total_chips();
        if total != self.chips_at_start {
            integrity_failure(IntegrityError::ChipsMismatch {
                expected: self.chips_at_start,
                found: total,
            });
        }

        self.set_phase(GamePhase::Showdown);
        for hand in &result.hands {
            self.history.push(HandEventKind::ShowdownReveal {
                seat: hand.seat,
                hole_cards: hand.hole_cards.clone(),
                value: hand.value,
            });
        }
        for (pot_index, pot) in result.pots.iter().enumerate() {
            for &(seat, amount) in &pot.payouts {
                self.history.push(HandEventKind::PotAwarded {
                    pot_index,
                    seat,
                    amount,
                });
            }
        }
        self.history.push(HandEventKind::HandFinished {
            hand_no: self.hand_no,
            finishing_stacks: self.table.players.iter().map(|p| p.stack).collect(),
        });

        log::info!(
            "Раздача #{} завершена: банк {}, победители {:?}",
            self.hand_no,
            result.total_paid(),
            result.winners()
        );

        for obs in self.observers.iter_mut() {
            obs.on_hand_finished(&result, &self.table);
        }
        self.last_showdown = Some(result);

        self.reset_table();
    }

    /// Подготовить стол к следующей раздаче:
    /// - вернуть все карты в колоду и проверить, что их снова 52;
    /// - пометить игроков с пустым стеком как выбывших;
    /// - передвинуть кнопку на следующее играющее место;
    /// - обнулить всё, что живёт одну раздачу.
    ///
    /// Повторный вызов ничего не меняет. Во время торговли – ошибка.
    pub fn reset_round(&mut self) -> Result<(), EngineError> {
        if self.phase.is_betting_street() {
            return Err(EngineError::HandAlreadyInProgress);
        }
        self.reset_table();
        Ok(())
    }

    /// Сброс вне торговли, фаза уже проверена.
    fn reset_table(&mut self) {
        for p in self.table.players.iter_mut() {
            self.deck.return_cards(p.hole_cards.drain(..));
        }
        self.deck.return_cards(self.table.board.drain(..));
        self.deck.return_cards(self.table.burned.drain(..));
        self.verify_deck();

        if !self.pending_reset {
            return;
        }
        self.pending_reset = false;

        for p in self.table.players.iter_mut() {
            p.clear_for_new_hand();
            p.stats.stack_history.push(p.stack);
        }
        self.table.reset_street();
        self.round = None;

        if self.table.playing_count() <= 1 {
            let winner = self.table.players.iter().find(|p| p.is_playing()).map(|p| p.seat);
            log::info!("Игра окончена после раздачи #{}, победитель {:?}", self.hand_no, winner);
            // История раздачи уже закрыта HandFinished, в неё не пишем.
            self.phase = GamePhase::GameOver;
            for obs in self.observers.iter_mut() {
                obs.on_phase_change(GamePhase::GameOver, &self.table);
            }
            return;
        }

        if let Some(next) = next_playing_seat(&self.table, self.table.dealer) {
            self.table.dealer = next;
        }
    }

    fn verify_deck(&self) {
        if self.deck.len() != DECK_SIZE {
            integrity_failure(IntegrityError::DeckCount {
                expected: DECK_SIZE,
                found: self.deck.len(),
            });
        }
        let unique = self.deck.unique_count();
        if unique != DECK_SIZE {
            integrity_failure(IntegrityError::DuplicateCards {
                unique,
                total: self.deck.len(),
            });
        }
    }
}
