use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::PlayerAtTable;
use crate::domain::SeatIndex;
use crate::engine::side_pots::SidePot;

/// Минимальное и максимальное число мест за столом.
pub const MIN_SEATS: usize = 2;
pub const MAX_SEATS: usize = 10;

/// Ошибки конфигурации стола.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Число мест {0} вне диапазона {MIN_SEATS}..={MAX_SEATS}")]
    SeatCount(usize),

    #[error("Блайнды должны быть > 0 (SB={small_blind}, BB={big_blind})")]
    ZeroBlind { small_blind: Chips, big_blind: Chips },

    #[error("Большой блайнд ({big_blind}) должен быть больше малого ({small_blind})")]
    BlindOrder { small_blind: Chips, big_blind: Chips },

    #[error("Стартовый стек {stack} меньше большого блайнда {big_blind}")]
    StackTooSmall { stack: Chips, big_blind: Chips },

    #[error("Не удалось разобрать конфиг: {0}")]
    Parse(String),
}

/// Стейки стола (SB/BB). Анте не поддерживаются.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableStakes {
    pub small_blind: Chips,
    pub big_blind: Chips,
}

impl TableStakes {
    pub fn new(sb: Chips, bb: Chips) -> Self {
        Self {
            small_blind: sb,
            big_blind: bb,
        }
    }
}

/// Конфиг стола: сколько мест, стартовый стек, блайнды, seed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    pub num_seats: usize,
    pub starting_stack: Chips,
    pub stakes: TableStakes,
    /// Seed для детерминированного тасования (None – системный RNG).
    #[serde(default)]
    pub seed: Option<u64>,
}

impl TableConfig {
    pub fn new(num_seats: usize, starting_stack: Chips, stakes: TableStakes) -> Self {
        Self {
            num_seats,
            starting_stack,
            stakes,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SEATS..=MAX_SEATS).contains(&self.num_seats) {
            return Err(ConfigError::SeatCount(self.num_seats));
        }
        let TableStakes {
            small_blind,
            big_blind,
        } = self.stakes;
        if small_blind.is_zero() || big_blind.is_zero() {
            return Err(ConfigError::ZeroBlind {
                small_blind,
                big_blind,
            });
        }
        if big_blind <= small_blind {
            return Err(ConfigError::BlindOrder {
                small_blind,
                big_blind,
            });
        }
        if self.starting_stack < big_blind {
            return Err(ConfigError::StackTooSmall {
                stack: self.starting_stack,
                big_blind,
            });
        }
        Ok(())
    }

    /// Загрузить и провалидировать конфиг из JSON.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: TableConfig =
            serde_json::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(6, Chips(10_000), TableStakes::new(Chips(50), Chips(100)))
    }
}

/// Состояние стола: места, борд, банк и учёт ставок текущей улицы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableState {
    pub config: TableConfig,

    /// Места за столом: индекс вектора = SeatIndex.
    pub players: Vec<PlayerAtTable>,

    /// Общие карты борда (0–5 карт).
    pub board: Vec<Card>,
    /// Сожжённые карты.
    pub burned: Vec<Card>,

    /// Общий банк: все фишки, поставленные в этой раздаче.
    pub pot: Chips,
    /// Максимальная ставка на текущей улице.
    pub current_bet: Chips,
    /// Размер последнего повышения (для минимального рейза).
    pub last_raise_size: Chips,
    /// Количество рейзов на этой улице.
    pub n_raises: u32,

    pub dealer: SeatIndex,
    pub small_blind_seat: SeatIndex,
    pub big_blind_seat: SeatIndex,

    /// Сайд-поты, посчитанные по завершении последнего раунда ставок.
    pub side_pots: Vec<SidePot>,
}

impl TableState {
    /// Создать стол и посадить игроков на все места со стартовым стеком.
    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let players = (0..config.num_seats)
            .map(|seat| PlayerAtTable::new(seat, config.starting_stack))
            .collect();
        Ok(Self {
            config,
            players,
            board: Vec::with_capacity(5),
            burned: Vec::with_capacity(3),
            pot: Chips::ZERO,
            current_bet: Chips::ZERO,
            last_raise_size: Chips::ZERO,
            n_raises: 0,
            dealer: 0,
            small_blind_seat: 0,
            big_blind_seat: 0,
            side_pots: Vec::new(),
        })
    }

    pub fn num_seats(&self) -> usize {
        self.players.len()
    }

    pub fn player(&self, seat: SeatIndex) -> Option<&PlayerAtTable> {
        self.players.get(seat)
    }

    pub fn player_mut(&mut self, seat: SeatIndex) -> Option<&mut PlayerAtTable> {
        self.players.get_mut(seat)
    }

    /// Сколько нужно доплатить игроку, чтобы уравнять текущую ставку.
    pub fn to_call(&self, seat: SeatIndex) -> Chips {
        self.players
            .get(seat)
            .map(|p| self.current_bet.saturating_sub(p.bet))
            .unwrap_or(Chips::ZERO)
    }

    /// Игроки, ещё не вылетевшие из игры.
    pub fn playing_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_playing()).count()
    }

    /// Игроки, претендующие на банк (не сфолдили).
    pub fn in_hand_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_in_hand()).count()
    }

    /// Игроки, которые ещё могут делать ставки.
    pub fn can_act_count(&self) -> usize {
        self.players.iter().filter(|p| p.can_act()).count()
    }

    /// Все фишки на столе: стеки + банк. Для проверки сохранения фишек.
    pub fn total_chips(&self) -> Chips {
        self.pot + self.players.iter().map(|p| p.stack).sum::<Chips>()
    }

    /// Сбросить ставки текущей улицы.
    pub fn reset_street(&mut self) {
        self.current_bet = Chips::ZERO;
        self.last_raise_size = Chips::ZERO;
        self.n_raises = 0;
        for p in self.players.iter_mut() {
            p.clear_for_new_street();
        }
    }
}
