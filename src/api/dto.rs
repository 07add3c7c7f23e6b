use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, GamePhase, HandCategory, PlayerStatus, SeatIndex};
use crate::engine::{HandController, LegalActions, RandomSource, ShowdownResult};
use crate::eval::describe_hand;

/// DTO игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerView {
    pub seat: SeatIndex,
    pub stack: Chips,
    pub bet: Chips,
    pub status: PlayerStatus,
    pub folded: bool,
    pub all_in: bool,
    pub playing: bool,
    /// Карманные карты – только для того, кто смотрит.
    pub hole_cards: Option<Vec<Card>>,
}

/// Открытая рука на шоудауне.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RevealedHandView {
    pub seat: SeatIndex,
    pub hole_cards: Vec<Card>,
    pub category: HandCategory,
    /// Например, "Full House, Kings full of Twos".
    pub description: String,
    pub best_five: Vec<Card>,
}

/// Итог одного пота.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotView {
    pub amount: Chips,
    pub winners: Vec<SeatIndex>,
    pub winning_category: Option<HandCategory>,
    pub payouts: Vec<(SeatIndex, Chips)>,
}

/// Итог последней раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownView {
    pub hand_no: u64,
    pub board: Vec<Card>,
    pub uncontested: bool,
    pub winners: Vec<SeatIndex>,
    pub hands: Vec<RevealedHandView>,
    pub pots: Vec<PotView>,
}

impl From<&ShowdownResult> for ShowdownView {
    fn from(result: &ShowdownResult) -> Self {
        Self {
            hand_no: result.hand_no,
            board: result.board.clone(),
            uncontested: result.uncontested,
            winners: result.winners(),
            hands: result
                .hands
                .iter()
                .map(|h| RevealedHandView {
                    seat: h.seat,
                    hole_cards: h.hole_cards.clone(),
                    category: h.value.category,
                    description: describe_hand(&h.value),
                    best_five: h.best_five.to_vec(),
                })
                .collect(),
            pots: result
                .pots
                .iter()
                .map(|p| PotView {
                    amount: p.amount,
                    winners: p.winners.clone(),
                    winning_category: p.best_value.map(|v| v.category),
                    payouts: p.payouts.clone(),
                })
                .collect(),
        }
    }
}

/// DTO стола: всё, что видно UI и ботам.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableView {
    pub hand_no: u64,
    pub phase: GamePhase,
    pub dealer: SeatIndex,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub pot: Chips,
    pub current_bet: Chips,
    pub board: Vec<Card>,
    pub players: Vec<PlayerView>,
    /// Чей ход (если идёт торговля).
    pub current_seat: Option<SeatIndex>,
    /// Допустимые действия для `current_seat`.
    pub legal_actions: Option<LegalActions>,
    pub last_showdown: Option<ShowdownView>,
}

/// Снимок стола. Карманные карты видны только месту `reveal_seat`,
/// остальные руки открываются через `last_showdown`.
pub fn table_view<R: RandomSource>(
    controller: &HandController<R>,
    reveal_seat: Option<SeatIndex>,
) -> TableView {
    let table = controller.table();
    let players = table
        .players
        .iter()
        .map(|p| PlayerView {
            seat: p.seat,
            stack: p.stack,
            bet: p.bet,
            status: p.status,
            folded: p.is_folded(),
            all_in: p.is_all_in(),
            playing: p.is_playing(),
            hole_cards: (Some(p.seat) == reveal_seat && !p.hole_cards.is_empty())
                .then(|| p.hole_cards.clone()),
        })
        .collect();

    TableView {
        hand_no: controller.hand_no(),
        phase: controller.phase(),
        dealer: table.dealer,
        small_blind: table.config.stakes.small_blind,
        big_blind: table.config.stakes.big_blind,
        pot: table.pot,
        current_bet: table.current_bet,
        board: table.board.clone(),
        players,
        current_seat: controller.current_seat(),
        legal_actions: controller.legal_actions(),
        last_showdown: controller.last_showdown().map(ShowdownView::from),
    }
}
