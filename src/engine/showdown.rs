use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, HandValue, SeatIndex, TableState};
use crate::engine::errors::IntegrityError;
use crate::engine::side_pots::{compute_side_pots, contributions_from_table, SidePot};
use crate::eval::{evaluate_best_hand, EvaluatedHand};

/// Открытая на шоудауне рука.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RevealedHand {
    pub seat: SeatIndex,
    pub hole_cards: Vec<Card>,
    pub value: HandValue,
    pub best_five: [Card; 5],
}

/// Итог по одному поту.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotResult {
    pub amount: Chips,
    pub eligible_seats: Vec<SeatIndex>,
    pub winners: Vec<SeatIndex>,
    /// None, если пот забран без вскрытия.
    pub best_value: Option<HandValue>,
    /// Выплаты в порядке раздачи остатка.
    pub payouts: Vec<(SeatIndex, Chips)>,
}

/// Итог раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownResult {
    pub hand_no: u64,
    pub board: Vec<Card>,
    /// Банк забран без вскрытия (все, кроме одного, сфолдили).
    pub uncontested: bool,
    pub hands: Vec<RevealedHand>,
    pub pots: Vec<PotResult>,
}

impl ShowdownResult {
    /// Сколько всего выиграл игрок в этой раздаче.
    pub fn won_by(&self, seat: SeatIndex) -> Chips {
        self.pots
            .iter()
            .flat_map(|p| p.payouts.iter())
            .filter(|(s, _)| *s == seat)
            .map(|(_, amount)| *amount)
            .sum()
    }

    /// Все, кто выиграл хоть что-то, по порядку мест.
    pub fn winners(&self) -> Vec<SeatIndex> {
        let mut seats: Vec<SeatIndex> = self
            .pots
            .iter()
            .flat_map(|p| p.winners.iter().copied())
            .collect();
        seats.sort_unstable();
        seats.dedup();
        seats
    }

    pub fn total_paid(&self) -> Chips {
        self.pots.iter().map(|p| p.amount).sum()
    }

    pub fn hand_of(&self, seat: SeatIndex) -> Option<&RevealedHand> {
        self.hands.iter().find(|h| h.seat == seat)
    }
}

/// Порядок мест для раздачи остатка: с первого слева от дилера.
fn order_left_of_dealer(seats: &mut [SeatIndex], dealer: SeatIndex, num_seats: usize) {
    seats.sort_by_key(|&s| (s + num_seats - dealer - 1) % num_seats);
}

/// Разделить пот между победителями. Лишние фишки по одной уходят
/// победителям, начиная слева от дилера.
fn split_pot(amount: Chips, winners: &[SeatIndex]) -> Vec<(SeatIndex, Chips)> {
    let (share, remainder) = amount.split(winners.len());
    winners
        .iter()
        .enumerate()
        .map(|(i, &seat)| {
            let extra = if (i as u64) < remainder.0 { Chips(1) } else { Chips::ZERO };
            (seat, share + extra)
        })
        .collect()
}

/// Вскрыть карты и выплатить банк.
///
/// Каждый сайд-пот делится отдельно между лучшими руками среди тех, кто на
/// него претендует. Стеки победителей пополняются, банк обнуляется,
/// `table.side_pots` заполняется победителями.
pub fn run_showdown(table: &mut TableState, hand_no: u64) -> Result<ShowdownResult, IntegrityError> {
    let contributions = contributions_from_table(table);
    let contributed: Chips = contributions.iter().map(|c| c.amount).sum();
    if contributed != table.pot {
        return Err(IntegrityError::PotMismatch {
            pot: table.pot,
            contributions: contributed,
        });
    }

    let num_seats = table.num_seats();
    let dealer = table.dealer;
    let uncontested = table.in_hand_count() <= 1;

    // Оценка рук: только если есть с кем сравнивать.
    let mut evaluated: Vec<Option<EvaluatedHand>> = vec![None; num_seats];
    let mut hands = Vec::new();
    if !uncontested {
        for p in table.players.iter().filter(|p| p.is_in_hand()) {
            let eh = evaluate_best_hand(&p.hole_cards, &table.board)?;
            hands.push(RevealedHand {
                seat: p.seat,
                hole_cards: p.hole_cards.clone(),
                value: eh.value,
                best_five: eh.best_five,
            });
            evaluated[p.seat] = Some(eh);
        }
    }

    let in_hand: Vec<SeatIndex> = table
        .players
        .iter()
        .filter(|p| p.is_in_hand())
        .map(|p| p.seat)
        .collect();

    let mut pots: Vec<SidePot> = compute_side_pots(&contributions);
    let mut results = Vec::with_capacity(pots.len());
    let mut won = vec![Chips::ZERO; num_seats];

    for pot in pots.iter_mut() {
        let mut contenders: Vec<SeatIndex> = pot
            .eligible_seats
            .iter()
            .copied()
            .filter(|s| in_hand.contains(s))
            .collect();
        if contenders.is_empty() {
            // Претендентов нет (все вкладчики уровня сфолдили) – делят оставшиеся.
            contenders = in_hand.clone();
        }

        let best_value = contenders
            .iter()
            .filter_map(|&s| evaluated[s].map(|eh| eh.value))
            .max();

        let mut winners: Vec<SeatIndex> = match best_value {
            Some(best) => contenders
                .iter()
                .copied()
                .filter(|&s| evaluated[s].map(|eh| eh.value) == Some(best))
                .collect(),
            None => contenders,
        };
        order_left_of_dealer(&mut winners, dealer, num_seats);

        let payouts = split_pot(pot.amount, &winners);
        for &(seat, amount) in &payouts {
            table.players[seat].stack += amount;
            won[seat] += amount;
        }

        pot.winners = winners.clone();
        pot.best_value = best_value;
        results.push(PotResult {
            amount: pot.amount,
            eligible_seats: pot.eligible_seats.clone(),
            winners,
            best_value,
            payouts,
        });
    }

    table.pot = Chips::ZERO;
    table.side_pots = pots;

    // Статистика для экрана конца игры.
    for p in table.players.iter_mut() {
        if let Some(eh) = evaluated[p.seat] {
            p.hand_value = Some(eh.value);
            if p.stats.best_hand.map_or(true, |best| eh.value > best) {
                p.stats.best_hand = Some(eh.value);
                p.stats.best_five = eh.best_five.to_vec();
            }
        }
        if won[p.seat] > p.stats.largest_pot_share {
            p.stats.largest_pot_share = won[p.seat];
        }
    }

    Ok(ShowdownResult {
        hand_no,
        board: table.board.clone(),
        uncontested,
        hands,
        pots: results,
    })
}
