use serde::{Deserialize, Serialize};

use crate::domain::{Chips, HandValue, SeatIndex, TableState};

/// Сайд-пот: часть банка, в которую участвуют только некоторые игроки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    /// Кто может выиграть этот пот (внёс не меньше уровня и не сфолдил).
    pub eligible_seats: Vec<SeatIndex>,
    /// Заполняется на шоудауне.
    pub winners: Vec<SeatIndex>,
    pub best_value: Option<HandValue>,
}

impl SidePot {
    pub fn new(amount: Chips, eligible_seats: Vec<SeatIndex>) -> Self {
        Self {
            amount,
            eligible_seats,
            winners: Vec::new(),
            best_value: None,
        }
    }
}

/// Вклад одного игрока за всю раздачу.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contribution {
    pub seat: SeatIndex,
    pub amount: Chips,
    /// Сфолдившие платят в пот, но выиграть его не могут.
    pub folded: bool,
}

/// Собрать вклады со стола: все ещё играющие с `hand_bet > 0`.
pub fn contributions_from_table(table: &TableState) -> Vec<Contribution> {
    table
        .players
        .iter()
        .filter(|p| p.is_playing() && !p.hand_bet.is_zero())
        .map(|p| Contribution {
            seat: p.seat,
            amount: p.hand_bet,
            folded: p.is_folded(),
        })
        .collect()
}

/// Посчитать сайд-поты из сумм, которые внесли игроки.
///
/// На каждом шаге минимальный оставшийся вклад – это "уровень": пот уровня
/// равен уровню, умноженному на число вкладчиков, а претендуют на него
/// несфолдившие вкладчики этого уровня. Выход упорядочен от младшего уровня
/// к старшему.
///
/// Уровень, где все вкладчики сфолдили, доливается в предыдущий пот
/// (или в следующий, если предыдущего нет), так что сумма потов всегда
/// равна сумме вкладов.
pub fn compute_side_pots(contributions: &[Contribution]) -> Vec<SidePot> {
    let mut remaining: Vec<Contribution> = contributions
        .iter()
        .filter(|c| !c.amount.is_zero())
        .copied()
        .collect();
    remaining.sort_by_key(|c| c.seat);

    let mut pots: Vec<SidePot> = Vec::new();
    let mut carry = Chips::ZERO;

    while let Some(tier) = remaining.iter().map(|c| c.amount).min() {
        let amount = Chips(tier.0 * remaining.len() as u64);
        let eligible: Vec<SeatIndex> = remaining
            .iter()
            .filter(|c| !c.folded)
            .map(|c| c.seat)
            .collect();

        if eligible.is_empty() {
            match pots.last_mut() {
                Some(prev) => prev.amount += amount,
                None => carry += amount,
            }
        } else {
            pots.push(SidePot::new(amount + carry, eligible));
            carry = Chips::ZERO;
        }

        for c in remaining.iter_mut() {
            c.amount -= tier;
        }
        remaining.retain(|c| !c.amount.is_zero());
    }

    if !carry.is_zero() {
        // Все вкладчики сфолдили – чистая ошибка вызова, но фишки не теряем.
        pots.push(SidePot::new(carry, Vec::new()));
    }

    pots
}
