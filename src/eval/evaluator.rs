use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, Rank};
use crate::domain::hand::{HandCategory, HandValue};

use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};

/// Ошибки входных данных оценщика.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Ожидается от 5 до 7 карт, получено {0}")]
    WrongCardCount(usize),

    #[error("Карта {0} встречается дважды")]
    DuplicateCard(Card),
}

/// Результат оценки: сила руки и пять карт, которые её дают.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluatedHand {
    pub value: HandValue,
    /// Лучшие пять карт по возрастанию (ранг, затем масть).
    pub best_five: [Card; 5],
}

/// Вычислить лучшую 5-карточную руку из hole + board.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> Result<EvaluatedHand, EvalError> {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);
    evaluate(&all_cards)
}

/// Главная функция: лучшая 5-карточная рука из 5–7 карт.
///
/// Перебираем все C(n,5) подмножеств (21 для семи карт) и берём максимум.
/// При равенстве остаётся первое найденное подмножество.
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    let n = cards.len();
    if !(5..=7).contains(&n) {
        return Err(EvalError::WrongCardCount(n));
    }
    let mut seen = HashSet::with_capacity(n);
    for &c in cards {
        if !seen.insert(c) {
            return Err(EvalError::DuplicateCard(c));
        }
    }

    let mut best: Option<(HandValue, [Card; 5])> = None;

    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let v = evaluate_five(&five);
                        if best.map_or(true, |(best_v, _)| v > best_v) {
                            best = Some((v, five));
                        }
                    }
                }
            }
        }
    }

    // n >= 5, значит хотя бы одна комбинация была.
    let (value, mut best_five) = best.ok_or(EvalError::WrongCardCount(n))?;
    best_five.sort();
    Ok(EvaluatedHand { value, best_five })
}

/// Сравнить две руки (5–7 карт). Ошибки входа – как у `evaluate`.
pub fn compare_hands(a: &[Card], b: &[Card]) -> Result<Ordering, EvalError> {
    Ok(evaluate(a)?.value.cmp(&evaluate(b)?.value))
}

/// Оценка строго 5-карточной комбинации.
pub fn evaluate_five(cards: &[Card; 5]) -> HandValue {
    let mut rank_counts = [0u8; 15]; // индексы 2..=14
    let mut rank_mask: RankMask = 0;

    for card in cards.iter() {
        rank_counts[card.rank.value() as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = detect_straight(rank_mask);

    // Группы (ранг, количество): сначала по количеству, затем по рангу (оба по убыванию).
    let mut groups: Vec<(Rank, u8)> = Rank::ALL
        .iter()
        .rev()
        .filter_map(|&r| {
            let c = rank_counts[r.value() as usize];
            (c > 0).then_some((r, c))
        })
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

    let pattern: Vec<u8> = groups.iter().map(|g| g.1).collect();
    let ranks: Vec<Rank> = groups.iter().map(|g| g.0).collect();

    if is_flush {
        if let Some(high) = straight_high {
            return HandValue::from_category_and_ranks(HandCategory::StraightFlush, &[high]);
        }
    }

    let category = match pattern.as_slice() {
        [4, 1] => HandCategory::FourOfAKind,
        [3, 2] => HandCategory::FullHouse,
        _ if is_flush => HandCategory::Flush,
        _ if straight_high.is_some() => HandCategory::Straight,
        [3, 1, 1] => HandCategory::ThreeOfAKind,
        [2, 2, 1] => HandCategory::TwoPair,
        [2, 1, 1, 1] => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    match (category, straight_high) {
        (HandCategory::Straight, Some(high)) => {
            HandValue::from_category_and_ranks(category, &[high])
        }
        // Для остальных категорий порядок групп уже и есть тай-брейк:
        // ранги групп по убыванию размера, затем кикеры по убыванию.
        _ => HandValue::from_category_and_ranks(category, &ranks),
    }
}
