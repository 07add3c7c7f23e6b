//! Монте-Карло оценка вероятностей категорий руки.
//!
//! Используется только для отображения, на выплаты не влияет.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::HandCategory;
use crate::engine::RandomSource;

use super::evaluator::evaluate;

/// Ошибки входа для оценки.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimationError {
    #[error("Нужно ровно 2 карманные карты, получено {0}")]
    HoleCards(usize),

    #[error("На борде не может быть больше 5 карт, получено {0}")]
    BoardTooLarge(usize),

    #[error("Карта {0} встречается дважды")]
    DuplicateCard(Card),

    #[error("Число симуляций должно быть > 0")]
    NoSamples,
}

/// Частоты категорий (индекс = `HandCategory as usize`), сумма = 1.0.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryDistribution {
    pub samples: u32,
    pub frequencies: [f64; 9],
}

impl CategoryDistribution {
    pub fn probability(&self, category: HandCategory) -> f64 {
        self.frequencies[category.index()]
    }

    /// Наиболее вероятная категория (None для пустого распределения).
    pub fn most_likely(&self) -> Option<HandCategory> {
        if self.samples == 0 {
            return None;
        }
        HandCategory::ALL.iter().copied().max_by(|a, b| {
            self.probability(*a).total_cmp(&self.probability(*b))
        })
    }
}

/// Оценить распределение категорий итоговой руки: добираем борд до 5 карт
/// из невидимых карт `samples` раз и считаем категорию лучшей руки.
pub fn estimate_category_probabilities<R: RandomSource>(
    hole: &[Card],
    board: &[Card],
    samples: u32,
    rng: &mut R,
) -> Result<CategoryDistribution, EstimationError> {
    if hole.len() != 2 {
        return Err(EstimationError::HoleCards(hole.len()));
    }
    if board.len() > 5 {
        return Err(EstimationError::BoardTooLarge(board.len()));
    }
    if samples == 0 {
        return Err(EstimationError::NoSamples);
    }

    let mut known: Vec<Card> = Vec::with_capacity(7);
    let mut seen = HashSet::with_capacity(7);
    for &c in hole.iter().chain(board.iter()) {
        if !seen.insert(c) {
            return Err(EstimationError::DuplicateCard(c));
        }
        known.push(c);
    }

    let mut unseen = Deck::standard_52();
    unseen.remove_cards(&known);
    let missing = 5 - board.len();

    let mut counts = [0u32; 9];
    let mut evaluated: u32 = 0;
    let mut seven = known.clone();
    for _ in 0..samples {
        rng.shuffle(&mut unseen.cards);
        seven.truncate(known.len());
        seven.extend_from_slice(&unseen.cards[..missing]);
        match evaluate(&seven) {
            Ok(hand) => {
                counts[hand.value.category.index()] += 1;
                evaluated += 1;
            }
            Err(e) => log::warn!("симуляция пропущена: {e}"),
        }
    }

    // Частоты считаются только по оценённым симуляциям.
    Ok(distribution(counts, evaluated))
}

fn distribution(counts: [u32; 9], evaluated: u32) -> CategoryDistribution {
    let mut dist = CategoryDistribution {
        samples: evaluated,
        frequencies: [0.0; 9],
    };
    if evaluated == 0 {
        return dist;
    }
    for (freq, count) in dist.frequencies.iter_mut().zip(counts.iter()) {
        *freq = f64::from(*count) / f64::from(evaluated);
    }
    dist
}

/// То же, но ошибки не фатальны: пишем предупреждение и отдаём пустую оценку.
pub fn estimate_or_default<R: RandomSource>(
    hole: &[Card],
    board: &[Card],
    samples: u32,
    rng: &mut R,
) -> CategoryDistribution {
    match estimate_category_probabilities(hole, board, samples, rng) {
        Ok(dist) => dist,
        Err(e) => {
            log::warn!("оценка вероятностей недоступна: {e}");
            CategoryDistribution::default()
        }
    }
}
