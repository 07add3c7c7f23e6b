//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Основная функция:
//!   `evaluate(cards) -> EvaluatedHand` – лучшая пятёрка из 5–7 карт.

pub mod equity;
pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use equity::{
    estimate_category_probabilities, estimate_or_default, CategoryDistribution, EstimationError,
};
pub use evaluator::{compare_hands, evaluate, evaluate_best_hand, evaluate_five, EvalError, EvaluatedHand};
pub use hand_rank::describe_hand;
