//! Тесты оценщика рук и Монте-Карло оценки категорий.
//!
//! Проверяем:
//! - категории и тай-брейки на фиксированных руках;
//! - колесо (A-2-3-4-5) и кикеры до пятой карты;
//! - равные руки сравниваются как равные;
//! - антисимметричность и транзитивность на случайных руках;
//! - оценку вероятностей категорий (сумма = 1, ошибки входа).

use std::cmp::Ordering;

use holdem_engine::domain::{parse_cards, Card, Deck, HandCategory, Rank};
use holdem_engine::engine::RandomSource;
use holdem_engine::eval::{
    compare_hands, estimate_category_probabilities, estimate_or_default, evaluate,
    evaluate_best_hand, EstimationError, EvalError,
};
use holdem_engine::infra::DeterministicRng;

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap()
}

fn category(s: &str) -> HandCategory {
    evaluate(&cards(s)).unwrap().value.category
}

fn cmp(a: &str, b: &str) -> Ordering {
    compare_hands(&cards(a), &cards(b)).unwrap()
}

//
// ====================== КАТЕГОРИИ ======================
//

#[test]
fn royal_flush_is_a_straight_flush_with_best_five_sorted() {
    let eh = evaluate(&cards("Ts Js Qs Ks As 2d 3c")).unwrap();
    assert_eq!(eh.value.category, HandCategory::StraightFlush);
    assert_eq!(eh.value.tiebreak[0], Rank::Ace.value());
    assert_eq!(eh.best_five.to_vec(), cards("Ts Js Qs Ks As"));
}

#[test]
fn every_category_is_recognised() {
    assert_eq!(category("2c 7d 9h Jc Ks 3d 4h"), HandCategory::HighCard);
    assert_eq!(category("2c 2d 9h Jc Ks 3d 5h"), HandCategory::OnePair);
    assert_eq!(category("2c 2d 9h 9c Ks 3d 5h"), HandCategory::TwoPair);
    assert_eq!(category("2c 2d 2h 9c Ks 3d 5h"), HandCategory::ThreeOfAKind);
    assert_eq!(category("5c 6d 7h 8c 9s 2d 2h"), HandCategory::Straight);
    assert_eq!(category("2h 7h 9h Jh Kh 3d 5c"), HandCategory::Flush);
    assert_eq!(category("2c 2d 2h 9c 9s 3d 5h"), HandCategory::FullHouse);
    assert_eq!(category("2c 2d 2h 2s 9s 3d 5h"), HandCategory::FourOfAKind);
    assert_eq!(category("5h 6h 7h 8h 9h 2d 2c"), HandCategory::StraightFlush);
}

#[test]
fn wheel_is_the_lowest_straight() {
    let wheel = evaluate(&cards("Ah 2d 3c 4s 5h Kd Qc")).unwrap();
    assert_eq!(wheel.value.category, HandCategory::Straight);
    assert_eq!(wheel.value.tiebreak[0], Rank::Five.value());

    // 2-6 бьёт колесо.
    assert_eq!(cmp("2d 3c 4s 5h 6c Kd Qc", "Ah 2d 3c 4s 5h Kd Qc"), Ordering::Greater);
}

#[test]
fn steel_wheel_loses_to_six_high_straight_flush() {
    assert_eq!(cmp("Ah 2h 3h 4h 5h", "2h 3h 4h 5h 6h"), Ordering::Less);
}

//
// ====================== ТАЙ-БРЕЙКИ ======================
//

#[test]
fn pair_of_aces_beats_pair_of_kings_regardless_of_kickers() {
    assert_eq!(cmp("Ac Ad 2h 3s 7c 8d 9h", "Kc Kd Qh Js 9c 7d 5h"), Ordering::Greater);
}

#[test]
fn kicker_decides_between_equal_pairs() {
    assert_eq!(cmp("Ac Ad Kh 7s 5c", "Ah As Qh Js 9c"), Ordering::Greater);
}

#[test]
fn high_card_compares_down_to_the_fifth_card() {
    assert_eq!(cmp("Ac Kd 9h 7s 3c", "Ah Ks 9c 7d 2h"), Ordering::Greater);
}

#[test]
fn two_pair_uses_the_top_pair_then_the_kicker() {
    assert_eq!(cmp("Kc Kd 2h 2s Ac", "Qh Qs Jh Jd Ad"), Ordering::Greater);
    assert_eq!(cmp("Kc Kd 2h 2s Ac", "Kh Ks 2c 2d Qd"), Ordering::Greater);
}

#[test]
fn full_house_ranks_trips_before_pair() {
    assert_eq!(cmp("3c 3d 3h 2s 2c", "2h 2d 2s Ac Ad"), Ordering::Greater);
}

#[test]
fn identical_strength_compares_equal() {
    // Оба играют борд.
    let board = "Ts Js Qs Ks As";
    let a = format!("{board} 2c 3d");
    let b = format!("{board} 2d 3c");
    assert_eq!(cmp(&a, &b), Ordering::Equal);
}

#[test]
fn best_hand_combines_hole_and_board() {
    let eh = evaluate_best_hand(&cards("Ah Kh"), &cards("Qh Jh Th 2c 3d")).unwrap();
    assert_eq!(eh.value.category, HandCategory::StraightFlush);
}

//
// ====================== СВОЙСТВА ПОРЯДКА ======================
//

#[test]
fn ordering_is_antisymmetric_and_transitive_on_random_hands() {
    let mut rng = DeterministicRng::from_seed(2024);
    for _ in 0..200 {
        let mut deck = Deck::standard_52();
        rng.shuffle(&mut deck.cards);
        let a = evaluate(&deck.cards[0..7]).unwrap().value;
        let b = evaluate(&deck.cards[7..14]).unwrap().value;
        let c = evaluate(&deck.cards[14..21]).unwrap().value;

        assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        if a >= b && b >= c {
            assert!(a >= c);
        }
    }
}

#[test]
fn bad_input_is_rejected() {
    assert_eq!(
        evaluate(&cards("As Ks Qs Js")),
        Err(EvalError::WrongCardCount(4))
    );
    let dup = cards("As As Qs Js Ts");
    assert_eq!(evaluate(&dup), Err(EvalError::DuplicateCard(dup[0])));
}

//
// ====================== МОНТЕ-КАРЛО ======================
//

#[test]
fn estimate_sums_to_one_and_is_reproducible() {
    let hole = cards("Ah Ad");
    let board = cards("Kc 7d 2s");

    let d1 = estimate_category_probabilities(&hole, &board, 500, &mut DeterministicRng::from_seed(9))
        .unwrap();
    let d2 = estimate_category_probabilities(&hole, &board, 500, &mut DeterministicRng::from_seed(9))
        .unwrap();
    assert_eq!(d1, d2);

    let total: f64 = d1.frequencies.iter().sum();
    assert!((total - 1.0).abs() < 1e-9);

    // Пара уже есть, хуже она не станет.
    assert_eq!(d1.probability(HandCategory::HighCard), 0.0);
    assert!(d1.probability(HandCategory::OnePair) > 0.0);
}

#[test]
fn complete_board_gives_a_certain_category() {
    let d = estimate_category_probabilities(
        &cards("Ah Ad"),
        &cards("Ac As Kd 7c 2h"),
        10,
        &mut DeterministicRng::from_seed(1),
    )
    .unwrap();
    assert_eq!(d.probability(HandCategory::FourOfAKind), 1.0);
    assert_eq!(d.most_likely(), Some(HandCategory::FourOfAKind));
}

#[test]
fn estimate_rejects_bad_input() {
    let mut rng = DeterministicRng::from_seed(3);
    assert_eq!(
        estimate_category_probabilities(&cards("Ah"), &[], 10, &mut rng),
        Err(EstimationError::HoleCards(1))
    );
    assert_eq!(
        estimate_category_probabilities(&cards("Ah Kd"), &[], 0, &mut rng),
        Err(EstimationError::NoSamples)
    );
    assert!(matches!(
        estimate_category_probabilities(&cards("Ah Kd"), &cards("Ah 2c 3c"), 10, &mut rng),
        Err(EstimationError::DuplicateCard(_))
    ));

    let empty = estimate_or_default(&cards("Ah Kd"), &cards("Ah 2c 3c"), 10, &mut rng);
    assert_eq!(empty.samples, 0);
    assert_eq!(empty.most_likely(), None);
}
