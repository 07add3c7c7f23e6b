//! Тесты шоудауна на подготовленном столе (без контроллера).
//!
//! - сфолдивший с лучшей рукой ничего не выигрывает;
//! - сплит с остатком: фишка уходит первому слева от дилера;
//! - статистика игроков (лучшая рука, крупнейший выигрыш);
//! - банк без вскрытия;
//! - расхождение банка и вкладов – ошибка учёта.

use holdem_engine::domain::{
    parse_cards, Chips, HandCategory, PlayerStatus, SeatIndex, TableConfig, TableStakes, TableState,
};
use holdem_engine::engine::{run_showdown, IntegrityError};

/// Стол на `n` мест, у всех по 1000.
fn table(n: usize) -> TableState {
    let cfg = TableConfig::new(n, Chips(1_000), TableStakes::new(Chips(5), Chips(10)));
    TableState::new(cfg).unwrap()
}

/// Посадить руку: карты, вклад за раздачу, статус. Банк пополняется.
fn seat_hand(t: &mut TableState, seat: SeatIndex, hole: &str, hand_bet: u64, status: PlayerStatus) {
    let p = &mut t.players[seat];
    p.hole_cards = parse_cards(hole).unwrap();
    p.hand_bet = Chips(hand_bet);
    p.stack -= Chips(hand_bet);
    p.status = status;
    t.pot += Chips(hand_bet);
}

#[test]
fn folded_player_never_wins_even_with_the_best_cards() {
    let mut t = table(3);
    t.board = parse_cards("2s 7h 9c Jd 3s").unwrap();
    seat_hand(&mut t, 0, "As Ah", 50, PlayerStatus::Folded);
    seat_hand(&mut t, 1, "Kc Kd", 100, PlayerStatus::Active);
    seat_hand(&mut t, 2, "Qc Qd", 100, PlayerStatus::Active);

    let result = run_showdown(&mut t, 1).unwrap();

    assert_eq!(result.winners(), vec![1]);
    assert_eq!(result.won_by(1), Chips(250));
    assert_eq!(result.won_by(0), Chips::ZERO);
    assert!(result.hand_of(0).is_none(), "сфолдивший карты не показывает");
    assert_eq!(result.hands.len(), 2);

    assert_eq!(t.players[1].stack, Chips(1_150));
    assert_eq!(t.players[0].stack, Chips(950));
    assert!(t.pot.is_zero());
    assert_eq!(t.side_pots[0].winners, vec![1]);
}

#[test]
fn split_with_remainder_starts_left_of_dealer() {
    let mut t = table(3);
    t.dealer = 2;
    t.board = parse_cards("Ts Js Qs Ks As").unwrap();
    seat_hand(&mut t, 0, "2c 3d", 50, PlayerStatus::Active);
    seat_hand(&mut t, 1, "2d 3c", 50, PlayerStatus::Active);
    seat_hand(&mut t, 2, "4c 4d", 1, PlayerStatus::Folded);

    let result = run_showdown(&mut t, 7).unwrap();

    // Поты: 3 и 98. В первом остаток 1 уходит месту 0.
    assert_eq!(result.pots.len(), 2);
    assert_eq!(result.pots[0].payouts, vec![(0, Chips(2)), (1, Chips(1))]);
    assert_eq!(result.pots[1].payouts, vec![(0, Chips(49)), (1, Chips(49))]);
    assert_eq!(result.won_by(0), Chips(51));
    assert_eq!(result.won_by(1), Chips(50));
    assert_eq!(result.total_paid(), Chips(101));
    assert_eq!(result.pots[0].best_value.unwrap().category, HandCategory::StraightFlush);
}

#[test]
fn showdown_updates_player_stats() {
    let mut t = table(2);
    t.board = parse_cards("Kh Kd 7c 7s 2h").unwrap();
    seat_hand(&mut t, 0, "Ks 9d", 200, PlayerStatus::AllIn);
    seat_hand(&mut t, 1, "Ac Qd", 200, PlayerStatus::Active);

    let result = run_showdown(&mut t, 3).unwrap();
    assert_eq!(result.winners(), vec![0]);

    let p0 = &t.players[0];
    assert_eq!(p0.hand_value.unwrap().category, HandCategory::FullHouse);
    assert_eq!(p0.stats.best_hand, p0.hand_value);
    assert_eq!(p0.stats.best_five, parse_cards("7c 7s Kd Kh Ks").unwrap());
    assert_eq!(p0.stats.largest_pot_share, Chips(400));

    let p1 = &t.players[1];
    assert_eq!(p1.hand_value.unwrap().category, HandCategory::TwoPair);
    assert!(p1.stats.largest_pot_share.is_zero());
}

#[test]
fn uncontested_pot_needs_no_evaluation() {
    let mut t = table(3);
    // Борда нет: все сфолдили ещё на префлопе.
    seat_hand(&mut t, 0, "2c 7d", 10, PlayerStatus::Folded);
    seat_hand(&mut t, 1, "3c 8d", 5, PlayerStatus::Folded);
    seat_hand(&mut t, 2, "4c 9d", 10, PlayerStatus::Active);

    let result = run_showdown(&mut t, 1).unwrap();
    assert!(result.uncontested);
    assert!(result.hands.is_empty());
    assert_eq!(result.won_by(2), Chips(25));
    assert!(result.pots.iter().all(|p| p.best_value.is_none()));
    assert_eq!(t.players[2].hand_value, None);
}

#[test]
fn pot_mismatch_is_an_integrity_error() {
    let mut t = table(2);
    t.board = parse_cards("Kh Kd 7c 7s 2h").unwrap();
    seat_hand(&mut t, 0, "Ks 9d", 100, PlayerStatus::Active);
    seat_hand(&mut t, 1, "Ac Qd", 100, PlayerStatus::Active);
    t.pot += Chips(1);

    assert_eq!(
        run_showdown(&mut t, 1),
        Err(IntegrityError::PotMismatch {
            pot: Chips(201),
            contributions: Chips(200),
        })
    );
}
