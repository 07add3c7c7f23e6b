//! Тесты внешнего API: разбор команд, выполнение, снимок стола.

use holdem_engine::api::{
    execute, table_view, ActionCommand, ActionType, ApiError, Command, ShowdownView,
};
use holdem_engine::domain::{
    parse_cards, Chips, ConfigError, GamePhase, HandCategory, PlayerStatus, TableConfig,
    TableStakes, TableState,
};
use holdem_engine::engine::{
    run_showdown, EngineError, HandController, PlayerAction, PlayerActionKind,
};
use holdem_engine::infra::DeterministicRng;

/// Хедз-ап 1000/1000, блайнды 5/10. Дилер 0 ставит SB и ходит первым.
fn heads_up() -> HandController<DeterministicRng> {
    let cfg = TableConfig::new(2, Chips(1_000), TableStakes::new(Chips(5), Chips(10))).with_seed(3);
    HandController::new(cfg, DeterministicRng::from_seed(3)).unwrap()
}

#[test]
fn action_command_parses_from_client_json() {
    let cmd = ActionCommand::from_json(r#"{"action_type":"Raise","seat":2,"raise_to_amount":300}"#)
        .unwrap();
    assert_eq!(cmd.action_type, ActionType::Raise);
    assert_eq!(PlayerAction::from(cmd), PlayerAction::raise_to(2, Chips(300)));

    // raise_to_amount необязателен.
    let cmd = ActionCommand::from_json(r#"{"action_type":"Fold","seat":4}"#).unwrap();
    let action: PlayerAction = cmd.into();
    assert_eq!(action.kind, PlayerActionKind::Fold);
    assert_eq!(action.seat, 4);

    assert_eq!(ActionCommand::from(PlayerAction::call(1)).action_type, ActionType::Call);
}

#[test]
fn malformed_json_is_a_bad_request() {
    for raw in [
        "",
        "{",
        r#"{"action_type":"AllIn","seat":0}"#,
        r#"{"action_type":"Call"}"#,
        r#"{"action_type":"Call","seat":-1}"#,
    ] {
        assert!(
            matches!(ActionCommand::from_json(raw), Err(ApiError::BadRequest(_))),
            "input {raw:?}"
        );
    }
}

#[test]
fn config_errors_map_to_invalid_config() {
    let err = TableConfig::from_json_str(
        r#"{"num_seats":1,"starting_stack":1000,"stakes":{"small_blind":5,"big_blind":10}}"#,
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::SeatCount(1));
    assert!(matches!(ApiError::from(err), ApiError::InvalidConfig(_)));

    let cfg = TableConfig::new(3, Chips(1_000), TableStakes::new(Chips(10), Chips(10)));
    let api: Result<HandController<DeterministicRng>, ApiError> =
        HandController::new(cfg, DeterministicRng::from_seed(0)).map_err(ApiError::from);
    assert!(matches!(api, Err(ApiError::InvalidConfig(_))));
}

#[test]
fn view_hides_other_players_hole_cards() {
    let mut ctrl = heads_up();
    let view = execute(&mut ctrl, Command::StartHand, Some(0)).unwrap();

    assert_eq!(view.hand_no, 1);
    assert_eq!(view.phase, GamePhase::Preflop);
    assert_eq!(view.pot, Chips(15));
    assert_eq!(view.current_seat, Some(0));
    assert_eq!(view.players[0].hole_cards.as_ref().map(Vec::len), Some(2));
    assert_eq!(view.players[1].hole_cards, None);

    let legal = view.legal_actions.unwrap();
    assert_eq!(legal.to_call, Chips(5));
    assert_eq!(legal.min_raise_to, Chips(20));

    // Наблюдатель без места не видит ничьих карт.
    let spectator = table_view(&ctrl, None);
    assert!(spectator.players.iter().all(|p| p.hole_cards.is_none()));
}

#[test]
fn rejected_command_changes_nothing() {
    let mut ctrl = heads_up();
    execute(&mut ctrl, Command::StartHand, None).unwrap();
    let before = table_view(&ctrl, None);

    let out_of_turn = Command::Action(ActionCommand {
        action_type: ActionType::Call,
        seat: 1,
        raise_to_amount: 0,
    });
    assert_eq!(
        execute(&mut ctrl, out_of_turn, None),
        Err(ApiError::Rejected(
            EngineError::OutOfTurn { expected: 0, actual: 1 }.to_string()
        ))
    );
    assert_eq!(
        execute(&mut ctrl, Command::StartHand, None),
        Err(ApiError::Rejected(EngineError::HandAlreadyInProgress.to_string()))
    );
    assert_eq!(table_view(&ctrl, None), before);
}

#[test]
fn fold_finishes_the_hand_and_exposes_the_result() {
    let mut ctrl = heads_up();
    execute(&mut ctrl, Command::StartHand, None).unwrap();

    let fold = Command::Action(ActionCommand::from_json(r#"{"action_type":"Fold","seat":0}"#).unwrap());
    let view = execute(&mut ctrl, fold, None).unwrap();

    assert_eq!(view.phase, GamePhase::Showdown);
    assert_eq!(view.current_seat, None);
    assert_eq!(view.legal_actions, None);
    assert_eq!(view.pot, Chips::ZERO);
    assert_eq!(view.players[0].stack, Chips(995));
    assert_eq!(view.players[1].stack, Chips(1_005));

    let sd = view.last_showdown.unwrap();
    assert!(sd.uncontested);
    assert!(sd.hands.is_empty());
    assert_eq!(sd.winners, vec![1]);
    // Поты 10 и 5 (лишняя ставка BB), оба достаются месту 1.
    let paid: Vec<(usize, Chips)> = sd.pots.iter().flat_map(|p| p.payouts.clone()).collect();
    assert_eq!(paid, vec![(1, Chips(10)), (1, Chips(5))]);
    assert!(sd.pots.iter().all(|p| p.winning_category.is_none()));
}

#[test]
fn showdown_view_describes_revealed_hands() {
    let cfg = TableConfig::new(2, Chips(1_000), TableStakes::new(Chips(5), Chips(10)));
    let mut t = TableState::new(cfg).unwrap();
    t.board = parse_cards("Kh Kd 7c 7s 2h").unwrap();
    for (seat, hole) in [(0, "Ks 9d"), (1, "Ac Qd")] {
        let p = &mut t.players[seat];
        p.hole_cards = parse_cards(hole).unwrap();
        p.hand_bet = Chips(50);
        p.stack -= Chips(50);
        p.status = PlayerStatus::Active;
        t.pot += Chips(50);
    }

    let result = run_showdown(&mut t, 9).unwrap();
    let view = ShowdownView::from(&result);

    assert_eq!(view.hand_no, 9);
    assert!(!view.uncontested);
    assert_eq!(view.winners, vec![0]);
    assert_eq!(view.hands.len(), 2);
    assert_eq!(view.hands[0].category, HandCategory::FullHouse);
    assert_eq!(view.hands[0].description, "Full House, Kings full of Sevens");
    assert_eq!(view.hands[1].category, HandCategory::TwoPair);
    assert_eq!(view.pots[0].winning_category, Some(HandCategory::FullHouse));

    // DTO сериализуется целиком.
    let json = serde_json::to_string(&view).unwrap();
    let back: ShowdownView = serde_json::from_str(&json).unwrap();
    assert_eq!(back, view);
}
