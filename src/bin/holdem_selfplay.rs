//! Самоигра: N раздач за одним столом со случайной легальной стратегией.
//!
//! Запуск: `holdem_selfplay [hands] [config.json] [log.jsonl]`
//! Уровень логов – через `RUST_LOG` (например, `RUST_LOG=debug`).

use std::fs::{self, File};
use std::io::BufWriter;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use holdem_engine::domain::{Chips, TableConfig};
use holdem_engine::engine::{HandController, LegalActions, PlayerAction};
use holdem_engine::eval::describe_hand;
use holdem_engine::infra::{HandLogSink, JsonlHandLog, TableRng};

/// Защита от зацикливания внутри одной раздачи.
const MAX_STEPS_PER_HAND: u32 = 1_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let hands: u32 = match args.next() {
        Some(s) => s.parse()?,
        None => 200,
    };
    let config = match args.next() {
        Some(path) => TableConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => TableConfig::default().with_seed(42),
    };
    let mut sink = match args.next() {
        Some(path) => Some(JsonlHandLog::new(BufWriter::new(File::create(path)?))),
        None => None,
    };

    println!(
        "holdem_selfplay: {} мест, стек {}, блайнды {}/{}, {} раздач",
        config.num_seats,
        config.starting_stack,
        config.stakes.small_blind,
        config.stakes.big_blind,
        hands
    );

    let mut policy_rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed ^ 0x5eed),
        None => StdRng::from_entropy(),
    };
    let rng = TableRng::from_config(&config);
    let mut ctrl = HandController::new(config, rng)?;
    let total_chips = ctrl.table().total_chips();

    let mut played: u32 = 0;
    let mut showdowns: u32 = 0;
    let mut largest_pot = Chips::ZERO;

    for _ in 0..hands {
        if ctrl.is_game_over() {
            break;
        }
        ctrl.start_hand()?;

        let mut steps = 0;
        while let Some(seat) = ctrl.current_seat() {
            steps += 1;
            if steps > MAX_STEPS_PER_HAND {
                return Err(format!("раздача #{} не завершилась", ctrl.hand_no()).into());
            }
            let Some(legal) = ctrl.legal_actions() else {
                break;
            };
            let action = pick_action(&mut policy_rng, seat, &legal);
            ctrl.apply_action(action)?;
        }

        let found = ctrl.table().total_chips();
        if found != total_chips {
            return Err(format!("фишки не сходятся: {total_chips} != {found}").into());
        }

        if let Some(result) = ctrl.last_showdown() {
            played += 1;
            if !result.uncontested {
                showdowns += 1;
            }
            largest_pot = largest_pot.max(result.total_paid());
        }
        if let Some(sink) = sink.as_mut() {
            sink.record(ctrl.history())?;
        }
    }

    println!();
    println!("=========== SELF-PLAY SUMMARY ===========");
    println!("Сыграно раздач: {played}");
    println!("До шоудауна: {showdowns}");
    println!("Максимальный банк: {largest_pot}");
    for p in &ctrl.table().players {
        let profile = ctrl.profiles().seat(p.seat);
        println!(
            "  место {}: стек {}, лучшая рука {}, VPIP {:.2}, PFR {:.2}",
            p.seat,
            p.stack,
            p.stats
                .best_hand
                .map(|v| describe_hand(&v))
                .unwrap_or_else(|| "-".to_string()),
            profile.map_or(0.0, |s| s.vpip()),
            profile.map_or(0.0, |s| s.pfr()),
        );
    }
    if let Some(winner) = ctrl.winner() {
        println!("Игра окончена, победитель: место {winner}");
    }
    if let Some(sink) = sink.as_ref() {
        println!("Записано в журнал: {}", sink.written());
    }
    println!("=========================================");
    Ok(())
}

/// Случайная легальная стратегия:
/// - без долга: чаще check, иногда бет;
/// - с долгом: fold / call / raise.
fn pick_action<R: Rng>(rng: &mut R, seat: usize, legal: &LegalActions) -> PlayerAction {
    let roll: u32 = rng.gen_range(0..100);
    let raise = |rng: &mut R| {
        if rng.gen_bool(0.05) {
            PlayerAction::raise_to(seat, legal.max_raise_to)
        } else {
            let hi = legal.max_raise_to.0.min(legal.min_raise_to.0 * 3);
            let lo = legal.min_raise_to.0.min(hi);
            PlayerAction::raise_to(seat, Chips(rng.gen_range(lo..=hi)))
        }
    };

    if legal.can_check {
        if roll < 75 || !legal.can_raise {
            PlayerAction::check(seat)
        } else {
            raise(rng)
        }
    } else if roll < 20 {
        PlayerAction::fold(seat)
    } else if roll < 85 || !legal.can_raise {
        PlayerAction::call(seat)
    } else {
        raise(rng)
    }
}
