use crate::domain::{PlayerAtTable, SeatIndex, TableState};

/// Найти следующее место по кругу, где игрок удовлетворяет `pred`
/// (включая/исключая start).
pub fn next_seat_where<F>(
    table: &TableState,
    start: SeatIndex,
    include_start: bool,
    pred: F,
) -> Option<SeatIndex>
where
    F: Fn(&PlayerAtTable) -> bool,
{
    let max = table.num_seats();
    if max == 0 {
        return None;
    }

    let mut idx = start % max;
    if !include_start {
        idx = (idx + 1) % max;
    }

    for _ in 0..max {
        if pred(&table.players[idx]) {
            return Some(idx);
        }
        idx = (idx + 1) % max;
    }

    None
}

/// Следующее место с игроком, у которого ещё есть фишки в игре.
pub fn next_playing_seat(table: &TableState, after: SeatIndex) -> Option<SeatIndex> {
    next_seat_where(table, after, false, PlayerAtTable::is_playing)
}

/// Первое место, начиная с `start` включительно, где игрок может действовать.
pub fn first_actor_from(table: &TableState, start: SeatIndex) -> Option<SeatIndex> {
    next_seat_where(table, start, true, PlayerAtTable::can_act)
}

/// Все места по кругу, начиная с `start`.
pub fn seats_from(table: &TableState, start: SeatIndex) -> Vec<SeatIndex> {
    let max = table.num_seats();
    (0..max).map(|i| (start + i) % max).collect()
}

/// Позиции раздачи: (малый блайнд, большой блайнд) для данной кнопки.
///
/// За полным столом SB – первое играющее место после дилера, BB – следующее
/// за ним, так что префлоп открывает третье место после кнопки.
/// Хедз-ап: дилер сам ставит малый блайнд.
pub fn blind_seats(table: &TableState, dealer: SeatIndex) -> Option<(SeatIndex, SeatIndex)> {
    if table.playing_count() < 2 {
        return None;
    }
    let sb = if table.playing_count() == 2 {
        dealer
    } else {
        next_playing_seat(table, dealer)?
    };
    let bb = next_playing_seat(table, sb)?;
    Some((sb, bb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Chips, PlayerStatus, TableConfig, TableStakes};

    fn table(n: usize) -> TableState {
        let cfg = TableConfig::new(n, Chips(1_000), TableStakes::new(Chips(5), Chips(10)));
        TableState::new(cfg).unwrap()
    }

    #[test]
    fn blinds_follow_dealer_at_full_table() {
        let t = table(4);
        assert_eq!(blind_seats(&t, 0), Some((1, 2)));
        assert_eq!(blind_seats(&t, 3), Some((0, 1)));
    }

    #[test]
    fn heads_up_dealer_posts_small_blind() {
        let t = table(2);
        assert_eq!(blind_seats(&t, 1), Some((1, 0)));
    }

    #[test]
    fn busted_seats_are_skipped() {
        let mut t = table(4);
        t.players[2].stack = Chips::ZERO;
        t.players[2].status = PlayerStatus::Busted;
        assert_eq!(blind_seats(&t, 0), Some((1, 3)));
        assert_eq!(next_playing_seat(&t, 1), Some(3));
    }
}
