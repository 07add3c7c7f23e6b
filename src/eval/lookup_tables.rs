use crate::domain::card::Rank;

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Маски всех возможных стритов (5 подряд), от wheel до broadway.
/// Индекс i соответствует стриту со старшей картой `STRAIGHT_HIGHS[i]`.
pub const STRAIGHT_MASKS: [RankMask; 10] = [
    // A2345 (wheel): туз играет снизу
    mask_from_ranks(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]),
    mask_from_ranks(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]),
    mask_from_ranks(&[Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven]),
    mask_from_ranks(&[Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight]),
    mask_from_ranks(&[Rank::Five, Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine]),
    mask_from_ranks(&[Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten]),
    mask_from_ranks(&[Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack]),
    mask_from_ranks(&[Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen]),
    mask_from_ranks(&[Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]),
    // TJQKA (broadway)
    mask_from_ranks(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]),
];

/// Старшая карта стрита для каждой маски из `STRAIGHT_MASKS`.
pub const STRAIGHT_HIGHS: [Rank; 10] = [
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// Получить битовую маску для одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    1u16 << (rank.value() - 2)
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        let r = ranks[i] as u8;
        mask |= 1 << (r - 2);
        i += 1;
    }
    mask
}

/// Найти стрит в битовой маске рангов.
/// Возвращает старшую карту стрита, если он есть.
///
/// Особый случай: wheel (A2345) → возвращаем Rank::Five.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    // От самого сильного (broadway) к слабейшему.
    STRAIGHT_MASKS
        .iter()
        .zip(STRAIGHT_HIGHS.iter())
        .rev()
        .find(|(mask, _)| rank_mask & **mask == **mask)
        .map(|(_, high)| *high)
}
