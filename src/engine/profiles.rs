use serde::{Deserialize, Serialize};

use crate::domain::{SeatIndex, TableState};

/// HUD-статистика одного места.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatProfile {
    pub hands_dealt: u32,
    /// Раздачи, где игрок добровольно вложил фишки на префлопе.
    pub vpip_hands: u32,
    /// Раздачи, где игрок рейзил на префлопе.
    pub pfr_hands: u32,
    #[serde(skip)]
    vpip_this_hand: bool,
    #[serde(skip)]
    pfr_this_hand: bool,
}

impl SeatProfile {
    fn ratio(count: u32, hands: u32) -> f64 {
        if hands == 0 {
            0.0
        } else {
            f64::from(count) / f64::from(hands)
        }
    }

    pub fn vpip(&self) -> f64 {
        Self::ratio(self.vpip_hands, self.hands_dealt)
    }

    pub fn pfr(&self) -> f64 {
        Self::ratio(self.pfr_hands, self.hands_dealt)
    }
}

/// Профили игроков за столом.
///
/// Живёт в контроллере конкретного стола (никакого глобального реестра),
/// поэтому несколько столов работают независимо.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerProfiles {
    seats: Vec<SeatProfile>,
}

impl PlayerProfiles {
    pub fn new(num_seats: usize) -> Self {
        Self {
            seats: vec![SeatProfile::default(); num_seats],
        }
    }

    pub fn seat(&self, seat: SeatIndex) -> Option<&SeatProfile> {
        self.seats.get(seat)
    }

    /// Новая раздача: +1 раздача каждому, кто получил карты.
    pub fn on_hand_started(&mut self, table: &TableState) {
        for (profile, p) in self.seats.iter_mut().zip(table.players.iter()) {
            profile.vpip_this_hand = false;
            profile.pfr_this_hand = false;
            if p.is_playing() {
                profile.hands_dealt += 1;
            }
        }
    }

    /// Учесть действие на префлопе. Каждый счётчик растёт не больше раза за раздачу.
    pub fn record_preflop_action(&mut self, seat: SeatIndex, voluntary: bool, raised: bool) {
        let Some(profile) = self.seats.get_mut(seat) else {
            return;
        };
        if voluntary && !profile.vpip_this_hand {
            profile.vpip_this_hand = true;
            profile.vpip_hands += 1;
        }
        if raised && !profile.pfr_this_hand {
            profile.pfr_this_hand = true;
            profile.pfr_hands += 1;
        }
    }
}
