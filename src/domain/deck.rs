use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, Rank, Suit};

/// Размер полной колоды.
pub const DECK_SIZE: usize = 52;

/// Попытка взять карту из пустой колоды.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("Колода пуста")]
pub struct EmptyDeck;

/// Колода карт. В домене – просто упорядоченный список карт.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn deal(&mut self) -> Result<Card, EmptyDeck> {
        self.cards.pop().ok_or(EmptyDeck)
    }

    /// Взять n карт сверху.
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, EmptyDeck> {
        if self.cards.len() < n {
            return Err(EmptyDeck);
        }
        let mut taken = Vec::with_capacity(n);
        for _ in 0..n {
            taken.push(self.deal()?);
        }
        Ok(taken)
    }

    /// Вернуть карты в колоду (конец раздачи).
    pub fn return_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Количество различных карт в колоде.
    pub fn unique_count(&self) -> usize {
        self.cards.iter().collect::<HashSet<_>>().len()
    }

    /// Убрать из колоды уже известные карты (для симуляций).
    pub fn remove_cards(&mut self, to_remove: &[Card]) {
        self.cards.retain(|c| !to_remove.contains(c));
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard_52()
    }
}
