//! Инфраструктурный слой вокруг покерного движка:
//! - RNG-реализации для движка;
//! - журнал сыгранных раздач (JSON Lines / in-memory).

pub mod persistence;
pub mod rng;

pub use persistence::*;
pub use rng::*;
