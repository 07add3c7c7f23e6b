//! Движок Texas Hold'em для одного стола (no-limit, кэш-стеки без анте).
//!
//! Слои:
//! - `domain` – карты, колода, игроки, стол, конфиг;
//! - `eval` – оценка силы рук и Монте-Карло по категориям;
//! - `engine` – раунды ставок, сайд-поты, шоудаун, контроллер раздачи;
//! - `infra` – RNG и журнал сыгранных раздач;
//! - `api` – команды и DTO для UI и ботов.
//!
//! Библиотека пишет логи только через фасад `log`, логгер ставят бинарники.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
