//! Внешний API покерного движка.
//!
//! Здесь описываются:
//! - команды (commands.rs) – действие игрока в формате клиента и старт раздачи;
//! - DTO (dto.rs) – снимок стола для UI и ботов;
//! - ошибки (errors.rs) – то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;

pub use commands::*;
pub use dto::*;
pub use errors::*;
