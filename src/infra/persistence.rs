use std::io::{self, Write};

use crate::engine::HandHistory;

/// Куда складывать истории сыгранных раздач (реплей, аналитика).
///
/// Формат не влияет на корректность движка: это только журнал.
pub trait HandLogSink {
    /// Записать одну завершённую раздачу.
    fn record(&mut self, history: &HandHistory) -> io::Result<()>;
}

/// JSON Lines: одна строка JSON на раздачу.
#[derive(Debug)]
pub struct JsonlHandLog<W: Write> {
    writer: W,
    written: u64,
}

impl<W: Write> JsonlHandLog<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Сколько раздач записано.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> HandLogSink for JsonlHandLog<W> {
    fn record(&mut self, history: &HandHistory) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, history)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.written += 1;
        Ok(())
    }
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryHandLog {
    pub hands: Vec<HandHistory>,
}

impl InMemoryHandLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HandLogSink for InMemoryHandLog {
    fn record(&mut self, history: &HandHistory) -> io::Result<()> {
        self.hands.push(history.clone());
        Ok(())
    }
}

/// Прочитать журнал JSON Lines обратно (пустые строки пропускаются).
pub fn read_jsonl(input: &str) -> Result<Vec<HandHistory>, serde_json::Error> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(serde_json::from_str::<HandHistory>)
        .collect()
}
