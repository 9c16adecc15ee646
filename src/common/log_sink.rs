// src/common/log_sink.rs

use std::{
    collections::VecDeque,
    fmt::Write as _,
    fs::{File, OpenOptions},
    io::Write as _,
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{
    field::{Field, Visit},
    Event, Level, Subscriber,
};
use tracing_subscriber::{layer::Context, Layer};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: String,
    pub target: String,
    pub message: String,
}

struct SinkState {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    file: Option<File>,
}

/// Destino compartilhado dos erros da aplicação.
///
/// Guarda os últimos `capacity` eventos de nível WARN ou mais grave e, se
/// configurado, também os grava em um arquivo (um JSON por linha).
#[derive(Clone)]
pub struct LogSink {
    state: Arc<Mutex<SinkState>>,
}

impl LogSink {
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Arc::new(Mutex::new(SinkState {
                entries: VecDeque::with_capacity(capacity.min(1024)),
                capacity: capacity.max(1),
                file: None,
            })),
        }
    }

    pub fn with_file(capacity: usize, path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let sink = Self::new(capacity);
        sink.lock().file = Some(file);
        Ok(sink)
    }

    pub fn append(&self, entry: LogEntry) {
        let mut state = self.lock();

        if let Some(file) = state.file.as_mut() {
            if let Ok(line) = serde_json::to_string(&entry) {
                // Falha de escrita no arquivo não pode derrubar a requisição.
                let _ = writeln!(file, "{}", line);
            }
        }

        if state.entries.len() == state.capacity {
            state.entries.pop_front();
        }
        state.entries.push_back(entry);
    }

    /// Cópia das entradas em memória, da mais antiga para a mais recente.
    pub fn recent(&self) -> Vec<LogEntry> {
        self.lock().entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    fn lock(&self) -> MutexGuard<'_, SinkState> {
        // Um pânico no meio de um append não invalida o buffer.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }
}

impl<S> Layer<S> for LogSink
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        // Em `tracing`, níveis mais verbosos são "maiores".
        if *metadata.level() > Level::WARN {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.append(LogEntry {
            timestamp: Utc::now(),
            level: metadata.level().to_string(),
            target: metadata.target().to_string(),
            message: format!("{}{}", visitor.message, visitor.fields),
        });
    }
}
