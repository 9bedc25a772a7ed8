//! Persona handlers
//!
//! Strategy dispatch over the closed persona enum. Each handler pulls a
//! bounded slice from the retriever, composes a persona-specific prompt and
//! invokes the LLM backend with its own generation parameters. Generation
//! failures are converted to degraded response text inside `handle`; a
//! handler never propagates an error.

mod citizen;
mod employee;
mod leader;

pub use citizen::CitizenHandler;
pub use employee::EmployeeHandler;
pub use leader::LeaderHandler;

use async_trait::async_trait;
use sahayak_core::{ClassificationRecord, Persona};

/// A persona-specific response strategy.
#[async_trait]
pub trait PersonaHandler: Send + Sync {
    /// Produce a response for a classified message. Always returns text,
    /// even when the downstream model call fails.
    async fn handle(&self, record: &ClassificationRecord) -> String;
}

/// Serialize data for prompt inclusion, truncated to a character budget.
///
/// Truncation is applied to the serialized blob, oblivious to record
/// boundaries: it may cut a record mid-structure. That keeps prompt size
/// bounded without ever failing on oversized data.
pub(crate) fn serialize_bounded<T: serde::Serialize>(data: &T, max_chars: usize) -> String {
    let mut serialized = serde_json::to_string(data).unwrap_or_else(|_| "{}".to_string());
    if let Some((idx, _)) = serialized.char_indices().nth(max_chars) {
        serialized.truncate(idx);
    }
    serialized
}

/// Routes a classified message to its persona handler.
///
/// The persona enum is closed, so dispatch is an exhaustive match: there is
/// no "unknown persona" branch to fall back from.
pub struct HandlerRegistry {
    citizen: CitizenHandler,
    employee: EmployeeHandler,
    leader: LeaderHandler,
}

impl HandlerRegistry {
    pub fn new(citizen: CitizenHandler, employee: EmployeeHandler, leader: LeaderHandler) -> Self {
        Self {
            citizen,
            employee,
            leader,
        }
    }

    /// Dispatch to the handler for the record's persona.
    pub async fn route(&self, record: &ClassificationRecord) -> String {
        match record.persona {
            Persona::Citizen => self.citizen.handle(record).await,
            Persona::Employee => self.employee.handle(record).await,
            Persona::Leader => self.leader.handle(record).await,
        }
    }
}
