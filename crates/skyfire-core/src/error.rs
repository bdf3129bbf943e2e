//! Errors raised while advancing or configuring the simulation.

use std::fmt;

use crate::enums::{EntityKind, TickStage};

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A stage produced a NaN or infinite value. The tick is discarded.
    NonFiniteState {
        stage: TickStage,
        entity: EntityKind,
        id: Option<u64>,
    },
    /// Two live entities share an id. Fatal.
    DuplicateId { kind: EntityKind, id: u64 },
    /// A configuration value is out of range.
    InvalidConfig(String),
}

impl SimError {
    /// Whether the engine can drop the tick and carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SimError::NonFiniteState { .. })
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::NonFiniteState {
                stage,
                entity,
                id: Some(id),
            } => write!(f, "{stage} stage left {entity} {id} with a non-finite value"),
            SimError::NonFiniteState {
                stage,
                entity,
                id: None,
            } => write!(f, "{stage} stage left the {entity} with a non-finite value"),
            SimError::DuplicateId { kind, id } => write!(f, "duplicate {kind} id {id}"),
            SimError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for SimError {}
