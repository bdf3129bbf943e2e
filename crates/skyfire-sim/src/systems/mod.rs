//! Tick stages. Each one operates on the engine's working world (or on
//! plain entity lists) and owns no state of its own.
//!
//! Execution order is fixed: flight, ballistics, pursuit, collision,
//! population, session.

pub mod ballistics;
pub mod collision;
pub mod flight;
pub mod population;
pub mod pursuit;
pub mod session;
pub mod snapshot;
