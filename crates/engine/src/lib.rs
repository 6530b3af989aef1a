//! Settle up a shared expense pool.
//!
//! Everyone puts some money into the pool; the engine works out how far each
//! person is from the average and which transfers even everybody out.
//!
//! ```rust
//! use engine::{Debt, Roster, compute_balances, settle};
//!
//! let mut roster = Roster::new();
//! roster.add("A", "90").unwrap();
//! roster.add("B", "30").unwrap();
//! roster.add("C", "0").unwrap();
//!
//! let balances = compute_balances(roster.participants());
//! let debts = settle(&balances);
//! assert_eq!(
//!     debts,
//!     vec![Debt::new("C", "A", 40.0), Debt::new("B", "A", 10.0)]
//! );
//! ```
//!
//! Both [`compute_balances`] and [`settle`] are pure: they never mutate their
//! input and keep no state between calls.

pub use balances::{Balance, PoolSummary, compute_balances, summarize};
pub use error::EngineError;
pub use money::MoneyCents;
pub use participants::{Participant, ParticipantId, Roster};
pub use settlement::{Debt, EPSILON, Settlement, settle, settle_participants};

mod balances;
mod error;
mod money;
mod participants;
mod settlement;

type ResultEngine<T> = Result<T, EngineError>;
