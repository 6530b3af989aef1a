//! Participants of a shared pool and the [`Roster`] that registers them.
//!
//! The roster is the caller side of the engine: it validates what people
//! typed, hands out ids from a monotonic counter and keeps the list in
//! insertion order. The settlement functions only ever see an immutable
//! snapshot of it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{EngineError, MoneyCents, ResultEngine};

/// Identifier assigned by the [`Roster`]. Never reused within a roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub u64);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A person and how much they put into the pool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub contribution: f64,
}

impl Participant {
    pub fn new(id: u64, name: impl Into<String>, contribution: f64) -> Self {
        Self {
            id: ParticipantId(id),
            name: name.into(),
            contribution,
        }
    }
}

/// Ordered participant list with id allocation.
#[derive(Clone, Debug)]
pub struct Roster {
    participants: Vec<Participant>,
    next_id: u64,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            participants: Vec::new(),
            next_id: 1,
        }
    }
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a participant from raw user input.
    ///
    /// The name is trimmed and must not be empty; the contribution is parsed
    /// with [`MoneyCents`] rules and must not be negative.
    pub fn add(&mut self, name: &str, contribution: &str) -> ResultEngine<ParticipantId> {
        let amount: MoneyCents = contribution.parse()?;
        self.add_cents(name, amount)
    }

    /// Registers a participant with an already parsed contribution.
    pub fn add_cents(&mut self, name: &str, contribution: MoneyCents) -> ResultEngine<ParticipantId> {
        let name = normalize_name(name)?;
        if contribution.is_negative() {
            return Err(EngineError::InvalidAmount(format!(
                "contribution of '{name}' must not be negative"
            )));
        }

        let id = ParticipantId(self.next_id);
        self.next_id += 1;
        self.participants.push(Participant {
            id,
            name,
            contribution: contribution.as_f64(),
        });
        Ok(id)
    }

    /// Removes a participant, keeping the order of the others.
    pub fn remove(&mut self, id: ParticipantId) -> ResultEngine<Participant> {
        let index = self
            .participants
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))?;
        Ok(self.participants.remove(index))
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Owned copy of the current list, as handed to the settlement core.
    pub fn snapshot(&self) -> Vec<Participant> {
        self.participants.clone()
    }
}

fn normalize_name(value: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName(
            "participant name must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
