//! Net balances relative to the group average.
//!
//! A [`Balance`] is positive when the participant put in more than the
//! average (they are owed money) and negative when they put in less (they
//! owe money). Amounts are left unrounded; rounding happens only when a
//! [`Debt`](crate::Debt) is emitted.

use serde::{Deserialize, Serialize};

use crate::Participant;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub name: String,
    pub amount: f64,
}

impl Balance {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Totals of a pool, as shown next to the participant list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolSummary {
    pub participants: usize,
    pub total: f64,
    pub average: f64,
}

/// Counts participants and computes the total and per-person average.
///
/// An empty list yields zero total and zero average.
pub fn summarize(participants: &[Participant]) -> PoolSummary {
    let total: f64 = participants.iter().map(|p| p.contribution).sum();
    let average = if participants.is_empty() {
        0.0
    } else {
        total / participants.len() as f64
    };
    PoolSummary {
        participants: participants.len(),
        total,
        average,
    }
}

/// Computes each participant's contribution minus the group average.
///
/// Returns an empty list for fewer than 2 participants: there is nobody to
/// settle against. Output order follows input order.
pub fn compute_balances(participants: &[Participant]) -> Vec<Balance> {
    if participants.len() < 2 {
        return Vec::new();
    }

    let average = summarize(participants).average;
    participants
        .iter()
        .map(|p| Balance::new(p.name.clone(), p.contribution - average))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(entries: &[(&str, f64)]) -> Vec<Participant> {
        entries
            .iter()
            .enumerate()
            .map(|(idx, (name, amount))| Participant::new(idx as u64 + 1, *name, *amount))
            .collect()
    }

    #[test]
    fn fewer_than_two_participants_have_no_balances() {
        assert!(compute_balances(&[]).is_empty());
        assert!(compute_balances(&pool(&[("A", 100.0)])).is_empty());
    }

    #[test]
    fn balances_are_relative_to_average_in_input_order() {
        let balances = compute_balances(&pool(&[("A", 90.0), ("B", 30.0), ("C", 0.0)]));
        assert_eq!(
            balances,
            vec![
                Balance::new("A", 50.0),
                Balance::new("B", -10.0),
                Balance::new("C", -40.0),
            ]
        );
    }

    #[test]
    fn uneven_split_is_not_rounded() {
        let balances = compute_balances(&pool(&[("A", 100.0), ("B", 0.0), ("C", 0.0)]));
        assert!((balances[0].amount - 200.0 / 3.0).abs() < 1e-9);
        assert!((balances[1].amount + 100.0 / 3.0).abs() < 1e-9);
        let sum: f64 = balances.iter().map(|b| b.amount).sum();
        assert!(sum.abs() < 1e-9);
    }

    #[test]
    fn summary_of_empty_pool_is_zero() {
        assert_eq!(summarize(&[]), PoolSummary::default());
    }

    #[test]
    fn summary_reports_total_and_average() {
        let summary = summarize(&pool(&[("A", 100.0), ("B", 0.0), ("C", 50.0)]));
        assert_eq!(summary.participants, 3);
        assert_eq!(summary.total, 150.0);
        assert_eq!(summary.average, 50.0);
    }
}
