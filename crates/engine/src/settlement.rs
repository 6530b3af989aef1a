//! Greedy settlement of balances into point-to-point transfers.
//!
//! Debtors are matched against creditors with two cursors, largest debt
//! against largest credit first. The result is short and deterministic but
//! not guaranteed to have the minimum possible number of transfers.

use serde::{Deserialize, Serialize};

use crate::{Balance, MoneyCents, Participant, PoolSummary, compute_balances, summarize};

/// One cent. Transfers at or below it are not emitted and balances below it
/// count as settled.
pub const EPSILON: f64 = 0.01;

/// A transfer that `from` has to make to `to`.
///
/// `amount` is always positive and rounded to 2 decimals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

impl Debt {
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }

    /// The amount as exact cents, for display.
    #[must_use]
    pub fn amount_cents(&self) -> MoneyCents {
        MoneyCents::from_f64_rounded(self.amount)
    }
}

/// Everything a front end shows for one snapshot of the pool.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub summary: PoolSummary,
    pub balances: Vec<Balance>,
    pub debts: Vec<Debt>,
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Splits balances into debtors (most negative first) and creditors (most
/// positive first). Both sorts are stable, so equal amounts keep input order.
fn partition(balances: &[Balance]) -> (Vec<Balance>, Vec<Balance>) {
    let (mut debtors, mut creditors): (Vec<Balance>, Vec<Balance>) = balances
        .iter()
        .filter(|b| b.amount.abs() >= EPSILON)
        .cloned()
        .partition(|b| b.amount < 0.0);

    debtors.sort_by(|a, b| a.amount.total_cmp(&b.amount));
    creditors.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    (debtors, creditors)
}

/// Produces the ordered list of transfers that brings every balance to zero.
///
/// The unrounded transfer is applied to both sides so residuals do not drift
/// across successive matches of the same participant; only the emitted
/// [`Debt::amount`] is rounded.
pub fn settle(balances: &[Balance]) -> Vec<Debt> {
    let (mut debtors, mut creditors) = partition(balances);
    let mut debts = Vec::new();

    let mut i = 0;
    let mut j = 0;
    while i < debtors.len() && j < creditors.len() {
        let debtor = &mut debtors[i];
        let creditor = &mut creditors[j];
        let transfer = (-debtor.amount).min(creditor.amount);

        if transfer > EPSILON {
            tracing::trace!(
                from = %debtor.name,
                to = %creditor.name,
                transfer,
                "matched debtor with creditor"
            );
            debts.push(Debt::new(
                debtor.name.clone(),
                creditor.name.clone(),
                round_cents(transfer),
            ));
        }

        debtor.amount += transfer;
        creditor.amount -= transfer;

        if debtor.amount.abs() < EPSILON {
            i += 1;
        }
        if creditor.amount.abs() < EPSILON {
            j += 1;
        }
    }

    tracing::debug!(
        debtors = debtors.len(),
        creditors = creditors.len(),
        transfers = debts.len(),
        "settlement computed"
    );
    debts
}

/// Runs the whole pipeline on a participant snapshot: summary, balances and
/// transfers.
pub fn settle_participants(participants: &[Participant]) -> Settlement {
    let balances = compute_balances(participants);
    let debts = settle(&balances);
    Settlement {
        summary: summarize(participants),
        balances,
        debts,
    }
}
