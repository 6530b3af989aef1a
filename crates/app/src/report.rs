//! Renders a settlement for the terminal.

use engine::{MoneyCents, Participant, Settlement};

use crate::error::Result;

fn money(symbol: &str, amount: f64) -> String {
    format!("{symbol}{}", MoneyCents::from_f64_rounded(amount))
}

pub fn render_text(participants: &[Participant], settlement: &Settlement, symbol: &str) -> String {
    let mut lines = vec!["Participants".to_string()];
    if participants.is_empty() {
        lines.push("  nobody has been added yet".to_string());
    }
    let width = participants
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0);
    for p in participants {
        lines.push(format!(
            "  {:<width$}  {}",
            p.name,
            money(symbol, p.contribution)
        ));
    }

    lines.push(String::new());
    lines.push(format!("Total: {}", money(symbol, settlement.summary.total)));
    lines.push(format!(
        "Average per person: {}",
        money(symbol, settlement.summary.average)
    ));

    lines.push(String::new());
    lines.push("Result".to_string());
    if settlement.summary.participants < 2 {
        lines.push("  add at least 2 people to settle up".to_string());
    } else if settlement.debts.is_empty() {
        lines.push("  all square, nobody owes anything".to_string());
    } else {
        for debt in &settlement.debts {
            lines.push(format!(
                "  {} owes {} {symbol}{}",
                debt.from,
                debt.to,
                debt.amount_cents()
            ));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn render_json(settlement: &Settlement) -> Result<String> {
    Ok(serde_json::to_string_pretty(settlement)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::settle_participants;

    fn pool(entries: &[(&str, f64)]) -> Vec<Participant> {
        entries
            .iter()
            .enumerate()
            .map(|(idx, (name, amount))| Participant::new(idx as u64 + 1, *name, *amount))
            .collect()
    }

    #[test]
    fn lists_debts_in_settlement_order() {
        let participants = pool(&[("A", 90.0), ("B", 30.0), ("C", 0.0)]);
        let text = render_text(&participants, &settle_participants(&participants), "$");

        let c_line = text.find("C owes A $40.00").unwrap();
        let b_line = text.find("B owes A $10.00").unwrap();
        assert!(c_line < b_line);
        assert!(text.contains("Total: $120.00"));
        assert!(text.contains("Average per person: $40.00"));
    }

    #[test]
    fn asks_for_more_people() {
        let participants = pool(&[("A", 10.0)]);
        let text = render_text(&participants, &settle_participants(&participants), "$");
        assert!(text.contains("add at least 2 people"));

        let text = render_text(&[], &settle_participants(&[]), "$");
        assert!(text.contains("nobody has been added yet"));
    }

    #[test]
    fn reports_all_square() {
        let participants = pool(&[("A", 10.0), ("B", 10.0)]);
        let text = render_text(&participants, &settle_participants(&participants), "€");
        assert!(text.contains("all square"));
        assert!(text.contains("€10.00"));
    }

    #[test]
    fn json_contains_debts() {
        let participants = pool(&[("A", 100.0), ("B", 0.0)]);
        let json = render_json(&settle_participants(&participants)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["debts"][0]["from"], "B");
        assert_eq!(value["debts"][0]["amount"], 50.0);
    }
}
