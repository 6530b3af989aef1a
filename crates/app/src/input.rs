//! Turns CSV rows and `--add` flags into roster entries.

use std::io;

use engine::{ParticipantId, Roster};
use serde::Deserialize;

use crate::error::{AppError, Result};

#[derive(Debug, Deserialize)]
struct ContributionRow {
    name: String,
    contribution: String,
}

/// Reads `name,contribution` rows into the roster, in file order.
///
/// The contribution is kept as text so the roster applies its own money
/// rules. Rows are numbered from 1, excluding the header.
pub fn load_csv<R: io::Read>(reader: R, roster: &mut Roster) -> Result<Vec<ParticipantId>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut ids = Vec::new();
    for (idx, row) in csv_reader.deserialize::<ContributionRow>().enumerate() {
        let row_number = idx + 1;
        let row = row?;
        let id = roster
            .add(&row.name, &row.contribution)
            .map_err(|source| AppError::InvalidRow {
                row: row_number,
                source,
            })?;
        ids.push(id);
    }
    tracing::debug!(rows = ids.len(), "loaded contributions from csv");
    Ok(ids)
}

/// Splits a `NAME=AMOUNT` flag value. The last `=` separates the amount.
pub fn parse_add_arg(raw: &str) -> Result<(&str, &str)> {
    raw.rsplit_once('=')
        .ok_or_else(|| AppError::InvalidArgument(format!("expected NAME=AMOUNT, got '{raw}'")))
}

pub fn add_from_args(args: &[String], roster: &mut Roster) -> Result<Vec<ParticipantId>> {
    args.iter()
        .map(|raw| {
            let (name, amount) = parse_add_arg(raw)?;
            Ok(roster.add(name, amount)?)
        })
        .collect()
}

/// Builds the roster from an optional CSV source followed by `--add` flags.
pub fn build_roster<R: io::Read>(csv: Option<R>, add: &[String]) -> Result<Roster> {
    let mut roster = Roster::new();
    if let Some(reader) = csv {
        load_csv(reader, &mut roster)?;
    }
    add_from_args(add, &mut roster)?;
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::EngineError;

    #[test]
    fn csv_rows_are_added_in_order() {
        let data = "name,contribution\nA, 90\n B ,30.00\nC,0\n";
        let mut roster = Roster::new();
        let ids = load_csv(data.as_bytes(), &mut roster).unwrap();

        assert_eq!(ids, [ParticipantId(1), ParticipantId(2), ParticipantId(3)]);
        let rows: Vec<(&str, f64)> = roster
            .iter()
            .map(|p| (p.name.as_str(), p.contribution))
            .collect();
        assert_eq!(rows, [("A", 90.0), ("B", 30.0), ("C", 0.0)]);
    }

    #[test]
    fn invalid_csv_row_reports_its_number() {
        let data = "name,contribution\nA,10\n,20\n";
        let mut roster = Roster::new();
        let err = load_csv(data.as_bytes(), &mut roster).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidRow {
                row: 2,
                source: EngineError::InvalidName(_)
            }
        ));
    }

    #[test]
    fn add_flags_split_on_last_equals() {
        assert_eq!(parse_add_arg("Ana=12.5").unwrap(), ("Ana", "12.5"));
        assert_eq!(parse_add_arg("a=b=3").unwrap(), ("a=b", "3"));
        assert!(parse_add_arg("Ana").is_err());
    }

    #[test]
    fn add_flags_go_through_the_roster() {
        let mut roster = Roster::new();
        roster.add("First", "1").unwrap();
        let args = vec!["A=10".to_string(), "B=0,5".to_string()];
        let ids = add_from_args(&args, &mut roster).unwrap();
        assert_eq!(ids, [ParticipantId(2), ParticipantId(3)]);
        assert_eq!(roster.participants()[2].contribution, 0.5);

        let bad = vec!["C=-1".to_string()];
        assert!(matches!(
            add_from_args(&bad, &mut roster),
            Err(AppError::Engine(EngineError::InvalidAmount(_)))
        ));
    }

    #[test]
    fn csv_rows_come_before_add_flags() {
        let data = "name,contribution\nA,90\nB,30\n";
        let add = vec!["C=0".to_string()];
        let roster = build_roster(Some(data.as_bytes()), &add).unwrap();

        let rows: Vec<(ParticipantId, &str)> = roster
            .iter()
            .map(|p| (p.id, p.name.as_str()))
            .collect();
        assert_eq!(
            rows,
            [
                (ParticipantId(1), "A"),
                (ParticipantId(2), "B"),
                (ParticipantId(3), "C"),
            ]
        );

        let debts = engine::settle_participants(roster.participants()).debts;
        assert_eq!(
            debts,
            vec![
                engine::Debt::new("C", "A", 40.0),
                engine::Debt::new("B", "A", 10.0),
            ]
        );
    }

    #[test]
    fn add_flags_alone_build_a_roster() {
        let add = vec!["A=1".to_string(), "B=2".to_string()];
        let roster = build_roster(None::<&[u8]>, &add).unwrap();
        assert_eq!(roster.len(), 2);
    }
}
