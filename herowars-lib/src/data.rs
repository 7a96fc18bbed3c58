//! Hero dataset loading.
//!
//! The library ships a bundled dataset; alternative datasets can be read
//! from JSON (an array of flat records) or from the scraper's
//! semicolon-delimited CSV output.

use std::io::Read;

use log::{debug, info};

use crate::error::LoadError;
use crate::filter::parse_number;
use crate::hero;
use crate::model::{Record, Value};

const BUNDLED: &str = include_str!("../data/heros.json");

/// Scraper CSV columns, in file order, with how each cell is parsed.
const CSV_COLUMNS: [(&str, CsvKind); 16] = [
    (hero::HERO, CsvKind::Text),
    (hero::IMAGE, CsvKind::Text),
    (hero::ROLE, CsvKind::Text),
    (hero::ATTACK_TYPE, CsvKind::Text),
    (hero::STATS[0].0, CsvKind::Number),
    (hero::STATS[1].0, CsvKind::Number),
    (hero::STATS[2].0, CsvKind::Number),
    (hero::STATS[3].0, CsvKind::Number),
    (hero::STATS[4].0, CsvKind::Number),
    (hero::STATS[5].0, CsvKind::Number),
    (hero::STATS[6].0, CsvKind::Number),
    (hero::STATS[7].0, CsvKind::Number),
    (hero::STATS[8].0, CsvKind::Number),
    (hero::STATS[9].0, CsvKind::Number),
    (hero::STATS[10].0, CsvKind::Number),
    (hero::STATS[11].0, CsvKind::Number),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CsvKind {
    Text,
    Number,
}

/// The dataset compiled into the library.
pub fn bundled() -> Result<Vec<Record>, LoadError> {
    from_json_str(BUNDLED)
}

/// Parse a JSON array of records.
pub fn from_json_str(json: &str) -> Result<Vec<Record>, LoadError> {
    let records: Vec<Record> = serde_json::from_str(json)?;
    info!("Loaded {} records from JSON", records.len());
    Ok(records)
}

/// Read a JSON array of records.
pub fn from_json_reader(reader: impl Read) -> Result<Vec<Record>, LoadError> {
    let records: Vec<Record> = serde_json::from_reader(reader)?;
    info!("Loaded {} records from JSON", records.len());
    Ok(records)
}

/// Parse the scraper's semicolon-delimited output.
///
/// A leading byte order mark and header row (first field `name`) are
/// skipped and blank lines are ignored. Empty cells become `Null`;
/// thousands separators in numeric cells are stripped.
pub fn from_scraper_csv(input: &str) -> Result<Vec<Record>, LoadError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut records = Vec::new();

    for (i, line) in input.lines().enumerate() {
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_csv_line(line, line_no)?;
        if i == 0 && fields.first().is_some_and(|f| f.eq_ignore_ascii_case("name")) {
            debug!("Skipping CSV header row");
            continue;
        }
        if fields.len() != CSV_COLUMNS.len() {
            return Err(LoadError::FieldCount {
                line: line_no,
                expected: CSV_COLUMNS.len(),
                found: fields.len(),
            });
        }

        let mut record = Record::new();
        for ((column, kind), raw) in CSV_COLUMNS.iter().zip(fields) {
            let value = match kind {
                CsvKind::Text => csv_text(raw),
                CsvKind::Number => csv_number(&raw).ok_or_else(|| LoadError::InvalidNumber {
                    line: line_no,
                    column: *column,
                    value: raw.clone(),
                })?,
            };
            record.insert(*column, value);
        }
        records.push(record);
    }

    info!("Loaded {} records from scraper CSV", records.len());
    Ok(records)
}

fn csv_text(raw: String) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Value::Null
    } else {
        Value::String(trimmed.to_string())
    }
}

/// `Some(Null)` for an empty cell, `None` if the cell is not a number.
fn csv_number(raw: &str) -> Option<Value> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Some(Value::Null);
    }
    if let Ok(n) = cleaned.parse::<i64>() {
        return Some(Value::Int(n));
    }
    parse_number(&cleaned).map(Value::Float)
}

/// Splits one line on `;`, honoring double-quoted fields with `""` escapes.
fn split_csv_line(line: &str, line_no: usize) -> Result<Vec<String>, LoadError> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            ('"', true) => in_quotes = false,
            ('"', false) if field.is_empty() => in_quotes = true,
            (';', false) => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    if in_quotes {
        return Err(LoadError::UnterminatedQuote { line: line_no });
    }
    fields.push(field);
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_quoted_fields() {
        let fields = split_csv_line(r#"a;"b;c";"say ""hi""";"#, 1).unwrap();
        assert_eq!(fields, vec!["a", "b;c", "say \"hi\"", ""]);
    }

    #[test]
    fn test_unterminated_quote() {
        let err = split_csv_line(r#"a;"b"#, 7).unwrap_err();
        assert!(matches!(err, LoadError::UnterminatedQuote { line: 7 }));
    }

    #[test]
    fn test_csv_number() {
        assert_eq!(csv_number("1,234"), Some(Value::Int(1234)));
        assert_eq!(csv_number("12.5"), Some(Value::Float(12.5)));
        assert_eq!(csv_number(""), Some(Value::Null));
        assert_eq!(csv_number("n/a"), None);
    }

    #[test]
    fn test_bundled_dataset_loads() {
        let records = bundled().unwrap();
        assert!(!records.is_empty());
        for record in &records {
            assert!(record.get_string(hero::HERO).unwrap().is_some());
        }
    }
}
