//! Line codec for the tab-separated plant file format.
//!
//! One record per line, five tab-separated fields in fixed order:
//! `name, notes, frequencyDays, lastWateredDate, plantedDate`, with ISO
//! 8601 dates. This exact order and separator is the persisted format and
//! must round-trip.
//!
//! Parsing is strict on structure and lenient on field content: a line
//! with fewer than five fields or an empty name is rejected outright,
//! while an unparsable frequency or date is substituted (7 days / today)
//! with an [`Event::FieldDefaulted`] recorded on the injected sink.

use chrono::NaiveDate;
use thiserror::Error;

use crate::observer::{Event, EventSink};
use crate::record::{DEFAULT_FREQUENCY_DAYS, PlantError, PlantRecord};

/// Field separator of the persisted format.
pub const FIELD_SEPARATOR: char = '\t';

const FIELD_COUNT: usize = 5;

/// Errors that reject a whole line during parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line has {0} tab-separated fields, expected at least 5")]
    MalformedLine(usize),

    #[error("plant name is empty")]
    EmptyName,

    /// The fields parsed but violate a record invariant (e.g. watered
    /// before planted, non-positive frequency). Never defaulted.
    #[error(transparent)]
    Invalid(#[from] PlantError),
}

/// Render a record as one line of the persisted format.
pub fn format_record(record: &PlantRecord) -> String {
    format!(
        "{name}{sep}{notes}{sep}{freq}{sep}{watered}{sep}{planted}",
        name = record.name(),
        notes = record.notes(),
        freq = record.frequency_days(),
        watered = record.last_watered(),
        planted = record.planted(),
        sep = FIELD_SEPARATOR,
    )
}

/// Parse one line of the persisted format.
///
/// `today` is the substitute for unparsable dates. Recoverable field
/// substitutions are reported on `sink`; structural and invariant
/// failures reject the line with a [`ParseError`].
pub fn parse_record(
    line: &str,
    today: NaiveDate,
    sink: &dyn EventSink,
) -> Result<PlantRecord, ParseError> {
    // split preserves trailing empty fields: "a\tb\tc\td\t" is five
    // fields, the last one empty.
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < FIELD_COUNT {
        return Err(ParseError::MalformedLine(fields.len()));
    }

    let name = fields[0];
    if name.is_empty() {
        return Err(ParseError::EmptyName);
    }
    let notes = fields[1];
    let frequency_days = parse_frequency(fields[2], sink);
    let last_watered = parse_date("lastWateredDate", fields[3], today, sink);
    let planted = parse_date("plantedDate", fields[4], today, sink);

    // Fields beyond the fifth are ignored.
    Ok(PlantRecord::new(
        name,
        notes,
        planted,
        last_watered,
        frequency_days,
    )?)
}

fn parse_frequency(raw: &str, sink: &dyn EventSink) -> i64 {
    match raw.parse::<i64>() {
        Ok(days) => days,
        Err(_) => {
            sink.record(Event::FieldDefaulted {
                field: "frequencyDays",
                raw: raw.to_string(),
                substituted: DEFAULT_FREQUENCY_DAYS.to_string(),
            });
            DEFAULT_FREQUENCY_DAYS
        }
    }
}

fn parse_date(
    field: &'static str,
    raw: &str,
    today: NaiveDate,
    sink: &dyn EventSink,
) -> NaiveDate {
    match raw.parse::<NaiveDate>() {
        Ok(date) => date,
        Err(_) => {
            sink.record(Event::FieldDefaulted {
                field,
                raw: raw.to_string(),
                substituted: today.to_string(),
            });
            today
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::CapturingSink;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 6, 1)
    }

    #[test]
    fn format_uses_fixed_field_order() {
        let record =
            PlantRecord::new("Rose", "Red", date(2024, 1, 1), date(2024, 1, 10), 7).unwrap();
        assert_eq!(format_record(&record), "Rose\tRed\t7\t2024-01-10\t2024-01-01");
    }

    #[test]
    fn parse_format_roundtrip() {
        let sink = CapturingSink::new();
        let record =
            PlantRecord::new("Fern", "", date(2023, 12, 1), date(2024, 1, 5), 10).unwrap();
        let parsed = parse_record(&format_record(&record), today(), &sink).expect("should parse");
        assert_eq!(parsed, record);
        assert!(sink.is_empty(), "roundtrip must not default any field");
    }

    #[test]
    fn rejects_short_line() {
        let sink = CapturingSink::new();
        let err = parse_record("BadLine\tonly\ttwo", today(), &sink).unwrap_err();
        assert!(
            matches!(err, ParseError::MalformedLine(3)),
            "expected MalformedLine, got: {err}"
        );
        assert!(sink.is_empty(), "short lines are never defaulted");
    }

    #[test]
    fn rejects_empty_name() {
        let sink = CapturingSink::new();
        let err = parse_record("\tnotes\t7\t2024-01-01\t2024-01-01", today(), &sink).unwrap_err();
        assert!(matches!(err, ParseError::EmptyName));
    }

    #[test]
    fn trailing_empty_field_counts() {
        // Four values plus a trailing tab: the empty fifth field is
        // significant, so this parses (planted defaults to today).
        let sink = CapturingSink::new();
        let record = parse_record("Rose\tRed\t7\t2024-01-01\t", today(), &sink)
            .expect("trailing empty field should be preserved");
        assert_eq!(record.planted(), today());
        assert_eq!(sink.events().len(), 1);
    }

    #[test]
    fn unparsable_frequency_defaults_to_seven() {
        let sink = CapturingSink::new();
        let record = parse_record("Rose\tRed\tabc\t2024-01-01\t2024-01-01", today(), &sink)
            .expect("should parse with default frequency");
        assert_eq!(record.frequency_days(), 7);
        assert_eq!(
            sink.events(),
            vec![Event::FieldDefaulted {
                field: "frequencyDays",
                raw: "abc".to_string(),
                substituted: "7".to_string(),
            }]
        );
    }

    #[test]
    fn unparsable_dates_default_to_today() {
        let sink = CapturingSink::new();
        let record = parse_record("Rose\tRed\t7\tnot-a-date\talso-bad", today(), &sink)
            .expect("should parse with defaulted dates");
        assert_eq!(record.last_watered(), today());
        assert_eq!(record.planted(), today());
        assert_eq!(sink.events().len(), 2);
    }

    #[test]
    fn negative_frequency_is_invalid_not_defaulted() {
        // "-3" parses as an integer, so the defaulting policy does not
        // apply; the record invariant rejects it.
        let sink = CapturingSink::new();
        let err = parse_record("Rose\tRed\t-3\t2024-01-01\t2024-01-01", today(), &sink)
            .unwrap_err();
        assert!(
            matches!(err, ParseError::Invalid(PlantError::NonPositiveFrequency(-3))),
            "expected Invalid, got: {err}"
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn watered_before_planted_rejects_line() {
        let sink = CapturingSink::new();
        let err = parse_record("Rose\tRed\t7\t2024-01-01\t2024-06-01", today(), &sink)
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::Invalid(PlantError::WateredBeforePlanted { .. })
        ));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let sink = CapturingSink::new();
        let record = parse_record(
            "Rose\tRed\t7\t2024-01-10\t2024-01-01\textra\tmore",
            today(),
            &sink,
        )
        .expect("extra fields should be ignored");
        assert_eq!(record.name(), "Rose");
        assert_eq!(record.planted(), date(2024, 1, 1));
    }

    #[test]
    fn empty_notes_roundtrip() {
        let sink = CapturingSink::new();
        let record =
            PlantRecord::new("Fern", "", date(2024, 1, 1), date(2024, 1, 1), 3).unwrap();
        let line = format_record(&record);
        assert_eq!(line, "Fern\t\t3\t2024-01-01\t2024-01-01");
        let parsed = parse_record(&line, today(), &sink).unwrap();
        assert_eq!(parsed.notes(), "");
    }
}
