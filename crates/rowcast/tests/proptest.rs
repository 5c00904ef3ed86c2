//! Property-based tests for the encoder using proptest.

use proptest::prelude::*;
use rowcast::{Encoder, EncoderBuilder, Record};

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone, Record)]
struct Row {
    pub name: String,
    pub count: i64,
    pub active: bool,
}

fn row_strategy() -> impl Strategy<Value = Row> {
    (any::<String>(), any::<i64>(), any::<bool>()).prop_map(|(name, count, active)| Row {
        name,
        count,
        active,
    })
}

fn encode(rows: &[Row], skip_header: bool) -> String {
    let mut encoder = EncoderBuilder::new()
        .skip_header(skip_header)
        .from_writer(Vec::new());
    encoder.encode(rows).unwrap();
    String::from_utf8(encoder.into_inner().unwrap()).unwrap()
}

// Reads the output back with a terminator matching the writer's, so bare
// carriage returns inside cells are data, not record boundaries.
fn read_back(output: &str, has_headers: bool) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_reader(output.as_bytes());

    let headers = if has_headers {
        reader
            .headers()
            .unwrap()
            .iter()
            .map(String::from)
            .collect()
    } else {
        Vec::new()
    };

    let records = reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();

    (headers, records)
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// With the header enabled, output decodes to one header plus one record
    /// per input row, each with one cell per field.
    #[test]
    fn output_has_one_record_per_row(rows in prop::collection::vec(row_strategy(), 1..50)) {
        let output = encode(&rows, false);
        let (headers, records) = read_back(&output, true);

        prop_assert_eq!(headers, vec!["name", "count", "active"]);
        prop_assert_eq!(records.len(), rows.len());
        for record in &records {
            prop_assert_eq!(record.len(), 3);
        }
    }

    /// With the header suppressed, output decodes to exactly the data rows.
    #[test]
    fn skip_header_drops_exactly_one_record(rows in prop::collection::vec(row_strategy(), 1..50)) {
        let output = encode(&rows, true);
        let (_, records) = read_back(&output, false);
        prop_assert_eq!(records.len(), rows.len());
    }

    /// Every cell round-trips exactly through standard CSV quoting, whatever
    /// delimiters, quotes or line endings it contains.
    #[test]
    fn cells_round_trip_through_quoting(rows in prop::collection::vec(row_strategy(), 1..20)) {
        let output = encode(&rows, false);
        let (_, records) = read_back(&output, true);

        for (row, record) in rows.iter().zip(&records) {
            prop_assert_eq!(&record[0], &row.name);
            prop_assert_eq!(&record[1], &row.count.to_string());
            prop_assert_eq!(&record[2], &row.active.to_string());
        }
    }

    /// Simple cells (no quoting triggers) produce exactly one line per row
    /// plus one for the header.
    #[test]
    fn simple_output_has_n_plus_one_lines(
        rows in prop::collection::vec(
            ("[a-zA-Z0-9 ]{0,12}", any::<i64>(), any::<bool>()).prop_map(|(name, count, active)| Row {
                name,
                count,
                active,
            }),
            1..50,
        ),
    ) {
        let output = encode(&rows, false);
        prop_assert_eq!(output.lines().count(), rows.len() + 1);

        let output = encode(&rows, true);
        prop_assert_eq!(output.lines().count(), rows.len());
    }
}
