use proptest::prelude::*;
use sli_trace_source::CsvTraceSource;

proptest! {
    /// Whichever of tab, semicolon or comma is used consistently as the
    /// delimiter, the source recovers the same column count and row count.
    #[test]
    fn consistent_delimiter_round_trips_regardless_of_which_one(
        delimiter in prop_oneof![Just('\t'), Just(';'), Just(',')],
        rows in proptest::collection::vec(1i64..1000, 1..20),
    ) {
        let header = format!("id{delimiter}v");
        let mut text = header;
        text.push('\n');
        for (i, v) in rows.iter().enumerate() {
            text.push_str(&format!("{i}{delimiter}{v}\n"));
        }

        let source = CsvTraceSource::from_str(&text).unwrap();
        prop_assert_eq!(source.headers().len(), 2);
        prop_assert_eq!(source.measurements().len(), rows.len());
    }
}

#[test]
fn header_row_with_tab_wins_over_embedded_commas_in_values() {
    let source = CsvTraceSource::from_str("id\tnote\n0\thello, world\n").unwrap();
    assert_eq!(source.headers(), &["id", "note"]);
}
