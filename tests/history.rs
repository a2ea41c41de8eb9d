//! History behavior: recording, ordering, summaries, and the listing
//! renderer, exercised through the public facade.

use abacus::{Calculator, HistoryStore, Number, Operation};
use chrono::Utc;

fn int(i: i64) -> Number {
    Number::Int(i)
}

#[test]
fn history_starts_empty() {
    let calc = Calculator::new();
    assert_eq!(calc.history().len(), 0);
    assert!(calc.history().recent(None).is_empty());
    assert_eq!(calc.history().last_result(), None);
}

#[test]
fn each_operation_records_its_entry() {
    let mut calc = Calculator::new();

    calc.add(int(5), int(3)).unwrap();
    calc.subtract(int(10), int(4)).unwrap();
    calc.multiply(int(6), int(7)).unwrap();
    calc.divide(int(15), int(3)).unwrap();
    calc.power(int(2), int(3)).unwrap();
    calc.sqrt(int(16)).unwrap();

    let recent = calc.history().recent(None);
    assert_eq!(recent.len(), 6);

    // Newest-first: sqrt was last in, so it is first out.
    assert_eq!(recent[0].operation, Operation::Sqrt);
    assert_eq!(recent[0].operands, vec![int(16)]);
    assert_eq!(recent[0].result, Number::Float(4.0));
    assert_eq!(recent[0].expression, "√16 = 4.0");

    assert_eq!(recent[1].expression, "2 ^ 3 = 8");
    assert_eq!(recent[2].expression, "15 ÷ 3 = 5.0");
    assert_eq!(recent[3].expression, "6 x 7 = 42");
    assert_eq!(recent[4].expression, "10 - 4 = 6");
    assert_eq!(recent[5].expression, "5 + 3 = 8");
}

#[test]
fn multiple_operations_read_newest_first() {
    let mut calc = Calculator::new();
    calc.add(int(1), int(2)).unwrap();
    calc.subtract(int(5), int(3)).unwrap();
    calc.multiply(int(4), int(5)).unwrap();

    let expressions: Vec<&str> = calc
        .history()
        .recent(None)
        .iter()
        .map(|entry| entry.expression.as_str())
        .collect();
    assert_eq!(expressions, ["4 x 5 = 20", "5 - 3 = 2", "1 + 2 = 3"]);
}

#[test]
fn last_result_tracks_the_most_recent_entry() {
    let mut calc = Calculator::new();
    assert_eq!(calc.history().last_result(), None);

    calc.add(int(3), int(4)).unwrap();
    assert_eq!(calc.history().last_result(), Some(int(7)));

    calc.multiply(int(2), int(5)).unwrap();
    assert_eq!(calc.history().last_result(), Some(int(10)));
}

#[test]
fn clear_returns_the_count_and_resets() {
    let mut calc = Calculator::new();
    calc.add(int(1), int(1)).unwrap();
    calc.add(int(2), int(2)).unwrap();
    calc.add(int(3), int(3)).unwrap();

    assert_eq!(calc.history().len(), 3);
    assert_eq!(calc.history_mut().clear(), 3);
    assert_eq!(calc.history().len(), 0);
    assert!(calc.history().recent(None).is_empty());
    assert_eq!(calc.history().last_result(), None);
}

#[test]
fn limit_returns_the_k_most_recent() {
    let mut calc = Calculator::new();
    for i in 0..5 {
        calc.add(int(i), int(i)).unwrap();
    }
    assert_eq!(calc.history().len(), 5);

    let limited = calc.history().recent(Some(3));
    assert_eq!(limited.len(), 3);
    assert_eq!(limited[0].expression, "4 + 4 = 8");
    assert_eq!(limited[1].expression, "3 + 3 = 6");
    assert_eq!(limited[2].expression, "2 + 2 = 4");
}

#[test]
fn summary_covers_the_whole_timeline() {
    let mut calc = Calculator::new();

    let empty = calc.history().summary();
    assert_eq!(empty.total_calculations, 0);
    assert!(empty.operations_used.is_empty());
    assert_eq!(empty.most_recent, None);
    assert_eq!(empty.first_calculation, None);

    calc.add(int(1), int(2)).unwrap();
    calc.multiply(int(3), int(4)).unwrap();
    calc.add(int(5), int(6)).unwrap();
    calc.sqrt(int(9)).unwrap();

    let summary = calc.history().summary();
    assert_eq!(summary.total_calculations, 4);
    assert_eq!(summary.operations_used, ["add", "multiply", "sqrt"]);
    assert_eq!(summary.operation_counts["add"], 2);
    assert_eq!(summary.operation_counts["multiply"], 1);
    assert_eq!(summary.operation_counts["sqrt"], 1);
    assert_eq!(summary.most_recent.as_deref(), Some("√9 = 3.0"));
    assert_eq!(summary.first_calculation.as_deref(), Some("1 + 2 = 3"));
}

#[test]
fn failed_operations_are_not_recorded() {
    let mut calc = Calculator::new();
    let initial = calc.history().len();

    assert!(calc.divide(int(10), int(0)).is_err());
    assert!(calc.sqrt(int(-4)).is_err());
    assert!(calc.power(int(2), int(1_000_000)).is_err());
    assert!("not".parse::<Number>().is_err());

    assert_eq!(calc.history().len(), initial);
}

#[test]
fn records_negative_numbers_faithfully() {
    let mut calc = Calculator::new();
    calc.add(int(-5), int(-3)).unwrap();
    calc.subtract(int(-10), int(-7)).unwrap();
    calc.multiply(int(-2), int(4)).unwrap();

    let recent = calc.history().recent(None);
    assert_eq!(recent[2].expression, "-5 + -3 = -8");
    assert_eq!(recent[1].expression, "-10 - -7 = -3");
    assert_eq!(recent[0].expression, "-2 x 4 = -8");
}

#[test]
fn records_floating_point_expressions() {
    let mut calc = Calculator::new();
    calc.add(Number::Float(1.5), Number::Float(2.7)).unwrap();
    calc.divide(int(7), int(3)).unwrap();

    let recent = calc.history().recent(None);
    assert_eq!(recent.len(), 2);
    assert!(recent[1].expression.contains("1.5 + 2.7 = 4.2"));
    assert!(recent[0].expression.contains("7 ÷ 3 ="));
}

#[test]
fn repeated_reads_see_identical_entries() {
    let mut calc = Calculator::new();
    calc.add(int(5), int(3)).unwrap();

    let first: Vec<_> = calc
        .history()
        .recent(None)
        .into_iter()
        .cloned()
        .collect();
    let second: Vec<_> = calc
        .history()
        .recent(None)
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(first, second);
}

#[test]
fn caller_operand_buffers_cannot_rewrite_history() {
    let mut store = HistoryStore::new();
    let mut operands = vec![int(1), int(2)];
    store.add_entry(Operation::from("test"), &operands, int(3));

    operands[0] = int(999);

    assert_eq!(store.recent(None)[0].operands, vec![int(1), int(2)]);
}

#[test]
fn timestamps_fall_between_the_surrounding_clock_reads() {
    let mut calc = Calculator::new();
    let before = Utc::now();
    calc.add(int(1), int(1)).unwrap();
    let after = Utc::now();

    let timestamp = calc.history().recent(None)[0].timestamp;
    assert!(before <= timestamp && timestamp <= after);
}

#[test]
fn unrecognized_operations_use_the_fallback_rendering() {
    let mut store = HistoryStore::new();
    store.add_entry(Operation::from("modulo"), &[int(7), int(3)], int(1));
    assert_eq!(store.recent(None)[0].expression, "modulo(7, 3) = 1");
}

#[test]
fn listing_prints_the_recorded_expressions() {
    let mut calc = Calculator::new();
    calc.add(int(2), int(3)).unwrap();
    calc.multiply(int(4), int(5)).unwrap();

    let mut out = Vec::new();
    calc.history().write_listing(&mut out, None).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Calculation History (2 entries)"));
    assert!(text.contains("4 x 5 = 20"));
    assert!(text.contains("2 + 3 = 5"));
}

#[test]
fn empty_listing_prints_the_no_calculations_line() {
    let calc = Calculator::new();
    let mut out = Vec::new();
    calc.history().write_listing(&mut out, None).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("No calculations in history."));
}

#[test]
fn entries_round_trip_through_json() {
    let mut calc = Calculator::new();
    calc.divide(int(15), int(3)).unwrap();

    let entry = calc.history().recent(None)[0].clone();
    let json = serde_json::to_string(&entry).unwrap();
    let back: abacus::HistoryEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, entry);

    let summary_json = serde_json::to_value(calc.history().summary()).unwrap();
    assert_eq!(summary_json["total_calculations"], 1);
    assert_eq!(summary_json["most_recent"], "15 ÷ 3 = 5.0");
}
