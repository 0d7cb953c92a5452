// tests/view_filter.rs
//
// Display list derivation: subsequence, order, idempotence.

use fda_monitor::config::options::ViewMode::{ShowAll, ShowChanged};
use fda_monitor::filter::{changed_count, visible};
use fda_monitor::loader::parse_document;
use fda_monitor::model::{Dataset, Entry};

fn entry(license: &str, changed: bool) -> Entry {
    Entry {
        license: license.into(),
        name: format!("Drug {license}"),
        is_changed: changed,
        last_change_date: changed.then(|| "2024-05-05".to_string()),
        ..Entry::default()
    }
}

fn mixed() -> Dataset {
    Dataset::new(
        vec![
            entry("A", false),
            entry("B", true),
            entry("C", false),
            entry("D", true),
            entry("E", true),
        ],
        "2024-05-06",
    )
}

fn licenses(v: &[&Entry]) -> Vec<String> {
    v.iter().map(|e| e.license.clone()).collect()
}

#[test]
fn show_all_is_the_whole_list_in_order() {
    let ds = mixed();
    let all = visible(&ds, ShowAll);
    assert_eq!(licenses(&all), vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn show_changed_is_an_ordered_subsequence() {
    let ds = mixed();
    let all = visible(&ds, ShowAll);
    let changed = visible(&ds, ShowChanged);

    assert_eq!(licenses(&changed), vec!["B", "D", "E"]);
    assert!(changed.iter().all(|e| e.is_changed));
    assert_eq!(changed.len(), changed_count(&ds));

    // every changed entry appears in `all`, in the same relative order
    let mut pos = 0;
    for e in &changed {
        let found = all[pos..].iter().position(|a| std::ptr::eq(*a, *e)).expect("subsequence");
        pos += found + 1;
    }
}

#[test]
fn filtering_is_idempotent_and_leaves_source_alone() {
    let ds = mixed();
    let before = ds.clone();

    let once = licenses(&visible(&ds, ShowChanged));
    let twice = licenses(&visible(&ds, ShowChanged));
    assert_eq!(once, twice);
    assert_eq!(ds, before);
}

#[test]
fn scenario_a_counts() {
    let ds = parse_document(
        br#"{"items":[{"license":"A1","name":"X","code":"C1","is_changed":false,"fda_url":"u"}],"last_updated":"2024-01-01"}"#,
    )
    .unwrap();
    assert_eq!(visible(&ds, ShowAll).len(), 1);
    assert_eq!(visible(&ds, ShowChanged).len(), 0);
}

#[test]
fn scenario_b_changed_entry_with_date() {
    let ds = parse_document(
        br#"[{"license":"B2","name":"Y","code":"C2","is_changed":true,"last_change_date":"2024-02-02","fda_url":"u2"}]"#,
    )
    .unwrap();
    let shown = visible(&ds, ShowChanged);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].last_change_date.as_deref(), Some("2024-02-02"));
}

#[test]
fn empty_dataset_shows_nothing_in_either_mode() {
    let ds = Dataset::pending();
    assert!(visible(&ds, ShowAll).is_empty());
    assert!(visible(&ds, ShowChanged).is_empty());
}
