//! Storage-level tests exercising the library DB API directly.

use attendme::db::initialize::init_db;
use attendme::db::queries::{delete_record, insert_record, load_records};
use attendme::models::status::Status;
use chrono::NaiveDate;
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;

fn open_test_db(name: &str) -> Connection {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attendme_storage.sqlite", name));
    fs::remove_file(&path).ok();

    let conn = Connection::open(&path).expect("open db");
    init_db(&conn).expect("init db");
    conn
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

#[test]
fn insert_assigns_sequential_ids_and_roundtrips_fields() {
    let conn = open_test_db("roundtrip");

    let id = insert_record(&conn, "Alice", &d("2024-01-05"), Status::Here).expect("insert");
    assert_eq!(id, 1);

    let records = load_records(&conn, Some(&d("2024-01-05"))).expect("load");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].student_name, "Alice");
    assert_eq!(records[0].date, d("2024-01-05"));
    assert_eq!(records[0].status, Status::Here);
}

#[test]
fn delete_removes_exactly_one_row() {
    let conn = open_test_db("delete");

    let id1 = insert_record(&conn, "Alice", &d("2024-01-05"), Status::Here).expect("insert");
    let id2 = insert_record(&conn, "Bob", &d("2024-01-05"), Status::Absent).expect("insert");

    assert_eq!(delete_record(&conn, id1).expect("delete"), 1);
    assert_eq!(delete_record(&conn, id1).expect("delete again"), 0);

    let records = load_records(&conn, None).expect("load");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id2);
}

#[test]
fn unfiltered_load_is_ordered_by_date_descending() {
    let conn = open_test_db("ordering");

    insert_record(&conn, "Alice", &d("2024-01-05"), Status::Here).expect("insert");
    insert_record(&conn, "Bob", &d("2024-03-01"), Status::Travel).expect("insert");
    insert_record(&conn, "Carol", &d("2024-02-10"), Status::Excluded).expect("insert");

    let records = load_records(&conn, None).expect("load");
    let dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![d("2024-03-01"), d("2024-02-10"), d("2024-01-05")]);
}

#[test]
fn filtered_load_returns_only_matching_date() {
    let conn = open_test_db("filtering");

    insert_record(&conn, "Alice", &d("2024-01-05"), Status::Here).expect("insert");
    insert_record(&conn, "Bob", &d("2024-01-06"), Status::Here).expect("insert");

    let records = load_records(&conn, Some(&d("2024-01-05"))).expect("load");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].student_name, "Alice");

    let none = load_records(&conn, Some(&d("2024-01-07"))).expect("load");
    assert!(none.is_empty());
}

#[test]
fn duplicate_name_date_pairs_get_distinct_ids() {
    let conn = open_test_db("duplicates");

    let a = insert_record(&conn, "Alice", &d("2024-01-05"), Status::Here).expect("insert");
    let b = insert_record(&conn, "Alice", &d("2024-01-05"), Status::Here).expect("insert");
    assert_ne!(a, b);

    let records = load_records(&conn, Some(&d("2024-01-05"))).expect("load");
    assert_eq!(records.len(), 2);
}

#[test]
fn insert_delete_select_example() {
    let conn = open_test_db("example");

    let id = insert_record(&conn, "Alice", &d("2024-01-05"), Status::Here).expect("insert");
    assert_eq!(id, 1);

    let records = load_records(&conn, Some(&d("2024-01-05"))).expect("load");
    assert_eq!(records.len(), 1);

    delete_record(&conn, id).expect("delete");

    let records = load_records(&conn, Some(&d("2024-01-05"))).expect("load");
    assert!(records.is_empty());
}
