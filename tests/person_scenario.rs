//! End-to-end scenario over a file-backed database.
//!
//! Every `do_in_database` call opens its own connection, so the scenario
//! runs against a temp file rather than `:memory:` to observe that state
//! survives across calls (and therefore that connections really are
//! released and flushed between them).

use chrono::NaiveDate;
use rusqlite::Connection;
use sqlfn::person::{
    create_table_person, drop_table_person, insert_persons, select_all_persons,
    select_person_with_id, Person,
};
use sqlfn::{do_in_database, within_transaction, DbError, Result};
use std::path::PathBuf;
use tempfile::TempDir;

fn factory_for(path: PathBuf) -> impl Fn() -> Result<Connection> {
    move || Connection::open(&path).map_err(|e| DbError::Connection(e.to_string()))
}

fn carl() -> Person {
    Person::new(
        1,
        "Carl",
        "Carlsson",
        NaiveDate::from_ymd_opt(1972, 4, 2).unwrap(),
    )
}

fn lenny() -> Person {
    Person::new(
        2,
        "Lenny",
        "Leonard",
        NaiveDate::from_ymd_opt(1981, 4, 2).unwrap(),
    )
}

#[test]
fn test_create_insert_and_select_scenario() {
    let dir = TempDir::new().unwrap();
    let factory = factory_for(dir.path().join("person.db"));

    assert!(do_in_database(&factory, create_table_person()).is_left());

    let inserted = do_in_database(
        &factory,
        within_transaction(insert_persons(&[carl(), lenny()])),
    );
    assert_eq!(inserted.into_result().unwrap(), vec![1, 1]);

    let all = do_in_database(&factory, select_all_persons())
        .into_result()
        .unwrap();
    assert_eq!(all, vec![carl(), lenny()]);

    let single = do_in_database(&factory, select_person_with_id(1))
        .into_result()
        .unwrap();
    assert_eq!(single, carl());
}

#[test]
fn test_select_missing_person_reports_no_data_found() {
    let dir = TempDir::new().unwrap();
    let factory = factory_for(dir.path().join("person.db"));

    assert!(do_in_database(&factory, create_table_person()).is_left());

    let result = do_in_database(&factory, select_person_with_id(99));
    match result.right() {
        Some(DbError::NoDataFound) => {}
        other => panic!("Expected NoDataFound, got {:?}", other),
    }
}

#[test]
fn test_failed_transactional_insert_leaves_no_rows() {
    let dir = TempDir::new().unwrap();
    let factory = factory_for(dir.path().join("person.db"));

    assert!(do_in_database(&factory, create_table_person()).is_left());

    // Second insert violates the primary key; the whole batch rolls back.
    let duplicate = Person::new(
        1,
        "Carl",
        "Duplicate",
        NaiveDate::from_ymd_opt(1972, 4, 2).unwrap(),
    );
    let inserted = do_in_database(
        &factory,
        within_transaction(insert_persons(&[carl(), duplicate])),
    );
    assert!(inserted.is_right());

    let all = do_in_database(&factory, select_all_persons())
        .into_result()
        .unwrap();
    assert!(all.is_empty());
}

#[test]
fn test_drop_table_is_an_ordinary_update() {
    let dir = TempDir::new().unwrap();
    let factory = factory_for(dir.path().join("person.db"));

    // Dropping before the table exists fails as a plain backend error.
    assert!(do_in_database(&factory, drop_table_person()).is_right());

    assert!(do_in_database(&factory, create_table_person()).is_left());
    assert!(do_in_database(&factory, drop_table_person()).is_left());

    // Table is gone again.
    assert!(do_in_database(&factory, select_all_persons()).is_right());
}
