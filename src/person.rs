/// Example entity and its database operations.
///
/// `Person` is the demo record the combinators are exercised with: the
/// operations here are built purely from [`statement`], the query/update
/// executors, and the extraction combinators, and run through
/// [`crate::operations::do_in_database`]. Birthdays are stored as
/// ISO-8601 text.
use chrono::NaiveDate;
use rusqlite::{Connection, Row};

use crate::error::{DbError, Result};
use crate::query::{database_query, multiple_row_extraction, single_row_extraction};
use crate::statement::{statement, SqlCommand};
use crate::update::{database_update, multiple_database_updates};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birthday: NaiveDate,
}

impl Person {
    pub fn new(id: i64, first_name: &str, last_name: &str, birthday: NaiveDate) -> Self {
        Person {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            birthday,
        }
    }
}

pub fn drop_table_person() -> impl FnOnce(&Connection) -> Result<usize> {
    database_update(statement("DROP TABLE person"))
}

pub fn create_table_person() -> impl FnOnce(&Connection) -> Result<usize> {
    database_update(statement(
        "CREATE TABLE person (
            id INTEGER PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            birthday TEXT NOT NULL
        )",
    ))
}

fn insert_person(person: &Person) -> SqlCommand {
    statement("INSERT INTO person (id, first_name, last_name, birthday) VALUES (?1, ?2, ?3, ?4)")
        .bind(person.id)
        .bind(person.first_name.clone())
        .bind(person.last_name.clone())
        .bind(person.birthday.format("%Y-%m-%d").to_string())
}

/// Inserts all persons in order, one statement each.
pub fn insert_persons(persons: &[Person]) -> impl FnOnce(&Connection) -> Result<Vec<usize>> {
    multiple_database_updates(persons.iter().map(insert_person).collect())
}

pub fn select_all_persons() -> impl FnOnce(&Connection) -> Result<Vec<Person>> {
    database_query(
        statement("SELECT id, first_name, last_name, birthday FROM person ORDER BY id"),
        multiple_row_extraction(person_from_row),
    )
}

pub fn select_person_with_id(id: i64) -> impl FnOnce(&Connection) -> Result<Person> {
    database_query(
        statement("SELECT id, first_name, last_name, birthday FROM person WHERE id = ?1").bind(id),
        single_row_extraction(person_from_row),
    )
}

fn person_from_row(row: &Row<'_>) -> Result<Person> {
    let birthday: String = row.get("birthday")?;
    let birthday = NaiveDate::parse_from_str(&birthday, "%Y-%m-%d")
        .map_err(|e| DbError::Mapping(format!("invalid birthday {:?}: {}", birthday, e)))?;
    Ok(Person {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        birthday,
    })
}
