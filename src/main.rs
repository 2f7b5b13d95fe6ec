use chrono::NaiveDate;
use rusqlite::Connection;
use tracing::{error, info};

use sqlfn::person::{
    create_table_person, drop_table_person, insert_persons, select_all_persons,
    select_person_with_id, Person,
};
use sqlfn::{config, do_in_database, within_transaction, DbError};

fn main() {
    // Initialize the logging system using tracing subscriber
    tracing_subscriber::fmt::init();

    let db_path = resolve_db_path();
    info!("Using database at {}", db_path);

    let factory =
        move || Connection::open(&db_path).map_err(|e| DbError::Connection(e.to_string()));

    let drop_result = do_in_database(&factory, drop_table_person());
    drop_result.handle(
        |count| info!("Dropped person table ({} rows affected)", count),
        // First run against a fresh database has nothing to drop
        |err| info!("Nothing to drop: {}", err),
    );

    let create_result = do_in_database(&factory, create_table_person());
    create_result.handle(
        |_| info!("Created person table"),
        |err| error!("Failed to create person table: {}", err),
    );

    let persons = [
        Person::new(
            1,
            "Carl",
            "Carlsson",
            NaiveDate::from_ymd_opt(1972, 4, 2).expect("valid date"),
        ),
        Person::new(
            2,
            "Lenny",
            "Leonard",
            NaiveDate::from_ymd_opt(1981, 4, 2).expect("valid date"),
        ),
    ];

    let insert_result = do_in_database(&factory, within_transaction(insert_persons(&persons)));
    insert_result.handle(
        |counts| println!("Inserted rows: {:?}", counts),
        |err| error!("Failed to insert persons: {}", err),
    );

    let select_all_result = do_in_database(&factory, select_all_persons());
    select_all_result.handle(
        |persons| {
            println!("All persons:");
            for person in persons {
                println!(
                    "  {} {} (id {}, born {})",
                    person.first_name, person.last_name, person.id, person.birthday
                );
            }
        },
        |err| error!("Failed to select persons: {}", err),
    );

    let select_one_result = do_in_database(&factory, select_person_with_id(1));
    select_one_result.handle(
        |person| {
            println!(
                "Person with id 1: {} {}",
                person.first_name, person.last_name
            )
        },
        |err| error!("Failed to select person with id 1: {}", err),
    );
}

/// Resolves the database path: CLI argument first, then the config file,
/// then a default in the temp directory.
fn resolve_db_path() -> String {
    if let Some(path) = std::env::args().nth(1) {
        return path;
    }
    if let Ok(config) = config::load_config("sqlfn.toml") {
        if let Some(path) = config.database.path {
            return path;
        }
    }
    std::env::temp_dir()
        .join("sqlfn-demo.db")
        .to_string_lossy()
        .into_owned()
}
