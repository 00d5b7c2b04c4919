use std::path::Path;

#[cfg(not(test))]
use rusqlite::OpenFlags;
use rusqlite::{Connection, Result};

use crate::db_migrations::migrate_db;

pub mod cargo_repository;
pub mod certificate_repository;
pub mod drawing_repository;
pub mod image_repository;
pub mod inspection_repository;
pub mod metadata_repository;
pub mod regulation_repository;
pub mod tank_repository;
pub mod user_repository;
pub mod valve_repository;

/// creates a new connection and returns it, but panics if the connection could not be created
#[cfg(not(test))]
pub fn open_connection() -> Connection {
    use crate::config::TANK_SERVER_CONFIG;

    let con = match Connection::open_with_flags(
        Path::new(TANK_SERVER_CONFIG.clone().database.location.as_str()),
        OpenFlags::default(),
    ) {
        Ok(con) => con,
        Err(error) => panic!("Failed to get a connection to the database!: {error}"),
    };
    enable_foreign_keys(&con);
    con
}

#[cfg(test)]
pub fn open_connection() -> Connection {
    let db_name = format!("{}.sqlite", crate::test::current_thread_name());
    let con =
        match Connection::open_with_flags(Path::new(db_name.as_str()), rusqlite::OpenFlags::default()) {
            Ok(con) => con,
            Err(error) => panic!("Failed to get a connection to the database!: {error}"),
        };
    enable_foreign_keys(&con);
    con
}

// sqlite leaves foreign keys off unless asked, and the delete cascades rely on them
fn enable_foreign_keys(con: &Connection) {
    con.pragma_update(None, "foreign_keys", "ON")
        .expect("Failed to enable foreign keys on the database connection!");
}

/// true when the error is a unique/foreign key constraint violation, which
/// several services translate into an "already exists" result
pub fn is_constraint_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

/// runs init.sql on the database
fn create_db(con: &mut Connection) {
    let sql = include_str!("../assets/init.sql");
    con.execute_batch(sql).unwrap();
}

/// handles checking if the database exists and is up to the correct version.
/// If not, it either creates or upgrades the database accordingly
pub fn initialize_db() -> Result<()> {
    let mut con = open_connection();
    let table_version = match metadata_repository::get_version(&con) {
        Ok(value) => value.parse::<u64>().unwrap(),
        Err(_) => {
            // tables haven't been created yet
            create_db(&mut con);
            metadata_repository::get_version(&con)?.parse::<u64>().unwrap()
        }
    };
    migrate_db(&con, table_version)?;
    con.close().unwrap();
    Ok(())
}
