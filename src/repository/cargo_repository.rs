use rusqlite::{params, Connection, Row};

use crate::model::repository::{Cargo, CargoAssignment};

pub fn create_cargo(cargo: &Cargo, con: &Connection) -> Result<Cargo, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!("../assets/queries/cargo/create_cargo.sql"))
        .unwrap();
    let id = pst.insert(params![cargo.cargo_reference, cargo.created_by])? as u32;
    Ok(Cargo {
        id: Some(id),
        ..cargo.clone()
    })
}

pub fn get_all(con: &Connection) -> Result<Vec<Cargo>, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!("../assets/queries/cargo/get_all_cargo.sql"))
        .unwrap();
    let mut cargo = Vec::new();
    let mut rows = pst.query([])?;
    while let Some(row) = rows.next()? {
        cargo.push(map_cargo(row)?);
    }
    Ok(cargo)
}

pub fn update_cargo(cargo: &Cargo, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!("../assets/queries/cargo/update_cargo.sql"))
        .unwrap();
    pst.execute(params![cargo.id, cargo.cargo_reference, cargo.updated_by])?;
    Ok(())
}

pub fn delete_cargo(id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!("../assets/queries/cargo/delete_cargo.sql"))
        .unwrap();
    pst.execute([id])?;
    Ok(())
}

pub fn assign_to_tank(
    tank_id: u32,
    cargo_id: u32,
    created_by: &Option<String>,
    con: &Connection,
) -> Result<u32, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/cargo/create_assignment.sql"
        ))
        .unwrap();
    let id = pst.insert(params![tank_id, cargo_id, created_by])? as u32;
    Ok(id)
}

pub fn get_assignments_by_tank(
    tank_id: u32,
    con: &Connection,
) -> Result<Vec<CargoAssignment>, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/cargo/get_assignments_by_tank.sql"
        ))
        .unwrap();
    let mut assignments = Vec::new();
    let mut rows = pst.query([tank_id])?;
    while let Some(row) = rows.next()? {
        assignments.push(map_assignment(row)?);
    }
    Ok(assignments)
}

/// returns the number of rows removed so callers can distinguish a missing id
pub fn delete_assignment(id: u32, con: &Connection) -> Result<usize, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/cargo/delete_assignment.sql"
        ))
        .unwrap();
    pst.execute([id])
}

fn map_cargo(row: &Row) -> Result<Cargo, rusqlite::Error> {
    Ok(Cargo {
        id: row.get(0)?,
        cargo_reference: row.get(1)?,
        created_by: row.get(2)?,
        updated_by: row.get(3)?,
    })
}

fn map_assignment(row: &Row) -> Result<CargoAssignment, rusqlite::Error> {
    Ok(CargoAssignment {
        id: row.get(0)?,
        tank_id: row.get(1)?,
        cargo_id: row.get(2)?,
        cargo_reference: row.get(3)?,
        created_by: row.get(4)?,
        created_at: row.get(5)?,
    })
}
