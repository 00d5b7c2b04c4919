use rusqlite::{params, Connection, Row};

use crate::model::repository::{Regulation, TankRegulation};

pub fn create_regulation(
    regulation: &Regulation,
    con: &Connection,
) -> Result<Regulation, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/regulation/create_regulation.sql"
        ))
        .unwrap();
    let id = pst.insert(params![regulation.regulation_name, regulation.created_by])? as u32;
    Ok(Regulation {
        id: Some(id),
        ..regulation.clone()
    })
}

pub fn get_by_id(id: u32, con: &Connection) -> Result<Regulation, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/regulation/get_regulation_by_id.sql"
        ))
        .unwrap();
    pst.query_row([id], map_regulation)
}

pub fn get_all(con: &Connection) -> Result<Vec<Regulation>, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/regulation/get_all_regulations.sql"
        ))
        .unwrap();
    let mut regulations = Vec::new();
    let mut rows = pst.query([])?;
    while let Some(row) = rows.next()? {
        regulations.push(map_regulation(row)?);
    }
    Ok(regulations)
}

pub fn update_regulation(
    regulation: &Regulation,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/regulation/update_regulation.sql"
        ))
        .unwrap();
    pst.execute(params![
        regulation.id,
        regulation.regulation_name,
        regulation.updated_by,
    ])?;
    Ok(())
}

pub fn delete_regulation(id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/regulation/delete_regulation.sql"
        ))
        .unwrap();
    pst.execute([id])?;
    Ok(())
}

pub fn link_to_tank(
    tank_id: u32,
    regulation_id: u32,
    initial_approval_no: &Option<String>,
    created_by: &Option<String>,
    con: &Connection,
) -> Result<u32, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/regulation/create_tank_regulation.sql"
        ))
        .unwrap();
    let id = pst.insert(params![tank_id, regulation_id, initial_approval_no, created_by])? as u32;
    Ok(id)
}

pub fn get_link_by_id(id: u32, con: &Connection) -> Result<TankRegulation, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/regulation/get_tank_regulation_by_id.sql"
        ))
        .unwrap();
    pst.query_row([id], map_tank_regulation)
}

pub fn get_links_by_tank(
    tank_id: u32,
    con: &Connection,
) -> Result<Vec<TankRegulation>, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/regulation/get_tank_regulations_by_tank.sql"
        ))
        .unwrap();
    let mut links = Vec::new();
    let mut rows = pst.query([tank_id])?;
    while let Some(row) = rows.next()? {
        links.push(map_tank_regulation(row)?);
    }
    Ok(links)
}

pub fn update_link(
    id: u32,
    regulation_id: u32,
    initial_approval_no: &Option<String>,
    updated_by: &Option<String>,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/regulation/update_tank_regulation.sql"
        ))
        .unwrap();
    pst.execute(params![id, regulation_id, initial_approval_no, updated_by])?;
    Ok(())
}

pub fn delete_link(id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/regulation/delete_tank_regulation.sql"
        ))
        .unwrap();
    pst.execute([id])?;
    Ok(())
}

fn map_regulation(row: &Row) -> Result<Regulation, rusqlite::Error> {
    Ok(Regulation {
        id: row.get(0)?,
        regulation_name: row.get(1)?,
        created_by: row.get(2)?,
        updated_by: row.get(3)?,
    })
}

fn map_tank_regulation(row: &Row) -> Result<TankRegulation, rusqlite::Error> {
    Ok(TankRegulation {
        id: row.get(0)?,
        tank_id: row.get(1)?,
        regulation_id: row.get(2)?,
        regulation_name: row.get(3)?,
        initial_approval_no: row.get(4)?,
    })
}
