use rusqlite::{params, Connection, Row};

use crate::model::repository::Drawing;

pub fn create_drawing(drawing: &Drawing, con: &Connection) -> Result<Drawing, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/drawing/create_drawing.sql"
        ))
        .unwrap();
    let id = pst.insert(params![
        drawing.tank_id,
        drawing.drawing_type,
        drawing.description,
        drawing.file_path,
        drawing.original_filename,
        drawing.created_by,
    ])? as u32;
    Ok(Drawing {
        id: Some(id),
        ..drawing.clone()
    })
}

pub fn get_by_id(id: u32, con: &Connection) -> Result<Drawing, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/drawing/get_drawing_by_id.sql"
        ))
        .unwrap();
    pst.query_row([id], map_drawing)
}

pub fn get_by_tank(tank_id: u32, con: &Connection) -> Result<Vec<Drawing>, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/drawing/get_drawings_by_tank.sql"
        ))
        .unwrap();
    let mut drawings = Vec::new();
    let mut rows = pst.query([tank_id])?;
    while let Some(row) = rows.next()? {
        drawings.push(map_drawing(row)?);
    }
    Ok(drawings)
}

pub fn delete_drawing(id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/drawing/delete_drawing.sql"
        ))
        .unwrap();
    pst.execute([id])?;
    Ok(())
}

pub fn get_paths_by_tank(tank_id: u32, con: &Connection) -> Result<Vec<String>, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/drawing/get_paths_by_tank.sql"
        ))
        .unwrap();
    let mut paths = Vec::new();
    let mut rows = pst.query([tank_id])?;
    while let Some(row) = rows.next()? {
        paths.push(row.get(0)?);
    }
    Ok(paths)
}

fn map_drawing(row: &Row) -> Result<Drawing, rusqlite::Error> {
    Ok(Drawing {
        id: row.get(0)?,
        tank_id: row.get(1)?,
        drawing_type: row.get(2)?,
        description: row.get(3)?,
        file_path: row.get(4)?,
        original_filename: row.get(5)?,
        created_by: row.get(6)?,
        created_at: row.get(7)?,
    })
}
