use rusqlite::{params, Connection, Row};

use crate::model::repository::{Tank, TankDetails};

pub fn create_tank(tank: &Tank, con: &Connection) -> Result<Tank, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!("../assets/queries/tank/create_tank.sql"))
        .unwrap();
    let id = pst.insert(params![tank.tank_number, tank.status, tank.created_by])? as u32;
    Ok(Tank {
        id: Some(id),
        tank_number: tank.tank_number.clone(),
        status: tank.status.clone(),
        created_by: tank.created_by.clone(),
        updated_by: None,
    })
}

pub fn get_by_id(id: u32, con: &Connection) -> Result<Tank, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!("../assets/queries/tank/get_tank_by_id.sql"))
        .unwrap();
    pst.query_row([id], map_tank)
}

pub fn get_by_number(tank_number: &str, con: &Connection) -> Result<Tank, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/tank/get_tank_by_number.sql"
        ))
        .unwrap();
    pst.query_row([tank_number], map_tank)
}

pub fn get_all(con: &Connection) -> Result<Vec<Tank>, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!("../assets/queries/tank/get_all_tanks.sql"))
        .unwrap();
    let mut tanks = Vec::new();
    let mut rows = pst.query([])?;
    while let Some(row) = rows.next()? {
        tanks.push(map_tank(row)?);
    }
    Ok(tanks)
}

pub fn update_header(
    id: u32,
    status: &Option<String>,
    updated_by: &Option<String>,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/tank/update_tank_header.sql"
        ))
        .unwrap();
    pst.execute(params![id, status, updated_by])?;
    Ok(())
}

/// renames the header row only; denormalized copies are handled by
/// [rename_denormalized_copies]
pub fn rename_tank(id: u32, new_number: &str, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!("../assets/queries/tank/rename_tank.sql"))
        .unwrap();
    pst.execute(params![id, new_number])?;
    Ok(())
}

/// pushes a new tank number into the tables that keep their own copy of it.
/// tank_images follows via its `on update cascade` foreign key
pub fn rename_denormalized_copies(
    id: u32,
    new_number: &str,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut details_pst = con
        .prepare(include_str!(
            "../assets/queries/details/update_details_tank_number.sql"
        ))
        .unwrap();
    details_pst.execute(params![id, new_number])?;
    let mut cert_pst = con
        .prepare(include_str!(
            "../assets/queries/certificate/update_certificate_tank_number.sql"
        ))
        .unwrap();
    cert_pst.execute(params![id, new_number])?;
    Ok(())
}

pub fn delete_tank(id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!("../assets/queries/tank/delete_tank.sql"))
        .unwrap();
    pst.execute([id])?;
    Ok(())
}

/// every stored file reference in the database, across all file-bearing tables.
/// Used by the orphan sweep to know what must not be removed
pub fn get_all_stored_paths(con: &Connection) -> Result<Vec<String>, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/tank/get_all_stored_paths.sql"
        ))
        .unwrap();
    let mut paths = Vec::new();
    let mut rows = pst.query([])?;
    while let Some(row) = rows.next()? {
        paths.push(row.get(0)?);
    }
    Ok(paths)
}

pub fn create_details(details: &TankDetails, con: &Connection) -> Result<u32, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/details/create_details.sql"
        ))
        .unwrap();
    let id = pst.insert(params![
        details.tank_id,
        details.tank_number,
        details.mfgr,
        details.date_mfg,
        details.pv_code,
        details.un_iso_code,
        details.capacity_l,
        details.mawp,
        details.design_temperature,
        details.tare_weight_kg,
        details.mgw_kg,
        details.size,
        details.pump_type,
        details.vessel_material,
        details.color_body_frame,
        details.remark,
        details.lease,
        details.created_by,
    ])? as u32;
    Ok(id)
}

pub fn get_details_by_tank(
    tank_id: u32,
    con: &Connection,
) -> Result<TankDetails, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/details/get_details_by_tank.sql"
        ))
        .unwrap();
    pst.query_row([tank_id], map_details)
}

pub fn update_details(details: &TankDetails, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/details/update_details.sql"
        ))
        .unwrap();
    pst.execute(params![
        details.tank_id,
        details.mfgr,
        details.date_mfg,
        details.pv_code,
        details.un_iso_code,
        details.capacity_l,
        details.mawp,
        details.design_temperature,
        details.tare_weight_kg,
        details.mgw_kg,
        details.size,
        details.pump_type,
        details.vessel_material,
        details.color_body_frame,
        details.remark,
        details.lease,
        details.updated_by,
    ])?;
    Ok(())
}

fn map_tank(row: &Row) -> Result<Tank, rusqlite::Error> {
    Ok(Tank {
        id: row.get(0)?,
        tank_number: row.get(1)?,
        status: row.get(2)?,
        created_by: row.get(3)?,
        updated_by: row.get(4)?,
    })
}

fn map_details(row: &Row) -> Result<TankDetails, rusqlite::Error> {
    Ok(TankDetails {
        id: row.get(0)?,
        tank_id: row.get(1)?,
        tank_number: row.get(2)?,
        mfgr: row.get(3)?,
        date_mfg: row.get(4)?,
        pv_code: row.get(5)?,
        un_iso_code: row.get(6)?,
        capacity_l: row.get(7)?,
        mawp: row.get(8)?,
        design_temperature: row.get(9)?,
        tare_weight_kg: row.get(10)?,
        mgw_kg: row.get(11)?,
        size: row.get(12)?,
        pump_type: row.get(13)?,
        vessel_material: row.get(14)?,
        color_body_frame: row.get(15)?,
        remark: row.get(16)?,
        lease: row.get(17)?,
        created_by: row.get(18)?,
        updated_by: row.get(19)?,
    })
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::*;
    use crate::repository::open_connection;
    use crate::test::{cleanup, refresh_db};

    #[test]
    fn rename_propagates_to_detail_and_certificate_rows() {
        refresh_db();
        let con: Connection = open_connection();
        let tank = create_tank(
            &Tank {
                id: None,
                tank_number: "TANK-1".to_string(),
                status: Some("active".to_string()),
                created_by: Some("tester".to_string()),
                updated_by: None,
            },
            &con,
        )
        .unwrap();
        let tank_id = tank.id.unwrap();
        create_details(
            &TankDetails {
                tank_id,
                tank_number: Some("TANK-1".to_string()),
                ..TankDetails::default()
            },
            &con,
        )
        .unwrap();
        rename_tank(tank_id, "TANK-2", &con).unwrap();
        rename_denormalized_copies(tank_id, "TANK-2", &con).unwrap();
        let details = get_details_by_tank(tank_id, &con).unwrap();
        con.close().unwrap();
        assert_eq!(Some("TANK-2".to_string()), details.tank_number);
        cleanup();
    }

    #[test]
    fn get_by_number_returns_no_rows_for_missing_tank() {
        refresh_db();
        let con: Connection = open_connection();
        let res = get_by_number("TANK-404", &con);
        con.close().unwrap();
        assert_eq!(Err(rusqlite::Error::QueryReturnedNoRows), res);
        cleanup();
    }
}
