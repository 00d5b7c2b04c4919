use rusqlite::{params, Connection, Row};

use crate::model::repository::Inspection;

pub fn create_inspection(
    inspection: &Inspection,
    con: &Connection,
) -> Result<Inspection, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/inspection/create_inspection.sql"
        ))
        .unwrap();
    let id = pst.insert(params![
        inspection.tank_id,
        inspection.insp_2_5y_date,
        inspection.next_insp_date,
        inspection.tank_certificate,
        inspection.created_by,
    ])? as u32;
    Ok(Inspection {
        id: Some(id),
        ..inspection.clone()
    })
}

pub fn get_by_id(id: u32, con: &Connection) -> Result<Inspection, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/inspection/get_inspection_by_id.sql"
        ))
        .unwrap();
    pst.query_row([id], map_inspection)
}

pub fn get_by_tank(tank_id: u32, con: &Connection) -> Result<Vec<Inspection>, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/inspection/get_inspections_by_tank.sql"
        ))
        .unwrap();
    let inspections = collect(pst.query([tank_id])?);
    inspections
}

pub fn get_all(con: &Connection) -> Result<Vec<Inspection>, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/inspection/get_all_inspections.sql"
        ))
        .unwrap();
    let inspections = collect(pst.query([])?);
    inspections
}

pub fn update_inspection(
    inspection: &Inspection,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/inspection/update_inspection.sql"
        ))
        .unwrap();
    pst.execute(params![
        inspection.id,
        inspection.insp_2_5y_date,
        inspection.next_insp_date,
        inspection.tank_certificate,
        inspection.updated_by,
    ])?;
    Ok(())
}

pub fn delete_inspection(id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/inspection/delete_inspection.sql"
        ))
        .unwrap();
    pst.execute([id])?;
    Ok(())
}

fn collect(mut rows: rusqlite::Rows) -> Result<Vec<Inspection>, rusqlite::Error> {
    let mut inspections = Vec::new();
    while let Some(row) = rows.next()? {
        inspections.push(map_inspection(row)?);
    }
    Ok(inspections)
}

fn map_inspection(row: &Row) -> Result<Inspection, rusqlite::Error> {
    Ok(Inspection {
        id: row.get(0)?,
        tank_id: row.get(1)?,
        insp_2_5y_date: row.get(2)?,
        next_insp_date: row.get(3)?,
        tank_certificate: row.get(4)?,
        created_by: row.get(5)?,
        updated_by: row.get(6)?,
    })
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::*;
    use crate::model::repository::Tank;
    use crate::repository::{open_connection, tank_repository};
    use crate::test::{cleanup, refresh_db};

    fn seed_tank(con: &Connection) -> u32 {
        tank_repository::create_tank(
            &Tank {
                id: None,
                tank_number: "TANK-1".to_string(),
                status: None,
                created_by: None,
                updated_by: None,
            },
            con,
        )
        .unwrap()
        .id
        .unwrap()
    }

    fn seed_inspection(tank_id: u32, certificate: &str, con: &Connection) {
        create_inspection(
            &Inspection {
                id: None,
                tank_id,
                insp_2_5y_date: Some("2026-01-01".to_string()),
                next_insp_date: Some("2028-07-01".to_string()),
                tank_certificate: Some(certificate.to_string()),
                created_by: None,
                updated_by: None,
            },
            con,
        )
        .unwrap();
    }

    #[test]
    fn get_by_tank_returns_only_that_tanks_rows() {
        refresh_db();
        let con: Connection = open_connection();
        let tank_id = seed_tank(&con);
        seed_inspection(tank_id, "CERT-A", &con);
        seed_inspection(tank_id, "CERT-B", &con);
        let for_tank = get_by_tank(tank_id, &con).unwrap();
        let for_missing = get_by_tank(tank_id + 1, &con).unwrap();
        con.close().unwrap();
        assert_eq!(2, for_tank.len());
        assert!(for_missing.is_empty());
        cleanup();
    }

    #[test]
    fn get_all_lists_every_inspection() {
        refresh_db();
        let con: Connection = open_connection();
        let tank_id = seed_tank(&con);
        seed_inspection(tank_id, "CERT-A", &con);
        let all = get_all(&con).unwrap();
        con.close().unwrap();
        assert_eq!(1, all.len());
        assert_eq!(Some("CERT-A".to_string()), all[0].tank_certificate);
        cleanup();
    }
}
