use rusqlite::{params, Connection, Row};

use crate::model::repository::Certificate;

pub fn create_certificate(
    certificate: &Certificate,
    con: &Connection,
) -> Result<Certificate, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/certificate/create_certificate.sql"
        ))
        .unwrap();
    let id = pst.insert(params![
        certificate.tank_id,
        certificate.tank_number,
        certificate.certificate_number,
        certificate.year_of_manufacturing,
        certificate.insp_2_5y_date,
        certificate.next_insp_date,
        certificate.inspection_agency,
        certificate.certificate_file,
        certificate.created_by,
    ])? as u32;
    Ok(Certificate {
        id: Some(id),
        ..certificate.clone()
    })
}

pub fn get_by_id(id: u32, con: &Connection) -> Result<Certificate, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/certificate/get_certificate_by_id.sql"
        ))
        .unwrap();
    pst.query_row([id], map_certificate)
}

pub fn get_by_tank(tank_id: u32, con: &Connection) -> Result<Vec<Certificate>, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/certificate/get_certificates_by_tank.sql"
        ))
        .unwrap();
    let mut certificates = Vec::new();
    let mut rows = pst.query([tank_id])?;
    while let Some(row) = rows.next()? {
        certificates.push(map_certificate(row)?);
    }
    Ok(certificates)
}

pub fn update_certificate(
    certificate: &Certificate,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/certificate/update_certificate.sql"
        ))
        .unwrap();
    pst.execute(params![
        certificate.id,
        certificate.certificate_number,
        certificate.year_of_manufacturing,
        certificate.insp_2_5y_date,
        certificate.next_insp_date,
        certificate.inspection_agency,
        certificate.certificate_file,
        certificate.updated_by,
    ])?;
    Ok(())
}

pub fn delete_certificate(id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/certificate/delete_certificate.sql"
        ))
        .unwrap();
    pst.execute([id])?;
    Ok(())
}

/// stored file references for a tank's certificates, for cleanup on tank delete
pub fn get_paths_by_tank(tank_id: u32, con: &Connection) -> Result<Vec<String>, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/certificate/get_paths_by_tank.sql"
        ))
        .unwrap();
    let mut paths = Vec::new();
    let mut rows = pst.query([tank_id])?;
    while let Some(row) = rows.next()? {
        paths.push(row.get(0)?);
    }
    Ok(paths)
}

fn map_certificate(row: &Row) -> Result<Certificate, rusqlite::Error> {
    Ok(Certificate {
        id: row.get(0)?,
        tank_id: row.get(1)?,
        tank_number: row.get(2)?,
        certificate_number: row.get(3)?,
        year_of_manufacturing: row.get(4)?,
        insp_2_5y_date: row.get(5)?,
        next_insp_date: row.get(6)?,
        inspection_agency: row.get(7)?,
        certificate_file: row.get(8)?,
        created_by: row.get(9)?,
        updated_by: row.get(10)?,
    })
}
