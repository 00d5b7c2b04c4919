use rusqlite::{params, Connection, Row};

use crate::model::repository::ValveReport;

pub fn create_report(report: &ValveReport, con: &Connection) -> Result<ValveReport, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/valve/create_valve_report.sql"
        ))
        .unwrap();
    let id = pst.insert(params![
        report.tank_id,
        report.report_file,
        report.test_date,
        report.inspected_by,
        report.remarks,
        report.created_by,
    ])? as u32;
    Ok(ValveReport {
        id: Some(id),
        ..report.clone()
    })
}

pub fn get_by_id(id: u32, con: &Connection) -> Result<ValveReport, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/valve/get_valve_report_by_id.sql"
        ))
        .unwrap();
    pst.query_row([id], map_report)
}

pub fn get_by_tank(tank_id: u32, con: &Connection) -> Result<Vec<ValveReport>, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/valve/get_valve_reports_by_tank.sql"
        ))
        .unwrap();
    let mut reports = Vec::new();
    let mut rows = pst.query([tank_id])?;
    while let Some(row) = rows.next()? {
        reports.push(map_report(row)?);
    }
    Ok(reports)
}

pub fn update_report(report: &ValveReport, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/valve/update_valve_report.sql"
        ))
        .unwrap();
    pst.execute(params![
        report.id,
        report.report_file,
        report.test_date,
        report.inspected_by,
        report.remarks,
        report.updated_by,
    ])?;
    Ok(())
}

pub fn delete_report(id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/valve/delete_valve_report.sql"
        ))
        .unwrap();
    pst.execute([id])?;
    Ok(())
}

pub fn get_paths_by_tank(tank_id: u32, con: &Connection) -> Result<Vec<String>, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/valve/get_paths_by_tank.sql"
        ))
        .unwrap();
    let mut paths = Vec::new();
    let mut rows = pst.query([tank_id])?;
    while let Some(row) = rows.next()? {
        paths.push(row.get(0)?);
    }
    Ok(paths)
}

fn map_report(row: &Row) -> Result<ValveReport, rusqlite::Error> {
    Ok(ValveReport {
        id: row.get(0)?,
        tank_id: row.get(1)?,
        report_file: row.get(2)?,
        test_date: row.get(3)?,
        inspected_by: row.get(4)?,
        remarks: row.get(5)?,
        created_by: row.get(6)?,
        updated_by: row.get(7)?,
    })
}
