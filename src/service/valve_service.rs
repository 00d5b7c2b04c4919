use std::backtrace::Backtrace;

use crate::config::TANK_SERVER_CONFIG;
use crate::model::error::valve_errors::{
    CreateValveReportError, DeleteValveReportError, GetValveReportsError, UpdateValveReportError,
};
use crate::model::file_categories::FileCategory;
use crate::model::repository::ValveReport;
use crate::model::request::valve_requests::{ValveReportUpdateForm, ValveReportUploadForm};
use crate::model::response::valve_responses::ValveReportResponse;
use crate::repository;
use crate::repository::{tank_repository, valve_repository};
use crate::service::storage_service;
use crate::service::storage_service::StagedUpload;

pub fn create_report(
    form: &ValveReportUploadForm<'_>,
    staged: Option<&StagedUpload>,
) -> Result<ValveReportResponse, CreateValveReportError> {
    let con = repository::open_connection();
    let tank = match tank_repository::get_by_id(form.tank_id, &con) {
        Ok(t) => t,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(CreateValveReportError::TankNotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to look up tank: {e:?}\n{}", Backtrace::force_capture());
            return Err(CreateValveReportError::DbError);
        }
    };
    let report_file = match staged {
        Some(staged) => match store_report_file(&tank.tank_number, staged) {
            Ok(path) => Some(path),
            Err(e) => {
                con.close().unwrap();
                return Err(CreateValveReportError::Storage(e));
            }
        },
        None => None,
    };
    let created = valve_repository::create_report(
        &ValveReport {
            id: None,
            tank_id: form.tank_id,
            report_file: report_file.clone(),
            test_date: form.test_date.clone(),
            inspected_by: form.inspected_by.clone(),
            remarks: form.remarks.clone(),
            created_by: form.created_by.clone(),
            updated_by: None,
        },
        &con,
    );
    match created {
        Ok(report) => {
            con.close().unwrap();
            Ok(ValveReportResponse::from(&report))
        }
        Err(e) => {
            if let Some(path) = &report_file {
                remove_if_unreferenced(path, form.tank_id, &con);
            }
            con.close().unwrap();
            log::error!(
                "Failed to create valve report: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(CreateValveReportError::DbError)
        }
    }
}

pub fn get_report(id: u32) -> Result<ValveReportResponse, UpdateValveReportError> {
    let con = repository::open_connection();
    let report = valve_repository::get_by_id(id, &con);
    con.close().unwrap();
    match report {
        Ok(r) => Ok(ValveReportResponse::from(&r)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(UpdateValveReportError::NotFound),
        Err(e) => {
            log::error!(
                "Failed to get valve report: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(UpdateValveReportError::DbError)
        }
    }
}

pub fn get_reports_for_tank(
    tank_id: u32,
) -> Result<Vec<ValveReportResponse>, GetValveReportsError> {
    let con = repository::open_connection();
    let reports = valve_repository::get_by_tank(tank_id, &con);
    con.close().unwrap();
    match reports {
        Ok(reports) => Ok(reports.iter().map(ValveReportResponse::from).collect()),
        Err(e) => {
            log::error!(
                "Failed to list valve reports: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetValveReportsError::DbError)
        }
    }
}

pub fn update_report(
    id: u32,
    form: &ValveReportUpdateForm<'_>,
    staged: Option<&StagedUpload>,
) -> Result<ValveReportResponse, UpdateValveReportError> {
    let con = repository::open_connection();
    let existing = match valve_repository::get_by_id(id, &con) {
        Ok(r) => r,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(UpdateValveReportError::NotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!(
                "Failed to get valve report: {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(UpdateValveReportError::DbError);
        }
    };
    let tank_number = match tank_repository::get_by_id(existing.tank_id, &con) {
        Ok(t) => t.tank_number,
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to look up tank: {e:?}\n{}", Backtrace::force_capture());
            return Err(UpdateValveReportError::DbError);
        }
    };
    let previous_file = existing.report_file.clone();
    let report_file = match staged {
        Some(staged) => match store_report_file(&tank_number, staged) {
            Ok(path) => Some(path),
            Err(e) => {
                con.close().unwrap();
                return Err(UpdateValveReportError::Storage(e));
            }
        },
        None => existing.report_file.clone(),
    };
    let updated = ValveReport {
        report_file,
        test_date: form.test_date.clone(),
        inspected_by: form.inspected_by.clone(),
        remarks: form.remarks.clone(),
        updated_by: form.updated_by.clone(),
        ..existing
    };
    let update_res = valve_repository::update_report(&updated, &con);
    match update_res {
        Ok(()) => {
            // a replacement with a new extension lands in a new slot; drop
            // the superseded file once nothing references it
            if let Some(old) = &previous_file {
                if Some(old) != updated.report_file.as_ref() {
                    remove_if_unreferenced(old, updated.tank_id, &con);
                }
            }
            con.close().unwrap();
            Ok(ValveReportResponse::from(&updated))
        }
        Err(e) => {
            con.close().unwrap();
            log::error!(
                "Failed to update valve report: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(UpdateValveReportError::DbError)
        }
    }
}

pub fn delete_report(id: u32) -> Result<(), DeleteValveReportError> {
    let con = repository::open_connection();
    let existing = match valve_repository::get_by_id(id, &con) {
        Ok(r) => r,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(DeleteValveReportError::NotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!(
                "Failed to get valve report: {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(DeleteValveReportError::DbError);
        }
    };
    let delete_res = valve_repository::delete_report(id, &con);
    if let Err(e) = delete_res {
        con.close().unwrap();
        log::error!(
            "Failed to delete valve report: {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(DeleteValveReportError::DbError);
    }
    if let Some(path) = &existing.report_file {
        remove_if_unreferenced(path, existing.tank_id, &con);
    }
    con.close().unwrap();
    Ok(())
}

fn store_report_file(
    tank_number: &str,
    staged: &StagedUpload,
) -> Result<String, crate::model::error::storage_errors::StoreFileError> {
    let mut input = staged.open()?;
    let stored = storage_service::store(
        &mut input,
        tank_number,
        FileCategory::ValveReports,
        staged.content_type.as_deref(),
        staged.original_name.as_deref(),
        TANK_SERVER_CONFIG.upload.max_size_bytes,
    )?;
    Ok(stored.relative_path())
}

/// valve reports share a fixed file slot per tank; only remove the file when
/// no remaining row points at it
fn remove_if_unreferenced(path: &str, tank_id: u32, con: &rusqlite::Connection) {
    match valve_repository::get_paths_by_tank(tank_id, con) {
        Ok(remaining) if remaining.iter().any(|p| p == path) => { /*still referenced*/ }
        Ok(_) => {
            storage_service::remove_if_exists(path);
        }
        Err(e) => {
            log::warn!("Failed to check remaining valve report file references: {e:?}");
        }
    }
}
