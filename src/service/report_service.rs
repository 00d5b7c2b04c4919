use std::backtrace::Backtrace;
use std::fs;
use std::path::Path;

use chrono::Local;
use rocket::serde::json::serde_json;

use crate::model::error::report_errors::GenerateReportError;
use crate::model::file_categories::FileCategory;
use crate::model::response::cargo_responses::CargoAssignmentResponse;
use crate::model::response::certificate_responses::CertificateResponse;
use crate::model::response::drawing_responses::DrawingResponse;
use crate::model::response::image_responses::TankImageResponse;
use crate::model::response::inspection_responses::InspectionResponse;
use crate::model::response::regulation_responses::TankRegulationResponse;
use crate::model::response::report_responses::{
    GeneratedReport, ReportImageEntry, ResolvedFile, TankReport,
};
use crate::model::response::tank_responses::TankResponse;
use crate::model::response::valve_responses::ValveReportResponse;
use crate::repository;
use crate::repository::{
    cargo_repository, certificate_repository, drawing_repository, image_repository,
    inspection_repository, regulation_repository, tank_repository, valve_repository,
};
use crate::service::storage_service;

/// Composes the full dossier for one tank and writes it under `reports/` in
/// the upload root. The document is a fixed slot per tank, so regenerating
/// replaces the previous copy
pub fn generate_report(tank_id: u32) -> Result<GeneratedReport, GenerateReportError> {
    let con = repository::open_connection();
    let report = compose_report(tank_id, &con);
    con.close().unwrap();
    let report = report?;
    let report_path = write_report(&report)?;
    Ok(GeneratedReport {
        report_path,
        report,
    })
}

fn compose_report(tank_id: u32, con: &rusqlite::Connection) -> Result<TankReport, GenerateReportError> {
    let tank = match tank_repository::get_by_id(tank_id, con) {
        Ok(tank) => tank,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Err(GenerateReportError::TankNotFound),
        Err(e) => return Err(db_error("tank", e)),
    };
    let details = match tank_repository::get_details_by_tank(tank_id, con) {
        Ok(details) => Some(details),
        Err(rusqlite::Error::QueryReturnedNoRows) => None,
        Err(e) => return Err(db_error("tank details", e)),
    };
    let tank_number = tank.tank_number.clone();

    let inspections = inspection_repository::get_by_tank(tank_id, con)
        .map_err(|e| db_error("inspections", e))?;
    let certificates = certificate_repository::get_by_tank(tank_id, con)
        .map_err(|e| db_error("certificates", e))?;
    let drawings =
        drawing_repository::get_by_tank(tank_id, con).map_err(|e| db_error("drawings", e))?;
    let valve_reports =
        valve_repository::get_by_tank(tank_id, con).map_err(|e| db_error("valve reports", e))?;
    let regulations = regulation_repository::get_links_by_tank(tank_id, con)
        .map_err(|e| db_error("regulations", e))?;
    let cargo_assignments = cargo_repository::get_assignments_by_tank(tank_id, con)
        .map_err(|e| db_error("cargo assignments", e))?;
    let image_rows = image_repository::get_for_report(&tank_number, con)
        .map_err(|e| db_error("images", e))?;

    let certificate_files = certificates
        .iter()
        .filter_map(|c| c.certificate_file.as_deref())
        .map(|path| resolve_file(path, &tank_number))
        .collect();
    let drawing_files = drawings
        .iter()
        .map(|d| resolve_file(&d.file_path, &tank_number))
        .collect();
    let valve_report_files = valve_reports
        .iter()
        .filter_map(|v| v.report_file.as_deref())
        .map(|path| resolve_file(path, &tank_number))
        .collect();

    // one gallery slot per image category; the newest row wins and missing
    // categories get an explicit placeholder
    let images = FileCategory::image_categories()
        .iter()
        .map(|category| {
            let latest = image_rows
                .iter()
                .find(|row| row.image_type == category.slug());
            let file = latest.map(|row| resolve_file(&row.image_path, &tank_number));
            ReportImageEntry {
                image_type: category.slug().to_string(),
                image_label: category.label().to_string(),
                image: Some(
                    latest
                        .map(TankImageResponse::from)
                        .unwrap_or_else(|| TankImageResponse::empty(&tank_number, *category)),
                ),
                file,
            }
        })
        .collect();

    Ok(TankReport {
        generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        tank: TankResponse::from(&tank, details.as_ref()),
        inspections: inspections.iter().map(InspectionResponse::from).collect(),
        certificates: certificates.iter().map(CertificateResponse::from).collect(),
        certificate_files,
        drawings: drawings.iter().map(DrawingResponse::from).collect(),
        drawing_files,
        valve_reports: valve_reports.iter().map(ValveReportResponse::from).collect(),
        valve_report_files,
        regulations: regulations.iter().map(TankRegulationResponse::from).collect(),
        cargo_assignments: cargo_assignments
            .iter()
            .map(CargoAssignmentResponse::from)
            .collect(),
        images,
    })
}

fn resolve_file(stored_path: &str, owner_code: &str) -> ResolvedFile {
    let resolved = storage_service::resolve(Some(stored_path), owner_code);
    ResolvedFile {
        stored_path: stored_path.to_string(),
        resolved_path: resolved
            .as_ref()
            .map(|p| p.to_string_lossy().to_string()),
        found: resolved.is_some(),
    }
}

fn write_report(report: &TankReport) -> Result<String, GenerateReportError> {
    let root = storage_service::upload_root();
    let report_dir = Path::new(&root).join(storage_service::REPORT_DIR_NAME);
    if let Err(e) = fs::create_dir_all(&report_dir) {
        log::error!(
            "Failed to create report directory: {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(GenerateReportError::FileSystemError);
    }
    let file_name = format!("{}_report.json", report.tank.tank_number);
    let document = match serde_json::to_string_pretty(report) {
        Ok(document) => document,
        Err(e) => {
            log::error!(
                "Failed to serialize report: {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(GenerateReportError::FileSystemError);
        }
    };
    if let Err(e) = fs::write(report_dir.join(&file_name), document) {
        log::error!(
            "Failed to write report document: {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(GenerateReportError::FileSystemError);
    }
    Ok(format!("{}/{}", storage_service::REPORT_DIR_NAME, file_name))
}

fn db_error(what: &str, e: rusqlite::Error) -> GenerateReportError {
    log::error!(
        "Failed to read {what} for report: {e:?}\n{}",
        Backtrace::force_capture()
    );
    GenerateReportError::DbError
}

#[cfg(test)]
mod report_service_tests {
    use std::io::Cursor;

    use super::*;
    use crate::model::request::tank_requests::CreateTankRequest;
    use crate::service::{storage_service, tank_service};
    use crate::test::{cleanup, refresh_db};

    fn seed_tank(tank_number: &str) -> u32 {
        tank_service::create_tank(&CreateTankRequest {
            tank_number: tank_number.to_string(),
            status: Some("active".to_string()),
            created_by: None,
            details: None,
        })
        .unwrap()
        .id
    }

    #[test]
    fn report_for_missing_tank_is_not_found() {
        refresh_db();
        assert_eq!(
            Err(GenerateReportError::TankNotFound),
            generate_report(999)
        );
        cleanup();
    }

    #[test]
    fn report_lists_every_image_category_with_placeholders() {
        refresh_db();
        let id = seed_tank("TANK-R1");
        let report = generate_report(id).unwrap().report;
        assert_eq!(
            FileCategory::image_categories().len(),
            report.images.len()
        );
        assert!(report.images.iter().all(|entry| {
            entry.image.as_ref().is_some_and(|img| !img.uploaded) && entry.file.is_none()
        }));
        cleanup();
    }

    #[test]
    fn report_document_lands_in_a_fixed_slot() {
        refresh_db();
        let id = seed_tank("TANK-R2");
        let first = generate_report(id).unwrap();
        let second = generate_report(id).unwrap();
        assert_eq!("reports/TANK-R2_report.json", first.report_path);
        assert_eq!(first.report_path, second.report_path);
        let root = storage_service::upload_root();
        assert!(Path::new(&root).join(&first.report_path).is_file());
        cleanup();
    }

    #[test]
    fn report_resolves_stored_certificate_files() {
        refresh_db();
        let id = seed_tank("TANK-R3");
        let stored = storage_service::store(
            &mut Cursor::new(b"cert".to_vec()),
            "TANK-R3",
            FileCategory::Certificates,
            Some("application/pdf"),
            Some("cert.pdf"),
            1024,
        )
        .unwrap();
        let con = crate::repository::open_connection();
        crate::repository::certificate_repository::create_certificate(
            &crate::model::repository::Certificate {
                id: None,
                tank_id: id,
                tank_number: "TANK-R3".to_string(),
                certificate_number: "CERT-1".to_string(),
                year_of_manufacturing: None,
                insp_2_5y_date: None,
                next_insp_date: None,
                inspection_agency: None,
                certificate_file: Some(stored.relative_path()),
                created_by: None,
                updated_by: None,
            },
            &con,
        )
        .unwrap();
        con.close().unwrap();
        let report = generate_report(id).unwrap().report;
        assert_eq!(1, report.certificate_files.len());
        assert!(report.certificate_files[0].found);
        assert_eq!(stored.relative_path(), report.certificate_files[0].stored_path);
        cleanup();
    }
}
