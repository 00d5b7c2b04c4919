use std::backtrace::Backtrace;

use crate::config::TANK_SERVER_CONFIG;
use crate::model::error::certificate_errors::{
    CreateCertificateError, DeleteCertificateError, GetCertificateError, UpdateCertificateError,
};
use crate::model::file_categories::FileCategory;
use crate::model::repository::Certificate;
use crate::model::request::certificate_requests::{CertificateUpdateForm, CertificateUploadForm};
use crate::model::response::certificate_responses::CertificateResponse;
use crate::repository;
use crate::repository::{certificate_repository, tank_repository};
use crate::service::storage_service;
use crate::service::storage_service::StagedUpload;

/// Creates a certificate row, storing its file first when one was attached.
/// Certificates share a fixed file slot per tank, so the stored path may
/// already be referenced by a sibling row; cleanup on failure checks for that
pub fn create_certificate(
    form: &CertificateUploadForm<'_>,
    staged: Option<&StagedUpload>,
) -> Result<CertificateResponse, CreateCertificateError> {
    let certificate_number = form.certificate_number.trim();
    if certificate_number.is_empty() {
        return Err(CreateCertificateError::MissingCertificateNumber);
    }
    let con = repository::open_connection();
    let tank = match tank_repository::get_by_id(form.tank_id, &con) {
        Ok(t) => t,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(CreateCertificateError::TankNotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to look up tank: {e:?}\n{}", Backtrace::force_capture());
            return Err(CreateCertificateError::DbError);
        }
    };
    let stored_path = match staged {
        Some(staged) => match store_certificate_file(&tank.tank_number, staged) {
            Ok(path) => Some(path),
            Err(e) => {
                con.close().unwrap();
                return Err(CreateCertificateError::Storage(e));
            }
        },
        None => None,
    };
    let created = certificate_repository::create_certificate(
        &Certificate {
            id: None,
            tank_id: form.tank_id,
            tank_number: tank.tank_number.clone(),
            certificate_number: certificate_number.to_string(),
            year_of_manufacturing: form.year_of_manufacturing.clone(),
            insp_2_5y_date: form.insp_2_5y_date.clone(),
            next_insp_date: form.next_insp_date.clone(),
            inspection_agency: form.inspection_agency.clone(),
            certificate_file: stored_path.clone(),
            created_by: form.created_by.clone(),
            updated_by: None,
        },
        &con,
    );
    match created {
        Ok(certificate) => {
            con.close().unwrap();
            Ok(CertificateResponse::from(&certificate))
        }
        Err(e) => {
            if let Some(path) = &stored_path {
                remove_if_unreferenced(path, form.tank_id, &con);
            }
            con.close().unwrap();
            if repository::is_constraint_violation(&e) {
                Err(CreateCertificateError::NumberAlreadyExists)
            } else {
                log::error!(
                    "Failed to create certificate: {e:?}\n{}",
                    Backtrace::force_capture()
                );
                Err(CreateCertificateError::DbError)
            }
        }
    }
}

pub fn get_certificate(id: u32) -> Result<CertificateResponse, GetCertificateError> {
    let con = repository::open_connection();
    let certificate = certificate_repository::get_by_id(id, &con);
    con.close().unwrap();
    match certificate {
        Ok(c) => Ok(CertificateResponse::from(&c)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(GetCertificateError::NotFound),
        Err(e) => {
            log::error!(
                "Failed to get certificate: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetCertificateError::DbError)
        }
    }
}

pub fn get_certificates_for_tank(
    tank_id: u32,
) -> Result<Vec<CertificateResponse>, GetCertificateError> {
    let con = repository::open_connection();
    let certificates = certificate_repository::get_by_tank(tank_id, &con);
    con.close().unwrap();
    match certificates {
        Ok(certificates) => Ok(certificates.iter().map(CertificateResponse::from).collect()),
        Err(e) => {
            log::error!(
                "Failed to list certificates: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetCertificateError::DbError)
        }
    }
}

pub fn update_certificate(
    id: u32,
    form: &CertificateUpdateForm<'_>,
    staged: Option<&StagedUpload>,
) -> Result<CertificateResponse, UpdateCertificateError> {
    let con = repository::open_connection();
    let existing = match certificate_repository::get_by_id(id, &con) {
        Ok(c) => c,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(UpdateCertificateError::NotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!(
                "Failed to get certificate: {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(UpdateCertificateError::DbError);
        }
    };
    // a replacement upload lands on the same fixed slot and overwrites in
    // place, unless the new extension differs and a fresh slot is minted
    let previous_file = existing.certificate_file.clone();
    let certificate_file = match staged {
        Some(staged) => match store_certificate_file(&existing.tank_number, staged) {
            Ok(path) => Some(path),
            Err(e) => {
                con.close().unwrap();
                return Err(UpdateCertificateError::Storage(e));
            }
        },
        None => existing.certificate_file.clone(),
    };
    let updated = Certificate {
        certificate_number: form.certificate_number.trim().to_string(),
        year_of_manufacturing: form.year_of_manufacturing.clone(),
        insp_2_5y_date: form.insp_2_5y_date.clone(),
        next_insp_date: form.next_insp_date.clone(),
        inspection_agency: form.inspection_agency.clone(),
        certificate_file,
        updated_by: form.updated_by.clone(),
        ..existing
    };
    let update_res = certificate_repository::update_certificate(&updated, &con);
    match update_res {
        Ok(()) => {
            if let Some(old) = &previous_file {
                if Some(old) != updated.certificate_file.as_ref() {
                    remove_if_unreferenced(old, updated.tank_id, &con);
                }
            }
            con.close().unwrap();
            Ok(CertificateResponse::from(&updated))
        }
        Err(e) if repository::is_constraint_violation(&e) => {
            con.close().unwrap();
            Err(UpdateCertificateError::NumberAlreadyExists)
        }
        Err(e) => {
            con.close().unwrap();
            log::error!(
                "Failed to update certificate: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(UpdateCertificateError::DbError)
        }
    }
}

pub fn delete_certificate(id: u32) -> Result<(), DeleteCertificateError> {
    let con = repository::open_connection();
    let existing = match certificate_repository::get_by_id(id, &con) {
        Ok(c) => c,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(DeleteCertificateError::NotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!(
                "Failed to get certificate: {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(DeleteCertificateError::DbError);
        }
    };
    let delete_res = certificate_repository::delete_certificate(id, &con);
    if let Err(e) = delete_res {
        con.close().unwrap();
        log::error!(
            "Failed to delete certificate: {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(DeleteCertificateError::DbError);
    }
    if let Some(path) = &existing.certificate_file {
        remove_if_unreferenced(path, existing.tank_id, &con);
    }
    con.close().unwrap();
    Ok(())
}

fn store_certificate_file(
    tank_number: &str,
    staged: &StagedUpload,
) -> Result<String, crate::model::error::storage_errors::StoreFileError> {
    let mut input = staged.open()?;
    let stored = storage_service::store(
        &mut input,
        tank_number,
        FileCategory::Certificates,
        staged.content_type.as_deref(),
        staged.original_name.as_deref(),
        TANK_SERVER_CONFIG.upload.max_size_bytes,
    )?;
    Ok(stored.relative_path())
}

/// other certificate rows for the same tank may still point at the shared
/// fixed-slot file; only remove it when nothing does
fn remove_if_unreferenced(path: &str, tank_id: u32, con: &rusqlite::Connection) {
    match certificate_repository::get_paths_by_tank(tank_id, con) {
        Ok(remaining) if remaining.iter().any(|p| p == path) => { /*still referenced*/ }
        Ok(_) => {
            storage_service::remove_if_exists(path);
        }
        Err(e) => {
            log::warn!("Failed to check remaining certificate file references: {e:?}");
        }
    }
}

#[cfg(test)]
mod certificate_service_tests {
    use std::path::Path;

    use super::*;
    use crate::model::request::tank_requests::CreateTankRequest;
    use crate::service::tank_service;
    use crate::test::{cleanup, refresh_db};

    fn seed_tank(number: &str) -> u32 {
        tank_service::create_tank(&CreateTankRequest {
            tank_number: number.to_string(),
            status: None,
            created_by: None,
            details: None,
        })
        .unwrap()
        .id
    }

    fn upload_form(tank_id: u32, number: &str) -> CertificateUploadForm<'static> {
        CertificateUploadForm {
            tank_id,
            certificate_number: number.to_string(),
            year_of_manufacturing: None,
            insp_2_5y_date: None,
            next_insp_date: None,
            inspection_agency: None,
            created_by: None,
            file: None,
        }
    }

    #[test]
    fn blank_certificate_number_is_rejected() {
        refresh_db();
        let tank_id = seed_tank("TANK-CS1");
        let res = create_certificate(&upload_form(tank_id, "   "), None);
        assert_eq!(
            Err(CreateCertificateError::MissingCertificateNumber),
            res.map(|c| c.certificate_number)
        );
        cleanup();
    }

    #[test]
    fn shared_slot_survives_until_the_last_reference_is_deleted() {
        refresh_db();
        let tank_id = seed_tank("TANK-CS2");
        let staged = storage_service::stage_bytes(b"pdf bytes", "application/pdf", "a.pdf");
        let first = create_certificate(&upload_form(tank_id, "C-1"), Some(&staged)).unwrap();
        let staged = storage_service::stage_bytes(b"pdf bytes", "application/pdf", "b.pdf");
        let second = create_certificate(&upload_form(tank_id, "C-2"), Some(&staged)).unwrap();
        let stored = "certificates/TANK-CS2/TANK-CS2_certificates.pdf";
        assert_eq!(Some(stored.to_string()), first.certificate_file);
        assert_eq!(Some(stored.to_string()), second.certificate_file);
        let on_disk = Path::new(&storage_service::upload_root()).join(stored);
        delete_certificate(first.id).unwrap();
        assert!(on_disk.is_file());
        delete_certificate(second.id).unwrap();
        assert!(!on_disk.exists());
        cleanup();
    }

    #[test]
    fn replacement_with_new_extension_drops_the_superseded_file() {
        refresh_db();
        let tank_id = seed_tank("TANK-CS4");
        let staged = storage_service::stage_bytes(b"pdf bytes", "application/pdf", "cert.pdf");
        let created = create_certificate(&upload_form(tank_id, "C-1"), Some(&staged)).unwrap();
        let root = storage_service::upload_root();
        let old = Path::new(&root).join("certificates/TANK-CS4/TANK-CS4_certificates.pdf");
        assert!(old.is_file());
        let staged = storage_service::stage_bytes(b"jpg bytes", "image/jpeg", "cert.jpg");
        let update = CertificateUpdateForm {
            certificate_number: "C-1".to_string(),
            year_of_manufacturing: None,
            insp_2_5y_date: None,
            next_insp_date: None,
            inspection_agency: None,
            updated_by: None,
            file: None,
        };
        let updated = update_certificate(created.id, &update, Some(&staged)).unwrap();
        assert_eq!(
            Some("certificates/TANK-CS4/TANK-CS4_certificates.jpg".to_string()),
            updated.certificate_file
        );
        assert!(!old.exists());
        assert!(Path::new(&root)
            .join("certificates/TANK-CS4/TANK-CS4_certificates.jpg")
            .is_file());
        cleanup();
    }

    #[test]
    fn duplicate_certificate_number_is_rejected() {
        refresh_db();
        let tank_id = seed_tank("TANK-CS3");
        create_certificate(&upload_form(tank_id, "C-1"), None).unwrap();
        let res = create_certificate(&upload_form(tank_id, "C-1"), None);
        assert_eq!(
            Err(CreateCertificateError::NumberAlreadyExists),
            res.map(|c| c.certificate_number)
        );
        cleanup();
    }
}
