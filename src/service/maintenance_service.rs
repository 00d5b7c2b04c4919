use std::backtrace::Backtrace;
use std::collections::HashSet;
use std::time::Duration;

use crate::config::TANK_SERVER_CONFIG;
use crate::model::error::maintenance_errors::SweepError;
use crate::repository;
use crate::repository::tank_repository;
use crate::service::storage_service;

/// reclaims abandoned staging files older than the configured age
pub fn sweep_temp() -> u32 {
    let max_age = Duration::from_secs(TANK_SERVER_CONFIG.sweep.temp_max_age_seconds);
    storage_service::sweep_temp(max_age)
}

/// Deletes stored files no database row references anymore. The snapshot of
/// referenced paths is taken up front; anything uploaded after that is
/// protected by the age floor
pub fn sweep_orphans() -> Result<u32, SweepError> {
    let con = repository::open_connection();
    let stored_paths = tank_repository::get_all_stored_paths(&con);
    con.close().unwrap();
    let stored_paths = stored_paths.map_err(|e| {
        log::error!(
            "Failed to snapshot referenced paths: {e:?}\n{}",
            Backtrace::force_capture()
        );
        SweepError::DbError
    })?;
    let known: HashSet<String> = stored_paths
        .iter()
        .map(|path| normalize_stored_path(path))
        .collect();
    let min_age = Duration::from_secs(TANK_SERVER_CONFIG.sweep.orphan_min_age_seconds);
    Ok(storage_service::sweep_orphans(&known, min_age))
}

/// stored paths from old records may carry backslashes or the root itself
fn normalize_stored_path(stored: &str) -> String {
    let normalized = stored.replace('\\', "/");
    match normalized.strip_prefix("uploads/") {
        Some(stripped) => stripped.to_string(),
        None => normalized,
    }
}

#[cfg(test)]
mod maintenance_service_tests {
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;

    use super::*;
    use crate::model::file_categories::FileCategory;
    use crate::model::repository::TankImage;
    use crate::model::request::tank_requests::CreateTankRequest;
    use crate::repository::image_repository;
    use crate::service::tank_service;
    use crate::test::{cleanup, refresh_db};

    #[test]
    fn normalize_handles_legacy_forms() {
        assert_eq!(
            "frontview/TANK-1/TANK-1_frontview.jpg",
            normalize_stored_path("uploads\\frontview\\TANK-1\\TANK-1_frontview.jpg")
        );
        assert_eq!(
            "frontview/TANK-1/TANK-1_frontview.jpg",
            normalize_stored_path("frontview/TANK-1/TANK-1_frontview.jpg")
        );
    }

    #[test]
    fn orphan_sweep_spares_referenced_files_and_reports() {
        refresh_db();
        tank_service::create_tank(&CreateTankRequest {
            tank_number: "TANK-M1".to_string(),
            status: None,
            created_by: None,
            details: None,
        })
        .unwrap();
        let referenced = storage_service::store(
            &mut Cursor::new(b"kept".to_vec()),
            "TANK-M1",
            FileCategory::FrontView,
            Some("image/jpeg"),
            Some("front.jpg"),
            1024,
        )
        .unwrap();
        let orphan = storage_service::store(
            &mut Cursor::new(b"lost".to_vec()),
            "TANK-M1",
            FileCategory::RearView,
            Some("image/jpeg"),
            Some("rear.jpg"),
            1024,
        )
        .unwrap();
        let con = repository::open_connection();
        image_repository::create_image(
            &TankImage {
                id: None,
                emp_id: None,
                tank_number: "TANK-M1".to_string(),
                image_type: referenced.category.slug().to_string(),
                image_path: referenced.relative_path(),
                created_date: "2026-08-31".to_string(),
                created_at: None,
                updated_at: None,
            },
            &con,
        )
        .unwrap();
        con.close().unwrap();
        let root = storage_service::upload_root();
        let report_dir = Path::new(&root).join(storage_service::REPORT_DIR_NAME);
        fs::create_dir_all(&report_dir).unwrap();
        fs::write(report_dir.join("TANK-M1_report.json"), b"{}").unwrap();
        // the default floor protects everything written moments ago
        assert_eq!(Ok(0), sweep_orphans());
        let known: HashSet<String> = [referenced.relative_path()].into_iter().collect();
        assert_eq!(1, storage_service::sweep_orphans(&known, Duration::ZERO));
        assert!(Path::new(&root).join(referenced.relative_path()).exists());
        assert!(!Path::new(&root).join(orphan.relative_path()).exists());
        assert!(report_dir.join("TANK-M1_report.json").exists());
        cleanup();
    }
}
