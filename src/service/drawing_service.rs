use std::backtrace::Backtrace;

use crate::config::TANK_SERVER_CONFIG;
use crate::model::error::drawing_errors::{DeleteDrawingError, GetDrawingsError, UploadDrawingError};
use crate::model::file_categories::FileCategory;
use crate::model::repository::Drawing;
use crate::model::request::drawing_requests::DrawingUploadForm;
use crate::model::response::drawing_responses::DrawingResponse;
use crate::repository;
use crate::repository::{drawing_repository, tank_repository};
use crate::service::storage_service;
use crate::service::storage_service::StagedUpload;

/// Stores a drawing file and its row. Drawings use the accumulate naming
/// policy, so every upload gets its own file and its own row
pub fn upload_drawing(
    form: &DrawingUploadForm<'_>,
    staged: &StagedUpload,
) -> Result<DrawingResponse, UploadDrawingError> {
    if form.drawing_type.trim().is_empty() {
        return Err(UploadDrawingError::MissingDrawingType);
    }
    let con = repository::open_connection();
    let tank = match tank_repository::get_by_id(form.tank_id, &con) {
        Ok(t) => t,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(UploadDrawingError::TankNotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to look up tank: {e:?}\n{}", Backtrace::force_capture());
            return Err(UploadDrawingError::DbError);
        }
    };
    let mut input = match staged.open() {
        Ok(f) => f,
        Err(e) => {
            con.close().unwrap();
            return Err(UploadDrawingError::Storage(e));
        }
    };
    let stored = storage_service::store(
        &mut input,
        &tank.tank_number,
        FileCategory::Drawings,
        staged.content_type.as_deref(),
        staged.original_name.as_deref(),
        TANK_SERVER_CONFIG.upload.max_size_bytes,
    );
    let stored = match stored {
        Ok(s) => s,
        Err(e) => {
            con.close().unwrap();
            return Err(UploadDrawingError::Storage(e));
        }
    };
    let original_filename = staged
        .original_name
        .clone()
        .unwrap_or_else(|| stored.file_name.clone());
    let created = drawing_repository::create_drawing(
        &Drawing {
            id: None,
            tank_id: form.tank_id,
            drawing_type: form.drawing_type.trim().to_string(),
            description: form.description.clone(),
            file_path: stored.relative_path(),
            original_filename,
            created_by: form.created_by.clone(),
            created_at: None,
        },
        &con,
    );
    con.close().unwrap();
    match created {
        Ok(drawing) => Ok(DrawingResponse::from(&drawing)),
        Err(e) => {
            log::error!(
                "Failed to create drawing row: {e:?}\n{}",
                Backtrace::force_capture()
            );
            storage_service::remove_if_exists(&stored.relative_path());
            Err(UploadDrawingError::DbError)
        }
    }
}

pub fn get_drawings_for_tank(tank_id: u32) -> Result<Vec<DrawingResponse>, GetDrawingsError> {
    let con = repository::open_connection();
    let drawings = drawing_repository::get_by_tank(tank_id, &con);
    con.close().unwrap();
    match drawings {
        Ok(drawings) => Ok(drawings.iter().map(DrawingResponse::from).collect()),
        Err(e) => {
            log::error!(
                "Failed to list drawings: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetDrawingsError::DbError)
        }
    }
}

pub fn delete_drawing(id: u32) -> Result<(), DeleteDrawingError> {
    let con = repository::open_connection();
    let existing = match drawing_repository::get_by_id(id, &con) {
        Ok(d) => d,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(DeleteDrawingError::NotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to get drawing: {e:?}\n{}", Backtrace::force_capture());
            return Err(DeleteDrawingError::DbError);
        }
    };
    let delete_res = drawing_repository::delete_drawing(id, &con);
    con.close().unwrap();
    if let Err(e) = delete_res {
        log::error!(
            "Failed to delete drawing: {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(DeleteDrawingError::DbError);
    }
    // unique naming means this file belongs to this row alone
    storage_service::remove_if_exists(&existing.file_path);
    Ok(())
}
