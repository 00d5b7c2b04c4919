use std::backtrace::Backtrace;

use chrono::Local;

use crate::config::TANK_SERVER_CONFIG;
use crate::model::error::image_errors::{DeleteImageError, GetImagesError, UploadImageError};
use crate::model::file_categories::FileCategory;
use crate::model::repository::TankImage;
use crate::model::response::image_responses::TankImageResponse;
use crate::repository;
use crate::repository::{image_repository, tank_repository};
use crate::service::storage_service;
use crate::service::storage_service::StagedUpload;

/// Stores a tank photo and upserts its daily gallery row. One image is kept
/// per (tank, category, day); a second upload the same day replaces both the
/// file and the row's path
pub fn upload_image(
    tank_number: &str,
    type_slug: &str,
    staged: &StagedUpload,
    emp_id: Option<u32>,
) -> Result<TankImageResponse, UploadImageError> {
    let category = match FileCategory::from_slug(type_slug) {
        Some(c) if c.is_image() => c,
        _ => return Err(UploadImageError::InvalidImageType(type_slug.to_string())),
    };
    let con = repository::open_connection();
    let tank = tank_repository::get_by_number(tank_number, &con);
    if let Err(e) = &tank {
        con.close().unwrap();
        return match e {
            rusqlite::Error::QueryReturnedNoRows => Err(UploadImageError::TankNotFound),
            e => {
                log::error!("Failed to look up tank: {e:?}\n{}", Backtrace::force_capture());
                Err(UploadImageError::DbError)
            }
        };
    }
    let mut input = match staged.open() {
        Ok(f) => f,
        Err(e) => {
            con.close().unwrap();
            return Err(UploadImageError::Storage(e));
        }
    };
    let stored = storage_service::store(
        &mut input,
        tank_number,
        category,
        staged.content_type.as_deref(),
        staged.original_name.as_deref(),
        TANK_SERVER_CONFIG.upload.max_size_bytes,
    );
    let stored = match stored {
        Ok(s) => s,
        Err(e) => {
            con.close().unwrap();
            return Err(UploadImageError::Storage(e));
        }
    };
    let today = Local::now().format("%Y-%m-%d").to_string();
    let upsert_res = upsert_daily_row(tank_number, category, &stored, &today, emp_id, &con);
    con.close().unwrap();
    match upsert_res {
        Ok(image) => Ok(TankImageResponse::from(&image)),
        Err(e) => {
            log::error!(
                "Failed to persist image row: {e:?}\n{}",
                Backtrace::force_capture()
            );
            // the file made it to disk but the row didn't; take the file back out
            storage_service::remove_if_exists(&stored.relative_path());
            Err(UploadImageError::DbError)
        }
    }
}

fn upsert_daily_row(
    tank_number: &str,
    category: FileCategory,
    stored: &storage_service::StoredFileRef,
    today: &str,
    emp_id: Option<u32>,
    con: &rusqlite::Connection,
) -> Result<TankImage, rusqlite::Error> {
    let stored_path = stored.relative_path();
    match image_repository::get_by_daily_key(tank_number, category.slug(), today, con)? {
        Some(existing) => {
            if existing.image_path != stored_path {
                // unique-named leftovers from older naming schemes
                storage_service::remove_if_exists(&existing.image_path);
            }
            image_repository::update_image_path(existing.id.unwrap(), &stored_path, emp_id, con)?;
            Ok(TankImage {
                image_path: stored_path,
                emp_id,
                ..existing
            })
        }
        None => image_repository::create_image(
            &TankImage {
                id: None,
                emp_id,
                tank_number: tank_number.to_string(),
                image_type: category.slug().to_string(),
                image_path: stored_path,
                created_date: today.to_string(),
                created_at: None,
                updated_at: None,
            },
            con,
        ),
    }
}

/// lists uploaded images, newest first, optionally filtered to one category
pub fn get_images(
    tank_number: &str,
    type_slug: Option<&str>,
) -> Result<Vec<TankImageResponse>, GetImagesError> {
    let category = match type_slug {
        Some(slug) => match FileCategory::from_slug(slug) {
            Some(c) if c.is_image() => Some(c),
            _ => return Err(GetImagesError::InvalidImageType(slug.to_string())),
        },
        None => None,
    };
    let con = repository::open_connection();
    match tank_repository::get_by_number(tank_number, &con) {
        Ok(_) => { /*no op*/ }
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(GetImagesError::TankNotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to look up tank: {e:?}\n{}", Backtrace::force_capture());
            return Err(GetImagesError::DbError);
        }
    }
    let rows = match category {
        Some(c) => image_repository::get_by_tank_and_type(tank_number, c.slug(), &con),
        None => image_repository::get_by_tank(tank_number, &con),
    };
    con.close().unwrap();
    match rows {
        Ok(rows) => Ok(rows.iter().map(TankImageResponse::from).collect()),
        Err(e) => {
            log::error!("Failed to list images: {e:?}\n{}", Backtrace::force_capture());
            Err(GetImagesError::DbError)
        }
    }
}

/// removes one daily image row and its file
pub fn delete_image(
    tank_number: &str,
    type_slug: &str,
    date: &str,
) -> Result<u32, DeleteImageError> {
    let category = match FileCategory::from_slug(type_slug) {
        Some(c) if c.is_image() => c,
        _ => return Err(DeleteImageError::InvalidImageType(type_slug.to_string())),
    };
    if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(DeleteImageError::BadDate);
    }
    let con = repository::open_connection();
    match tank_repository::get_by_number(tank_number, &con) {
        Ok(_) => { /*no op*/ }
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(DeleteImageError::TankNotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to look up tank: {e:?}\n{}", Backtrace::force_capture());
            return Err(DeleteImageError::DbError);
        }
    }
    let row = image_repository::get_by_daily_key(tank_number, category.slug(), date, &con);
    let row = match row {
        Ok(Some(row)) => row,
        Ok(None) => {
            con.close().unwrap();
            return Err(DeleteImageError::NotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to look up image: {e:?}\n{}", Backtrace::force_capture());
            return Err(DeleteImageError::DbError);
        }
    };
    let delete_res = image_repository::delete_image(row.id.unwrap(), &con);
    con.close().unwrap();
    if let Err(e) = delete_res {
        log::error!("Failed to delete image: {e:?}\n{}", Backtrace::force_capture());
        return Err(DeleteImageError::DbError);
    }
    storage_service::remove_if_exists(&row.image_path);
    Ok(1)
}

/// clears a tank's whole gallery, rows and files both
pub fn delete_images_for_tank(tank_number: &str) -> Result<u32, DeleteImageError> {
    let con = repository::open_connection();
    match tank_repository::get_by_number(tank_number, &con) {
        Ok(_) => { /*no op*/ }
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(DeleteImageError::TankNotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to look up tank: {e:?}\n{}", Backtrace::force_capture());
            return Err(DeleteImageError::DbError);
        }
    }
    let rows = match image_repository::get_by_tank(tank_number, &con) {
        Ok(rows) => rows,
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to list images: {e:?}\n{}", Backtrace::force_capture());
            return Err(DeleteImageError::DbError);
        }
    };
    let mut removed: u32 = 0;
    for row in rows {
        if let Err(e) = image_repository::delete_image(row.id.unwrap(), &con) {
            con.close().unwrap();
            log::error!("Failed to delete image: {e:?}\n{}", Backtrace::force_capture());
            return Err(DeleteImageError::DbError);
        }
        storage_service::remove_if_exists(&row.image_path);
        removed += 1;
    }
    con.close().unwrap();
    Ok(removed)
}
