use std::backtrace::Backtrace;

use crate::model::error::tank_errors::{
    CreateTankError, DeleteTankError, GetTankError, UpdateTankError,
};
use crate::model::repository::{Tank, TankDetails};
use crate::model::request::tank_requests::{CreateTankRequest, TankDetailsRequest, UpdateTankRequest};
use crate::model::response::tank_responses::TankResponse;
use crate::repository;
use crate::repository::{
    certificate_repository, drawing_repository, image_repository, tank_repository,
    valve_repository,
};
use crate::service::storage_service;

pub fn create_tank(request: &CreateTankRequest) -> Result<TankResponse, CreateTankError> {
    let tank_number = request.tank_number.trim();
    if tank_number.is_empty() {
        return Err(CreateTankError::MissingNumber);
    }
    let con = repository::open_connection();
    match tank_repository::get_by_number(tank_number, &con) {
        Ok(_) => {
            con.close().unwrap();
            return Err(CreateTankError::AlreadyExists);
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => { /*no op*/ }
        Err(e) => {
            con.close().unwrap();
            log::error!(
                "Failed to check for existing tank: {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(CreateTankError::DbError);
        }
    }
    let created = tank_repository::create_tank(
        &Tank {
            id: None,
            tank_number: tank_number.to_string(),
            status: request.status.clone(),
            created_by: request.created_by.clone(),
            updated_by: None,
        },
        &con,
    )
    .map_err(|e| {
        log::error!(
            "Failed to create tank: {e:?}\n{}",
            Backtrace::force_capture()
        );
        CreateTankError::DbError
    });
    let created = match created {
        Ok(t) => t,
        Err(e) => {
            con.close().unwrap();
            return Err(e);
        }
    };
    // every tank carries a detail row, even if the client sent nothing
    let details = to_details(
        created.id.unwrap(),
        tank_number,
        request.details.as_ref(),
        &request.created_by,
    );
    let details_res = tank_repository::create_details(&details, &con);
    con.close().unwrap();
    if let Err(e) = details_res {
        log::error!(
            "Failed to create tank details: {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(CreateTankError::DbError);
    }
    Ok(TankResponse::from(&created, Some(&details)))
}

pub fn get_tank(id: u32) -> Result<TankResponse, GetTankError> {
    let con = repository::open_connection();
    let tank = tank_repository::get_by_id(id, &con);
    let tank = match tank {
        Ok(t) => t,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(GetTankError::NotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to get tank: {e:?}\n{}", Backtrace::force_capture());
            return Err(GetTankError::DbError);
        }
    };
    let details = match tank_repository::get_details_by_tank(id, &con) {
        Ok(d) => Some(d),
        Err(rusqlite::Error::QueryReturnedNoRows) => None,
        Err(e) => {
            con.close().unwrap();
            log::error!(
                "Failed to get tank details: {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(GetTankError::DbError);
        }
    };
    con.close().unwrap();
    Ok(TankResponse::from(&tank, details.as_ref()))
}

pub fn get_tank_by_number(tank_number: &str) -> Result<TankResponse, GetTankError> {
    let con = repository::open_connection();
    let tank = match tank_repository::get_by_number(tank_number, &con) {
        Ok(t) => t,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(GetTankError::NotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to get tank: {e:?}\n{}", Backtrace::force_capture());
            return Err(GetTankError::DbError);
        }
    };
    // id is always populated on rows pulled from the database
    let id = match tank.id {
        Some(id) => id,
        None => {
            con.close().unwrap();
            return Err(GetTankError::DbError);
        }
    };
    let details = match tank_repository::get_details_by_tank(id, &con) {
        Ok(d) => Some(d),
        Err(rusqlite::Error::QueryReturnedNoRows) => None,
        Err(e) => {
            con.close().unwrap();
            log::error!(
                "Failed to get tank details: {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(GetTankError::DbError);
        }
    };
    con.close().unwrap();
    Ok(TankResponse::from(&tank, details.as_ref()))
}

pub fn get_all_tanks() -> Result<Vec<TankResponse>, GetTankError> {
    let con = repository::open_connection();
    let tanks = match tank_repository::get_all(&con) {
        Ok(tanks) => tanks,
        Err(e) => {
            con.close().unwrap();
            log::error!(
                "Failed to list tanks: {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(GetTankError::DbError);
        }
    };
    let mut responses = Vec::with_capacity(tanks.len());
    for tank in tanks.iter() {
        let details = match tank.id {
            Some(id) => match tank_repository::get_details_by_tank(id, &con) {
                Ok(d) => Some(d),
                Err(rusqlite::Error::QueryReturnedNoRows) => None,
                Err(e) => {
                    con.close().unwrap();
                    log::error!(
                        "Failed to get tank details: {e:?}\n{}",
                        Backtrace::force_capture()
                    );
                    return Err(GetTankError::DbError);
                }
            },
            None => None,
        };
        responses.push(TankResponse::from(tank, details.as_ref()));
    }
    con.close().unwrap();
    Ok(responses)
}

pub fn update_tank(id: u32, request: &UpdateTankRequest) -> Result<TankResponse, UpdateTankError> {
    let con = repository::open_connection();
    let existing = match tank_repository::get_by_id(id, &con) {
        Ok(t) => t,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(UpdateTankError::NotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to get tank: {e:?}\n{}", Backtrace::force_capture());
            return Err(UpdateTankError::DbError);
        }
    };
    let res = update_tank_internal(&existing, request, &con);
    con.close().unwrap();
    res?;
    get_tank(id).map_err(|e| match e {
        GetTankError::NotFound => UpdateTankError::NotFound,
        GetTankError::DbError => UpdateTankError::DbError,
    })
}

fn update_tank_internal(
    existing: &Tank,
    request: &UpdateTankRequest,
    con: &rusqlite::Connection,
) -> Result<(), UpdateTankError> {
    let id = existing.id.unwrap();
    if let Some(new_number) = &request.tank_number {
        let new_number = new_number.trim();
        if !new_number.is_empty() && new_number != existing.tank_number {
            match tank_repository::get_by_number(new_number, con) {
                Ok(_) => return Err(UpdateTankError::NumberAlreadyExists),
                Err(rusqlite::Error::QueryReturnedNoRows) => { /*no op*/ }
                Err(e) => {
                    log::error!(
                        "Failed to check tank number: {e:?}\n{}",
                        Backtrace::force_capture()
                    );
                    return Err(UpdateTankError::DbError);
                }
            }
            tank_repository::rename_tank(id, new_number, con).map_err(|e| {
                log::error!(
                    "Failed to rename tank: {e:?}\n{}",
                    Backtrace::force_capture()
                );
                UpdateTankError::DbError
            })?;
            tank_repository::rename_denormalized_copies(id, new_number, con).map_err(|e| {
                log::error!(
                    "Failed to propagate tank rename: {e:?}\n{}",
                    Backtrace::force_capture()
                );
                UpdateTankError::DbError
            })?;
        }
    }
    let status = request.status.clone().or_else(|| existing.status.clone());
    tank_repository::update_header(id, &status, &request.updated_by, con).map_err(|e| {
        log::error!(
            "Failed to update tank header: {e:?}\n{}",
            Backtrace::force_capture()
        );
        UpdateTankError::DbError
    })?;
    if let Some(details_request) = &request.details {
        let current_number = request
            .tank_number
            .clone()
            .unwrap_or_else(|| existing.tank_number.clone());
        let mut details = to_details(id, &current_number, Some(details_request), &None);
        details.updated_by = request.updated_by.clone();
        let update_res = match tank_repository::get_details_by_tank(id, con) {
            Ok(_) => tank_repository::update_details(&details, con),
            // older rows may predate the detail table
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                tank_repository::create_details(&details, con).map(|_| ())
            }
            Err(e) => Err(e),
        };
        update_res.map_err(|e| {
            log::error!(
                "Failed to update tank details: {e:?}\n{}",
                Backtrace::force_capture()
            );
            UpdateTankError::DbError
        })?;
    }
    Ok(())
}

/// Removes the tank row, letting the foreign keys cascade to every dependent
/// record, then cleans the tank's files off disk. File cleanup happens after
/// the delete commits; a failure there leaves orphans for the sweep
pub fn delete_tank(id: u32) -> Result<(), DeleteTankError> {
    let con = repository::open_connection();
    let tank = match tank_repository::get_by_id(id, &con) {
        Ok(t) => t,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(DeleteTankError::NotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to get tank: {e:?}\n{}", Backtrace::force_capture());
            return Err(DeleteTankError::DbError);
        }
    };
    let stored_paths = collect_stored_paths(&tank, &con);
    let delete_res = tank_repository::delete_tank(id, &con);
    con.close().unwrap();
    if let Err(e) = delete_res {
        log::error!(
            "Failed to delete tank: {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(DeleteTankError::DbError);
    }
    let stored_paths = stored_paths.map_err(|e| {
        log::error!(
            "Failed to collect stored paths for deleted tank: {e:?}\n{}",
            Backtrace::force_capture()
        );
        DeleteTankError::DbError
    })?;
    for path in stored_paths {
        storage_service::remove_if_exists(&path);
    }
    Ok(())
}

fn collect_stored_paths(
    tank: &Tank,
    con: &rusqlite::Connection,
) -> Result<Vec<String>, rusqlite::Error> {
    let id = tank.id.unwrap();
    let mut paths: Vec<String> = image_repository::get_by_tank(&tank.tank_number, con)?
        .into_iter()
        .map(|i| i.image_path)
        .collect();
    paths.extend(certificate_repository::get_paths_by_tank(id, con)?);
    paths.extend(drawing_repository::get_paths_by_tank(id, con)?);
    paths.extend(valve_repository::get_paths_by_tank(id, con)?);
    paths.sort();
    paths.dedup();
    Ok(paths)
}

fn to_details(
    tank_id: u32,
    tank_number: &str,
    request: Option<&TankDetailsRequest>,
    created_by: &Option<String>,
) -> TankDetails {
    let request = request.cloned().unwrap_or_default();
    TankDetails {
        id: None,
        tank_id,
        tank_number: Some(tank_number.to_string()),
        mfgr: request.mfgr,
        date_mfg: request.date_mfg,
        pv_code: request.pv_code,
        un_iso_code: request.un_iso_code,
        capacity_l: request.capacity_l,
        mawp: request.mawp,
        design_temperature: request.design_temperature,
        tare_weight_kg: request.tare_weight_kg,
        mgw_kg: request.mgw_kg,
        size: request.size,
        pump_type: request.pump_type,
        vessel_material: request.vessel_material,
        color_body_frame: request.color_body_frame,
        remark: request.remark,
        lease: request.lease.unwrap_or(false),
        created_by: created_by.clone(),
        updated_by: None,
    }
}

#[cfg(test)]
mod tank_service_tests {
    use super::*;
    use crate::test::{cleanup, refresh_db};

    fn create_request(number: &str) -> CreateTankRequest {
        CreateTankRequest {
            tank_number: number.to_string(),
            status: Some("active".to_string()),
            created_by: Some("tester".to_string()),
            details: Some(TankDetailsRequest {
                mfgr: Some("CIMC".to_string()),
                capacity_l: Some(26_000.0),
                ..TankDetailsRequest::default()
            }),
        }
    }

    #[test]
    fn create_then_get_returns_details() {
        refresh_db();
        let created = create_tank(&create_request("TANK-1")).unwrap();
        let fetched = get_tank(created.id).unwrap();
        assert_eq!("TANK-1", fetched.tank_number);
        let details = fetched.details.unwrap();
        assert_eq!(Some("CIMC".to_string()), details.mfgr);
        assert_eq!(Some(26_000.0), details.capacity_l);
        cleanup();
    }

    #[test]
    fn duplicate_number_is_rejected() {
        refresh_db();
        create_tank(&create_request("TANK-1")).unwrap();
        assert_eq!(
            Err(CreateTankError::AlreadyExists),
            create_tank(&create_request("TANK-1"))
        );
        cleanup();
    }

    #[test]
    fn rename_collision_is_rejected() {
        refresh_db();
        create_tank(&create_request("TANK-1")).unwrap();
        let second = create_tank(&create_request("TANK-2")).unwrap();
        let res = update_tank(
            second.id,
            &UpdateTankRequest {
                tank_number: Some("TANK-1".to_string()),
                status: None,
                updated_by: None,
                details: None,
            },
        );
        assert_eq!(Err(UpdateTankError::NumberAlreadyExists), res);
        cleanup();
    }

    #[test]
    fn delete_missing_tank_is_not_found() {
        refresh_db();
        assert_eq!(Err(DeleteTankError::NotFound), delete_tank(999));
        cleanup();
    }
}
