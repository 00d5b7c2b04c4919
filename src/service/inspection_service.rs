use std::backtrace::Backtrace;

use crate::model::error::inspection_errors::{
    CreateInspectionError, DeleteInspectionError, GetInspectionError, UpdateInspectionError,
};
use crate::model::repository::Inspection;
use crate::model::request::inspection_requests::{CreateInspectionRequest, UpdateInspectionRequest};
use crate::model::response::inspection_responses::InspectionResponse;
use crate::repository;
use crate::repository::{inspection_repository, tank_repository};

pub fn create_inspection(
    request: &CreateInspectionRequest,
) -> Result<InspectionResponse, CreateInspectionError> {
    let con = repository::open_connection();
    match tank_repository::get_by_id(request.tank_id, &con) {
        Ok(_) => { /*no op*/ }
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(CreateInspectionError::TankNotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to look up tank: {e:?}\n{}", Backtrace::force_capture());
            return Err(CreateInspectionError::DbError);
        }
    }
    let created = inspection_repository::create_inspection(
        &Inspection {
            id: None,
            tank_id: request.tank_id,
            insp_2_5y_date: request.insp_2_5y_date.clone(),
            next_insp_date: request.next_insp_date.clone(),
            tank_certificate: request.tank_certificate.clone(),
            created_by: request.created_by.clone(),
            updated_by: None,
        },
        &con,
    );
    con.close().unwrap();
    match created {
        Ok(inspection) => Ok(InspectionResponse::from(&inspection)),
        Err(e) => {
            log::error!(
                "Failed to create inspection: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(CreateInspectionError::DbError)
        }
    }
}

pub fn get_inspections_for_tank(
    tank_id: u32,
) -> Result<Vec<InspectionResponse>, GetInspectionError> {
    let con = repository::open_connection();
    let inspections = inspection_repository::get_by_tank(tank_id, &con);
    con.close().unwrap();
    match inspections {
        Ok(inspections) => Ok(inspections.iter().map(InspectionResponse::from).collect()),
        Err(e) => {
            log::error!(
                "Failed to list inspections: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetInspectionError::DbError)
        }
    }
}

pub fn get_all_inspections() -> Result<Vec<InspectionResponse>, GetInspectionError> {
    let con = repository::open_connection();
    let inspections = inspection_repository::get_all(&con);
    con.close().unwrap();
    match inspections {
        Ok(inspections) => Ok(inspections.iter().map(InspectionResponse::from).collect()),
        Err(e) => {
            log::error!(
                "Failed to list inspections: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetInspectionError::DbError)
        }
    }
}

pub fn update_inspection(
    id: u32,
    request: &UpdateInspectionRequest,
) -> Result<InspectionResponse, UpdateInspectionError> {
    let con = repository::open_connection();
    let existing = match inspection_repository::get_by_id(id, &con) {
        Ok(i) => i,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(UpdateInspectionError::NotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!(
                "Failed to get inspection: {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(UpdateInspectionError::DbError);
        }
    };
    let updated = Inspection {
        insp_2_5y_date: request.insp_2_5y_date.clone(),
        next_insp_date: request.next_insp_date.clone(),
        tank_certificate: request.tank_certificate.clone(),
        updated_by: request.updated_by.clone(),
        ..existing
    };
    let update_res = inspection_repository::update_inspection(&updated, &con);
    con.close().unwrap();
    match update_res {
        Ok(()) => Ok(InspectionResponse::from(&updated)),
        Err(e) => {
            log::error!(
                "Failed to update inspection: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(UpdateInspectionError::DbError)
        }
    }
}

pub fn delete_inspection(id: u32) -> Result<(), DeleteInspectionError> {
    let con = repository::open_connection();
    let exists = inspection_repository::get_by_id(id, &con);
    match exists {
        Ok(_) => { /*no op*/ }
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(DeleteInspectionError::NotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!(
                "Failed to get inspection: {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(DeleteInspectionError::DbError);
        }
    }
    let delete_res = inspection_repository::delete_inspection(id, &con);
    con.close().unwrap();
    match delete_res {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!(
                "Failed to delete inspection: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(DeleteInspectionError::DbError)
        }
    }
}
