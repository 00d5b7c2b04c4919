use std::backtrace::Backtrace;

use crate::model::error::regulation_errors::{
    CreateRegulationError, DeleteRegulationError, GetRegulationError, LinkRegulationError,
    UpdateRegulationError,
};
use crate::model::repository::Regulation;
use crate::model::request::regulation_requests::{
    LinkRegulationRequest, RegulationRequest, UpdateTankRegulationRequest,
};
use crate::model::response::regulation_responses::{RegulationResponse, TankRegulationResponse};
use crate::repository;
use crate::repository::{regulation_repository, tank_repository};

pub fn create_regulation(
    request: &RegulationRequest,
) -> Result<RegulationResponse, CreateRegulationError> {
    let name = request.regulation_name.trim();
    if name.is_empty() {
        return Err(CreateRegulationError::MissingName);
    }
    let con = repository::open_connection();
    let created = regulation_repository::create_regulation(
        &Regulation {
            id: None,
            regulation_name: name.to_string(),
            created_by: request.created_by.clone(),
            updated_by: None,
        },
        &con,
    );
    con.close().unwrap();
    match created {
        Ok(regulation) => Ok(RegulationResponse::from(&regulation)),
        Err(e) if repository::is_constraint_violation(&e) => {
            Err(CreateRegulationError::AlreadyExists)
        }
        Err(e) => {
            log::error!(
                "Failed to create regulation: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(CreateRegulationError::DbError)
        }
    }
}

pub fn get_all_regulations() -> Result<Vec<RegulationResponse>, GetRegulationError> {
    let con = repository::open_connection();
    let regulations = regulation_repository::get_all(&con);
    con.close().unwrap();
    match regulations {
        Ok(regulations) => Ok(regulations.iter().map(RegulationResponse::from).collect()),
        Err(e) => {
            log::error!(
                "Failed to list regulations: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetRegulationError::DbError)
        }
    }
}

pub fn update_regulation(
    id: u32,
    request: &RegulationRequest,
) -> Result<RegulationResponse, UpdateRegulationError> {
    let con = repository::open_connection();
    let existing = match regulation_repository::get_by_id(id, &con) {
        Ok(r) => r,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(UpdateRegulationError::NotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!(
                "Failed to get regulation: {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(UpdateRegulationError::DbError);
        }
    };
    let updated = Regulation {
        regulation_name: request.regulation_name.trim().to_string(),
        updated_by: request.created_by.clone(),
        ..existing
    };
    let update_res = regulation_repository::update_regulation(&updated, &con);
    con.close().unwrap();
    match update_res {
        Ok(()) => Ok(RegulationResponse::from(&updated)),
        Err(e) if repository::is_constraint_violation(&e) => {
            Err(UpdateRegulationError::AlreadyExists)
        }
        Err(e) => {
            log::error!(
                "Failed to update regulation: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(UpdateRegulationError::DbError)
        }
    }
}

pub fn delete_regulation(id: u32) -> Result<(), DeleteRegulationError> {
    let con = repository::open_connection();
    match regulation_repository::get_by_id(id, &con) {
        Ok(_) => { /*no op*/ }
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(DeleteRegulationError::NotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!(
                "Failed to get regulation: {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(DeleteRegulationError::DbError);
        }
    }
    let delete_res = regulation_repository::delete_regulation(id, &con);
    con.close().unwrap();
    match delete_res {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!(
                "Failed to delete regulation: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(DeleteRegulationError::DbError)
        }
    }
}

pub fn link_regulation(
    request: &LinkRegulationRequest,
) -> Result<TankRegulationResponse, LinkRegulationError> {
    let con = repository::open_connection();
    match tank_repository::get_by_id(request.tank_id, &con) {
        Ok(_) => { /*no op*/ }
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(LinkRegulationError::TankNotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to look up tank: {e:?}\n{}", Backtrace::force_capture());
            return Err(LinkRegulationError::DbError);
        }
    }
    match regulation_repository::get_by_id(request.regulation_id, &con) {
        Ok(_) => { /*no op*/ }
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(LinkRegulationError::RegulationNotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!(
                "Failed to look up regulation: {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(LinkRegulationError::DbError);
        }
    }
    let link_res = regulation_repository::link_to_tank(
        request.tank_id,
        request.regulation_id,
        &request.initial_approval_no,
        &request.created_by,
        &con,
    );
    let link = match link_res {
        Ok(id) => regulation_repository::get_link_by_id(id, &con),
        Err(e) => Err(e),
    };
    con.close().unwrap();
    match link {
        Ok(link) => Ok(TankRegulationResponse::from(&link)),
        Err(e) if repository::is_constraint_violation(&e) => {
            Err(LinkRegulationError::AlreadyLinked)
        }
        Err(e) => {
            log::error!(
                "Failed to link regulation: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(LinkRegulationError::DbError)
        }
    }
}

pub fn get_links_for_tank(
    tank_id: u32,
) -> Result<Vec<TankRegulationResponse>, GetRegulationError> {
    let con = repository::open_connection();
    let links = regulation_repository::get_links_by_tank(tank_id, &con);
    con.close().unwrap();
    match links {
        Ok(links) => Ok(links.iter().map(TankRegulationResponse::from).collect()),
        Err(e) => {
            log::error!(
                "Failed to list tank regulations: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetRegulationError::DbError)
        }
    }
}

pub fn update_link(
    id: u32,
    request: &UpdateTankRegulationRequest,
) -> Result<TankRegulationResponse, UpdateRegulationError> {
    let con = repository::open_connection();
    match regulation_repository::get_link_by_id(id, &con) {
        Ok(_) => { /*no op*/ }
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(UpdateRegulationError::NotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!(
                "Failed to get tank regulation: {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(UpdateRegulationError::DbError);
        }
    }
    let update_res = regulation_repository::update_link(
        id,
        request.regulation_id,
        &request.initial_approval_no,
        &request.updated_by,
        &con,
    );
    let updated = match update_res {
        Ok(()) => regulation_repository::get_link_by_id(id, &con),
        Err(e) => Err(e),
    };
    con.close().unwrap();
    match updated {
        Ok(link) => Ok(TankRegulationResponse::from(&link)),
        Err(e) => {
            log::error!(
                "Failed to update tank regulation: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(UpdateRegulationError::DbError)
        }
    }
}

pub fn unlink_regulation(id: u32) -> Result<(), DeleteRegulationError> {
    let con = repository::open_connection();
    match regulation_repository::get_link_by_id(id, &con) {
        Ok(_) => { /*no op*/ }
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(DeleteRegulationError::NotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!(
                "Failed to get tank regulation: {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(DeleteRegulationError::DbError);
        }
    }
    let delete_res = regulation_repository::delete_link(id, &con);
    con.close().unwrap();
    match delete_res {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!(
                "Failed to unlink regulation: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(DeleteRegulationError::DbError)
        }
    }
}
