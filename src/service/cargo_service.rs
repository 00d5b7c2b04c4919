use std::backtrace::Backtrace;

use crate::model::error::cargo_errors::{
    AssignCargoError, CreateCargoError, DeleteCargoError, UpdateCargoError,
};
use crate::model::repository::Cargo;
use crate::model::request::cargo_requests::{AssignCargoRequest, CargoRequest};
use crate::model::response::cargo_responses::{CargoAssignmentResponse, CargoResponse};
use crate::repository;
use crate::repository::{cargo_repository, tank_repository};

pub fn create_cargo(request: &CargoRequest) -> Result<CargoResponse, CreateCargoError> {
    let reference = request.cargo_reference.trim();
    if reference.is_empty() {
        return Err(CreateCargoError::MissingReference);
    }
    let con = repository::open_connection();
    let created = cargo_repository::create_cargo(
        &Cargo {
            id: None,
            cargo_reference: reference.to_string(),
            created_by: request.created_by.clone(),
            updated_by: None,
        },
        &con,
    );
    con.close().unwrap();
    match created {
        Ok(cargo) => Ok(CargoResponse::from(&cargo)),
        Err(e) if repository::is_constraint_violation(&e) => Err(CreateCargoError::AlreadyExists),
        Err(e) => {
            log::error!(
                "Failed to create cargo: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(CreateCargoError::DbError)
        }
    }
}

pub fn get_all_cargo() -> Result<Vec<CargoResponse>, UpdateCargoError> {
    let con = repository::open_connection();
    let cargo = cargo_repository::get_all(&con);
    con.close().unwrap();
    match cargo {
        Ok(cargo) => Ok(cargo.iter().map(CargoResponse::from).collect()),
        Err(e) => {
            log::error!("Failed to list cargo: {e:?}\n{}", Backtrace::force_capture());
            Err(UpdateCargoError::DbError)
        }
    }
}

pub fn delete_cargo(id: u32) -> Result<(), DeleteCargoError> {
    let con = repository::open_connection();
    let known = match cargo_repository::get_all(&con) {
        Ok(cargo) => cargo.iter().any(|c| c.id == Some(id)),
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to list cargo: {e:?}\n{}", Backtrace::force_capture());
            return Err(DeleteCargoError::DbError);
        }
    };
    if !known {
        con.close().unwrap();
        return Err(DeleteCargoError::NotFound);
    }
    let delete_res = cargo_repository::delete_cargo(id, &con);
    con.close().unwrap();
    match delete_res {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!(
                "Failed to delete cargo: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(DeleteCargoError::DbError)
        }
    }
}

pub fn assign_cargo(
    request: &AssignCargoRequest,
) -> Result<CargoAssignmentResponse, AssignCargoError> {
    let con = repository::open_connection();
    match tank_repository::get_by_id(request.tank_id, &con) {
        Ok(_) => { /*no op*/ }
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(AssignCargoError::TankNotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to look up tank: {e:?}\n{}", Backtrace::force_capture());
            return Err(AssignCargoError::DbError);
        }
    }
    let cargo_exists = match cargo_repository::get_all(&con) {
        Ok(cargo) => cargo.iter().any(|c| c.id == Some(request.cargo_id)),
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to list cargo: {e:?}\n{}", Backtrace::force_capture());
            return Err(AssignCargoError::DbError);
        }
    };
    if !cargo_exists {
        con.close().unwrap();
        return Err(AssignCargoError::CargoNotFound);
    }
    let assign_res = cargo_repository::assign_to_tank(
        request.tank_id,
        request.cargo_id,
        &request.created_by,
        &con,
    );
    let assignment = match assign_res {
        Ok(id) => cargo_repository::get_assignments_by_tank(request.tank_id, &con)
            .map(|assignments| assignments.into_iter().find(|a| a.id == Some(id))),
        Err(e) => Err(e),
    };
    con.close().unwrap();
    match assignment {
        Ok(Some(assignment)) => Ok(CargoAssignmentResponse::from(&assignment)),
        Ok(None) => Err(AssignCargoError::DbError),
        Err(e) if repository::is_constraint_violation(&e) => {
            Err(AssignCargoError::AlreadyAssigned)
        }
        Err(e) => {
            log::error!(
                "Failed to assign cargo: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(AssignCargoError::DbError)
        }
    }
}

pub fn get_assignments_for_tank(
    tank_id: u32,
) -> Result<Vec<CargoAssignmentResponse>, UpdateCargoError> {
    let con = repository::open_connection();
    let assignments = cargo_repository::get_assignments_by_tank(tank_id, &con);
    con.close().unwrap();
    match assignments {
        Ok(assignments) => Ok(assignments.iter().map(CargoAssignmentResponse::from).collect()),
        Err(e) => {
            log::error!(
                "Failed to list cargo assignments: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(UpdateCargoError::DbError)
        }
    }
}

pub fn unassign_cargo(id: u32) -> Result<(), DeleteCargoError> {
    let con = repository::open_connection();
    let delete_res = cargo_repository::delete_assignment(id, &con);
    con.close().unwrap();
    match delete_res {
        Ok(0) => Err(DeleteCargoError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!(
                "Failed to unassign cargo: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(DeleteCargoError::DbError)
        }
    }
}
