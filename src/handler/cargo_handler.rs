use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::handler::{BAD_CREDENTIALS_MESSAGE, NO_USERS_MESSAGE};
use crate::model::error::cargo_errors::{AssignCargoError, CreateCargoError, DeleteCargoError};
use crate::model::request::cargo_requests::{AssignCargoRequest, CargoRequest};
use crate::model::response::cargo_responses::{
    AssignCargoResponse, CreateCargoResponse, DeleteCargoResponse, ListCargoAssignmentsResponse,
    ListCargoResponse, UnassignCargoResponse,
};
use crate::model::response::BasicMessage;
use crate::service::cargo_service;

#[post("/", data = "<request>")]
pub fn create_cargo(request: Json<CargoRequest>, auth: Auth) -> CreateCargoResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return CreateCargoResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return CreateCargoResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match cargo_service::create_cargo(&request) {
        Ok(cargo) => CreateCargoResponse::Success(Json::from(cargo)),
        Err(CreateCargoError::MissingReference) => CreateCargoResponse::BadRequest(
            BasicMessage::new("A cargo reference is required."),
        ),
        Err(CreateCargoError::AlreadyExists) => CreateCargoResponse::AlreadyExists(
            BasicMessage::new("A cargo with that reference already exists."),
        ),
        Err(CreateCargoError::DbError) => CreateCargoResponse::DbError(BasicMessage::new(
            "Failed to save the cargo. Check server logs for details",
        )),
    }
}

#[get("/")]
pub fn get_cargo(auth: Auth) -> ListCargoResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return ListCargoResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return ListCargoResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match cargo_service::get_all_cargo() {
        Ok(cargo) => ListCargoResponse::Success(Json::from(cargo)),
        Err(_) => ListCargoResponse::DbError(BasicMessage::new(
            "Failed to pull cargo list from database. Check server logs for details",
        )),
    }
}

#[delete("/<id>")]
pub fn delete_cargo(id: u32, auth: Auth) -> DeleteCargoResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return DeleteCargoResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return DeleteCargoResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match cargo_service::delete_cargo(id) {
        Ok(()) => DeleteCargoResponse::Success(()),
        Err(DeleteCargoError::NotFound) => DeleteCargoResponse::NotFound(BasicMessage::new(
            "The cargo with the passed id could not be found.",
        )),
        Err(DeleteCargoError::DbError) => DeleteCargoResponse::DbError(BasicMessage::new(
            "Failed to delete the cargo. Check server logs for details",
        )),
    }
}

#[post("/assignments", data = "<request>")]
pub fn assign_cargo(request: Json<AssignCargoRequest>, auth: Auth) -> AssignCargoResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return AssignCargoResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return AssignCargoResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match cargo_service::assign_cargo(&request) {
        Ok(assignment) => AssignCargoResponse::Success(Json::from(assignment)),
        Err(AssignCargoError::TankNotFound) => AssignCargoResponse::NotFound(BasicMessage::new(
            "The tank with the passed id could not be found.",
        )),
        Err(AssignCargoError::CargoNotFound) => AssignCargoResponse::NotFound(BasicMessage::new(
            "The cargo with the passed id could not be found.",
        )),
        Err(AssignCargoError::AlreadyAssigned) => AssignCargoResponse::AlreadyAssigned(
            BasicMessage::new("That cargo is already assigned to the tank."),
        ),
        Err(AssignCargoError::DbError) => AssignCargoResponse::DbError(BasicMessage::new(
            "Failed to assign the cargo. Check server logs for details",
        )),
    }
}

#[get("/assignments/tank/<tank_id>")]
pub fn get_assignments_for_tank(tank_id: u32, auth: Auth) -> ListCargoAssignmentsResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return ListCargoAssignmentsResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return ListCargoAssignmentsResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match cargo_service::get_assignments_for_tank(tank_id) {
        Ok(assignments) => ListCargoAssignmentsResponse::Success(Json::from(assignments)),
        Err(_) => ListCargoAssignmentsResponse::DbError(BasicMessage::new(
            "Failed to pull cargo assignments from database. Check server logs for details",
        )),
    }
}

#[delete("/assignments/<id>")]
pub fn unassign_cargo(id: u32, auth: Auth) -> UnassignCargoResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return UnassignCargoResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return UnassignCargoResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match cargo_service::unassign_cargo(id) {
        Ok(()) => UnassignCargoResponse::Success(()),
        Err(DeleteCargoError::NotFound) => UnassignCargoResponse::NotFound(BasicMessage::new(
            "The cargo assignment with the passed id could not be found.",
        )),
        Err(DeleteCargoError::DbError) => UnassignCargoResponse::DbError(BasicMessage::new(
            "Failed to unassign the cargo. Check server logs for details",
        )),
    }
}
