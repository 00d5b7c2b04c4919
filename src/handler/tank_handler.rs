use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::handler::{BAD_CREDENTIALS_MESSAGE, NO_USERS_MESSAGE};
use crate::model::error::tank_errors::{
    CreateTankError, DeleteTankError, GetTankError, UpdateTankError,
};
use crate::model::request::tank_requests::{CreateTankRequest, UpdateTankRequest};
use crate::model::response::tank_responses::{
    CreateTankResponse, DeleteTankResponse, GetTankResponse, ListTanksResponse, UpdateTankResponse,
};
use crate::model::response::BasicMessage;
use crate::service::tank_service;

#[post("/", data = "<request>")]
pub fn create_tank(request: Json<CreateTankRequest>, auth: Auth) -> CreateTankResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return CreateTankResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return CreateTankResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match tank_service::create_tank(&request) {
        Ok(tank) => CreateTankResponse::Success(Json::from(tank)),
        Err(CreateTankError::MissingNumber) => CreateTankResponse::BadRequest(BasicMessage::new(
            "A tank number is required.",
        )),
        Err(CreateTankError::AlreadyExists) => CreateTankResponse::AlreadyExists(
            BasicMessage::new("A tank with that number already exists."),
        ),
        Err(CreateTankError::DbError) => CreateTankResponse::DbError(BasicMessage::new(
            "Failed to save the tank. Check server logs for details",
        )),
    }
}

#[get("/<id>")]
pub fn get_tank(id: u32, auth: Auth) -> GetTankResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return GetTankResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return GetTankResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match tank_service::get_tank(id) {
        Ok(tank) => GetTankResponse::Success(Json::from(tank)),
        Err(GetTankError::NotFound) => GetTankResponse::NotFound(BasicMessage::new(
            "The tank with the passed id could not be found.",
        )),
        Err(GetTankError::DbError) => GetTankResponse::DbError(BasicMessage::new(
            "Failed to pull tank info from database. Check server logs for details",
        )),
    }
}

#[get("/number/<tank_number>")]
pub fn get_tank_by_number(tank_number: &str, auth: Auth) -> GetTankResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return GetTankResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return GetTankResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match tank_service::get_tank_by_number(tank_number) {
        Ok(tank) => GetTankResponse::Success(Json::from(tank)),
        Err(GetTankError::NotFound) => GetTankResponse::NotFound(BasicMessage::new(
            "The tank with the passed number could not be found.",
        )),
        Err(GetTankError::DbError) => GetTankResponse::DbError(BasicMessage::new(
            "Failed to pull tank info from database. Check server logs for details",
        )),
    }
}

#[get("/")]
pub fn get_tanks(auth: Auth) -> ListTanksResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return ListTanksResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return ListTanksResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match tank_service::get_all_tanks() {
        Ok(tanks) => ListTanksResponse::Success(Json::from(tanks)),
        Err(_) => ListTanksResponse::DbError(BasicMessage::new(
            "Failed to pull tank list from database. Check server logs for details",
        )),
    }
}

#[put("/<id>", data = "<request>")]
pub fn update_tank(id: u32, request: Json<UpdateTankRequest>, auth: Auth) -> UpdateTankResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return UpdateTankResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return UpdateTankResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match tank_service::update_tank(id, &request) {
        Ok(tank) => UpdateTankResponse::Success(Json::from(tank)),
        Err(UpdateTankError::NotFound) => UpdateTankResponse::NotFound(BasicMessage::new(
            "The tank with the passed id could not be found.",
        )),
        Err(UpdateTankError::NumberAlreadyExists) => UpdateTankResponse::NumberAlreadyExists(
            BasicMessage::new("Another tank already uses the requested tank number."),
        ),
        Err(UpdateTankError::DbError) => UpdateTankResponse::DbError(BasicMessage::new(
            "Failed to update the tank. Check server logs for details",
        )),
    }
}

#[delete("/<id>")]
pub fn delete_tank(id: u32, auth: Auth) -> DeleteTankResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return DeleteTankResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return DeleteTankResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match tank_service::delete_tank(id) {
        Ok(()) => DeleteTankResponse::Success(()),
        Err(DeleteTankError::NotFound) => DeleteTankResponse::NotFound(BasicMessage::new(
            "The tank with the passed id could not be found.",
        )),
        Err(DeleteTankError::DbError) => DeleteTankResponse::DbError(BasicMessage::new(
            "Failed to delete the tank. Check server logs for details",
        )),
    }
}
