use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::handler::{BAD_CREDENTIALS_MESSAGE, NO_USERS_MESSAGE};
use crate::model::error::inspection_errors::{
    CreateInspectionError, DeleteInspectionError, UpdateInspectionError,
};
use crate::model::request::inspection_requests::{CreateInspectionRequest, UpdateInspectionRequest};
use crate::model::response::inspection_responses::{
    CreateInspectionResponse, DeleteInspectionResponse, ListInspectionsResponse,
    UpdateInspectionResponse,
};
use crate::model::response::BasicMessage;
use crate::service::inspection_service;

#[post("/", data = "<request>")]
pub fn create_inspection(
    request: Json<CreateInspectionRequest>,
    auth: Auth,
) -> CreateInspectionResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return CreateInspectionResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return CreateInspectionResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match inspection_service::create_inspection(&request) {
        Ok(inspection) => CreateInspectionResponse::Success(Json::from(inspection)),
        Err(CreateInspectionError::TankNotFound) => CreateInspectionResponse::TankNotFound(
            BasicMessage::new("The tank with the passed id could not be found."),
        ),
        Err(CreateInspectionError::DbError) => CreateInspectionResponse::DbError(
            BasicMessage::new("Failed to save the inspection. Check server logs for details"),
        ),
    }
}

#[get("/tank/<tank_id>")]
pub fn get_inspections_for_tank(tank_id: u32, auth: Auth) -> ListInspectionsResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return ListInspectionsResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return ListInspectionsResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match inspection_service::get_inspections_for_tank(tank_id) {
        Ok(inspections) => ListInspectionsResponse::Success(Json::from(inspections)),
        Err(_) => ListInspectionsResponse::DbError(BasicMessage::new(
            "Failed to pull inspections from database. Check server logs for details",
        )),
    }
}

#[get("/")]
pub fn get_inspections(auth: Auth) -> ListInspectionsResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return ListInspectionsResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return ListInspectionsResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match inspection_service::get_all_inspections() {
        Ok(inspections) => ListInspectionsResponse::Success(Json::from(inspections)),
        Err(_) => ListInspectionsResponse::DbError(BasicMessage::new(
            "Failed to pull inspections from database. Check server logs for details",
        )),
    }
}

#[put("/<id>", data = "<request>")]
pub fn update_inspection(
    id: u32,
    request: Json<UpdateInspectionRequest>,
    auth: Auth,
) -> UpdateInspectionResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return UpdateInspectionResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return UpdateInspectionResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match inspection_service::update_inspection(id, &request) {
        Ok(inspection) => UpdateInspectionResponse::Success(Json::from(inspection)),
        Err(UpdateInspectionError::NotFound) => UpdateInspectionResponse::NotFound(
            BasicMessage::new("The inspection with the passed id could not be found."),
        ),
        Err(UpdateInspectionError::DbError) => UpdateInspectionResponse::DbError(
            BasicMessage::new("Failed to update the inspection. Check server logs for details"),
        ),
    }
}

#[delete("/<id>")]
pub fn delete_inspection(id: u32, auth: Auth) -> DeleteInspectionResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return DeleteInspectionResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return DeleteInspectionResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match inspection_service::delete_inspection(id) {
        Ok(()) => DeleteInspectionResponse::Success(()),
        Err(DeleteInspectionError::NotFound) => DeleteInspectionResponse::NotFound(
            BasicMessage::new("The inspection with the passed id could not be found."),
        ),
        Err(DeleteInspectionError::DbError) => DeleteInspectionResponse::DbError(
            BasicMessage::new("Failed to delete the inspection. Check server logs for details"),
        ),
    }
}
