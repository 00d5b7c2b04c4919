use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::handler::{BAD_CREDENTIALS_MESSAGE, NO_USERS_MESSAGE};
use crate::model::error::regulation_errors::{
    CreateRegulationError, DeleteRegulationError, LinkRegulationError, UpdateRegulationError,
};
use crate::model::request::regulation_requests::{
    LinkRegulationRequest, RegulationRequest, UpdateTankRegulationRequest,
};
use crate::model::response::regulation_responses::{
    CreateRegulationResponse, DeleteRegulationResponse, LinkRegulationResponse,
    ListRegulationsResponse, ListTankRegulationsResponse, UnlinkRegulationResponse,
    UpdateRegulationResponse, UpdateTankRegulationResponse,
};
use crate::model::response::BasicMessage;
use crate::service::regulation_service;

#[post("/", data = "<request>")]
pub fn create_regulation(request: Json<RegulationRequest>, auth: Auth) -> CreateRegulationResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return CreateRegulationResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return CreateRegulationResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match regulation_service::create_regulation(&request) {
        Ok(regulation) => CreateRegulationResponse::Success(Json::from(regulation)),
        Err(CreateRegulationError::MissingName) => CreateRegulationResponse::BadRequest(
            BasicMessage::new("A regulation name is required."),
        ),
        Err(CreateRegulationError::AlreadyExists) => CreateRegulationResponse::AlreadyExists(
            BasicMessage::new("A regulation with that name already exists."),
        ),
        Err(CreateRegulationError::DbError) => CreateRegulationResponse::DbError(
            BasicMessage::new("Failed to save the regulation. Check server logs for details"),
        ),
    }
}

#[get("/")]
pub fn get_regulations(auth: Auth) -> ListRegulationsResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return ListRegulationsResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return ListRegulationsResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match regulation_service::get_all_regulations() {
        Ok(regulations) => ListRegulationsResponse::Success(Json::from(regulations)),
        Err(_) => ListRegulationsResponse::DbError(BasicMessage::new(
            "Failed to pull regulations from database. Check server logs for details",
        )),
    }
}

#[put("/<id>", data = "<request>")]
pub fn update_regulation(
    id: u32,
    request: Json<RegulationRequest>,
    auth: Auth,
) -> UpdateRegulationResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return UpdateRegulationResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return UpdateRegulationResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match regulation_service::update_regulation(id, &request) {
        Ok(regulation) => UpdateRegulationResponse::Success(Json::from(regulation)),
        Err(UpdateRegulationError::NotFound) => UpdateRegulationResponse::NotFound(
            BasicMessage::new("The regulation with the passed id could not be found."),
        ),
        Err(UpdateRegulationError::AlreadyExists) => UpdateRegulationResponse::AlreadyExists(
            BasicMessage::new("A regulation with that name already exists."),
        ),
        Err(UpdateRegulationError::DbError) => UpdateRegulationResponse::DbError(
            BasicMessage::new("Failed to update the regulation. Check server logs for details"),
        ),
    }
}

#[delete("/<id>")]
pub fn delete_regulation(id: u32, auth: Auth) -> DeleteRegulationResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return DeleteRegulationResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return DeleteRegulationResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match regulation_service::delete_regulation(id) {
        Ok(()) => DeleteRegulationResponse::Success(()),
        Err(DeleteRegulationError::NotFound) => DeleteRegulationResponse::NotFound(
            BasicMessage::new("The regulation with the passed id could not be found."),
        ),
        Err(DeleteRegulationError::DbError) => DeleteRegulationResponse::DbError(
            BasicMessage::new("Failed to delete the regulation. Check server logs for details"),
        ),
    }
}

#[post("/links", data = "<request>")]
pub fn link_regulation(
    request: Json<LinkRegulationRequest>,
    auth: Auth,
) -> LinkRegulationResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return LinkRegulationResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return LinkRegulationResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match regulation_service::link_regulation(&request) {
        Ok(link) => LinkRegulationResponse::Success(Json::from(link)),
        Err(LinkRegulationError::TankNotFound) => LinkRegulationResponse::NotFound(
            BasicMessage::new("The tank with the passed id could not be found."),
        ),
        Err(LinkRegulationError::RegulationNotFound) => LinkRegulationResponse::NotFound(
            BasicMessage::new("The regulation with the passed id could not be found."),
        ),
        Err(LinkRegulationError::AlreadyLinked) => LinkRegulationResponse::AlreadyLinked(
            BasicMessage::new("That regulation is already linked to the tank."),
        ),
        Err(LinkRegulationError::DbError) => LinkRegulationResponse::DbError(BasicMessage::new(
            "Failed to link the regulation. Check server logs for details",
        )),
    }
}

#[get("/links/tank/<tank_id>")]
pub fn get_regulations_for_tank(tank_id: u32, auth: Auth) -> ListTankRegulationsResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return ListTankRegulationsResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return ListTankRegulationsResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match regulation_service::get_links_for_tank(tank_id) {
        Ok(links) => ListTankRegulationsResponse::Success(Json::from(links)),
        Err(_) => ListTankRegulationsResponse::DbError(BasicMessage::new(
            "Failed to pull tank regulations from database. Check server logs for details",
        )),
    }
}

#[put("/links/<id>", data = "<request>")]
pub fn update_tank_regulation(
    id: u32,
    request: Json<UpdateTankRegulationRequest>,
    auth: Auth,
) -> UpdateTankRegulationResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return UpdateTankRegulationResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return UpdateTankRegulationResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match regulation_service::update_link(id, &request) {
        Ok(link) => UpdateTankRegulationResponse::Success(Json::from(link)),
        Err(UpdateRegulationError::NotFound) => UpdateTankRegulationResponse::NotFound(
            BasicMessage::new("The tank regulation with the passed id could not be found."),
        ),
        Err(_) => UpdateTankRegulationResponse::DbError(BasicMessage::new(
            "Failed to update the tank regulation. Check server logs for details",
        )),
    }
}

#[delete("/links/<id>")]
pub fn unlink_regulation(id: u32, auth: Auth) -> UnlinkRegulationResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return UnlinkRegulationResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return UnlinkRegulationResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match regulation_service::unlink_regulation(id) {
        Ok(()) => UnlinkRegulationResponse::Success(()),
        Err(DeleteRegulationError::NotFound) => UnlinkRegulationResponse::NotFound(
            BasicMessage::new("The tank regulation with the passed id could not be found."),
        ),
        Err(DeleteRegulationError::DbError) => UnlinkRegulationResponse::DbError(
            BasicMessage::new("Failed to unlink the regulation. Check server logs for details"),
        ),
    }
}
