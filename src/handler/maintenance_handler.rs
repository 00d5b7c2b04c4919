use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::handler::{BAD_CREDENTIALS_MESSAGE, NO_USERS_MESSAGE};
use crate::model::error::maintenance_errors::SweepError;
use crate::model::response::maintenance_responses::{SweepResponse, SweepSummary};
use crate::model::response::BasicMessage;
use crate::service::maintenance_service;

#[post("/sweep/temp")]
pub fn sweep_temp(auth: Auth) -> SweepResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return SweepResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return SweepResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    let removed = maintenance_service::sweep_temp();
    SweepResponse::Success(Json::from(SweepSummary { removed }))
}

#[post("/sweep/orphans")]
pub fn sweep_orphans(auth: Auth) -> SweepResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return SweepResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return SweepResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match maintenance_service::sweep_orphans() {
        Ok(removed) => SweepResponse::Success(Json::from(SweepSummary { removed })),
        Err(SweepError::DbError) => SweepResponse::DbError(BasicMessage::new(
            "Failed to snapshot referenced files. Check server logs for details",
        )),
    }
}
