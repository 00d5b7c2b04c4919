use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::handler::{BAD_CREDENTIALS_MESSAGE, NO_USERS_MESSAGE};
use crate::model::error::report_errors::GenerateReportError;
use crate::model::request::report_requests::GenerateReportRequest;
use crate::model::response::report_responses::GenerateReportResponse;
use crate::model::response::BasicMessage;
use crate::service::report_service;

#[post("/", data = "<request>")]
pub fn generate_report(request: Json<GenerateReportRequest>, auth: Auth) -> GenerateReportResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return GenerateReportResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return GenerateReportResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match report_service::generate_report(request.tank_id) {
        Ok(report) => GenerateReportResponse::Success(Json::from(report)),
        Err(GenerateReportError::TankNotFound) => GenerateReportResponse::TankNotFound(
            BasicMessage::new("The tank with the passed id could not be found."),
        ),
        Err(GenerateReportError::DbError) => GenerateReportResponse::DbError(BasicMessage::new(
            "Failed to gather report data. Check server logs for details",
        )),
        Err(GenerateReportError::FileSystemError) => GenerateReportResponse::FileSystemError(
            BasicMessage::new("Failed to write the report document. Check server logs for details"),
        ),
    }
}
