use rocket::form::Form;
use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::handler::{BAD_CREDENTIALS_MESSAGE, NO_USERS_MESSAGE};
use crate::model::error::storage_errors::StoreFileError;
use crate::model::error::valve_errors::{
    CreateValveReportError, DeleteValveReportError, UpdateValveReportError,
};
use crate::model::request::valve_requests::{ValveReportUpdateForm, ValveReportUploadForm};
use crate::model::response::valve_responses::{
    DeleteValveReportResponse, GetValveReportResponse, ListValveReportsResponse,
    UpdateValveReportResponse, UploadValveReportResponse,
};
use crate::model::response::BasicMessage;
use crate::service::storage_service;
use crate::service::storage_service::StagedUpload;
use crate::service::valve_service;

#[post("/", data = "<form>")]
pub async fn create_valve_report(
    form: Form<ValveReportUploadForm<'_>>,
    auth: Auth,
) -> UploadValveReportResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return UploadValveReportResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return UploadValveReportResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    let mut form = form.into_inner();
    let staged = match stage_optional(form.file.as_mut()).await {
        Ok(staged) => staged,
        Err(_) => {
            return UploadValveReportResponse::StorageError(BasicMessage::new(
                "Failed to stage the uploaded file. Check server logs for details",
            ))
        }
    };
    match valve_service::create_report(&form, staged.as_ref()) {
        Ok(report) => UploadValveReportResponse::Success(Json::from(report)),
        Err(CreateValveReportError::TankNotFound) => UploadValveReportResponse::TankNotFound(
            BasicMessage::new("The tank with the passed id could not be found."),
        ),
        Err(CreateValveReportError::Storage(e)) => storage_failure_create(e),
        Err(CreateValveReportError::DbError) => UploadValveReportResponse::DbError(
            BasicMessage::new("Failed to save the valve test report. Check server logs for details"),
        ),
    }
}

#[get("/<id>")]
pub fn get_valve_report(id: u32, auth: Auth) -> GetValveReportResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return GetValveReportResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return GetValveReportResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match valve_service::get_report(id) {
        Ok(report) => GetValveReportResponse::Success(Json::from(report)),
        Err(UpdateValveReportError::NotFound) => GetValveReportResponse::NotFound(
            BasicMessage::new("The valve test report with the passed id could not be found."),
        ),
        Err(_) => GetValveReportResponse::DbError(BasicMessage::new(
            "Failed to pull valve test report from database. Check server logs for details",
        )),
    }
}

#[get("/tank/<tank_id>")]
pub fn get_valve_reports_for_tank(tank_id: u32, auth: Auth) -> ListValveReportsResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return ListValveReportsResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return ListValveReportsResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match valve_service::get_reports_for_tank(tank_id) {
        Ok(reports) => ListValveReportsResponse::Success(Json::from(reports)),
        Err(_) => ListValveReportsResponse::DbError(BasicMessage::new(
            "Failed to pull valve test reports from database. Check server logs for details",
        )),
    }
}

#[put("/<id>", data = "<form>")]
pub async fn update_valve_report(
    id: u32,
    form: Form<ValveReportUpdateForm<'_>>,
    auth: Auth,
) -> UpdateValveReportResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return UpdateValveReportResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return UpdateValveReportResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    let mut form = form.into_inner();
    let staged = match stage_optional(form.file.as_mut()).await {
        Ok(staged) => staged,
        Err(_) => {
            return UpdateValveReportResponse::StorageError(BasicMessage::new(
                "Failed to stage the uploaded file. Check server logs for details",
            ))
        }
    };
    match valve_service::update_report(id, &form, staged.as_ref()) {
        Ok(report) => UpdateValveReportResponse::Success(Json::from(report)),
        Err(UpdateValveReportError::NotFound) => UpdateValveReportResponse::NotFound(
            BasicMessage::new("The valve test report with the passed id could not be found."),
        ),
        Err(UpdateValveReportError::Storage(e)) => storage_failure_update(e),
        Err(UpdateValveReportError::DbError) => UpdateValveReportResponse::DbError(
            BasicMessage::new(
                "Failed to update the valve test report. Check server logs for details",
            ),
        ),
    }
}

#[delete("/<id>")]
pub fn delete_valve_report(id: u32, auth: Auth) -> DeleteValveReportResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return DeleteValveReportResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return DeleteValveReportResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match valve_service::delete_report(id) {
        Ok(()) => DeleteValveReportResponse::Success(()),
        Err(DeleteValveReportError::NotFound) => DeleteValveReportResponse::NotFound(
            BasicMessage::new("The valve test report with the passed id could not be found."),
        ),
        Err(DeleteValveReportError::DbError) => DeleteValveReportResponse::DbError(
            BasicMessage::new(
                "Failed to delete the valve test report. Check server logs for details",
            ),
        ),
    }
}

async fn stage_optional(
    file: Option<&mut rocket::fs::TempFile<'_>>,
) -> Result<Option<StagedUpload>, StoreFileError> {
    match file {
        Some(file) => Ok(Some(storage_service::stage_upload(file).await?)),
        None => Ok(None),
    }
}

fn storage_failure_create(e: StoreFileError) -> UploadValveReportResponse {
    match e {
        StoreFileError::PayloadTooLarge => UploadValveReportResponse::PayloadTooLarge(
            BasicMessage::new("The uploaded file is larger than the configured limit."),
        ),
        StoreFileError::MissingContentType => UploadValveReportResponse::UnsupportedMediaType(
            BasicMessage::new("The uploaded file did not declare a content type."),
        ),
        StoreFileError::UnsupportedMediaType(declared) => {
            UploadValveReportResponse::UnsupportedMediaType(BasicMessage::new(&format!(
                "Files of type {declared} are not accepted."
            )))
        }
        StoreFileError::FileSystemError => UploadValveReportResponse::StorageError(
            BasicMessage::new("Failed to store the uploaded file. Check server logs for details"),
        ),
    }
}

fn storage_failure_update(e: StoreFileError) -> UpdateValveReportResponse {
    match e {
        StoreFileError::PayloadTooLarge => UpdateValveReportResponse::PayloadTooLarge(
            BasicMessage::new("The uploaded file is larger than the configured limit."),
        ),
        StoreFileError::MissingContentType => UpdateValveReportResponse::UnsupportedMediaType(
            BasicMessage::new("The uploaded file did not declare a content type."),
        ),
        StoreFileError::UnsupportedMediaType(declared) => {
            UpdateValveReportResponse::UnsupportedMediaType(BasicMessage::new(&format!(
                "Files of type {declared} are not accepted."
            )))
        }
        StoreFileError::FileSystemError => UpdateValveReportResponse::StorageError(
            BasicMessage::new("Failed to store the uploaded file. Check server logs for details"),
        ),
    }
}
