use rocket::form::Form;
use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::handler::{BAD_CREDENTIALS_MESSAGE, NO_USERS_MESSAGE};
use crate::model::error::certificate_errors::{
    CreateCertificateError, DeleteCertificateError, GetCertificateError, UpdateCertificateError,
};
use crate::model::error::storage_errors::StoreFileError;
use crate::model::request::certificate_requests::{CertificateUpdateForm, CertificateUploadForm};
use crate::model::response::certificate_responses::{
    CreateCertificateResponse, DeleteCertificateResponse, GetCertificateResponse,
    ListCertificatesResponse, UpdateCertificateResponse,
};
use crate::model::response::BasicMessage;
use crate::service::certificate_service;
use crate::service::storage_service;
use crate::service::storage_service::StagedUpload;

#[post("/", data = "<form>")]
pub async fn create_certificate(
    form: Form<CertificateUploadForm<'_>>,
    auth: Auth,
) -> CreateCertificateResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return CreateCertificateResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return CreateCertificateResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    let mut form = form.into_inner();
    let staged = match stage_optional(form.file.as_mut()).await {
        Ok(staged) => staged,
        Err(_) => {
            return CreateCertificateResponse::StorageError(BasicMessage::new(
                "Failed to stage the uploaded file. Check server logs for details",
            ))
        }
    };
    match certificate_service::create_certificate(&form, staged.as_ref()) {
        Ok(certificate) => CreateCertificateResponse::Success(Json::from(certificate)),
        Err(CreateCertificateError::TankNotFound) => CreateCertificateResponse::TankNotFound(
            BasicMessage::new("The tank with the passed id could not be found."),
        ),
        Err(CreateCertificateError::MissingCertificateNumber) => {
            CreateCertificateResponse::BadRequest(BasicMessage::new(
                "A certificate number is required.",
            ))
        }
        Err(CreateCertificateError::NumberAlreadyExists) => {
            CreateCertificateResponse::NumberAlreadyExists(BasicMessage::new(
                "A certificate with that number already exists.",
            ))
        }
        Err(CreateCertificateError::Storage(e)) => storage_failure_create(e),
        Err(CreateCertificateError::DbError) => CreateCertificateResponse::DbError(
            BasicMessage::new("Failed to save the certificate. Check server logs for details"),
        ),
    }
}

#[get("/<id>")]
pub fn get_certificate(id: u32, auth: Auth) -> GetCertificateResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return GetCertificateResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return GetCertificateResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match certificate_service::get_certificate(id) {
        Ok(certificate) => GetCertificateResponse::Success(Json::from(certificate)),
        Err(GetCertificateError::NotFound) => GetCertificateResponse::NotFound(BasicMessage::new(
            "The certificate with the passed id could not be found.",
        )),
        Err(GetCertificateError::DbError) => GetCertificateResponse::DbError(BasicMessage::new(
            "Failed to pull certificate info from database. Check server logs for details",
        )),
    }
}

#[get("/tank/<tank_id>")]
pub fn get_certificates_for_tank(tank_id: u32, auth: Auth) -> ListCertificatesResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return ListCertificatesResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return ListCertificatesResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match certificate_service::get_certificates_for_tank(tank_id) {
        Ok(certificates) => ListCertificatesResponse::Success(Json::from(certificates)),
        Err(_) => ListCertificatesResponse::DbError(BasicMessage::new(
            "Failed to pull certificates from database. Check server logs for details",
        )),
    }
}

#[put("/<id>", data = "<form>")]
pub async fn update_certificate(
    id: u32,
    form: Form<CertificateUpdateForm<'_>>,
    auth: Auth,
) -> UpdateCertificateResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return UpdateCertificateResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return UpdateCertificateResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    let mut form = form.into_inner();
    let staged = match stage_optional(form.file.as_mut()).await {
        Ok(staged) => staged,
        Err(_) => {
            return UpdateCertificateResponse::StorageError(BasicMessage::new(
                "Failed to stage the uploaded file. Check server logs for details",
            ))
        }
    };
    match certificate_service::update_certificate(id, &form, staged.as_ref()) {
        Ok(certificate) => UpdateCertificateResponse::Success(Json::from(certificate)),
        Err(UpdateCertificateError::NotFound) => UpdateCertificateResponse::NotFound(
            BasicMessage::new("The certificate with the passed id could not be found."),
        ),
        Err(UpdateCertificateError::NumberAlreadyExists) => {
            UpdateCertificateResponse::NumberAlreadyExists(BasicMessage::new(
                "A certificate with that number already exists.",
            ))
        }
        Err(UpdateCertificateError::Storage(e)) => storage_failure_update(e),
        Err(UpdateCertificateError::DbError) => UpdateCertificateResponse::DbError(
            BasicMessage::new("Failed to update the certificate. Check server logs for details"),
        ),
    }
}

#[delete("/<id>")]
pub fn delete_certificate(id: u32, auth: Auth) -> DeleteCertificateResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return DeleteCertificateResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return DeleteCertificateResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match certificate_service::delete_certificate(id) {
        Ok(()) => DeleteCertificateResponse::Success(()),
        Err(DeleteCertificateError::NotFound) => DeleteCertificateResponse::NotFound(
            BasicMessage::new("The certificate with the passed id could not be found."),
        ),
        Err(DeleteCertificateError::DbError) => DeleteCertificateResponse::DbError(
            BasicMessage::new("Failed to delete the certificate. Check server logs for details"),
        ),
    }
}

/// stages the attachment when the form carried one
async fn stage_optional(
    file: Option<&mut rocket::fs::TempFile<'_>>,
) -> Result<Option<StagedUpload>, StoreFileError> {
    match file {
        Some(file) => Ok(Some(storage_service::stage_upload(file).await?)),
        None => Ok(None),
    }
}

fn storage_failure_create(e: StoreFileError) -> CreateCertificateResponse {
    match e {
        StoreFileError::PayloadTooLarge => CreateCertificateResponse::PayloadTooLarge(
            BasicMessage::new("The uploaded file is larger than the configured limit."),
        ),
        StoreFileError::MissingContentType => CreateCertificateResponse::UnsupportedMediaType(
            BasicMessage::new("The uploaded file did not declare a content type."),
        ),
        StoreFileError::UnsupportedMediaType(declared) => {
            CreateCertificateResponse::UnsupportedMediaType(BasicMessage::new(&format!(
                "Files of type {declared} are not accepted."
            )))
        }
        StoreFileError::FileSystemError => CreateCertificateResponse::StorageError(
            BasicMessage::new("Failed to store the uploaded file. Check server logs for details"),
        ),
    }
}

fn storage_failure_update(e: StoreFileError) -> UpdateCertificateResponse {
    match e {
        StoreFileError::PayloadTooLarge => UpdateCertificateResponse::PayloadTooLarge(
            BasicMessage::new("The uploaded file is larger than the configured limit."),
        ),
        StoreFileError::MissingContentType => UpdateCertificateResponse::UnsupportedMediaType(
            BasicMessage::new("The uploaded file did not declare a content type."),
        ),
        StoreFileError::UnsupportedMediaType(declared) => {
            UpdateCertificateResponse::UnsupportedMediaType(BasicMessage::new(&format!(
                "Files of type {declared} are not accepted."
            )))
        }
        StoreFileError::FileSystemError => UpdateCertificateResponse::StorageError(
            BasicMessage::new("Failed to store the uploaded file. Check server logs for details"),
        ),
    }
}
