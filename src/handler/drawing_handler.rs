use rocket::form::Form;
use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::handler::{BAD_CREDENTIALS_MESSAGE, NO_USERS_MESSAGE};
use crate::model::error::drawing_errors::{DeleteDrawingError, UploadDrawingError};
use crate::model::error::storage_errors::StoreFileError;
use crate::model::request::drawing_requests::DrawingUploadForm;
use crate::model::response::drawing_responses::{
    DeleteDrawingResponse, ListDrawingsResponse, UploadDrawingResponse,
};
use crate::model::response::BasicMessage;
use crate::service::drawing_service;
use crate::service::storage_service;

#[post("/", data = "<form>")]
pub async fn upload_drawing(
    form: Form<DrawingUploadForm<'_>>,
    auth: Auth,
) -> UploadDrawingResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return UploadDrawingResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return UploadDrawingResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    let mut form = form.into_inner();
    let staged = match storage_service::stage_upload(&mut form.file).await {
        Ok(staged) => staged,
        Err(_) => {
            return UploadDrawingResponse::StorageError(BasicMessage::new(
                "Failed to stage the uploaded file. Check server logs for details",
            ))
        }
    };
    match drawing_service::upload_drawing(&form, &staged) {
        Ok(drawing) => UploadDrawingResponse::Success(Json::from(drawing)),
        Err(UploadDrawingError::TankNotFound) => UploadDrawingResponse::TankNotFound(
            BasicMessage::new("The tank with the passed id could not be found."),
        ),
        Err(UploadDrawingError::MissingDrawingType) => UploadDrawingResponse::BadRequest(
            BasicMessage::new("A drawing type is required."),
        ),
        Err(UploadDrawingError::Storage(e)) => storage_failure(e),
        Err(UploadDrawingError::DbError) => UploadDrawingResponse::DbError(BasicMessage::new(
            "Failed to save the drawing. Check server logs for details",
        )),
    }
}

#[get("/tank/<tank_id>")]
pub fn get_drawings_for_tank(tank_id: u32, auth: Auth) -> ListDrawingsResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return ListDrawingsResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return ListDrawingsResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match drawing_service::get_drawings_for_tank(tank_id) {
        Ok(drawings) => ListDrawingsResponse::Success(Json::from(drawings)),
        Err(_) => ListDrawingsResponse::DbError(BasicMessage::new(
            "Failed to pull drawings from database. Check server logs for details",
        )),
    }
}

#[delete("/<id>")]
pub fn delete_drawing(id: u32, auth: Auth) -> DeleteDrawingResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return DeleteDrawingResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return DeleteDrawingResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match drawing_service::delete_drawing(id) {
        Ok(()) => DeleteDrawingResponse::Success(()),
        Err(DeleteDrawingError::NotFound) => DeleteDrawingResponse::NotFound(BasicMessage::new(
            "The drawing with the passed id could not be found.",
        )),
        Err(DeleteDrawingError::DbError) => DeleteDrawingResponse::DbError(BasicMessage::new(
            "Failed to delete the drawing. Check server logs for details",
        )),
    }
}

fn storage_failure(e: StoreFileError) -> UploadDrawingResponse {
    match e {
        StoreFileError::PayloadTooLarge => UploadDrawingResponse::PayloadTooLarge(
            BasicMessage::new("The uploaded file is larger than the configured limit."),
        ),
        StoreFileError::MissingContentType => UploadDrawingResponse::UnsupportedMediaType(
            BasicMessage::new("The uploaded file did not declare a content type."),
        ),
        StoreFileError::UnsupportedMediaType(declared) => {
            UploadDrawingResponse::UnsupportedMediaType(BasicMessage::new(&format!(
                "Files of type {declared} are not accepted."
            )))
        }
        StoreFileError::FileSystemError => UploadDrawingResponse::StorageError(BasicMessage::new(
            "Failed to store the uploaded file. Check server logs for details",
        )),
    }
}
