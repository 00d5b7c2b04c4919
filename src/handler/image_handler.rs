use rocket::form::Form;
use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::handler::{BAD_CREDENTIALS_MESSAGE, NO_USERS_MESSAGE};
use crate::model::error::image_errors::{DeleteImageError, GetImagesError, UploadImageError};
use crate::model::error::storage_errors::StoreFileError;
use crate::model::file_categories::FileCategory;
use crate::model::request::image_requests::ImageUploadForm;
use crate::model::response::image_responses::{
    DeleteImageResponse, DeletedCount, ImageTypeResponse, ListImageTypesResponse,
    ListImagesResponse, UploadImageResponse,
};
use crate::model::response::BasicMessage;
use crate::service::image_service;
use crate::service::storage_service;

/// the image categories the gallery accepts, in render order
#[get("/types")]
pub fn get_image_types(auth: Auth) -> ListImageTypesResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return ListImageTypesResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return ListImageTypesResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    let types = FileCategory::image_categories()
        .iter()
        .map(|c| ImageTypeResponse {
            slug: c.slug().to_string(),
            label: c.label().to_string(),
        })
        .collect::<Vec<ImageTypeResponse>>();
    ListImageTypesResponse::Success(Json::from(types))
}

#[post("/<tank_number>/<type_slug>", data = "<form>")]
pub async fn upload_image(
    tank_number: &str,
    type_slug: &str,
    form: Form<ImageUploadForm<'_>>,
    auth: Auth,
) -> UploadImageResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return UploadImageResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return UploadImageResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    let mut form = form.into_inner();
    let staged = match storage_service::stage_upload(&mut form.file).await {
        Ok(staged) => staged,
        Err(_) => {
            return UploadImageResponse::StorageError(BasicMessage::new(
                "Failed to stage the uploaded file. Check server logs for details",
            ))
        }
    };
    match image_service::upload_image(tank_number, type_slug, &staged, form.emp_id) {
        Ok(image) => UploadImageResponse::Success(Json::from(image)),
        Err(UploadImageError::TankNotFound) => UploadImageResponse::TankNotFound(
            BasicMessage::new("The tank with the passed number could not be found."),
        ),
        Err(UploadImageError::InvalidImageType(slug)) => UploadImageResponse::InvalidImageType(
            BasicMessage::new(&format!("{slug} is not a known image type.")),
        ),
        Err(UploadImageError::Storage(e)) => storage_failure(e),
        Err(UploadImageError::DbError) => UploadImageResponse::DbError(BasicMessage::new(
            "Failed to save the image record. Check server logs for details",
        )),
    }
}

#[get("/<tank_number>?<image_type>")]
pub fn get_images(
    tank_number: &str,
    image_type: Option<&str>,
    auth: Auth,
) -> ListImagesResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return ListImagesResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return ListImagesResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match image_service::get_images(tank_number, image_type) {
        Ok(images) => ListImagesResponse::Success(Json::from(images)),
        Err(GetImagesError::TankNotFound) => ListImagesResponse::TankNotFound(BasicMessage::new(
            "The tank with the passed number could not be found.",
        )),
        Err(GetImagesError::InvalidImageType(slug)) => ListImagesResponse::InvalidImageType(
            BasicMessage::new(&format!("{slug} is not a known image type.")),
        ),
        Err(GetImagesError::DbError) => ListImagesResponse::DbError(BasicMessage::new(
            "Failed to pull images from database. Check server logs for details",
        )),
    }
}

#[delete("/<tank_number>/<type_slug>/<date>")]
pub fn delete_image(
    tank_number: &str,
    type_slug: &str,
    date: &str,
    auth: Auth,
) -> DeleteImageResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return DeleteImageResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return DeleteImageResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match image_service::delete_image(tank_number, type_slug, date) {
        Ok(deleted_count) => DeleteImageResponse::Success(Json::from(DeletedCount {
            deleted_count,
        })),
        Err(DeleteImageError::TankNotFound) => DeleteImageResponse::NotFound(BasicMessage::new(
            "The tank with the passed number could not be found.",
        )),
        Err(DeleteImageError::NotFound) => DeleteImageResponse::NotFound(BasicMessage::new(
            "No image exists for that tank, type, and date.",
        )),
        Err(DeleteImageError::InvalidImageType(slug)) => DeleteImageResponse::BadRequest(
            BasicMessage::new(&format!("{slug} is not a known image type.")),
        ),
        Err(DeleteImageError::BadDate) => DeleteImageResponse::BadRequest(BasicMessage::new(
            "Dates must be in YYYY-MM-DD format.",
        )),
        Err(DeleteImageError::DbError) => DeleteImageResponse::DbError(BasicMessage::new(
            "Failed to delete the image. Check server logs for details",
        )),
    }
}

#[delete("/<tank_number>")]
pub fn delete_images_for_tank(tank_number: &str, auth: Auth) -> DeleteImageResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return DeleteImageResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return DeleteImageResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match image_service::delete_images_for_tank(tank_number) {
        Ok(deleted_count) => DeleteImageResponse::Success(Json::from(DeletedCount {
            deleted_count,
        })),
        Err(DeleteImageError::TankNotFound) => DeleteImageResponse::NotFound(BasicMessage::new(
            "The tank with the passed number could not be found.",
        )),
        Err(_) => DeleteImageResponse::DbError(BasicMessage::new(
            "Failed to clear the tank gallery. Check server logs for details",
        )),
    }
}

fn storage_failure(e: StoreFileError) -> UploadImageResponse {
    match e {
        StoreFileError::PayloadTooLarge => UploadImageResponse::PayloadTooLarge(BasicMessage::new(
            "The uploaded file is larger than the configured limit.",
        )),
        StoreFileError::MissingContentType => UploadImageResponse::UnsupportedMediaType(
            BasicMessage::new("The uploaded file did not declare a content type."),
        ),
        StoreFileError::UnsupportedMediaType(declared) => {
            UploadImageResponse::UnsupportedMediaType(BasicMessage::new(&format!(
                "Files of type {declared} are not accepted."
            )))
        }
        StoreFileError::FileSystemError => UploadImageResponse::StorageError(BasicMessage::new(
            "Failed to store the uploaded file. Check server logs for details",
        )),
    }
}
