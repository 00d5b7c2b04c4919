use rocket::serde::{json::Json, Deserialize, Serialize};

use crate::model::file_categories::FileCategory;
use crate::model::repository::TankImage;
use crate::model::response::BasicMessage;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ImageTypeResponse {
    pub slug: String,
    pub label: String,
}

/// one gallery entry; `uploaded` is false for placeholder slots the client
/// should render as empty
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct TankImageResponse {
    pub id: Option<u32>,
    pub tank_number: String,
    pub image_type: String,
    pub image_label: String,
    pub image_path: Option<String>,
    pub created_date: Option<String>,
    pub uploaded: bool,
    pub filename: Option<String>,
    pub emp_id: Option<u32>,
}

impl From<&TankImage> for TankImageResponse {
    fn from(value: &TankImage) -> Self {
        let label = FileCategory::from_slug(&value.image_type)
            .map(|c| c.label().to_string())
            .unwrap_or_else(|| value.image_type.clone());
        TankImageResponse {
            id: value.id,
            tank_number: value.tank_number.clone(),
            image_type: value.image_type.clone(),
            image_label: label,
            image_path: Some(value.image_path.clone()),
            created_date: Some(value.created_date.clone()),
            uploaded: true,
            filename: value.image_path.rsplit('/').next().map(String::from),
            emp_id: value.emp_id,
        }
    }
}

impl TankImageResponse {
    /// placeholder entry for an image type with no upload
    pub fn empty(tank_number: &str, category: FileCategory) -> TankImageResponse {
        TankImageResponse {
            id: None,
            tank_number: tank_number.to_string(),
            image_type: category.slug().to_string(),
            image_label: category.label().to_string(),
            image_path: None,
            created_date: None,
            uploaded: false,
            filename: None,
            emp_id: None,
        }
    }
}

#[derive(Responder)]
pub enum ListImageTypesResponse {
    #[response(status = 200)]
    Success(Json<Vec<ImageTypeResponse>>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum UploadImageResponse {
    #[response(status = 404, content_type = "json")]
    TankNotFound(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    InvalidImageType(Json<BasicMessage>),
    #[response(status = 413, content_type = "json")]
    PayloadTooLarge(Json<BasicMessage>),
    #[response(status = 415, content_type = "json")]
    UnsupportedMediaType(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    StorageError(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 201)]
    Success(Json<TankImageResponse>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum ListImagesResponse {
    #[response(status = 404, content_type = "json")]
    TankNotFound(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    InvalidImageType(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<TankImageResponse>>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum DeleteImageResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200, content_type = "json")]
    Success(Json<DeletedCount>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct DeletedCount {
    pub deleted_count: u32,
}
