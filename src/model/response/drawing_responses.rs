use rocket::serde::{json::Json, Deserialize, Serialize};

use crate::model::repository::Drawing;
use crate::model::response::BasicMessage;

type NoContent = ();

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct DrawingResponse {
    pub id: u32,
    pub tank_id: u32,
    pub drawing_type: String,
    pub description: Option<String>,
    pub file_path: String,
    pub original_filename: String,
    pub created_at: Option<String>,
}

impl From<&Drawing> for DrawingResponse {
    fn from(value: &Drawing) -> Self {
        DrawingResponse {
            id: value.id.unwrap(),
            tank_id: value.tank_id,
            drawing_type: value.drawing_type.clone(),
            description: value.description.clone(),
            file_path: value.file_path.clone(),
            original_filename: value.original_filename.clone(),
            created_at: value.created_at.clone(),
        }
    }
}

#[derive(Responder)]
pub enum UploadDrawingResponse {
    #[response(status = 404, content_type = "json")]
    TankNotFound(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 413, content_type = "json")]
    PayloadTooLarge(Json<BasicMessage>),
    #[response(status = 415, content_type = "json")]
    UnsupportedMediaType(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    StorageError(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 201)]
    Success(Json<DrawingResponse>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum ListDrawingsResponse {
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<DrawingResponse>>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum DeleteDrawingResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401)]
    Unauthorized(String),
}
