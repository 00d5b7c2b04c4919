use rocket::serde::{json::Json, Deserialize, Serialize};

use crate::model::response::BasicMessage;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct SweepSummary {
    pub removed: u32,
}

#[derive(Responder)]
pub enum SweepResponse {
    #[response(status = 500, content_type = "json")]
    FileSystemError(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200, content_type = "json")]
    Success(Json<SweepSummary>),
    #[response(status = 401)]
    Unauthorized(String),
}
