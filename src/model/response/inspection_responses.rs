use rocket::serde::{json::Json, Deserialize, Serialize};

use crate::model::repository::Inspection;
use crate::model::response::BasicMessage;

type NoContent = ();

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct InspectionResponse {
    pub id: u32,
    pub tank_id: u32,
    pub insp_2_5y_date: Option<String>,
    pub next_insp_date: Option<String>,
    pub tank_certificate: Option<String>,
}

impl From<&Inspection> for InspectionResponse {
    fn from(value: &Inspection) -> Self {
        InspectionResponse {
            id: value.id.unwrap(),
            tank_id: value.tank_id,
            insp_2_5y_date: value.insp_2_5y_date.clone(),
            next_insp_date: value.next_insp_date.clone(),
            tank_certificate: value.tank_certificate.clone(),
        }
    }
}

#[derive(Responder)]
pub enum CreateInspectionResponse {
    #[response(status = 404, content_type = "json")]
    TankNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 201)]
    Success(Json<InspectionResponse>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum ListInspectionsResponse {
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<InspectionResponse>>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum UpdateInspectionResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<InspectionResponse>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum DeleteInspectionResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401)]
    Unauthorized(String),
}
