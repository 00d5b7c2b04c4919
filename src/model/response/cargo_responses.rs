use rocket::serde::{json::Json, Deserialize, Serialize};

use crate::model::repository::{Cargo, CargoAssignment};
use crate::model::response::BasicMessage;

type NoContent = ();

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct CargoResponse {
    pub id: u32,
    pub cargo_reference: String,
}

impl From<&Cargo> for CargoResponse {
    fn from(value: &Cargo) -> Self {
        CargoResponse {
            id: value.id.unwrap(),
            cargo_reference: value.cargo_reference.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct CargoAssignmentResponse {
    pub id: u32,
    pub tank_id: u32,
    pub cargo_id: u32,
    pub cargo_reference: String,
}

impl From<&CargoAssignment> for CargoAssignmentResponse {
    fn from(value: &CargoAssignment) -> Self {
        CargoAssignmentResponse {
            id: value.id.unwrap(),
            tank_id: value.tank_id,
            cargo_id: value.cargo_id,
            cargo_reference: value.cargo_reference.clone(),
        }
    }
}

#[derive(Responder)]
pub enum CreateCargoResponse {
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    AlreadyExists(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 201)]
    Success(Json<CargoResponse>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum ListCargoResponse {
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<CargoResponse>>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum DeleteCargoResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum AssignCargoResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    AlreadyAssigned(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 201)]
    Success(Json<CargoAssignmentResponse>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum ListCargoAssignmentsResponse {
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<CargoAssignmentResponse>>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum UnassignCargoResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401)]
    Unauthorized(String),
}
