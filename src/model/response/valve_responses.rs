use rocket::serde::{json::Json, Deserialize, Serialize};

use crate::model::repository::ValveReport;
use crate::model::response::BasicMessage;

type NoContent = ();

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ValveReportResponse {
    pub id: u32,
    pub tank_id: u32,
    pub report_file: Option<String>,
    pub test_date: Option<String>,
    pub inspected_by: Option<String>,
    pub remarks: Option<String>,
}

impl From<&ValveReport> for ValveReportResponse {
    fn from(value: &ValveReport) -> Self {
        ValveReportResponse {
            id: value.id.unwrap(),
            tank_id: value.tank_id,
            report_file: value.report_file.clone(),
            test_date: value.test_date.clone(),
            inspected_by: value.inspected_by.clone(),
            remarks: value.remarks.clone(),
        }
    }
}

#[derive(Responder)]
pub enum UploadValveReportResponse {
    #[response(status = 404, content_type = "json")]
    TankNotFound(Json<BasicMessage>),
    #[response(status = 413, content_type = "json")]
    PayloadTooLarge(Json<BasicMessage>),
    #[response(status = 415, content_type = "json")]
    UnsupportedMediaType(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    StorageError(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 201)]
    Success(Json<ValveReportResponse>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum GetValveReportResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<ValveReportResponse>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum ListValveReportsResponse {
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<ValveReportResponse>>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum UpdateValveReportResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 413, content_type = "json")]
    PayloadTooLarge(Json<BasicMessage>),
    #[response(status = 415, content_type = "json")]
    UnsupportedMediaType(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    StorageError(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<ValveReportResponse>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum DeleteValveReportResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401)]
    Unauthorized(String),
}
