use rocket::serde::{json::Json, Deserialize, Serialize};

use crate::model::repository::Certificate;
use crate::model::response::BasicMessage;

type NoContent = ();

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct CertificateResponse {
    pub id: u32,
    pub tank_id: u32,
    pub tank_number: String,
    pub certificate_number: String,
    pub year_of_manufacturing: Option<String>,
    pub insp_2_5y_date: Option<String>,
    pub next_insp_date: Option<String>,
    pub inspection_agency: Option<String>,
    pub certificate_file: Option<String>,
}

impl From<&Certificate> for CertificateResponse {
    fn from(value: &Certificate) -> Self {
        CertificateResponse {
            id: value.id.unwrap(),
            tank_id: value.tank_id,
            tank_number: value.tank_number.clone(),
            certificate_number: value.certificate_number.clone(),
            year_of_manufacturing: value.year_of_manufacturing.clone(),
            insp_2_5y_date: value.insp_2_5y_date.clone(),
            next_insp_date: value.next_insp_date.clone(),
            inspection_agency: value.inspection_agency.clone(),
            certificate_file: value.certificate_file.clone(),
        }
    }
}

#[derive(Responder)]
pub enum CreateCertificateResponse {
    #[response(status = 404, content_type = "json")]
    TankNotFound(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    NumberAlreadyExists(Json<BasicMessage>),
    #[response(status = 413, content_type = "json")]
    PayloadTooLarge(Json<BasicMessage>),
    #[response(status = 415, content_type = "json")]
    UnsupportedMediaType(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    StorageError(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 201)]
    Success(Json<CertificateResponse>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum GetCertificateResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<CertificateResponse>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum ListCertificatesResponse {
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<CertificateResponse>>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum UpdateCertificateResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    NumberAlreadyExists(Json<BasicMessage>),
    #[response(status = 413, content_type = "json")]
    PayloadTooLarge(Json<BasicMessage>),
    #[response(status = 415, content_type = "json")]
    UnsupportedMediaType(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    StorageError(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<CertificateResponse>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum DeleteCertificateResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401)]
    Unauthorized(String),
}
