use rocket::serde::{json::Json, Deserialize, Serialize};

use crate::model::repository::{Tank, TankDetails};
use crate::model::response::BasicMessage;

type NoContent = ();

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct TankDetailsResponse {
    pub mfgr: Option<String>,
    pub date_mfg: Option<String>,
    pub pv_code: Option<String>,
    pub un_iso_code: Option<String>,
    pub capacity_l: Option<f64>,
    pub mawp: Option<f64>,
    pub design_temperature: Option<String>,
    pub tare_weight_kg: Option<f64>,
    pub mgw_kg: Option<f64>,
    pub size: Option<String>,
    pub pump_type: Option<String>,
    pub vessel_material: Option<String>,
    pub color_body_frame: Option<String>,
    pub remark: Option<String>,
    pub lease: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct TankResponse {
    pub id: u32,
    pub tank_number: String,
    pub status: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub details: Option<TankDetailsResponse>,
}

impl From<&TankDetails> for TankDetailsResponse {
    fn from(value: &TankDetails) -> Self {
        TankDetailsResponse {
            mfgr: value.mfgr.clone(),
            date_mfg: value.date_mfg.clone(),
            pv_code: value.pv_code.clone(),
            un_iso_code: value.un_iso_code.clone(),
            capacity_l: value.capacity_l,
            mawp: value.mawp,
            design_temperature: value.design_temperature.clone(),
            tare_weight_kg: value.tare_weight_kg,
            mgw_kg: value.mgw_kg,
            size: value.size.clone(),
            pump_type: value.pump_type.clone(),
            vessel_material: value.vessel_material.clone(),
            color_body_frame: value.color_body_frame.clone(),
            remark: value.remark.clone(),
            lease: value.lease,
        }
    }
}

impl TankResponse {
    pub fn from(tank: &Tank, details: Option<&TankDetails>) -> TankResponse {
        TankResponse {
            // always present when coming from the database
            id: tank.id.unwrap(),
            tank_number: tank.tank_number.clone(),
            status: tank.status.clone(),
            created_by: tank.created_by.clone(),
            updated_by: tank.updated_by.clone(),
            details: details.map(TankDetailsResponse::from),
        }
    }
}

#[derive(Responder)]
pub enum CreateTankResponse {
    #[response(status = 400, content_type = "json")]
    AlreadyExists(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 201)]
    Success(Json<TankResponse>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum GetTankResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<TankResponse>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum ListTanksResponse {
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<TankResponse>>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum UpdateTankResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 400, content_type = "json")]
    NumberAlreadyExists(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<TankResponse>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum DeleteTankResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401)]
    Unauthorized(String),
}
