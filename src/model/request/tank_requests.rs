use rocket::serde::{Deserialize, Serialize};

/// the technical detail block shared by create and update requests
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(crate = "rocket::serde")]
pub struct TankDetailsRequest {
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
    pub lease: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct CreateTankRequest {
    pub tank_number: String,
    pub status: Option<String>,
    pub created_by: Option<String>,
    pub details: Option<TankDetailsRequest>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct UpdateTankRequest {
    /// renaming the tank propagates to denormalized copies on dependents
    pub tank_number: Option<String>,
    pub status: Option<String>,
    pub updated_by: Option<String>,
    pub details: Option<TankDetailsRequest>,
}
