use rocket::serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct RegulationRequest {
    pub regulation_name: String,
    pub created_by: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct LinkRegulationRequest {
    pub tank_id: u32,
    pub regulation_id: u32,
    pub initial_approval_no: Option<String>,
    pub created_by: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct UpdateTankRegulationRequest {
    pub regulation_id: u32,
    pub initial_approval_no: Option<String>,
    pub updated_by: Option<String>,
}
