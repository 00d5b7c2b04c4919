use rocket::serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct CreateInspectionRequest {
    pub tank_id: u32,
    pub insp_2_5y_date: Option<String>,
    pub next_insp_date: Option<String>,
    pub tank_certificate: Option<String>,
    pub created_by: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct UpdateInspectionRequest {
    pub insp_2_5y_date: Option<String>,
    pub next_insp_date: Option<String>,
    pub tank_certificate: Option<String>,
    pub updated_by: Option<String>,
}
