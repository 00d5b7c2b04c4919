use rocket::serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct CargoRequest {
    pub cargo_reference: String,
    pub created_by: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct AssignCargoRequest {
    pub tank_id: u32,
    pub cargo_id: u32,
    pub created_by: Option<String>,
}
