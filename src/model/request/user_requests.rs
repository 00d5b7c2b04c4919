use rocket::serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub hod: Option<String>,
    pub supervisor: Option<String>,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct LogoutRequest {
    pub emp_id: u32,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub hod: Option<String>,
    pub supervisor: Option<String>,
}
