use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

pub mod cargo_responses;
pub mod certificate_responses;
pub mod drawing_responses;
pub mod image_responses;
pub mod inspection_responses;
pub mod maintenance_responses;
pub mod regulation_responses;
pub mod report_responses;
pub mod tank_responses;
pub mod user_responses;
pub mod valve_responses;

/// represents a basic json message
#[derive(Responder, Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct BasicMessage {
    pub message: String,
}

impl BasicMessage {
    pub fn new(message: &str) -> Json<BasicMessage> {
        Json::from(BasicMessage {
            message: message.to_string(),
        })
    }
}

impl From<&str> for BasicMessage {
    fn from(value: &str) -> Self {
        Self {
            message: value.to_string(),
        }
    }
}

impl From<String> for BasicMessage {
    fn from(value: String) -> Self {
        Self { message: value }
    }
}
