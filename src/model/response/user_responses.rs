use rocket::serde::{json::Json, Deserialize, Serialize};

use crate::model::repository::User;
use crate::model::response::BasicMessage;

type NoContent = ();

/// never carries password material
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct UserResponse {
    pub emp_id: u32,
    pub name: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub hod: Option<String>,
    pub supervisor: Option<String>,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(value: &User) -> Self {
        UserResponse {
            emp_id: value.emp_id,
            name: value.name.clone(),
            department: value.department.clone(),
            designation: value.designation.clone(),
            hod: value.hod.clone(),
            supervisor: value.supervisor.clone(),
            email: value.email.clone(),
        }
    }
}

#[derive(Responder)]
pub enum RegisterUserResponse {
    #[response(status = 400, content_type = "json")]
    EmailAlreadyExists(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 201)]
    Success(Json<UserResponse>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum LoginResponse {
    #[response(status = 401, content_type = "json")]
    BadCredentials(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<UserResponse>),
}

#[derive(Responder)]
pub enum LogoutResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200, content_type = "json")]
    Success(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum GetUserResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<UserResponse>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum ListUsersResponse {
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<Vec<UserResponse>>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum UpdateUserResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 200)]
    Success(Json<UserResponse>),
    #[response(status = 401)]
    Unauthorized(String),
}

#[derive(Responder)]
pub enum DeleteUserResponse {
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401)]
    Unauthorized(String),
}
