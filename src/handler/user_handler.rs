use rocket::serde::json::Json;

use crate::guard::{Auth, ValidateResult};
use crate::handler::{BAD_CREDENTIALS_MESSAGE, NO_USERS_MESSAGE};
use crate::model::error::user_errors::{
    DeleteUserError, GetUserError, LoginError, LogoutError, RegisterUserError, UpdateUserError,
};
use crate::model::request::user_requests::{
    LoginRequest, LogoutRequest, RegisterRequest, UpdateUserRequest,
};
use crate::model::response::user_responses::{
    DeleteUserResponse, GetUserResponse, ListUsersResponse, LoginResponse, LogoutResponse,
    RegisterUserResponse, UpdateUserResponse,
};
use crate::model::response::BasicMessage;
use crate::service::user_service;

/// registration is open so the very first account can be created; every other
/// endpoint demands credentials
#[post("/", data = "<request>")]
pub fn register_user(request: Json<RegisterRequest>) -> RegisterUserResponse {
    match user_service::register(&request) {
        Ok(user) => RegisterUserResponse::Success(Json::from(user)),
        Err(RegisterUserError::EmailAlreadyExists) => RegisterUserResponse::EmailAlreadyExists(
            BasicMessage::new("An account with that email already exists."),
        ),
        Err(RegisterUserError::IdAssignmentFailed) | Err(RegisterUserError::DbError) => {
            RegisterUserResponse::DbError(BasicMessage::new(
                "Failed to create the account. Check server logs for details",
            ))
        }
    }
}

#[post("/login", data = "<request>")]
pub fn login(request: Json<LoginRequest>) -> LoginResponse {
    match user_service::login(&request) {
        Ok(user) => LoginResponse::Success(Json::from(user)),
        Err(LoginError::BadCredentials) => LoginResponse::BadCredentials(BasicMessage::new(
            "Bad Credentials",
        )),
        Err(LoginError::DbError) => LoginResponse::DbError(BasicMessage::new(
            "Failed to record the login. Check server logs for details",
        )),
    }
}

#[post("/logout", data = "<request>")]
pub fn logout(request: Json<LogoutRequest>, auth: Auth) -> LogoutResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return LogoutResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return LogoutResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match user_service::logout(request.emp_id) {
        Ok(()) => LogoutResponse::Success(BasicMessage::new("Logged out.")),
        Err(LogoutError::NoActiveSession) => LogoutResponse::NotFound(BasicMessage::new(
            "No active session exists for that employee id.",
        )),
        Err(LogoutError::DbError) => LogoutResponse::DbError(BasicMessage::new(
            "Failed to close the session. Check server logs for details",
        )),
    }
}

#[get("/<emp_id>")]
pub fn get_user(emp_id: u32, auth: Auth) -> GetUserResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return GetUserResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return GetUserResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match user_service::get_user(emp_id) {
        Ok(user) => GetUserResponse::Success(Json::from(user)),
        Err(GetUserError::NotFound) => GetUserResponse::NotFound(BasicMessage::new(
            "The user with the passed employee id could not be found.",
        )),
        Err(GetUserError::DbError) => GetUserResponse::DbError(BasicMessage::new(
            "Failed to pull user info from database. Check server logs for details",
        )),
    }
}

#[get("/")]
pub fn get_users(auth: Auth) -> ListUsersResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return ListUsersResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return ListUsersResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match user_service::get_all_users() {
        Ok(users) => ListUsersResponse::Success(Json::from(users)),
        Err(_) => ListUsersResponse::DbError(BasicMessage::new(
            "Failed to pull user list from database. Check server logs for details",
        )),
    }
}

#[put("/<emp_id>", data = "<request>")]
pub fn update_user(
    emp_id: u32,
    request: Json<UpdateUserRequest>,
    auth: Auth,
) -> UpdateUserResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return UpdateUserResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return UpdateUserResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match user_service::update_user(emp_id, &request) {
        Ok(user) => UpdateUserResponse::Success(Json::from(user)),
        Err(UpdateUserError::NotFound) => UpdateUserResponse::NotFound(BasicMessage::new(
            "The user with the passed employee id could not be found.",
        )),
        Err(UpdateUserError::DbError) => UpdateUserResponse::DbError(BasicMessage::new(
            "Failed to update the user. Check server logs for details",
        )),
    }
}

#[delete("/<emp_id>")]
pub fn delete_user(emp_id: u32, auth: Auth) -> DeleteUserResponse {
    match auth.validate() {
        ValidateResult::Ok => { /*no op*/ }
        ValidateResult::NoUsers => {
            return DeleteUserResponse::Unauthorized(NO_USERS_MESSAGE.to_string())
        }
        ValidateResult::Invalid => {
            return DeleteUserResponse::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
        }
    };
    match user_service::delete_user(emp_id) {
        Ok(()) => DeleteUserResponse::Success(()),
        Err(DeleteUserError::NotFound) => DeleteUserResponse::NotFound(BasicMessage::new(
            "The user with the passed employee id could not be found.",
        )),
        Err(DeleteUserError::DbError) => DeleteUserResponse::DbError(BasicMessage::new(
            "Failed to delete the user. Check server logs for details",
        )),
    }
}
