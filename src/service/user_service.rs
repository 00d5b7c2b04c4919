use std::backtrace::Backtrace;

use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::model::error::user_errors::{
    DeleteUserError, GetUserError, LoginError, LogoutError, RegisterUserError, UpdateUserError,
};
use crate::model::repository::User;
use crate::model::request::user_requests::{LoginRequest, RegisterRequest, UpdateUserRequest};
use crate::model::response::user_responses::UserResponse;
use crate::repository;
use crate::repository::user_repository;

/// how many times to retry employee id assignment when concurrent
/// registrations collide on the unique constraint
const EMP_ID_RETRIES: u32 = 5;

pub enum CheckCredentialsResult {
    Valid(User),
    NoUsers,
    Invalid,
}

/// Registers a new account. The employee id is read-max-then-insert; the
/// unique constraint on the column catches concurrent registrations and the
/// loop just picks the next id and tries again
pub fn register(request: &RegisterRequest) -> Result<UserResponse, RegisterUserError> {
    let con = repository::open_connection();
    match user_repository::get_by_email(&request.email, &con) {
        Ok(_) => {
            con.close().unwrap();
            return Err(RegisterUserError::EmailAlreadyExists);
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => { /*no op*/ }
        Err(e) => {
            con.close().unwrap();
            log::error!(
                "Failed to check for existing email: {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(RegisterUserError::DbError);
        }
    }
    let salt = Uuid::new_v4().simple().to_string();
    let password_hash = hash_password(&request.password, &salt);
    let mut result = Err(RegisterUserError::IdAssignmentFailed);
    for _ in 0..EMP_ID_RETRIES {
        let emp_id = match user_repository::next_emp_id(&con) {
            Ok(id) => id,
            Err(e) => {
                log::error!(
                    "Failed to compute next employee id: {e:?}\n{}",
                    Backtrace::force_capture()
                );
                result = Err(RegisterUserError::DbError);
                break;
            }
        };
        match user_repository::create_user(
            &User {
                id: None,
                emp_id,
                name: request.name.clone(),
                department: request.department.clone(),
                designation: request.designation.clone(),
                hod: request.hod.clone(),
                supervisor: request.supervisor.clone(),
                email: request.email.clone(),
                password_hash: password_hash.clone(),
                password_salt: salt.clone(),
            },
            &con,
        ) {
            Ok(user) => {
                result = Ok(UserResponse::from(&user));
                break;
            }
            Err(e) if repository::is_constraint_violation(&e) => {
                // either a concurrent registration took our id, or the email
                // raced in; recheck the email and retry the id
                match user_repository::get_by_email(&request.email, &con) {
                    Ok(_) => {
                        result = Err(RegisterUserError::EmailAlreadyExists);
                        break;
                    }
                    Err(_) => continue,
                }
            }
            Err(e) => {
                log::error!(
                    "Failed to create user: {e:?}\n{}",
                    Backtrace::force_capture()
                );
                result = Err(RegisterUserError::DbError);
                break;
            }
        }
    }
    con.close().unwrap();
    result
}

/// verifies credentials and records a login session
pub fn login(request: &LoginRequest) -> Result<UserResponse, LoginError> {
    match check_credentials(&request.email, &request.password) {
        CheckCredentialsResult::Valid(user) => {
            let con = repository::open_connection();
            let session_res = user_repository::create_session(user.emp_id, &user.email, &con);
            con.close().unwrap();
            if let Err(e) = session_res {
                log::error!(
                    "Failed to record login session: {e:?}\n{}",
                    Backtrace::force_capture()
                );
                return Err(LoginError::DbError);
            }
            Ok(UserResponse::from(&user))
        }
        // deliberately the same answer for a bad email and a bad password
        _ => Err(LoginError::BadCredentials),
    }
}

pub fn logout(emp_id: u32) -> Result<(), LogoutError> {
    let con = repository::open_connection();
    let closed = user_repository::close_sessions(emp_id, &con);
    con.close().unwrap();
    match closed {
        Ok(0) => Err(LogoutError::NoActiveSession),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!(
                "Failed to close sessions: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(LogoutError::DbError)
        }
    }
}

/// used by the request guard. NoUsers lets the very first registration
/// through before any account exists
pub fn check_credentials(email: &str, password: &str) -> CheckCredentialsResult {
    let con = repository::open_connection();
    let user = user_repository::get_by_email(email, &con);
    let user = match user {
        Ok(user) => {
            con.close().unwrap();
            user
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            let any_users = user_repository::get_all(&con).map(|u| !u.is_empty());
            con.close().unwrap();
            return match any_users {
                Ok(false) => CheckCredentialsResult::NoUsers,
                _ => CheckCredentialsResult::Invalid,
            };
        }
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to look up user: {e:?}\n{}", Backtrace::force_capture());
            return CheckCredentialsResult::Invalid;
        }
    };
    if hash_password(password, &user.password_salt) == user.password_hash {
        CheckCredentialsResult::Valid(user)
    } else {
        CheckCredentialsResult::Invalid
    }
}

pub fn get_user(emp_id: u32) -> Result<UserResponse, GetUserError> {
    let con = repository::open_connection();
    let user = user_repository::get_by_emp_id(emp_id, &con);
    con.close().unwrap();
    match user {
        Ok(user) => Ok(UserResponse::from(&user)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(GetUserError::NotFound),
        Err(e) => {
            log::error!("Failed to get user: {e:?}\n{}", Backtrace::force_capture());
            Err(GetUserError::DbError)
        }
    }
}

pub fn get_all_users() -> Result<Vec<UserResponse>, GetUserError> {
    let con = repository::open_connection();
    let users = user_repository::get_all(&con);
    con.close().unwrap();
    match users {
        Ok(users) => Ok(users.iter().map(UserResponse::from).collect()),
        Err(e) => {
            log::error!("Failed to list users: {e:?}\n{}", Backtrace::force_capture());
            Err(GetUserError::DbError)
        }
    }
}

pub fn update_user(emp_id: u32, request: &UpdateUserRequest) -> Result<UserResponse, UpdateUserError> {
    let con = repository::open_connection();
    let existing = match user_repository::get_by_emp_id(emp_id, &con) {
        Ok(user) => user,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(UpdateUserError::NotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to get user: {e:?}\n{}", Backtrace::force_capture());
            return Err(UpdateUserError::DbError);
        }
    };
    let updated = User {
        name: request.name.clone().or(existing.name.clone()),
        department: request.department.clone().or(existing.department.clone()),
        designation: request.designation.clone().or(existing.designation.clone()),
        hod: request.hod.clone().or(existing.hod.clone()),
        supervisor: request.supervisor.clone().or(existing.supervisor.clone()),
        ..existing
    };
    let update_res = user_repository::update_user(&updated, &con);
    con.close().unwrap();
    match update_res {
        Ok(()) => Ok(UserResponse::from(&updated)),
        Err(e) => {
            log::error!("Failed to update user: {e:?}\n{}", Backtrace::force_capture());
            Err(UpdateUserError::DbError)
        }
    }
}

pub fn delete_user(emp_id: u32) -> Result<(), DeleteUserError> {
    let con = repository::open_connection();
    match user_repository::get_by_emp_id(emp_id, &con) {
        Ok(_) => { /*no op*/ }
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            con.close().unwrap();
            return Err(DeleteUserError::NotFound);
        }
        Err(e) => {
            con.close().unwrap();
            log::error!("Failed to get user: {e:?}\n{}", Backtrace::force_capture());
            return Err(DeleteUserError::DbError);
        }
    }
    let delete_res = user_repository::delete_user(emp_id, &con);
    con.close().unwrap();
    match delete_res {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete user: {e:?}\n{}", Backtrace::force_capture());
            Err(DeleteUserError::DbError)
        }
    }
}

fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{salt}:{password}").as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod user_service_tests {
    use super::*;
    use crate::test::{cleanup, refresh_db};

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: Some("Test User".to_string()),
            department: Some("Engineering".to_string()),
            designation: None,
            hod: None,
            supervisor: None,
            email: email.to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[test]
    fn register_assigns_sequential_emp_ids() {
        refresh_db();
        let first = register(&register_request("a@example.com")).unwrap();
        let second = register(&register_request("b@example.com")).unwrap();
        assert_eq!(1, first.emp_id);
        assert_eq!(2, second.emp_id);
        cleanup();
    }

    #[test]
    fn register_rejects_duplicate_email() {
        refresh_db();
        register(&register_request("a@example.com")).unwrap();
        assert_eq!(
            Err(RegisterUserError::EmailAlreadyExists),
            register(&register_request("a@example.com"))
        );
        cleanup();
    }

    #[test]
    fn login_rejects_wrong_password_and_unknown_email_alike() {
        refresh_db();
        register(&register_request("a@example.com")).unwrap();
        let wrong_password = login(&LoginRequest {
            email: "a@example.com".to_string(),
            password: "wrong".to_string(),
        });
        let unknown_email = login(&LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "hunter2".to_string(),
        });
        assert_eq!(Err(LoginError::BadCredentials), wrong_password);
        assert_eq!(Err(LoginError::BadCredentials), unknown_email);
        cleanup();
    }

    #[test]
    fn login_then_logout_closes_the_session() {
        refresh_db();
        let user = register(&register_request("a@example.com")).unwrap();
        login(&LoginRequest {
            email: "a@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .unwrap();
        assert_eq!(Ok(()), logout(user.emp_id));
        assert_eq!(Err(LogoutError::NoActiveSession), logout(user.emp_id));
        cleanup();
    }
}
