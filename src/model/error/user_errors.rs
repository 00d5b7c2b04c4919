#[derive(PartialEq, Debug)]
pub enum RegisterUserError {
    EmailAlreadyExists,
    /// exhausted the bounded retry loop for emp id assignment
    IdAssignmentFailed,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum LoginError {
    /// wrong email or wrong password; callers must not distinguish
    BadCredentials,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum LogoutError {
    NoActiveSession,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum GetUserError {
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum UpdateUserError {
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DeleteUserError {
    NotFound,
    DbError,
}
