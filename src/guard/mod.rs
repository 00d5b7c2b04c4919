use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rocket::async_trait;
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;

use crate::service::user_service;
use crate::service::user_service::CheckCredentialsResult;

/// used to represent the result of calling `Auth::validate`
pub enum ValidateResult {
    Ok,
    NoUsers,
    Invalid,
}

/// basic-auth credentials pulled off the Authorization header; the username
/// part is the account email
#[derive(Debug)]
pub struct Auth {
    pub email: String,
    pub password: String,
}

impl Auth {
    /// creates an `Auth` object from the passed header value.
    /// The value of header must be base64-encoded basic auth.
    pub fn from(header: &str) -> Result<Auth, &str> {
        // remove the "Basic " from the header, leaving only the base64 part
        let stripped_header = header.to_string().replace("Basic ", "");
        match BASE64.decode(stripped_header.trim()) {
            Ok(value) => {
                let combined = match String::from_utf8(value) {
                    Ok(combined) => combined,
                    Err(_) => return Err("Invalid basic auth format: not utf8"),
                };
                let split = combined.trim().split(':').collect::<Vec<&str>>();
                // if there aren't exactly 2 parts, then something is wrong here
                if split.len() != 2 || split.contains(&"") {
                    return Err("Invalid basic auth format: missing email or password");
                }
                Ok(Auth {
                    email: String::from(split[0].trim()),
                    password: String::from(split[1].trim()),
                })
            }
            Err(_) => Err("Invalid basic auth format: not base64"),
        }
    }

    /// checks our credentials against the users table.
    ///
    /// _this is a convenience method to be used only in handlers_
    pub fn validate(self) -> ValidateResult {
        match user_service::check_credentials(&self.email, &self.password) {
            CheckCredentialsResult::Valid(_) => ValidateResult::Ok,
            CheckCredentialsResult::NoUsers => ValidateResult::NoUsers,
            CheckCredentialsResult::Invalid => ValidateResult::Invalid,
        }
    }
}

#[async_trait]
impl<'a> FromRequest<'a> for Auth {
    type Error = AuthError;

    async fn from_request(request: &'a Request<'_>) -> Outcome<Self, Self::Error> {
        // just check if it's basic auth
        fn check_basic_auth(value: &str) -> bool {
            String::from(value).starts_with("Basic")
        }
        match request.headers().get_one("Authorization") {
            None => Outcome::Error((Status::Unauthorized, AuthError::Missing)),
            Some(value) if check_basic_auth(value) => match Auth::from(value) {
                Ok(auth) => Outcome::Success(auth),
                Err(_) => Outcome::Error((Status::Unauthorized, AuthError::Invalid)),
            },
            Some(_) => Outcome::Error((Status::BadRequest, AuthError::Invalid)),
        }
    }
}

#[derive(Debug)]
pub enum AuthError {
    Missing,
    Invalid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_valid_input() {
        // admin@example.com:test
        let input = "Basic YWRtaW5AZXhhbXBsZS5jb206dGVzdA==";
        let output = Auth::from(input).unwrap();
        assert_eq!("admin@example.com", output.email);
        assert_eq!("test", output.password);
    }

    #[test]
    fn test_from_unencoded_input() {
        let input = "test:test";
        let output = Auth::from(input).unwrap_err();
        assert_eq!("Invalid basic auth format: not base64", output);
    }

    #[test]
    fn test_from_bad_input() {
        // :test
        assert_eq!(
            "Invalid basic auth format: missing email or password",
            Auth::from("OnRlc3Q=").unwrap_err()
        );
        // test:
        assert_eq!(
            "Invalid basic auth format: missing email or password",
            Auth::from("dGVzdDo=").unwrap_err()
        );
        // testtest
        assert_eq!(
            "Invalid basic auth format: missing email or password",
            Auth::from("dGVzdHRlc3Q=").unwrap_err()
        )
    }
}
