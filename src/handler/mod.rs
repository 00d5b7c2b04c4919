pub mod cargo_handler;
pub mod certificate_handler;
pub mod drawing_handler;
pub mod image_handler;
pub mod inspection_handler;
pub mod maintenance_handler;
pub mod regulation_handler;
pub mod report_handler;
pub mod tank_handler;
pub mod user_handler;
pub mod valve_handler;

/// the hint returned alongside a 401 when no accounts exist yet
pub static NO_USERS_MESSAGE: &str =
    "No accounts exist yet. Create the first one by making a POST to `/api/users`";
pub static BAD_CREDENTIALS_MESSAGE: &str = "Bad Credentials";
