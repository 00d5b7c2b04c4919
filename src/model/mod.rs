pub mod error;
pub mod file_categories;
pub mod repository;
pub mod request;
pub mod response;
