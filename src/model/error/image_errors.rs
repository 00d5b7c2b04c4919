use crate::model::error::storage_errors::StoreFileError;

#[derive(PartialEq, Debug)]
pub enum UploadImageError {
    TankNotFound,
    /// the passed slug is not a known image category
    InvalidImageType(String),
    Storage(StoreFileError),
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum GetImagesError {
    TankNotFound,
    InvalidImageType(String),
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DeleteImageError {
    TankNotFound,
    InvalidImageType(String),
    BadDate,
    NotFound,
    DbError,
}
