use crate::model::error::storage_errors::StoreFileError;

#[derive(PartialEq, Debug)]
pub enum CreateCertificateError {
    TankNotFound,
    MissingCertificateNumber,
    /// certificate numbers are globally unique
    NumberAlreadyExists,
    Storage(StoreFileError),
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum GetCertificateError {
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum UpdateCertificateError {
    NotFound,
    NumberAlreadyExists,
    Storage(StoreFileError),
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DeleteCertificateError {
    NotFound,
    DbError,
}
