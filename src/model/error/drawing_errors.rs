use crate::model::error::storage_errors::StoreFileError;

#[derive(PartialEq, Debug)]
pub enum UploadDrawingError {
    TankNotFound,
    MissingDrawingType,
    Storage(StoreFileError),
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum GetDrawingsError {
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DeleteDrawingError {
    NotFound,
    DbError,
}
