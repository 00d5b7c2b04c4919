use crate::model::error::storage_errors::StoreFileError;

#[derive(PartialEq, Debug)]
pub enum CreateValveReportError {
    TankNotFound,
    Storage(StoreFileError),
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum GetValveReportsError {
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum UpdateValveReportError {
    NotFound,
    Storage(StoreFileError),
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DeleteValveReportError {
    NotFound,
    DbError,
}
