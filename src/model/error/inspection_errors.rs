#[derive(PartialEq, Debug)]
pub enum CreateInspectionError {
    TankNotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum GetInspectionError {
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum UpdateInspectionError {
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DeleteInspectionError {
    NotFound,
    DbError,
}
