#[derive(PartialEq, Debug)]
pub enum CreateCargoError {
    MissingReference,
    AlreadyExists,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum UpdateCargoError {
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DeleteCargoError {
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum AssignCargoError {
    TankNotFound,
    CargoNotFound,
    /// the cargo is already assigned to the tank
    AlreadyAssigned,
    DbError,
}
