#[derive(PartialEq, Debug)]
pub enum CreateTankError {
    MissingNumber,
    AlreadyExists,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum GetTankError {
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum UpdateTankError {
    NotFound,
    /// the requested new tank number is already taken
    NumberAlreadyExists,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DeleteTankError {
    NotFound,
    DbError,
}
