#[derive(PartialEq, Debug)]
pub enum CreateRegulationError {
    MissingName,
    AlreadyExists,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum GetRegulationError {
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum UpdateRegulationError {
    NotFound,
    AlreadyExists,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DeleteRegulationError {
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum LinkRegulationError {
    TankNotFound,
    RegulationNotFound,
    /// the tank already carries this regulation
    AlreadyLinked,
    DbError,
}
