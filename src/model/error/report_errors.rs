#[derive(PartialEq, Debug)]
pub enum GenerateReportError {
    TankNotFound,
    DbError,
    /// the composed document could not be written under the upload root
    FileSystemError,
}
