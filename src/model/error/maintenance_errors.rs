#[derive(PartialEq, Debug)]
pub enum SweepError {
    /// the referenced-path snapshot could not be read, so no files were touched
    DbError,
}
