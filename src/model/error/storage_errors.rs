/// errors raised by the streaming writer. `PayloadTooLarge` and
/// `FileSystemError` both guarantee the staged temp file has been removed
/// before the error is returned
#[derive(PartialEq, Debug)]
pub enum StoreFileError {
    /// no content type was declared on the inbound stream
    MissingContentType,
    /// declared content type is not on the allow list
    UnsupportedMediaType(String),
    /// the running byte count passed the configured ceiling
    PayloadTooLarge,
    /// generic disk failure during staging or the final rename
    FileSystemError,
}
