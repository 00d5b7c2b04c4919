use rocket::fs::TempFile;
use rocket::FromForm;

#[derive(FromForm)]
pub struct ImageUploadForm<'a> {
    pub file: TempFile<'a>,
    pub emp_id: Option<u32>,
}
