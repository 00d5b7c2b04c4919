use rocket::fs::TempFile;
use rocket::FromForm;

#[derive(FromForm)]
pub struct DrawingUploadForm<'a> {
    pub tank_id: u32,
    pub drawing_type: String,
    pub description: Option<String>,
    pub created_by: Option<String>,
    pub file: TempFile<'a>,
}
