use rocket::fs::TempFile;
use rocket::FromForm;

#[derive(FromForm)]
pub struct ValveReportUploadForm<'a> {
    pub tank_id: u32,
    pub test_date: Option<String>,
    pub inspected_by: Option<String>,
    pub remarks: Option<String>,
    pub created_by: Option<String>,
    pub file: Option<TempFile<'a>>,
}

#[derive(FromForm)]
pub struct ValveReportUpdateForm<'a> {
    pub test_date: Option<String>,
    pub inspected_by: Option<String>,
    pub remarks: Option<String>,
    pub updated_by: Option<String>,
    pub file: Option<TempFile<'a>>,
}
