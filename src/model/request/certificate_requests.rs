use rocket::fs::TempFile;
use rocket::FromForm;

#[derive(FromForm)]
pub struct CertificateUploadForm<'a> {
    pub tank_id: u32,
    pub certificate_number: String,
    pub year_of_manufacturing: Option<String>,
    pub insp_2_5y_date: Option<String>,
    pub next_insp_date: Option<String>,
    pub inspection_agency: Option<String>,
    pub created_by: Option<String>,
    pub file: Option<TempFile<'a>>,
}

#[derive(FromForm)]
pub struct CertificateUpdateForm<'a> {
    pub certificate_number: String,
    pub year_of_manufacturing: Option<String>,
    pub insp_2_5y_date: Option<String>,
    pub next_insp_date: Option<String>,
    pub inspection_agency: Option<String>,
    pub updated_by: Option<String>,
    /// replaces the stored certificate file when present
    pub file: Option<TempFile<'a>>,
}
