use rocket::serde::{json::Json, Deserialize, Serialize};

use crate::model::response::cargo_responses::CargoAssignmentResponse;
use crate::model::response::certificate_responses::CertificateResponse;
use crate::model::response::drawing_responses::DrawingResponse;
use crate::model::response::image_responses::TankImageResponse;
use crate::model::response::inspection_responses::InspectionResponse;
use crate::model::response::regulation_responses::TankRegulationResponse;
use crate::model::response::tank_responses::TankResponse;
use crate::model::response::valve_responses::ValveReportResponse;
use crate::model::response::BasicMessage;

/// a stored file reference resolved to a concrete location, or a placeholder
/// when nothing was found on any search root
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ResolvedFile {
    pub stored_path: String,
    /// absolute path on disk, absent when the file could not be located
    pub resolved_path: Option<String>,
    pub found: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ReportImageEntry {
    pub image_type: String,
    pub image_label: String,
    pub image: Option<TankImageResponse>,
    pub file: Option<ResolvedFile>,
}

/// the full composed dossier for one tank
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct TankReport {
    pub generated_at: String,
    pub tank: TankResponse,
    pub inspections: Vec<InspectionResponse>,
    pub certificates: Vec<CertificateResponse>,
    pub certificate_files: Vec<ResolvedFile>,
    pub drawings: Vec<DrawingResponse>,
    pub drawing_files: Vec<ResolvedFile>,
    pub valve_reports: Vec<ValveReportResponse>,
    pub valve_report_files: Vec<ResolvedFile>,
    pub regulations: Vec<TankRegulationResponse>,
    pub cargo_assignments: Vec<CargoAssignmentResponse>,
    pub images: Vec<ReportImageEntry>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct GeneratedReport {
    /// where the composed document was written, relative to the upload root
    pub report_path: String,
    pub report: TankReport,
}

#[derive(Responder)]
pub enum GenerateReportResponse {
    #[response(status = 404, content_type = "json")]
    TankNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DbError(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    FileSystemError(Json<BasicMessage>),
    #[response(status = 201)]
    Success(Json<GeneratedReport>),
    #[response(status = 401)]
    Unauthorized(String),
}
