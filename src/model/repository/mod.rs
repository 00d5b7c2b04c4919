/// the top-level asset everything else hangs off of
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Tank {
    /// only populated when pulled from the database
    pub id: Option<u32>,
    /// human-readable unique code, e.g. `TANK-9`
    pub tank_number: String,
    pub status: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

/// 1:1 technical detail row for a tank. `tank_number` is a denormalized copy
/// that must be kept in sync when the header is renamed
#[derive(Debug, PartialEq, Clone, Default)]
pub struct TankDetails {
    pub id: Option<u32>,
    pub tank_id: u32,
    pub tank_number: Option<String>,
    pub mfgr: Option<String>,
    pub date_mfg: Option<String>,
    pub pv_code: Option<String>,
    pub un_iso_code: Option<String>,
    pub capacity_l: Option<f64>,
    pub mawp: Option<f64>,
    pub design_temperature: Option<String>,
    pub tare_weight_kg: Option<f64>,
    pub mgw_kg: Option<f64>,
    pub size: Option<String>,
    pub pump_type: Option<String>,
    pub vessel_material: Option<String>,
    pub color_body_frame: Option<String>,
    pub remark: Option<String>,
    pub lease: bool,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Inspection {
    pub id: Option<u32>,
    pub tank_id: u32,
    pub insp_2_5y_date: Option<String>,
    pub next_insp_date: Option<String>,
    pub tank_certificate: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Certificate {
    pub id: Option<u32>,
    pub tank_id: u32,
    /// denormalized copy of the owning tank's number
    pub tank_number: String,
    pub certificate_number: String,
    pub year_of_manufacturing: Option<String>,
    pub insp_2_5y_date: Option<String>,
    pub next_insp_date: Option<String>,
    pub inspection_agency: Option<String>,
    /// stored file reference, relative to the upload root
    pub certificate_file: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Drawing {
    pub id: Option<u32>,
    pub tank_id: u32,
    pub drawing_type: String,
    pub description: Option<String>,
    pub file_path: String,
    pub original_filename: String,
    pub created_by: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ValveReport {
    pub id: Option<u32>,
    pub tank_id: u32,
    pub report_file: Option<String>,
    pub test_date: Option<String>,
    pub inspected_by: Option<String>,
    pub remarks: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

/// one image per (tank, type, day); the unique key lives in the database
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TankImage {
    pub id: Option<u32>,
    pub emp_id: Option<u32>,
    pub tank_number: String,
    pub image_type: String,
    pub image_path: String,
    /// iso date (yyyy-mm-dd) the image was taken
    pub created_date: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Regulation {
    pub id: Option<u32>,
    pub regulation_name: String,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

/// a regulation link on a tank, joined with the master row's name
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TankRegulation {
    pub id: Option<u32>,
    pub tank_id: u32,
    pub regulation_id: u32,
    pub regulation_name: String,
    pub initial_approval_no: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Cargo {
    pub id: Option<u32>,
    pub cargo_reference: String,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CargoAssignment {
    pub id: Option<u32>,
    pub tank_id: u32,
    pub cargo_id: u32,
    pub cargo_reference: String,
    pub created_by: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct User {
    pub id: Option<u32>,
    pub emp_id: u32,
    pub name: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub hod: Option<String>,
    pub supervisor: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub password_salt: String,
}
