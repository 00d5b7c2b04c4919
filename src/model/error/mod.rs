pub mod cargo_errors;
pub mod certificate_errors;
pub mod drawing_errors;
pub mod image_errors;
pub mod inspection_errors;
pub mod maintenance_errors;
pub mod regulation_errors;
pub mod report_errors;
pub mod storage_errors;
pub mod tank_errors;
pub mod user_errors;
pub mod valve_errors;
