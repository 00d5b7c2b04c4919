pub mod cargo_service;
pub mod certificate_service;
pub mod drawing_service;
pub mod image_service;
pub mod inspection_service;
pub mod maintenance_service;
pub mod regulation_service;
pub mod report_service;
pub mod storage_service;
pub mod tank_service;
pub mod user_service;
pub mod valve_service;
