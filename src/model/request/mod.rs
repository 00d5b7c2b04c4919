pub mod cargo_requests;
pub mod certificate_requests;
pub mod drawing_requests;
pub mod image_requests;
pub mod inspection_requests;
pub mod regulation_requests;
pub mod report_requests;
pub mod tank_requests;
pub mod user_requests;
pub mod valve_requests;
