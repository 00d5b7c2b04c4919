#[macro_use]
extern crate rocket;

use std::fs;
use std::path::Path;

use rocket::data::{Limits, ToByteUnit};
use rocket::{Build, Rocket};

use handler::{
    cargo_handler::{
        assign_cargo, create_cargo, delete_cargo, get_assignments_for_tank, get_cargo,
        unassign_cargo,
    },
    certificate_handler::{
        create_certificate, delete_certificate, get_certificate, get_certificates_for_tank,
        update_certificate,
    },
    drawing_handler::{delete_drawing, get_drawings_for_tank, upload_drawing},
    image_handler::{
        delete_image, delete_images_for_tank, get_image_types, get_images, upload_image,
    },
    inspection_handler::{
        create_inspection, delete_inspection, get_inspections, get_inspections_for_tank,
        update_inspection,
    },
    maintenance_handler::{sweep_orphans, sweep_temp},
    regulation_handler::{
        create_regulation, delete_regulation, get_regulations, get_regulations_for_tank,
        link_regulation, unlink_regulation, update_regulation, update_tank_regulation,
    },
    report_handler::generate_report,
    tank_handler::{
        create_tank, delete_tank, get_tank, get_tank_by_number, get_tanks, update_tank,
    },
    user_handler::{
        delete_user, get_user, get_users, login, logout, register_user, update_user,
    },
    valve_handler::{
        create_valve_report, delete_valve_report, get_valve_report, get_valve_reports_for_tank,
        update_valve_report,
    },
};

use crate::config::TANK_SERVER_CONFIG;
use crate::repository::initialize_db;
use crate::service::storage_service;

mod config;
mod db_migrations;
mod guard;
mod handler;
mod model;
mod repository;
mod service;
#[cfg(test)]
mod test;

#[cfg(not(test))]
fn init_logger() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(std::time::SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(fern::log_file("tank_server.log").unwrap())
        .apply()
        .unwrap();
}

#[launch]
fn rocket() -> Rocket<Build> {
    #[cfg(not(test))]
    init_logger();
    initialize_db().unwrap();
    let upload_root = storage_service::upload_root();
    fs::create_dir_all(Path::new(&upload_root).join(storage_service::TEMP_DIR_NAME)).unwrap();
    // rocket's own limits must sit above ours so the streaming writer is the
    // thing that rejects oversized uploads
    let max_upload = TANK_SERVER_CONFIG.upload.max_size_bytes;
    let figment = rocket::Config::figment().merge((
        "limits",
        Limits::default()
            .limit("file", (max_upload * 2).bytes())
            .limit("data-form", (max_upload * 2 + 1024 * 1024).bytes()),
    ));
    rocket::custom(figment)
        .mount(
            "/api/tanks",
            routes![
                create_tank,
                get_tank,
                get_tank_by_number,
                get_tanks,
                update_tank,
                delete_tank
            ],
        )
        .mount(
            "/api/inspections",
            routes![
                create_inspection,
                get_inspections,
                get_inspections_for_tank,
                update_inspection,
                delete_inspection
            ],
        )
        .mount(
            "/api/certificates",
            routes![
                create_certificate,
                get_certificate,
                get_certificates_for_tank,
                update_certificate,
                delete_certificate
            ],
        )
        .mount(
            "/api/drawings",
            routes![upload_drawing, get_drawings_for_tank, delete_drawing],
        )
        .mount(
            "/api/valve-reports",
            routes![
                create_valve_report,
                get_valve_report,
                get_valve_reports_for_tank,
                update_valve_report,
                delete_valve_report
            ],
        )
        .mount(
            "/api/images",
            routes![
                get_image_types,
                upload_image,
                get_images,
                delete_image,
                delete_images_for_tank
            ],
        )
        .mount(
            "/api/regulations",
            routes![
                create_regulation,
                get_regulations,
                update_regulation,
                delete_regulation,
                link_regulation,
                get_regulations_for_tank,
                update_tank_regulation,
                unlink_regulation
            ],
        )
        .mount(
            "/api/cargo",
            routes![
                create_cargo,
                get_cargo,
                delete_cargo,
                assign_cargo,
                get_assignments_for_tank,
                unassign_cargo
            ],
        )
        .mount(
            "/api/users",
            routes![
                register_user,
                login,
                logout,
                get_user,
                get_users,
                update_user,
                delete_user
            ],
        )
        .mount("/api/reports", routes![generate_report])
        .mount("/api/maintenance", routes![sweep_temp, sweep_orphans])
}

#[cfg(test)]
mod api_tests {
    use rocket::http::{ContentType, Header, Status};
    use rocket::local::blocking::Client;

    use crate::test::{cleanup, refresh_db, AUTH};

    use super::rocket;

    static BOUNDARY: &str = "X-TANK-SERVER-BOUNDARY";

    fn client() -> Client {
        refresh_db();
        Client::tracked(rocket()).expect("Valid Rocket Instance")
    }

    /// registers the account matching the AUTH header
    fn seed_user(client: &Client) {
        let res = client
            .post("/api/users")
            .header(ContentType::JSON)
            .body(r#"{"name":"Admin","email":"admin@example.com","password":"test"}"#)
            .dispatch();
        assert_eq!(Status::Created, res.status());
    }

    fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((name, file_name, content)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: image/jpeg\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn multipart_content_type() -> ContentType {
        ContentType::new("multipart", "form-data").with_params(("boundary", BOUNDARY))
    }

    #[test]
    fn requests_without_credentials_are_rejected() {
        let client = client();
        let res = client.get("/api/tanks").dispatch();
        assert_eq!(Status::Unauthorized, res.status());
        // with a header but no accounts, the hint points at registration
        let res = client
            .get("/api/tanks")
            .header(Header::new("Authorization", AUTH))
            .dispatch();
        assert_eq!(Status::Unauthorized, res.status());
        assert!(res.into_string().unwrap().contains("/api/users"));
        cleanup();
    }

    #[test]
    fn register_login_logout_round_trip() {
        let client = client();
        seed_user(&client);
        let res = client
            .post("/api/users/login")
            .header(ContentType::JSON)
            .body(r#"{"email":"admin@example.com","password":"test"}"#)
            .dispatch();
        assert_eq!(Status::Ok, res.status());
        let body = res.into_string().unwrap();
        assert!(body.contains(r#""emp_id":1"#));
        assert!(!body.contains("password"));
        let res = client
            .post("/api/users/logout")
            .header(ContentType::JSON)
            .header(Header::new("Authorization", AUTH))
            .body(r#"{"emp_id":1}"#)
            .dispatch();
        assert_eq!(Status::Ok, res.status());
        cleanup();
    }

    #[test]
    fn tank_crud_round_trip() {
        let client = client();
        seed_user(&client);
        let res = client
            .post("/api/tanks")
            .header(ContentType::JSON)
            .header(Header::new("Authorization", AUTH))
            .body(r#"{"tank_number":"TANK-API-1","status":"active","details":{"mfgr":"CIMC"}}"#)
            .dispatch();
        assert_eq!(Status::Created, res.status());
        let body = res.into_string().unwrap();
        assert!(body.contains("TANK-API-1"));
        let res = client
            .get("/api/tanks/1")
            .header(Header::new("Authorization", AUTH))
            .dispatch();
        assert_eq!(Status::Ok, res.status());
        assert!(res.into_string().unwrap().contains("CIMC"));
        let res = client
            .get("/api/tanks/number/TANK-API-1")
            .header(Header::new("Authorization", AUTH))
            .dispatch();
        assert_eq!(Status::Ok, res.status());
        let res = client
            .delete("/api/tanks/1")
            .header(Header::new("Authorization", AUTH))
            .dispatch();
        assert_eq!(Status::NoContent, res.status());
        let res = client
            .get("/api/tanks/1")
            .header(Header::new("Authorization", AUTH))
            .dispatch();
        assert_eq!(Status::NotFound, res.status());
        cleanup();
    }

    #[test]
    fn certificate_upload_lands_in_deterministic_slot_and_dies_with_the_tank() {
        use std::path::Path;

        use crate::service::storage_service;

        let client = client();
        seed_user(&client);
        client
            .post("/api/tanks")
            .header(ContentType::JSON)
            .header(Header::new("Authorization", AUTH))
            .body(r#"{"tank_number":"TANK-9"}"#)
            .dispatch();
        let body = multipart_body(
            &[("tank_id", "1"), ("certificate_number", "CERT-9")],
            Some(("file", "cert.jpg", b"jpeg-bytes")),
        );
        let res = client
            .post("/api/certificates")
            .header(multipart_content_type())
            .header(Header::new("Authorization", AUTH))
            .body(body)
            .dispatch();
        assert_eq!(Status::Created, res.status());
        let stored = "certificates/TANK-9/TANK-9_certificates.jpg";
        assert!(res.into_string().unwrap().contains(stored));
        let root = storage_service::upload_root();
        assert!(Path::new(&root).join(stored).is_file());
        let res = client
            .delete("/api/tanks/1")
            .header(Header::new("Authorization", AUTH))
            .dispatch();
        assert_eq!(Status::NoContent, res.status());
        assert!(!Path::new(&root).join(stored).exists());
        assert!(!Path::new(&root).join("certificates/TANK-9").exists());
        cleanup();
    }

    #[test]
    fn image_upload_validates_the_category() {
        let client = client();
        seed_user(&client);
        client
            .post("/api/tanks")
            .header(ContentType::JSON)
            .header(Header::new("Authorization", AUTH))
            .body(r#"{"tank_number":"TANK-IMG"}"#)
            .dispatch();
        let body = multipart_body(&[], Some(("file", "front.jpg", b"jpeg-bytes")));
        let res = client
            .post("/api/images/TANK-IMG/frontview")
            .header(multipart_content_type())
            .header(Header::new("Authorization", AUTH))
            .body(body.clone())
            .dispatch();
        assert_eq!(Status::Created, res.status());
        let res = client
            .post("/api/images/TANK-IMG/sideways")
            .header(multipart_content_type())
            .header(Header::new("Authorization", AUTH))
            .body(body)
            .dispatch();
        assert_eq!(Status::BadRequest, res.status());
        cleanup();
    }

    #[test]
    fn report_endpoint_composes_a_dossier() {
        let client = client();
        seed_user(&client);
        client
            .post("/api/tanks")
            .header(ContentType::JSON)
            .header(Header::new("Authorization", AUTH))
            .body(r#"{"tank_number":"TANK-RPT"}"#)
            .dispatch();
        let res = client
            .post("/api/reports")
            .header(ContentType::JSON)
            .header(Header::new("Authorization", AUTH))
            .body(r#"{"tank_id":1}"#)
            .dispatch();
        assert_eq!(Status::Created, res.status());
        let body = res.into_string().unwrap();
        assert!(body.contains("reports/TANK-RPT_report.json"));
        assert!(body.contains("frontview"));
        cleanup();
    }
}
