use std::fs::{remove_dir_all, remove_file};
use std::path::Path;

use crate::repository::initialize_db;
use crate::service::storage_service;

/// admin@example.com:test
#[cfg(test)]
pub static AUTH: &str = "Basic YWRtaW5AZXhhbXBsZS5jb206dGVzdA==";

/// Each test thread gets its own sqlite file and upload root, named after the
/// thread, so tests can run in parallel without stepping on each other
#[cfg(test)]
pub fn current_thread_name() -> String {
    std::thread::current()
        .name()
        .unwrap()
        .replace("::", "_")
        .to_string()
}

#[cfg(test)]
pub fn refresh_db() {
    let thread_name = current_thread_name();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
    initialize_db().unwrap();
}

#[cfg(test)]
pub fn remove_db() {
    let thread_name = current_thread_name();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
}

#[cfg(test)]
pub fn remove_upload_dir() {
    let root = storage_service::upload_root();
    let root_path = Path::new(root.as_str());
    if root_path.exists() {
        remove_dir_all(root_path).unwrap_or(());
    }
}

/// removes both the test database and the test upload root
#[cfg(test)]
pub fn cleanup() {
    remove_db();
    remove_upload_dir();
}
