use std::backtrace::Backtrace;
use std::collections::HashSet;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use uuid::Uuid;

use crate::model::error::storage_errors::StoreFileError;
use crate::model::file_categories::{FileCategory, NamingPolicy};

const CHUNK_SIZE: usize = 64 * 1024;

/// staging area for in-flight uploads, under the upload root
pub static TEMP_DIR_NAME: &str = "tmp";
/// composed report documents land here; the orphan sweep must skip it
pub static REPORT_DIR_NAME: &str = "reports";

static ALLOWED_CONTENT_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/webp", "application/pdf"];

#[cfg(not(test))]
pub fn upload_root() -> String {
    use crate::config::TANK_SERVER_CONFIG;
    TANK_SERVER_CONFIG.upload.root.clone()
}

#[cfg(test)]
pub fn upload_root() -> String {
    format!("./{}_uploads", crate::test::current_thread_name())
}

/// A stored file reference, decomposed. The persisted form is always
/// `category/owner/file` with forward slashes, relative to the upload root
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct StoredFileRef {
    pub category: FileCategory,
    pub owner_code: String,
    pub file_name: String,
}

impl StoredFileRef {
    pub fn relative_path(&self) -> String {
        format!(
            "{}/{}/{}",
            self.category.slug(),
            self.owner_code,
            self.file_name
        )
    }

    /// the inverse of [StoredFileRef::relative_path]. Returns None for paths
    /// that don't follow the category/owner/file convention
    pub fn parse(relative_path: &str) -> Option<StoredFileRef> {
        let normalized = relative_path.replace('\\', "/");
        let parts: Vec<&str> = normalized.split('/').filter(|p| !p.is_empty()).collect();
        if parts.len() != 3 {
            return None;
        }
        let category = FileCategory::from_slug(parts[0])?;
        Some(StoredFileRef {
            category,
            owner_code: parts[1].to_string(),
            file_name: parts[2].to_string(),
        })
    }
}

/// A multipart upload parked in the staging area, ready to feed the sync
/// writer. The staged copy is deleted when this is dropped
pub struct StagedUpload {
    pub content_type: Option<String>,
    pub original_name: Option<String>,
    path: PathBuf,
}

impl StagedUpload {
    pub fn open(&self) -> Result<fs::File, StoreFileError> {
        fs::File::open(&self.path).map_err(|e| {
            log::error!(
                "Failed to reopen staged upload: {e:?}\n{}",
                Backtrace::force_capture()
            );
            StoreFileError::FileSystemError
        })
    }
}

impl Drop for StagedUpload {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// moves a just-parsed multipart file into `tmp/` under the upload root so
/// the sync writer can read it back. `move_copy_to` is used because rocket's
/// own temp directory may sit on a different filesystem
pub async fn stage_upload(
    file: &mut rocket::fs::TempFile<'_>,
) -> Result<StagedUpload, StoreFileError> {
    let content_type = file.content_type().map(|ct| ct.to_string());
    let original_name = file
        .raw_name()
        .map(|n| n.dangerous_unsafe_unsanitized_raw().as_str().to_string());
    let root = upload_root();
    let temp_dir = Path::new(&root).join(TEMP_DIR_NAME);
    if let Err(e) = fs::create_dir_all(&temp_dir) {
        log::error!(
            "Failed to create temp directory: {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(StoreFileError::FileSystemError);
    }
    let staged_path = temp_dir.join(format!("stage-{}", Uuid::new_v4().simple()));
    if let Err(e) = file.move_copy_to(&staged_path).await {
        log::error!(
            "Failed to stage uploaded file: {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(StoreFileError::FileSystemError);
    }
    Ok(StagedUpload {
        content_type,
        original_name,
        path: staged_path,
    })
}

/// stages raw bytes the way `stage_upload` would, without a multipart request
#[cfg(test)]
pub fn stage_bytes(content: &[u8], content_type: &str, original_name: &str) -> StagedUpload {
    let root = upload_root();
    let temp_dir = Path::new(&root).join(TEMP_DIR_NAME);
    fs::create_dir_all(&temp_dir).unwrap();
    let path = temp_dir.join(format!("stage-{}", Uuid::new_v4().simple()));
    fs::write(&path, content).unwrap();
    StagedUpload {
        content_type: Some(content_type.to_string()),
        original_name: Some(original_name.to_string()),
        path,
    }
}

/// Streams an upload to disk and returns where it ended up.
///
/// The stream is chunked into a temp file under `tmp/` first, counting bytes
/// against `max_bytes` as it goes, then renamed into
/// `category/owner/` in one step so readers never see a half-written file.
/// Nothing touches the database here; the caller persists the returned
/// reference and is responsible for calling [remove_if_exists] if that
/// persist fails
pub fn store(
    input: &mut impl Read,
    owner_code: &str,
    category: FileCategory,
    content_type: Option<&str>,
    original_name: Option<&str>,
    max_bytes: u64,
) -> Result<StoredFileRef, StoreFileError> {
    let declared = content_type.ok_or(StoreFileError::MissingContentType)?;
    if !is_allowed_content_type(declared) {
        return Err(StoreFileError::UnsupportedMediaType(declared.to_string()));
    }
    let extension = derive_extension(original_name);
    let root = upload_root();
    let temp_dir = Path::new(&root).join(TEMP_DIR_NAME);
    if let Err(e) = fs::create_dir_all(&temp_dir) {
        log::error!(
            "Failed to create temp directory: {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(StoreFileError::FileSystemError);
    }
    let token = Uuid::new_v4().simple().to_string();
    let temp_path = temp_dir.join(format!("{token}{extension}"));
    if let Err(e) = write_chunked(input, &temp_path, max_bytes) {
        // never leave a partial artifact behind
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    let file_name = match category.naming_policy() {
        NamingPolicy::Fixed => format!("{}_{}{}", owner_code, category.slug(), extension),
        NamingPolicy::Unique => {
            format!("{}_{}_{}{}", owner_code, category.slug(), token, extension)
        }
    };
    let dest_dir = Path::new(&root).join(category.slug()).join(owner_code);
    if let Err(e) = fs::create_dir_all(&dest_dir) {
        log::error!(
            "Failed to create destination directory: {e:?}\n{}",
            Backtrace::force_capture()
        );
        let _ = fs::remove_file(&temp_path);
        return Err(StoreFileError::FileSystemError);
    }
    let dest_path = dest_dir.join(&file_name);
    if dest_path.exists() {
        // fixed-slot re-upload replaces the previous file
        let _ = fs::remove_file(&dest_path);
    }
    if let Err(e) = fs::rename(&temp_path, &dest_path) {
        log::error!(
            "Failed to move uploaded file into place: {e:?}\n{}",
            Backtrace::force_capture()
        );
        let _ = fs::remove_file(&temp_path);
        return Err(StoreFileError::FileSystemError);
    }
    set_world_readable(&dest_path);
    Ok(StoredFileRef {
        category,
        owner_code: owner_code.to_string(),
        file_name,
    })
}

fn write_chunked(
    input: &mut impl Read,
    temp_path: &Path,
    max_bytes: u64,
) -> Result<(), StoreFileError> {
    let mut out = fs::File::create(temp_path).map_err(|e| {
        log::error!(
            "Failed to create temp file: {e:?}\n{}",
            Backtrace::force_capture()
        );
        StoreFileError::FileSystemError
    })?;
    let mut buf = [0u8; CHUNK_SIZE];
    let mut written: u64 = 0;
    loop {
        let read = input.read(&mut buf).map_err(|e| {
            log::error!(
                "Failed to read upload stream: {e:?}\n{}",
                Backtrace::force_capture()
            );
            StoreFileError::FileSystemError
        })?;
        if read == 0 {
            break;
        }
        written += read as u64;
        if written > max_bytes {
            return Err(StoreFileError::PayloadTooLarge);
        }
        out.write_all(&buf[..read]).map_err(|e| {
            log::error!(
                "Failed to write temp file: {e:?}\n{}",
                Backtrace::force_capture()
            );
            StoreFileError::FileSystemError
        })?;
    }
    out.flush().map_err(|e| {
        log::error!(
            "Failed to flush temp file: {e:?}\n{}",
            Backtrace::force_capture()
        );
        StoreFileError::FileSystemError
    })?;
    Ok(())
}

/// pulls the extension off the original filename, falling back to `.jpg`.
/// Anything that isn't alphanumeric gets stripped so a hostile filename can't
/// smuggle path characters into the stored name
pub fn derive_extension(original_name: Option<&str>) -> String {
    let Some(name) = original_name else {
        return String::from(".jpg");
    };
    let Some((_, raw_ext)) = name.rsplit_once('.') else {
        return String::from(".jpg");
    };
    let cleaned: String = raw_ext
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    if cleaned.is_empty() {
        String::from(".jpg")
    } else {
        format!(".{cleaned}")
    }
}

fn is_allowed_content_type(declared: &str) -> bool {
    // content type params like `; charset=...` don't matter for the check
    let base = declared.split(';').next().unwrap_or("").trim().to_lowercase();
    ALLOWED_CONTENT_TYPES.contains(&base.as_str())
}

#[cfg(unix)]
fn set_world_readable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o644)) {
        log::warn!("Failed to set permissions on {path:?}: {e:?}");
    }
}

#[cfg(not(unix))]
fn set_world_readable(_path: &Path) {}

/// Removes a stored file if it's still on disk, then its parent directory if
/// that directory is now empty. Returns whether a file was actually removed.
/// Directory removal failures are swallowed; a non-empty or locked directory
/// is an expected condition
pub fn remove_if_exists(relative_path: &str) -> bool {
    let root = upload_root();
    let path = Path::new(&root).join(relative_path.replace('\\', "/"));
    if !path.exists() {
        return false;
    }
    if let Err(e) = fs::remove_file(&path) {
        log::warn!("Failed to remove stored file {path:?}: {e:?}");
        return false;
    }
    if let Some(parent) = path.parent() {
        if let Ok(mut entries) = fs::read_dir(parent) {
            if entries.next().is_none() {
                if let Err(e) = fs::remove_dir(parent) {
                    log::warn!("Failed to remove empty directory {parent:?}: {e:?}");
                }
            }
        }
    }
    true
}

/// deletes temp files older than `max_age`. Temp files are never referenced
/// by the database, so age is the only criterion
pub fn sweep_temp(max_age: Duration) -> u32 {
    let root = upload_root();
    let temp_dir = Path::new(&root).join(TEMP_DIR_NAME);
    let Ok(entries) = fs::read_dir(&temp_dir) else {
        return 0;
    };
    let cutoff = SystemTime::now() - max_age;
    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if modified_before(&path, cutoff) && fs::remove_file(&path).is_ok() {
            removed += 1;
        }
    }
    removed
}

/// Walks the upload root and deletes files nothing in `known_paths` points at.
/// `tmp/` and `reports/` are skipped; temp files belong to [sweep_temp] and
/// report documents are regenerated on demand. The `min_age` floor keeps the
/// sweep from racing an upload whose database row hasn't been committed yet
pub fn sweep_orphans(known_paths: &HashSet<String>, min_age: Duration) -> u32 {
    let root = upload_root();
    let root_path = PathBuf::from(&root);
    let cutoff = SystemTime::now() - min_age;
    let mut removed = 0;
    let Ok(entries) = fs::read_dir(&root_path) else {
        return 0;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let name = entry.file_name();
        if name == TEMP_DIR_NAME || name == REPORT_DIR_NAME {
            continue;
        }
        if path.is_dir() {
            sweep_orphan_dir(&path, &root_path, known_paths, cutoff, &mut removed);
        } else {
            // stray files directly under the root are orphans too
            sweep_orphan_file(&path, &root_path, known_paths, cutoff, &mut removed);
        }
    }
    removed
}

fn sweep_orphan_dir(
    dir: &Path,
    root: &Path,
    known_paths: &HashSet<String>,
    cutoff: SystemTime,
    removed: &mut u32,
) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            sweep_orphan_dir(&path, root, known_paths, cutoff, removed);
        } else {
            sweep_orphan_file(&path, root, known_paths, cutoff, removed);
        }
    }
    // the directory itself may now be empty
    if let Ok(mut entries) = fs::read_dir(dir) {
        if entries.next().is_none() {
            let _ = fs::remove_dir(dir);
        }
    }
}

fn sweep_orphan_file(
    path: &Path,
    root: &Path,
    known_paths: &HashSet<String>,
    cutoff: SystemTime,
    removed: &mut u32,
) {
    let Ok(relative) = path.strip_prefix(root) else {
        return;
    };
    let relative = relative.to_string_lossy().replace('\\', "/");
    if known_paths.contains(&relative) {
        return;
    }
    if modified_before(path, cutoff) && fs::remove_file(path).is_ok() {
        *removed += 1;
    }
}

fn modified_before(path: &Path, cutoff: SystemTime) -> bool {
    match path.metadata().and_then(|m| m.modified()) {
        Ok(modified) => modified <= cutoff,
        Err(_) => false,
    }
}

/// Read-side resolution for the report compositor. The on-disk layout has
/// changed over the deployment's history, so a stored path is probed against
/// every search root crossed with every configured legacy layout, in order,
/// and the first hit wins
pub fn resolve(stored_path: Option<&str>, owner_code: &str) -> Option<PathBuf> {
    let (roots, layouts) = search_config();
    resolve_in_roots(stored_path, owner_code, &roots, &layouts)
}

#[cfg(not(test))]
fn search_config() -> (Vec<String>, Vec<String>) {
    use crate::config::TANK_SERVER_CONFIG;
    let config = TANK_SERVER_CONFIG.clone();
    let mut roots = vec![upload_root()];
    roots.extend(config.upload.extra_search_roots);
    (roots, config.upload.legacy_layouts)
}

#[cfg(test)]
fn search_config() -> (Vec<String>, Vec<String>) {
    (
        vec![upload_root()],
        vec![
            String::from("tank_images_mobile/{path}/{file}"),
            String::from("{path}/originals/{file}"),
            String::from("{path}/thumbnails/{file}"),
        ],
    )
}

pub fn resolve_in_roots(
    stored_path: Option<&str>,
    owner_code: &str,
    search_roots: &[String],
    layouts: &[String],
) -> Option<PathBuf> {
    let stored = stored_path?.trim();
    if stored.is_empty() {
        return None;
    }
    let mut normalized = stored.replace('\\', "/");
    // very old records carry the root itself in the stored path
    if let Some(stripped) = normalized.strip_prefix("uploads/") {
        normalized = stripped.to_string();
    }
    let (dir_part, file_part) = match normalized.rsplit_once('/') {
        Some((dir, file)) => (dir.to_string(), file.to_string()),
        None => (String::new(), normalized.clone()),
    };
    for root in search_roots {
        let root_path = Path::new(root);
        // current convention first
        let direct = root_path.join(&normalized);
        if direct.is_file() {
            return Some(direct);
        }
        for layout in layouts {
            let rendered = render_layout(layout, &dir_part, owner_code, &file_part);
            let candidate = root_path.join(rendered);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

fn render_layout(template: &str, dir_part: &str, owner_code: &str, file_part: &str) -> String {
    let rendered = template
        .replace("{path}", dir_part)
        .replace("{owner}", owner_code)
        .replace("{file}", file_part);
    // a template may render an empty segment when the stored path is flat
    rendered.replace("//", "/").trim_start_matches('/').to_string()
}

#[cfg(test)]
mod storage_service_tests {
    use std::io::Cursor;

    use super::*;
    use crate::test::cleanup;

    fn read_stored(file_ref: &StoredFileRef) -> Vec<u8> {
        let path = Path::new(&upload_root()).join(file_ref.relative_path());
        fs::read(path).unwrap()
    }

    #[test]
    fn store_round_trips_content() {
        let content = vec![7u8; 3000];
        let file_ref = store(
            &mut Cursor::new(content.clone()),
            "TANK-9",
            FileCategory::Certificates,
            Some("application/pdf"),
            Some("cert.pdf"),
            1024 * 1024,
        )
        .unwrap();
        assert_eq!("certificates/TANK-9/TANK-9_certificates.pdf", file_ref.relative_path());
        assert_eq!(content, read_stored(&file_ref));
        cleanup();
    }

    #[test]
    fn store_rejects_missing_and_unsupported_content_types() {
        let res = store(
            &mut Cursor::new(vec![1u8]),
            "TANK-9",
            FileCategory::FrontView,
            None,
            Some("a.jpg"),
            1024,
        );
        assert_eq!(Err(StoreFileError::MissingContentType), res);
        let res = store(
            &mut Cursor::new(vec![1u8]),
            "TANK-9",
            FileCategory::FrontView,
            Some("text/html"),
            Some("a.jpg"),
            1024,
        );
        assert_eq!(
            Err(StoreFileError::UnsupportedMediaType("text/html".to_string())),
            res
        );
        cleanup();
    }

    #[test]
    fn store_over_limit_leaves_nothing_behind() {
        let res = store(
            &mut Cursor::new(vec![0u8; 200_000]),
            "TANK-9",
            FileCategory::FrontView,
            Some("image/jpeg"),
            Some("big.jpg"),
            100_000,
        );
        assert_eq!(Err(StoreFileError::PayloadTooLarge), res);
        let root = upload_root();
        let temp_dir = Path::new(&root).join(TEMP_DIR_NAME);
        let leftovers: Vec<_> = fs::read_dir(&temp_dir)
            .map(|entries| entries.flatten().collect())
            .unwrap_or_default();
        assert!(leftovers.is_empty());
        assert!(!Path::new(&root).join("frontview").exists());
        cleanup();
    }

    #[test]
    fn fixed_slot_reupload_overwrites() {
        let first = store(
            &mut Cursor::new(b"first".to_vec()),
            "TANK-1",
            FileCategory::TopView,
            Some("image/png"),
            Some("one.png"),
            1024,
        )
        .unwrap();
        let second = store(
            &mut Cursor::new(b"second".to_vec()),
            "TANK-1",
            FileCategory::TopView,
            Some("image/png"),
            Some("two.png"),
            1024,
        )
        .unwrap();
        assert_eq!(first, second);
        assert_eq!(b"second".to_vec(), read_stored(&second));
        let dir = Path::new(&upload_root()).join("topview").join("TANK-1");
        assert_eq!(1, fs::read_dir(dir).unwrap().count());
        cleanup();
    }

    #[test]
    fn unique_policy_accumulates() {
        let first = store(
            &mut Cursor::new(b"ga".to_vec()),
            "TANK-1",
            FileCategory::Drawings,
            Some("application/pdf"),
            Some("ga.pdf"),
            1024,
        )
        .unwrap();
        let second = store(
            &mut Cursor::new(b"piping".to_vec()),
            "TANK-1",
            FileCategory::Drawings,
            Some("application/pdf"),
            Some("piping.pdf"),
            1024,
        )
        .unwrap();
        assert_ne!(first.file_name, second.file_name);
        let dir = Path::new(&upload_root()).join("drawings").join("TANK-1");
        assert_eq!(2, fs::read_dir(dir).unwrap().count());
        cleanup();
    }

    #[test]
    fn remove_if_exists_cleans_empty_parent_only() {
        let kept = store(
            &mut Cursor::new(b"keep".to_vec()),
            "TANK-2",
            FileCategory::Drawings,
            Some("application/pdf"),
            Some("keep.pdf"),
            1024,
        )
        .unwrap();
        let removed = store(
            &mut Cursor::new(b"drop".to_vec()),
            "TANK-2",
            FileCategory::Drawings,
            Some("application/pdf"),
            Some("drop.pdf"),
            1024,
        )
        .unwrap();
        assert!(remove_if_exists(&removed.relative_path()));
        let parent = Path::new(&upload_root()).join("drawings").join("TANK-2");
        // sibling still there, so the directory must survive
        assert!(parent.exists());
        assert!(remove_if_exists(&kept.relative_path()));
        assert!(!parent.exists());
        assert!(!remove_if_exists(&kept.relative_path()));
        cleanup();
    }

    #[test]
    fn sweep_temp_respects_age_threshold() {
        let root = upload_root();
        let temp_dir = Path::new(&root).join(TEMP_DIR_NAME);
        fs::create_dir_all(&temp_dir).unwrap();
        fs::write(temp_dir.join("abc123.jpg"), b"stale").unwrap();
        // a 2 hour threshold keeps a file written moments ago
        assert_eq!(0, sweep_temp(Duration::from_secs(2 * 60 * 60)));
        assert!(temp_dir.join("abc123.jpg").exists());
        // a zero threshold reclaims it
        assert_eq!(1, sweep_temp(Duration::ZERO));
        assert!(!temp_dir.join("abc123.jpg").exists());
        cleanup();
    }

    #[test]
    fn sweep_orphans_spares_known_and_young_files() {
        let referenced = store(
            &mut Cursor::new(b"mine".to_vec()),
            "TANK-3",
            FileCategory::Certificates,
            Some("application/pdf"),
            Some("cert.pdf"),
            1024,
        )
        .unwrap();
        let orphan = store(
            &mut Cursor::new(b"lost".to_vec()),
            "TANK-3",
            FileCategory::FrontView,
            Some("image/jpeg"),
            Some("orphan.jpg"),
            1024,
        )
        .unwrap();
        let mut known = HashSet::new();
        known.insert(referenced.relative_path());
        // both files are brand new, so an age floor protects them
        assert_eq!(0, sweep_orphans(&known, Duration::from_secs(60 * 60)));
        assert_eq!(1, sweep_orphans(&known, Duration::ZERO));
        let root = upload_root();
        assert!(Path::new(&root).join(referenced.relative_path()).exists());
        assert!(!Path::new(&root).join(orphan.relative_path()).exists());
        cleanup();
    }

    #[test]
    fn sweep_orphans_reclaims_files_directly_under_the_root() {
        let root = upload_root();
        fs::create_dir_all(&root).unwrap();
        fs::write(Path::new(&root).join("stray.jpg"), b"stray").unwrap();
        assert_eq!(1, sweep_orphans(&HashSet::new(), Duration::ZERO));
        assert!(!Path::new(&root).join("stray.jpg").exists());
        cleanup();
    }

    #[test]
    fn resolve_probes_roots_and_legacy_layouts_in_order() {
        let base = format!("./{}_resolve", crate::test::current_thread_name());
        let root_a = format!("{base}/a");
        let root_b = format!("{base}/b");
        let legacy_dir = Path::new(&root_b)
            .join("certificates")
            .join("TANK-5")
            .join("originals");
        fs::create_dir_all(&legacy_dir).unwrap();
        fs::write(legacy_dir.join("TANK-5_certificates.pdf"), b"x").unwrap();
        let roots = vec![root_a, root_b];
        let layouts = vec![String::from("{path}/originals/{file}")];
        let found = resolve_in_roots(
            Some("certificates/TANK-5/TANK-5_certificates.pdf"),
            "TANK-5",
            &roots,
            &layouts,
        );
        assert_eq!(
            Some(legacy_dir.join("TANK-5_certificates.pdf")),
            found
        );
        assert_eq!(None, resolve_in_roots(Some("  "), "TANK-5", &roots, &layouts));
        assert_eq!(None, resolve_in_roots(None, "TANK-5", &roots, &layouts));
        fs::remove_dir_all(&base).unwrap();
        cleanup();
    }

    #[test]
    fn resolve_strips_legacy_prefix_and_backslashes() {
        let stored = store(
            &mut Cursor::new(b"pic".to_vec()),
            "TANK-6",
            FileCategory::RearView,
            Some("image/jpeg"),
            Some("rear.jpg"),
            1024,
        )
        .unwrap();
        let legacy_form = format!(
            "uploads\\{}",
            stored.relative_path().replace('/', "\\")
        );
        let found = resolve(Some(&legacy_form), "TANK-6");
        assert!(found.is_some());
        assert!(found.unwrap().is_file());
        cleanup();
    }

    #[test]
    fn stored_file_ref_parse_round_trips() {
        let file_ref = StoredFileRef {
            category: FileCategory::SafetyValve,
            owner_code: "TANK-7".to_string(),
            file_name: "TANK-7_safetyvalve.jpg".to_string(),
        };
        assert_eq!(
            Some(file_ref.clone()),
            StoredFileRef::parse(&file_ref.relative_path())
        );
        assert_eq!(None, StoredFileRef::parse("not-a-category/x/y.jpg"));
        assert_eq!(None, StoredFileRef::parse("certificates/missing-segment.jpg"));
    }
}
