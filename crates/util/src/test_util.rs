use crate::ResultTraced;
use rstest::fixture;
use std::{
    env, fs,
    ops::Deref,
    path::{Path, PathBuf},
};
use uuid::Uuid;

/// Create a new temporary folder. This will include a random subfolder to
/// guarantee uniqueness for this test.
#[fixture]
pub fn temp_dir() -> TempDir {
    TempDir::new()
}

/// Guard for a temporary directory. Create the directory on creation, delete
/// it on drop.
#[derive(Debug)]
pub struct TempDir(PathBuf);

impl TempDir {
    fn new() -> Self {
        let path = env::temp_dir().join(Uuid::new_v4().to_string());
        fs::create_dir(&path).unwrap();
        Self(path)
    }
}

impl Deref for TempDir {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        // Clean up
        let _ = fs::remove_dir_all(&self.0).traced();
    }
}

/// Write an executable stub script that stands in for an external program.
/// The given body is wrapped in a `sh` script, so tests can fake any
/// stdout/stderr/exit status combination. Returns the program's path.
#[cfg(unix)]
pub fn stub_program(
    dir: impl AsRef<Path>,
    name: &str,
    body: &str,
) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.as_ref().join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Assert a result is the `Err` variant and the stringified error contains
/// the given message. The `Err` variant type must implement
/// `Into<anyhow::Error>`. All errors are converted to anyhow to ensure the
/// display string contains the entire error context.
#[macro_export]
macro_rules! assert_err {
    ($result:expr, $msg:expr) => {{
        let error = $result.unwrap_err();
        let msg = $msg;
        let actual = format!("{error:#}");
        assert!(
            actual.contains(msg),
            "Expected error message to contain {msg:?}, but was: {actual:?}"
        )
    }};
}
