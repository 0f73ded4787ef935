//! Converge one file to its desired content.

use tracing::{debug, info};

use crate::core::plan::plan;
use crate::core::types::{Outcome, Request};
use crate::error::ConvergeError;
use crate::io::target::{observe, write_content};

/// Bring `request.path` in line with `request.content`.
///
/// Performs at most one write, and none in dry-run mode. A missing parent
/// directory surfaces as [`ConvergeError::Write`].
pub fn converge(request: &Request) -> Result<Outcome, ConvergeError> {
    let observed = observe(&request.path).map_err(|source| ConvergeError::Read {
        path: request.path.clone(),
        source,
    })?;
    let decision = plan(&observed, &request.content, request.dry_run);
    debug!(
        path = %request.path.display(),
        dry_run = request.dry_run,
        changed = decision.changed,
        "planned"
    );

    if decision.write {
        write_content(&request.path, &request.content).map_err(|source| {
            ConvergeError::Write {
                path: request.path.clone(),
                source,
            }
        })?;
        info!(path = %request.path.display(), "content written");
    }

    Ok(Outcome {
        path: request.path.clone(),
        content: request.content.clone(),
        changed: decision.changed,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::ModuleFixture;

    #[test]
    fn creates_missing_file() {
        let fixture = ModuleFixture::new().expect("fixture");
        let request = fixture.request("welcome.txt", "Hello from Ansible!", false);

        let outcome = converge(&request).expect("converge");

        assert!(outcome.changed);
        assert_eq!(outcome.path, request.path);
        assert_eq!(outcome.content, "Hello from Ansible!");
        assert_eq!(
            fs::read_to_string(&request.path).expect("read"),
            "Hello from Ansible!"
        );
    }

    #[test]
    fn overwrites_different_content() {
        let fixture = ModuleFixture::new().expect("fixture");
        fixture.seed("config.conf", "old").expect("seed");
        let request = fixture.request("config.conf", "new", false);

        let outcome = converge(&request).expect("converge");

        assert!(outcome.changed);
        assert_eq!(fs::read_to_string(&request.path).expect("read"), "new");
    }

    #[test]
    fn matching_content_is_left_alone() {
        let fixture = ModuleFixture::new().expect("fixture");
        fixture.seed("same.txt", "same").expect("seed");
        let request = fixture.request("same.txt", "same", false);
        let before = fs::metadata(&request.path)
            .and_then(|meta| meta.modified())
            .expect("mtime");

        let outcome = converge(&request).expect("converge");

        assert!(!outcome.changed);
        let after = fs::metadata(&request.path)
            .and_then(|meta| meta.modified())
            .expect("mtime");
        assert_eq!(before, after);
    }

    #[test]
    fn dry_run_does_not_create_file() {
        let fixture = ModuleFixture::new().expect("fixture");
        let request = fixture.request("planned.txt", "content", true);

        let outcome = converge(&request).expect("converge");

        assert!(outcome.changed);
        assert!(!request.path.exists());
    }

    #[test]
    fn dry_run_does_not_modify_existing_file() {
        let fixture = ModuleFixture::new().expect("fixture");
        fixture.seed("keep.txt", "old").expect("seed");
        let request = fixture.request("keep.txt", "new", true);

        let outcome = converge(&request).expect("converge");

        assert!(outcome.changed);
        assert_eq!(fs::read_to_string(&request.path).expect("read"), "old");
    }

    #[test]
    fn empty_content_creates_empty_file() {
        let fixture = ModuleFixture::new().expect("fixture");
        let request = fixture.request("empty.txt", "", false);

        let outcome = converge(&request).expect("converge");

        assert!(outcome.changed);
        assert_eq!(fs::read(&request.path).expect("read"), Vec::<u8>::new());
    }

    #[test]
    fn second_apply_reports_no_change() {
        let fixture = ModuleFixture::new().expect("fixture");
        let request = fixture.request("idempotent.txt", "line one\nline two\n", false);

        assert!(converge(&request).expect("first").changed);
        assert!(!converge(&request).expect("second").changed);
        assert_eq!(
            fs::read_to_string(&request.path).expect("read"),
            "line one\nline two\n"
        );
    }

    #[test]
    fn directory_target_is_a_read_error() {
        let fixture = ModuleFixture::new().expect("fixture");
        let request = Request {
            path: fixture.root().to_path_buf(),
            content: "x".to_string(),
            dry_run: false,
        };

        let err = converge(&request).expect_err("read error");

        assert!(matches!(err, ConvergeError::Read { .. }));
        assert_eq!(err.path(), &request.path);
        assert!(fixture.root().is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_file_is_a_read_error_without_write() {
        use std::os::unix::fs::PermissionsExt;

        let fixture = ModuleFixture::new().expect("fixture");
        let path = fixture.seed("secret.txt", "old").expect("seed");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).expect("chmod");
        if fs::read(&path).is_ok() {
            // Privileged users bypass mode bits; nothing to assert.
            return;
        }
        let request = fixture.request("secret.txt", "new", false);

        let err = converge(&request).expect_err("read error");

        assert!(matches!(err, ConvergeError::Read { .. }));
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).expect("chmod");
        assert_eq!(fs::read_to_string(&path).expect("read"), "old");
    }

    #[test]
    fn missing_parent_is_a_write_error() {
        let fixture = ModuleFixture::new().expect("fixture");
        let request = fixture.request("missing/parent.txt", "x", false);

        let err = converge(&request).expect_err("write error");

        assert!(matches!(err, ConvergeError::Write { .. }));
        assert!(!fixture.root().join("missing").exists());
    }

    #[test]
    fn missing_parent_in_dry_run_reports_change() {
        let fixture = ModuleFixture::new().expect("fixture");
        let request = fixture.request("missing/parent.txt", "x", true);

        let outcome = converge(&request).expect("converge");

        assert!(outcome.changed);
    }
}
