use crate::error::{Result, VermanError};
use crate::store::VersionStore;
use crate::version::{IncrementKind, SemVer};

/// A single requested version increment.
///
/// Exactly one flag must be set; this is validated as a hard precondition
/// before anything is read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IncrementRequest {
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
}

impl IncrementRequest {
    /// Request with only the major flag set.
    pub fn major() -> Self {
        IncrementRequest {
            major: true,
            ..Default::default()
        }
    }

    /// Request with only the minor flag set.
    pub fn minor() -> Self {
        IncrementRequest {
            minor: true,
            ..Default::default()
        }
    }

    /// Request with only the patch flag set.
    pub fn patch() -> Self {
        IncrementRequest {
            patch: true,
            ..Default::default()
        }
    }

    /// Validate the request and resolve it to an increment kind.
    ///
    /// Flags are checked in major, minor, patch order, though validation
    /// guarantees only one can be set.
    pub fn kind(&self) -> Result<IncrementKind> {
        let set = [self.major, self.minor, self.patch]
            .iter()
            .filter(|flag| **flag)
            .count();
        if set != 1 {
            return Err(VermanError::invalid_request(format!(
                "exactly one of major/minor/patch must be set, got {}",
                set
            )));
        }

        if self.major {
            Ok(IncrementKind::Major)
        } else if self.minor {
            Ok(IncrementKind::Minor)
        } else {
            Ok(IncrementKind::Patch)
        }
    }
}

/// Computes and commits exactly one category of version increment.
pub struct VersionBumper<'a> {
    store: &'a mut VersionStore,
}

impl<'a> VersionBumper<'a> {
    pub fn new(store: &'a mut VersionStore) -> Self {
        VersionBumper { store }
    }

    /// Bump the stored version according to the request.
    ///
    /// An invalid request fails before any read or write. Otherwise the
    /// current version is fetched, bumped, persisted, and returned. If
    /// persistence fails nothing is committed.
    pub fn bump(&mut self, request: IncrementRequest) -> Result<SemVer> {
        let kind = request.kind()?;
        let next = self.store.current_version()?.bumped(kind);
        self.store.persist(next)?;
        Ok(next)
    }

    /// Entry point for the major bump task.
    pub fn bump_major(&mut self) -> Result<SemVer> {
        self.bump(IncrementRequest::major())
    }

    /// Entry point for the minor bump task.
    pub fn bump_minor(&mut self) -> Result<SemVer> {
        self.bump(IncrementRequest::minor())
    }

    /// Entry point for the patch bump task.
    pub fn bump_patch(&mut self) -> Result<SemVer> {
        self.bump(IncrementRequest::patch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DEFAULT_VERSION_FILE;
    use std::fs;

    fn store_with(dir: &tempfile::TempDir, content: &str) -> VersionStore {
        let path = dir.path().join(DEFAULT_VERSION_FILE);
        fs::write(&path, content).unwrap();
        VersionStore::new(path)
    }

    #[test]
    fn test_request_kind_single_flag() {
        assert_eq!(
            IncrementRequest::major().kind().unwrap(),
            IncrementKind::Major
        );
        assert_eq!(
            IncrementRequest::minor().kind().unwrap(),
            IncrementKind::Minor
        );
        assert_eq!(
            IncrementRequest::patch().kind().unwrap(),
            IncrementKind::Patch
        );
    }

    #[test]
    fn test_request_no_flags_rejected() {
        let err = IncrementRequest::default().kind().unwrap_err();
        assert!(matches!(err, VermanError::InvalidIncrementRequest(_)));
        assert!(err.to_string().contains("got 0"));
    }

    #[test]
    fn test_request_multiple_flags_rejected() {
        let request = IncrementRequest {
            major: true,
            minor: true,
            patch: false,
        };
        let err = request.kind().unwrap_err();
        assert!(matches!(err, VermanError::InvalidIncrementRequest(_)));
        assert!(err.to_string().contains("got 2"));
    }

    #[test]
    fn test_bump_major() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with(&dir, "version=1.2.3\n");
        let bumped = VersionBumper::new(&mut store).bump_major().unwrap();
        assert_eq!(bumped, SemVer::new(2, 0, 0));

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("version=2.0.0"));
    }

    #[test]
    fn test_bump_minor() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with(&dir, "version=1.2.3\n");
        let bumped = VersionBumper::new(&mut store).bump_minor().unwrap();
        assert_eq!(bumped, SemVer::new(1, 3, 0));
    }

    #[test]
    fn test_bump_patch() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with(&dir, "version=1.2.3\n");
        let bumped = VersionBumper::new(&mut store).bump_patch().unwrap();
        assert_eq!(bumped, SemVer::new(1, 2, 4));
    }

    #[test]
    fn test_first_bump_materializes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = VersionStore::new(dir.path().join(DEFAULT_VERSION_FILE));
        let bumped = VersionBumper::new(&mut store).bump_patch().unwrap();
        assert_eq!(bumped, SemVer::new(0, 0, 1));
        assert!(store.path().exists());
    }

    #[test]
    fn test_invalid_request_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with(&dir, "version=1.2.3\n");
        let before = fs::read_to_string(store.path()).unwrap();

        let request = IncrementRequest {
            major: true,
            minor: true,
            patch: true,
        };
        assert!(VersionBumper::new(&mut store).bump(request).is_err());

        let after = fs::read_to_string(store.path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_malformed_stored_version_aborts_bump() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with(&dir, "version=1.2\n");
        let err = VersionBumper::new(&mut store).bump_patch().unwrap_err();
        assert!(matches!(err, VermanError::MalformedVersion(_)));

        // The malformed file is left as-is for inspection.
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("version=1.2"));
    }

    #[test]
    fn test_successive_bumps_are_monotonic() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with(&dir, "version=0.9.9\n");
        let mut bumper = VersionBumper::new(&mut store);

        let v1 = bumper.bump_patch().unwrap();
        let v2 = bumper.bump_minor().unwrap();
        let v3 = bumper.bump_major().unwrap();
        assert!(SemVer::new(0, 9, 9) < v1 && v1 < v2 && v2 < v3);
        assert_eq!(v3, SemVer::new(1, 0, 0));
    }
}
