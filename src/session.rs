//! Admin session gate.
//!
//! A single flag in client storage stands in for real authentication. The
//! credential pair is a hard-coded placeholder visible to anyone reading
//! this file; it is explicitly not a security boundary. A real deployment
//! would verify credentials server-side and issue session tokens instead.

use crate::storage::ClientStorage;

pub const SESSION_KEY: &str = "adminAuth";
pub const SESSION_SENTINEL: &str = "true";

const ADMIN_USERNAME: &str = "director";
const ADMIN_PASSWORD: &str = "tagore2024";

/// Generic on purpose: the caller learns nothing about which field failed.
pub const LOGIN_ERROR: &str = "Invalid username or password";

/// Plaintext equality against the fixed pair. On match the session flag is
/// set; on mismatch nothing changes.
pub fn login(storage: &mut ClientStorage, username: &str, password: &str) -> anyhow::Result<bool> {
    if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
        storage.set(SESSION_KEY, SESSION_SENTINEL)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

pub fn logout(storage: &mut ClientStorage) -> anyhow::Result<()> {
    storage.remove(SESSION_KEY)
}

/// Exactly the sentinel value grants access. Absent, corrupted, or any
/// other value all read as "not authenticated".
pub fn is_authenticated(storage: &ClientStorage) -> bool {
    storage.get(SESSION_KEY) == Some(SESSION_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_storage(dir: &tempfile::TempDir) -> ClientStorage {
        ClientStorage::open(dir.path()).expect("open storage")
    }

    #[test]
    fn only_the_exact_pair_logs_in() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut storage = open_storage(&dir);

        assert!(!login(&mut storage, "director", "wrong").expect("login"));
        assert!(!login(&mut storage, "admin", "tagore2024").expect("login"));
        assert!(!is_authenticated(&storage));

        assert!(login(&mut storage, "director", "tagore2024").expect("login"));
        assert!(is_authenticated(&storage));

        logout(&mut storage).expect("logout");
        assert!(!is_authenticated(&storage));
    }

    #[test]
    fn non_sentinel_value_is_not_authenticated() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut storage = open_storage(&dir);
        storage.set(SESSION_KEY, "TRUE").expect("set");
        assert!(!is_authenticated(&storage));
        storage.set(SESSION_KEY, "1").expect("set");
        assert!(!is_authenticated(&storage));
    }
}
