//! Session subcommands: login, logout, whoami.

use anyhow::Result;
use starscan_storage::{SessionAuth, StoredSession};

use crate::styled::{print_dim, print_info, print_success};

/// Mints and stores a session for `name`. Replaces any existing one.
pub fn run_login(auth: &SessionAuth, name: &str, email: Option<&str>) -> Result<()> {
    let previous = auth.load()?;
    let session = StoredSession::issue(name.trim(), email.unwrap_or("").trim());
    auth.save(&session)?;
    match previous {
        Some(old) => print_success(&format!(
            "Signed in as {} (replaced session for {}).",
            session.name, old.name
        )),
        None => print_success(&format!("Signed in as {}.", session.name)),
    }
    Ok(())
}

/// Removes the stored session, if any.
pub fn run_logout(auth: &SessionAuth) -> Result<()> {
    if auth.delete()? {
        print_success("Signed out.");
    } else {
        print_info("No active session.");
    }
    Ok(())
}

/// Prints the current session identity.
pub fn run_whoami(auth: &SessionAuth) -> Result<()> {
    match auth.load()? {
        Some(session) => {
            print_info(&format!("Signed in as {}", session.name));
            if !session.email.is_empty() {
                print_dim(&session.email);
            }
        }
        None => print_info("Not signed in. Runs are recorded as Anonymous."),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use starscan_storage::StarscanPaths;
    use tempfile::TempDir;

    fn auth() -> (SessionAuth, TempDir) {
        let dir = TempDir::new().unwrap();
        let auth = SessionAuth::with_paths(StarscanPaths::with_root(dir.path())).unwrap();
        (auth, dir)
    }

    #[test]
    fn login_overwrites_previous_session() {
        let (auth, _dir) = auth();
        run_login(&auth, "First", None).unwrap();
        run_login(&auth, "Second", Some("second@fleet.example")).unwrap();
        let session = auth.load().unwrap().unwrap();
        assert_eq!(session.name, "Second");
        assert_eq!(session.email, "second@fleet.example");
    }

    #[test]
    fn logout_is_idempotent() {
        let (auth, _dir) = auth();
        run_login(&auth, "Commander", None).unwrap();
        run_logout(&auth).unwrap();
        run_logout(&auth).unwrap();
        assert_eq!(auth.load().unwrap(), None);
    }
}
