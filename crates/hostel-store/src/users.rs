//! Accounts and authentication.

use crate::error::{require, Result, StoreError};
use crate::models::{Record, User};
use crate::store::{Collection, RecordStore};

impl RecordStore {
    pub fn users(&self) -> Vec<User> {
        self.load_all::<User>()
    }

    pub fn find_user(&self, username: &str) -> Option<User> {
        let username = username.trim();
        self.users().into_iter().find(|u| u.username == username)
    }

    /// Plaintext comparison against every stored account; the first match
    /// wins. Not a security boundary.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<User> {
        let username = username.trim();
        let user = self
            .users()
            .into_iter()
            .find(|u| u.username == username && u.password == password);

        match &user {
            Some(u) => tracing::info!(username = %u.username, role = %u.role, "login succeeded"),
            None => tracing::info!(username = %username, "login failed"),
        }
        user
    }

    /// Create an account. Username, password and full name must be
    /// non-blank and the username must be unused.
    pub fn add_user(&self, user: User) -> Result<User> {
        let user = User {
            username: require("Username", &user.username)?,
            password: require("Password", &user.password)?,
            full_name: require("Full name", &user.full_name)?,
            room_number: user
                .room_number
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
            role: user.role,
        };

        if self.find_user(&user.username).is_some() {
            return Err(StoreError::Duplicate {
                kind: "User",
                key: user.username,
            });
        }

        self.append(&user)?;
        tracing::info!(username = %user.username, role = %user.role, "user added");
        Ok(user)
    }

    /// Remove an account. Room memberships that name the user are left as
    /// they are.
    pub fn delete_user(&self, username: &str) -> Result<User> {
        let username = username.trim();
        let mut raw = self.load(Collection::Users);

        let index = raw
            .iter()
            .position(|r| User::from_raw(r).is_ok_and(|u| u.username == username))
            .ok_or_else(|| StoreError::not_found("User", username))?;

        let removed = User::from_raw(&raw.remove(index))?;
        self.save(Collection::Users, &raw)?;

        tracing::info!(username = %removed.username, "user deleted");
        Ok(removed)
    }

    /// Replace the stored account with the same username.
    pub(crate) fn put_user(&self, user: &User) -> Result<()> {
        let mut raw = self.load(Collection::Users);
        let slot = raw
            .iter_mut()
            .find(|r| User::from_raw(r).is_ok_and(|u| u.username == user.username))
            .ok_or_else(|| StoreError::not_found("User", user.username.clone()))?;
        *slot = user.to_raw();
        self.save(Collection::Users, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostel_shared::types::Role;
    use tempfile::TempDir;

    fn test_store() -> (RecordStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open_at(dir.path());
        (store, dir)
    }

    fn resident(username: &str, password: &str, room: Option<&str>) -> User {
        User {
            username: username.into(),
            password: password.into(),
            role: Role::Resident,
            room_number: room.map(Into::into),
            full_name: format!("{username} resident"),
        }
    }

    #[test]
    fn test_authenticate() {
        let (store, _dir) = test_store();
        store.add_user(resident("sarah", "sarah123", Some("101"))).unwrap();

        let user = store.authenticate("sarah", "sarah123").expect("valid login");
        assert_eq!(user.role, Role::Resident);
        assert_eq!(user.room_number.as_deref(), Some("101"));

        assert!(store.authenticate("sarah", "wrong").is_none());
        assert!(store.authenticate("nobody", "sarah123").is_none());
        assert!(store.authenticate("Sarah", "sarah123").is_none());
    }

    #[test]
    fn test_authenticate_first_match_wins() {
        let (store, _dir) = test_store();
        let first = resident("sarah", "pw", Some("101"));
        let mut second = resident("sarah", "pw", Some("202"));
        second.role = Role::Warden;
        store.save_all(&[first, second]).unwrap();

        let user = store.authenticate("sarah", "pw").unwrap();
        assert_eq!(user.room_number.as_deref(), Some("101"));
    }

    #[test]
    fn test_add_user_rejects_duplicates_and_blanks() {
        let (store, _dir) = test_store();
        store.add_user(resident("sarah", "pw", None)).unwrap();

        let err = store.add_user(resident("sarah", "other", None)).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));

        let err = store.add_user(resident("  ", "pw", None)).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        let err = store.add_user(resident("aisha", "", None)).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        assert_eq!(store.users().len(), 1);
    }

    #[test]
    fn test_blank_room_is_none() {
        let (store, _dir) = test_store();
        let user = store.add_user(resident("aisha", "pw", Some("  "))).unwrap();
        assert!(user.room_number.is_none());
    }

    #[test]
    fn test_delete_user() {
        let (store, _dir) = test_store();
        store.add_user(resident("sarah", "pw", None)).unwrap();
        store.add_user(resident("aisha", "pw", None)).unwrap();

        let removed = store.delete_user("sarah").unwrap();
        assert_eq!(removed.username, "sarah");
        assert_eq!(store.users().len(), 1);

        let err = store.delete_user("sarah").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { kind: "User", .. }));
    }
}
