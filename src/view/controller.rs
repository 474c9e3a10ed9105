//! View controller: mediates between the backend API and rendered state.

use tracing::{info, instrument, warn};

use crate::api::types::User;
use crate::api::Backend;

use super::state::{Draft, ViewState};

/// Owns the dashboard state and keeps it in sync with the backend.
///
/// All mutation goes through this controller; there is no external writer.
/// Every request is single-attempt: failures are logged and the state is
/// left as it was, with the one exception that the initial users fetch
/// always clears the loading flag so the view cannot hang.
#[derive(Debug)]
pub struct ViewController<B: Backend> {
    backend: B,
    state: ViewState,
}

impl<B: Backend> ViewController<B> {
    /// Create a controller in the pre-initialization (loading) state.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: ViewState::new(),
        }
    }

    /// Current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Replace the in-progress draft.
    pub fn set_draft(&mut self, draft: Draft) {
        self.state.draft = draft;
    }

    /// Perform the initial read synchronization.
    ///
    /// The health and users reads are issued concurrently and settle
    /// independently; no ordering is guaranteed between them. A failed
    /// health read leaves `health` unset. The users read clears the
    /// loading flag whether it succeeds or fails.
    #[instrument(skip(self))]
    pub async fn initialize(&mut self) {
        let (health_result, users_result) =
            tokio::join!(self.backend.fetch_health(), self.backend.fetch_users());

        match health_result {
            Ok(health) => {
                self.state.health = Some(health);
            }
            Err(e) => {
                warn!("health check failed: {e}");
            }
        }

        match users_result {
            Ok(users) => {
                info!(count = users.len(), "loaded user roster");
                self.state.users = users;
            }
            Err(e) => {
                warn!("failed to fetch users: {e}");
            }
        }
        self.state.loading = false;
    }

    /// Submit the current draft as a create request.
    ///
    /// On success the server-assigned record is appended to the roster,
    /// the draft is reset, and the created user is returned so the caller
    /// can acknowledge it. On failure the roster and draft are untouched
    /// and the error goes to the log only.
    #[instrument(skip(self), fields(name = %self.state.draft.name))]
    pub async fn submit(&mut self) -> Option<User> {
        let payload = self.state.draft.to_new_user();

        match self.backend.create_user(&payload).await {
            Ok(user) => {
                info!(id = user.id, "user created");
                self.state.users.push(user.clone());
                self.state.draft.reset();
                Some(user)
            }
            Err(e) => {
                warn!("failed to add user: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::User;
    use crate::api::{MockBackend, MockConfig};
    use pretty_assertions::assert_eq;

    fn alice() -> User {
        User {
            id: 1,
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
        }
    }

    #[tokio::test]
    async fn initialize_loads_health_and_users() {
        let mut backend = MockBackend::new();
        backend.set_health("ok", "2024-01-01T00:00:00Z");
        backend.seed_user(alice());

        let mut controller = ViewController::new(backend);
        assert!(controller.state().loading);

        controller.initialize().await;

        let state = controller.state();
        assert!(!state.loading);
        assert_eq!(state.health.as_ref().unwrap().status, "ok");
        assert_eq!(state.users, vec![alice()]);
    }

    #[tokio::test]
    async fn failed_health_fetch_leaves_health_unset() {
        let backend = MockBackend::with_config(MockConfig {
            fail_health: true,
            ..Default::default()
        });

        let mut controller = ViewController::new(backend);
        controller.initialize().await;

        assert!(controller.state().health.is_none());
        assert!(!controller.state().loading);
    }

    #[tokio::test]
    async fn failed_users_fetch_still_clears_loading() {
        let backend = MockBackend::with_config(MockConfig {
            fail_users: true,
            ..Default::default()
        });

        let mut controller = ViewController::new(backend);
        controller.initialize().await;

        let state = controller.state();
        assert!(!state.loading);
        assert!(state.users.is_empty());
        // Health settles independently of the users failure.
        assert!(state.health.is_some());
    }

    #[tokio::test]
    async fn submit_appends_user_and_resets_draft() {
        let backend = MockBackend::new();
        backend.seed_user(alice());

        let mut controller = ViewController::new(backend);
        controller.initialize().await;
        controller.set_draft(Draft::new("Bob", "b@x.com"));

        let created = controller.submit().await;

        let user = created.expect("submit should succeed");
        assert_eq!(user.name, "Bob");
        assert_eq!(user.id, 2);

        let state = controller.state();
        assert_eq!(state.users.len(), 2);
        assert_eq!(state.users[1], user);
        assert_eq!(state.draft, Draft::default());
    }

    #[tokio::test]
    async fn failed_submit_leaves_roster_and_draft_untouched() {
        let backend = MockBackend::with_config(MockConfig {
            fail_create: true,
            ..Default::default()
        });
        backend.seed_user(alice());

        let mut controller = ViewController::new(backend);
        controller.initialize().await;
        controller.set_draft(Draft::new("Bob", "b@x.com"));

        let created = controller.submit().await;

        assert!(created.is_none());
        let state = controller.state();
        assert_eq!(state.users, vec![alice()]);
        assert_eq!(state.draft, Draft::new("Bob", "b@x.com"));
    }

    #[tokio::test]
    async fn submitted_user_trusts_server_assigned_id() {
        let backend = MockBackend::new();
        backend.seed_user(User {
            id: 41,
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
        });

        let mut controller = ViewController::new(backend);
        controller.initialize().await;
        controller.set_draft(Draft::new("Bob", "b@x.com"));

        let user = controller.submit().await.unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(
            user,
            User {
                id: 42,
                name: "Bob".to_string(),
                email: "b@x.com".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn repeated_submits_append_in_order() {
        let backend = MockBackend::new();
        let mut controller = ViewController::new(backend);
        controller.initialize().await;

        controller.set_draft(Draft::new("Alice", "a@x.com"));
        controller.submit().await.unwrap();
        controller.set_draft(Draft::new("Bob", "b@x.com"));
        controller.submit().await.unwrap();

        let names: Vec<&str> = controller
            .state()
            .users
            .iter()
            .map(|u| u.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

}
