use crate::error::StorageError;
use crate::profile::{ProfileError, ProfileStore, UserProfile};

/// Which screen the application is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Loading,
    Config,
    Letter,
    Dashboard,
}

/// Routes between setup, the love letter and the dashboard.
///
/// The letter only appears right after setup. A returning user with a stored
/// profile goes straight to the dashboard. The draft profile from setup is
/// not persisted until the letter is opened.
#[derive(Debug)]
pub struct AppRouter {
    state: AppState,
    profile: Option<UserProfile>,
}

impl AppRouter {
    pub fn new() -> Self {
        Self {
            state: AppState::Loading,
            profile: None,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    /// The active profile: the stored one, or the setup draft while on the letter.
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Leave `Loading` by checking for a stored profile.
    pub fn start(&mut self, store: &ProfileStore) -> AppState {
        match store.load() {
            Some(profile) => {
                tracing::debug!("Found stored profile for {}", profile.nickname);
                self.profile = Some(profile);
                self.state = AppState::Dashboard;
            }
            None => {
                tracing::debug!("No stored profile, starting setup");
                self.state = AppState::Config;
            }
        }
        self.state
    }

    /// Accept the setup form. On success the router shows the letter; nothing is saved yet.
    ///
    /// Outside the config state this is a no-op and returns the current state.
    pub fn submit_config(
        &mut self,
        nickname: &str,
        zodiac: Option<&str>,
    ) -> Result<AppState, ProfileError> {
        if self.state != AppState::Config {
            tracing::debug!("submit_config ignored in state {:?}", self.state);
            return Ok(self.state);
        }
        let profile = UserProfile::from_input(nickname, zodiac)?;
        self.profile = Some(profile);
        self.state = AppState::Letter;
        Ok(self.state)
    }

    /// Open the dashboard from the letter, persisting the draft profile.
    ///
    /// Outside the letter state this is a no-op and returns the current state.
    pub fn open_dashboard(&mut self, store: &ProfileStore) -> Result<AppState, StorageError> {
        if self.state != AppState::Letter {
            tracing::debug!("open_dashboard ignored in state {:?}", self.state);
            return Ok(self.state);
        }
        if let Some(profile) = &self.profile {
            store.save(profile)?;
            self.state = AppState::Dashboard;
        }
        Ok(self.state)
    }
}

impl Default for AppRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Zodiac;

    #[test]
    fn test_first_run_goes_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        let mut router = AppRouter::new();
        assert_eq!(router.state(), AppState::Loading);
        assert_eq!(router.start(&store), AppState::Config);
        assert!(router.profile().is_none());
    }

    #[test]
    fn test_submit_shows_letter_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        let mut router = AppRouter::new();
        router.start(&store);

        let state = router.submit_config("Mimi", Some("Leo")).unwrap();
        assert_eq!(state, AppState::Letter);
        assert_eq!(router.profile().map(|p| p.zodiac), Some(Zodiac::Leo));
        assert!(store.load().is_none(), "draft must not be saved before the letter is opened");
    }

    #[test]
    fn test_invalid_submit_stays_on_config() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        let mut router = AppRouter::new();
        router.start(&store);

        assert_eq!(
            router.submit_config("", Some("Leo")),
            Err(ProfileError::EmptyNickname)
        );
        assert_eq!(router.state(), AppState::Config);
    }

    #[test]
    fn test_open_dashboard_saves_profile() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        let mut router = AppRouter::new();
        router.start(&store);
        router.submit_config("Mimi", Some("Leo")).unwrap();

        assert_eq!(router.open_dashboard(&store).unwrap(), AppState::Dashboard);
        let saved = store.load().unwrap();
        assert_eq!(saved.nickname, "Mimi");
    }

    #[test]
    fn test_returning_user_skips_letter() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        store
            .save(&UserProfile {
                nickname: "Mimi".into(),
                zodiac: Zodiac::Leo,
            })
            .unwrap();

        let mut router = AppRouter::new();
        assert_eq!(router.start(&store), AppState::Dashboard);
        // No letter for returning users, even if asked.
        assert_eq!(router.open_dashboard(&store).unwrap(), AppState::Dashboard);
    }

    #[test]
    fn test_submit_outside_config_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        let mimi = UserProfile {
            nickname: "Mimi".into(),
            zodiac: Zodiac::Leo,
        };
        store.save(&mimi).unwrap();

        let mut router = AppRouter::new();
        assert_eq!(router.submit_config("Tom", Some("Aries")), Ok(AppState::Loading));
        assert!(router.profile().is_none());

        router.start(&store);
        assert_eq!(router.submit_config("Tom", Some("Aries")), Ok(AppState::Dashboard));
        assert_eq!(router.state(), AppState::Dashboard);
        assert_eq!(router.profile(), Some(&mimi));
        assert_eq!(store.load(), Some(mimi));
    }

    #[test]
    fn test_second_submit_on_letter_keeps_first_draft() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        let mut router = AppRouter::new();
        router.start(&store);
        router.submit_config("Mimi", Some("Leo")).unwrap();

        assert_eq!(router.submit_config("Tom", Some("Aries")), Ok(AppState::Letter));
        assert_eq!(router.profile().map(|p| p.nickname.as_str()), Some("Mimi"));
    }
}
