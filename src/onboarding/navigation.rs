use crate::domain::auth::UserResponse;

/// Top-level screen group the app shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Auth,
    Onboarding,
    Main,
}

/// `profileCompleted` is the only gate between onboarding and the main app.
pub fn route_for(user: Option<&UserResponse>) -> AppRoute {
    match user {
        None => AppRoute::Auth,
        Some(user) if !user.profile.profile_completed => AppRoute::Onboarding,
        Some(_) => AppRoute::Main,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::Profile;
    use uuid::Uuid;

    fn user(profile_completed: bool) -> UserResponse {
        UserResponse {
            id: Uuid::new_v4(),
            email: "traveller@example.com".into(),
            profile: Profile {
                profile_completed,
                ..Profile::default()
            },
        }
    }

    #[test]
    fn routes_by_session_and_completion() {
        assert_eq!(route_for(None), AppRoute::Auth);
        assert_eq!(route_for(Some(&user(false))), AppRoute::Onboarding);
        assert_eq!(route_for(Some(&user(true))), AppRoute::Main);
    }
}
