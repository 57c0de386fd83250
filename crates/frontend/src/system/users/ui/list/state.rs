use contracts::system::users::{seed_users, NewUser, User};
use leptos::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct UsersListState {
    pub users: Vec<User>,
    pub search_query: String,
    pub form: NewUser,
    pub errors: HashMap<&'static str, String>,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            users: seed_users(),
            search_query: String::new(),
            form: NewUser::default(),
            errors: HashMap::new(),
        }
    }
}

impl UsersListState {
    /// Add the form's user to the list, or keep the form with its errors.
    /// Returns the created user's name.
    pub fn submit(&mut self) -> Option<String> {
        self.errors = self.form.validate(&self.users);
        if !self.errors.is_empty() {
            return None;
        }
        let user = std::mem::take(&mut self.form).into_user(&self.users);
        let name = user.username.clone();
        self.users.push(user);
        Some(name)
    }

    pub fn remove(&mut self, id: u32) {
        self.users.retain(|u| u.id != id);
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::users::UserRole;

    #[test]
    fn test_submit_appends_and_resets_form() {
        let mut state = UsersListState::default();
        state.form.set_username("Ada Lovelace");
        state.form.email = "ada@example.com".to_string();
        state.form.role = UserRole::Admin;

        assert_eq!(state.submit().as_deref(), Some("Ada Lovelace"));
        assert_eq!(state.users.len(), 4);
        assert_eq!(state.form, NewUser::default());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_submit_keeps_invalid_form() {
        let mut state = UsersListState::default();
        state.form.email = "ada".to_string();

        assert_eq!(state.submit(), None);
        assert_eq!(state.users.len(), 3);
        assert_eq!(state.form.email, "ada");
        assert!(state.errors.contains_key("username"));
        assert!(state.errors.contains_key("email"));
    }
}
