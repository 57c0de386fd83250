//! Пользователи админки. Список живёт только в текущей сессии браузера.

use crate::shared::advanced::KeyFilter;
use crate::shared::input::apply_key_filter;
use crate::shared::validation::{validate_value, ValidationSettings};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Editor,
    Viewer,
}

impl UserRole {
    pub fn all() -> [UserRole; 3] {
        [UserRole::Admin, UserRole::Editor, UserRole::Viewer]
    }

    pub fn value(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Editor => "editor",
            UserRole::Viewer => "viewer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Editor => "Editor",
            UserRole::Viewer => "Viewer",
        }
    }

    /// Неизвестное значение трактуется как роль по умолчанию
    pub fn from_value(value: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|r| r.value() == value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub role: UserRole,
}

/// Данные формы создания пользователя
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub role: UserRole,
}

impl NewUser {
    /// Имя пользователя: только буквы и пробелы
    pub fn set_username(&mut self, raw: &str) {
        self.username = apply_key_filter(KeyFilter::Letters, raw);
    }

    /// Ошибки по полям формы; пустая карта означает валидные данные
    pub fn validate(&self, existing: &[User]) -> HashMap<&'static str, String> {
        let mut errors = HashMap::new();

        let username_rules = ValidationSettings {
            required: true,
            min_length_enabled: true,
            min_length: 2,
            ..Default::default()
        };
        let outcome = validate_value(&username_rules, self.username.trim());
        if !outcome.is_valid() {
            errors.insert("username", outcome.joined());
        } else if existing
            .iter()
            .any(|u| u.username.eq_ignore_ascii_case(self.username.trim()))
        {
            errors.insert("username", "This username is already taken".to_string());
        }

        let email_rules = ValidationSettings {
            required: true,
            email: true,
            ..Default::default()
        };
        let outcome = validate_value(&email_rules, self.email.trim());
        if !outcome.is_valid() {
            errors.insert("email", outcome.joined());
        }

        errors
    }

    /// Пользователь со следующим свободным id
    pub fn into_user(self, existing: &[User]) -> User {
        let id = existing.iter().map(|u| u.id).max().map_or(1, |m| m + 1);
        User {
            id,
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role,
        }
    }
}

/// Начальный список пользователей
pub fn seed_users() -> Vec<User> {
    let user = |id, username: &str, email: &str, role| User {
        id,
        username: username.to_string(),
        email: email.to_string(),
        role,
    };
    vec![
        user(1, "John Doe", "john@example.com", UserRole::Admin),
        user(2, "Jane Smith", "jane@example.com", UserRole::Editor),
        user(3, "Robert Jones", "robert@example.com", UserRole::Viewer),
    ]
}

/// Поиск по имени и email без учёта регистра
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let query = query.trim().to_lowercase();
    users
        .iter()
        .filter(|u| {
            query.is_empty()
                || u.username.to_lowercase().contains(&query)
                || u.email.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_keeps_letters_only() {
        let mut form = NewUser::default();
        form.set_username("Ada 2 Lovelace!");
        assert_eq!(form.username, "Ada  Lovelace");
    }

    #[test]
    fn test_validate_reports_each_field() {
        let form = NewUser {
            username: String::new(),
            email: "not-an-email".to_string(),
            role: UserRole::Viewer,
        };
        let errors = form.validate(&seed_users());
        assert!(errors["username"].starts_with("This field is required"));
        assert_eq!(
            errors.get("email").map(String::as_str),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_validate_rejects_taken_username() {
        let form = NewUser {
            username: "jane smith".to_string(),
            email: "jane2@example.com".to_string(),
            role: UserRole::Editor,
        };
        let errors = form.validate(&seed_users());
        assert!(errors.contains_key("username"));
        assert!(!errors.contains_key("email"));
    }

    #[test]
    fn test_into_user_assigns_next_id() {
        let users = seed_users();
        let user = NewUser {
            username: " Ada ".to_string(),
            email: "ada@example.com".to_string(),
            role: UserRole::Admin,
        }
        .into_user(&users);
        assert_eq!(user.id, 4);
        assert_eq!(user.username, "Ada");
    }

    #[test]
    fn test_filter_users() {
        let users = seed_users();
        assert_eq!(filter_users(&users, "").len(), 3);
        let found = filter_users(&users, "JANE");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
        assert_eq!(filter_users(&users, "example.com").len(), 3);
    }

    #[test]
    fn test_role_from_unknown_value_is_default() {
        assert_eq!(UserRole::from_value("admin"), UserRole::Admin);
        assert_eq!(UserRole::from_value("owner"), UserRole::Editor);
    }
}
