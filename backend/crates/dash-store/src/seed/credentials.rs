use dash_core::{Identity, Role};

const DEMO_PASSWORD: &str = "password123";

/// The two demo logins
pub fn credentials() -> Vec<Identity> {
    vec![
        Identity::new(1, "Admin User", "admin@example.com", DEMO_PASSWORD, Role::Admin),
        Identity::new(2, "Editor User", "editor@example.com", DEMO_PASSWORD, Role::Editor),
    ]
}
