use dash_core::{Role, UserFields, UserRecord, UserStatus};

const SEED_USERS: [(&str, Role); 10] = [
    ("Alice Johnson", Role::Admin),
    ("Bob Smith", Role::Editor),
    ("Carol White", Role::Viewer),
    ("David Brown", Role::Editor),
    ("Eva Martinez", Role::Viewer),
    ("Frank Lee", Role::Admin),
    ("Grace Kim", Role::Editor),
    ("Henry Wilson", Role::Viewer),
    ("Iris Chen", Role::Editor),
    ("Jack Davis", Role::Viewer),
];

const JOIN_DATES: [&str; 10] = [
    "2023-01-15",
    "2023-03-22",
    "2023-05-10",
    "2023-07-04",
    "2023-09-18",
    "2023-11-30",
    "2024-01-08",
    "2024-03-14",
    "2024-06-21",
    "2024-09-05",
];

/// Ten managed users with ids 1..=10. Every fourth one (starting with the
/// first) is inactive.
pub fn users() -> Vec<UserRecord> {
    SEED_USERS
        .iter()
        .zip(JOIN_DATES)
        .enumerate()
        .map(|(i, ((name, role), joined))| {
            let status = if i % 4 == 0 {
                UserStatus::Inactive
            } else {
                UserStatus::Active
            };

            UserRecord {
                id: i as i64 + 1,
                fields: UserFields {
                    name: Some((*name).to_string().into()),
                    email: Some(format!("user{}@example.com", i + 1).into()),
                    role: Some((*role).into()),
                    status: Some(status.into()),
                    joined: Some(joined.to_string().into()),
                    extra: Default::default(),
                },
            }
        })
        .collect()
}
