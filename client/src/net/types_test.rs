use super::*;

#[test]
fn role_round_trips_through_wire_names() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");
    assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
    assert_eq!("student".parse::<Role>(), Ok(Role::Student));
}

#[test]
fn role_parse_is_exact() {
    assert!("Admin".parse::<Role>().is_err());
    assert!(" admin".parse::<Role>().is_err());
    assert!("administrator".parse::<Role>().is_err());
}

#[test]
fn user_decodes_known_role() {
    let user: User = serde_json::from_str(
        r#"{"id":"u1","name":"Asha","email":"asha@college.edu","role":"student"}"#,
    )
    .unwrap();
    assert_eq!(user.role, Some(Role::Student));
    assert_eq!(user.email.as_deref(), Some("asha@college.edu"));
}

#[test]
fn user_with_unknown_role_decodes_without_role() {
    let user: User = serde_json::from_str(r#"{"id":"u1","name":"Asha","role":"superuser"}"#).unwrap();
    assert_eq!(user.role, None);
}

#[test]
fn user_with_missing_or_malformed_role_decodes_without_role() {
    let missing: User = serde_json::from_str(r#"{"id":"u1","name":"Asha"}"#).unwrap();
    assert_eq!(missing.role, None);
    assert_eq!(missing.email, None);

    let numeric: User = serde_json::from_str(r#"{"id":"u1","name":"Asha","role":7}"#).unwrap();
    assert_eq!(numeric.role, None);

    let null: User = serde_json::from_str(r#"{"id":"u1","name":"Asha","role":null}"#).unwrap();
    assert_eq!(null.role, None);
}

#[test]
fn register_request_serializes_role_lowercase() {
    let req = RegisterRequest {
        name: "Asha".to_owned(),
        email: "asha@college.edu".to_owned(),
        password: "hunter22".to_owned(),
        role: Role::Student,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["role"], "student");
}
