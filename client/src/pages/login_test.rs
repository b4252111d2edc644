use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  asha@college.edu  ", "secret"),
        Ok(LoginRequest { email: "asha@college.edu".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let request = validate_login_input("asha@college.edu", "  spaced  ").unwrap();
    assert_eq!(request.password, "  spaced  ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("asha@college.edu", ""), Err("Enter your email and password."));
}

#[test]
fn validate_login_input_rejects_email_without_at() {
    assert_eq!(validate_login_input("asha", "secret"), Err("Enter a valid email address."));
}
