use super::*;

#[test]
fn auth_endpoints_share_api_prefix() {
    for endpoint in [ME_ENDPOINT, LOGIN_ENDPOINT, REGISTER_ENDPOINT, LOGOUT_ENDPOINT] {
        assert!(endpoint.starts_with("/api/auth/"), "{endpoint}");
    }
}

#[test]
fn login_failed_message_hides_status_for_rejected_credentials() {
    assert_eq!(login_failed_message(401), "Invalid email or password.");
    assert_eq!(login_failed_message(403), "Invalid email or password.");
}

#[test]
fn login_failed_message_formats_other_status() {
    assert_eq!(login_failed_message(500), "login failed: 500");
}

#[test]
fn register_failed_message_formats_status() {
    assert_eq!(register_failed_message(409), "An account with that email already exists.");
    assert_eq!(register_failed_message(422), "registration failed: 422");
}
