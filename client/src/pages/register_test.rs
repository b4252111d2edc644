use super::*;

#[test]
fn validate_register_input_builds_student_request() {
    let request = validate_register_input(" Asha Rao ", " asha@college.edu ", "longenough", "longenough").unwrap();
    assert_eq!(request.name, "Asha Rao");
    assert_eq!(request.email, "asha@college.edu");
    assert_eq!(request.role, Role::Student);
}

#[test]
fn validate_register_input_requires_name() {
    assert_eq!(
        validate_register_input("  ", "asha@college.edu", "longenough", "longenough"),
        Err("Enter your name.")
    );
}

#[test]
fn validate_register_input_requires_valid_email() {
    assert_eq!(
        validate_register_input("Asha", "asha.college.edu", "longenough", "longenough"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_register_input_enforces_min_password_length() {
    let short = "x".repeat(MIN_PASSWORD_LEN - 1);
    assert_eq!(
        validate_register_input("Asha", "asha@college.edu", &short, &short),
        Err("Password must be at least 8 characters.")
    );
    let exact = "x".repeat(MIN_PASSWORD_LEN);
    assert!(validate_register_input("Asha", "asha@college.edu", &exact, &exact).is_ok());
}

#[test]
fn validate_register_input_requires_matching_confirmation() {
    assert_eq!(
        validate_register_input("Asha", "asha@college.edu", "longenough", "longenouhg"),
        Err("Passwords do not match.")
    );
}
