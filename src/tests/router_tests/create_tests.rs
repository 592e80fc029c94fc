use crate::router::handle;
use crate::tests::utils::{
    body_string, cookie_pair, counting_app, failing_app, get, get_with_cookie, header, post_form,
    sqlite_app,
};
use std::sync::atomic::Ordering;

#[test]
fn create_page_starts_blank_with_applied_selected() {
    let (_db, app) = sqlite_app();

    let resp = handle(get("/create"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Log a New Application"));
    assert!(body.contains(r#"value="Applied" checked"#));
    assert!(!body.contains(r#"value="Offer" checked"#));
    assert!(!body.contains("form-error"));
}

#[test]
fn empty_company_fails_validation_without_store_call() {
    let (store, app) = counting_app();

    let req = post_form(
        "/create",
        "company_name=&position=Engineer&status=Applied",
    );
    let resp = handle(req, &app).expect("Handler failed");

    assert_eq!(resp.status(), 200, "Should stay on the form");
    let body = body_string(resp);
    assert!(body.contains("Please fill in Company Name, Position, and Status."));
    assert!(body.contains(r#"value="Engineer""#), "Typed values should survive");
    assert_eq!(store.writes(), 0);
}

#[test]
fn omitted_status_fails_validation() {
    let (store, app) = counting_app();

    let resp = handle(post_form("/create", "company_name=Acme&position=Dev"), &app).unwrap();

    let body = body_string(resp);
    assert!(body.contains("Please fill in Company Name, Position, and Status."));
    assert_eq!(store.creates.load(Ordering::SeqCst), 0);
}

#[test]
fn valid_create_redirects_to_gallery_with_message() {
    let (_db, app) = sqlite_app();

    let req = post_form(
        "/create",
        "company_name=Acme&position=Backend+Engineer&application_date=2024-03-09\
         &status=Applied&job_type=Full-Time&url=https%3A%2F%2Facme.example%2Fjobs%2F1&notes=",
    );
    let resp = handle(req, &app).expect("Handler failed");

    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location").as_deref(), Some("/gallery"));
    let cookie = cookie_pair(&resp);

    let rows = app.store.list_all().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].company_name, "Acme");
    assert_eq!(rows[0].status, "Applied");
    assert_eq!(rows[0].job_type.as_deref(), Some("Full-Time"));
    assert_eq!(rows[0].notes, None, "Empty optionals are stored as null");

    // The gallery shows the message once and expires the cookie.
    let resp = handle(get_with_cookie("/gallery", &cookie), &app).unwrap();
    let set_cookie = header(&resp, "Set-Cookie").unwrap_or_default();
    assert!(set_cookie.contains("Max-Age=0"));
    let body = body_string(resp);
    assert!(body.contains("Application logged successfully!"));
    assert!(body.contains("alert alert-success"));
}

#[test]
fn store_error_is_shown_inline() {
    let app = failing_app();

    let req = post_form("/create", "company_name=Acme&position=Dev&status=Offer");
    let resp = handle(req, &app).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Error submitting application: connection refused"));
    assert!(body.contains(r#"value="Offer" checked"#));
}

#[test]
fn unknown_status_is_rejected_before_the_store() {
    let (store, app) = counting_app();

    let req = post_form("/create", "company_name=Acme&position=Dev&status=Ghosted");
    let body = body_string(handle(req, &app).unwrap());

    assert!(body.contains("Status must be one of"));
    assert_eq!(store.writes(), 0);
}
