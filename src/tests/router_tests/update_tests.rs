use crate::domain::Status;
use crate::router::handle;
use crate::store::StoreError;
use crate::tests::utils::{
    body_string, cookie_pair, counting_app, failing_app, get, get_with_cookie, header, post_form,
    seed, sqlite_app,
};
use std::sync::atomic::Ordering;

#[test]
fn update_form_is_populated_from_the_record() {
    let (_db, app) = sqlite_app();
    let rec = seed(&app, "Acme", Status::Interviewing);

    let resp = handle(get(&format!("/update/{}/form", rec.id)), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"value="Acme""#));
    assert!(body.contains(r#"value="2024-03-09""#));
    assert!(body.contains(r#"value="Interviewing" checked"#));
    assert!(body.contains(&format!(r#"action="/update/{}""#, rec.id)));
    assert!(body.contains("Delete Application"));
}

#[test]
fn delete_button_skips_browser_field_validation() {
    let (_db, app) = sqlite_app();
    let rec = seed(&app, "Acme", Status::Applied);

    let body = body_string(handle(get(&format!("/update/{}/form", rec.id)), &app).unwrap());

    let button = body
        .split("<button")
        .find(|b| b.contains("delete-button"))
        .expect("no delete button");
    assert!(button.contains("formnovalidate"));
    assert!(button.contains(&format!(r#"formaction="/update/{}/delete""#, rec.id)));
}

#[test]
fn update_shell_loads_the_form_lazily() {
    let (store, app) = counting_app();

    let body = body_string(handle(get("/update/12"), &app).unwrap());

    assert!(body.contains("Loading application data..."));
    assert!(body.contains(r#"hx-get="/update/12/form""#));
    assert_eq!(store.reads.load(Ordering::SeqCst), 0);
}

#[test]
fn update_of_missing_record_redirects_to_gallery_with_error() {
    let (_db, app) = sqlite_app();

    let resp = handle(get("/update/404/form"), &app).expect("Handler failed");
    assert_eq!(header(&resp, "HX-Redirect").as_deref(), Some("/gallery"));
    let cookie = cookie_pair(&resp);

    let body = body_string(handle(get_with_cookie("/gallery", &cookie), &app).unwrap());
    assert!(body.contains("alert alert-error"));
    assert!(body.contains("Application not found."));
}

#[test]
fn update_fetch_error_is_inline() {
    let app = failing_app();

    let body = body_string(handle(get("/update/1/form"), &app).unwrap());
    assert!(body.contains("Could not fetch the application data."));
}

#[test]
fn successful_update_lands_on_details_with_message() {
    let (_db, app) = sqlite_app();
    let rec = seed(&app, "Acme", Status::Applied);

    let req = post_form(
        &format!("/update/{}", rec.id),
        "company_name=Acme+Corp&position=Staff+Engineer&application_date=2024-04-01&status=Offer&job_type=&url=&notes=Negotiating",
    );
    let resp = handle(req, &app).expect("Handler failed");

    assert_eq!(resp.status(), 302);
    let details = format!("/details/{}", rec.id);
    assert_eq!(header(&resp, "Location").as_deref(), Some(details.as_str()));
    let cookie = cookie_pair(&resp);

    let stored = app.store.get_by_id(&rec.id).unwrap();
    assert_eq!(stored.company_name, "Acme Corp");
    assert_eq!(stored.status, "Offer");
    assert_eq!(stored.notes.as_deref(), Some("Negotiating"));
    assert_eq!(stored.created_at, rec.created_at);

    let body = body_string(handle(get_with_cookie(&details, &cookie), &app).unwrap());
    assert!(body.contains("Application updated successfully!"));
}

#[test]
fn invalid_update_makes_no_store_write() {
    let (store, app) = counting_app();
    let rec = seed(&app, "Acme", Status::Applied);
    let before = store.writes();

    let req = post_form(
        &format!("/update/{}", rec.id),
        "company_name=Acme&position=&status=Applied",
    );
    let body = body_string(handle(req, &app).unwrap());

    assert!(body.contains("Please fill in Company Name, Position, and Status."));
    assert!(body.contains("Update Application"));
    assert_eq!(store.writes(), before);
}

#[test]
fn update_store_error_is_inline() {
    let app = failing_app();

    let req = post_form("/update/5", "company_name=Acme&position=Dev&status=Applied");
    let body = body_string(handle(req, &app).unwrap());

    assert!(body.contains("Error updating application: connection refused"));
}

#[test]
fn delete_without_confirmation_asks_and_keeps_the_record() {
    let (store, app) = counting_app();
    let rec = seed(&app, "Acme", Status::Applied);

    let req = post_form(&format!("/update/{}/delete", rec.id), "");
    let resp = handle(req, &app).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Delete this application?"));
    assert!(body.contains(r#"name="confirm" value="yes""#));
    assert!(body.contains(&format!(r#"href="/update/{}""#, rec.id)));

    assert_eq!(store.deletes.load(Ordering::SeqCst), 0);
    assert!(app.store.get_by_id(&rec.id).is_ok());
}

#[test]
fn confirmed_delete_removes_and_returns_to_gallery() {
    let (_db, app) = sqlite_app();
    let rec = seed(&app, "Acme", Status::Rejected);

    let req = post_form(
        &format!("/update/{}/delete", rec.id),
        "company_name=Acme&position=Dev&status=Rejected&confirm=yes",
    );
    let resp = handle(req, &app).expect("Handler failed");

    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location").as_deref(), Some("/gallery"));
    let cookie = cookie_pair(&resp);

    assert_eq!(app.store.get_by_id(&rec.id).unwrap_err(), StoreError::NotFound);

    let body = body_string(handle(get_with_cookie("/gallery", &cookie), &app).unwrap());
    assert!(body.contains("Application deleted."));
}

#[test]
fn failed_delete_stays_on_the_form() {
    let app = failing_app();

    let req = post_form(
        "/update/3/delete",
        "company_name=Acme&position=Dev&status=Applied&confirm=yes",
    );
    let resp = handle(req, &app).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Error deleting application: connection refused"));
    assert!(body.contains(r#"value="Acme""#));
}
