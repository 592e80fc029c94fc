use crate::domain::{JobType, Status};
use crate::forms::{ApplicationForm, FormMode};
use maud::{html, Markup};

const DELETE_PROMPT: &str = "return confirm('Are you sure you want to delete this application entry?');";

/// The editable fields shared by the create and update pages.
pub fn application_form(form: &ApplicationForm, mode: &FormMode) -> Markup {
    let (class, submit_label) = match mode {
        FormMode::Create => ("create-form", "Add Application"),
        FormMode::Update(_) => ("update-form create-form", "Update Application"),
    };

    html! {
        form method="post" action=(mode.action()) class=(class) {
            label for="company_name" { "Company Name:*" }
            input type="text" id="company_name" name="company_name" value=(form.company_name);

            label for="position" { "Position:*" }
            input type="text" id="position" name="position" value=(form.position);

            label for="application_date" { "Application Date:" }
            input type="date" id="application_date" name="application_date" value=(form.application_date);

            label for="job_type" { "Job Type:" }
            select id="job_type" name="job_type" {
                option value="" disabled selected[form.job_type.is_empty()] { "Select a type..." }
                @for t in JobType::ALL {
                    option value=(t.as_str()) selected[form.job_type == t.as_str()] { (t.as_str()) }
                }
            }

            label { "Status:*" }
            div class="radio-group" {
                @for s in Status::ALL {
                    label class="radio-label" {
                        input type="radio" name="status" value=(s.as_str()) checked[form.status == s.as_str()];
                        (s.as_str())
                    }
                }
            }

            label for="url" { "Job Posting URL:" }
            input type="url" id="url" name="url" placeholder="https://..." value=(form.url);

            label for="notes" { "Notes:" }
            textarea id="notes" name="notes" { (form.notes) }

            @if let Some(err) = &form.error {
                p class="form-error" { (err) }
            }

            @match mode {
                FormMode::Create => {
                    button type="submit" { (submit_label) }
                }
                FormMode::Update(id) => {
                    div class="update-actions" {
                        button type="submit" class="update-button" { (submit_label) }
                        button
                            type="submit"
                            class="delete-button"
                            formaction=(format!("/update/{id}/delete"))
                            formnovalidate
                            name="confirm"
                            value="yes"
                            onclick=(DELETE_PROMPT)
                        { "Delete Application" }
                    }
                }
            }
        }
    }
}
