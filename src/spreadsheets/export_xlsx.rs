use crate::domain::format::date_input_value;
use crate::domain::ApplicationRecord;
use crate::errors::ServerError;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

const HEADERS: [&str; 8] = [
    "Company",
    "Position",
    "Status",
    "Job Type",
    "Applied On",
    "URL",
    "Notes",
    "Created At",
];

fn xlsx_err(what: &'static str) -> impl Fn(XlsxError) -> ServerError {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

/// One row per application, in the order given.
pub fn export_applications_xlsx(records: &[ApplicationRecord]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(xlsx_err("header"))?;
    }

    for (i, app) in records.iter().enumerate() {
        let r = (i + 1) as u32;
        let row = [
            app.company_name.clone(),
            app.position.clone(),
            app.status.clone(),
            app.job_type.clone().unwrap_or_default(),
            date_input_value(app.application_date.as_deref()),
            app.url.clone().unwrap_or_default(),
            app.notes.clone().unwrap_or_default(),
            app.created_at.clone(),
        ];

        for (col, value) in row.iter().enumerate() {
            worksheet
                .write_string(r, col as u16, value)
                .map_err(xlsx_err("cell"))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}
