use crate::domain::{ApplicationFields, ApplicationRecord, JobType, RecordId};
use crate::store::StoreError;
use rusqlite::{params, Connection, OptionalExtension, Row};

const COLUMNS: &str = "id, company_name, position, application_date, status, job_type, url, notes, created_at";

fn db_err(what: &str) -> impl Fn(rusqlite::Error) -> StoreError + '_ {
    move |e| StoreError::Database(format!("{what} failed: {e}"))
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<ApplicationRecord> {
    let id: i64 = row.get(0)?;
    Ok(ApplicationRecord {
        id: RecordId::new(id.to_string()),
        company_name: row.get(1)?,
        position: row.get(2)?,
        application_date: row.get(3)?,
        status: row.get(4)?,
        job_type: row.get(5)?,
        url: row.get(6)?,
        notes: row.get(7)?,
        created_at: row.get(8)?,
    })
}

pub fn insert_application(
    conn: &Connection,
    fields: &ApplicationFields,
) -> Result<ApplicationRecord, StoreError> {
    conn.execute(
        "insert into job_applications
           (company_name, position, application_date, status, job_type, url, notes)
         values (?, ?, ?, ?, ?, ?, ?)",
        params![
            fields.company_name,
            fields.position,
            fields.application_date,
            fields.status.as_str(),
            fields.job_type.map(JobType::as_str),
            fields.url,
            fields.notes,
        ],
    )
    .map_err(db_err("insert application"))?;

    let id = conn.last_insert_rowid();
    get_application(conn, id)?.ok_or(StoreError::NotFound)
}

pub fn get_application(conn: &Connection, id: i64) -> Result<Option<ApplicationRecord>, StoreError> {
    conn.query_row(
        &format!("select {COLUMNS} from job_applications where id = ?"),
        params![id],
        map_row,
    )
    .optional()
    .map_err(db_err("select application"))
}

/// Newest first; rows created within the same millisecond fall back to id.
pub fn list_applications(conn: &Connection) -> Result<Vec<ApplicationRecord>, StoreError> {
    let mut stmt = conn
        .prepare(&format!(
            "select {COLUMNS} from job_applications order by created_at desc, id desc"
        ))
        .map_err(db_err("prepare list"))?;

    let rows = stmt
        .query_map([], map_row)
        .map_err(db_err("list applications"))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(db_err("read application row"))?);
    }
    Ok(out)
}

pub fn update_application(
    conn: &Connection,
    id: i64,
    fields: &ApplicationFields,
) -> Result<ApplicationRecord, StoreError> {
    let changed = conn
        .execute(
            "update job_applications
                set company_name = ?, position = ?, application_date = ?,
                    status = ?, job_type = ?, url = ?, notes = ?
              where id = ?",
            params![
                fields.company_name,
                fields.position,
                fields.application_date,
                fields.status.as_str(),
                fields.job_type.map(JobType::as_str),
                fields.url,
                fields.notes,
                id,
            ],
        )
        .map_err(db_err("update application"))?;

    if changed == 0 {
        return Err(StoreError::NotFound);
    }
    get_application(conn, id)?.ok_or(StoreError::NotFound)
}

pub fn delete_application(conn: &Connection, id: i64) -> Result<(), StoreError> {
    let changed = conn
        .execute("delete from job_applications where id = ?", params![id])
        .map_err(db_err("delete application"))?;

    if changed == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}
