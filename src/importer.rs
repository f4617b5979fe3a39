// src/importer.rs
//! Loads sale records exported from the sales sheet (JSON array, one object
//! per row, keyed by the sheet's Thai column headers) into `sales_history`.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;

use crate::db::connection::Database;
use crate::db::sales::{clear_sales_records, insert_sales_records};
use crate::domain::record::SaleRecord;
use crate::errors::ServerError;

/// Sheets sometimes carry Buddhist-era years; anything past this is converted.
const BUDDHIST_YEAR_CUTOFF: i32 = 2400;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Db(#[from] ServerError),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// A spreadsheet cell that may hold text or a number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    fn into_text(self) -> Option<String> {
        match self {
            Cell::Text(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
            // phone numbers and postal codes typed as numbers
            Cell::Number(n) if n.fract() == 0.0 => Some(format!("{}", n as i64)),
            Cell::Number(n) => Some(n.to_string()),
        }
    }

    /// Like `into_text`, but a number that lost its leading zero in the
    /// sheet (8 or 9 digits) gets it back.
    fn into_phone(self) -> Option<String> {
        match self {
            Cell::Number(n) if n.fract() == 0.0 && (1e7..1e9).contains(&n) => {
                Some(format!("0{}", n as i64))
            }
            other => other.into_text(),
        }
    }

    fn into_number(self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(n),
            Cell::Text(s) => s.trim().replace(',', "").parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SheetRow {
    #[serde(rename = "วันที่ขาย")]
    sale_date: Option<String>,
    #[serde(rename = "สินค้า")]
    product_name: Option<Cell>,
    #[serde(rename = "จำนวน")]
    quantity: Option<Cell>,
    #[serde(rename = "ราคา")]
    price: Option<Cell>,
    #[serde(rename = "พนักงานขาย")]
    seller_name: Option<Cell>,
    #[serde(rename = "เบอร์โทร")]
    buyer_phone: Option<Cell>,
    #[serde(rename = "ชื่อผู้รับ")]
    buyer_name: Option<Cell>,
    #[serde(rename = "ชื่อ Facebook")]
    facebook_name: Option<Cell>,
    #[serde(rename = "ที่อยู่")]
    address: Option<Cell>,
    #[serde(rename = "ตำบล")]
    subdistrict: Option<Cell>,
    #[serde(rename = "อำเภอ")]
    district: Option<Cell>,
    #[serde(rename = "จังหวัด")]
    province: Option<Cell>,
    #[serde(rename = "รหัสไปรษณีย์")]
    postal_code: Option<Cell>,
}

impl SheetRow {
    fn into_record(self) -> Result<SaleRecord, String> {
        let raw_date = self.sale_date.ok_or("missing sale date")?;
        let sale_date =
            parse_sale_date(&raw_date).ok_or_else(|| format!("unreadable sale date {raw_date:?}"))?;

        let text = |cell: Option<Cell>| cell.and_then(Cell::into_text);
        let number = |cell: Option<Cell>| cell.and_then(Cell::into_number);

        Ok(SaleRecord {
            sale_date,
            product_name: text(self.product_name),
            quantity: number(self.quantity),
            price: number(self.price),
            seller_name: text(self.seller_name),
            buyer_phone: self.buyer_phone.and_then(Cell::into_phone),
            buyer_name: text(self.buyer_name),
            facebook_name: text(self.facebook_name),
            address: text(self.address),
            subdistrict: text(self.subdistrict),
            district: text(self.district),
            province: text(self.province),
            postal_code: text(self.postal_code),
        })
    }
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`,
/// RFC 3339 and `dd/mm/yyyy`. Timestamps with an offset are converted to
/// local time so they land on the local calendar day.
pub fn parse_sale_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .ok()?;
    let date = if date.year() > BUDDHIST_YEAR_CUTOFF {
        date.with_year(date.year() - 543)?
    } else {
        date
    };
    date.and_hms_opt(0, 0, 0)
}

/// Parses the JSON text. Rows that cannot become a record are skipped and
/// counted.
pub fn parse_records(json: &str) -> Result<(Vec<SaleRecord>, usize), ImportError> {
    let rows: Vec<SheetRow> = serde_json::from_str(json)?;

    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0;
    for (i, row) in rows.into_iter().enumerate() {
        match row.into_record() {
            Ok(r) => records.push(r),
            Err(reason) => {
                tracing::warn!(row = i + 1, %reason, "skipping sheet row");
                skipped += 1;
            }
        }
    }
    Ok((records, skipped))
}

/// Reads `path` and stores its records. With `replace`, existing rows are
/// removed first.
pub fn import_file(
    db: &Database,
    path: &Path,
    replace: bool,
) -> Result<ImportSummary, ImportError> {
    let json = fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let (records, skipped) = parse_records(&json)?;

    let imported = db.with_conn(|conn| {
        if replace {
            let removed = clear_sales_records(conn)?;
            tracing::info!(removed, "cleared existing sales records");
        }
        insert_sales_records(conn, &records)
    })?;

    tracing::info!(imported, skipped, path = %path.display(), "import finished");
    Ok(ImportSummary { imported, skipped })
}
