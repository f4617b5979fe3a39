use crate::domain::record::SaleRecord;
use crate::domain::search::phone_digits;
use crate::errors::ServerError;
use crate::format::format_thai_date;
use rust_xlsxwriter::{Workbook, Worksheet};

const HEADERS: [&str; 5] = ["วันที่ขาย", "สินค้า", "จำนวน", "ราคา", "พนักงานขาย"];

/// Builds the purchase-history sheet for one customer and returns the file
/// bytes. Rows keep the order they are given in.
pub fn history_workbook(records: &[&SaleRecord]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("ประวัติการสั่งซื้อ")
        .map_err(|e| ServerError::XlsxError(format!("Failed to name worksheet: {e}")))?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{header}': {e}"))
            })?;
    }

    for (i, record) in records.iter().enumerate() {
        write_row(worksheet, (i + 1) as u32, record)?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

fn write_row(ws: &mut Worksheet, r: u32, record: &SaleRecord) -> Result<(), ServerError> {
    let xlsx_err = |field: &str, e: rust_xlsxwriter::XlsxError| {
        ServerError::XlsxError(format!("Failed to write {field}: {e}"))
    };

    ws.write_string(r, 0, format_thai_date(&record.sale_date))
        .map_err(|e| xlsx_err("sale date", e))?;
    ws.write_string(r, 1, record.product_name.as_deref().unwrap_or(""))
        .map_err(|e| xlsx_err("product", e))?;
    if let Some(quantity) = record.quantity {
        ws.write_number(r, 2, quantity)
            .map_err(|e| xlsx_err("quantity", e))?;
    }
    if let Some(price) = record.price {
        ws.write_number(r, 3, price)
            .map_err(|e| xlsx_err("price", e))?;
    }
    ws.write_string(r, 4, record.seller_name.as_deref().unwrap_or(""))
        .map_err(|e| xlsx_err("seller", e))?;
    Ok(())
}

/// `history-<digits>.xlsx`; only the phone's digits go into the name.
pub fn history_xlsx_filename(phone: &str) -> String {
    format!("history-{}.xlsx", phone_digits(phone))
}
