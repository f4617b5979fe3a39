// src/db/sales.rs
use rusqlite::{params, Connection, Row};

use crate::domain::record::SaleRecord;
use crate::errors::ServerError;

const SELECT_COLUMNS: &str = r#"
    select sale_date, product_name, quantity, price, seller_name,
           buyer_phone, buyer_name, facebook_name,
           address, subdistrict, district, province, postal_code
    from sales_history
"#;

/// Every stored sale record, in import order.
pub fn load_sales_records(conn: &Connection) -> Result<Vec<SaleRecord>, ServerError> {
    let sql = format!("{SELECT_COLUMNS} order by id");
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| ServerError::DbError(format!("prepare sales query failed: {e}")))?;

    let rows = stmt
        .query_map([], map_row)
        .map_err(|e| ServerError::DbError(format!("sales query failed: {e}")))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| ServerError::DbError(format!("read sales row failed: {e}")))
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<SaleRecord> {
    Ok(SaleRecord {
        sale_date: row.get(0)?,
        product_name: row.get(1)?,
        quantity: row.get(2)?,
        price: row.get(3)?,
        seller_name: row.get(4)?,
        buyer_phone: row.get(5)?,
        buyer_name: row.get(6)?,
        facebook_name: row.get(7)?,
        address: row.get(8)?,
        subdistrict: row.get(9)?,
        district: row.get(10)?,
        province: row.get(11)?,
        postal_code: row.get(12)?,
    })
}

/// Appends records in one transaction. Returns how many rows were written.
pub fn insert_sales_records(
    conn: &mut Connection,
    records: &[SaleRecord],
) -> Result<usize, ServerError> {
    let tx = conn
        .transaction()
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    {
        let mut stmt = tx
            .prepare(
                r#"
                insert into sales_history (
                    sale_date, product_name, quantity, price, seller_name,
                    buyer_phone, buyer_name, facebook_name,
                    address, subdistrict, district, province, postal_code
                ) values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
                "#,
            )
            .map_err(|e| ServerError::DbError(format!("prepare insert failed: {e}")))?;

        for r in records {
            stmt.execute(params![
                r.sale_date,
                r.product_name,
                r.quantity,
                r.price,
                r.seller_name,
                r.buyer_phone,
                r.buyer_name,
                r.facebook_name,
                r.address,
                r.subdistrict,
                r.district,
                r.province,
                r.postal_code,
            ])
            .map_err(|e| ServerError::DbError(format!("insert sale failed: {e}")))?;
        }
    }

    tx.commit()
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    Ok(records.len())
}

/// Removes every stored sale record. Used by `import --replace`.
pub fn clear_sales_records(conn: &Connection) -> Result<usize, ServerError> {
    conn.execute("delete from sales_history", [])
        .map_err(|e| ServerError::DbError(format!("clear sales failed: {e}")))
}
