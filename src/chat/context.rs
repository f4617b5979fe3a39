// src/chat/context.rs
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::domain::customer::aggregate_customers;
use crate::domain::record::SaleRecord;
use crate::format::format_amount;

/// Plain-text summary of the sales data handed to the assistant as its
/// system instruction.
pub fn sales_context(records: &[SaleRecord]) -> String {
    let customers = aggregate_customers(records);
    let total: f64 = records.iter().map(SaleRecord::price_or_zero).sum();

    let mut by_month: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for r in records {
        let entry = by_month
            .entry(r.sale_date.format("%Y-%m").to_string())
            .or_insert((0.0, 0));
        entry.0 += r.price_or_zero();
        entry.1 += 1;
    }

    let mut out = String::new();
    out.push_str(
        "คุณคือผู้ช่วยวิเคราะห์ข้อมูลการขาย ตอบคำถามเป็นภาษาไทยโดยอ้างอิงจากข้อมูลด้านล่างเท่านั้น\n",
    );
    // Writing into a String cannot fail.
    let _ = writeln!(out, "จำนวนรายการขาย: {}", records.len());
    let _ = writeln!(out, "จำนวนลูกค้า (ตามเบอร์โทร): {}", customers.len());
    let _ = writeln!(out, "ยอดขายรวม: {} บาท", format_amount(total));

    if !by_month.is_empty() {
        out.push_str("ยอดขายรายเดือน:\n");
        for (month, (amount, count)) in &by_month {
            let _ = writeln!(out, "- {month}: {} บาท ({count} รายการ)", format_amount(*amount));
        }
    }

    out
}
