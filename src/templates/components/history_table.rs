use crate::domain::record::{non_empty, SaleRecord};
use crate::format::{format_optional_amount, format_thai_date, text_or_placeholder};
use maud::{html, Markup};

/// One table row; `recent` rows are highlighted.
#[derive(Debug, Clone)]
pub struct HistoryRow {
    pub record: SaleRecord,
    pub recent: bool,
}

pub fn history_table(rows: &[HistoryRow]) -> Markup {
    html! {
        section id="purchase-history" {
            h4 { "ประวัติการสั่งซื้อ" }
            div class="card" style="padding: 0; overflow-x: auto;" {
                table {
                    thead {
                        tr {
                            th { "วันที่ขาย" }
                            th { "สินค้า" }
                            th class="num" { "จำนวน" }
                            th class="num" { "ราคา" }
                            th { "พนักงานขาย" }
                        }
                    }
                    tbody {
                        @if rows.is_empty() {
                            tr {
                                td colspan="5" class="muted" style="text-align: center; padding: 2rem;" {
                                    "ไม่พบข้อมูลการซื้อในระยะเวลาที่เลือก"
                                }
                            }
                        }
                        @for row in rows {
                            tr class=[row.recent.then_some("recent")] {
                                td style="white-space: nowrap;" { (format_thai_date(&row.record.sale_date)) }
                                td { (text_or_placeholder(non_empty(&row.record.product_name))) }
                                td class="num" { (format_optional_amount(row.record.quantity)) }
                                td class="num" { (format_optional_amount(row.record.price)) }
                                td { (text_or_placeholder(non_empty(&row.record.seller_name))) }
                            }
                        }
                    }
                }
            }
        }
    }
}
