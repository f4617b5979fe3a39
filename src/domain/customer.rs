// src/domain/customer.rs

use std::collections::{BTreeSet, HashMap};

use crate::domain::record::{non_empty, SaleRecord};

pub const UNKNOWN_NAME: &str = "Unknown";
pub const NO_ADDRESS: &str = "ไม่มีข้อมูลที่อยู่";

/// Aggregated view of every sale record sharing one buyer phone number.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSummary {
    pub phone: String,
    pub name: String,
    pub facebook_name: Option<String>,
    pub address: String,
    pub total_spent: f64,
    /// Distinct calendar days with at least one purchase.
    pub order_count: usize,
}

/// Groups records by buyer phone and builds one summary per phone.
///
/// Records without a phone cannot be attributed to anyone and are skipped.
/// Summaries come back in the order each phone first appears. Contact details
/// are taken from the customer's most recent record; when several records share
/// the latest timestamp the earliest of them in input order wins.
pub fn aggregate_customers(records: &[SaleRecord]) -> Vec<CustomerSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<(&str, Vec<&SaleRecord>)> = Vec::new();

    for record in records {
        let Some(phone) = record.phone() else {
            continue;
        };
        let slot = *index.entry(phone).or_insert_with(|| {
            buckets.push((phone, Vec::new()));
            buckets.len() - 1
        });
        buckets[slot].1.push(record);
    }

    buckets
        .into_iter()
        .filter_map(|(phone, bucket)| summarize(phone, bucket))
        .collect()
}

fn summarize(phone: &str, mut bucket: Vec<&SaleRecord>) -> Option<CustomerSummary> {
    // Stable sort, newest first.
    bucket.sort_by(|a, b| b.sale_date.cmp(&a.sale_date));
    let latest = *bucket.first()?;

    let total_spent = bucket.iter().map(|r| r.price_or_zero()).sum();
    let order_days: BTreeSet<_> = bucket.iter().map(|r| r.sale_day()).collect();

    let facebook_name = non_empty(&latest.facebook_name).map(str::to_string);
    let name = non_empty(&latest.buyer_name)
        .or(facebook_name.as_deref())
        .unwrap_or(UNKNOWN_NAME)
        .to_string();

    let address = latest.address_parts().collect::<Vec<_>>().join(" ");
    let address = if address.is_empty() {
        NO_ADDRESS.to_string()
    } else {
        address
    };

    Some(CustomerSummary {
        phone: phone.to_string(),
        name,
        facebook_name,
        address,
        total_spent,
        order_count: order_days.len(),
    })
}

/// Looks a customer up by exact phone.
pub fn find_by_phone<'a>(
    customers: &'a [CustomerSummary],
    phone: &str,
) -> Option<&'a CustomerSummary> {
    let phone = phone.trim();
    customers.iter().find(|c| c.phone == phone)
}
