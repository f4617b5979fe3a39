// src/domain/record.rs

use chrono::{NaiveDate, NaiveDateTime};

/// One line item of a sale, as supplied by the record source.
///
/// Every field except the sale date is optional because the source sheet
/// routinely leaves cells blank. Empty strings are treated the same as `None`
/// by the accessors below.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    pub sale_date: NaiveDateTime,
    pub product_name: Option<String>,
    pub quantity: Option<f64>,
    pub price: Option<f64>,
    pub seller_name: Option<String>,

    // Buyer contact
    pub buyer_phone: Option<String>,
    pub buyer_name: Option<String>,
    pub facebook_name: Option<String>,

    // Address parts, in display order
    pub address: Option<String>,
    pub subdistrict: Option<String>,
    pub district: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
}

impl SaleRecord {
    /// A record with only its date set.
    pub fn new(sale_date: NaiveDateTime) -> Self {
        Self {
            sale_date,
            product_name: None,
            quantity: None,
            price: None,
            seller_name: None,
            buyer_phone: None,
            buyer_name: None,
            facebook_name: None,
            address: None,
            subdistrict: None,
            district: None,
            province: None,
            postal_code: None,
        }
    }

    /// Calendar day of the sale.
    pub fn sale_day(&self) -> NaiveDate {
        self.sale_date.date()
    }

    pub fn phone(&self) -> Option<&str> {
        non_empty(&self.buyer_phone)
    }

    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Address parts that carry a value, in display order.
    pub fn address_parts(&self) -> impl Iterator<Item = &str> {
        [
            &self.address,
            &self.subdistrict,
            &self.district,
            &self.province,
            &self.postal_code,
        ]
        .into_iter()
        .filter_map(non_empty)
    }
}

/// Trimmed view of an optional cell; blank cells become `None`.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
