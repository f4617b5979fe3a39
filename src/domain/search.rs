// src/domain/search.rs

use crate::domain::customer::CustomerSummary;

/// Result of running a lookup query against the customer list.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Blank query; nothing was searched.
    NotSearched,
    /// Exactly one customer matched and is selected straight away.
    Selected(CustomerSummary),
    /// Two or more matches; the caller has to pick one.
    Choices(Vec<CustomerSummary>),
    /// The query matched nobody.
    NoMatch,
}

/// Keeps only the ASCII digits of `s`.
pub fn phone_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Customers whose name or Facebook name contains `query` (case-insensitive),
/// or whose phone digits contain the query's digits.
///
/// A blank query returns nothing. A query without digits never matches on
/// phone.
pub fn search_customers<'a>(
    customers: &'a [CustomerSummary],
    query: &str,
) -> Vec<&'a CustomerSummary> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let digits = phone_digits(query);

    customers
        .iter()
        .filter(|c| {
            let by_phone = !digits.is_empty() && phone_digits(&c.phone).contains(&digits);
            let by_name = c.name.to_lowercase().contains(&needle);
            let by_alias = c
                .facebook_name
                .as_deref()
                .is_some_and(|fb| fb.to_lowercase().contains(&needle));
            by_phone || by_name || by_alias
        })
        .collect()
}

/// Runs the search and applies the selection policy: one hit selects,
/// several hits ask the caller to choose.
pub fn resolve_search(customers: &[CustomerSummary], query: &str) -> SearchOutcome {
    if query.trim().is_empty() {
        return SearchOutcome::NotSearched;
    }

    let mut hits = search_customers(customers, query);
    match hits.len() {
        0 => SearchOutcome::NoMatch,
        1 => SearchOutcome::Selected(hits.remove(0).clone()),
        _ => SearchOutcome::Choices(hits.into_iter().cloned().collect()),
    }
}
