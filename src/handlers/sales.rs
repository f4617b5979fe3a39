// src/handlers/sales.rs
use astra::Request;
use chrono::{Local, NaiveDate};

use crate::db::sales::load_sales_records;
use crate::domain::customer::{aggregate_customers, find_by_phone, CustomerSummary};
use crate::domain::record::SaleRecord;
use crate::domain::search::{resolve_search, SearchOutcome};
use crate::domain::window::{customer_history, is_recent, DateWindow};
use crate::errors::ServerError;
use crate::responses::{html_response, xlsx_response, ResultResp};
use crate::router::{query_params, App};
use crate::spreadsheets::{history_workbook, history_xlsx_filename};
use crate::templates::components::HistoryRow;
use crate::templates::pages::{sales_page, SalesView, SalesVm};

/// GET /sales
///
/// `phone` selects a customer directly (picked from a choices list);
/// otherwise `q` is searched. `range` picks the history window.
pub fn show(req: &Request, app: &App) -> ResultResp {
    let params = query_params(req);
    let query = params
        .get("q")
        .map(|q| q.trim().to_string())
        .unwrap_or_default();
    let window = DateWindow::from_query(params.get("range").map(String::as_str));
    let phone = params
        .get("phone")
        .map(|p| p.trim())
        .filter(|p| !p.is_empty());
    let today = Local::now().date_naive();

    let records = match app.db.with_conn(|conn| load_sales_records(conn)) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(error = %err, "loading sales records failed");
            return html_response(sales_page(&SalesVm {
                query,
                window,
                view: SalesView::Idle,
                error: Some(err.to_string()),
            }));
        }
    };

    let customers = aggregate_customers(&records);
    let view = match phone {
        Some(phone) => match find_by_phone(&customers, phone) {
            Some(customer) => customer_view(customer.clone(), &records, window, today),
            None => SalesView::NoMatch(phone.to_string()),
        },
        None => match resolve_search(&customers, &query) {
            SearchOutcome::NotSearched => SalesView::Idle,
            SearchOutcome::Selected(customer) => customer_view(customer, &records, window, today),
            SearchOutcome::Choices(list) => SalesView::Choices(list),
            SearchOutcome::NoMatch => SalesView::NoMatch(query.clone()),
        },
    };
    tracing::debug!(%query, customers = customers.len(), "sales lookup");

    html_response(sales_page(&SalesVm {
        query,
        window,
        view,
        error: None,
    }))
}

fn customer_view(
    customer: CustomerSummary,
    records: &[SaleRecord],
    window: DateWindow,
    today: NaiveDate,
) -> SalesView {
    let history = customer_history(records, &customer.phone, window, today)
        .into_iter()
        .map(|record| HistoryRow {
            recent: is_recent(window, record, today),
            record: record.clone(),
        })
        .collect();

    SalesView::Customer { customer, history }
}

/// GET /sales/export?phone=..&range=..
pub fn export(req: &Request, app: &App) -> ResultResp {
    let params = query_params(req);
    let phone = params
        .get("phone")
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ServerError::BadRequest("missing phone".into()))?;
    let window = DateWindow::from_query(params.get("range").map(String::as_str));
    let today = Local::now().date_naive();

    let records = app.db.with_conn(|conn| load_sales_records(conn))?;
    if !records.iter().any(|r| r.phone() == Some(phone)) {
        return Err(ServerError::NotFound);
    }

    let history = customer_history(&records, phone, window, today);
    let buffer = history_workbook(&history)?;
    tracing::info!(rows = history.len(), window = window.as_query(), "history exported");

    xlsx_response(buffer, &history_xlsx_filename(phone))
}
