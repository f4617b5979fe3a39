use crate::domain::customer::CustomerSummary;
use crate::domain::window::DateWindow;
use crate::templates::components::{customer_card, error_banner, history_table, HistoryRow};
use crate::templates::layouts::desktop::NavItem;
use crate::templates::desktop_layout;
use maud::{html, Markup};
use url::form_urlencoded;

/// What the result area of the sales page shows.
#[derive(Debug, Clone)]
pub enum SalesView {
    /// Nothing searched yet.
    Idle,
    Customer {
        customer: CustomerSummary,
        history: Vec<HistoryRow>,
    },
    Choices(Vec<CustomerSummary>),
    /// Nobody matched; carries the search text or the requested phone.
    NoMatch(String),
}

#[derive(Debug, Clone)]
pub struct SalesVm {
    pub query: String,
    pub window: DateWindow,
    pub view: SalesView,
    /// Record source failure, shown verbatim.
    pub error: Option<String>,
}

/// `/sales` link preserving the current window.
pub fn sales_href(query: &str, phone: Option<&str>, window: DateWindow) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    if !query.is_empty() {
        params.append_pair("q", query);
    }
    if let Some(phone) = phone {
        params.append_pair("phone", phone);
    }
    params.append_pair("range", window.as_query());
    format!("/sales?{}", params.finish())
}

fn export_href(phone: &str, window: DateWindow) -> String {
    let params = form_urlencoded::Serializer::new(String::new())
        .append_pair("phone", phone)
        .append_pair("range", window.as_query())
        .finish();
    format!("/sales/export?{params}")
}

pub fn sales_page(vm: &SalesVm) -> Markup {
    desktop_layout(
        "ค้นหาประวัติลูกค้า",
        NavItem::Sales,
        html! {
            main class="container" {
                h1 { "ค้นหาประวัติลูกค้า" }

                @if let Some(err) = &vm.error {
                    (error_banner(err))
                }

                (search_form(vm))
                (window_filter(vm))

                div id="results" style="margin-top: 1.5rem;" {
                    @match &vm.view {
                        SalesView::Idle => {}
                        SalesView::Customer { customer, history } => {
                            (customer_card(customer))
                            (history_table(history))
                            p {
                                a href=(export_href(&customer.phone, vm.window)) { "ดาวน์โหลด Excel" }
                            }
                        }
                        SalesView::Choices(list) => {
                            h3 { "พบผลลัพธ์ " (list.len()) " รายการ กรุณาเลือก:" }
                            ul class="choices" style="padding: 0;" {
                                @for c in list {
                                    li {
                                        a href=(sales_href(&c.name, Some(&c.phone), vm.window)) {
                                            strong { (c.name) }
                                            br;
                                            span class="muted" { (c.phone) }
                                        }
                                    }
                                }
                            }
                        }
                        SalesView::NoMatch(term) => {
                            p class="muted" style="text-align: center; padding: 2rem 0;" {
                                "ไม่พบข้อมูลลูกค้าที่ตรงกับ \"" (term) "\""
                            }
                        }
                    }
                }
            }
        },
    )
}

fn search_form(vm: &SalesVm) -> Markup {
    html! {
        form method="get" action="/sales" class="card" style="display: flex; gap: .75rem; flex-wrap: wrap;" {
            input
                type="search"
                name="q"
                value=(vm.query)
                placeholder="ค้นหาด้วยชื่อ, ชื่อ Facebook หรือเบอร์โทร"
                autocomplete="off"
                style="flex: 1; min-width: 16rem; padding: .6rem .9rem; font-size: 1rem;";
            input type="hidden" name="range" value=(vm.window.as_query());
            button type="submit" { "ค้นหา" }
            a href="/sales" title="ล้างข้อมูล" { "ล้าง" }
        }
    }
}

/// Window toggle. Links keep whatever is currently selected or searched.
fn window_filter(vm: &SalesVm) -> Markup {
    let selected_phone = match &vm.view {
        SalesView::Customer { customer, .. } => Some(customer.phone.as_str()),
        _ => None,
    };
    let query = match &vm.view {
        SalesView::Customer { customer, .. } => customer.name.as_str(),
        _ => vm.query.as_str(),
    };

    html! {
        div class="filters" style="display: flex; gap: .5rem; align-items: center;" {
            span class="muted" { "แสดงผล:" }
            @for (window, label) in [
                (DateWindow::All, "ดูข้อมูลทั้งหมด"),
                (DateWindow::LastThreeMonths, "ดูย้อนหลัง 3 เดือน"),
            ] {
                a href=(sales_href(query, selected_phone, window))
                  class=[(vm.window == window).then_some("active")] { (label) }
            }
        }
    }
}
