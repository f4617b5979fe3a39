use crate::domain::customer::CustomerSummary;
use crate::format::format_amount;
use maud::{html, Markup};

pub fn customer_card(customer: &CustomerSummary) -> Markup {
    html! {
        section class="card" id="customer-summary" {
            div style="display: flex; justify-content: space-between; gap: 1.5rem; flex-wrap: wrap;" {
                div {
                    h3 style="margin: 0 0 .25rem;" { (customer.name) }
                    p class="muted" style="margin: 0;" { (customer.phone) }
                    @if let Some(fb) = &customer.facebook_name {
                        p class="muted" style="margin: 0;" { "Facebook: " (fb) }
                    }
                    p class="muted" style="margin-top: .5rem; font-size: .9rem;" { (customer.address) }
                }
                div style="text-align: right;" {
                    p class="muted" style="margin: 0;" { "ยอดรวม" }
                    p class="amount" style="font-size: 1.25rem; margin: 0 0 .75rem;" {
                        (format_amount(customer.total_spent)) " บาท"
                    }
                    p class="muted" style="margin: 0;" { "จำนวนครั้งที่สั่ง" }
                    p style="font-size: 1.25rem; font-weight: 700; margin: 0; color: #0284c7;" {
                        (customer.order_count)
                    }
                }
            }
        }
    }
}
