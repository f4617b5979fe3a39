// templates/pages/home.rs

use crate::templates::layouts::desktop::NavItem;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "หน้าหลัก",
        NavItem::Home,
        html! {
            main class="container" {
                h1 { "Sales Desk" }

                section class="card" {
                    h3 { "ค้นหาประวัติลูกค้า" }
                    p class="muted" { "ค้นหาลูกค้าด้วยชื่อ ชื่อ Facebook หรือเบอร์โทร แล้วดูยอดรวมและประวัติการสั่งซื้อ" }
                    a href="/sales" { "ไปที่หน้าค้นหา" }
                }

                section class="card" {
                    h3 { "AI Chat" }
                    p class="muted" { "ถามคำถามเกี่ยวกับข้อมูลการขายกับผู้ช่วย AI (ต้องใช้รหัสผ่าน)" }
                    a href="/chat" { "เริ่มสนทนา" }
                }
            }
        },
    )
}
