use crate::domain::chat::{ChatMessage, ChatRole};
use crate::templates::components::error_banner;
use crate::templates::layouts::desktop::NavItem;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ChatVm {
    pub messages: Vec<ChatMessage>,
    /// Last assistant or data failure, shown verbatim.
    pub error: Option<String>,
}

/// Password prompt shown until the chat is unlocked.
pub fn chat_gate_page(wrong_password: bool) -> Markup {
    desktop_layout(
        "AI Chat",
        NavItem::Chat,
        html! {
            main class="container" style="max-width: 24rem; text-align: center;" {
                div class="card" {
                    h2 { "AI Chat Access" }
                    p class="muted" { "กรุณาใส่รหัสผ่านเพื่อเริ่มการสนทนากับ AI" }
                    @if wrong_password {
                        (error_banner("รหัสผ่านไม่ถูกต้อง"))
                    }
                    form method="post" action="/chat/unlock" {
                        input
                            type="password"
                            name="password"
                            placeholder="••••••••"
                            autofocus
                            style="width: 100%; padding: .6rem; font-size: 1.1rem; text-align: center; letter-spacing: .2em;";
                        button type="submit" style="margin-top: 1rem;" { "เข้าสู่ระบบ" }
                    }
                }
            }
        },
    )
}

pub fn chat_page(vm: &ChatVm) -> Markup {
    desktop_layout(
        "AI Chat",
        NavItem::Chat,
        html! {
            main class="container" {
                section class="card" id="transcript" style="min-height: 50vh;" {
                    @if vm.messages.is_empty() {
                        div class="muted" style="text-align: center; padding: 3rem 1rem;" {
                            h2 { "สวัสดี! ฉันคือผู้ช่วย AI ของคุณ" }
                            p {
                                "ฉันสามารถตอบคำถามจากข้อมูลการขายทั้งหมดได้ ลองถามคำถาม เช่น "
                                "\"ยอดขายเดือนล่าสุดเท่าไหร่?\" หรือ \"ยอดขายรวมทั้งหมด\""
                            }
                        }
                    }
                    @for message in &vm.messages {
                        (bubble(message))
                    }
                }

                @if let Some(err) = &vm.error {
                    (error_banner(err))
                }

                form method="post" action="/chat/messages" style="display: flex; gap: .75rem;" {
                    input
                        type="text"
                        name="message"
                        placeholder="ถามคำถามเกี่ยวกับข้อมูลการขาย..."
                        autocomplete="off"
                        required
                        style="flex: 1; padding: .6rem .9rem; font-size: 1rem;";
                    button type="submit" aria-label="Send message" { "ส่ง" }
                }
                form method="post" action="/chat/reset" style="margin-top: .75rem;" {
                    button type="submit" class="muted" { "เริ่มบทสนทนาใหม่" }
                }
            }
        },
    )
}

fn bubble(message: &ChatMessage) -> Markup {
    let class = match message.role {
        ChatRole::User => "bubble user",
        ChatRole::Model => "bubble model",
    };
    html! {
        div class=(class) data-role=(message.role.as_str()) { (message.content) }
    }
}
