use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = r#"
body { font-family: system-ui, "Noto Sans Thai", sans-serif; margin: 0; background: #f1f5f9; color: #1e293b; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
header nav ul { display: flex; gap: 1.25rem; list-style: none; margin: 0; padding: 0; }
header nav a { color: #0369a1; text-decoration: none; font-weight: 600; }
header nav a.active { color: #0f172a; border-bottom: 2px solid #0ea5e9; }
main.container { max-width: 64rem; margin: 1.5rem auto; padding: 0 1rem; }
.card { background: #fff; border: 1px solid #e2e8f0; border-radius: 1rem; padding: 1.5rem; margin-bottom: 1.5rem; }
.error { background: #fef2f2; color: #b91c1c; border: 1px solid #fecaca; border-radius: .5rem; padding: .75rem 1rem; margin-bottom: 1rem; }
.muted { color: #64748b; }
.amount { color: #16a34a; font-weight: 700; }
table { width: 100%; border-collapse: collapse; font-size: .9rem; }
th, td { padding: .6rem .8rem; text-align: left; border-bottom: 1px solid #e2e8f0; }
td.num, th.num { text-align: right; }
tr.recent { background: #e0f2fe; }
.choices li { list-style: none; margin-bottom: .5rem; }
.choices a { display: block; padding: .75rem 1rem; border: 1px solid #e2e8f0; border-radius: .5rem; background: #fff; color: inherit; text-decoration: none; }
.bubble { padding: .75rem 1rem; border-radius: .75rem; margin-bottom: .75rem; white-space: pre-wrap; max-width: 42rem; }
.bubble.user { background: #fff; margin-left: auto; }
.bubble.model { background: #e0f2fe; }
.filters a { padding: .3rem .8rem; border-radius: .5rem; text-decoration: none; color: #64748b; }
.filters a.active { background: #fff; color: #0284c7; font-weight: 600; }
"#;

/// Which nav entry to highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Sales,
    Chat,
}

pub fn desktop_layout(title: &str, active: NavItem, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="th" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Sales Desk" }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header {
                    h3 { "Sales Desk" }
                    nav {
                        ul {
                            li { a href="/" class=[nav_class(active, NavItem::Home)] { "หน้าหลัก" } }
                            li { a href="/sales" class=[nav_class(active, NavItem::Sales)] { "ประวัติลูกค้า" } }
                            li { a href="/chat" class=[nav_class(active, NavItem::Chat)] { "AI Chat" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}

fn nav_class(active: NavItem, item: NavItem) -> Option<&'static str> {
    (active == item).then_some("active")
}
