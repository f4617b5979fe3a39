use crate::domain::record::SaleRecord;
use crate::router::respond;
use crate::tests::utils::{body_string, days_ago, get, sale, seed, test_app, FakeAssistant};

fn app_with_customers() -> (crate::router::App, tempfile::TempDir) {
    let (assistant, _) = FakeAssistant::replying("unused");
    let (app, dir) = test_app(assistant);
    seed(
        &app,
        &[
            sale("0811111111", "สมชาย ใจดี", 10, Some(1500.0)),
            sale("0811111111", "สมชาย ใจดี", 120, Some(250.0)),
            sale("0822222222", "สมศรี มีสุข", 5, Some(99.5)),
            sale("0933333333", "Alice", 1, None),
        ],
    );
    (app, dir)
}

#[test]
fn blank_search_shows_only_the_form() {
    let (app, _dir) = app_with_customers();

    let resp = respond(get("/sales?q=++"), &app);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains(r#"name="q""#));
    assert!(!body.contains("customer-summary"));
    assert!(!body.contains("ไม่พบข้อมูลลูกค้า"));
}

#[test]
fn single_match_shows_summary_and_history() {
    let (app, _dir) = app_with_customers();

    let body = body_string(respond(get("/sales?q=alice"), &app));
    assert!(body.contains("customer-summary"));
    assert!(body.contains("0933333333"));
    assert!(body.contains("purchase-history"));
    assert!(body.contains("0 บาท"));
}

#[test]
fn search_by_phone_digits_ignores_formatting() {
    let (app, _dir) = app_with_customers();

    let body = body_string(respond(get("/sales?q=082-222"), &app));
    assert!(body.contains("customer-summary"));
    assert!(body.contains("สมศรี มีสุข"));
    assert!(body.contains("99.5 บาท"));
}

#[test]
fn several_matches_list_choices() {
    let (app, _dir) = app_with_customers();

    let body = body_string(respond(get("/sales?q=%E0%B8%AA%E0%B8%A1"), &app));
    assert!(body.contains("พบผลลัพธ์ 2 รายการ กรุณาเลือก:"));
    assert!(body.contains("phone=0811111111"));
    assert!(body.contains("phone=0822222222"));
    assert!(!body.contains("customer-summary"));
}

#[test]
fn picking_a_choice_by_phone_selects_that_customer() {
    let (app, _dir) = app_with_customers();

    let body = body_string(respond(get("/sales?q=%E0%B8%AA%E0%B8%A1&phone=0811111111"), &app));
    assert!(body.contains("customer-summary"));
    assert!(body.contains("สมชาย ใจดี"));
    assert!(body.contains("1,750 บาท"));
}

#[test]
fn no_match_echoes_the_query() {
    let (app, _dir) = app_with_customers();

    let body = body_string(respond(get("/sales?q=zzz"), &app));
    assert!(body.contains("ไม่พบข้อมูลลูกค้าที่ตรงกับ &quot;zzz&quot;"));
}

#[test]
fn three_month_window_drops_older_rows() {
    let (app, _dir) = app_with_customers();
    let old_day = crate::format::format_thai_date(&days_ago(120));
    let new_day = crate::format::format_thai_date(&days_ago(10));

    let all = body_string(respond(get("/sales?phone=0811111111"), &app));
    assert!(all.contains(&old_day));
    assert!(all.contains(&new_day));
    assert!(all.contains(r#"class="recent""#));

    let recent = body_string(respond(get("/sales?phone=0811111111&range=3months"), &app));
    assert!(!recent.contains(&old_day));
    assert!(recent.contains(&new_day));
    // Totals always cover the full history.
    assert!(recent.contains("1,750 บาท"));
}

#[test]
fn window_boundary_is_ninety_days() {
    let (assistant, _) = FakeAssistant::replying("unused");
    let (app, _dir) = test_app(assistant);
    seed(
        &app,
        &[
            sale("0844444444", "Boundary", 90, Some(1.0)),
            sale("0844444444", "Boundary", 91, Some(2.0)),
        ],
    );

    let body = body_string(respond(get("/sales?phone=0844444444&range=3months"), &app));
    assert!(body.contains(&crate::format::format_thai_date(&days_ago(90))));
    assert!(!body.contains(&crate::format::format_thai_date(&days_ago(91))));
}

#[test]
fn customer_without_name_is_unknown_with_no_address() {
    let (assistant, _) = FakeAssistant::replying("unused");
    let (app, _dir) = test_app(assistant);
    seed(
        &app,
        &[SaleRecord {
            buyer_phone: Some("0855555555".into()),
            ..SaleRecord::new(days_ago(3))
        }],
    );

    let body = body_string(respond(get("/sales?q=0855555555"), &app));
    assert!(body.contains("Unknown"));
    assert!(body.contains("ไม่มีข้อมูลที่อยู่"));
}

#[test]
fn export_returns_a_workbook() {
    let (app, _dir) = app_with_customers();

    let resp = respond(get("/sales/export?phone=0811111111&range=all"), &app);
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(disposition.contains("0811111111"));
}

#[test]
fn export_needs_a_known_phone() {
    let (app, _dir) = app_with_customers();

    assert_eq!(respond(get("/sales/export"), &app).status(), 400);
    assert_eq!(respond(get("/sales/export?phone=0000000000"), &app).status(), 404);
}

#[test]
fn unknown_phone_without_query_echoes_the_phone() {
    let (app, _dir) = app_with_customers();

    let body = body_string(respond(get("/sales?phone=0999999999"), &app));
    assert!(body.contains("ไม่พบข้อมูลลูกค้าที่ตรงกับ &quot;0999999999&quot;"));
    assert!(!body.contains("&quot;&quot;"));
}
