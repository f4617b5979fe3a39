use crate::router::respond;
use crate::tests::utils::{body_string, get, test_app, FakeAssistant};

#[test]
fn home_links_to_both_tools() {
    let (assistant, _) = FakeAssistant::replying("unused");
    let (app, _dir) = test_app(assistant);

    let resp = respond(get("/"), &app);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains(r#"href="/sales""#));
    assert!(body.contains(r#"href="/chat""#));
}

#[test]
fn health_is_plain_text() {
    let (assistant, _) = FakeAssistant::replying("unused");
    let (app, _dir) = test_app(assistant);

    let resp = respond(get("/health"), &app);
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}

#[test]
fn unknown_route_renders_404_page() {
    let (assistant, _) = FakeAssistant::replying("unused");
    let (app, _dir) = test_app(assistant);

    let resp = respond(get("/nope"), &app);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Not Found"));
}
