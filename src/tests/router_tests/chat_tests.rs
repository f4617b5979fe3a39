use crate::domain::chat::ChatRole;
use crate::router::respond;
use crate::tests::utils::{
    body_string, get, post_form, sale, seed, test_app, unlock, with_session, FakeAssistant,
    PASSWORD,
};

#[test]
fn chat_is_locked_without_a_session() {
    let (assistant, _) = FakeAssistant::replying("unused");
    let (app, _dir) = test_app(assistant);

    let resp = respond(get("/chat"), &app);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("AI Chat Access"));
    assert!(!body.contains(r#"action="/chat/messages""#));
}

#[test]
fn unknown_session_token_is_still_locked() {
    let (assistant, _) = FakeAssistant::replying("unused");
    let (app, _dir) = test_app(assistant);

    let body = body_string(respond(with_session(get("/chat"), "forged-token"), &app));
    assert!(body.contains("AI Chat Access"));
}

#[test]
fn wrong_password_shows_the_gate_again() {
    let (assistant, _) = FakeAssistant::replying("unused");
    let (app, _dir) = test_app(assistant);

    let resp = respond(post_form("/chat/unlock", "password=nope", None), &app);
    assert_eq!(resp.status(), 200);
    assert!(resp.headers().get("Set-Cookie").is_none());
    assert!(body_string(resp).contains("รหัสผ่านไม่ถูกต้อง"));
}

#[test]
fn unlocking_opens_an_empty_chat() {
    let (assistant, _) = FakeAssistant::replying("unused");
    let (app, _dir) = test_app(assistant);

    let token = unlock(&app);
    let body = body_string(respond(with_session(get("/chat"), &token), &app));
    assert!(body.contains(r#"action="/chat/messages""#));
    assert!(body.contains("สวัสดี! ฉันคือผู้ช่วย AI ของคุณ"));
}

#[test]
fn sending_a_message_stores_both_turns() {
    let (assistant, seen) = FakeAssistant::replying("ยอดขายรวม 1,500 บาท");
    let (app, _dir) = test_app(assistant);
    seed(&app, &[sale("0811111111", "สมชาย", 3, Some(1500.0))]);
    let token = unlock(&app);

    let resp = respond(
        post_form("/chat/messages", "message=%E0%B8%A2%E0%B8%AD%E0%B8%94%E0%B8%82%E0%B8%B2%E0%B8%A2%3F", Some(&token)),
        &app,
    );
    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers().get("Location").unwrap(), "/chat");

    let call = seen.lock().unwrap().clone().expect("assistant was called");
    assert_eq!(call.question, "ยอดขาย?");
    assert!(call.history.is_empty());
    assert!(call.context.contains("1,500"));

    let body = body_string(respond(with_session(get("/chat"), &token), &app));
    let question = body.find("ยอดขาย?").expect("question shown");
    let answer = body.find("ยอดขายรวม 1,500 บาท").expect("answer shown");
    assert!(question < answer);
}

#[test]
fn earlier_turns_are_sent_as_history() {
    let (assistant, seen) = FakeAssistant::replying("ok");
    let (app, _dir) = test_app(assistant);
    let token = unlock(&app);

    respond(post_form("/chat/messages", "message=first", Some(&token)), &app);
    respond(post_form("/chat/messages", "message=second", Some(&token)), &app);

    let call = seen.lock().unwrap().clone().unwrap();
    assert_eq!(call.question, "second");
    let roles: Vec<ChatRole> = call.history.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![ChatRole::User, ChatRole::Model]);
    assert_eq!(call.history[0].content, "first");
}

#[test]
fn assistant_failure_is_shown_verbatim_and_question_kept() {
    let (assistant, _) = FakeAssistant::failing("quota exceeded");
    let (app, _dir) = test_app(assistant);
    let token = unlock(&app);

    let resp = respond(post_form("/chat/messages", "message=hello", Some(&token)), &app);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("API error: quota exceeded"));
    assert!(body.contains("hello"));
}

#[test]
fn blank_message_is_ignored() {
    let (assistant, seen) = FakeAssistant::replying("unused");
    let (app, _dir) = test_app(assistant);
    let token = unlock(&app);

    let resp = respond(post_form("/chat/messages", "message=+++", Some(&token)), &app);
    assert_eq!(resp.status(), 302);
    assert!(seen.lock().unwrap().is_none());
}

#[test]
fn reset_clears_the_transcript() {
    let (assistant, _) = FakeAssistant::replying("the answer");
    let (app, _dir) = test_app(assistant);
    let token = unlock(&app);

    respond(post_form("/chat/messages", "message=question", Some(&token)), &app);
    let resp = respond(post_form("/chat/reset", "", Some(&token)), &app);
    assert_eq!(resp.status(), 302);

    let body = body_string(respond(with_session(get("/chat"), &token), &app));
    assert!(!body.contains("the answer"));
    assert!(body.contains("สวัสดี! ฉันคือผู้ช่วย AI ของคุณ"));
}

#[test]
fn messages_and_reset_need_a_session() {
    let (assistant, seen) = FakeAssistant::replying("unused");
    let (app, _dir) = test_app(assistant);

    let resp = respond(post_form("/chat/messages", "message=hi", None), &app);
    assert_eq!(resp.status(), 401);
    assert_eq!(respond(post_form("/chat/reset", "", None), &app).status(), 401);
    assert!(seen.lock().unwrap().is_none());
}

#[test]
fn unlocking_again_keeps_the_existing_session() {
    let (assistant, _) = FakeAssistant::replying("kept");
    let (app, _dir) = test_app(assistant);
    let token = unlock(&app);
    respond(post_form("/chat/messages", "message=hello", Some(&token)), &app);

    let resp = respond(
        post_form("/chat/unlock", &format!("password={PASSWORD}"), Some(&token)),
        &app,
    );
    assert_eq!(resp.status(), 302);
    assert!(resp.headers().get("Set-Cookie").is_none());

    let sessions: i64 = app
        .db
        .with_conn(|conn| {
            conn.query_row("select count(*) from chat_sessions", [], |r| r.get(0))
                .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))
        })
        .unwrap();
    assert_eq!(sessions, 1);

    let body = body_string(respond(with_session(get("/chat"), &token), &app));
    assert!(body.contains("kept"));
}
