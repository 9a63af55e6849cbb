//! Widget end-to-end tests
//!
//! Drives `ChatWidget` through `HttpTransport` against a gateway served on a
//! local port, with the provider mocked behind it.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use ask_oliver::{
    client::{
        widget::{FAILURE_NOTICE, FAILURE_REPLY, GREETING},
        ChatWidget, HttpTransport, SendOutcome,
    },
    config::ContactInfo,
    transcript::{Message, Role},
};

use crate::common::{
    constants::*, single_question, spawn_gateway, test_config, test_state, unreachable_url,
};
use crate::mocks::MockGroq;

fn widget_for(base_url: &str) -> ChatWidget {
    let transport = HttpTransport::new(reqwest::Client::new(), format!("{}{}", base_url, ASK_PATH));
    ChatWidget::new(Arc::new(transport), ContactInfo::default())
}

#[tokio::test]
async fn test_in_scope_question_is_answered_verbatim() {
    let groq = MockGroq::start().await;
    groq.mock_reply("Oliver studies **ITMB** at the University of Manchester.")
        .await;
    let base = spawn_gateway(test_state(test_config(&groq.uri(), Some(TEST_GROQ_API_KEY)))).await;

    let widget = widget_for(&base);
    widget.open();
    let outcome = widget.send("Where does Oliver study?").await;

    assert_eq!(outcome, SendOutcome::Answered);
    let state = widget.snapshot();
    assert_eq!(
        state.transcript,
        vec![
            Message::assistant(GREETING),
            Message::user("Where does Oliver study?"),
            Message::assistant("Oliver studies **ITMB** at the University of Manchester."),
        ]
    );
    assert!(!state.show_contact_options);
    assert!(!state.loading);
    assert_eq!(state.scroll_target(), Some(2));
    assert!(widget.contact_links().is_empty());

    // The greeting travels with the transcript, behind the policy prompt
    let sent = groq.completion_body_at(0).await;
    let messages = sent["messages"].as_array().unwrap();
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1], json!({ "role": "assistant", "content": GREETING }));
    assert_eq!(
        messages[2],
        json!({ "role": "user", "content": "Where does Oliver study?" })
    );
}

#[tokio::test]
async fn test_out_of_scope_question_offers_contact() {
    let groq = MockGroq::start().await;
    groq.mock_reply("CONTACT_OLIVER\nPlease contact Oliver directly.")
        .await;
    let base = spawn_gateway(test_state(test_config(&groq.uri(), Some(TEST_GROQ_API_KEY)))).await;

    let widget = widget_for(&base);
    widget.open();
    widget.set_input("What is Oliver's shoe size?");
    let outcome = widget.send_input().await;

    assert_eq!(outcome, SendOutcome::OutOfScope);
    let state = widget.snapshot();
    assert_eq!(
        state.transcript.last(),
        Some(&Message::assistant("Please contact Oliver directly."))
    );
    assert!(state.show_contact_options);
    assert!(state.input.is_empty());
    assert!(state.error.is_none());

    let labels: Vec<_> = widget.contact_links().iter().map(|l| l.label).collect();
    assert_eq!(labels, vec!["Email", "X (Twitter)", "LinkedIn"]);
}

#[tokio::test]
async fn test_follow_up_carries_whole_transcript() {
    let groq = MockGroq::start().await;
    groq.mock_reply("He leads Accelerate ME.").await;
    let base = spawn_gateway(test_state(test_config(&groq.uri(), Some(TEST_GROQ_API_KEY)))).await;

    let widget = widget_for(&base);
    widget.send("What does Oliver do?").await;
    widget.send("Anything else?").await;

    let second = groq.completion_body_at(1).await;
    let roles: Vec<_> = second["messages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["role"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(roles, vec!["system", "assistant", "user", "assistant", "user"]);
    assert_eq!(widget.snapshot().transcript.len(), 5);
}

#[tokio::test]
async fn test_provider_unreachable_shows_fallback() {
    let dead = unreachable_url().await;
    let base = spawn_gateway(test_state(test_config(&dead, Some(TEST_GROQ_API_KEY)))).await;

    // The gateway reports an opaque failure
    let response = reqwest::Client::new()
        .post(format!("{}{}", base, ASK_PATH))
        .json(&single_question("Where does Oliver study?"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({ "error": "upstream unavailable" })
    );

    // And the widget turns it into a fallback reply
    let widget = widget_for(&base);
    let outcome = widget.send("Where does Oliver study?").await;

    assert_eq!(outcome, SendOutcome::Failed);
    let state = widget.snapshot();
    assert_eq!(state.transcript.last(), Some(&Message::assistant(FAILURE_REPLY)));
    assert_eq!(state.transcript.last().map(|m| m.role), Some(Role::Assistant));
    assert!(state.show_contact_options);
    assert_eq!(state.error.as_deref(), Some(FAILURE_NOTICE));
    assert!(!state.loading);
}

#[tokio::test]
async fn test_missing_credential_shows_fallback() {
    let groq = MockGroq::start().await;
    groq.mock_reply("unused").await;
    let base = spawn_gateway(test_state(test_config(&groq.uri(), None))).await;

    let widget = widget_for(&base);
    let outcome = widget.send("Where does Oliver study?").await;

    assert_eq!(outcome, SendOutcome::Failed);
    assert_eq!(
        widget.snapshot().transcript.last(),
        Some(&Message::assistant(FAILURE_REPLY))
    );
    assert!(groq.completion_requests().await.is_empty());
}

#[tokio::test]
async fn test_gateway_down_shows_fallback() {
    let widget = widget_for(&unreachable_url().await);

    let outcome = widget.send("Hello?").await;

    assert_eq!(outcome, SendOutcome::Failed);
    assert!(widget.snapshot().show_contact_options);
}
