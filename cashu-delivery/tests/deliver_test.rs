//! Tests for [`cashu_delivery::deliver`]: ordering, attachments, partial failure, throttling.

mod common;

use std::time::Duration;

use cashu_delivery::{
    deliver, plan_delivery, DeliveryConfig, DeliveryError, DeliveryOptions, OutgoingPayload,
    StepOutcome,
};
use common::{chat, RecordingBot, Sent};

fn plan_of(text: String) -> cashu_delivery::DeliveryPlan {
    plan_delivery(
        &DeliveryConfig::default(),
        &OutgoingPayload::new(text, "long_message.txt"),
    )
}

/// **Test: A short payload is sent unchanged as one message.**
#[tokio::test]
async fn test_direct_message_sent_unchanged() {
    let bot = RecordingBot::default();
    let plan = plan_of("📤 Echo: hello".to_string());

    let report = deliver(&bot, &chat(), &plan, &DeliveryOptions::default()).await;

    assert!(report.is_complete());
    assert_eq!(bot.sent(), vec![Sent::Text("📤 Echo: hello".to_string())]);
}

/// **Test: Chunks go out in index order with headers and each fits the ceiling.**
#[tokio::test]
async fn test_chunks_sent_in_order() {
    let bot = RecordingBot::default();
    let text: String = "A".repeat(5000) + &"B".repeat(5000);
    let plan = plan_of(text);

    let report = deliver(&bot, &chat(), &plan, &DeliveryOptions::default()).await;

    assert_eq!(report.delivered(), 3);
    let sent = bot.sent();
    let texts: Vec<&str> = sent
        .iter()
        .map(|s| match s {
            Sent::Text(t) => t.as_str(),
            other => panic!("unexpected {:?}", other),
        })
        .collect();
    assert!(texts[0].starts_with("📄 Long message (part 1/3):\n\nAAAA"));
    assert!(texts[1].starts_with("📄 Part 2/3:\n\nAAAA"));
    assert!(texts[2].starts_with("📄 Part 3/3:\n\nBBBB"));
    assert!(texts.iter().all(|t| t.chars().count() <= 4096));
}

/// **Test: A file-mode plan becomes exactly one document upload with the original bytes.**
#[tokio::test]
async fn test_file_attachment_uploaded() {
    let bot = RecordingBot::default();
    let text = "C".repeat(25_000);
    let plan = plan_of(text.clone());

    deliver(&bot, &chat(), &plan, &DeliveryOptions::default())
        .await
        .into_result()
        .unwrap();

    assert_eq!(
        bot.sent(),
        vec![Sent::Document {
            filename: "long_message.txt".to_string(),
            content: text.into_bytes(),
            caption: "📎 long_message.txt (25000 characters)".to_string(),
        }]
    );
}

/// **Test: Failure at step 2 of 4 is reported; step 1 delivered, steps 3-4 skipped, not sent.**
#[tokio::test]
async fn test_partial_failure_is_observable() {
    let bot = RecordingBot::failing_on(2);
    let plan = plan_of("B".repeat(15_000));
    assert_eq!(plan.len(), 4);

    let report = deliver(&bot, &chat(), &plan, &DeliveryOptions::default()).await;

    assert_eq!(
        report.outcomes(),
        &[
            StepOutcome::Sent,
            StepOutcome::Failed("Bot error: Too Many Requests: retry after 5".to_string()),
            StepOutcome::Skipped,
            StepOutcome::Skipped,
        ]
    );
    assert_eq!(bot.sent().len(), 1);
    match report.into_result() {
        Err(DeliveryError::Partial {
            delivered,
            total,
            failed_step,
            ..
        }) => {
            assert_eq!((delivered, total, failed_step), (1, 4, 2));
        }
        other => panic!("expected partial delivery, got {:?}", other),
    }
}

/// **Test: The step delay is applied between steps only (n-1 pauses).**
#[tokio::test(start_paused = true)]
async fn test_step_delay_between_steps() {
    let bot = RecordingBot::default();
    let plan = plan_of("A".repeat(9000));
    let options = DeliveryOptions::with_step_delay(Duration::from_secs(1));

    let started = tokio::time::Instant::now();
    let report = deliver(&bot, &chat(), &plan, &options).await;

    assert!(report.is_complete());
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(2), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_secs(3), "elapsed {:?}", elapsed);
}

/// **Test: An empty payload sends the prompt, never an empty message.**
#[tokio::test]
async fn test_empty_payload_sends_prompt() {
    let bot = RecordingBot::default();
    let plan = plan_of(String::new());

    deliver(&bot, &chat(), &plan, &DeliveryOptions::default()).await;

    assert_eq!(
        bot.sent(),
        vec![Sent::Text("Please send some text to echo!".to_string())]
    );
}
