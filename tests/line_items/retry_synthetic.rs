use crate::common::{self, RecordingCache, RecordingSleeper, ScriptedTransport, TEST_KEY};
use findata_rs::{HttpMethod, search_line_items};

#[tokio::test]
async fn line_items_post_is_resent_identically_after_rate_limit() {
    let transport = ScriptedTransport::new([
        (429, "Too Many Requests"),
        (
            200,
            r#"{"search_results":[{"ticker":"MSFT","report_period":"2024-06-30","period":"ttm","currency":"USD","revenue":245122000000.0}]}"#,
        ),
    ]);
    let sleeper = RecordingSleeper::new();
    let cache = RecordingCache::new();
    let client = common::scripted_client(transport.clone(), sleeper.clone(), cache.clone());

    let items = search_line_items(&client, "MSFT", ["revenue"], common::day(2024, 12, 31))
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].value("revenue"), Some(245_122_000_000.0));

    let sent = transport.requests();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0], sent[1]);
    assert_eq!(sent[0].method(), HttpMethod::Post);
    assert_eq!(sent[0].url().path(), "/financials/search/line-items");
    assert_eq!(sent[0].headers().get("x-api-key").unwrap(), TEST_KEY);
    assert_eq!(
        sent[0].body().unwrap()["line_items"],
        serde_json::json!(["revenue"])
    );
    assert_eq!(sleeper.delay_secs(), vec![60]);

    // Line items never touch the price cache.
    assert_eq!(cache.gets(), 0);
    assert_eq!(cache.sets(), 0);
}
