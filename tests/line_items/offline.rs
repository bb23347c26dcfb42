use crate::common::{self, RecordingSleeper, TEST_KEY};
use findata_rs::{FdError, LineItemSearch, Period, search_line_items};
use httpmock::Method::POST;

const SEARCH_RESULTS: &str = r#"{
  "search_results": [
    { "ticker": "AAPL", "report_period": "2024-09-28", "period": "ttm", "currency": "USD",
      "revenue": 391035000000.0, "net_income": 93736000000.0 },
    { "ticker": "AAPL", "report_period": "2024-06-29", "period": "ttm", "currency": "USD",
      "revenue": 385603000000.0, "net_income": null },
    { "ticker": "AAPL", "report_period": "2024-03-30", "period": "ttm", "currency": "USD",
      "revenue": 381623000000.0, "net_income": 100389000000.0 }
  ]
}"#;

#[tokio::test]
async fn line_items_offline_posts_search_body() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/financials/search/line-items")
            .header("x-api-key", TEST_KEY)
            .json_body(serde_json::json!({
                "tickers": ["AAPL"],
                "line_items": ["revenue", "net_income"],
                "end_date": "2024-12-31",
                "period": "ttm",
                "limit": 10
            }));
        then.status(200)
            .header("content-type", "application/json")
            .body(SEARCH_RESULTS);
    });

    let client = common::http_client(&server, RecordingSleeper::new());

    let items = search_line_items(&client, "AAPL", ["revenue", "net_income"], common::day(2024, 12, 31))
        .await
        .unwrap();
    mock.assert();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].ticker, "AAPL");
    assert_eq!(items[0].report_period, common::day(2024, 9, 28));
    assert_eq!(items[0].currency, "USD");
    assert_eq!(items[0].value("revenue"), Some(391_035_000_000.0));
    assert_eq!(items[1].value("net_income"), None);
    assert_eq!(items[2].value("missing"), None);
}

#[tokio::test]
async fn line_items_offline_limit_and_period() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/financials/search/line-items")
            .json_body(serde_json::json!({
                "tickers": ["AAPL"],
                "line_items": ["revenue"],
                "end_date": "2024-12-31",
                "period": "annual",
                "limit": 2
            }));
        // The server may ignore the limit; the client still truncates.
        then.status(200).body(SEARCH_RESULTS);
    });

    let client = common::http_client(&server, RecordingSleeper::new());

    let items = LineItemSearch::new(&client, "AAPL", common::day(2024, 12, 31))
        .line_items(["revenue"])
        .period(Period::Annual)
        .limit(2)
        .fetch()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(items.len(), 2);
    assert_eq!(items[1].report_period, common::day(2024, 6, 29));
}

#[tokio::test]
async fn line_items_offline_rejects_empty_requests_without_sending() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/financials/search/line-items");
        then.status(200).body(SEARCH_RESULTS);
    });

    let client = common::http_client(&server, RecordingSleeper::new());

    let err = LineItemSearch::new(&client, "AAPL", common::day(2024, 12, 31))
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, FdError::InvalidArgument(_)), "got {err:?}");

    let err = LineItemSearch::new(&client, "AAPL", common::day(2024, 12, 31))
        .line_items(["revenue"])
        .limit(0)
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, FdError::InvalidArgument(_)), "got {err:?}");

    mock.assert_calls(0);
}

#[tokio::test]
async fn line_items_offline_status_error() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/financials/search/line-items");
        then.status(401).body("invalid api key");
    });

    let client = common::http_client(&server, RecordingSleeper::new());

    let err = search_line_items(&client, "AAPL", ["revenue"], common::day(2024, 12, 31))
        .await
        .unwrap_err();
    mock.assert();

    match err {
        FdError::RequestFailed { status, body, .. } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn line_items_offline_searches_several_tickers() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/financials/search/line-items")
            .json_body(serde_json::json!({
                "tickers": ["AAPL", "MSFT"],
                "line_items": ["revenue"],
                "end_date": "2024-12-31",
                "period": "ttm",
                "limit": 10
            }));
        then.status(200).body(SEARCH_RESULTS);
    });

    let client = common::http_client(&server, RecordingSleeper::new());

    let items = LineItemSearch::new(&client, "AAPL", common::day(2024, 12, 31))
        .tickers(["MSFT", "AAPL"])
        .line_items(["revenue"])
        .fetch()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(items.len(), 3);
}

#[tokio::test]
async fn line_items_offline_success_without_results_is_a_data_error() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/financials/search/line-items");
        then.status(200).body(r#"{"message":"upstream unavailable"}"#);
    });

    let client = common::http_client(&server, RecordingSleeper::new());

    let err = search_line_items(&client, "AAPL", ["revenue"], common::day(2024, 12, 31))
        .await
        .unwrap_err();
    mock.assert();

    assert!(matches!(err, FdError::Data(_)), "got {err:?}");
}
