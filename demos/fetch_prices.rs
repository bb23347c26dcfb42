use chrono::NaiveDate;
use findata_rs::{FdClient, PricesBuilder, RetryConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let ticker = std::env::args().nth(1).unwrap_or_else(|| "AAPL".to_string());
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad start date")?;
    let end = NaiveDate::from_ymd_opt(2024, 3, 31).ok_or("bad end date")?;

    // Reads FINANCIAL_DATASETS_API_KEY from the environment.
    let client = FdClient::builder().build()?;

    let prices = PricesBuilder::new(&client, &ticker, start, end)
        .retry_policy(Some(RetryConfig::with_max_retries(5)))
        .fetch()
        .await?;

    println!("{ticker}: {} bars", prices.len());
    for p in prices.iter().take(5) {
        println!(
            "{}  O:{:.2} H:{:.2} L:{:.2} C:{:.2} V:{}",
            p.time.format("%Y-%m-%d"),
            p.open,
            p.high,
            p.low,
            p.close,
            p.volume
        );
    }

    // Second call is served from the client's cache.
    let again = findata_rs::get_prices(&client, &ticker, start, end).await?;
    assert_eq!(again.len(), prices.len());

    Ok(())
}
