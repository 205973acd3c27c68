use anyhow::Result;
use rediscan::datagen::gen_pattern_keys;
use rediscan::{each_scan, scan, RedisScanStore, ScanControl, ScanOptions};

// cargo run --example scankeys
#[tokio::main]
async fn main() -> Result<()> {
    let url =
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379/".to_string());
    let client = redis::Client::open(url)?;
    let mut conn = client.get_async_connection().await?;

    gen_pattern_keys("test", "demo", 1000, &mut conn).await?;

    let mut store = RedisScanStore::new(conn);

    let keys = scan(
        &mut store,
        "test:90*:demo",
        &ScanOptions::default().with_count(100),
    )
    .await?;
    println!("{} keys matched", keys.len());
    for key in &keys {
        println!("{}", key);
    }

    let total = each_scan(
        &mut store,
        "test:*:demo",
        &ScanOptions::default().with_count(100).with_limit(50),
        |batch| {
            println!("batch of {} keys", batch.len());
            ScanControl::Continue
        },
    )
    .await?;
    println!("{} keys delivered before the limit stop", total);

    Ok(())
}
