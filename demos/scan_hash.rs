use anyhow::Result;
use rediscan::datagen::gen_pattern_hash;
use rediscan::{each_hscan, flat_pairs, hscan, RedisScanStore, ScanControl, ScanOptions};

// cargo run --example scanhash
#[tokio::main]
async fn main() -> Result<()> {
    let url =
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379/".to_string());
    let client = redis::Client::open(url)?;
    let mut conn = client.get_async_connection().await?;

    gen_pattern_hash("scan_demo_hash", "test", "demo", 1000, &mut conn).await?;

    let mut store = RedisScanStore::new(conn);

    let flat = hscan(
        &mut store,
        "scan_demo_hash",
        "test:90*:demo",
        &ScanOptions::default().with_count(100),
    )
    .await?;
    println!("{} flat slots ({} pairs)", flat.len(), flat.len() / 2);
    for (field, value) in flat_pairs(&flat) {
        println!("{} = {}", field, value);
    }

    let total = each_hscan(
        &mut store,
        "scan_demo_hash",
        "test:*:demo",
        &ScanOptions::default().with_count(200),
        |batch| {
            println!("batch of {} slots", batch.len());
            ScanControl::Continue
        },
    )
    .await?;
    println!("{} slots delivered", total);

    Ok(())
}
