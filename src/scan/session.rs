use super::error::ScanError;
use super::options::{ScanOptions, ScanVariant};
use super::store::{ScanStore, CURSOR_DONE};

/// Verdict returned by the batch sink after each delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanControl {
    Continue,
    /// stop the session; no further round trips are issued
    Stop,
}

/// Drive one scan session to completion.
///
/// Starts at the sentinel cursor and keeps issuing the variant's scan
/// command until the server hands the sentinel back, the sink asks to stop,
/// or the configured limit is crossed. The sink runs once per round trip, in
/// order, including for empty batches; deliveries already made when an error
/// or stop occurs are never retracted. Returns the total number of slots
/// delivered across all batches.
///
/// Round trips are strictly sequential, each one the session's only
/// suspension point, since every call depends on the cursor of the previous
/// one. Cancellation is only checked between round trips.
pub async fn each_scan<S, F>(
    store: &mut S,
    pattern: &str,
    opts: &ScanOptions,
    mut on_batch: F,
) -> Result<usize, ScanError>
where
    S: ScanStore,
    F: FnMut(&[String]) -> ScanControl,
{
    opts.validate(pattern)?;
    let count = opts.count_hint();
    let container = opts.container_key.as_deref().unwrap_or("");

    let mut cursor = CURSOR_DONE.to_string();
    let mut total: usize = 0;
    loop {
        let round = match opts.variant {
            ScanVariant::Generic => {
                store
                    .scan(&cursor, pattern, count, opts.type_filter.as_deref())
                    .await?
            }
            ScanVariant::Hash => store.hscan(container, &cursor, pattern, count).await?,
            ScanVariant::Set => store.sscan(container, &cursor, pattern, count).await?,
            ScanVariant::SortedSet => store.zscan(container, &cursor, pattern, count).await?,
        };
        total += round.batch.len();
        log::debug!(
            "{} cursor {} -> {}, {} slots, {} total",
            opts.variant,
            cursor,
            round.cursor,
            round.batch.len(),
            total
        );

        if let ScanControl::Stop = on_batch(&round.batch) {
            log::debug!("{} stopped by sink at {} slots", opts.variant, total);
            return Ok(total);
        }
        if let Some(limit) = opts.limit {
            // checked only after the crossing batch was delivered
            if total >= limit {
                log::debug!("{} reached limit {} at {} slots", opts.variant, limit, total);
                return Ok(total);
            }
        }
        if round.cursor == CURSOR_DONE {
            return Ok(total);
        }
        cursor = round.cursor;
    }
}

/// Run a full session and collect every delivered slot, preserving
/// within-batch order and batch arrival order. On error nothing is
/// returned; the partial accumulation is discarded.
pub async fn scan<S>(
    store: &mut S,
    pattern: &str,
    opts: &ScanOptions,
) -> Result<Vec<String>, ScanError>
where
    S: ScanStore,
{
    let mut matches: Vec<String> = Vec::new();
    each_scan(store, pattern, opts, |batch| {
        matches.extend_from_slice(batch);
        ScanControl::Continue
    })
    .await?;
    Ok(matches)
}

// 下面是各变体的便捷入口，仅做参数预置，不引入新逻辑

pub async fn each_hscan<S, F>(
    store: &mut S,
    key: &str,
    pattern: &str,
    opts: &ScanOptions,
    on_batch: F,
) -> Result<usize, ScanError>
where
    S: ScanStore,
    F: FnMut(&[String]) -> ScanControl,
{
    let opts = opts
        .clone()
        .with_variant(ScanVariant::Hash)
        .with_container_key(key);
    each_scan(store, pattern, &opts, on_batch).await
}

pub async fn each_sscan<S, F>(
    store: &mut S,
    key: &str,
    pattern: &str,
    opts: &ScanOptions,
    on_batch: F,
) -> Result<usize, ScanError>
where
    S: ScanStore,
    F: FnMut(&[String]) -> ScanControl,
{
    let opts = opts
        .clone()
        .with_variant(ScanVariant::Set)
        .with_container_key(key);
    each_scan(store, pattern, &opts, on_batch).await
}

pub async fn each_zscan<S, F>(
    store: &mut S,
    key: &str,
    pattern: &str,
    opts: &ScanOptions,
    on_batch: F,
) -> Result<usize, ScanError>
where
    S: ScanStore,
    F: FnMut(&[String]) -> ScanControl,
{
    let opts = opts
        .clone()
        .with_variant(ScanVariant::SortedSet)
        .with_container_key(key);
    each_scan(store, pattern, &opts, on_batch).await
}

pub async fn hscan<S>(
    store: &mut S,
    key: &str,
    pattern: &str,
    opts: &ScanOptions,
) -> Result<Vec<String>, ScanError>
where
    S: ScanStore,
{
    let opts = opts
        .clone()
        .with_variant(ScanVariant::Hash)
        .with_container_key(key);
    scan(store, pattern, &opts).await
}

pub async fn sscan<S>(
    store: &mut S,
    key: &str,
    pattern: &str,
    opts: &ScanOptions,
) -> Result<Vec<String>, ScanError>
where
    S: ScanStore,
{
    let opts = opts
        .clone()
        .with_variant(ScanVariant::Set)
        .with_container_key(key);
    scan(store, pattern, &opts).await
}

pub async fn zscan<S>(
    store: &mut S,
    key: &str,
    pattern: &str,
    opts: &ScanOptions,
) -> Result<Vec<String>, ScanError>
where
    S: ScanStore,
{
    let opts = opts
        .clone()
        .with_variant(ScanVariant::SortedSet)
        .with_container_key(key);
    scan(store, pattern, &opts).await
}
