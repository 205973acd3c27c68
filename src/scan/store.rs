use async_trait::async_trait;
use redis::{aio, RedisResult, ToRedisArgs};

/// 游标哨兵值，既是起始值也是结束值
pub const CURSOR_DONE: &str = "0";

/// Result of one scan round trip: the next cursor plus the matches the
/// server produced for it. Hash and sorted-set scans deliver a flat
/// interleaved field/value (member/score) sequence, so counts are in array
/// slots, not logical pairs.
#[derive(Debug, Clone)]
pub struct ScanRound {
    pub cursor: String,
    pub batch: Vec<String>,
}

impl ScanRound {
    pub fn is_finished(&self) -> bool {
        self.cursor == CURSOR_DONE
    }
}

/// Store-client collaborator: one operation per scan variant, each taking a
/// cursor and returning the next cursor plus that round's matches. The scan
/// command family guarantees eventual return of the sentinel cursor; it
/// permits duplicate delivery across rounds and makes no promise about
/// elements added or removed mid-scan.
#[async_trait]
pub trait ScanStore: Send {
    async fn scan(
        &mut self,
        cursor: &str,
        pattern: &str,
        count: Option<usize>,
        type_filter: Option<&str>,
    ) -> RedisResult<ScanRound>;

    async fn hscan(
        &mut self,
        key: &str,
        cursor: &str,
        pattern: &str,
        count: Option<usize>,
    ) -> RedisResult<ScanRound>;

    async fn sscan(
        &mut self,
        key: &str,
        cursor: &str,
        pattern: &str,
        count: Option<usize>,
    ) -> RedisResult<ScanRound>;

    async fn zscan(
        &mut self,
        key: &str,
        cursor: &str,
        pattern: &str,
        count: Option<usize>,
    ) -> RedisResult<ScanRound>;
}

/// `ScanStore` over a live async redis connection. Pooling and pipelining
/// stay the connection's concern; this type only shapes the commands.
pub struct RedisScanStore<C> {
    conn: C,
}

impl<C> RedisScanStore<C> {
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    pub fn into_inner(self) -> C {
        self.conn
    }
}

// 组装 scan 命令：[key] cursor MATCH pattern [COUNT n] [TYPE t]
fn scan_cmd(
    command: &str,
    key: Option<&str>,
    cursor: &str,
    pattern: &str,
    count: Option<usize>,
    type_filter: Option<&str>,
) -> redis::Cmd {
    let mut cmd = redis::cmd(command);
    if let Some(k) = key {
        cmd.arg(k.to_redis_args());
    }
    cmd.arg(cursor.to_redis_args());
    cmd.arg("MATCH").arg(pattern.to_redis_args());
    if let Some(c) = count {
        cmd.arg("COUNT").arg(c);
    }
    if let Some(t) = type_filter {
        cmd.arg("TYPE").arg(t.to_redis_args());
    }
    cmd
}

#[async_trait]
impl<C> ScanStore for RedisScanStore<C>
where
    C: aio::ConnectionLike + Send,
{
    async fn scan(
        &mut self,
        cursor: &str,
        pattern: &str,
        count: Option<usize>,
        type_filter: Option<&str>,
    ) -> RedisResult<ScanRound> {
        let cmd = scan_cmd("SCAN", None, cursor, pattern, count, type_filter);
        let (cursor, batch): (String, Vec<String>) = cmd.query_async(&mut self.conn).await?;
        Ok(ScanRound { cursor, batch })
    }

    async fn hscan(
        &mut self,
        key: &str,
        cursor: &str,
        pattern: &str,
        count: Option<usize>,
    ) -> RedisResult<ScanRound> {
        let cmd = scan_cmd("HSCAN", Some(key), cursor, pattern, count, None);
        let (cursor, batch): (String, Vec<String>) = cmd.query_async(&mut self.conn).await?;
        Ok(ScanRound { cursor, batch })
    }

    async fn sscan(
        &mut self,
        key: &str,
        cursor: &str,
        pattern: &str,
        count: Option<usize>,
    ) -> RedisResult<ScanRound> {
        let cmd = scan_cmd("SSCAN", Some(key), cursor, pattern, count, None);
        let (cursor, batch): (String, Vec<String>) = cmd.query_async(&mut self.conn).await?;
        Ok(ScanRound { cursor, batch })
    }

    async fn zscan(
        &mut self,
        key: &str,
        cursor: &str,
        pattern: &str,
        count: Option<usize>,
    ) -> RedisResult<ScanRound> {
        let cmd = scan_cmd("ZSCAN", Some(key), cursor, pattern, count, None);
        let (cursor, batch): (String, Vec<String>) = cmd.query_async(&mut self.conn).await?;
        Ok(ScanRound { cursor, batch })
    }
}

/// View an interleaved hash/sorted-set batch as explicit (field, value) or
/// (member, score) pairs. A trailing unpaired slot is dropped.
pub fn flat_pairs(batch: &[String]) -> Vec<(String, String)> {
    batch
        .chunks_exact(2)
        .map(|c| (c[0].clone(), c[1].clone()))
        .collect()
}
