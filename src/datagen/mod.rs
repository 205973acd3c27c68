use redis::{aio, RedisResult, ToRedisArgs};

// 生成 prefix:<i>:<suffix> 形式的 string key，用于扫描测试数据
pub async fn gen_pattern_keys<C>(
    prefix: &str,
    suffix: &str,
    keys: usize,
    conn: &mut C,
) -> RedisResult<()>
where
    C: aio::ConnectionLike + Send,
{
    for i in 0..keys {
        let key = format!("{}:{}:{}", prefix, i, suffix);
        let mut cmd_set = redis::cmd("set");
        let _ = conn
            .req_packed_command(cmd_set.arg(key.to_redis_args()).arg(i.to_redis_args()))
            .await?;
    }
    Ok(())
}

// 生成带同样命名字段的 hash，字段值为序号
pub async fn gen_pattern_hash<C>(
    hash_key: &str,
    prefix: &str,
    suffix: &str,
    fields: usize,
    conn: &mut C,
) -> RedisResult<()>
where
    C: aio::ConnectionLike + Send,
{
    for i in 0..fields {
        let field = format!("{}:{}:{}", prefix, i, suffix);
        let mut cmd_hset = redis::cmd("hset");
        let _ = conn
            .req_packed_command(
                cmd_hset
                    .arg(hash_key.to_redis_args())
                    .arg(field.to_redis_args())
                    .arg(i.to_redis_args()),
            )
            .await?;
    }
    Ok(())
}
