use std::{env, time::Duration};

// Runtime/server settings read from the environment. Env access lives
// only here; the core receives explicit values.

pub fn http_port() -> u16 {
    env::var("ZONE_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1324)
}

pub fn store_base_url() -> String {
    env::var("RECORD_STORE_URL").unwrap_or_else(|_| "http://127.0.0.1:8090".to_string())
}

pub fn store_timeout() -> Duration {
    let millis = env::var("RECORD_STORE_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(5000);
    Duration::from_millis(millis)
}
