// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use rand::Rng;
use time::OffsetDateTime;

const TICKET_PREFIX: &str = "T";
const SUFFIX_MIN: u16 = 100;
const SUFFIX_MAX: u16 = 999;
const TIMESTAMP_TAIL: usize = 6;

/// Best-effort unique ticket identifier: prefix, the last six characters of
/// the base-36 Unix-millisecond clock, and a three-digit random suffix.
/// Uniqueness is statistical (time + entropy), which is enough for a
/// low-volume, session-local queue; nothing depends on it being collision
/// free.
pub fn ticket_id() -> String {
    let now_millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let suffix = rand::thread_rng().gen_range(SUFFIX_MIN..=SUFFIX_MAX);
    ticket_id_at(now_millis, suffix)
}

/// Deterministic core of [`ticket_id`]; tests pin both inputs.
pub fn ticket_id_at(unix_millis: i128, suffix: u16) -> String {
    let encoded = to_base36_upper(unix_millis.unsigned_abs());
    let tail_start = encoded.len().saturating_sub(TIMESTAMP_TAIL);
    let suffix = suffix.clamp(SUFFIX_MIN, SUFFIX_MAX);
    format!("{TICKET_PREFIX}-{}-{suffix}", &encoded[tail_start..])
}

fn to_base36_upper(mut value: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if value == 0 {
        return "0".to_owned();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
