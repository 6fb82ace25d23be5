// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, NaiveDate};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::ValidationError;
use crate::storage::FinanceStore;

/// Largest magnitude accepted for a single amount.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0); // 10^15
/// Most decimal places accepted for a single amount.
pub const MAX_AMOUNT_SCALE: u32 = 8;

/// Parse a money amount. Accepts plain and scientific notation; rejects
/// anything that is not a finite number, exceeds [`MAX_AMOUNT`] in magnitude
/// or carries more than [`MAX_AMOUNT_SCALE`] significant decimal places.
pub fn parse_amount(s: &str) -> std::result::Result<Decimal, ValidationError> {
    let t = s.trim();
    if t.is_empty() {
        return Err(ValidationError::InvalidAmount(s.to_string()));
    }
    let d = Decimal::from_str(t)
        .or_else(|_| Decimal::from_scientific(t))
        .map_err(|_| ValidationError::InvalidAmount(s.to_string()))?;
    if d.abs() > MAX_AMOUNT || d.normalize().scale() > MAX_AMOUNT_SCALE {
        return Err(ValidationError::InvalidAmount(s.to_string()));
    }
    Ok(d)
}

/// Parse a calendar date given as `YYYY-MM-DD` or as an RFC 3339 timestamp,
/// in which case only the date part is kept.
pub fn parse_date(s: &str) -> std::result::Result<NaiveDate, ValidationError> {
    let t = s.trim();
    NaiveDate::parse_from_str(t, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(t).map(|dt| dt.date_naive()))
        .map_err(|_| ValidationError::InvalidDate(s.to_string()))
}

pub fn parse_month(s: &str) -> Result<String> {
    chrono::NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(s.to_string())
}

pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{:.2}", d.round_dp(2))
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn id_for_user(store: &dyn FinanceStore, username: &str) -> Result<i64> {
    let user = store
        .find_user_by_username(username)?
        .with_context(|| format!("User '{}' not found", username))?;
    Ok(user.id)
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
