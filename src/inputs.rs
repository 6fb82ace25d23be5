// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Raw request payloads and their validation into domain values.
//!
//! Everything arriving from a client goes through here before it reaches
//! storage or the calculators, so the calculators never see malformed
//! numbers or dates.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::ValidationError;
use crate::models::{Goal, NewTransaction, Profile, TransactionKind};
use crate::utils::{parse_amount, parse_date};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static email pattern"));

pub const MIN_PASSWORD_LEN: usize = 8;

/// An amount as sent by a client: either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(serde_json::Number),
    Text(String),
}

impl RawAmount {
    pub fn to_decimal(&self) -> Result<Decimal, ValidationError> {
        match self {
            RawAmount::Number(n) => parse_amount(&n.to_string()),
            RawAmount::Text(s) => parse_amount(s),
        }
    }
}

impl Default for RawAmount {
    fn default() -> Self {
        RawAmount::Text("0".into())
    }
}

impl From<&str> for RawAmount {
    fn from(s: &str) -> Self {
        RawAmount::Text(s.to_string())
    }
}

fn non_negative(d: Decimal, raw: &RawAmount) -> Result<Decimal, ValidationError> {
    if d.is_sign_negative() && !d.is_zero() {
        let shown = match raw {
            RawAmount::Number(n) => n.to_string(),
            RawAmount::Text(s) => s.clone(),
        };
        return Err(ValidationError::InvalidAmount(shown));
    }
    Ok(d)
}

fn optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, ValidationError> {
    match s.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => parse_date(v).map(Some),
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    pub title: String,
    pub amount: RawAmount,
    pub kind: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl TransactionInput {
    /// A blank date means "today".
    pub fn validate(self, today: NaiveDate) -> Result<NewTransaction, ValidationError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::field("title", "must not be empty"));
        }
        let amount = self.amount.to_decimal()?;
        let kind = self.kind.parse::<TransactionKind>()?;
        let date = optional_date(self.date.as_deref())?.unwrap_or(today);
        Ok(NewTransaction {
            title,
            amount,
            kind,
            category: self.category.unwrap_or_default().trim().to_string(),
            date,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub target_amount: RawAmount,
    #[serde(default)]
    pub current_amount: RawAmount,
    #[serde(default)]
    pub deadline: Option<String>,
}

impl GoalInput {
    pub fn validate(self) -> Result<Goal, ValidationError> {
        let target_amount = non_negative(self.target_amount.to_decimal()?, &self.target_amount)?;
        let current_amount = non_negative(self.current_amount.to_decimal()?, &self.current_amount)?;
        Ok(Goal {
            title: self.title.trim().to_string(),
            target_amount,
            current_amount,
            deadline: optional_date(self.deadline.as_deref())?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub salary: RawAmount,
    #[serde(default)]
    pub basic_costs: RawAmount,
    #[serde(default)]
    pub alert_limit: RawAmount,
}

impl ProfileInput {
    pub fn validate(self) -> Result<Profile, ValidationError> {
        let email = self.email.trim().to_string();
        if !email.is_empty() && !EMAIL_RE.is_match(&email) {
            return Err(ValidationError::field("email", format!("'{}'", email)));
        }
        Ok(Profile {
            name: self.name.trim().to_string(),
            email,
            phone: self.phone.trim().to_string(),
            salary: self.salary.to_decimal()?,
            basic_costs: self.basic_costs.to_decimal()?,
            alert_limit: self.alert_limit.to_decimal()?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::field("username", "must not be empty"));
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(ValidationError::field("email", format!("'{}'", self.email)));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::field(
                "password",
                format!("must be at least {} characters", MIN_PASSWORD_LEN),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn transaction_input_accepts_string_and_number_amounts() {
        let from_text: TransactionInput = serde_json::from_str(
            r#"{"title":"Lunch","amount":"45.90","kind":"expense","category":"Food","date":"2025-06-01"}"#,
        )
        .unwrap();
        let from_num: TransactionInput = serde_json::from_str(
            r#"{"title":"Lunch","amount":45.90,"kind":"expense","category":"Food","date":"2025-06-01"}"#,
        )
        .unwrap();
        let a = from_text.validate(today()).unwrap();
        let b = from_num.validate(today()).unwrap();
        assert_eq!(a.amount, Decimal::new(4590, 2));
        assert_eq!(a.amount, b.amount);
        assert_eq!(a.kind, TransactionKind::Expense);
    }

    #[test]
    fn transaction_input_defaults_date_to_today() {
        let input: TransactionInput =
            serde_json::from_str(r#"{"title":"Salary","amount":5000,"kind":"income","date":""}"#)
                .unwrap();
        let tx = input.validate(today()).unwrap();
        assert_eq!(tx.date, today());
        assert_eq!(tx.category, "");
    }

    #[test]
    fn transaction_input_rejects_garbage_amount() {
        let input: TransactionInput =
            serde_json::from_str(r#"{"title":"Uber","amount":"fifteen","kind":"expense"}"#)
                .unwrap();
        assert_eq!(
            input.validate(today()).unwrap_err(),
            ValidationError::InvalidAmount("fifteen".into())
        );
    }

    #[test]
    fn goal_input_rejects_negative_target_and_bad_deadline() {
        let neg = GoalInput {
            target_amount: "-1".into(),
            ..Default::default()
        };
        assert!(matches!(neg.validate(), Err(ValidationError::InvalidAmount(_))));

        let bad_date = GoalInput {
            deadline: Some("next year".into()),
            ..Default::default()
        };
        assert!(matches!(bad_date.validate(), Err(ValidationError::InvalidDate(_))));
    }

    #[test]
    fn out_of_range_amounts_are_rejected_at_the_boundary() {
        let goal = GoalInput {
            target_amount: "0.0000000001".into(),
            current_amount: "1000000000000000000".into(),
            ..Default::default()
        };
        assert!(matches!(goal.validate(), Err(ValidationError::InvalidAmount(_))));

        let input: TransactionInput = serde_json::from_str(
            r#"{"title":"Windfall","amount":"50000000000000000000000000000","kind":"income"}"#,
        )
        .unwrap();
        assert_eq!(
            input.validate(today()).unwrap_err(),
            ValidationError::InvalidAmount("50000000000000000000000000000".into())
        );

        let input: TransactionInput =
            serde_json::from_str(r#"{"title":"Windfall","amount":1e20,"kind":"income"}"#).unwrap();
        assert!(matches!(
            input.validate(today()),
            Err(ValidationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn register_input_checks_email_and_password() {
        let mut input = RegisterInput {
            username: "dev".into(),
            email: "dev@email.com".into(),
            password: "longenough".into(),
        };
        assert!(input.validate().is_ok());
        input.password = "short".into();
        assert!(input.validate().is_err());
        input.password = "longenough".into();
        input.email = "not-an-email".into();
        assert!(input.validate().is_err());
    }
}
