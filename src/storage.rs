// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Persistence behind a storage-agnostic trait.
//!
//! Every read and write is scoped by the owning user id. Callers (CLI
//! commands, HTTP handlers) only see [`FinanceStore`]; [`SqliteStore`] is
//! the one implementation shipped.

use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, params_from_iter, Connection, ErrorCode, OptionalExtension, Row, ToSql};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};

use crate::db;
use crate::errors::{Error, Result};
use crate::models::{
    Goal, NewTransaction, NewUser, Profile, Transaction, TransactionFilter, TransactionKind, User,
    UserCredentials,
};

pub trait FinanceStore: Send + Sync {
    /// Cheap round trip used by health checks.
    fn ping(&self) -> Result<()>;

    fn create_user(&self, new_user: &NewUser) -> Result<User>;
    fn get_user(&self, id: i64) -> Result<Option<User>>;
    fn find_user_by_username(&self, username: &str) -> Result<Option<User>>;
    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>>;
    fn list_users(&self) -> Result<Vec<User>>;

    fn create_transaction(&self, user_id: i64, tx: &NewTransaction) -> Result<Transaction>;
    /// Newest first, narrowed by `filter`.
    fn query_transactions(
        &self,
        user_id: i64,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>>;
    /// Returns false when no transaction with that id belongs to the user.
    fn delete_transaction(&self, user_id: i64, id: i64) -> Result<bool>;

    fn get_profile(&self, user_id: i64) -> Result<Option<Profile>>;
    fn save_profile(&self, user_id: i64, profile: &Profile) -> Result<Profile>;

    fn get_goal(&self, user_id: i64) -> Result<Option<Goal>>;
    fn save_goal(&self, user_id: i64, goal: &Goal) -> Result<Goal>;

    /// Newest first.
    fn list_transactions(&self, user_id: i64) -> Result<Vec<Transaction>> {
        self.query_transactions(user_id, &TransactionFilter::default())
    }

    fn require_user(&self, id: i64) -> Result<User> {
        self.get_user(id)?
            .ok_or_else(|| Error::NotFound(format!("User {}", id)))
    }
}

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

const USER_COLUMNS: &str = "id, username, email, is_active, created_at, updated_at";
const TRANSACTION_COLUMNS: &str = "id, user_id, title, amount, kind, category, date";

impl SqliteStore {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let conn = db::open_or_init(path)?;
        Ok(Self::from_connection(conn))
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        db::init_schema(&conn)?;
        Ok(Self::from_connection(conn))
    }

    /// Wrap a connection whose schema is already in place.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        // A panic mid-statement leaves nothing half-applied in SQLite.
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn decimal_col(r: &Row<'_>, idx: usize) -> rusqlite::Result<Decimal> {
    let s: String = r.get(idx)?;
    Decimal::from_str(&s)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn user_from_row(r: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: r.get(0)?,
        username: r.get(1)?,
        email: r.get(2)?,
        is_active: r.get(3)?,
        created_at: r.get(4)?,
        updated_at: r.get(5)?,
    })
}

fn transaction_from_row(r: &Row<'_>) -> rusqlite::Result<Transaction> {
    let kind: String = r.get(4)?;
    let kind = kind
        .parse::<TransactionKind>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;
    Ok(Transaction {
        id: r.get(0)?,
        user_id: r.get(1)?,
        title: r.get(2)?,
        amount: decimal_col(r, 3)?,
        kind,
        category: r.get(5)?,
        date: r.get::<_, NaiveDate>(6)?,
    })
}

fn is_constraint_violation(e: &rusqlite::Error) -> bool {
    matches!(e, rusqlite::Error::SqliteFailure(f, _) if f.code == ErrorCode::ConstraintViolation)
}

impl FinanceStore for SqliteStore {
    fn ping(&self) -> Result<()> {
        self.conn().query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(())
    }

    fn create_user(&self, new_user: &NewUser) -> Result<User> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO users(username, email, password_hash) VALUES (?1, ?2, ?3)",
            params![new_user.username, new_user.email, new_user.password_hash],
        )
        .map_err(|e| {
            if is_constraint_violation(&e) {
                Error::Conflict(format!(
                    "User '{}' or email '{}'",
                    new_user.username, new_user.email
                ))
            } else {
                Error::Database(e)
            }
        })?;
        let id = conn.last_insert_rowid();
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id=?1");
        Ok(conn.query_row(&sql, params![id], user_from_row)?)
    }

    fn get_user(&self, id: i64) -> Result<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id=?1");
        Ok(self
            .conn()
            .query_row(&sql, params![id], user_from_row)
            .optional()?)
    }

    fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username=?1");
        Ok(self
            .conn()
            .query_row(&sql, params![username], user_from_row)
            .optional()?)
    }

    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>> {
        let sql = format!("SELECT {USER_COLUMNS}, password_hash FROM users WHERE email=?1");
        Ok(self
            .conn()
            .query_row(&sql, params![email], |r| {
                Ok(UserCredentials {
                    user: user_from_row(r)?,
                    password_hash: r.get(6)?,
                })
            })
            .optional()?)
    }

    fn list_users(&self) -> Result<Vec<User>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))?;
        let rows = stmt.query_map([], user_from_row)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    fn create_transaction(&self, user_id: i64, tx: &NewTransaction) -> Result<Transaction> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO transactions(user_id, title, amount, kind, category, date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                user_id,
                tx.title,
                tx.amount.to_string(),
                tx.kind.as_str(),
                tx.category,
                tx.date
            ],
        )?;
        Ok(Transaction {
            id: conn.last_insert_rowid(),
            user_id,
            title: tx.title.clone(),
            amount: tx.amount,
            kind: tx.kind,
            category: tx.category.clone(),
            date: tx.date,
        })
    }

    fn query_transactions(
        &self,
        user_id: i64,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>> {
        let mut sql = format!("SELECT {TRANSACTION_COLUMNS} FROM transactions WHERE user_id=?");
        let mut args: Vec<Box<dyn ToSql>> = vec![Box::new(user_id)];

        if let Some(month) = &filter.month {
            sql.push_str(" AND substr(date,1,7)=?");
            args.push(Box::new(month.clone()));
        }
        if let Some(kind) = filter.kind {
            sql.push_str(" AND kind=?");
            args.push(Box::new(kind.as_str()));
        }
        if let Some(category) = &filter.category {
            sql.push_str(" AND category=? COLLATE NOCASE");
            args.push(Box::new(category.clone()));
        }
        sql.push_str(" ORDER BY date DESC, id DESC");
        if let Some(limit) = filter.limit {
            sql.push_str(" LIMIT ?");
            args.push(Box::new(i64::try_from(limit).unwrap_or(i64::MAX)));
        }

        let conn = self.conn();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(
            params_from_iter(args.iter().map(|a| a.as_ref())),
            transaction_from_row,
        )?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    fn delete_transaction(&self, user_id: i64, id: i64) -> Result<bool> {
        let n = self.conn().execute(
            "DELETE FROM transactions WHERE id=?1 AND user_id=?2",
            params![id, user_id],
        )?;
        Ok(n > 0)
    }

    fn get_profile(&self, user_id: i64) -> Result<Option<Profile>> {
        Ok(self
            .conn()
            .query_row(
                "SELECT name, email, phone, salary, basic_costs, alert_limit
                 FROM profiles WHERE user_id=?1",
                params![user_id],
                |r| {
                    Ok(Profile {
                        name: r.get(0)?,
                        email: r.get(1)?,
                        phone: r.get(2)?,
                        salary: decimal_col(r, 3)?,
                        basic_costs: decimal_col(r, 4)?,
                        alert_limit: decimal_col(r, 5)?,
                    })
                },
            )
            .optional()?)
    }

    fn save_profile(&self, user_id: i64, profile: &Profile) -> Result<Profile> {
        self.conn().execute(
            "INSERT INTO profiles(user_id, name, email, phone, salary, basic_costs, alert_limit)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(user_id) DO UPDATE SET
                name=excluded.name, email=excluded.email, phone=excluded.phone,
                salary=excluded.salary, basic_costs=excluded.basic_costs,
                alert_limit=excluded.alert_limit",
            params![
                user_id,
                profile.name,
                profile.email,
                profile.phone,
                profile.salary.to_string(),
                profile.basic_costs.to_string(),
                profile.alert_limit.to_string()
            ],
        )?;
        Ok(profile.clone())
    }

    fn get_goal(&self, user_id: i64) -> Result<Option<Goal>> {
        Ok(self
            .conn()
            .query_row(
                "SELECT title, target_amount, current_amount, deadline FROM goals WHERE user_id=?1",
                params![user_id],
                |r| {
                    Ok(Goal {
                        title: r.get(0)?,
                        target_amount: decimal_col(r, 1)?,
                        current_amount: decimal_col(r, 2)?,
                        deadline: r.get::<_, Option<NaiveDate>>(3)?,
                    })
                },
            )
            .optional()?)
    }

    fn save_goal(&self, user_id: i64, goal: &Goal) -> Result<Goal> {
        self.conn().execute(
            "INSERT INTO goals(user_id, title, target_amount, current_amount, deadline)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(user_id) DO UPDATE SET
                title=excluded.title, target_amount=excluded.target_amount,
                current_amount=excluded.current_amount, deadline=excluded.deadline,
                updated_at=datetime('now')",
            params![
                user_id,
                goal.title,
                goal.target_amount.to_string(),
                goal.current_amount.to_string(),
                goal.deadline
            ],
        )?;
        Ok(goal.clone())
    }
}
