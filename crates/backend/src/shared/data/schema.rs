//! Table definitions and the startup bootstrap.

use anyhow::Context;
use contracts::shared::catalog::all_pricing_cards;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

pub const CONTACTS: &str = "contacts";
pub const GALLERY_IMAGES: &str = "gallery_images";
pub const PRICING: &str = "pricing";
pub const ORDERS: &str = "orders";
pub const ADMINS: &str = "admins";
pub const PASSWORD_RESETS: &str = "admin_password_resets";
pub const SYS_SETTINGS: &str = "sys_settings";

pub struct TableDef {
    pub name: &'static str,
    pub ddl: &'static str,
    /// Created even when auto provisioning is off
    pub always: bool,
}

pub const TABLES: &[TableDef] = &[
    TableDef {
        name: SYS_SETTINGS,
        always: true,
        ddl: r#"
            CREATE TABLE IF NOT EXISTS sys_settings (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                description TEXT,
                created_at TEXT,
                updated_at TEXT
            );
        "#,
    },
    TableDef {
        name: ADMINS,
        always: true,
        ddl: r#"
            CREATE TABLE IF NOT EXISTS admins (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                full_name TEXT,
                created_at TEXT NOT NULL,
                last_login_at TEXT
            );
        "#,
    },
    TableDef {
        name: PASSWORD_RESETS,
        always: true,
        ddl: r#"
            CREATE TABLE IF NOT EXISTS admin_password_resets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                admin_id INTEGER NOT NULL REFERENCES admins(id) ON DELETE CASCADE,
                token_hash TEXT NOT NULL UNIQUE,
                expires_at TEXT NOT NULL,
                used_at TEXT,
                created_at TEXT NOT NULL
            );
        "#,
    },
    TableDef {
        name: CONTACTS,
        always: false,
        ddl: r#"
            CREATE TABLE IF NOT EXISTS contacts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                full_name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT NOT NULL,
                inquiry_type TEXT NOT NULL DEFAULT 'general',
                message TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL
            );
        "#,
    },
    TableDef {
        name: GALLERY_IMAGES,
        always: false,
        ddl: r#"
            CREATE TABLE IF NOT EXISTS gallery_images (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                url TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
        "#,
    },
    TableDef {
        name: PRICING,
        always: false,
        ddl: r#"
            CREATE TABLE IF NOT EXISTS pricing (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                "key" TEXT NOT NULL DEFAULT '',
                title_en TEXT NOT NULL,
                title_ar TEXT NOT NULL,
                price_en TEXT NOT NULL,
                price_ar TEXT NOT NULL,
                updated_at TEXT
            );
        "#,
    },
    TableDef {
        name: ORDERS,
        always: false,
        ddl: r#"
            CREATE TABLE IF NOT EXISTS orders (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                customer_name TEXT NOT NULL,
                customer_email TEXT NOT NULL,
                customer_phone TEXT NOT NULL,
                items TEXT NOT NULL,
                total INTEGER NOT NULL,
                status TEXT NOT NULL DEFAULT 'pending',
                payment_method TEXT NOT NULL DEFAULT 'cash',
                created_at TEXT NOT NULL
            );
        "#,
    },
];

fn escape(value: &str) -> String {
    value.replace('\'', "''")
}

/// Seed rows for the pricing table, one per bundled card.
/// Rows whose key already exists are left alone.
pub fn pricing_seed_sql() -> Vec<String> {
    all_pricing_cards()
        .into_iter()
        .map(|card| {
            format!(
                "INSERT INTO pricing (\"key\", title_en, title_ar, price_en, price_ar) \
                 SELECT '{key}', '{te}', '{ta}', '{pe}', '{pa}' \
                 WHERE NOT EXISTS (SELECT 1 FROM pricing WHERE \"key\" = '{key}');",
                key = escape(card.key),
                te = escape(&card.title_en),
                ta = escape(&card.title_ar),
                pe = escape(&card.price_en),
                pa = escape(&card.price_ar),
            )
        })
        .collect()
}

/// SQL an operator runs to provision the pricing collection by hand
pub fn pricing_provisioning_sql() -> String {
    let ddl = TABLES
        .iter()
        .find(|t| t.name == PRICING)
        .map(|t| t.ddl)
        .unwrap_or_default();
    let mut sql = dedent(ddl);
    for insert in pricing_seed_sql() {
        sql.push('\n');
        sql.push_str(&insert);
    }
    sql.push('\n');
    sql
}

fn dedent(ddl: &str) -> String {
    ddl.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if line.starts_with("CREATE") || line.starts_with(");") {
                line.to_string()
            } else {
                format!("    {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Creates missing tables. With `auto_provision` off only the admin
/// tables are created.
pub async fn bootstrap(conn: &DatabaseConnection, auto_provision: bool) -> anyhow::Result<()> {
    for table in TABLES.iter().filter(|t| t.always || auto_provision) {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, table.ddl.to_string()))
            .await
            .with_context(|| format!("Failed to create table {}", table.name))?;
    }

    if auto_provision {
        for insert in pricing_seed_sql() {
            conn.execute(Statement::from_string(DatabaseBackend::Sqlite, insert))
                .await
                .context("Failed to seed pricing rows")?;
        }
        tracing::info!("All collections provisioned");
    } else {
        tracing::warn!("Auto provisioning disabled: public collections are left to the operator");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provisioning_sql_creates_and_seeds_pricing() {
        let sql = pricing_provisioning_sql();
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS pricing ("));
        assert!(sql.contains("'party_xtreme'"));
        assert_eq!(sql.matches("INSERT INTO pricing").count(), all_pricing_cards().len());
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(escape("Kids' meal"), "Kids'' meal");
    }
}
