use anyhow::{Context, Result};

use super::connection::DbConn;

/// Applies the embedded schema, dropping any existing players and matches.
/// `execute_batch` runs the whole multi-statement script in one go.
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    conn.execute_batch(include_str!("schema.sql"))
        .context("Failed to apply database schema")?;

    log::info!("Database schema reset successfully");
    Ok(())
}
