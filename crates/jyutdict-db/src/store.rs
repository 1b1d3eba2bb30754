use std::path::Path;

use rusqlite::Connection;
use tracing::debug;

use crate::error::{ImportError, Result};

/// Open the destination store. The connection is held for the whole write phase.
pub(crate) fn open(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    debug!("opened store {}", path.display());
    Ok(conn)
}

pub(crate) fn close(conn: Connection) -> Result<()> {
    conn.close().map_err(|(_, err)| ImportError::Sqlite(err))
}
