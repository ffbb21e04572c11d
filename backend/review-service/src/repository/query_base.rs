use sqlx::PgConnection;

use crate::domain::models::MapId;

/// Context shared by every review query: a borrowed open connection and the
/// map whose partition is queried.
///
/// Nothing is validated here; a bad map id or a dead connection surfaces
/// when the query executes. The connection stays owned by the caller.
pub struct ReviewableQueryBase<'c> {
    connection: &'c mut PgConnection,
    map_id: MapId,
}

impl<'c> ReviewableQueryBase<'c> {
    pub fn new(connection: &'c mut PgConnection, map_id: MapId) -> Self {
        Self { connection, map_id }
    }

    pub fn connection(&mut self) -> &mut PgConnection {
        self.connection
    }

    pub fn map_id(&self) -> MapId {
        self.map_id
    }
}
