pub mod client;
pub mod envelope;
pub mod players;

use crate::error::ApiError;
use crate::models::{NewPlayer, Player, RecordId};

pub use client::RosterClient;

/// The four calls the roster page makes against the remote store.
#[allow(async_fn_in_trait)]
pub trait RosterApi {
    async fn list_players(&self) -> Result<Vec<Player>, ApiError>;

    async fn get_player(&self, id: &RecordId) -> Result<Player, ApiError>;

    async fn create_player(&self, player: &NewPlayer) -> Result<Player, ApiError>;

    async fn delete_player(&self, id: &RecordId) -> Result<(), ApiError>;
}
