use crate::api::client::{send_json, RosterClient};
use crate::api::envelope::{decode_deleted, decode_player, decode_player_list};
use crate::api::RosterApi;
use crate::error::ApiError;
use crate::models::{NewPlayer, Player, RecordId};
use gloo_net::http::Request;

impl RosterApi for RosterClient {
    async fn list_players(&self) -> Result<Vec<Player>, ApiError> {
        let body = send_json(Request::get(&self.players_url()).build()?).await?;
        decode_player_list(body)
    }

    async fn get_player(&self, id: &RecordId) -> Result<Player, ApiError> {
        let body = send_json(Request::get(&self.player_url(id)).build()?).await?;
        decode_player(body, "player")
    }

    async fn create_player(&self, player: &NewPlayer) -> Result<Player, ApiError> {
        let request = Request::post(&self.players_url())
            .header("Content-Type", "application/json")
            .body(serde_json::to_string(player)?)
            .map_err(|e| ApiError::Network(format!("Body error: {}", e)))?;

        let body = send_json(request).await?;
        decode_player(body, "newPlayer")
    }

    async fn delete_player(&self, id: &RecordId) -> Result<(), ApiError> {
        let body = send_json(Request::delete(&self.player_url(id)).build()?).await?;
        decode_deleted(body)
    }
}
