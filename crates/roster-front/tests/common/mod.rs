#![allow(dead_code)]

use roster_front::api::envelope::decode_player_list;
use roster_front::api::RosterApi;
use roster_front::error::ApiError;
use roster_front::models::{NewPlayer, Player, RecordId};
use serde_json::Value;
use std::cell::{Cell, RefCell};
use yew::{BaseComponent, LocalServerRenderer};

/// Renders a component to markup without hydration comments.
pub async fn render<C>(props: C::Properties) -> String
where
    C: BaseComponent,
{
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async move {
            LocalServerRenderer::<C>::with_props(props)
                .hydratable(false)
                .render()
                .await
        })
        .await
}

pub fn player(id: i64, name: &str, breed: &str) -> Player {
    Player {
        id: RecordId::from(id),
        name: name.to_string(),
        breed: breed.to_string(),
        status: "bench".to_string(),
        image_url: format!("https://example.com/{}.png", name.to_lowercase()),
        ..Player::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Get(RecordId),
    Create(Value),
    Delete(RecordId),
}

/// In-memory stand-in for the remote store that records every call.
#[derive(Default)]
pub struct StubApi {
    pub players: RefCell<Vec<Player>>,
    pub calls: RefCell<Vec<Call>>,
    /// When set, list responses are decoded from this raw body instead.
    pub raw_list_body: RefCell<Option<Value>>,
    pub fail_list: Cell<bool>,
    pub fail_create: Cell<bool>,
    pub fail_delete: Cell<bool>,
    next_id: Cell<i64>,
}

impl StubApi {
    pub fn with_players(players: Vec<Player>) -> Self {
        let next_id = players
            .iter()
            .filter_map(|p| p.id.as_str().parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        let stub = Self {
            players: RefCell::new(players),
            ..Self::default()
        };
        stub.next_id.set(next_id);
        stub
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl RosterApi for StubApi {
    async fn list_players(&self) -> Result<Vec<Player>, ApiError> {
        self.calls.borrow_mut().push(Call::List);
        if self.fail_list.get() {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        if let Some(body) = self.raw_list_body.borrow().clone() {
            return decode_player_list(body);
        }
        Ok(self.players.borrow().clone())
    }

    async fn get_player(&self, id: &RecordId) -> Result<Player, ApiError> {
        self.calls.borrow_mut().push(Call::Get(id.clone()));
        self.players
            .borrow()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| ApiError::Rejected(format!("Player #{} not found", id)))
    }

    async fn create_player(&self, player: &NewPlayer) -> Result<Player, ApiError> {
        let body = serde_json::to_value(player).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.calls.borrow_mut().push(Call::Create(body));
        if self.fail_create.get() {
            return Err(ApiError::Network("connection reset".to_string()));
        }

        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let created = Player {
            id: RecordId::from(id),
            name: player.name.clone(),
            breed: player.breed.clone(),
            status: "bench".to_string(),
            ..Player::default()
        };
        self.players.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn delete_player(&self, id: &RecordId) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call::Delete(id.clone()));
        if self.fail_delete.get() {
            return Err(ApiError::Network("connection reset".to_string()));
        }
        self.players.borrow_mut().retain(|p| &p.id != id);
        Ok(())
    }
}
