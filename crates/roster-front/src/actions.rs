//! Roster operations shared by the page components. Every failure is logged
//! here with a call-site prefix, so components only decide what to re-render.

use crate::api::RosterApi;
use crate::error::ApiError;
use crate::models::{NewPlayer, Player, RecordId};
use std::cell::RefCell;
use std::collections::HashSet;
use std::hash::Hash;

pub async fn load_roster<A: RosterApi>(api: &A) -> Option<Vec<Player>> {
    match api.list_players().await {
        Ok(players) => {
            log::debug!("Fetched {} players", players.len());
            Some(players)
        }
        Err(e) => {
            log::error!("Uh oh, trouble fetching players! {}", e);
            None
        }
    }
}

pub async fn load_player_details<A: RosterApi>(api: &A, id: &RecordId) -> Option<Player> {
    match api.get_player(id).await {
        Ok(player) => Some(player),
        Err(e) => {
            log::error!("Oh no, trouble fetching player #{}! {}", id, e);
            None
        }
    }
}

/// Creates the player, then re-fetches the roster.
///
/// `Err` means the create itself failed. `Ok(None)` means the player was
/// created but the follow-up fetch failed, so the list should stay as it is.
pub async fn add_player<A: RosterApi>(
    api: &A,
    player: &NewPlayer,
) -> Result<Option<Vec<Player>>, ApiError> {
    match api.create_player(player).await {
        Ok(created) => {
            log::info!("Added player #{} ({})", created.id, created.name);
        }
        Err(e) => {
            log::error!("Oops, something went wrong with adding that player! {}", e);
            return Err(e);
        }
    }

    Ok(load_roster(api).await)
}

/// Deletes the player, then re-fetches the roster. Same result shape as
/// [`add_player`].
pub async fn remove_player<A: RosterApi>(
    api: &A,
    id: &RecordId,
) -> Result<Option<Vec<Player>>, ApiError> {
    if let Err(e) = api.delete_player(id).await {
        log::error!(
            "Whoops, trouble removing player #{} from the roster! {}",
            id,
            e
        );
        return Err(e);
    }
    log::info!("Removed player #{}", id);

    Ok(load_roster(api).await)
}

/// Result of a form submit that actually reached the API.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The player was created. `roster` is the re-fetched list, if that worked.
    Created { roster: Option<Vec<Player>> },
    Failed,
}

impl SubmitOutcome {
    pub fn clears_form(&self) -> bool {
        matches!(self, SubmitOutcome::Created { .. })
    }
}

/// Form submit with at most one create in flight. Returns `None` when the
/// submit was ignored because another one is still pending.
/// `on_pending_changed` is told when the in-flight state flips.
pub async fn submit_once<A: RosterApi>(
    api: &A,
    pending: &RefCell<bool>,
    player: &NewPlayer,
    on_pending_changed: impl Fn(bool),
) -> Option<SubmitOutcome> {
    if pending.replace(true) {
        log::debug!("Ignoring submit while a create is in flight");
        return None;
    }
    on_pending_changed(true);

    let outcome = match add_player(api, player).await {
        Ok(roster) => SubmitOutcome::Created { roster },
        Err(_) => SubmitOutcome::Failed,
    };

    pending.replace(false);
    on_pending_changed(false);
    Some(outcome)
}

/// Remove with at most one delete in flight per id. Returns the re-fetched
/// roster when it should replace the list.
pub async fn remove_once<A: RosterApi>(
    api: &A,
    pending: &RefCell<InFlight<RecordId>>,
    id: &RecordId,
    on_pending_changed: impl Fn(HashSet<RecordId>),
) -> Option<Vec<Player>> {
    if !pending.borrow_mut().try_begin(id) {
        log::debug!("Remove for player #{} already in flight", id);
        return None;
    }
    on_pending_changed(pending.borrow().snapshot());

    let roster = remove_player(api, id).await.ok().flatten();

    pending.borrow_mut().finish(id);
    on_pending_changed(pending.borrow().snapshot());
    roster
}

/// Fetches details for `ticket`, issued when the card was clicked. Returns
/// `None` if the fetch failed or a newer click superseded this one.
pub async fn load_latest_details<A: RosterApi>(
    api: &A,
    ticker: &RefCell<RequestTicker>,
    ticket: u64,
    id: &RecordId,
) -> Option<Player> {
    let player = load_player_details(api, id).await?;
    if ticker.borrow().is_latest(ticket) {
        Some(player)
    } else {
        log::debug!("Dropping stale details for player #{}", id);
        None
    }
}

/// Keys of mutations that have been sent but not answered yet.
#[derive(Debug)]
pub struct InFlight<K> {
    keys: HashSet<K>,
}

impl<K> Default for InFlight<K> {
    fn default() -> Self {
        Self {
            keys: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> InFlight<K> {
    /// Returns false when `key` is already pending.
    pub fn try_begin(&mut self, key: &K) -> bool {
        self.keys.insert(key.clone())
    }

    pub fn finish(&mut self, key: &K) {
        self.keys.remove(key);
    }

    pub fn snapshot(&self) -> HashSet<K> {
        self.keys.clone()
    }
}

/// Hands out increasing tickets so only the newest response is applied.
#[derive(Debug, Default)]
pub struct RequestTicker {
    latest: u64,
}

impl RequestTicker {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_flight_rejects_duplicates() {
        let mut pending = InFlight::default();
        let id = RecordId::from(42);

        assert!(pending.try_begin(&id));
        assert!(!pending.try_begin(&id));
        assert!(pending.snapshot().contains(&id));
        assert!(pending.try_begin(&RecordId::from(7)));

        pending.finish(&id);
        assert!(!pending.snapshot().contains(&id));
        assert!(pending.try_begin(&id));
    }

    #[test]
    fn test_request_ticker_only_latest_wins() {
        let mut ticker = RequestTicker::default();
        let first = ticker.issue();
        let second = ticker.issue();

        assert!(!ticker.is_latest(first));
        assert!(ticker.is_latest(second));
    }
}
