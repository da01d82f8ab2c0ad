use crate::components::PlayerCard;
use crate::models::{Player, RecordId};
use std::collections::HashSet;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlayerListProps {
    pub players: Vec<Player>,
    pub on_details: Callback<RecordId>,
    pub on_remove: Callback<RecordId>,
    /// Ids whose delete is still in flight.
    #[prop_or_default]
    pub removing: HashSet<RecordId>,
}

#[function_component(PlayerList)]
pub fn player_list(props: &PlayerListProps) -> Html {
    html! {
        <div class="player-list">
            { for props.players.iter().enumerate().map(|(index, player)| {
                html! {
                    <PlayerCard
                        key={card_key(index, player)}
                        player={player.clone()}
                        on_details={props.on_details.clone()}
                        on_remove={props.on_remove.clone()}
                        removing={props.removing.contains(&player.id)}
                    />
                }
            })}
        </div>
    }
}

/// Ids are not guaranteed unique (missing ones are all empty), so the
/// position is part of the key.
pub fn card_key(index: usize, player: &Player) -> String {
    format!("{}-{}", index, player.id)
}
