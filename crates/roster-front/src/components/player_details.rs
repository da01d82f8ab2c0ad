use crate::models::Player;
use crate::utils::format::format_team_id;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlayerDetailsProps {
    pub player: Player,
}

#[function_component(PlayerDetails)]
pub fn player_details(props: &PlayerDetailsProps) -> Html {
    let player = &props.player;

    html! {
        <div class="player-details" data-player-id={player.id.to_string()}>
            <h2>{ &player.name }</h2>
            <p>{ format!("Breed: {}", player.breed) }</p>
            <p>{ format!("Team ID: {}", format_team_id(&player.team_id)) }</p>
            <p>{ format!("Status: {}", player.status) }</p>
            <img src={player.image_url.clone()} alt={player.name.clone()} />
        </div>
    }
}
