use crate::models::{Player, RecordId};
use crate::utils::format::format_team_id;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlayerCardProps {
    pub player: Player,
    pub on_details: Callback<RecordId>,
    pub on_remove: Callback<RecordId>,
    #[prop_or_default]
    pub removing: bool,
}

#[function_component(PlayerCard)]
pub fn player_card(props: &PlayerCardProps) -> Html {
    let player = &props.player;
    let id = player.id.to_string();

    let on_details = {
        let callback = props.on_details.clone();
        let id = player.id.clone();
        Callback::from(move |_: MouseEvent| callback.emit(id.clone()))
    };

    let on_remove = {
        let callback = props.on_remove.clone();
        let id = player.id.clone();
        Callback::from(move |_: MouseEvent| callback.emit(id.clone()))
    };

    html! {
        <div class="player-card" data-player-id={id.clone()}>
            <h2>{ &player.name }</h2>
            <p>{ &player.breed }</p>
            <p>{ format_team_id(&player.team_id) }</p>
            <p>{ &player.status }</p>
            <img src={player.image_url.clone()} alt={player.name.clone()} />
            <div class="card-actions">
                <button class="details-button" data-player-id={id.clone()} onclick={on_details}>
                    { "See details" }
                </button>
                <button
                    class="remove-button"
                    data-player-id={id}
                    onclick={on_remove}
                    disabled={props.removing}
                >
                    { if props.removing { "Removing..." } else { "Remove from roster" } }
                </button>
            </div>
        </div>
    }
}
