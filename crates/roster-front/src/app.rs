use crate::actions::{load_latest_details, load_roster, remove_once, InFlight, RequestTicker};
use crate::api::RosterClient;
use crate::components::{NewPlayerForm, PlayerDetails, PlayerList};
use crate::config::ApiConfig;
use crate::models::{Player, RecordId};
use std::collections::HashSet;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: ApiConfig,
    /// Roster to show before the first fetch lands.
    #[prop_or_default]
    pub initial_players: Option<Vec<Player>>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let client = use_memo(props.config.clone(), RosterClient::new);
    let roster = {
        let initial = props.initial_players.clone();
        use_state(move || initial)
    };
    let details = use_state(|| Option::<Player>::None);
    let removing = use_state(HashSet::<RecordId>::new);
    let remove_guard = use_mut_ref(InFlight::<RecordId>::default);
    let detail_ticker = use_mut_ref(RequestTicker::default);

    {
        let roster = roster.clone();
        let client = (*client).clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(players) = load_roster(&client).await {
                    roster.set(Some(players));
                }
            });
            || ()
        });
    }

    let on_details = {
        let details = details.clone();
        let detail_ticker = detail_ticker.clone();
        let client = (*client).clone();
        Callback::from(move |id: RecordId| {
            let ticket = detail_ticker.borrow_mut().issue();
            let details = details.clone();
            let detail_ticker = detail_ticker.clone();
            let client = client.clone();

            wasm_bindgen_futures::spawn_local(async move {
                if let Some(player) =
                    load_latest_details(&client, &detail_ticker, ticket, &id).await
                {
                    details.set(Some(player));
                }
            });
        })
    };

    let on_remove = {
        let roster = roster.clone();
        let removing = removing.clone();
        let remove_guard = remove_guard.clone();
        let client = (*client).clone();
        Callback::from(move |id: RecordId| {
            let roster = roster.clone();
            let removing = removing.clone();
            let remove_guard = remove_guard.clone();
            let client = client.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let on_pending_changed = |ids: HashSet<RecordId>| removing.set(ids);
                if let Some(players) =
                    remove_once(&client, &remove_guard, &id, on_pending_changed).await
                {
                    roster.set(Some(players));
                }
            });
        })
    };

    let on_roster_changed = {
        let roster = roster.clone();
        Callback::from(move |players: Vec<Player>| roster.set(Some(players)))
    };

    html! {
        <main class="roster">
            <section id="all-players-container">
                if let Some(players) = &*roster {
                    <PlayerList
                        players={players.clone()}
                        on_details={on_details}
                        on_remove={on_remove}
                        removing={(*removing).clone()}
                    />
                }
            </section>
            <section id="player-details-container">
                if let Some(player) = &*details {
                    <PlayerDetails player={player.clone()} />
                }
            </section>
            <section id="new-player-form">
                <NewPlayerForm
                    client={(*client).clone()}
                    on_roster_changed={on_roster_changed}
                />
            </section>
        </main>
    }
}
