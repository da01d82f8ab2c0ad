use crate::actions::{submit_once, SubmitOutcome};
use crate::api::RosterClient;
use crate::components::FormField;
use crate::models::{NewPlayer, Player};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NewPlayerFormProps {
    pub client: RosterClient,
    /// Receives the re-fetched roster after a successful create.
    pub on_roster_changed: Callback<Vec<Player>>,
}

#[function_component(NewPlayerForm)]
pub fn new_player_form(props: &NewPlayerFormProps) -> Html {
    let draft = use_state(NewPlayer::default);
    let is_submitting = use_state(|| false);
    let submit_guard = use_mut_ref(|| false);

    let on_name_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut data = (*draft).clone();
            data.name = input.value();
            draft.set(data);
        })
    };

    let on_breed_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut data = (*draft).clone();
            data.breed = input.value();
            draft.set(data);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        let submit_guard = submit_guard.clone();
        let client = props.client.clone();
        let on_roster_changed = props.on_roster_changed.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let player = (*draft).clone();
            let draft = draft.clone();
            let is_submitting = is_submitting.clone();
            let submit_guard = submit_guard.clone();
            let client = client.clone();
            let on_roster_changed = on_roster_changed.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let on_pending_changed = |busy: bool| is_submitting.set(busy);
                let Some(outcome) =
                    submit_once(&client, &submit_guard, &player, on_pending_changed).await
                else {
                    return;
                };
                if outcome.clears_form() {
                    draft.set(NewPlayer::default());
                }
                if let SubmitOutcome::Created {
                    roster: Some(players),
                } = outcome
                {
                    on_roster_changed.emit(players);
                }
            });
        })
    };

    html! {
        <form id="add-player-form" onsubmit={on_submit}>
            <FormField label="Name:" input_id="name">
                <input
                    type="text"
                    id="name"
                    name="name"
                    autocomplete="on"
                    required={true}
                    value={draft.name.clone()}
                    oninput={on_name_input}
                />
            </FormField>
            <FormField label="Breed:" input_id="breed">
                <input
                    type="text"
                    id="breed"
                    name="breed"
                    autocomplete="on"
                    required={true}
                    value={draft.breed.clone()}
                    oninput={on_breed_input}
                />
            </FormField>
            <button type="submit" disabled={*is_submitting}>
                { if *is_submitting { "Adding..." } else { "Add Player" } }
            </button>
        </form>
    }
}
