use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: String,
    /// Id of the input the label points at.
    pub input_id: String,
    pub children: Children,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.input_id.clone()}>{&props.label}</label>
            {for props.children.iter()}
        </div>
    }
}
