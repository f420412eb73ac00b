use crate::hooks::use_market::LoadState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: LoadState,
    pub on_retry: Callback<()>,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    let retry = props.on_retry.reform(|_: MouseEvent| ());

    match &props.state {
        LoadState::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading data..."}</p>
            </div>
        },
        LoadState::Loaded(at) => html! {
            <div class="status success">
                <p>{format!("Last updated: {}", at.format("%Y-%m-%d %H:%M:%S UTC"))}</p>
                <button class="refresh-button" onclick={retry}>{"Refresh"}</button>
            </div>
        },
        LoadState::Failed(msg) => html! {
            <div class="status error">
                <p>{"Error: "}{msg}</p>
                <button class="refresh-button" onclick={retry}>{"Try again"}</button>
            </div>
        },
    }
}
