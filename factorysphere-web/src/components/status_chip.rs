use factorysphere_core::telemetry::Status;
use yew::prelude::*;

#[must_use]
pub const fn status_class(status: Status) -> &'static str {
    match status {
        Status::Running => "status-running",
        Status::Attn => "status-attn",
        Status::Down => "status-down",
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct StatusChipProps {
    pub status: Status,
}

#[function_component(StatusChip)]
pub fn status_chip(props: &StatusChipProps) -> Html {
    html! {
        <span class={classes!("status-chip", status_class(props.status))}>
            { props.status.as_str() }
        </span>
    }
}
