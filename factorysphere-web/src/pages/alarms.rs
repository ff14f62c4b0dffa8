use crate::components::status_chip::StatusChip;
use factorysphere_core::telemetry::{Status, UnitSnapshot};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AlarmsPageProps {
    pub units: Rc<Vec<UnitSnapshot>>,
}

/// Units currently in a degraded state, most severe first.
#[function_component(AlarmsPage)]
pub fn alarms_page(props: &AlarmsPageProps) -> Html {
    let mut degraded: Vec<&UnitSnapshot> = props
        .units
        .iter()
        .filter(|u| u.status != Status::Running)
        .collect();
    degraded.sort_by_key(|u| match u.status {
        Status::Down => 0,
        Status::Attn => 1,
        Status::Running => 2,
    });

    let entry = |unit: &UnitSnapshot| {
        // The last message carries the status detail when degraded.
        let detail = unit.messages.last().cloned().unwrap_or_default();
        html! {
            <li class="alarm-row" key={unit.id.clone()}>
                <StatusChip status={unit.status} />
                <span class="alarm-unit">{ &unit.name }</span>
                <span class="alarm-detail">{ detail }</span>
            </li>
        }
    };

    html! {
        <section class="page page-alarms" data-testid="alarms">
            <h2>{ "Live Alarms" }</h2>
            if degraded.is_empty() {
                <p class="empty-state">{ "No active alarms." }</p>
            } else {
                <ul class="alarm-list">
                    { for degraded.iter().map(|u| entry(u)) }
                </ul>
            }
        </section>
    }
}
