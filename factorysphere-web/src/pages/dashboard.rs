use crate::components::status_chip::StatusChip;
use factorysphere_core::telemetry::UnitSnapshot;
use std::rc::Rc;
use yew::prelude::*;

/// Pixels per grid unit when projecting tile coordinates onto the floor plan.
const TILE_SCALE: f64 = 120.0;

#[derive(Properties, Clone, PartialEq)]
pub struct DashboardPageProps {
    pub units: Rc<Vec<UnitSnapshot>>,
}

/// Plant overview: every unit on its floor-plan tile with live counters.
#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    html! {
        <section class="page page-dashboard" data-testid="dashboard">
            <h2>{ "Plant Overview" }</h2>
            <div class="floor-plan">
                { for props.units.iter().map(unit_card) }
            </div>
        </section>
    }
}

fn unit_card(unit: &UnitSnapshot) -> Html {
    let style = format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;",
        unit.tile.x * TILE_SCALE,
        unit.tile.y * TILE_SCALE,
        unit.tile.w * TILE_SCALE,
        unit.tile.h * TILE_SCALE,
    );

    html! {
        <article class="unit-card" key={unit.id.clone()} data-unit={unit.id.clone()} {style}>
            <header class="unit-head">
                <span class="unit-name">{ &unit.name }</span>
                <StatusChip status={unit.status} />
            </header>
            <div class="unit-part">{ &unit.part_model }</div>
            <dl class="unit-counters">
                <dt>{ "OK" }</dt>
                <dd>{ unit.counters.ok }</dd>
                <dt>{ "NG" }</dt>
                <dd>{ unit.counters.ng }</dd>
                <dt>{ "Suspect" }</dt>
                <dd>{ unit.counters.suspect }</dd>
            </dl>
            <ul class="unit-messages">
                { for unit.messages.iter().map(|m| html! { <li>{ m }</li> }) }
            </ul>
        </article>
    }
}
