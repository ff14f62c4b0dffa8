use factorysphere_core::telemetry::{Shift, UnitSnapshot};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct DowntimePageProps {
    pub units: Rc<Vec<UnitSnapshot>>,
}

/// Downtime minutes per unit across all three shifts.
#[function_component(DowntimePage)]
pub fn downtime_page(props: &DowntimePageProps) -> Html {
    let row = |unit: &UnitSnapshot| {
        let total: u32 = Shift::ALL
            .iter()
            .filter_map(|s| unit.shift_totals.get(s))
            .map(|t| t.downtime_min)
            .sum();
        html! {
            <tr key={unit.id.clone()}>
                <td class="cell-unit">{ &unit.name }</td>
                { for Shift::ALL.iter().map(|s| html! {
                    <td>{ unit.shift_totals.get(s).map_or(0, |t| t.downtime_min) }</td>
                }) }
                <td class="cell-total">{ total }</td>
            </tr>
        }
    };

    html! {
        <section class="page page-downtime" data-testid="downtime">
            <h2>{ "Downtime & Maintenance" }</h2>
            <table class="downtime-table">
                <thead>
                    <tr>
                        <th>{ "Unit" }</th>
                        { for Shift::ALL.iter().map(|s| html! {
                            <th>{ format!("Shift {} (min)", s.as_str()) }</th>
                        }) }
                        <th>{ "Total (min)" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.units.iter().map(row) }
                </tbody>
            </table>
        </section>
    }
}
