use crate::components::status_chip::StatusChip;
use factorysphere_core::registry::Registry;
use factorysphere_core::telemetry::{Shift, UnitSnapshot, mock_kpis_for_station};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use yew::prelude::*;

use std::rc::Rc;

#[derive(Properties, Clone, PartialEq)]
pub struct DevicesPageProps {
    pub registry: Rc<Registry>,
    pub units: Rc<Vec<UnitSnapshot>>,
}

/// Station-level KPI table for the selected shift.
#[function_component(DevicesPage)]
pub fn devices_page(props: &DevicesPageProps) -> Html {
    let shift = use_state(|| Shift::A);

    let on_shift_change = {
        let shift = shift.clone();
        #[cfg(target_arch = "wasm32")]
        {
            Callback::from(move |e: web_sys::Event| {
                if let Some(sel) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                {
                    shift.set(Shift::resolve(&sel.value()));
                }
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = &shift;
            Callback::from(|_e: web_sys::Event| {})
        }
    };

    let row = |unit: &UnitSnapshot, station_id: &str| {
        let kpis = mock_kpis_for_station(&props.registry, station_id, *shift);
        html! {
            <tr key={kpis.station_id.clone()}>
                <td class="cell-unit">{ &unit.name }</td>
                <td class="cell-station">{ &kpis.station_id }</td>
                <td><StatusChip status={kpis.status} /></td>
                <td>{ &kpis.part_model }</td>
                <td>{ kpis.counters.ok }</td>
                <td>{ kpis.counters.ng }</td>
                <td>{ kpis.counters.suspect }</td>
                <td>{ kpis.counters.containers }</td>
                <td>{ kpis.counters.pack }</td>
            </tr>
        }
    };

    let rows: Vec<Html> = props
        .units
        .iter()
        .flat_map(|unit| {
            if unit.station_ids.is_empty() {
                vec![row(unit, &unit.id)]
            } else {
                unit.station_ids.iter().map(|id| row(unit, id)).collect()
            }
        })
        .collect();

    html! {
        <section class="page page-devices" data-testid="devices">
            <header class="page-head">
                <h2>{ "Stations & Devices" }</h2>
                <label for="shift-select">{ "Shift" }</label>
                <select id="shift-select" onchange={on_shift_change}>
                    { for Shift::ALL.iter().map(|s| html! {
                        <option value={s.as_str()} selected={*shift == *s}>
                            { format!("Shift {}", s.as_str()) }
                        </option>
                    }) }
                </select>
            </header>
            <table class="device-table">
                <thead>
                    <tr>
                        <th>{ "Unit" }</th>
                        <th>{ "Station" }</th>
                        <th>{ "Status" }</th>
                        <th>{ "Part Model" }</th>
                        <th>{ "OK" }</th>
                        <th>{ "NG" }</th>
                        <th>{ "Suspect" }</th>
                        <th>{ "Containers" }</th>
                        <th>{ "Pack" }</th>
                    </tr>
                </thead>
                <tbody>{ for rows }</tbody>
            </table>
        </section>
    }
}
