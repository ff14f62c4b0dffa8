use factorysphere_core::telemetry::{Shift, UnitSnapshot};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ReportsPageProps {
    pub units: Rc<Vec<UnitSnapshot>>,
}

/// Plant totals per shift, summed over every unit's shift totals.
#[function_component(ReportsPage)]
pub fn reports_page(props: &ReportsPageProps) -> Html {
    let row = |shift: Shift| {
        let mut ok = 0u64;
        let mut ng = 0u64;
        let mut suspect = 0u64;
        let mut downtime = 0u64;
        for unit in props.units.iter() {
            if let Some(t) = unit.shift_totals.get(&shift) {
                ok += u64::from(t.ok);
                ng += u64::from(t.ng);
                suspect += u64::from(t.suspect);
                downtime += u64::from(t.downtime_min);
            }
        }
        html! {
            <tr key={shift.as_str()}>
                <td class="cell-shift">{ format!("Shift {}", shift.as_str()) }</td>
                <td>{ ok }</td>
                <td>{ ng }</td>
                <td>{ suspect }</td>
                <td>{ downtime }</td>
            </tr>
        }
    };

    html! {
        <section class="page page-reports" data-testid="reports">
            <h2>{ "Reports" }</h2>
            <table class="report-table">
                <thead>
                    <tr>
                        <th>{ "Shift" }</th>
                        <th>{ "OK" }</th>
                        <th>{ "NG" }</th>
                        <th>{ "Suspect" }</th>
                        <th>{ "Downtime (min)" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for Shift::ALL.into_iter().map(row) }
                </tbody>
            </table>
        </section>
    }
}
