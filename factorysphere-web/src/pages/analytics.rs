use factorysphere_core::telemetry::{Status, UnitSnapshot};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AnalyticsPageProps {
    pub units: Rc<Vec<UnitSnapshot>>,
}

/// Plant-wide production aggregates over the live counters.
#[function_component(AnalyticsPage)]
pub fn analytics_page(props: &AnalyticsPageProps) -> Html {
    let units = &props.units;
    let ok: u64 = units.iter().map(|u| u64::from(u.counters.ok)).sum();
    let ng: u64 = units.iter().map(|u| u64::from(u.counters.ng)).sum();
    let suspect: u64 = units.iter().map(|u| u64::from(u.counters.suspect)).sum();
    let running = units.iter().filter(|u| u.status == Status::Running).count();

    let inspected = ok + ng + suspect;
    #[allow(clippy::cast_precision_loss)]
    let yield_pct = if inspected == 0 {
        100.0
    } else {
        (ok as f64 / inspected as f64) * 100.0
    };

    let metric = |label: &str, value: String| {
        html! {
            <div class="metric-card">
                <span class="metric-label">{ label.to_string() }</span>
                <span class="metric-value">{ value }</span>
            </div>
        }
    };

    html! {
        <section class="page page-analytics" data-testid="analytics">
            <h2>{ "Analytics" }</h2>
            <div class="metric-grid">
                { metric("Units Running", format!("{running} / {}", units.len())) }
                { metric("Total OK", ok.to_string()) }
                { metric("Total NG", ng.to_string()) }
                { metric("Total Suspect", suspect.to_string()) }
                { metric("First-Pass Yield", format!("{yield_pct:.1}%")) }
            </div>
        </section>
    }
}
