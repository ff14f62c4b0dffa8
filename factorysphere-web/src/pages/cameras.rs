use factorysphere_core::registry::Registry;
use factorysphere_core::telemetry::UnitSnapshot;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct CamerasPageProps {
    pub registry: Rc<Registry>,
    pub units: Rc<Vec<UnitSnapshot>>,
}

/// Camera roster derived from the unit and station registry. Feeds are
/// placeholders until a streaming backend exists.
#[function_component(CamerasPage)]
pub fn cameras_page(props: &CamerasPageProps) -> Html {
    let feed = |id: String, label: String| {
        html! {
            <figure class="camera-feed" key={id.clone()}>
                <div class="camera-placeholder" data-camera={id}>
                    { "Feed offline" }
                </div>
                <figcaption>{ label }</figcaption>
            </figure>
        }
    };

    let feeds: Vec<Html> = if props.registry.has_pods() {
        props
            .registry
            .all_stations()
            .map(|st| feed(st.id.clone(), format!("CAM {}", st.name)))
            .collect()
    } else {
        props
            .units
            .iter()
            .map(|u| feed(u.id.clone(), format!("CAM {}", u.name)))
            .collect()
    };

    html! {
        <section class="page page-cameras" data-testid="cameras">
            <h2>{ "Cameras" }</h2>
            <div class="camera-grid">{ for feeds }</div>
        </section>
    }
}
