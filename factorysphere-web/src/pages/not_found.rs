use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct NotFoundProps {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    let onclick = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="page page-not-found" data-testid="not-found">
            <h2>{ "Page not found" }</h2>
            <p>{ "The page you were looking for does not exist." }</p>
            <button type="button" onclick={onclick}>{ "Back to Control Center" }</button>
        </section>
    }
}
