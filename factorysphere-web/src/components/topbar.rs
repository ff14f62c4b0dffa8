use factorysphere_core::access::Role;
use factorysphere_core::session::Session;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TopbarProps {
    pub session: Session,
    pub on_toggle_sidebar: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Topbar)]
pub fn topbar(props: &TopbarProps) -> Html {
    let toggle = {
        let cb = props.on_toggle_sidebar.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let logout = {
        let cb = props.on_logout.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let role_label = Role::resolve(&props.session.role).label();

    html! {
        <header class="topbar" role="banner">
            <button type="button" class="sidebar-toggle" aria-label="Toggle navigation" onclick={toggle}>
                { "\u{2630}" }
            </button>
            <div class="topbar-title">{ "Control Center" }</div>
            <div class="topbar-user">
                <span class="role-chip">{ role_label }</span>
                <span class="user-email">{ &props.session.email }</span>
                <button type="button" class="logout-btn" onclick={logout}>{ "Log out" }</button>
            </div>
        </header>
    }
}
