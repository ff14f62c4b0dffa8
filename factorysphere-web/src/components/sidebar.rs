use factorysphere_core::access::{NavItem, Page, Subject, nav_items_for};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SidebarProps {
    pub subject: Subject,
    #[prop_or_default]
    pub active: Option<Page>,
    #[prop_or_default]
    pub collapsed: bool,
    pub on_navigate: Callback<Page>,
}

/// Role-filtered navigation in declared menu order.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let items = nav_items_for(&props.subject);

    let entry = |item: NavItem| {
        let page = item.page;
        let active = props.active == Some(page);
        let onclick = {
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |_| on_navigate.emit(page))
        };
        html! {
            <button
                type="button"
                key={item.page.key()}
                class={classes!("nav-item", active.then_some("active"))}
                data-page={item.page.key()}
                {onclick}
            >
                <span class="nav-label">{ item.label }</span>
                if item.live_badge {
                    <span class="badge-live">{ "LIVE" }</span>
                }
            </button>
        }
    };

    html! {
        <nav
            class={classes!("sidebar", props.collapsed.then_some("collapsed"))}
            aria-label="Primary"
        >
            <div class="sidebar-brand">
                <span class="brand-name">{ "FactorySphere" }</span>
                <span class="brand-sub">{ "Control Center UI" }</span>
            </div>
            <div class="sidebar-nav">
                { for items.iter().copied().map(entry) }
                if items.is_empty() {
                    <div class="sidebar-empty">
                        <p>{ "No modules assigned" }</p>
                        <p class="hint">{ "Select a management role on login." }</p>
                    </div>
                }
            </div>
            <footer class="sidebar-footer">
                { format!("Role: {}", props.subject.role.label()) }
            </footer>
        </nav>
    }
}
