use factorysphere_core::access::Role;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Roles offered on the login screen. Operator stays the silent fallback
/// for unknown role strings and is not offered directly.
const LOGIN_ROLES: [Role; 7] = [
    Role::PlantManager,
    Role::ProductionManager,
    Role::MaintenanceManager,
    Role::QualityManager,
    Role::EngineeringManager,
    Role::Supervisor,
    Role::TeamLeader,
];

#[derive(Properties, Clone, PartialEq)]
pub struct LoginPageProps {
    /// Emits `(role_key, email)` on submit.
    pub on_login: Callback<(String, String)>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let role = use_state(|| Role::PlantManager.key().to_string());
    let email = use_state(String::new);

    let on_role_change = {
        let role = role.clone();
        #[cfg(target_arch = "wasm32")]
        {
            Callback::from(move |e: web_sys::Event| {
                if let Some(sel) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                {
                    role.set(sel.value());
                }
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = &role;
            Callback::from(|_e: web_sys::Event| {})
        }
    };

    let on_email_input = {
        let email = email.clone();
        #[cfg(target_arch = "wasm32")]
        {
            Callback::from(move |e: web_sys::InputEvent| {
                if let Some(input) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                {
                    email.set(input.value());
                }
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = &email;
            Callback::from(|_e: web_sys::InputEvent| {})
        }
    };

    let on_submit = {
        let role = role.clone();
        let email = email.clone();
        let on_login = props.on_login.clone();
        #[cfg(target_arch = "wasm32")]
        {
            Callback::from(move |e: web_sys::SubmitEvent| {
                e.prevent_default();
                let address = email.trim().to_string();
                if !address.is_empty() {
                    on_login.emit(((*role).clone(), address));
                }
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (&role, &email, &on_login);
            Callback::from(|_e: web_sys::SubmitEvent| {})
        }
    };

    html! {
        <div class="login-screen" data-testid="login">
            <form class="login-card" onsubmit={on_submit}>
                <h1>{ "FactorySphere" }</h1>
                <p class="login-sub">{ "Control Center UI" }</p>

                <label for="login-role">{ "Role" }</label>
                <select id="login-role" value={(*role).clone()} onchange={on_role_change}>
                    { for LOGIN_ROLES.iter().map(|r| html! {
                        <option value={r.key()} selected={*role == r.key()}>{ r.label() }</option>
                    }) }
                </select>

                <label for="login-email">{ "Email" }</label>
                <input
                    id="login-email"
                    type="email"
                    placeholder="you@plant.example"
                    value={(*email).clone()}
                    oninput={on_email_input}
                />

                <button type="submit" disabled={email.trim().is_empty()}>
                    { "Enter Control Center" }
                </button>
            </form>
        </div>
    }
}
