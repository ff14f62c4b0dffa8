use wasm_bindgen_test::*;

use factorysphere_core::session::{EMAIL_KEY, ROLE_KEY};
use factorysphere_web::session::{self, AUTH_EVENT};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn storage() -> web_sys::Storage {
    web_sys::window()
        .expect("window")
        .local_storage()
        .expect("storage access")
        .expect("storage available")
}

#[wasm_bindgen_test]
fn login_writes_both_storage_keys() {
    let store = storage();
    store.clear().expect("clear");

    let stored = session::login("Supervisor", "sup@plant.example");
    assert!(stored.is_authenticated());
    assert_eq!(
        store.get_item(ROLE_KEY).unwrap().as_deref(),
        Some("Supervisor")
    );
    assert_eq!(
        store.get_item(EMAIL_KEY).unwrap().as_deref(),
        Some("sup@plant.example")
    );

    let read = session::current_session();
    assert_eq!(read, stored);
}

#[wasm_bindgen_test]
fn logout_clears_storage() {
    session::login("Supervisor", "sup@plant.example");
    session::logout();

    let store = storage();
    assert_eq!(store.get_item(ROLE_KEY).unwrap(), None);
    assert_eq!(store.get_item(EMAIL_KEY).unwrap(), None);
    assert!(!session::current_session().is_authenticated());
}

#[wasm_bindgen_test]
fn auth_event_fires_on_login() {
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let fired = Rc::new(Cell::new(false));
    let listener = Closure::<dyn FnMut(web_sys::Event)>::new({
        let fired = fired.clone();
        move |_event: web_sys::Event| fired.set(true)
    });
    let window = web_sys::window().expect("window");
    window
        .add_event_listener_with_callback(AUTH_EVENT, listener.as_ref().unchecked_ref())
        .expect("add listener");

    session::login("PlantManager", "pm@plant.example");
    assert!(fired.get());

    window
        .remove_event_listener_with_callback(AUTH_EVENT, listener.as_ref().unchecked_ref())
        .expect("remove listener");
}
