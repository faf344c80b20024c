use leptos::prelude::*;
use outputs_viewer::app::{App, ConfigErrorView};
use outputs_viewer::utils::dom;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let element = match dom::mount_element() {
        Ok(element) => element,
        Err(e) => {
            web_sys::console::error_1(&e.to_string().into());
            return;
        }
    };
    let root = element.clone().unchecked_into::<web_sys::HtmlElement>();

    match dom::page_config(&element) {
        Ok(config) => mount_to(root, move || view! { <App config=config.clone() /> }).forget(),
        Err(e) => {
            web_sys::console::error_1(&e.to_string().into());
            let message = e.to_string();
            mount_to(root, move || view! { <ConfigErrorView message=message.clone() /> }).forget();
        }
    }
}
