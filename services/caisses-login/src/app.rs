use yew::prelude::*;

use crate::components::login::Login;

/// The `field-valid` / `field-invalid` rules other page scripts toggle
/// on form fields, published here so they exist site-wide.
const VALIDATION_STYLES: &str = "
    .field-valid { border-color: #48bb78 !important; background: #f0fff4 !important; }
    .field-invalid { border-color: #f56565 !important; background: #fff5f5 !important; }
";

#[function_component(Main)]
pub fn app() -> Html {
    html! {
        <>
            <style>{ VALIDATION_STYLES }</style>
            <Login />
        </>
    }
}
