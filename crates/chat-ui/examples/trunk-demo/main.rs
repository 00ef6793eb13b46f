use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::prelude::*;
use tracing_web::{MakeWebConsoleWriter, performance_layer};
use tripchat_chat_ui::{ChatWidget, WidgetConfig};
use wasm_bindgen::prelude::*;
use web_sys::{Element, window};
use yew::prelude::*;

/// Id of the element the widget mounts into
const MOUNT_ID: &str = "tripchat";

#[derive(Properties, PartialEq)]
struct AppProps {
    config: WidgetConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <div class="h-screen flex flex-col bg-gray-100 dark:bg-gray-900">
            <div class="flex-1 overflow-hidden w-full max-w-3xl mx-auto p-4">
                <ChatWidget config={props.config.clone()} class="shadow-md" />
            </div>
        </div>
    }
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .init();
}

/// Read the optional JSON config from the mount element's `data-config`
fn load_config(root: &Element) -> WidgetConfig {
    let Some(raw) = root.get_attribute("data-config") else {
        return WidgetConfig::default();
    };
    WidgetConfig::from_json(&raw).unwrap_or_else(|error| {
        tracing::warn!(%error, "ignoring invalid data-config");
        WidgetConfig::default()
    })
}

#[wasm_bindgen(start)]
#[allow(clippy::main_recursion)]
pub fn main() {
    console_error_panic_hook::set_once();
    init_tracing();

    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID));

    match root {
        Some(root) => {
            let config = load_config(&root);
            yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
        }
        None => {
            yew::Renderer::<App>::with_props(AppProps {
                config: WidgetConfig::default(),
            })
            .render();
        }
    }
}
