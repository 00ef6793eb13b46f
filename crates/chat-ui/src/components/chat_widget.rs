use crate::client::create_chat_client;
use crate::components::{ChatHeader, ChatInput, MessageList};
use crate::config::WidgetConfig;
use crate::controller::{ChatAction, ChatController, OutgoingRequest};
use crate::styles::{CONTAINER_BG, FLEX_COL, ROUNDED_STANDARD};
use crate::transport::ChatTransport;
use tripchat_http::ClientError;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ChatWidgetProps {
    #[prop_or_default]
    pub config: WidgetConfig,
    #[prop_or_default]
    pub class: Classes,
}

/// The complete chat widget: header, conversation, typing indicator, input
#[function_component(ChatWidget)]
pub fn chat_widget(props: &ChatWidgetProps) -> Html {
    let ChatWidgetProps { config, class } = props;

    let controller = use_reducer({
        let config = config.clone();
        move || ChatController::new(config)
    });
    let client = use_memo(config.clone(), |config| {
        create_chat_client(config).map_err(|e| {
            tracing::error!(error = %e, "invalid chat client configuration");
            e.to_string()
        })
    });

    // Send whatever request the controller accepted; each ticket is sent once
    use_effect_with(controller.outgoing().cloned(), {
        let controller = controller.clone();
        let client = client.clone();
        move |outgoing| {
            if let Some(OutgoingRequest { ticket, request }) = outgoing.clone() {
                spawn_local(async move {
                    let outcome = match client.as_ref() {
                        Ok(client) => client.send(&request).await,
                        Err(message) => Err(ClientError::Configuration(message.clone())),
                    };
                    controller.dispatch(ChatAction::Complete { ticket, outcome });
                });
            }
        }
    });

    let on_send = {
        let controller = controller.clone();
        Callback::from(move |text: String| controller.dispatch(ChatAction::Submit(text)))
    };

    let on_clear = {
        let controller = controller.clone();
        Callback::from(move |()| controller.dispatch(ChatAction::Clear))
    };

    html! {
        <div class={classes!(FLEX_COL, "h-full", CONTAINER_BG, ROUNDED_STANDARD, "overflow-hidden", class.clone())}>
            <ChatHeader
                title={config.title.clone()}
                session_id={controller.session().id().to_string()}
                on_clear={on_clear}
            />

            <div class="flex-1 overflow-hidden">
                <MessageList
                    messages={controller.messages().to_vec()}
                    typing={controller.is_typing()}
                />
            </div>

            <div class="flex-shrink-0">
                <ChatInput
                    on_send={on_send}
                    placeholder={AttrValue::from(config.placeholder.clone())}
                    disabled={!controller.input_enabled()}
                />
            </div>
        </div>
    }
}
