use crate::components::{Message, TypingIndicator};
use crate::styles::{FLEX_COL_GAP_4, STANDARD_PADDING};
use crate::types::ChatMessage;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MessageListProps {
    pub messages: Vec<ChatMessage>,
    /// Show the typing indicator below the last message
    #[prop_or_default]
    pub typing: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// Scrollable conversation log
///
/// Stays pinned to the bottom whenever a message is appended or the typing
/// indicator appears, so the newest bubble is always in view.
#[function_component(MessageList)]
pub fn message_list(props: &MessageListProps) -> Html {
    let MessageListProps {
        messages,
        typing,
        class,
    } = props;

    let container_ref = use_node_ref();

    use_effect_with((messages.len(), *typing), {
        let container_ref = container_ref.clone();
        move |_| {
            if let Some(log) = container_ref.cast::<Element>() {
                log.set_scroll_top(log.scroll_height());
            }
        }
    });

    html! {
        <div
            id="chat-messages"
            ref={container_ref}
            role="log"
            aria-live="polite"
            class={classes!(STANDARD_PADDING, FLEX_COL_GAP_4, "h-full", "overflow-y-auto", class.clone())}
        >
            {for messages.iter().enumerate().map(|(index, message)| html! {
                <Message key={index} message={message.clone()} />
            })}
            if *typing {
                <TypingIndicator />
            }
        </div>
    }
}
