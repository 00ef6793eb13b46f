use crate::styles::{
    ASSISTANT_AVATAR_BG, ASSISTANT_BUBBLE_COLORS, AVATAR, MUTED_TEXT, USER_AVATAR_BG,
    USER_BUBBLE_COLORS,
};
use crate::types::{ChatMessage, Role};
use crate::utils::markdown::render_html;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MessageProps {
    pub message: ChatMessage,
    #[prop_or_default]
    pub class: Classes,
}

/// One chat bubble: avatar, rendered content and sender label
#[function_component(Message)]
pub fn message(props: &MessageProps) -> Html {
    let MessageProps { message, class } = props;

    let (row_class, avatar_bg, avatar_icon, bubble_class, label_class) = match message.sender() {
        Role::User => (
            "flex-row-reverse space-x-reverse",
            USER_AVATAR_BG,
            "fas fa-user",
            USER_BUBBLE_COLORS,
            "text-right",
        ),
        Role::Assistant => (
            "",
            ASSISTANT_AVATAR_BG,
            "fas fa-robot",
            ASSISTANT_BUBBLE_COLORS,
            "",
        ),
    };

    html! {
        <div class={classes!("message-bubble", "flex", "items-start", "space-x-3", row_class, class.clone())}>
            <div class="flex-shrink-0">
                <div class={classes!(AVATAR, avatar_bg)}>
                    <i class={classes!(avatar_icon, "text-sm")}></i>
                </div>
            </div>
            <div class="flex-1">
                <div class={classes!(bubble_class, "rounded-lg", "p-3", "max-w-md", "break-words")}>
                    <div class="whitespace-pre-wrap">
                        {render_html(message.rendered())}
                    </div>
                </div>
                <div class={classes!("text-xs", MUTED_TEXT, "mt-1", label_class)}>
                    {message.sender().label()}
                </div>
            </div>
        </div>
    }
}
