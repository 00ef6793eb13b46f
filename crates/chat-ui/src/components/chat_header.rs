use crate::styles::{
    CARD_BG, FLEX_BETWEEN, FLEX_CENTER_GAP_2, HEADER_PADDING, PRIMARY_BORDER, PRIMARY_TEXT,
    SECONDARY_BUTTON, TERTIARY_TEXT, combine_styles,
};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ChatHeaderProps {
    pub title: AttrValue,
    pub session_id: AttrValue,
    pub on_clear: Callback<()>,
}

#[function_component(ChatHeader)]
pub fn chat_header(props: &ChatHeaderProps) -> Html {
    let ChatHeaderProps {
        title,
        session_id,
        on_clear,
    } = props;

    let handle_clear = {
        let on_clear = on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    html! {
        <div class={combine_styles(&[CARD_BG, "border-b", PRIMARY_BORDER, HEADER_PADDING, FLEX_BETWEEN, "flex-shrink-0"])}>
            <div class={combine_styles(&[FLEX_CENTER_GAP_2, "gap-3"])}>
                <i class="fas fa-plane-departure text-blue-500"></i>
                <span class={combine_styles(&["font-semibold", PRIMARY_TEXT])}>{title.clone()}</span>
                <span class={combine_styles(&[TERTIARY_TEXT, "text-xs"])}>
                    {"Session: "}
                    <span id="session-id" class="font-mono">{session_id.clone()}</span>
                </span>
            </div>
            <button id="clear-chat" class={combine_styles(&[SECONDARY_BUTTON, "text-sm"])} onclick={handle_clear}>
                {"Clear chat"}
            </button>
        </div>
    }
}
