use crate::styles::{
    CARD_BG, FLEX_CENTER, INPUT_COLORS, PRIMARY_BORDER, PRIMARY_TEXT, STANDARD_PADDING,
    TRANSITION_COLORS, combine_styles,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChatInputProps {
    pub on_send: Callback<String>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(ChatInput)]
pub fn chat_input(props: &ChatInputProps) -> Html {
    let input_value = use_state(String::new);
    let input_ref = use_node_ref();

    // Hand focus back once a request has finished
    {
        let input_ref = input_ref.clone();
        use_effect_with(props.disabled, move |disabled| {
            if !*disabled
                && let Some(input) = input_ref.cast::<HtmlInputElement>()
            {
                let _ = input.focus();
            }
            || ()
        });
    }

    let handle_input = {
        let input_value = input_value.clone();
        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            input_value.set(input.value());
        })
    };

    let send_message = {
        let input_value = input_value.clone();
        let on_send = props.on_send.clone();
        let disabled = props.disabled;
        Callback::from(move |_| {
            let text = (*input_value).clone();
            if disabled || text.trim().is_empty() {
                return;
            }
            on_send.emit(text);
            input_value.set(String::new());
        })
    };

    let handle_submit = {
        let send_message = send_message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            send_message.emit(());
        })
    };

    let is_empty = input_value.trim().is_empty();
    let placeholder = props
        .placeholder
        .clone()
        .unwrap_or_else(|| AttrValue::from("Type a message..."));

    html! {
        <form id="chat-form" onsubmit={handle_submit}
            class={combine_styles(&["flex items-center gap-3", STANDARD_PADDING, CARD_BG, "border-t", PRIMARY_BORDER])}>
            <input
                ref={input_ref}
                id="message-input"
                type="text"
                autocomplete="off"
                class={combine_styles(&["flex-1 h-[42px] px-3 border", INPUT_COLORS, "rounded-lg text-sm outline-none", TRANSITION_COLORS, CARD_BG, PRIMARY_TEXT, "focus:border-gray-400 focus:ring-1 focus:ring-gray-400 disabled:bg-gray-100 disabled:cursor-not-allowed placeholder:text-gray-400"])}
                placeholder={placeholder}
                value={(*input_value).clone()}
                oninput={handle_input}
                disabled={props.disabled}
            />
            <SendButton disabled={is_empty || props.disabled} />
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct SendButtonProps {
    pub disabled: bool,
}

#[function_component(SendButton)]
fn send_button(props: &SendButtonProps) -> Html {
    html! {
        <button
            type="submit"
            class={combine_styles(&[FLEX_CENTER, "justify-center w-[42px] h-[42px] p-0 rounded-lg bg-blue-500 dark:bg-blue-600 text-white cursor-pointer transition-all duration-200 flex-shrink-0 hover:bg-blue-600 dark:hover:bg-blue-700 disabled:bg-gray-200 disabled:cursor-not-allowed disabled:text-gray-400"])}
            disabled={props.disabled}
            title="Send message"
            aria-label="Send message"
        >
            <svg class="w-5 h-5" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                <path d="M22 2L11 13" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
                <path d="M22 2L15 22L11 13L2 9L22 2Z" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
            </svg>
        </button>
    }
}
