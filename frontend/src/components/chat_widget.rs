use log::{debug, info};
use std::rc::Rc;
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

use crate::chat::gemini::HttpTransport;
use crate::chat::message::{ChatMessage, Reply, Role};
use crate::chat::persona::Persona;
use crate::chat::session::AdvisorSession;
use crate::chat::state::{ChatState, Phase, SubmitError};
use crate::config;
use crate::motion::CHAT_PANEL;

#[derive(Properties, PartialEq)]
pub struct ChatWidgetProps {
    pub persona: &'static Persona,
}

pub enum ChatWidgetMsg {
    Toggle,
    Close,
    SetInput(String),
    Send,
    Replied(Reply),
}

pub struct ChatWidget {
    state: ChatState,
    input: String,
    session: Rc<AdvisorSession<HttpTransport>>,
    messages_ref: NodeRef,
}

impl Component for ChatWidget {
    type Message = ChatWidgetMsg;
    type Properties = ChatWidgetProps;

    fn create(ctx: &Context<Self>) -> Self {
        let persona = ctx.props().persona;
        Self {
            state: ChatState::new(persona.greeting),
            input: String::new(),
            session: Rc::new(AdvisorSession::new(
                HttpTransport::default(),
                persona,
                config::gemini_api_key(),
            )),
            messages_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatWidgetMsg::Toggle => {
                self.state.toggle();
                true
            }
            ChatWidgetMsg::Close => {
                self.state.close();
                true
            }
            ChatWidgetMsg::SetInput(input) => {
                self.input = input;
                true
            }
            ChatWidgetMsg::Send => match self.state.submit(&self.input) {
                Ok(outgoing) => {
                    info!("{}: user sent a message", self.session.persona().name);
                    self.input.clear();
                    let session = self.session.clone();
                    ctx.link().send_future(async move {
                        let reply = session.send(&outgoing.history, &outgoing.text).await;
                        ChatWidgetMsg::Replied(reply)
                    });
                    true
                }
                Err(SubmitError::Busy) => {
                    debug!("send ignored, reply still pending");
                    false
                }
                Err(SubmitError::Empty) => false,
            },
            ChatWidgetMsg::Replied(reply) => {
                self.state.resolve(reply);
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // Keep the newest message in view.
        if let Some(list) = self.messages_ref.cast::<Element>() {
            list.set_scroll_top(list.scroll_height());
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let persona = ctx.props().persona;
        let open = self.state.is_open();
        let phase = match self.state.phase() {
            Phase::Closed => "closed",
            Phase::OpenIdle => "idle",
            Phase::OpenAwaiting => "awaiting",
        };
        let toggle = ctx.link().callback(|_| ChatWidgetMsg::Toggle);
        let close = ctx.link().callback(|_| ChatWidgetMsg::Close);
        let send = ctx.link().callback(|_| ChatWidgetMsg::Send);
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatWidgetMsg::SetInput(input.value())
        });
        let onkeydown = ctx.link().batch_callback(|e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                Some(ChatWidgetMsg::Send)
            } else {
                None
            }
        });

        html! {
            <div class="chat-widget" data-phase={phase}>
                <div
                    class={classes!("chat-panel", open.then(|| "open"))}
                    style={CHAT_PANEL.style(open)}
                    aria-hidden={(!open).to_string()}
                >
                    <div class="chat-header">
                        <h3>{ persona.title }</h3>
                        <button class="chat-close" onclick={close}>{ "✕" }</button>
                    </div>

                    <div class="chat-messages" ref={self.messages_ref.clone()}>
                        { for self.state.messages().iter().map(render_message) }
                        if self.state.is_awaiting() {
                            <div class="chat-row model">
                                <div class="chat-bubble loading">
                                    <span class="dot" style="animation-delay: 0ms"></span>
                                    <span class="dot" style="animation-delay: 150ms"></span>
                                    <span class="dot" style="animation-delay: 300ms"></span>
                                </div>
                            </div>
                        }
                    </div>

                    <div class="chat-input">
                        <input
                            type="text"
                            placeholder={persona.placeholder}
                            value={self.input.clone()}
                            {oninput}
                            {onkeydown}
                        />
                        <button onclick={send} disabled={!self.state.can_send(&self.input)}>
                            { "➤" }
                        </button>
                    </div>
                </div>

                <button class="chat-toggle" onclick={toggle}>
                    if open {
                        { "✕" }
                    } else {
                        { "✦" }
                    }
                </button>
            </div>
        }
    }
}

fn render_message(message: &ChatMessage) -> Html {
    let side = match message.role {
        Role::User => "user",
        Role::Model => "model",
    };
    html! {
        <div class={classes!("chat-row", side)}>
            <div class={classes!("chat-bubble", message.is_error.then(|| "error"))}>
                { &message.text }
            </div>
        </div>
    }
}
