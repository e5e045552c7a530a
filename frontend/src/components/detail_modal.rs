use std::rc::Rc;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::catalog::CatalogEntry;
use crate::gallery::{DetailCommand, DetailView};
use crate::components::fade_in::FadeIn;
use crate::motion::{DETAIL_TEXT, MODAL_CARD};

pub enum GalleryAction {
    Open(&'static str),
    Command(DetailCommand),
}

/// Reducer wrapper so keyboard listeners and timers always see the latest view.
pub struct GalleryState<T: 'static> {
    pub entries: &'static [T],
    pub view: DetailView,
}

impl<T: 'static> GalleryState<T> {
    pub fn new(entries: &'static [T]) -> Self {
        Self {
            entries,
            view: DetailView::closed(),
        }
    }
}

impl<T: CatalogEntry + 'static> GalleryState<T> {
    pub fn current(&self) -> Option<&'static T> {
        self.view.current(self.entries)
    }
}

impl<T: CatalogEntry + 'static> Reducible for GalleryState<T> {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let view = match action {
            GalleryAction::Open(id) => self.view.open(self.entries, id),
            GalleryAction::Command(command) => self.view.apply(command, self.entries.len()),
        };
        Rc::new(Self {
            entries: self.entries,
            view,
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct DetailModalProps {
    /// Identifier of the shown entry, used to replay the enter animation.
    pub entry_id: AttrValue,
    pub image: AttrValue,
    pub title: AttrValue,
    pub on_command: Callback<DetailCommand>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DetailModal)]
pub fn detail_modal(props: &DetailModalProps) -> Html {
    {
        let on_command = props.on_command.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if let Some(command) = DetailCommand::from_key(&e.key()) {
                e.prevent_default();
                on_command.emit(command);
            }
        });
    }

    let emit = |command: DetailCommand| {
        let on_command = props.on_command.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_command.emit(command);
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={emit(DetailCommand::Close)}>
            <FadeIn motion={MODAL_CARD} class={classes!("modal-card")}>
                <div class="modal-inner" onclick={keep_open}>
                    <button class="modal-close" onclick={emit(DetailCommand::Close)}>{ "✕" }</button>

                    <div class="modal-media">
                        <img key={props.entry_id.to_string()} src={props.image.clone()} alt={props.title.clone()} />
                        <button class="modal-nav prev" onclick={emit(DetailCommand::Prev)}>{ "‹" }</button>
                        <button class="modal-nav next" onclick={emit(DetailCommand::Next)}>{ "›" }</button>
                    </div>

                    <FadeIn key={props.entry_id.to_string()} motion={DETAIL_TEXT} class={classes!("modal-body")}>
                        { for props.children.iter() }
                    </FadeIn>
                </div>
            </FadeIn>
        </div>
    }
}
