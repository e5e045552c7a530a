use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::motion::Motion;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    pub motion: Motion,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Renders `motion.initial` on mount and switches to `motion.animate` a frame later.
/// Give it a `key` to replay the animation when the content changes.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let entered = use_state(|| false);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(16, move || entered.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <div class={props.class.clone()} style={props.motion.style(*entered)}>
            { for props.children.iter() }
        </div>
    }
}
