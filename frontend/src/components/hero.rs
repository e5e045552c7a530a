use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::motion::FADE_UP;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub eyebrow: Vec<&'static str>,
    pub title: AttrValue,
    pub tagline: AttrValue,
    pub marquee: Vec<&'static str>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let eyebrow = props.eyebrow.iter().enumerate().map(|(i, item)| {
        html! {
            <>
                if i > 0 {
                    <span class="eyebrow-dot"></span>
                }
                <span>{ *item }</span>
            </>
        }
    });

    // Two identical strips so the -50% translate loops seamlessly.
    let strip = |key: usize| {
        html! {
            <div key={key} class="marquee-strip">
                { for (0..4).map(|_| html! {
                    <span class="marquee-phrase">
                        { for props.marquee.iter().map(|phrase| html! {
                            <>{ *phrase }<span class="marquee-dot">{ "●" }</span></>
                        }) }
                    </span>
                }) }
            </div>
        }
    };

    html! {
        <header class="hero">
            <div class="hero-content">
                <FadeIn motion={FADE_UP.delay(200)} class={classes!("hero-eyebrow")}>
                    { for eyebrow }
                </FadeIn>
                <h1 class="gradient-text hero-title">{ props.title.clone() }</h1>
                <FadeIn motion={FADE_UP.delay(800)} class={classes!("hero-tagline")}>
                    <p>{ props.tagline.clone() }</p>
                </FadeIn>
            </div>

            <div class="marquee">
                <div class="marquee-track">
                    { strip(0) }
                    { strip(1) }
                </div>
            </div>
        </header>
    }
}
