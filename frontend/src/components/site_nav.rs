use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

/// Smooth-scrolls the element with `id` into view.
pub fn scroll_to_section(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        warn!("no section with id {}", id);
        return;
    };
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    options.block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct SiteNavProps {
    pub brand: AttrValue,
    /// (label, section id) pairs.
    pub links: Vec<(&'static str, &'static str)>,
    pub cta_label: AttrValue,
    pub cta_target: &'static str,
}

#[function_component(SiteNav)]
pub fn site_nav(props: &SiteNavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = window();
                let scroll_callback = window.clone().map(|window| {
                    Closure::wrap(Box::new(move || {
                        let scroll_y = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_y > 80.0);
                    }) as Box<dyn FnMut()>)
                });

                if let (Some(window), Some(callback)) = (&window, &scroll_callback) {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let (Some(window), Some(callback)) = (window, scroll_callback) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let go_to = |target: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(target);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <span class="nav-logo">{ props.brand.clone() }</span>

                <button class="burger-menu" onclick={toggle_menu}>
                    if *menu_open {
                        { "✕" }
                    } else {
                        <span></span>
                        <span></span>
                        <span></span>
                    }
                </button>

                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for props.links.iter().map(|(label, target)| html! {
                        <a href={format!("#{}", target)} class="nav-link" onclick={go_to(*target)}>
                            { *label }
                        </a>
                    }) }
                    <button class="nav-cta" onclick={go_to(props.cta_target)}>
                        { props.cta_label.clone() }
                    </button>
                </div>
            </div>
        </nav>
    }
}
