use yew::prelude::*;

use crate::enrollment::{Plan, PLANS};

#[derive(Properties, PartialEq)]
pub struct PlanGridProps {
    /// Title of the course the visitor picked in the detail modal, if any.
    #[prop_or_default]
    pub intent: Option<AttrValue>,
    pub on_enroll: Callback<&'static Plan>,
}

#[function_component(PlanGrid)]
pub fn plan_grid(props: &PlanGridProps) -> Html {
    html! {
        <section id="pricing" class="pricing-section">
            <div class="section-heading centered">
                <h2 class="ghost-title">{ "ADMISSION" }</h2>
                <p class="section-kicker">
                    { "Choose your trajectory" }
                    if let Some(title) = &props.intent {
                        <span class="intent">{ format!("enrolling for: {}", title) }</span>
                    }
                </p>
            </div>

            <div class="plan-grid">
                { for PLANS.iter().map(|plan| {
                    let onclick = {
                        let on_enroll = props.on_enroll.clone();
                        Callback::from(move |_: MouseEvent| on_enroll.emit(plan))
                    };
                    html! {
                        <div class={classes!("plan-card", plan.accent.class())}>
                            <div class="plan-body">
                                <h3>{ plan.name }</h3>
                                <div class="plan-price">{ plan.price }</div>
                                <ul>
                                    { for plan.perks.iter().map(|perk| html! { <li>{ "⚡ " }{ *perk }</li> }) }
                                </ul>
                            </div>
                            <button class="plan-cta" {onclick}>{ "Apply Now" }</button>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
