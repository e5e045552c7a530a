use gloo_timers::callback::Timeout;
use log::{info, warn};
use std::rc::Rc;
use yew::prelude::*;

use crate::config;
use crate::tickets::{PurchaseBoard, PurchaseState, DEMO_DISCLOSURE, TIERS};

pub enum TicketAction {
    Begin(&'static str),
    Confirm(&'static str),
}

#[derive(Default, PartialEq)]
pub struct TicketBoard(PurchaseBoard);

impl Reducible for TicketBoard {
    type Action = TicketAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut board = self.0.clone();
        match action {
            TicketAction::Begin(tier) => match board.begin(tier) {
                Ok(()) => info!("ticket purchase started: {}", tier),
                Err(err) => {
                    warn!("ticket purchase rejected: {}", err);
                    return self;
                }
            },
            TicketAction::Confirm(tier) => {
                if !board.confirm(tier) {
                    return self;
                }
                info!("ticket purchase confirmed: {}", tier);
            }
        }
        Rc::new(TicketBoard(board))
    }
}

#[function_component(TicketGrid)]
pub fn ticket_grid() -> Html {
    let board = use_reducer(TicketBoard::default);

    let purchase = |tier: &'static str| {
        let board = board.clone();
        Callback::from(move |_: MouseEvent| {
            if !board.0.is_enabled(tier) {
                return;
            }
            board.dispatch(TicketAction::Begin(tier));
            let dispatcher = board.dispatcher();
            // No cancellation once started; confirming a tier that is no longer pending is a no-op.
            Timeout::new(config::PURCHASE_DELAY_MS, move || {
                dispatcher.dispatch(TicketAction::Confirm(tier));
            })
            .forget();
        })
    };

    html! {
        <section id="tickets" class="pricing-section">
            <div class="section-heading centered">
                <h2 class="ghost-title">{ "TICKETS" }</h2>
                <p class="section-kicker">{ "Secure your orbit" }</p>
            </div>

            <div class="plan-grid">
                { for TIERS.iter().map(|tier| {
                    let state = board.0.state(tier.id);
                    let label = match state {
                        PurchaseState::Idle => "Get Tickets",
                        PurchaseState::Pending => "Processing…",
                        PurchaseState::Confirmed => "Purchased ✓",
                    };
                    html! {
                        <div class={classes!("plan-card", (state == PurchaseState::Confirmed).then(|| "confirmed"))}>
                            <div class="plan-body">
                                <h3>{ tier.name }</h3>
                                <div class="plan-price">{ tier.price }</div>
                                <ul>
                                    { for tier.perks.iter().map(|perk| html! { <li>{ "✦ " }{ *perk }</li> }) }
                                </ul>
                            </div>
                            <button
                                class={classes!("plan-cta", (state == PurchaseState::Pending).then(|| "pending"))}
                                disabled={!board.0.is_enabled(tier.id)}
                                onclick={purchase(tier.id)}
                            >
                                { label }
                            </button>
                            if state == PurchaseState::Confirmed {
                                <p class="demo-disclosure">{ DEMO_DISCLOSURE }</p>
                            }
                        </div>
                    }
                }) }
            </div>

            if let Some(tier) = board.0.confirmed() {
                <p class="purchase-summary">{ format!("You're going! {} reserved for the demo weekend.", tier.name) }</p>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_actions_keep_the_same_board() {
        let board = Rc::new(TicketBoard::default());
        let pending = board.clone().reduce(TicketAction::Begin("vip"));
        assert!(!Rc::ptr_eq(&board, &pending));
        assert_eq!(pending.0.state("vip"), PurchaseState::Pending);

        let rejected = pending.clone().reduce(TicketAction::Begin("day"));
        assert!(Rc::ptr_eq(&pending, &rejected));

        let stray = pending.clone().reduce(TicketAction::Confirm("day"));
        assert!(Rc::ptr_eq(&pending, &stray));

        let confirmed = pending.reduce(TicketAction::Confirm("vip"));
        assert_eq!(confirmed.0.state("vip"), PurchaseState::Confirmed);
        assert!(confirmed.0.is_enabled("day"));
    }
}
