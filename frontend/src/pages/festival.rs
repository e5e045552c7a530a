use yew::prelude::*;

use crate::catalog::LINEUP;
use crate::chat::persona::NOVA;
use crate::components::catalog_cards::ArtistCard;
use crate::components::chat_widget::ChatWidget;
use crate::components::detail_modal::{DetailModal, GalleryAction, GalleryState};
use crate::components::hero::Hero;
use crate::components::site_nav::{scroll_to_section, SiteNav};
use crate::components::ticket_grid::TicketGrid;
use crate::gallery::DetailCommand;

const EXPERIENCE: &[(&str, &str, &str)] = &[
    ("🌌", "Four Stages", "From the Warehouse to the Sunrise Dome, every stage has its own sound system and its own mood."),
    ("🏕️", "Campground", "Wake up five minutes from the Main Stage. Showers, food trucks and quiet zones included."),
    ("🎧", "Silent Afterhours", "When the speakers go dark at 2am, the headphones come on until sunrise."),
];

#[function_component(Festival)]
pub fn festival() -> Html {
    let gallery = use_reducer(|| GalleryState::new(LINEUP));

    let open_artist = {
        let dispatcher = gallery.dispatcher();
        Callback::from(move |id: &'static str| dispatcher.dispatch(GalleryAction::Open(id)))
    };

    let on_command = {
        let dispatcher = gallery.dispatcher();
        Callback::from(move |command: DetailCommand| {
            dispatcher.dispatch(GalleryAction::Command(command))
        })
    };

    let modal = match gallery.current() {
        Some(artist) => {
            let get_tickets = {
                let dispatcher = gallery.dispatcher();
                Callback::from(move |_: MouseEvent| {
                    dispatcher.dispatch(GalleryAction::Command(DetailCommand::Close));
                    scroll_to_section("tickets");
                })
            };
            html! {
                <DetailModal
                    entry_id={artist.id}
                    image={artist.image}
                    title={artist.name}
                    on_command={on_command}
                >
                    <div class="detail-meta">
                        <span>{ "📅 " }{ artist.day_label() }</span>
                        <span>{ "📍 " }{ artist.stage }</span>
                    </div>
                    <h3 class="detail-title">{ artist.name }</h3>
                    <p class="detail-subtitle">{ artist.genre }</p>
                    <div class="detail-rule"></div>
                    <p class="detail-description">{ artist.blurb }</p>
                    <div class="detail-actions">
                        <button class="detail-cta" onclick={get_tickets}>{ "Get Tickets" }</button>
                    </div>
                </DetailModal>
            }
        }
        None => html! {},
    };

    html! {
        <div class="site festival">
            <ChatWidget persona={&NOVA} />

            <SiteNav
                brand="LUMINA FIELDS"
                links={vec![("Lineup", "lineup"), ("Experience", "experience"), ("Tickets", "tickets")]}
                cta_label="Get Tickets"
                cta_target="tickets"
            />

            <Hero
                eyebrow={vec!["Three Nights", "Open Air", "Summer 2025"]}
                title="FIELDS"
                tagline="Three nights of sound under an open sky. Six artists, four stages, one weekend you will keep replaying."
                marquee={vec!["DANCE UNTIL SUNRISE", "FEEL THE BASS", "LOSE THE SIGNAL"]}
            />

            <section id="lineup" class="catalog-section">
                <div class="section-heading">
                    <h2>{ "The" }<br /><span class="gradient-text">{ "Lineup" }</span></h2>
                </div>
                <div class="card-grid">
                    { for LINEUP.iter().map(|artist| html! {
                        <ArtistCard key={artist.id} {artist} onclick={open_artist.clone()} />
                    }) }
                </div>
            </section>

            <section id="experience" class="feature-section">
                <div class="feature-copy">
                    <h2>{ "Beyond" }<br /><span class="gradient-text">{ "THE MUSIC" }</span></h2>
                    <p>{ "Lumina Fields is a weekend-long world built around the music, with art installations, late-night food and a campground under the stars." }</p>
                    <div class="feature-list">
                        { for EXPERIENCE.iter().map(|(icon, title, desc)| html! {
                            <div class="feature">
                                <div class="feature-icon">{ *icon }</div>
                                <div>
                                    <h4>{ *title }</h4>
                                    <p>{ *desc }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="feature-image">
                    <img
                        src="https://images.unsplash.com/photo-1533174072545-7a4b6ad7a6c3?q=80&w=1000&auto=format&fit=crop"
                        alt="Festival crowd at night"
                    />
                    <span class="feature-caption">{ "Main Stage" }</span>
                </div>
            </section>

            <TicketGrid />

            <footer class="site-footer">
                <div>
                    <div class="footer-brand">{ "LUMINA FIELDS" }</div>
                    <p>{ "An open-air music festival. This site is a demo: no tickets are sold." }</p>
                </div>
                <div class="footer-links">
                    <a href="#">{ "Instagram" }</a>
                    <a href="#">{ "Spotify" }</a>
                    <a href="#">{ "Discord" }</a>
                </div>
            </footer>

            { modal }
        </div>
    }
}
