use log::{error, info};
use web_sys::window;
use yew::prelude::*;

use crate::catalog::{Course, COURSES};
use crate::chat::persona::LUMI;
use crate::components::catalog_cards::CourseCard;
use crate::components::chat_widget::ChatWidget;
use crate::components::detail_modal::{DetailModal, GalleryAction, GalleryState};
use crate::components::hero::Hero;
use crate::components::pricing::PlanGrid;
use crate::components::site_nav::{scroll_to_section, SiteNav};
use crate::config;
use crate::enrollment::{enrollment_message, whatsapp_link, Plan};
use crate::gallery::DetailCommand;

const FEATURES: &[(&str, &str, &str)] = &[
    ("🧠", "AI-Native Workflow", "Every lesson integrates modern AI tools to accelerate your creative throughput."),
    ("🧱", "Stacked Projects", "Real-world briefs from top-tier tech companies. No more generic tutorials."),
    ("🎓", "Legacy Mentors", "Direct feedback from architects at OpenAI, Anthropic, and Vercel."),
];

fn open_in_new_tab(url: &str) {
    match window().map(|w| w.open_with_url_and_target(url, "_blank")) {
        Some(Ok(_)) => {}
        Some(Err(e)) => error!("could not open {}: {:?}", url, e),
        None => error!("no window to open {}", url),
    }
}

#[function_component(Academy)]
pub fn academy() -> Html {
    let gallery = use_reducer(|| GalleryState::new(COURSES));
    let intent = use_state(|| None::<&'static Course>);

    let open_course = {
        let dispatcher = gallery.dispatcher();
        Callback::from(move |id: &'static str| dispatcher.dispatch(GalleryAction::Open(id)))
    };

    let on_command = {
        let dispatcher = gallery.dispatcher();
        Callback::from(move |command: DetailCommand| {
            dispatcher.dispatch(GalleryAction::Command(command))
        })
    };

    let on_enroll = {
        let intent = intent.clone();
        Callback::from(move |plan: &'static Plan| {
            let message = enrollment_message(plan.name, *intent);
            info!("opening enrollment link for {}", plan.name);
            open_in_new_tab(&whatsapp_link(config::WHATSAPP_RECIPIENT, &message));
        })
    };

    let modal = match gallery.current() {
        Some(course) => {
            let enroll_now = {
                let intent = intent.clone();
                let dispatcher = gallery.dispatcher();
                Callback::from(move |_: MouseEvent| {
                    intent.set(Some(course));
                    dispatcher.dispatch(GalleryAction::Command(DetailCommand::Close));
                    scroll_to_section("pricing");
                })
            };
            html! {
                <DetailModal
                    entry_id={course.id}
                    image={course.image}
                    title={course.title}
                    on_command={on_command}
                >
                    <div class="detail-meta">
                        <span>{ "⏱ " }{ course.duration }</span>
                        <span>{ "🖥 " }{ course.level.to_string() }</span>
                    </div>
                    <h3 class="detail-title">{ course.title }</h3>
                    <p class="detail-subtitle">{ format!("With {}", course.instructor) }</p>
                    <div class="detail-rule"></div>
                    <p class="detail-description">{ course.description }</p>
                    <div class="detail-actions">
                        <button class="detail-cta" onclick={enroll_now}>{ "Enroll Now" }</button>
                        <span class="detail-rating">{ format!("★ {:.1}", course.rating) }</span>
                    </div>
                </DetailModal>
            }
        }
        None => html! {},
    };

    html! {
        <div class="site academy">
            <ChatWidget persona={&LUMI} />

            <SiteNav
                brand="LUMINA ACADEMY"
                links={vec![("Courses", "courses"), ("Learning", "learning"), ("Pricing", "pricing")]}
                cta_label="Enroll Now"
                cta_target="pricing"
            />

            <Hero
                eyebrow={vec!["Future-Ready Skills", "Fall Cohort 2025"]}
                title="ACADEMY"
                tagline="Master the crafts that define tomorrow. Immersive learning led by the world's leading digital architects."
                marquee={vec!["CODE YOUR FUTURE", "DESIGN FOR IMPACT", "MASTER THE MACHINE"]}
            />

            <section id="courses" class="catalog-section">
                <div class="section-heading">
                    <h2>{ "Active" }<br /><span class="gradient-text">{ "Curriculum" }</span></h2>
                </div>
                <div class="card-grid">
                    { for COURSES.iter().map(|course| html! {
                        <CourseCard key={course.id} {course} onclick={open_course.clone()} />
                    }) }
                </div>
            </section>

            <section id="learning" class="feature-section">
                <div class="feature-copy">
                    <h2>{ "Deep" }<br /><span class="gradient-text">{ "IMMERSION" }</span></h2>
                    <p>{ "Lumina Academy isn't just about watching videos. It's about high-fidelity practice, direct industry access, and building a portfolio that commands attention." }</p>
                    <div class="feature-list">
                        { for FEATURES.iter().map(|(icon, title, desc)| html! {
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
                        src="https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?q=80&w=1000&auto=format&fit=crop"
                        alt="High tech classroom"
                    />
                    <span class="feature-caption">{ "Future Campus" }</span>
                </div>
            </section>

            <PlanGrid
                intent={intent.map(|course| AttrValue::from(course.title))}
                {on_enroll}
            />

            <footer class="site-footer">
                <div>
                    <div class="footer-brand">{ "LUMINA ACADEMY" }</div>
                    <p>{ "Empowering the next generation of digital pioneers through immersive technical education." }</p>
                </div>
                <div class="footer-links">
                    <a href="#">{ "Twitter" }</a>
                    <a href="#">{ "Discord" }</a>
                    <a href="#">{ "LinkedIn" }</a>
                </div>
            </footer>

            { modal }
        </div>
    }
}
