use yew::prelude::*;

use crate::catalog::{Artist, Course};

#[derive(Properties, PartialEq)]
pub struct CourseCardProps {
    pub course: &'static Course,
    pub onclick: Callback<&'static str>,
}

#[function_component(CourseCard)]
pub fn course_card(props: &CourseCardProps) -> Html {
    let course = props.course;
    let onclick = {
        let onclick = props.onclick.clone();
        Callback::from(move |_: MouseEvent| onclick.emit(course.id))
    };
    let full = course.full_stars();

    html! {
        <div class="catalog-card course-card" {onclick}>
            <img class="card-image" src={course.image} alt={course.title} />
            <div class="card-overlay">
                <div class="card-top">
                    <span class="card-badge">{ course.category }</span>
                    <span class="card-meta">{ "⏱ " }{ course.duration }</span>
                </div>
                <div class="card-bottom">
                    <div class="card-stars">
                        { for (0..5).map(|i| html! {
                            <span class={classes!("star", (i < full).then(|| "filled"))}>{ "★" }</span>
                        }) }
                    </div>
                    <h3>{ course.title }</h3>
                    <p class="card-reveal">{ format!("Led by {}", course.instructor) }</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ArtistCardProps {
    pub artist: &'static Artist,
    pub onclick: Callback<&'static str>,
}

#[function_component(ArtistCard)]
pub fn artist_card(props: &ArtistCardProps) -> Html {
    let artist = props.artist;
    let onclick = {
        let onclick = props.onclick.clone();
        Callback::from(move |_: MouseEvent| onclick.emit(artist.id))
    };

    html! {
        <div class="catalog-card artist-card" {onclick}>
            <img class="card-image" src={artist.image} alt={artist.name} />
            <div class="card-overlay">
                <div class="card-top">
                    <span class="card-badge">{ artist.day_label() }</span>
                    <span class="card-arrow">{ "↗" }</span>
                </div>
                <div class="card-bottom">
                    <h3>{ artist.name }</h3>
                    <p class="card-reveal">{ artist.genre }</p>
                </div>
            </div>
        </div>
    }
}
