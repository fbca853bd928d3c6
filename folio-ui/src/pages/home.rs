//! Home Page
//!
//! Profile hero, project cards, learning journey, career stations and
//! contact links.

use chrono::Datelike;
use folio::view::{
    home::{STATIONS_HEADING, SKILLS_HEADING},
    labels::CASE_STUDIES_BUTTON,
    HomeView, NAV_ANCHORS,
};
use leptos::*;

use crate::components::{Badge, Nav, ProjectCard, Section};
use crate::state::use_site_state;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_site_state();
    let home = HomeView::new(&state.portfolio);
    let site = home.site;
    let profile = site.profile.clone();

    let [projects, learning, about, contact] = NAV_ANCHORS;

    let cards = home
        .cards
        .iter()
        .map(|card| view! { <ProjectCard record=card.record.clone() href=card.href.clone() /> })
        .collect_view();

    let timeline = site
        .learning
        .iter()
        .map(|entry| view! {
            <li class="mb-8 ms-4">
                <time class="mb-1 text-sm font-medium text-muted">{entry.date.clone()}</time>
                <h3 class="text-base md:text-lg font-semibold">{entry.title.clone()}</h3>
                <p class="text-sm md:text-base text-muted">{entry.details.clone()}</p>
            </li>
        })
        .collect_view();

    let stations = site
        .experience
        .iter()
        .map(|station| view! {
            <li class="flex items-center gap-2">
                <span class="w-2 h-2 rounded-full bg-primary"></span>
                <span class="font-medium">{station.role.clone()}</span>
                <span class="text-muted">"— "{station.place.clone()}</span>
            </li>
        })
        .collect_view();

    let skills = site
        .skills
        .iter()
        .map(|skill| view! { <Badge label=skill.clone() /> })
        .collect_view();

    let contact_links = home
        .contact_links()
        .into_iter()
        .map(|link| view! {
            <a href=link.url.to_string() target="_blank" rel="noreferrer"
                class="px-4 py-2 rounded-lg border hover:bg-muted">
                {link.label}
            </a>
        })
        .collect_view();

    let notice = site.notice.clone();
    let skills_note = site.skills_note.clone();
    let footer = home.footer_line(chrono::Local::now().year());
    let github = profile.links.github.clone();

    view! {
        <Nav />

        // Hero
        <section id="home" class="max-w-6xl mx-auto px-4 md:px-6 py-14">
            <h1 class="text-3xl md:text-5xl font-extrabold tracking-tight">{profile.title}</h1>
            <p class="mt-2 text-lg md:text-xl font-medium">{profile.subtitle}</p>
            <p class="mt-4 text-base md:text-lg text-muted max-w-3xl">{profile.tagline}</p>
            <div class="mt-6 flex flex-wrap gap-3">
                <a href=projects.href() class="px-4 py-2 rounded-lg bg-primary text-white">
                    {CASE_STUDIES_BUTTON}
                </a>
                {github.map(|url| view! {
                    <a href=url target="_blank" rel="noreferrer" class="px-4 py-2 rounded-lg border">
                        "GitHub"
                    </a>
                })}
            </div>
        </section>

        <Section id=projects.id heading=projects.label>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">{cards}</div>
            {notice.map(|notice| view! {
                <p class="mt-4 text-sm text-muted">{notice}</p>
            })}
        </Section>

        <Section id=learning.id heading=learning.label>
            <ol class="relative border-s ps-6">{timeline}</ol>
        </Section>

        <Section id=about.id heading=about.label>
            <div class="grid md:grid-cols-2 gap-6">
                <div>
                    <h3 class="font-semibold mb-2">{STATIONS_HEADING}</h3>
                    <ul class="space-y-2 text-sm md:text-base">{stations}</ul>
                </div>
                <div>
                    <h3 class="font-semibold mb-2">{SKILLS_HEADING}</h3>
                    <div class="flex flex-wrap gap-2">{skills}</div>
                    {skills_note.map(|note| view! {
                        <p class="text-sm text-muted mt-3">{note}</p>
                    })}
                </div>
            </div>
        </Section>

        <Section id=contact.id heading=contact.label>
            <div class="flex flex-wrap items-center gap-3">{contact_links}</div>
        </Section>

        <footer class="border-t py-8 text-center text-sm text-muted">{footer}</footer>
    }
}
