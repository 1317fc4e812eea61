// src/pages/site.rs
//
// The public portfolio page: one controller owning the cache slots, transient
// UI state and animation state, wired to a table store.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::modules::animation::{CarouselState, TypingState};
use crate::modules::cache::CacheSlot;
use crate::modules::controller::Pager;
use crate::modules::notify::{Notifier, ToastLevel};
use crate::modules::records::{
    Faceted, Message, MessageStatus, Profile, Project, Skill, Testimonial,
};
use crate::modules::render::views;
use crate::modules::render::{el, Action, Binding, Filter, Node, View};
use crate::modules::table::application::ports::outgoing::{ListQuery, TableStore};
use crate::modules::timer::{spawn_cancellable, spawn_periodic, TaskHandle};

const PROJECTS_PAGE_SIZE: u32 = 6;
const CAROUSEL_PERIOD: Duration = Duration::from_secs(8);

fn default_typing_texts() -> Vec<String> {
    [
        "Full Stack Developer",
        "Web Designer",
        "UI/UX Enthusiast",
        "Problem Solver",
        "Tech Innovator",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Payload of the public contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub struct SitePage<S> {
    store: S,
    pub profile: CacheSlot<Profile>,
    pub skills: CacheSlot<Skill>,
    pub projects: CacheSlot<Project>,
    pub testimonials: CacheSlot<Testimonial>,
    skill_filter: Filter,
    project_filter: Filter,
    pager: Pager,
    carousel: Arc<Mutex<CarouselState>>,
    typing: Arc<Mutex<TypingState>>,
    contact_submitting: bool,
}

impl<S> SitePage<S>
where
    S: TableStore<Profile>
        + TableStore<Skill>
        + TableStore<Project>
        + TableStore<Testimonial>
        + TableStore<Message>,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            profile: CacheSlot::new(),
            skills: CacheSlot::new(),
            projects: CacheSlot::new(),
            testimonials: CacheSlot::new(),
            skill_filter: Filter::All,
            project_filter: Filter::All,
            pager: Pager::new(PROJECTS_PAGE_SIZE),
            carousel: Arc::new(Mutex::new(CarouselState::new())),
            typing: Arc::new(Mutex::new(TypingState::new(default_typing_texts()))),
            contact_submitting: false,
        }
    }

    /// Initial load: fire all fetches, await all. Each result lands in its
    /// own slot, so completion order does not matter.
    pub async fn load_all(&mut self) {
        let projects_query = self.pager.first_query();
        let (profile, skills, projects, testimonials) = tokio::join!(
            TableStore::<Profile>::list(&self.store, ListQuery::single()),
            TableStore::<Skill>::list(&self.store, ListQuery::sorted_by_order()),
            TableStore::<Project>::list(&self.store, projects_query),
            TableStore::<Testimonial>::list(&self.store, ListQuery::sorted_by_order()),
        );

        match profile {
            Ok(page) => self.profile.replace(page.data),
            Err(error) => {
                tracing::warn!(%error, "profile fetch failed, degrading to empty");
                self.profile.mark_failed();
            }
        }
        match skills {
            Ok(page) => self.skills.replace(page.data),
            Err(error) => {
                tracing::warn!(%error, "skills fetch failed, degrading to empty");
                self.skills.mark_failed();
            }
        }
        self.pager.apply_first(&mut self.projects, projects);
        match testimonials {
            Ok(page) => self.testimonials.replace(page.data),
            Err(error) => {
                tracing::warn!(%error, "testimonials fetch failed, degrading to empty");
                self.testimonials.mark_failed();
            }
        }

        self.carousel
            .lock()
            .expect("carousel lock poisoned")
            .set_len(self.testimonials.len());
    }

    //
    // ── Filters & pagination (local state, no network except load_more) ──
    //

    pub fn set_skill_filter(&mut self, filter: Filter) {
        self.skill_filter = filter;
    }

    pub fn set_project_filter(&mut self, filter: Filter) {
        self.project_filter = filter;
    }

    pub async fn load_more(&mut self) {
        self.pager.load_more(&mut self.projects, &self.store).await;
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    //
    // ── Testimonial carousel ──
    //

    pub fn carousel_index(&self) -> usize {
        self.carousel.lock().expect("carousel lock poisoned").current()
    }

    pub fn next_testimonial(&self) {
        self.carousel.lock().expect("carousel lock poisoned").next();
    }

    pub fn prev_testimonial(&self) {
        self.carousel.lock().expect("carousel lock poisoned").prev();
    }

    pub fn go_to_testimonial(&self, index: usize) {
        self.carousel.lock().expect("carousel lock poisoned").go_to(index);
    }

    /// Auto-rotate task; the returned handle owns its lifetime and aborts the
    /// task when dropped with the view.
    pub fn start_auto_rotate(&self) -> TaskHandle {
        let carousel = Arc::clone(&self.carousel);
        spawn_periodic(CAROUSEL_PERIOD, move || {
            carousel.lock().expect("carousel lock poisoned").rotate();
        })
    }

    //
    // ── Typing animation ──
    //

    pub fn typing_visible(&self) -> String {
        self.typing.lock().expect("typing lock poisoned").visible()
    }

    /// One animation step; returns the delay until the next.
    pub fn typing_step(&self) -> Duration {
        self.typing.lock().expect("typing lock poisoned").step()
    }

    /// Self-rescheduling typing loop; each step picks its own delay.
    pub fn start_typing(&self) -> TaskHandle {
        let typing = Arc::clone(&self.typing);
        spawn_cancellable(async move {
            loop {
                let delay = typing.lock().expect("typing lock poisoned").step();
                tokio::time::sleep(delay).await;
            }
        })
    }

    //
    // ── Contact form ──
    //

    pub fn contact_submitting(&self) -> bool {
        self.contact_submitting
    }

    pub async fn submit_contact<N: Notifier>(&mut self, form: ContactForm, notifier: &N) -> bool {
        self.contact_submitting = true;
        let message = Message {
            id: None,
            name: form.name,
            email: form.email,
            subject: form.subject,
            message: form.message,
            read: false,
            status: MessageStatus::New,
            created_at: None,
        };

        let result = TableStore::<Message>::create(&self.store, &message).await;
        self.contact_submitting = false;

        match result {
            Ok(_) => {
                notifier.notify(
                    ToastLevel::Success,
                    "Thank you! Your message has been sent successfully.",
                );
                true
            }
            Err(error) => {
                tracing::warn!(%error, "contact submit failed");
                notifier.notify(
                    ToastLevel::Error,
                    "Oops! Something went wrong. Please try again.",
                );
                false
            }
        }
    }

    //
    // ── Dispatch & render ──
    //

    /// Route an action from the binding table. Form submissions carry
    /// payloads and go through their typed methods instead.
    pub async fn dispatch(&mut self, action: Action) {
        match action {
            Action::SetSkillFilter(filter) => self.set_skill_filter(filter),
            Action::SetProjectFilter(filter) => self.set_project_filter(filter),
            Action::LoadMoreProjects => self.load_more().await,
            Action::PrevTestimonial => self.prev_testimonial(),
            Action::NextTestimonial => self.next_testimonial(),
            Action::GoToTestimonial(index) => self.go_to_testimonial(index),
            other => tracing::debug!(?other, "action not handled by the public page"),
        }
    }

    pub fn render(&self) -> View {
        let mut children = Vec::new();
        let mut bindings = Vec::new();

        if let Some(profile) = self.profile.first() {
            children.push(views::profile_hero(profile));
        }

        let (skill_bar, skill_bar_bindings) = filter_bar(
            "skill-filter",
            &distinct_facets(self.skills.records()),
            &self.skill_filter,
            Action::SetSkillFilter,
        );
        children.push(skill_bar);
        bindings.extend(skill_bar_bindings);

        let skills = views::skills_grid(self.skills.records(), &self.skill_filter);
        children.push(skills.markup);
        bindings.extend(skills.bindings);

        let (project_bar, project_bar_bindings) = filter_bar(
            "project-filter",
            &distinct_facets(self.projects.records()),
            &self.project_filter,
            Action::SetProjectFilter,
        );
        children.push(project_bar);
        bindings.extend(project_bar_bindings);

        let projects = views::projects_grid(self.projects.records(), &self.project_filter);
        children.push(projects.markup);
        bindings.extend(projects.bindings);

        if self.pager.has_more(self.projects.len()) {
            children.push(
                el("button")
                    .id("loadMoreProjects")
                    .class("btn btn-outline")
                    .text("Load More")
                    .build(),
            );
            bindings.push(Binding::click("loadMoreProjects", Action::LoadMoreProjects));
        }

        let testimonials =
            views::testimonials_slider(self.testimonials.records(), self.carousel_index());
        children.push(testimonials.markup);
        bindings.extend(testimonials.bindings);

        if let Some(profile) = self.profile.first() {
            children.push(views::contact_details(profile));
        }
        children.push(
            el("form")
                .id("contactForm")
                .attr("data-submitting", self.contact_submitting.to_string())
                .build(),
        );
        bindings.push(Binding::submit("contactForm", Action::SubmitContact));

        View::with_bindings(el("main").id("site").children(children).build(), bindings)
    }
}

/// Distinct facets in first-seen (backend) order, prefixed by "all".
fn distinct_facets<T: Faceted>(records: &[T]) -> Vec<String> {
    let mut facets: Vec<String> = Vec::new();
    for record in records {
        if !facets.iter().any(|f| f == record.facet()) {
            facets.push(record.facet().to_string());
        }
    }
    facets
}

fn filter_bar(
    prefix: &str,
    facets: &[String],
    active: &Filter,
    to_action: impl Fn(Filter) -> Action,
) -> (Node, Vec<Binding>) {
    let mut bindings = Vec::new();
    let mut bar = el("div").class("filter-buttons");

    let all_target = format!("{}-all", prefix);
    let all_class = if *active == Filter::All {
        "filter-btn active"
    } else {
        "filter-btn"
    };
    bar = bar.child(el("button").class(all_class).id(all_target.as_str()).text("All").build());
    bindings.push(Binding::click(all_target, to_action(Filter::All)));

    for facet in facets {
        let target = format!("{}-{}", prefix, facet);
        let class = if active.matches(facet) && *active != Filter::All {
            "filter-btn active"
        } else {
            "filter-btn"
        };
        bar = bar.child(el("button").class(class).id(target.as_str()).text(facet.clone()).build());
        bindings.push(Binding::click(target, to_action(Filter::Only(facet.clone()))));
    }

    (bar.build(), bindings)
}
