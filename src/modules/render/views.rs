// src/modules/render/views.rs
//
// Pure per-resource view functions. Each maps (collection, active filter) to
// a `View`; records render in the order the backend returned them.

use crate::modules::records::{Message, Profile, Project, Skill, Testimonial};
use crate::modules::render::bindings::{Action, Binding, View};
use crate::modules::render::markup::{el, Node};
use crate::modules::render::{apply_filter, Filter};

const FALLBACK_SKILL_ICON: &str = "fas fa-code";

/// One generic empty-state block per resource type; shown both for an empty
/// collection and for an empty-after-filter result.
fn empty_state(icon: &'static str, title: &str, hint: &str) -> Node {
    el("div")
        .class("empty-state")
        .child(el("i").class(icon).build())
        .child(el("h3").text(title).build())
        .child(el("p").text(hint).build())
        .build()
}

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

pub fn social_links(profile: &Profile) -> Node {
    let socials = [
        (&profile.github_url, "fab fa-github"),
        (&profile.linkedin_url, "fab fa-linkedin"),
        (&profile.twitter_url, "fab fa-twitter"),
        (&profile.instagram_url, "fab fa-instagram"),
    ];

    el("div")
        .class("social-links")
        .children(socials.iter().filter_map(|(url, icon)| {
            url.as_ref().map(|url| {
                el("a")
                    .attr("href", url.clone())
                    .attr("target", "_blank")
                    .child(el("i").class(*icon).build())
                    .build()
            })
        }))
        .build()
}

pub fn profile_hero(profile: &Profile) -> Node {
    let mut hero = el("section")
        .id("hero")
        .child(el("h1").class("hero-name").text(profile.name.clone()).build())
        .child(el("p").class("hero-title").text(profile.title.clone()).build())
        .child(
            el("p")
                .class("hero-description")
                .text(profile.bio.clone())
                .build(),
        );

    if let Some(avatar) = &profile.avatar_url {
        hero = hero.child(
            el("img")
                .class("hero-avatar")
                .attr("src", avatar.clone())
                .attr("alt", profile.name.clone())
                .build(),
        );
    }

    hero.child(social_links(profile)).build()
}

pub fn contact_details(profile: &Profile) -> Node {
    el("div")
        .class("contact-details")
        .child(el("p").id("contactEmail").text(profile.email.clone()).build())
        .child(el("p").id("contactPhone").text(profile.phone.clone()).build())
        .child(
            el("p")
                .id("contactLocation")
                .text(profile.location.clone())
                .build(),
        )
        .build()
}

//
// ──────────────────────────────────────────────────────────
// Skills
// ──────────────────────────────────────────────────────────
//

fn skill_card(skill: &Skill) -> Node {
    let icon = skill.icon.as_deref().unwrap_or(FALLBACK_SKILL_ICON);

    el("div")
        .class("skill-card")
        .attr("data-category", skill.category.clone())
        .child(
            el("div")
                .class("skill-icon")
                .child(el("i").class(icon.to_string()).build())
                .build(),
        )
        .child(el("h3").class("skill-name").text(skill.name.clone()).build())
        .child(
            el("div")
                .class("skill-level")
                .text(format!("{}%", skill.level))
                .build(),
        )
        .child(
            el("div")
                .class("skill-progress")
                .child(
                    el("div")
                        .class("skill-progress-bar")
                        .attr("style", format!("width: {}%", skill.level))
                        .build(),
                )
                .build(),
        )
        .build()
}

pub fn skills_grid(skills: &[Skill], filter: &Filter) -> View {
    let visible = apply_filter(skills, filter);

    let markup = if visible.is_empty() {
        el("div")
            .id("skillsGrid")
            .child(empty_state(
                "fas fa-code",
                "No skills yet",
                "Skills will appear here once added",
            ))
            .build()
    } else {
        el("div")
            .id("skillsGrid")
            .children(visible.iter().map(|s| skill_card(s)))
            .build()
    };

    View::new(markup)
}

/// Admin table of skills with per-row edit/delete bindings.
pub fn skills_table(skills: &[Skill]) -> View {
    if skills.is_empty() {
        return View::new(
            el("table")
                .id("skillsTable")
                .child(empty_state(
                    "fas fa-code",
                    "No skills yet",
                    "Click \"Add Skill\" to get started",
                ))
                .build(),
        );
    }

    let mut bindings = Vec::new();
    let rows = skills.iter().map(|skill| {
        let id = skill.id.clone().unwrap_or_default();
        let edit_target = format!("edit-skill-{}", id);
        let delete_target = format!("delete-skill-{}", id);
        bindings.push(Binding::click(edit_target.as_str(), Action::EditSkill(id.clone())));
        bindings.push(Binding::click(delete_target.as_str(), Action::DeleteSkill(id.clone())));

        el("tr")
            .child(el("td").text(skill.name.clone()).build())
            .child(
                el("td")
                    .child(
                        el("span")
                            .class("tech-tag")
                            .text(skill.category.clone())
                            .build(),
                    )
                    .build(),
            )
            .child(el("td").text(format!("{}%", skill.level)).build())
            .child(el("td").text(format!("{}", skill.order)).build())
            .child(
                el("td")
                    .child(el("button").class("icon-btn").id(edit_target).text("Edit").build())
                    .child(
                        el("button")
                            .class("icon-btn delete")
                            .id(delete_target)
                            .text("Delete")
                            .build(),
                    )
                    .build(),
            )
            .build()
    });

    let markup = el("table")
        .id("skillsTable")
        .child(el("tbody").children(rows).build())
        .build();

    View::with_bindings(markup, bindings)
}

//
// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────
//

fn tech_tags(technologies: &[String]) -> Node {
    el("div")
        .class("project-technologies")
        .children(
            technologies
                .iter()
                .map(|tech| el("span").class("tech-tag").text(tech.clone()).build()),
        )
        .build()
}

fn project_card(project: &Project, actions: Option<&mut Vec<Binding>>) -> Node {
    let mut content = el("div")
        .class("project-content")
        .child(
            el("div")
                .class("project-category")
                .text(project.category.clone())
                .build(),
        )
        .child(
            el("h3")
                .class("project-title")
                .text(project.title.clone())
                .build(),
        )
        .child(
            el("p")
                .class("project-description")
                .text(project.description.clone().unwrap_or_default())
                .build(),
        )
        .child(tech_tags(&project.technologies));

    if let Some(bindings) = actions {
        let id = project.id.clone().unwrap_or_default();
        let edit_target = format!("edit-project-{}", id);
        let delete_target = format!("delete-project-{}", id);
        bindings.push(Binding::click(edit_target.as_str(), Action::EditProject(id.clone())));
        bindings.push(Binding::click(delete_target.as_str(), Action::DeleteProject(id)));

        content = content.child(
            el("div")
                .class("card-actions")
                .child(el("button").class("btn btn-sm btn-primary").id(edit_target).text("Edit").build())
                .child(
                    el("button")
                        .class("btn btn-sm btn-danger")
                        .id(delete_target)
                        .text("Delete")
                        .build(),
                )
                .build(),
        );
    }

    let mut links = el("div").class("project-links");
    if let Some(demo) = &project.demo_url {
        links = links.child(
            el("a")
                .class("project-link")
                .attr("href", demo.clone())
                .attr("target", "_blank")
                .text("Demo")
                .build(),
        );
    }
    if let Some(github) = &project.github_url {
        links = links.child(
            el("a")
                .class("project-link")
                .attr("href", github.clone())
                .attr("target", "_blank")
                .text("Code")
                .build(),
        );
    }

    let mut image = el("div").class("project-image");
    if let Some(src) = &project.image_url {
        image = image.child(
            el("img")
                .attr("src", src.clone())
                .attr("alt", project.title.clone())
                .build(),
        );
    }

    el("div")
        .class("project-card")
        .attr("data-category", project.category.clone())
        .child(image.child(links.build()).build())
        .child(content.build())
        .build()
}

fn projects_empty() -> Node {
    el("div")
        .id("projectsGrid")
        .child(empty_state(
            "fas fa-briefcase",
            "No projects yet",
            "Projects will appear here once added",
        ))
        .build()
}

pub fn projects_grid(projects: &[Project], filter: &Filter) -> View {
    let visible = apply_filter(projects, filter);

    if visible.is_empty() {
        return View::new(projects_empty());
    }

    View::new(
        el("div")
            .id("projectsGrid")
            .children(visible.iter().map(|p| project_card(p, None)))
            .build(),
    )
}

/// Admin variant: same cards plus edit/delete bindings, no filter.
pub fn admin_projects_grid(projects: &[Project]) -> View {
    if projects.is_empty() {
        return View::new(projects_empty());
    }

    let mut bindings = Vec::new();
    let cards: Vec<Node> = projects
        .iter()
        .map(|p| project_card(p, Some(&mut bindings)))
        .collect();

    View::with_bindings(el("div").id("projectsGrid").children(cards).build(), bindings)
}

//
// ──────────────────────────────────────────────────────────
// Testimonials
// ──────────────────────────────────────────────────────────
//

fn star_rating(rating: u8) -> Node {
    let rating = rating.clamp(1, 5);
    el("div")
        .class("testimonial-rating")
        .children((1..=5).map(|i| {
            let class = if i <= rating { "fas fa-star" } else { "fas fa-star-o" };
            el("i").class(class).build()
        }))
        .build()
}

fn testimonial_card(testimonial: &Testimonial) -> Node {
    let position = match &testimonial.company {
        Some(company) => format!("{} at {}", testimonial.position, company),
        None => testimonial.position.clone(),
    };

    el("div")
        .class("testimonial-card")
        .child(star_rating(testimonial.rating))
        .child(
            el("p")
                .class("testimonial-content")
                .text(format!("\u{201c}{}\u{201d}", testimonial.content))
                .build(),
        )
        .child(
            el("h4")
                .class("testimonial-name")
                .text(testimonial.name.clone())
                .build(),
        )
        .child(el("p").class("testimonial-position").text(position).build())
        .build()
}

/// Carousel track plus navigation dots; `active` marks the visible slide.
pub fn testimonials_slider(testimonials: &[Testimonial], active: usize) -> View {
    if testimonials.is_empty() {
        return View::new(
            el("div")
                .id("testimonialsSlider")
                .child(empty_state(
                    "fas fa-comments",
                    "No testimonials yet",
                    "Testimonials will appear here once added",
                ))
                .build(),
        );
    }

    let mut bindings = vec![
        Binding::click("testimonialPrev", Action::PrevTestimonial),
        Binding::click("testimonialNext", Action::NextTestimonial),
    ];

    let track = el("div")
        .class("testimonial-track")
        .attr("style", format!("transform: translateX(-{}%)", active * 100))
        .children(testimonials.iter().map(testimonial_card))
        .build();

    let dots = el("div")
        .id("testimonialDots")
        .children(testimonials.iter().enumerate().map(|(index, _)| {
            let target = format!("testimonial-dot-{}", index);
            bindings.push(Binding::click(target.as_str(), Action::GoToTestimonial(index)));
            let class = if index == active { "dot active" } else { "dot" };
            el("span").class(class).id(target).build()
        }))
        .build();

    View::with_bindings(
        el("div")
            .id("testimonialsSlider")
            .child(track)
            .child(dots)
            .build(),
        bindings,
    )
}

/// Admin grid of testimonials with edit/delete bindings.
pub fn admin_testimonials_grid(testimonials: &[Testimonial]) -> View {
    if testimonials.is_empty() {
        return View::new(
            el("div")
                .id("testimonialsGrid")
                .child(empty_state(
                    "fas fa-comments",
                    "No testimonials yet",
                    "Click \"Add Testimonial\" to get started",
                ))
                .build(),
        );
    }

    let mut bindings = Vec::new();
    let cards: Vec<Node> = testimonials
        .iter()
        .map(|testimonial| {
            let id = testimonial.id.clone().unwrap_or_default();
            let edit_target = format!("edit-testimonial-{}", id);
            let delete_target = format!("delete-testimonial-{}", id);
            bindings.push(Binding::click(edit_target.as_str(), Action::EditTestimonial(id.clone())));
            bindings.push(Binding::click(delete_target.as_str(), Action::DeleteTestimonial(id)));

            el("div")
                .class("testimonial-card")
                .child(testimonial_card(testimonial))
                .child(
                    el("div")
                        .class("card-actions")
                        .child(
                            el("button")
                                .class("btn btn-sm btn-primary")
                                .id(edit_target)
                                .text("Edit")
                                .build(),
                        )
                        .child(
                            el("button")
                                .class("btn btn-sm btn-danger")
                                .id(delete_target)
                                .text("Delete")
                                .build(),
                        )
                        .build(),
                )
                .build()
        })
        .collect();

    View::with_bindings(el("div").id("testimonialsGrid").children(cards).build(), bindings)
}

//
// ──────────────────────────────────────────────────────────
// Messages
// ──────────────────────────────────────────────────────────
//

fn message_card(message: &Message, bindings: &mut Vec<Binding>) -> Node {
    let id = message.id.clone().unwrap_or_default();
    let class = if message.read {
        "message-card"
    } else {
        "message-card unread"
    };

    let mut actions = el("div").class("message-actions");
    if !message.read {
        let read_target = format!("mark-read-{}", id);
        bindings.push(Binding::click(read_target.as_str(), Action::MarkMessageRead(id.clone())));
        actions = actions.child(
            el("button")
                .class("btn btn-sm btn-success")
                .id(read_target)
                .text("Mark as Read")
                .build(),
        );
    }
    let delete_target = format!("delete-message-{}", id);
    bindings.push(Binding::click(delete_target.as_str(), Action::DeleteMessage(id)));
    actions = actions.child(
        el("button")
            .class("btn btn-sm btn-danger")
            .id(delete_target)
            .text("Delete")
            .build(),
    );

    let mut meta = el("div").class("message-meta").child(
        el("span")
            .class(format!("status-badge {}", message.status.as_str()))
            .text(message.status.as_str())
            .build(),
    );
    if let Some(created_at) = &message.created_at {
        meta = meta.child(
            el("span")
                .text(created_at.format("%Y-%m-%d").to_string())
                .build(),
        );
    }

    el("div")
        .class(class)
        .child(
            el("div")
                .class("message-header")
                .child(
                    el("div")
                        .class("message-sender")
                        .child(el("h4").text(message.name.clone()).build())
                        .child(el("p").text(message.email.clone()).build())
                        .build(),
                )
                .child(meta.build())
                .build(),
        )
        .child(el("div").class("message-subject").text(message.subject.clone()).build())
        .child(el("div").class("message-content").text(message.message.clone()).build())
        .child(actions.build())
        .build()
}

pub fn messages_list(messages: &[Message], filter: &Filter) -> View {
    let visible = apply_filter(messages, filter);

    if visible.is_empty() {
        return View::new(
            el("div")
                .id("messagesList")
                .child(empty_state(
                    "fas fa-envelope",
                    "No messages",
                    "Your contact messages will appear here",
                ))
                .build(),
        );
    }

    let mut bindings = Vec::new();
    let cards: Vec<Node> = visible
        .iter()
        .map(|m| message_card(m, &mut bindings))
        .collect();

    View::with_bindings(el("div").id("messagesList").children(cards).build(), bindings)
}

pub fn unread_badge(unread_count: usize) -> Node {
    el("span")
        .id("messagesBadge")
        .class("badge")
        .text(unread_count.to_string())
        .build()
}
