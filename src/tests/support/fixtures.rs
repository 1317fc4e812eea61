// src/tests/support/fixtures.rs

use crate::modules::records::{Message, MessageStatus, Profile, Project, Skill, Testimonial};

pub fn sample_profile(id: &str) -> Profile {
    Profile {
        id: Some(id.to_string()),
        name: "Ada Lovelace".to_string(),
        title: "Full Stack Developer".to_string(),
        bio: "Crafting digital experiences".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+1 234 567 890".to_string(),
        location: "London".to_string(),
        github_url: Some("https://github.com/ada".to_string()),
        ..Default::default()
    }
}

pub fn sample_skill(id: &str, name: &str, category: &str) -> Skill {
    Skill {
        id: Some(id.to_string()),
        name: name.to_string(),
        category: category.to_string(),
        level: 80,
        icon: None,
        order: 0,
    }
}

pub fn sample_project(id: &str, title: &str, category: &str) -> Project {
    Project {
        id: Some(id.to_string()),
        title: title.to_string(),
        description: Some("A project".to_string()),
        category: category.to_string(),
        technologies: vec!["Rust".to_string()],
        ..Default::default()
    }
}

pub fn sample_testimonial(id: &str, name: &str) -> Testimonial {
    Testimonial {
        id: Some(id.to_string()),
        name: name.to_string(),
        position: "CTO".to_string(),
        company: Some("Acme".to_string()),
        content: "Outstanding work".to_string(),
        rating: 5,
        ..Default::default()
    }
}

pub fn sample_message(id: &str, read: bool) -> Message {
    Message {
        id: Some(id.to_string()),
        name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        subject: "Project inquiry".to_string(),
        message: "I would like to talk about a project".to_string(),
        read,
        status: if read {
            MessageStatus::Read
        } else {
            MessageStatus::New
        },
        created_at: None,
    }
}
