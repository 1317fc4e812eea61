pub mod entities;

pub use entities::{
    Faceted, Message, MessageStatus, Profile, Project, Resource, Skill, Testimonial,
};
