// src/pages/admin.rs
//
// The admin console: every resource kind behind the same cycle — mutate
// through the table store, toast the outcome, force a re-fetch, re-render.

use crate::modules::cache::CacheSlot;
use crate::modules::controller::messages::{mark_as_read, unread_count};
use crate::modules::controller::{delete_record, refresh_slot, ConfirmPrompt, Editor};
use crate::modules::notify::{Notifier, ToastLevel};
use crate::modules::records::{Message, Profile, Project, Resource, Skill, Testimonial};
use crate::modules::render::views;
use crate::modules::render::{Action, Filter, Node, View};
use crate::modules::table::application::ports::outgoing::{ListQuery, TableStore};

pub struct AdminPage<S> {
    store: S,
    pub profile: CacheSlot<Profile>,
    pub skills: CacheSlot<Skill>,
    pub projects: CacheSlot<Project>,
    pub testimonials: CacheSlot<Testimonial>,
    pub messages: CacheSlot<Message>,
    pub skill_editor: Editor<Skill>,
    pub project_editor: Editor<Project>,
    pub testimonial_editor: Editor<Testimonial>,
    message_filter: Filter,
}

impl<S> AdminPage<S>
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
            messages: CacheSlot::new(),
            skill_editor: Editor::new("Skill"),
            project_editor: Editor::new("Project"),
            testimonial_editor: Editor::new("Testimonial"),
            message_filter: Filter::All,
        }
    }

    /// Initial load: all five fetches fired concurrently, each into its own
    /// slot.
    pub async fn load_all(&mut self) {
        let (profile, skills, projects, testimonials, messages) = tokio::join!(
            TableStore::<Profile>::list(&self.store, ListQuery::single()),
            TableStore::<Skill>::list(&self.store, ListQuery::sorted_by_order()),
            TableStore::<Project>::list(&self.store, ListQuery::sorted_by_order()),
            TableStore::<Testimonial>::list(&self.store, ListQuery::sorted_by_order()),
            TableStore::<Message>::list(
                &self.store,
                ListQuery {
                    limit: Some(100),
                    ..Default::default()
                }
            ),
        );

        apply_list(&mut self.profile, profile);
        apply_list(&mut self.skills, skills);
        apply_list(&mut self.projects, projects);
        apply_list(&mut self.testimonials, testimonials);
        apply_list(&mut self.messages, messages);
    }

    //
    // ── Profile (form, not modal: PUT when persisted, POST otherwise) ──
    //

    pub async fn save_profile<N: Notifier>(&mut self, draft: Profile, notifier: &N) -> bool {
        let result = match draft.id() {
            Some(id) => {
                let id = id.to_string();
                TableStore::<Profile>::update(&self.store, &id, &draft).await
            }
            None => TableStore::<Profile>::create(&self.store, &draft).await,
        };

        match result {
            Ok(_) => {
                notifier.notify(ToastLevel::Success, "Profile saved successfully!");
                refresh_slot(&mut self.profile, &self.store, ListQuery::single()).await;
                true
            }
            Err(error) => {
                tracing::warn!(%error, "profile save failed");
                notifier.notify(ToastLevel::Error, "Failed to save profile");
                false
            }
        }
    }

    //
    // ── Skills ──
    //

    pub fn new_skill(&mut self) {
        self.skill_editor.open_blank();
    }

    pub fn edit_skill(&mut self, id: &str) {
        if let Some(skill) = self.skills.records().iter().find(|s| s.id() == Some(id)) {
            self.skill_editor.open(skill.clone());
        }
    }

    pub async fn submit_skill<N: Notifier>(&mut self, notifier: &N) -> bool {
        if self.skill_editor.submit(&self.store, notifier).await {
            refresh_slot(&mut self.skills, &self.store, ListQuery::sorted_by_order()).await;
            true
        } else {
            false
        }
    }

    pub async fn delete_skill<C: ConfirmPrompt, N: Notifier>(
        &mut self,
        id: &str,
        prompt: &C,
        notifier: &N,
    ) -> bool {
        if delete_record::<Skill, _, _, _>(&self.store, id, "skill", prompt, notifier).await {
            refresh_slot(&mut self.skills, &self.store, ListQuery::sorted_by_order()).await;
            true
        } else {
            false
        }
    }

    //
    // ── Projects ──
    //

    pub fn new_project(&mut self) {
        self.project_editor.open_blank();
    }

    pub fn edit_project(&mut self, id: &str) {
        if let Some(project) = self.projects.records().iter().find(|p| p.id() == Some(id)) {
            self.project_editor.open(project.clone());
        }
    }

    pub async fn submit_project<N: Notifier>(&mut self, notifier: &N) -> bool {
        if self.project_editor.submit(&self.store, notifier).await {
            refresh_slot(&mut self.projects, &self.store, ListQuery::sorted_by_order()).await;
            true
        } else {
            false
        }
    }

    pub async fn delete_project<C: ConfirmPrompt, N: Notifier>(
        &mut self,
        id: &str,
        prompt: &C,
        notifier: &N,
    ) -> bool {
        if delete_record::<Project, _, _, _>(&self.store, id, "project", prompt, notifier).await {
            refresh_slot(&mut self.projects, &self.store, ListQuery::sorted_by_order()).await;
            true
        } else {
            false
        }
    }

    //
    // ── Testimonials ──
    //

    pub fn new_testimonial(&mut self) {
        self.testimonial_editor.open_blank();
    }

    pub fn edit_testimonial(&mut self, id: &str) {
        if let Some(testimonial) = self
            .testimonials
            .records()
            .iter()
            .find(|t| t.id() == Some(id))
        {
            self.testimonial_editor.open(testimonial.clone());
        }
    }

    pub async fn submit_testimonial<N: Notifier>(&mut self, notifier: &N) -> bool {
        if self.testimonial_editor.submit(&self.store, notifier).await {
            refresh_slot(
                &mut self.testimonials,
                &self.store,
                ListQuery::sorted_by_order(),
            )
            .await;
            true
        } else {
            false
        }
    }

    pub async fn delete_testimonial<C: ConfirmPrompt, N: Notifier>(
        &mut self,
        id: &str,
        prompt: &C,
        notifier: &N,
    ) -> bool {
        if delete_record::<Testimonial, _, _, _>(
            &self.store,
            id,
            "testimonial",
            prompt,
            notifier,
        )
        .await
        {
            refresh_slot(
                &mut self.testimonials,
                &self.store,
                ListQuery::sorted_by_order(),
            )
            .await;
            true
        } else {
            false
        }
    }

    //
    // ── Messages ──
    //

    pub fn set_message_filter(&mut self, filter: Filter) {
        self.message_filter = filter;
    }

    pub fn message_filter(&self) -> &Filter {
        &self.message_filter
    }

    pub fn unread_count(&self) -> usize {
        unread_count(self.messages.records())
    }

    pub async fn mark_message_read<N: Notifier>(&mut self, id: &str, notifier: &N) -> bool {
        if mark_as_read(&self.store, notifier, id).await {
            self.refresh_messages().await;
            true
        } else {
            false
        }
    }

    pub async fn delete_message<C: ConfirmPrompt, N: Notifier>(
        &mut self,
        id: &str,
        prompt: &C,
        notifier: &N,
    ) -> bool {
        if delete_record::<Message, _, _, _>(&self.store, id, "message", prompt, notifier).await {
            self.refresh_messages().await;
            true
        } else {
            false
        }
    }

    async fn refresh_messages(&mut self) {
        refresh_slot(
            &mut self.messages,
            &self.store,
            ListQuery {
                limit: Some(100),
                ..Default::default()
            },
        )
        .await;
    }

    //
    // ── Dispatch & render ──
    //

    /// Route an action from the binding table. Form submissions (profile,
    /// modal editors) carry payloads and go through their typed methods.
    pub async fn dispatch<C: ConfirmPrompt, N: Notifier>(
        &mut self,
        action: Action,
        prompt: &C,
        notifier: &N,
    ) {
        match action {
            Action::NewSkill => self.new_skill(),
            Action::EditSkill(id) => self.edit_skill(&id),
            Action::DeleteSkill(id) => {
                self.delete_skill(&id, prompt, notifier).await;
            }
            Action::NewProject => self.new_project(),
            Action::EditProject(id) => self.edit_project(&id),
            Action::DeleteProject(id) => {
                self.delete_project(&id, prompt, notifier).await;
            }
            Action::NewTestimonial => self.new_testimonial(),
            Action::EditTestimonial(id) => self.edit_testimonial(&id),
            Action::DeleteTestimonial(id) => {
                self.delete_testimonial(&id, prompt, notifier).await;
            }
            Action::MarkMessageRead(id) => {
                self.mark_message_read(&id, notifier).await;
            }
            Action::DeleteMessage(id) => {
                self.delete_message(&id, prompt, notifier).await;
            }
            Action::SetMessageFilter(filter) => self.set_message_filter(filter),
            Action::CloseModal => {
                self.skill_editor.cancel();
                self.project_editor.cancel();
                self.testimonial_editor.cancel();
            }
            other => tracing::debug!(?other, "action not handled by the admin console"),
        }
    }

    pub fn render_skills(&self) -> View {
        views::skills_table(self.skills.records())
    }

    pub fn render_projects(&self) -> View {
        views::admin_projects_grid(self.projects.records())
    }

    pub fn render_testimonials(&self) -> View {
        views::admin_testimonials_grid(self.testimonials.records())
    }

    pub fn render_messages(&self) -> View {
        views::messages_list(self.messages.records(), &self.message_filter)
    }

    pub fn render_badge(&self) -> Node {
        views::unread_badge(self.unread_count())
    }
}

fn apply_list<T: Resource>(
    slot: &mut CacheSlot<T>,
    result: Result<
        crate::modules::table::application::ports::outgoing::Page<T>,
        crate::modules::table::application::ports::outgoing::TableStoreError,
    >,
) {
    match result {
        Ok(page) => slot.replace(page.data),
        Err(error) => {
            tracing::warn!(table = T::TABLE, %error, "list fetch failed, degrading to empty");
            slot.mark_failed();
        }
    }
}
