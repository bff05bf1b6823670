use super::{ListFormView, Mutation, Refusal, Resource, SubmitTicket};
use crate::{abstract_trait::DynResourceClient, errors::ClientError};
use tokio::sync::Mutex;
use tracing::{error, info};

/// Fetches the collection. The result is dropped when a mutation was accepted
/// while the request was in flight, since the mutation re-fetches on its own.
pub async fn refresh<R: Resource>(view: &Mutex<ListFormView<R>>, client: &DynResourceClient<R>) {
    let generation = view.lock().await.generation();

    match client.list().await {
        Ok(items) => {
            let mut view = view.lock().await;
            if view.generation() != generation {
                info!("⏭️ Dropping stale {} list", R::NAME);
                return;
            }
            info!("📥 Loaded {} {} rows", items.len(), R::NAME);
            view.load(items);
        }
        Err(e) => error!("❌ Failed to fetch {} list: {e}", R::NAME),
    }
}

/// Returns whether the change was applied.
pub async fn submit<R: Resource>(
    view: &Mutex<ListFormView<R>>,
    client: &DynResourceClient<R>,
    form: R::Form,
) -> Result<bool, Refusal> {
    let ticket = view.lock().await.begin_submit(form)?;

    let outcome = send_submit(client, ticket).await;

    Ok(view.lock().await.finish_submit(outcome))
}

async fn send_submit<R: Resource>(
    client: &DynResourceClient<R>,
    ticket: SubmitTicket<R::Form>,
) -> Result<Vec<R::Record>, ClientError> {
    match ticket.mutation {
        Mutation::Create => client.create(&ticket.form).await?,
        Mutation::Update(id) => client.update(id, &ticket.form).await?,
    }

    client.list().await
}

pub async fn delete<R: Resource>(
    view: &Mutex<ListFormView<R>>,
    client: &DynResourceClient<R>,
    id: i32,
) -> Result<bool, Refusal> {
    let id = view.lock().await.begin_delete(id)?;

    let outcome = client.delete(id).await;

    Ok(view.lock().await.finish_delete(id, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{abstract_trait::ResourceClientTrait, domain::UserForm, view::Users};
    use async_trait::async_trait;
    use shared::domain::responses::UserResponse;
    use std::sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    };
    use tokio::sync::Notify;

    #[derive(Default)]
    struct FakeUsers {
        rows: std::sync::Mutex<Vec<UserResponse>>,
        lists: AtomicUsize,
        writes: AtomicUsize,
        fail: AtomicBool,
        hold_next_list: AtomicBool,
        list_started: Notify,
        release_list: Notify,
    }

    impl FakeUsers {
        fn check(&self) -> Result<(), ClientError> {
            if self.fail.load(Ordering::SeqCst) {
                Err(ClientError::Api {
                    status: 500,
                    message: "Database error".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn record(userid: i32, form: &UserForm) -> UserResponse {
        UserResponse {
            userid,
            username: form.username.clone(),
            user_firstname: form.user_firstname.clone(),
            user_lastname: form.user_lastname.clone(),
            user_email: form.user_email.clone(),
            user_phone: form.user_phone.clone(),
            user_password: form.user_password.clone(),
            user_confirmpassword: form.user_confirmpassword.clone(),
            role: form.role.clone(),
            isactive: form.isactive,
            isdeleted: form.isdeleted,
        }
    }

    #[async_trait]
    impl ResourceClientTrait<Users> for FakeUsers {
        async fn list(&self) -> Result<Vec<UserResponse>, ClientError> {
            self.lists.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            let snapshot = self.rows.lock().unwrap().clone();

            if self.hold_next_list.swap(false, Ordering::SeqCst) {
                self.list_started.notify_one();
                self.release_list.notified().await;
            }

            Ok(snapshot)
        }

        async fn create(&self, form: &UserForm) -> Result<(), ClientError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let id = rows.len() as i32 + 1;
            rows.push(record(id, form));
            Ok(())
        }

        async fn update(&self, id: i32, form: &UserForm) -> Result<(), ClientError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            if let Some(row) = rows.iter_mut().find(|u| u.userid == id) {
                *row = record(id, form);
            }
            Ok(())
        }

        async fn delete(&self, id: i32) -> Result<(), ClientError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            self.rows.lock().unwrap().retain(|u| u.userid != id);
            Ok(())
        }
    }

    fn valid_form(username: &str) -> UserForm {
        UserForm {
            username: username.into(),
            user_firstname: "Ana".into(),
            user_lastname: "Silva".into(),
            user_email: format!("{username}@example.com"),
            user_phone: "555-0100".into(),
            user_password: "secret".into(),
            user_confirmpassword: "secret".into(),
            role: "user".into(),
            isactive: true,
            isdeleted: false,
        }
    }

    fn setup() -> (Arc<FakeUsers>, DynResourceClient<Users>, Mutex<ListFormView<Users>>) {
        let fake = Arc::new(FakeUsers::default());
        let client: DynResourceClient<Users> = fake.clone();
        (fake, client, Mutex::new(ListFormView::new()))
    }

    #[tokio::test]
    async fn every_refresh_hits_the_api() {
        let (fake, client, view) = setup();

        refresh(&view, &client).await;
        fake.rows.lock().unwrap().push(record(7, &valid_form("ext")));
        refresh(&view, &client).await;

        assert_eq!(fake.lists.load(Ordering::SeqCst), 2);
        assert_eq!(view.lock().await.items().len(), 1);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_the_view_unloaded() {
        let (fake, client, view) = setup();
        fake.fail.store(true, Ordering::SeqCst);

        refresh(&view, &client).await;
        assert!(!view.lock().await.is_loaded());

        fake.fail.store(false, Ordering::SeqCst);
        refresh(&view, &client).await;
        assert!(view.lock().await.is_loaded());
    }

    #[tokio::test]
    async fn slow_initial_fetch_does_not_overwrite_a_later_submit() {
        let (fake, client, view) = setup();
        let view = Arc::new(view);
        fake.hold_next_list.store(true, Ordering::SeqCst);

        let first_load = tokio::spawn({
            let view = view.clone();
            let client = client.clone();
            async move { refresh(&view, &client).await }
        });
        fake.list_started.notified().await;

        assert_eq!(submit(&view, &client, valid_form("ana")).await, Ok(true));
        assert_eq!(view.lock().await.items().len(), 1);

        fake.release_list.notify_one();
        first_load.await.unwrap();

        let view = view.lock().await;
        assert_eq!(view.items().len(), 1);
        assert_eq!(view.items()[0].username, "ana");
    }

    #[tokio::test]
    async fn submit_creates_then_refetches() {
        let (fake, client, view) = setup();

        assert_eq!(submit(&view, &client, valid_form("ana")).await, Ok(true));

        let view = view.lock().await;
        assert_eq!(view.items().len(), 1);
        assert_eq!(view.items()[0].username, "ana");
        assert_eq!(view.form(), &UserForm::default());
        assert_eq!(fake.writes.load(Ordering::SeqCst), 1);
        assert_eq!(fake.lists.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalid_forms_never_reach_the_network() {
        let (fake, client, view) = setup();

        let mut form = valid_form("ana");
        form.user_confirmpassword = "different".into();

        assert_eq!(
            submit(&view, &client, form).await,
            Err(Refusal::Invalid)
        );
        assert_eq!(fake.writes.load(Ordering::SeqCst), 0);
        assert_eq!(
            view.lock().await.errors()["user_confirmpassword"],
            "Passwords must match"
        );
    }

    #[tokio::test]
    async fn pending_view_refuses_another_submission() {
        let (fake, client, view) = setup();

        view.lock()
            .await
            .begin_submit(valid_form("first"))
            .unwrap();

        assert_eq!(
            submit(&view, &client, valid_form("second")).await,
            Err(Refusal::Pending)
        );
        assert_eq!(fake.writes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn edit_then_submit_updates_the_selected_row() {
        let (fake, client, view) = setup();
        submit(&view, &client, valid_form("ana")).await.unwrap();

        view.lock().await.edit(1);
        let mut form = view.lock().await.form().clone();
        form.user_firstname = "Anna".into();

        assert_eq!(submit(&view, &client, form).await, Ok(true));

        let view = view.lock().await;
        assert_eq!(view.editing(), None);
        assert_eq!(view.items()[0].user_firstname, "Anna");
        assert_eq!(fake.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failures_leave_local_state_untouched() {
        let (fake, client, view) = setup();
        submit(&view, &client, valid_form("ana")).await.unwrap();

        fake.fail.store(true, Ordering::SeqCst);

        assert_eq!(submit(&view, &client, valid_form("bruno")).await, Ok(false));
        assert_eq!(delete(&view, &client, 1).await, Ok(false));

        let view = view.lock().await;
        assert!(!view.is_pending());
        assert_eq!(view.items().len(), 1);
        assert_eq!(view.form().username, "bruno");
    }

    #[tokio::test]
    async fn delete_removes_the_row_after_success() {
        let (_fake, client, view) = setup();
        submit(&view, &client, valid_form("ana")).await.unwrap();

        assert_eq!(delete(&view, &client, 1).await, Ok(true));
        assert!(view.lock().await.items().is_empty());
    }
}
