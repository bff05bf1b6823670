use admin_ui::{
    abstract_trait::{DynResourceClient, ResourceClientTrait},
    domain::{StudentForm, UserForm},
    errors::ClientError,
    handler::AppRouter,
    state::AppState,
    view::{Students, Users},
};
use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use shared::domain::responses::{StudentResponse, UserResponse};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
struct FakeUsers {
    rows: Mutex<Vec<UserResponse>>,
    created: Mutex<Vec<UserForm>>,
}

#[async_trait]
impl ResourceClientTrait<Users> for FakeUsers {
    async fn list(&self) -> Result<Vec<UserResponse>, ClientError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn create(&self, form: &UserForm) -> Result<(), ClientError> {
        let mut rows = self.rows.lock().unwrap();
        let userid = rows.len() as i32 + 1;
        rows.push(UserResponse {
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
        });
        self.created.lock().unwrap().push(form.clone());
        Ok(())
    }

    async fn update(&self, _id: i32, _form: &UserForm) -> Result<(), ClientError> {
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), ClientError> {
        self.rows.lock().unwrap().retain(|u| u.userid != id);
        Ok(())
    }
}

#[derive(Default)]
struct FakeStudents {
    rows: Mutex<Vec<StudentResponse>>,
    submitted: Mutex<Vec<StudentForm>>,
}

#[async_trait]
impl ResourceClientTrait<Students> for FakeStudents {
    async fn list(&self) -> Result<Vec<StudentResponse>, ClientError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn create(&self, form: &StudentForm) -> Result<(), ClientError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;
        rows.push(StudentResponse {
            id,
            name: form.name.clone(),
            email: form.email.clone(),
            profile_image: form
                .image
                .as_ref()
                .map(|f| format!("/uploads/1-{}", f.file_name)),
        });
        self.submitted.lock().unwrap().push(form.clone());
        Ok(())
    }

    async fn update(&self, id: i32, form: &StudentForm) -> Result<(), ClientError> {
        if let Some(row) = self.rows.lock().unwrap().iter_mut().find(|s| s.id == id) {
            row.name = form.name.clone();
            row.email = form.email.clone();
        }
        self.submitted.lock().unwrap().push(form.clone());
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), ClientError> {
        self.rows.lock().unwrap().retain(|s| s.id != id);
        Ok(())
    }
}

struct TestUi {
    router: Router,
    users: Arc<FakeUsers>,
    students: Arc<FakeStudents>,
}

impl TestUi {
    fn new() -> Self {
        let users = Arc::new(FakeUsers::default());
        let students = Arc::new(FakeStudents::default());

        let user_client: DynResourceClient<Users> = users.clone();
        let student_client: DynResourceClient<Students> = students.clone();

        let state = AppState::with_clients(user_client, student_client, "http://api.test");

        Self {
            router: AppRouter::build(state),
            users,
            students,
        }
    }

    async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn post(&self, request: Request<Body>) -> (StatusCode, String, String) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, location, String::from_utf8(body.to_vec()).unwrap())
    }
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

const BOUNDARY: &str = "ui-test-boundary";

fn student_post(
    uri: &str,
    name: &str,
    email: &str,
    file: Option<(&str, &[u8])>,
) -> Request<Body> {
    let mut body = Vec::new();

    for (field, value) in [("Name", name), ("Email", email)] {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"ProfileImage\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::post(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

const VALID_USER: &str = "username=ana&user_firstname=Ana&user_lastname=Silva\
&user_email=ana%40example.com&user_phone=555-0100&user_password=secret\
&user_confirmpassword=secret&role=admin&isactive=on";

#[tokio::test]
async fn user_page_renders_the_form_and_rows() {
    let app = TestUi::new();

    let (status, html) = app.get("/user-master").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("name=\"user_confirmpassword\""));
    assert!(html.contains("<option value=\"admin\""));
}

#[tokio::test]
async fn valid_user_submission_creates_and_redirects() {
    let app = TestUi::new();

    let (status, location, _) = app.post(form_post("/user-master/submit", VALID_USER)).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location, "/user-master");

    let created = app.users.created.lock().unwrap().clone();
    assert_eq!(created.len(), 1);
    assert!(created[0].isactive);
    assert!(!created[0].isdeleted);

    let (_, html) = app.get("/user-master").await;
    assert!(html.contains("<td>ana@example.com</td>"));
}

#[tokio::test]
async fn invalid_user_submission_is_rendered_back_without_calling_the_api() {
    let app = TestUi::new();

    let body = VALID_USER.replace("user_confirmpassword=secret", "user_confirmpassword=other");
    let (status, _, html) = app.post(form_post("/user-master/submit", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(app.users.created.lock().unwrap().is_empty());
    assert!(html.contains("Passwords must match"));
    assert!(html.contains("value=\"ana@example.com\""));

    let (_, fresh) = app.get("/user-master").await;
    assert!(!fresh.contains("Passwords must match"));
}

#[tokio::test]
async fn student_upload_is_forwarded_and_image_links_to_the_api() {
    let app = TestUi::new();

    let (status, location, _) = app
        .post(student_post("/students/submit", "Ana", "ana@x.com", Some(("ana.png", b"\x89PNG"))))
        .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location, "/");

    let submitted = app.students.submitted.lock().unwrap().clone();
    let image = submitted[0].image.as_ref().unwrap();
    assert_eq!(image.file_name, "ana.png");
    assert_eq!(&image.bytes[..], b"\x89PNG");

    let (_, html) = app.get("/").await;
    assert!(html.contains("src=\"http://api.test/uploads/1-ana.png\""));
}

#[tokio::test]
async fn page_load_picks_up_rows_created_elsewhere() {
    let app = TestUi::new();
    app.get("/").await;

    app.students.rows.lock().unwrap().push(StudentResponse {
        id: 42,
        name: "Bruno".into(),
        email: "bruno@x.com".into(),
        profile_image: None,
    });

    let (_, html) = app.get("/").await;
    assert!(html.contains("<td>bruno@x.com</td>"));
}

#[tokio::test]
async fn edit_mode_lives_in_the_url_only() {
    let app = TestUi::new();
    app.post(student_post("/students/submit", "Ana", "ana@x.com", None))
        .await;

    let (_, editing) = app.get("/?edit=1").await;
    assert!(editing.contains("value=\"ana@x.com\""));
    assert!(editing.contains("action=\"/students/submit?edit=1\""));
    assert!(editing.contains("Update"));

    let (_, other_visitor) = app.get("/").await;
    assert!(!other_visitor.contains("value=\"ana@x.com\""));
    assert!(!other_visitor.contains("Update"));
}

#[tokio::test]
async fn submit_with_edit_target_updates_that_student() {
    let app = TestUi::new();
    app.post(student_post("/students/submit", "Ana", "ana@x.com", None))
        .await;

    let (status, location, _) = app
        .post(student_post("/students/submit?edit=1", "Ana Maria", "ana@x.com", None))
        .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location, "/");

    let rows = app.students.rows.lock().unwrap().clone();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Ana Maria");
}

#[tokio::test]
async fn deleting_a_student_removes_the_row() {
    let app = TestUi::new();
    app.post(student_post("/students/submit", "Ana", "ana@x.com", None))
        .await;

    app.post(Request::post("/students/delete/1").body(Body::empty()).unwrap())
        .await;

    let (_, html) = app.get("/").await;
    assert!(!html.contains("<td>ana@x.com</td>"));
}
