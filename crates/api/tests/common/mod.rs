#![allow(dead_code)]

use admin_api::{
    abstract_trait::{
        student::repository::{StudentCommandRepositoryTrait, StudentQueryRepositoryTrait},
        user::repository::{UserCommandRepositoryTrait, UserQueryRepositoryTrait},
    },
    di::DependenciesInjectDeps,
    handler::AppRouter,
    model::{student::Student, user::User},
    state::AppState,
    storage::LocalUploadStore,
};
use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use shared::{
    domain::requests::{
        student::{CreateStudentRequest, UpdateStudentRequest},
        user::{CreateUserRequest, UpdateUserRequest},
    },
    errors::RepositoryError,
};
use std::{path::PathBuf, sync::Arc, sync::Mutex};
use tempfile::TempDir;
use tower::ServiceExt;

pub const BOUNDARY: &str = "X-ADMIN-TEST-BOUNDARY";

#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
    next_id: Mutex<i32>,
}

impl InMemoryUsers {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for InMemoryUsers {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.userid == id)
            .cloned())
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for InMemoryUsers {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<User, RepositoryError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let user = User {
            userid: *next_id,
            username: req.username.clone(),
            user_firstname: req.user_firstname.clone(),
            user_lastname: req.user_lastname.clone(),
            user_email: req.user_email.clone(),
            user_phone: req.user_phone.clone(),
            user_password: req.user_password.clone(),
            user_confirmpassword: req.user_confirmpassword.clone(),
            role: req.role.clone(),
            isactive: req.isactive,
            isdeleted: req.isdeleted,
        };

        self.rows.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, req: &UpdateUserRequest) -> Result<User, RepositoryError> {
        let status = req
            .resolved_status()
            .ok_or_else(|| RepositoryError::Custom("missing status".into()))?;

        let mut rows = self.rows.lock().unwrap();
        let user = rows
            .iter_mut()
            .find(|u| Some(u.userid) == req.userid)
            .ok_or(RepositoryError::NotFound)?;

        user.username = req.username.clone();
        user.user_firstname = req.user_firstname.clone();
        user.user_lastname = req.user_lastname.clone();
        user.user_email = req.user_email.clone();
        user.user_phone = req.user_phone.clone();
        user.user_password = req.user_password.clone();
        user.user_confirmpassword = req.user_confirmpassword.clone();
        user.role = req.role.clone();
        user.isactive = status.isactive;
        user.isdeleted = status.isdeleted;

        Ok(user.clone())
    }

    async fn delete_user(&self, id: i32) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.userid != id);

        if rows.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryStudents {
    rows: Mutex<Vec<Student>>,
    next_id: Mutex<i32>,
}

impl InMemoryStudents {
    pub fn get(&self, id: i32) -> Option<Student> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl StudentQueryRepositoryTrait for InMemoryStudents {
    async fn find_all(&self) -> Result<Vec<Student>, RepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, RepositoryError> {
        Ok(self.get(id))
    }
}

#[async_trait]
impl StudentCommandRepositoryTrait for InMemoryStudents {
    async fn create_student(&self, req: &CreateStudentRequest) -> Result<Student, RepositoryError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let student = Student {
            id: *next_id,
            name: req.name.clone(),
            email: req.email.clone(),
            profile_image: req.profile_image.clone(),
        };

        self.rows.lock().unwrap().push(student.clone());
        Ok(student)
    }

    async fn update_student(&self, req: &UpdateStudentRequest) -> Result<Student, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let student = rows
            .iter_mut()
            .find(|s| s.id == req.id)
            .ok_or(RepositoryError::NotFound)?;

        student.name = req.name.clone();
        student.email = req.email.clone();
        if let Some(image) = &req.profile_image {
            student.profile_image = Some(image.clone());
        }

        Ok(student.clone())
    }

    async fn delete_student(&self, id: i32) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.id != id);

        if rows.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

/// Every call fails the way a dropped database connection would.
pub struct BrokenDatabase;

fn db_down<T>() -> Result<T, RepositoryError> {
    Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl UserQueryRepositoryTrait for BrokenDatabase {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        db_down()
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<User>, RepositoryError> {
        db_down()
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for BrokenDatabase {
    async fn create_user(&self, _req: &CreateUserRequest) -> Result<User, RepositoryError> {
        db_down()
    }

    async fn update_user(&self, _req: &UpdateUserRequest) -> Result<User, RepositoryError> {
        db_down()
    }

    async fn delete_user(&self, _id: i32) -> Result<(), RepositoryError> {
        db_down()
    }
}

#[async_trait]
impl StudentQueryRepositoryTrait for BrokenDatabase {
    async fn find_all(&self) -> Result<Vec<Student>, RepositoryError> {
        db_down()
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<Student>, RepositoryError> {
        db_down()
    }
}

#[async_trait]
impl StudentCommandRepositoryTrait for BrokenDatabase {
    async fn create_student(&self, _req: &CreateStudentRequest) -> Result<Student, RepositoryError> {
        db_down()
    }

    async fn update_student(&self, _req: &UpdateStudentRequest) -> Result<Student, RepositoryError> {
        db_down()
    }

    async fn delete_student(&self, _id: i32) -> Result<(), RepositoryError> {
        db_down()
    }
}

pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUsers>,
    pub students: Arc<InMemoryStudents>,
    pub upload_dir: PathBuf,
    _tmp: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_upload_limit(1024 * 1024)
    }

    pub fn with_upload_limit(max_upload_size: usize) -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let upload_dir = tmp.path().join("uploads");
        std::fs::create_dir_all(&upload_dir).unwrap();

        let users = Arc::new(InMemoryUsers::default());
        let students = Arc::new(InMemoryStudents::default());

        let deps = DependenciesInjectDeps {
            user_query: users.clone(),
            user_command: users.clone(),
            student_query: students.clone(),
            student_command: students.clone(),
            store: Arc::new(LocalUploadStore::new(upload_dir.clone())),
        };

        let state = AppState::from_deps(deps, upload_dir.clone(), max_upload_size);

        Self {
            router: AppRouter::build(state),
            users,
            students,
            upload_dir,
            _tmp: tmp,
        }
    }

    pub fn broken() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let upload_dir = tmp.path().join("uploads");
        std::fs::create_dir_all(&upload_dir).unwrap();

        let broken = Arc::new(BrokenDatabase);

        let deps = DependenciesInjectDeps {
            user_query: broken.clone(),
            user_command: broken.clone(),
            student_query: broken.clone(),
            student_command: broken,
            store: Arc::new(LocalUploadStore::new(upload_dir.clone())),
        };

        let state = AppState::from_deps(deps, upload_dir.clone(), 1024 * 1024);

        Self {
            router: AppRouter::build(state),
            users: Arc::default(),
            students: Arc::default(),
            upload_dir,
            _tmp: tmp,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, bytes) = self.send_raw(request).await;
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn send_raw(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    pub fn stored_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.upload_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub struct FilePart<'a> {
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub bytes: &'a [u8],
}

pub fn multipart_body(fields: &[(&str, &str)], file: Option<FilePart<'_>>) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some(file) = file {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"ProfileImage\"; filename=\"{}\"\r\n",
                file.file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", file.content_type).as_bytes());
        body.extend_from_slice(file.bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_request(
    method: &str,
    uri: &str,
    fields: &[(&str, &str)],
    file: Option<FilePart<'_>>,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(fields, file)))
        .unwrap()
}
