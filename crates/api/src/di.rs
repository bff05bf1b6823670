use crate::{
    abstract_trait::{
        storage::DynUploadStore,
        student::{
            repository::{DynStudentCommandRepository, DynStudentQueryRepository},
            service::{DynStudentCommandService, DynStudentQueryService},
        },
        user::{
            repository::{DynUserCommandRepository, DynUserQueryRepository},
            service::{DynUserCommandService, DynUserQueryService},
        },
    },
    repository::{
        StudentCommandRepository, StudentQueryRepository, UserCommandRepository,
        UserQueryRepository,
    },
    service::{
        student::{StudentCommandService, StudentCommandServiceDeps, StudentQueryService},
        user::{UserCommandService, UserQueryService},
    },
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

/// Everything the services sit on. Tests swap in their own repositories here.
#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub user_query: DynUserQueryRepository,
    pub user_command: DynUserCommandRepository,
    pub student_query: DynStudentQueryRepository,
    pub student_command: DynStudentCommandRepository,
    pub store: DynUploadStore,
}

impl DependenciesInjectDeps {
    pub fn from_pool(pool: ConnectionPool, store: DynUploadStore) -> Self {
        Self {
            user_query: Arc::new(UserQueryRepository::new(pool.clone())),
            user_command: Arc::new(UserCommandRepository::new(pool.clone())),
            student_query: Arc::new(StudentQueryRepository::new(pool.clone())),
            student_command: Arc::new(StudentCommandRepository::new(pool)),
            store,
        }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub user_query: DynUserQueryService,
    pub user_command: DynUserCommandService,
    pub student_query: DynStudentQueryService,
    pub student_command: DynStudentCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("user_query", &"DynUserQueryService")
            .field("user_command", &"DynUserCommandService")
            .field("student_query", &"DynStudentQueryService")
            .field("student_command", &"DynStudentCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps {
            user_query,
            user_command,
            student_query,
            student_command,
            store,
        } = deps;

        let user_query_service =
            Arc::new(UserQueryService::new(user_query, registry)) as DynUserQueryService;

        let user_command_service =
            Arc::new(UserCommandService::new(user_command, registry)) as DynUserCommandService;

        let student_query_service =
            Arc::new(StudentQueryService::new(student_query, registry))
                as DynStudentQueryService;

        let student_command_deps = StudentCommandServiceDeps {
            command: student_command,
            store,
        };

        let student_command_service =
            Arc::new(StudentCommandService::new(student_command_deps, registry))
                as DynStudentCommandService;

        Self {
            user_query: user_query_service,
            user_command: user_command_service,
            student_query: student_query_service,
            student_command: student_command_service,
        }
    }
}
