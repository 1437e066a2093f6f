//! User record API handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users      {"name":"Ada","email":"ada@example.com"}
//! PUT    /users/{id} {"name":"Ada","email":"ada@example.com"}
//! DELETE /users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{Error, User, UserDraft, UserDraftValidationError};
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// Example JSON: `{"name":"Ada","email":"ada@example.com"}`
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UserPayload {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl TryFrom<UserPayload> for UserDraft {
    type Error = UserDraftValidationError;

    fn try_from(value: UserPayload) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.name, &value.email)
    }
}

/// Confirmation body for `DELETE /users/{id}`.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeletionConfirmation {
    #[schema(example = "User 1 deleted")]
    pub message: String,
}

fn map_draft_validation_error(err: UserDraftValidationError) -> Error {
    let field = match err {
        UserDraftValidationError::EmptyName | UserDraftValidationError::NameTooLong => "name",
        UserDraftValidationError::EmptyEmail | UserDraftValidationError::EmailTooLong => "email",
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field }))
}

/// List all user records ordered by ascending identifier.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All user records", body = [User]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Record store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list().await?;
    Ok(web::Json(users))
}

/// Fetch one user record by identifier.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The matching record", body = User),
        (status = 404, description = "No record matches the identifier", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<User>> {
    let user = state.users.get(path.into_inner()).await?;
    Ok(web::Json(user))
}

/// Create a user record; the store assigns the identifier.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "Created record with assigned identifier", body = User),
        (status = 400, description = "Missing or invalid fields", body = Error),
        (status = 409, description = "Email already in use", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let draft = UserDraft::try_from(payload.into_inner()).map_err(map_draft_validation_error)?;
    let user = state.users.create(draft).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Update a user record's name and email in place.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "The updated record", body = User),
        (status = 400, description = "Missing or invalid fields", body = Error),
        (status = 404, description = "No record matches the identifier", body = Error),
        (status = 409, description = "Email already in use", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<UserPayload>,
) -> ApiResult<web::Json<User>> {
    let draft = UserDraft::try_from(payload.into_inner()).map_err(map_draft_validation_error)?;
    let user = state.users.update(path.into_inner(), draft).await?;
    Ok(web::Json(user))
}

/// Delete a user record by identifier.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Record removed", body = DeletionConfirmation),
        (status = 404, description = "No record matches the identifier", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<DeletionConfirmation>> {
    let id = path.into_inner();
    state.users.delete(id).await?;
    Ok(web::Json(DeletionConfirmation {
        message: format!("User {id} deleted"),
    }))
}

#[cfg(test)]
mod tests {
    //! Handler-level coverage through the Actix test harness.
    use std::sync::{Arc, Mutex};

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use async_trait::async_trait;
    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::domain::ports::{UserPersistenceError, UserRepository};
    use crate::inbound::http::{json_config, path_config};

    /// Mutex-backed repository double keeping records in insertion order.
    #[derive(Default)]
    struct InMemoryUserRepository {
        state: Mutex<InMemoryState>,
    }

    struct InMemoryState {
        users: Vec<User>,
        next_id: i32,
    }

    impl Default for InMemoryState {
        fn default() -> Self {
            Self {
                users: Vec::new(),
                next_id: 1,
            }
        }
    }

    impl InMemoryUserRepository {
        fn with_users(users: Vec<User>) -> Self {
            let next_id = users.iter().map(|user| user.id).max().unwrap_or(0) + 1;
            Self {
                state: Mutex::new(InMemoryState { users, next_id }),
            }
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
            let state = self.state.lock().expect("state lock");
            let mut users = state.users.clone();
            users.sort_by_key(|user| user.id);
            Ok(users)
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<User>, UserPersistenceError> {
            let state = self.state.lock().expect("state lock");
            Ok(state.users.iter().find(|user| user.id == id).cloned())
        }

        async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
            let mut state = self.state.lock().expect("state lock");
            if state.users.iter().any(|user| user.email == draft.email()) {
                return Err(UserPersistenceError::conflict("duplicate email"));
            }
            let user = User {
                id: state.next_id,
                name: draft.name().to_owned(),
                email: draft.email().to_owned(),
            };
            state.next_id += 1;
            state.users.push(user.clone());
            Ok(user)
        }

        async fn update(
            &self,
            id: i32,
            draft: &UserDraft,
        ) -> Result<Option<User>, UserPersistenceError> {
            let mut state = self.state.lock().expect("state lock");
            if state
                .users
                .iter()
                .any(|user| user.email == draft.email() && user.id != id)
            {
                return Err(UserPersistenceError::conflict("duplicate email"));
            }
            let Some(user) = state.users.iter_mut().find(|user| user.id == id) else {
                return Ok(None);
            };
            user.name = draft.name().to_owned();
            user.email = draft.email().to_owned();
            Ok(Some(user.clone()))
        }

        async fn delete(&self, id: i32) -> Result<bool, UserPersistenceError> {
            let mut state = self.state.lock().expect("state lock");
            let before = state.users.len();
            state.users.retain(|user| user.id != id);
            Ok(state.users.len() < before)
        }
    }

    fn test_app(
        repository: InMemoryUserRepository,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = web::Data::new(HttpState::new(Arc::new(repository)));
        App::new()
            .app_data(state)
            .app_data(json_config())
            .app_data(path_config())
            .service(list_users)
            .service(get_user)
            .service(create_user)
            .service(update_user)
            .service(delete_user)
    }

    fn ada() -> User {
        User {
            id: 1,
            name: "Ada".into(),
            email: "ada@example.com".into(),
        }
    }

    #[rstest]
    #[actix_rt::test]
    async fn create_returns_201_with_assigned_id() {
        let app = actix_test::init_service(test_app(InMemoryUserRepository::default())).await;

        let request = actix_test::TestRequest::post()
            .uri("/users")
            .set_json(&UserPayload {
                name: "David".into(),
                email: "david@example.com".into(),
            })
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "David");
        assert_eq!(value["email"], "david@example.com");
    }

    #[rstest]
    #[actix_rt::test]
    async fn create_with_missing_field_returns_400_envelope() {
        let app = actix_test::init_service(test_app(InMemoryUserRepository::default())).await;

        let request = actix_test::TestRequest::post()
            .uri("/users")
            .set_json(serde_json::json!({ "name": "David" }))
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(response).await;
        assert!(value.get("error").is_some(), "expected error envelope: {value}");
    }

    #[rstest]
    #[actix_rt::test]
    async fn create_with_blank_name_returns_400_with_field_details() {
        let app = actix_test::init_service(test_app(InMemoryUserRepository::default())).await;

        let request = actix_test::TestRequest::post()
            .uri("/users")
            .set_json(&UserPayload {
                name: "   ".into(),
                email: "david@example.com".into(),
            })
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["details"]["field"], "name");
    }

    #[rstest]
    #[actix_rt::test]
    async fn create_with_duplicate_email_returns_409() {
        let app =
            actix_test::init_service(test_app(InMemoryUserRepository::with_users(vec![ada()])))
                .await;

        let request = actix_test::TestRequest::post()
            .uri("/users")
            .set_json(&UserPayload {
                name: "Impostor".into(),
                email: "ada@example.com".into(),
            })
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["error"], "Email already in use");
    }

    #[rstest]
    #[actix_rt::test]
    async fn get_missing_user_returns_404_contract_body() {
        let app = actix_test::init_service(test_app(InMemoryUserRepository::default())).await;

        let request = actix_test::TestRequest::get().uri("/users/99").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["error"], "User not found");
    }

    #[rstest]
    #[actix_rt::test]
    async fn get_with_non_numeric_id_returns_400() {
        let app = actix_test::init_service(test_app(InMemoryUserRepository::default())).await;

        let request = actix_test::TestRequest::get()
            .uri("/users/abc")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[actix_rt::test]
    async fn delete_returns_confirmation_naming_the_id() {
        let app =
            actix_test::init_service(test_app(InMemoryUserRepository::with_users(vec![ada()])))
                .await;

        let request = actix_test::TestRequest::delete().uri("/users/1").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["message"], "User 1 deleted");
    }

    #[rstest]
    #[actix_rt::test]
    async fn list_orders_by_ascending_id() {
        let repository = InMemoryUserRepository::with_users(vec![
            User {
                id: 2,
                name: "Bob".into(),
                email: "bob@example.com".into(),
            },
            ada(),
        ]);
        let app = actix_test::init_service(test_app(repository)).await;

        let request = actix_test::TestRequest::get().uri("/users").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(response).await;
        let ids: Vec<i64> = value
            .as_array()
            .expect("array body")
            .iter()
            .map(|user| user["id"].as_i64().expect("numeric id"))
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
