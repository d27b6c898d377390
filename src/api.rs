//! Todo API Wrappers
//!
//! Frontend bindings to the REST backend. Authenticated calls take the
//! session explicitly and attach a bearer header when a token is held.

use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::Todo;
use crate::session::Session;

/// Backend base URL, overridable at compile time
pub const SERVER_URL: &str = match option_env!("SERVER_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

// ========================
// Request/Response Structs
// ========================

#[derive(Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Deserialize)]
struct ServerMessage {
    message: String,
}

#[derive(Serialize)]
pub struct CreateTodoArgs<'a> {
    pub title: &'a str,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

// ========================
// Request Plumbing
// ========================

fn http() -> Client {
    Client::new()
}

fn authorize(req: RequestBuilder, session: &Session) -> RequestBuilder {
    match session.bearer() {
        Some(token) => req.bearer_auth(token),
        None => req,
    }
}

async fn send(req: RequestBuilder) -> Result<Response, ApiError> {
    req.send().await.map_err(|e| ApiError::Network(e.to_string()))
}

/// Pull the server's `{"message": ...}` out of a failed response, if present
async fn failure_message(response: Response) -> Option<String> {
    let body = response.text().await.ok()?;
    serde_json::from_str::<ServerMessage>(&body)
        .ok()
        .map(|m| m.message)
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

// ========================
// Auth Endpoints
// ========================

pub async fn login(email: &str, password: &str) -> Result<TokenResponse, ApiError> {
    let response = send(
        http()
            .post(format!("{SERVER_URL}/auth/login"))
            .json(&Credentials { email, password }),
    )
    .await?;
    if !response.status().is_success() {
        return Err(ApiError::server_or(
            failure_message(response).await,
            "Login failed",
        ));
    }
    decode(response).await
}

pub async fn register(email: &str, password: &str) -> Result<(), ApiError> {
    let response = send(
        http()
            .post(format!("{SERVER_URL}/auth/register"))
            .json(&Credentials { email, password }),
    )
    .await?;
    if response.status().is_success() {
        Ok(())
    } else {
        Err(ApiError::server_or(
            failure_message(response).await,
            "Registration failed",
        ))
    }
}

// ========================
// Todo Endpoints
// ========================

pub async fn list_todos(session: &Session) -> Result<Vec<Todo>, ApiError> {
    let response = send(authorize(
        http().get(format!("{SERVER_URL}/api/todo")),
        session,
    ))
    .await?;
    if !response.status().is_success() {
        return Err(ApiError::server_or(
            failure_message(response).await,
            "failed to load todos",
        ));
    }
    decode(response).await
}

pub async fn create_todo(session: &Session, title: &str) -> Result<Todo, ApiError> {
    let args = CreateTodoArgs {
        title,
        is_completed: false,
    };
    let response = send(authorize(
        http().post(format!("{SERVER_URL}/api/todo")).json(&args),
        session,
    ))
    .await?;
    if !response.status().is_success() {
        return Err(ApiError::server_or(
            failure_message(response).await,
            "failed to add todo",
        ));
    }
    decode(response).await
}

pub async fn update_todo(session: &Session, todo: &Todo) -> Result<Todo, ApiError> {
    let response = send(authorize(
        http()
            .put(format!("{SERVER_URL}/api/todo/{}", todo.id))
            .json(todo),
        session,
    ))
    .await?;
    if !response.status().is_success() {
        return Err(ApiError::server_or(
            failure_message(response).await,
            "failed to update todo",
        ));
    }
    decode(response).await
}

pub async fn delete_todo(session: &Session, id: u32) -> Result<(), ApiError> {
    let response = send(authorize(
        http().delete(format!("{SERVER_URL}/api/todo/{id}")),
        session,
    ))
    .await?;
    if response.status().is_success() {
        // body ignored on success
        Ok(())
    } else {
        Err(ApiError::server_or(
            failure_message(response).await,
            "failed to delete todo",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_wire_format() {
        let json = serde_json::to_value(Credentials {
            email: "a@b.c",
            password: "hunter2",
        })
        .unwrap();
        assert_eq!(json["email"], "a@b.c");
        assert_eq!(json["password"], "hunter2");
    }

    #[test]
    fn test_create_args_start_incomplete() {
        let json = serde_json::to_value(CreateTodoArgs {
            title: "new task",
            is_completed: false,
        })
        .unwrap();
        assert_eq!(json["title"], "new task");
        assert_eq!(json["isCompleted"], false);
    }

    #[test]
    fn test_token_response_decodes() {
        let resp: TokenResponse = serde_json::from_str(r#"{"token": "abc.def.ghi"}"#).unwrap();
        assert_eq!(resp.token, "abc.def.ghi");
    }
}
