//! Scripted transport for unit tests

use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::Rc;

use super::transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};

enum Reply {
    Respond(ApiResponse),
    Unreachable,
}

struct Route {
    method: Method,
    path: String,
    reply: Reply,
}

#[derive(Default)]
struct Script {
    routes: Vec<Route>,
    requests: Vec<ApiRequest>,
}

/// Answers requests from a fixed script and records everything it is sent.
///
/// Routes match on method and path, ignoring the query string. Unscripted
/// routes answer `404 {"detail": "Not Found"}`. Clones share one script.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Rc<RefCell<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a response; later entries for the same route take precedence
    pub fn on(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.push(method, path, Reply::Respond(ApiResponse::new(status, body)));
        self
    }

    /// Script a route that never answers
    pub fn unreachable(self, method: Method, path: &str) -> Self {
        self.push(method, path, Reply::Unreachable);
        self
    }

    fn push(&self, method: Method, path: &str, reply: Reply) {
        self.script.borrow_mut().routes.push(Route {
            method,
            path: path.to_string(),
            reply,
        });
    }

    /// Every request sent so far, in order
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.script.borrow().requests.clone()
    }

    /// Paths (without host) of every request sent so far
    pub fn paths(&self) -> Vec<String> {
        self.requests().iter().map(|r| path_of(&r.url)).collect()
    }
}

fn path_of(url: &str) -> String {
    let rest = url.split_once("://").map(|(_, r)| r).unwrap_or(url);
    match rest.find('/') {
        Some(idx) => rest[idx..].to_string(),
        None => "/".to_string(),
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let full = path_of(&request.url);
        let path = full.split('?').next().unwrap_or_default().to_string();

        let mut script = self.script.borrow_mut();
        script.requests.push(request.clone());

        let reply = script
            .routes
            .iter()
            .rev()
            .find(|route| route.method == request.method && route.path == path);

        match reply.map(|route| &route.reply) {
            Some(Reply::Respond(response)) => Ok(response.clone()),
            Some(Reply::Unreachable) => Err(TransportError("connection refused".to_string())),
            None => Ok(ApiResponse::new(404, r#"{"detail": "Not Found"}"#)),
        }
    }
}
