//! User management list

use serde_json::Value;

use crate::api::{ApiClient, ApiError, ApiResult, EntityId, ManagedUser, Transport};

/// Administrative action on one account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Activate,
    Deactivate,
    Delete,
}

impl UserAction {
    pub fn label(&self) -> &'static str {
        match self {
            UserAction::Activate => "Activate",
            UserAction::Deactivate => "Deactivate",
            UserAction::Delete => "Delete",
        }
    }

    /// Actions offered for an account in its current state
    pub fn available_for(user: &ManagedUser) -> Vec<UserAction> {
        let toggle = if user.is_active {
            UserAction::Deactivate
        } else {
            UserAction::Activate
        };
        vec![toggle, UserAction::Delete]
    }

    /// Run the action against the API
    pub async fn perform<T: Transport>(
        &self,
        api: &ApiClient<T>,
        token: &str,
        id: &EntityId,
    ) -> ApiResult<Value> {
        match self {
            UserAction::Activate => api.activate_user(token, id).await,
            UserAction::Deactivate => api.deactivate_user(token, id).await,
            UserAction::Delete => api.delete_user(token, id).await,
        }
    }
}

/// One row of the user table
#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub id: Option<EntityId>,
    pub name: String,
    pub email: String,
    pub status: &'static str,
    pub status_class: &'static str,
    pub joined: String,
    pub last_login: String,
    pub actions: Vec<UserAction>,
}

impl UserRow {
    pub fn from_user(user: &ManagedUser) -> Self {
        let (status, status_class) = if user.is_active {
            ("Active", "bg-green-100 text-green-800")
        } else {
            ("Inactive", "bg-red-100 text-red-800")
        };

        Self {
            id: user.id.clone(),
            name: if user.name.is_empty() {
                "Unnamed".to_string()
            } else {
                user.name.clone()
            },
            email: user.email.clone(),
            status,
            status_class,
            joined: user
                .created_at
                .as_deref()
                .map(short_date)
                .unwrap_or_else(|| "-".to_string()),
            last_login: user
                .last_login
                .as_deref()
                .map(super::activity::format_timestamp)
                .unwrap_or_else(|| "Never".to_string()),
            // Without an id there is nothing to act on
            actions: if user.id.is_some() {
                UserAction::available_for(user)
            } else {
                Vec::new()
            },
        }
    }
}

fn short_date(timestamp: &str) -> String {
    super::activity::local_date(timestamp)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// Apply an action to a row set after the server accepted it
pub fn apply(users: &mut Vec<ManagedUser>, id: &EntityId, action: UserAction) {
    match action {
        UserAction::Delete => users.retain(|u| u.id.as_ref() != Some(id)),
        UserAction::Activate | UserAction::Deactivate => {
            for user in users.iter_mut().filter(|u| u.id.as_ref() == Some(id)) {
                user.is_active = action == UserAction::Activate;
            }
        }
    }
}

/// Run an action and update the local rows on success
pub async fn perform_and_apply<T: Transport>(
    api: &ApiClient<T>,
    token: &str,
    users: &mut Vec<ManagedUser>,
    id: &EntityId,
    action: UserAction,
) -> Result<(), ApiError> {
    action.perform(api, token, id).await?;
    apply(users, id, action);
    Ok(())
}
