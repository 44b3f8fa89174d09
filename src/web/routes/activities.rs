use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::models::Activity;
use crate::services::enrollment::{self, EnrollmentError};
use crate::store::ActivityStore;

pub async fn list_handler(State(store): State<ActivityStore>) -> Json<BTreeMap<String, Activity>> {
    Json(enrollment::list_activities(&store))
}

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<Value>, EnrollmentError> {
    match enrollment::enroll(&store, &activity_name, &query.email) {
        Ok(message) => {
            info!(activity = %activity_name, email = %query.email, "signup");
            Ok(Json(json!({ "message": message })))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, error = %e, "signup rejected");
            Err(e)
        }
    }
}

pub async fn unregister_handler(
    Path((activity_name, email)): Path<(String, String)>,
    State(store): State<ActivityStore>,
) -> Result<Json<Value>, EnrollmentError> {
    match enrollment::unenroll(&store, &activity_name, &email) {
        Ok(message) => {
            info!(activity = %activity_name, email = %email, "unregister");
            Ok(Json(json!({ "message": message })))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
            Err(e)
        }
    }
}
