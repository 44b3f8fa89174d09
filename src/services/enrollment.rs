use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::Activity;
use crate::store::ActivityStore;

/// Client-input failures for enroll/unenroll. None of these are retriable or
/// fatal; the web layer translates them to HTTP statuses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnrollmentError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Participant not found in this activity")]
    ParticipantNotFound,
    #[error("Student is already signed up for this activity")]
    AlreadyEnrolled,
    #[error("Activity is full")]
    ActivityFull,
}

pub fn list_activities(store: &ActivityStore) -> BTreeMap<String, Activity> {
    store.snapshot()
}

/// Append `email` to the activity's participant list.
///
/// The whole lookup-check-append runs under one store update so two
/// concurrent signups cannot both pass the duplicate or capacity check.
pub fn enroll(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, EnrollmentError> {
    store.update(|directory| {
        let activity = directory
            .get_mut(activity_name)
            .ok_or(EnrollmentError::ActivityNotFound)?;
        if activity.has_participant(email) {
            return Err(EnrollmentError::AlreadyEnrolled);
        }
        if activity.is_full() {
            return Err(EnrollmentError::ActivityFull);
        }
        activity.participants.push(email.to_string());
        Ok(format!("Signed up {email} for {activity_name}"))
    })
}

/// Remove `email` from the activity's participant list. Removal leaves no
/// trace, so the same email can sign up again afterwards.
pub fn unenroll(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, EnrollmentError> {
    store.update(|directory| {
        let activity = directory
            .get_mut(activity_name)
            .ok_or(EnrollmentError::ActivityNotFound)?;
        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(EnrollmentError::ParticipantNotFound)?;
        activity.participants.remove(position);
        Ok(format!("Removed {email} from {activity_name}"))
    })
}
