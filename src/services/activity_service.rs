use std::collections::HashMap;

use thiserror::Error;

use crate::models::Activity;
use crate::store::SharedRegistry;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

/// Snapshot of the whole registry, keyed by activity name.
pub async fn list_activities(registry: &SharedRegistry) -> HashMap<String, Activity> {
    registry.read().await.all().clone()
}

/// Adds `email` to the activity's roster. The duplicate check and the
/// append happen under one write-lock hold, so a failed signup never
/// mutates anything.
pub async fn signup(
    registry: &SharedRegistry,
    activity_name: &str,
    email: &str,
) -> Result<(), ActivityError> {
    let mut registry = registry.write().await;
    let activity = registry
        .get_mut(activity_name)
        .ok_or(ActivityError::ActivityNotFound)?;

    if activity.participants.iter().any(|p| p == email) {
        return Err(ActivityError::AlreadySignedUp);
    }

    activity.participants.push(email.to_string());
    Ok(())
}

/// Removes `email` from the activity's roster.
pub async fn unregister(
    registry: &SharedRegistry,
    activity_name: &str,
    email: &str,
) -> Result<(), ActivityError> {
    let mut registry = registry.write().await;
    let activity = registry
        .get_mut(activity_name)
        .ok_or(ActivityError::ActivityNotFound)?;

    let position = activity
        .participants
        .iter()
        .position(|p| p == email)
        .ok_or(ActivityError::NotSignedUp)?;

    activity.participants.remove(position);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Registry;

    fn seeded() -> SharedRegistry {
        Registry::with_default_activities().shared()
    }

    #[tokio::test]
    async fn list_returns_every_seeded_activity() {
        let registry = seeded();
        let all = list_activities(&registry).await;
        assert!(all.contains_key("Chess Club"));
        assert!(all.contains_key("Programming Class"));
        assert!(all.contains_key("Gym Class"));
    }

    #[tokio::test]
    async fn signup_appends_participant_once() {
        let registry = seeded();
        signup(&registry, "Chess Club", "newstudent@mergington.edu")
            .await
            .unwrap();

        let guard = registry.read().await;
        let participants = &guard.get("Chess Club").unwrap().participants;
        let count = participants
            .iter()
            .filter(|p| *p == "newstudent@mergington.edu")
            .count();
        assert_eq!(count, 1);
        assert_eq!(participants.last().unwrap(), "newstudent@mergington.edu");
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected_without_mutation() {
        let registry = seeded();
        let before = list_activities(&registry).await;

        let err = signup(&registry, "Chess Club", "michael@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, ActivityError::AlreadySignedUp);
        assert_eq!(list_activities(&registry).await, before);
    }

    #[tokio::test]
    async fn signup_on_unknown_activity_is_rejected() {
        let registry = seeded();
        let err = signup(&registry, "Underwater Basket Weaving", "a@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, ActivityError::ActivityNotFound);
    }

    #[tokio::test]
    async fn unregister_removes_enrolled_participant() {
        let registry = seeded();
        unregister(&registry, "Chess Club", "michael@mergington.edu")
            .await
            .unwrap();

        let guard = registry.read().await;
        let participants = &guard.get("Chess Club").unwrap().participants;
        assert!(!participants.iter().any(|p| p == "michael@mergington.edu"));
        assert!(participants.iter().any(|p| p == "daniel@mergington.edu"));
    }

    #[tokio::test]
    async fn unregister_of_non_participant_is_rejected() {
        let registry = seeded();
        let err = unregister(&registry, "Chess Club", "missing@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, ActivityError::NotSignedUp);
    }

    #[tokio::test]
    async fn unregister_on_unknown_activity_is_rejected() {
        let registry = seeded();
        let err = unregister(&registry, "Nope", "michael@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, ActivityError::ActivityNotFound);
    }
}
