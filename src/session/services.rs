use lazy_static::lazy_static;
use regex::Regex;
use time::{Date, OffsetDateTime};
use tracing::{info, warn};
use uuid::Uuid;

use super::profile::{Account, Profile};
use super::Session;
use crate::error::{AppError, ValidationError};
use crate::nutrition::goals::FitnessGoal;
use crate::records::{self, UserRecord};
use crate::state::AppState;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub(crate) fn normalize_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email)
}

/// Calendar day used for logging, in UTC.
pub(crate) fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

pub(crate) async fn signup(
    st: &AppState,
    name: &str,
    email: &str,
    goal: FitnessGoal,
    today: Date,
) -> Result<Session, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    let email = normalize_email(email)?;

    if records::find_user_id_by_email(&*st.store, &email).await?.is_some() {
        warn!(%email, "email already registered");
        return Err(AppError::EmailTaken);
    }

    let record = UserRecord {
        account: Account {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email,
        },
        profile: Profile::new(goal),
    };
    records::save_user(&*st.store, &record).await?;
    info!(user_id = %record.account.id, %goal, "user signed up");

    let ledger = records::load_ledger(&*st.store, record.account.id, today).await?;
    Ok(Session::new(record.account, record.profile, ledger))
}

pub(crate) async fn login(st: &AppState, email: &str, today: Date) -> Result<Session, AppError> {
    let email = normalize_email(email)?;
    let user_id = records::find_user_id_by_email(&*st.store, &email)
        .await?
        .ok_or_else(|| AppError::UnknownEmail(email.clone()))?;
    let record = records::load_user(&*st.store, user_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("email index points at missing user {}", user_id))?;

    let ledger = records::load_ledger(&*st.store, user_id, today).await?;
    Ok(Session::new(record.account, record.profile, ledger))
}

/// The active session, moved onto `today`'s ledger if the day has changed.
pub(crate) async fn active<'a>(
    st: &AppState,
    slot: &'a mut Option<Session>,
    today: Date,
) -> Result<&'a mut Session, AppError> {
    let session = slot.as_mut().ok_or(AppError::NoSession)?;
    if session.is_stale(today) {
        let ledger = records::load_ledger(&*st.store, session.user_id(), today).await?;
        session.start_day(ledger);
    }
    Ok(session)
}

pub(crate) async fn persist_user(st: &AppState, session: &Session) -> Result<(), AppError> {
    let record = UserRecord {
        account: session.account().clone(),
        profile: session.profile().clone(),
    };
    records::save_user(&*st.store, &record).await?;
    Ok(())
}

pub(crate) async fn persist_ledger(st: &AppState, session: &Session) -> Result<(), AppError> {
    records::save_ledger(&*st.store, session.ledger()).await?;
    Ok(())
}

#[cfg(test)]
mod services_tests {
    use super::*;
    use crate::nutrition::ledger::MealType;
    use crate::nutrition::types::FoodItem;
    use time::macros::date;

    fn banana() -> FoodItem {
        FoodItem {
            id: "6".into(),
            name: "Banana".into(),
            calories: 105.0,
            protein: 1.3,
            carbs: 27.0,
            fat: 0.4,
            serving_size: "1 medium (118g)".into(),
            image_url: None,
            micronutrients: None,
        }
    }

    #[test]
    fn email_validation() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert_eq!(normalize_email("  Jane@Example.COM ").unwrap(), "jane@example.com");
        assert_eq!(normalize_email("nope"), Err(ValidationError::InvalidEmail));
    }

    #[tokio::test]
    async fn signup_then_login_restores_profile_and_meals() {
        let st = AppState::fake();
        let day = date!(2025 - 05 - 05);

        let mut s = signup(&st, "Jane", "jane@example.com", FitnessGoal::WeightLoss, day)
            .await
            .unwrap();
        s.add_meal(Some(banana()), MealType::Snack, 2.0).unwrap();
        persist_ledger(&st, &s).await.unwrap();

        let again = login(&st, "JANE@example.com", day).await.unwrap();
        assert_eq!(again.user_id(), s.user_id());
        assert_eq!(again.profile().goal, FitnessGoal::WeightLoss);
        assert_eq!(again.summary().calories, 210.0);
    }

    #[tokio::test]
    async fn duplicate_signup_and_unknown_login() {
        let st = AppState::fake();
        let day = date!(2025 - 05 - 05);
        signup(&st, "Jane", "jane@example.com", FitnessGoal::Maintenance, day)
            .await
            .unwrap();

        let dup = signup(&st, "Other", "jane@example.com", FitnessGoal::Maintenance, day).await;
        assert!(matches!(dup, Err(AppError::EmailTaken)));

        let missing = login(&st, "ghost@example.com", day).await;
        assert!(matches!(missing, Err(AppError::UnknownEmail(_))));

        let blank = signup(&st, "  ", "x@example.com", FitnessGoal::Maintenance, day).await;
        assert!(matches!(blank, Err(AppError::Validation(ValidationError::EmptyName))));
    }

    #[tokio::test]
    async fn active_rolls_over_to_the_new_day() {
        let st = AppState::fake();
        let monday = date!(2025 - 05 - 05);
        let tuesday = date!(2025 - 05 - 06);

        let mut s = signup(&st, "Jane", "jane@example.com", FitnessGoal::Maintenance, monday)
            .await
            .unwrap();
        s.add_meal(Some(banana()), MealType::Breakfast, 1.0).unwrap();
        persist_ledger(&st, &s).await.unwrap();

        let mut slot = Some(s);
        let session = active(&st, &mut slot, tuesday).await.unwrap();
        assert_eq!(session.ledger().date(), tuesday);
        assert!(session.ledger().is_empty());

        let monday_ledger = records::load_ledger(&*st.store, session.user_id(), monday)
            .await
            .unwrap();
        assert_eq!(monday_ledger.len(), 1);
    }

    #[tokio::test]
    async fn no_session_is_reported() {
        let st = AppState::fake();
        let mut slot = None;
        let err = active(&st, &mut slot, date!(2025 - 05 - 05)).await.unwrap_err();
        assert!(matches!(err, AppError::NoSession));
    }
}
