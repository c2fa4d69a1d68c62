//! Typed records on top of [`KeyValueStore`].

use anyhow::Context;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::nutrition::ledger::Ledger;
use crate::session::profile::{Account, Profile};
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    pub account: Account,
    pub profile: Profile,
}

fn user_key(user_id: Uuid) -> String {
    format!("user-{}", user_id)
}

fn email_key(email: &str) -> String {
    format!("email-{}", email)
}

fn meals_key(user_id: Uuid, date: Date) -> String {
    format!("meals-{}-{}", user_id, date)
}

async fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> anyhow::Result<Option<T>> {
    match store.get(key).await? {
        Some(v) => Ok(Some(
            serde_json::from_value(v).with_context(|| format!("decode record {}", key))?,
        )),
        None => Ok(None),
    }
}

async fn save<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> anyhow::Result<()> {
    let v = serde_json::to_value(value).with_context(|| format!("encode record {}", key))?;
    store.put(key, v).await
}

pub async fn find_user_id_by_email(store: &dyn KeyValueStore, email: &str) -> anyhow::Result<Option<Uuid>> {
    load(store, &email_key(email)).await
}

pub async fn load_user(store: &dyn KeyValueStore, user_id: Uuid) -> anyhow::Result<Option<UserRecord>> {
    load(store, &user_key(user_id)).await
}

/// Writes the user record and its email index entry.
pub async fn save_user(store: &dyn KeyValueStore, record: &UserRecord) -> anyhow::Result<()> {
    save(store, &user_key(record.account.id), record).await?;
    save(store, &email_key(&record.account.email), &record.account.id).await
}

/// The stored ledger for `date`, or an empty one.
pub async fn load_ledger(store: &dyn KeyValueStore, user_id: Uuid, date: Date) -> anyhow::Result<Ledger> {
    Ok(load(store, &meals_key(user_id, date))
        .await?
        .unwrap_or_else(|| Ledger::new(user_id, date)))
}

/// An empty ledger drops its record; loading it back yields an empty ledger.
pub async fn save_ledger(store: &dyn KeyValueStore, ledger: &Ledger) -> anyhow::Result<()> {
    let key = meals_key(ledger.user_id(), ledger.date());
    if ledger.is_empty() {
        return store.delete(&key).await;
    }
    save(store, &key, ledger).await
}

#[cfg(test)]
mod records_tests {
    use super::*;
    use crate::nutrition::energy::ActivityLevel;
    use crate::nutrition::goals::FitnessGoal;
    use crate::nutrition::ledger::MealType;
    use crate::nutrition::types::FoodItem;
    use crate::storage::MemoryStore;
    use std::collections::BTreeMap;
    use time::macros::date;

    fn record() -> UserRecord {
        UserRecord {
            account: Account {
                id: Uuid::new_v4(),
                name: "Jane".into(),
                email: "jane@example.com".into(),
            },
            profile: Profile {
                age: Some(41),
                weight_kg: Some(62.3),
                height_cm: Some(168.0),
                activity_level: Some(ActivityLevel::Light),
                goal: FitnessGoal::WeightLoss,
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn user_is_found_by_email_and_id() {
        let store = MemoryStore::new();
        let rec = record();
        save_user(&store, &rec).await.unwrap();

        let id = find_user_id_by_email(&store, "jane@example.com").await.unwrap();
        assert_eq!(id, Some(rec.account.id));
        assert_eq!(load_user(&store, rec.account.id).await.unwrap(), Some(rec));
        assert!(find_user_id_by_email(&store, "nobody@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ledgers_are_kept_per_day() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        let mut monday = Ledger::new(user, date!(2025 - 02 - 03));
        let mut micros = BTreeMap::new();
        micros.insert("iron".to_string(), "6%".to_string());
        monday
            .add_meal(
                FoodItem {
                    id: "3".into(),
                    name: "Salmon Fillet".into(),
                    calories: 208.0,
                    protein: 20.0,
                    carbs: 0.0,
                    fat: 13.0,
                    serving_size: "100g".into(),
                    image_url: Some("https://example.com/salmon.jpg".into()),
                    micronutrients: Some(micros),
                },
                MealType::Dinner,
                1.5,
            )
            .unwrap();
        save_ledger(&store, &monday).await.unwrap();

        assert_eq!(load_ledger(&store, user, date!(2025 - 02 - 03)).await.unwrap(), monday);
        let tuesday = load_ledger(&store, user, date!(2025 - 02 - 04)).await.unwrap();
        assert!(tuesday.is_empty());
        assert_eq!(tuesday.date(), date!(2025 - 02 - 04));
    }

    #[tokio::test]
    async fn emptied_ledger_drops_its_record() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        let day = date!(2025 - 02 - 03);
        let mut ledger = Ledger::new(user, day);
        let entry = ledger
            .add_meal(
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
                },
                MealType::Snack,
                1.0,
            )
            .unwrap();
        save_ledger(&store, &ledger).await.unwrap();
        assert!(store.get(&meals_key(user, day)).await.unwrap().is_some());

        ledger.remove_meal(entry.id);
        save_ledger(&store, &ledger).await.unwrap();
        assert!(store.get(&meals_key(user, day)).await.unwrap().is_none());
        assert!(load_ledger(&store, user, day).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_record_is_an_error() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        store
            .put(&format!("user-{}", user), serde_json::json!({"account": 5}))
            .await
            .unwrap();
        let err = load_user(&store, user).await.unwrap_err();
        assert!(err.to_string().contains("decode record"));
    }
}
