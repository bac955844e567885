use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    class::{
        event::{CreateClass, UpdateClass},
        Class,
    },
    id::ClassId,
};
use kernel::repository::class::ClassRepository;
use shared::error::AppResult;

use crate::store::{read, write, AppStore};

#[derive(new)]
pub struct ClassRepositoryImpl {
    store: AppStore,
}

#[async_trait]
impl ClassRepository for ClassRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Class>> {
        Ok(read(&self.store.inner().classes).clone())
    }

    async fn find_by_id(&self, class_id: ClassId) -> AppResult<Option<Class>> {
        Ok(read(&self.store.inner().classes)
            .iter()
            .find(|c| c.id == class_id)
            .cloned())
    }

    async fn create(&self, event: CreateClass) -> AppResult<Class> {
        let class = Class {
            id: ClassId::new(),
            name: event.name,
            description: event.description,
            capacity: event.capacity,
            room: event.room,
            created_by: event.created_by,
            created_at: Utc::now(),
        };
        write(&self.store.inner().classes).push(class.clone());
        Ok(class)
    }

    async fn update(&self, event: UpdateClass) -> AppResult<Option<Class>> {
        let mut classes = write(&self.store.inner().classes);
        let Some(class) = classes.iter_mut().find(|c| c.id == event.class_id) else {
            return Ok(None);
        };
        if let Some(name) = event.name {
            class.name = name;
        }
        if let Some(description) = event.description {
            class.description = description;
        }
        if let Some(capacity) = event.capacity {
            class.capacity = capacity;
        }
        if let Some(room) = event.room {
            class.room = room;
        }
        Ok(Some(class.clone()))
    }

    async fn delete(&self, class_id: ClassId) -> AppResult<bool> {
        let mut classes = write(&self.store.inner().classes);
        let before = classes.len();
        classes.retain(|c| c.id != class_id);
        Ok(classes.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::booking::BookingRepositoryImpl;
    use kernel::{
        model::{booking::event::CreateBooking, id::UserId},
        repository::booking::BookingRepository,
    };

    fn create_event() -> CreateClass {
        CreateClass::new(
            "Operating Systems".into(),
            "Processes, scheduling, memory".into(),
            40,
            "Room D404".into(),
            UserId::new(),
        )
    }

    #[tokio::test]
    async fn create_update_delete_roundtrip() -> anyhow::Result<()> {
        let repo = ClassRepositoryImpl::new(AppStore::new());

        let class = repo.create(create_event()).await?;
        assert_eq!(repo.find_all().await?.len(), 1);

        let updated = repo
            .update(UpdateClass::new(
                class.id,
                None,
                None,
                Some(35),
                Some("Room E505".into()),
            ))
            .await?
            .unwrap();
        assert_eq!(updated.capacity, 35);
        assert_eq!(updated.room, "Room E505");
        assert_eq!(updated.name, "Operating Systems");
        assert_eq!(updated.created_at, class.created_at);

        assert!(repo.delete(class.id).await?);
        assert!(!repo.delete(class.id).await?);
        assert!(repo.find_by_id(class.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_updates_to_none() -> anyhow::Result<()> {
        let repo = ClassRepositoryImpl::new(AppStore::new());
        let missing = repo
            .update(UpdateClass::new(ClassId::new(), Some("x".into()), None, None, None))
            .await?;
        assert!(missing.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn delete_leaves_referencing_bookings_dangling() -> anyhow::Result<()> {
        let store = AppStore::new();
        let classes = ClassRepositoryImpl::new(store.clone());
        let bookings = BookingRepositoryImpl::new(store);

        let class = classes.create(create_event()).await?;
        let booking = bookings
            .create(CreateBooking::new(
                class.id,
                UserId::new(),
                Utc::now().date_naive(),
                "09:00".into(),
                "11:00".into(),
            ))
            .await?;

        assert!(classes.delete(class.id).await?);

        // the booking survives but its class reference no longer resolves
        let survivor = bookings.find_by_id(booking.id).await?.unwrap();
        assert_eq!(survivor.class_id, class.id);
        assert!(classes.find_by_id(survivor.class_id).await?.is_none());
        Ok(())
    }
}
