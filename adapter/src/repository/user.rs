use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{
        event::{CreateUser, UpdateUser},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::store::{read, write, AppStore};

#[derive(new)]
pub struct UserRepositoryImpl {
    store: AppStore,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(read(&self.store.inner().users).clone())
    }

    async fn find_by_role(&self, role: Role) -> AppResult<Vec<User>> {
        Ok(read(&self.store.inner().users)
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        Ok(read(&self.store.inner().users)
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(read(&self.store.inner().users)
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, event: CreateUser) -> AppResult<User> {
        // hash outside the lock; bcrypt is slow on purpose
        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::InternalError(e.into()))?;

        let mut users = write(&self.store.inner().users);
        if users.iter().any(|u| u.email == event.email) {
            return Err(AppError::Conflict("Email already registered".into()));
        }

        let user = User {
            id: UserId::new(),
            name: event.name,
            email: event.email,
            password_hash,
            role: event.role,
            face_descriptor: event.face_descriptor,
            profile_picture: event.profile_picture,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, event: UpdateUser) -> AppResult<Option<User>> {
        let mut users = write(&self.store.inner().users);
        let Some(user) = users.iter_mut().find(|u| u.id == event.user_id) else {
            return Ok(None);
        };
        if let Some(name) = event.name {
            user.name = name;
        }
        if let Some(email) = event.email {
            user.email = email;
        }
        if let Some(role) = event.role {
            user.role = role;
        }
        if let Some(profile_picture) = event.profile_picture {
            user.profile_picture = Some(profile_picture);
        }
        Ok(Some(user.clone()))
    }

    async fn delete(&self, user_id: UserId) -> AppResult<bool> {
        let mut users = write(&self.store.inner().users);
        let before = users.len();
        users.retain(|u| u.id != user_id);
        Ok(users.len() < before)
    }
}
