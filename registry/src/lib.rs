use std::sync::Arc;

use adapter::repository::attendance::AttendanceRepositoryImpl;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::class::ClassRepositoryImpl;
use adapter::repository::notification::NotificationRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use adapter::store::AppStore;
use adapter::token::JwtTokenIssuer;
use kernel::repository::attendance::AttendanceRepository;
use kernel::repository::auth::AuthRepository;
use kernel::repository::booking::BookingRepository;
use kernel::repository::class::ClassRepository;
use kernel::repository::notification::NotificationRepository;
use kernel::repository::token::TokenIssuer;
use kernel::repository::user::UserRepository;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    class_repository: Arc<dyn ClassRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    attendance_repository: Arc<dyn AttendanceRepository>,
    notification_repository: Arc<dyn NotificationRepository>,
    token_issuer: Arc<dyn TokenIssuer>,
}

impl AppRegistry {
    pub fn new(store: AppStore, app_config: &AppConfig) -> Self {
        let auth_repository = Arc::new(AuthRepositoryImpl::new(store.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(store.clone()));
        let class_repository = Arc::new(ClassRepositoryImpl::new(store.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(store.clone()));
        let attendance_repository = Arc::new(AttendanceRepositoryImpl::new(store.clone()));
        let notification_repository = Arc::new(NotificationRepositoryImpl::new(store));
        let token_issuer = Arc::new(JwtTokenIssuer::new(&app_config.auth));
        Self {
            auth_repository,
            user_repository,
            class_repository,
            booking_repository,
            attendance_repository,
            notification_repository,
            token_issuer,
        }
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn class_repository(&self) -> Arc<dyn ClassRepository> {
        self.class_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn attendance_repository(&self) -> Arc<dyn AttendanceRepository> {
        self.attendance_repository.clone()
    }

    pub fn notification_repository(&self) -> Arc<dyn NotificationRepository> {
        self.notification_repository.clone()
    }

    pub fn token_issuer(&self) -> Arc<dyn TokenIssuer> {
        self.token_issuer.clone()
    }
}
