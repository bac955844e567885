//! Process-wide in-memory store. Each collection sits behind its own lock
//! because the axum runtime handles requests on multiple threads; every
//! read-modify-write runs under a single write guard.
//!
//! Nothing here persists: store lifetime equals process lifetime, and the
//! seed data is rebuilt on every start.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard,
};

use anyhow::Context;
use chrono::{Duration, Utc};
use kernel::model::{
    attendance::{Attendance, AttendanceMethod},
    booking::{Booking, BookingStatus},
    class::Class,
    id::{AttendanceId, BookingId, ClassId, NotificationId, UserId},
    notification::{
        event::{BookingNotice, BookingNoticeKind},
        Notification,
    },
    role::Role,
    user::User,
};
use shared::error::AppResult;

#[derive(Clone, Default)]
pub struct AppStore(Arc<StoreInner>);

#[derive(Default)]
pub(crate) struct StoreInner {
    pub(crate) users: RwLock<Vec<User>>,
    pub(crate) classes: RwLock<Vec<Class>>,
    pub(crate) bookings: RwLock<Vec<Booking>>,
    pub(crate) attendance: RwLock<Vec<Attendance>>,
    pub(crate) notifications: RwLock<Vec<Notification>>,
    seeded: AtomicBool,
}

/// Poisoned locks are recovered as-is; the collections hold plain records
/// with no cross-field invariants a panicking writer could break.
pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn inner(&self) -> &StoreInner {
        &self.0
    }

    /// Populates the fixed sample data set. Guarded by a one-time flag:
    /// calling this again in the same process is a no-op.
    pub fn seed(&self) -> AppResult<()> {
        if self.0.seeded.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        let now = Utc::now();
        let hash = |password: &str| -> AppResult<String> {
            bcrypt::hash(password, bcrypt::DEFAULT_COST)
                .context("failed to hash seed password")
                .map_err(Into::into)
        };

        let make_user = |name: &str, email: &str, password_hash: String, role: Role| User {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
            password_hash,
            role,
            face_descriptor: None,
            profile_picture: None,
            created_at: now,
        };

        let admin = make_user("Admin User", "admin@system.com", hash("admin123")?, Role::Admin);

        let lecturer_hash = hash("lecturer123")?;
        let lecturers = [
            make_user(
                "Dr. Sarah Johnson",
                "sarah@university.com",
                lecturer_hash.clone(),
                Role::Lecturer,
            ),
            make_user(
                "Prof. James Smith",
                "james@university.com",
                lecturer_hash,
                Role::Lecturer,
            ),
        ];

        let student_hash = hash("student123")?;
        let students: Vec<User> = [
            ("Alice Chen", "alice@student.com"),
            ("Bob Martinez", "bob@student.com"),
            ("Carol Williams", "carol@student.com"),
            ("David Park", "david@student.com"),
            ("Emma Brown", "emma@student.com"),
        ]
        .into_iter()
        .map(|(name, email)| make_user(name, email, student_hash.clone(), Role::Student))
        .collect();

        let make_class = |name: &str, description: &str, capacity: i32, room: &str| Class {
            id: ClassId::new(),
            name: name.into(),
            description: description.into(),
            capacity,
            room: room.into(),
            created_by: admin.id,
            created_at: now,
        };

        let classes = [
            make_class(
                "Introduction to Computer Science",
                "Fundamentals of programming and computational thinking",
                30,
                "Room A101",
            ),
            make_class(
                "Data Structures & Algorithms",
                "Advanced data structures, sorting, and graph algorithms",
                25,
                "Room B202",
            ),
            make_class(
                "Machine Learning Basics",
                "Introduction to supervised and unsupervised learning",
                20,
                "Lab C303",
            ),
        ];

        let tomorrow = now.date_naive() + Duration::days(1);
        let day_after = now.date_naive() + Duration::days(2);

        let bookings = [
            Booking {
                id: BookingId::new(),
                class_id: classes[0].id,
                lecturer_id: lecturers[0].id,
                date: tomorrow,
                start_time: "09:00".into(),
                end_time: "11:00".into(),
                status: BookingStatus::Scheduled,
                created_at: now,
            },
            Booking {
                id: BookingId::new(),
                class_id: classes[1].id,
                lecturer_id: lecturers[1].id,
                date: day_after,
                start_time: "14:00".into(),
                end_time: "16:00".into(),
                status: BookingStatus::Scheduled,
                created_at: now,
            },
        ];

        let attendance: Vec<Attendance> = students[..2]
            .iter()
            .map(|student| Attendance {
                id: AttendanceId::new(),
                booking_id: bookings[0].id,
                student_id: student.id,
                marked_at: now,
                method: AttendanceMethod::Manual,
            })
            .collect();

        let notice = BookingNotice::new(
            bookings[0].id,
            classes[0].name.clone(),
            tomorrow,
            "09:00".into(),
            BookingNoticeKind::Scheduled,
        );
        let notifications: Vec<Notification> = students[..3]
            .iter()
            .map(|student| Notification {
                id: NotificationId::new(),
                user_id: student.id,
                title: notice.title().into(),
                message: notice.message(),
                kind: notice.notification_kind(),
                read: false,
                booking_id: Some(bookings[0].id),
                created_at: now,
            })
            .collect();

        let mut users = vec![admin];
        users.extend(lecturers);
        users.extend(students);

        *write(&self.0.users) = users;
        *write(&self.0.classes) = classes.into();
        *write(&self.0.bookings) = bookings.into();
        *write(&self.0.attendance) = attendance;
        *write(&self.0.notifications) = notifications;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_runs_exactly_once_per_process() {
        let store = AppStore::new();
        store.seed().unwrap();

        let counts = |store: &AppStore| {
            (
                read(&store.inner().users).len(),
                read(&store.inner().classes).len(),
                read(&store.inner().bookings).len(),
            )
        };

        assert_eq!(counts(&store), (8, 3, 2));
        assert_eq!(read(&store.inner().attendance).len(), 2);
        assert_eq!(read(&store.inner().notifications).len(), 3);

        // second access must not re-run the seed
        store.seed().unwrap();
        assert_eq!(counts(&store), (8, 3, 2));
    }

    #[test]
    fn seeded_bookings_are_dated_relative_to_now() {
        let store = AppStore::new();
        store.seed().unwrap();

        let today = Utc::now().date_naive();
        let bookings = read(&store.inner().bookings);
        assert_eq!(bookings[0].date, today + Duration::days(1));
        assert_eq!(bookings[1].date, today + Duration::days(2));
    }
}
