//! Fixed initial dataset loaded at startup.

use chrono::{DateTime, NaiveDate, Utc};

use crate::member::{Member, MemberId, MemberStatus};
use crate::roster::Roster;
use crate::session::{Role, Session};
use crate::task::{Task, TaskId, TaskStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn timestamp(day: NaiveDate, hour: u32, minute: u32) -> Option<DateTime<Utc>> {
    day.and_hms_opt(hour, minute, 0).map(|t| t.and_utc())
}

fn task(id: &str, title: &str, due_date: NaiveDate, progress: u8, status: TaskStatus) -> Task {
    Task {
        progress,
        completed: status == TaskStatus::Completed,
        status,
        ..Task::pending(TaskId::from(id), title.to_string(), due_date)
    }
}

/// The seeded team: five members, five tasks.
#[must_use]
pub fn members() -> Vec<Member> {
    vec![
        Member::new("1", "John Doe", MemberStatus::Working).with_task(task(
            "t1",
            "Complete dashboard wireframe",
            date(2025, 10, 5),
            60,
            TaskStatus::InProgress,
        )),
        Member::new("2", "Sarah Johnson", MemberStatus::Meeting)
            .with_task(Task {
                completed_at: timestamp(date(2025, 10, 2), 14, 30),
                ..task(
                    "t2",
                    "Review pull request #234",
                    date(2025, 10, 3),
                    100,
                    TaskStatus::Completed,
                )
            })
            .with_task(task(
                "t3",
                "Update API documentation",
                date(2025, 10, 7),
                30,
                TaskStatus::InProgress,
            )),
        Member::new("3", "Michael Chen", MemberStatus::Working).with_task(task(
            "t4",
            "Fix authentication bug",
            date(2025, 10, 2),
            90,
            TaskStatus::InProgress,
        )),
        Member::new("4", "Emily Davis", MemberStatus::Break),
        Member::new("5", "David Wilson", MemberStatus::Offline).with_task(task(
            "t5",
            "Prepare sprint planning",
            date(2025, 10, 6),
            0,
            TaskStatus::Pending,
        )),
    ]
}

/// The seeded roster.
#[must_use]
pub fn roster() -> Roster {
    Roster::from_unique(members())
}

/// The seeded session: team lead view, first member selected.
#[must_use]
pub fn session() -> Session {
    Session::new(Role::Lead, MemberId::from("1"))
}
