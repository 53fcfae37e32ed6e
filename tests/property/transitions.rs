//! Property-based tests for the roster transition rules.
//!
//! Uses proptest to verify:
//! 1. Progress adjustments follow a running clamp to `0..=100`.
//! 2. The progress/status/completed triple stays in sync after every
//!    adjustment and every status change, except the documented pending case.
//! 3. Commands naming a missing member or task never change the store.
//! 4. Assigned task IDs never collide.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashSet;

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use teamboard_core::clock::FixedClock;
use teamboard_core::command::{Command, Outcome};
use teamboard_core::member::{MemberId, MemberStatus};
use teamboard_core::seed;
use teamboard_core::store::Store;
use teamboard_core::task::{Task, TaskId, TaskStatus};

fn make_store() -> Store<FixedClock> {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 10, 4, 9, 0, 0).unwrap());
    Store::new(seed::roster(), seed::session(), clock)
}

fn seeded_task(store: &Store<FixedClock>, member: &str, task: &str) -> Task {
    store
        .roster()
        .member(&MemberId::from(member))
        .unwrap()
        .task(&TaskId::from(task))
        .unwrap()
        .clone()
}

/// The derived invariant that must hold after a progress adjustment.
fn assert_synced(task: &Task) {
    assert_eq!(task.progress == 100, task.status == TaskStatus::Completed);
    assert_eq!(task.completed, task.status == TaskStatus::Completed);
    if task.status == TaskStatus::Pending {
        assert_eq!(task.progress, 0);
    }
}

/// Every `(member, task)` pair in the seed roster.
fn arb_seeded_task() -> impl Strategy<Value = (&'static str, &'static str)> {
    prop_oneof![
        Just(("1", "t1")),
        Just(("2", "t2")),
        Just(("2", "t3")),
        Just(("3", "t4")),
        Just(("5", "t5")),
    ]
}

fn arb_task_status() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::Pending),
        Just(TaskStatus::InProgress),
        Just(TaskStatus::Completed),
    ]
}

fn arb_member_status() -> impl Strategy<Value = MemberStatus> {
    prop_oneof![
        Just(MemberStatus::Working),
        Just(MemberStatus::Break),
        Just(MemberStatus::Meeting),
        Just(MemberStatus::Offline),
    ]
}

/// Commands that all reference an ID absent from the seed roster.
fn arb_dangling_command() -> impl Strategy<Value = Command> {
    let missing_member = "[a-z]{3,8}".prop_map(|s| MemberId::new(format!("missing-{s}")));
    let missing_task = "[a-z]{3,8}".prop_map(|s| TaskId::new(format!("missing-{s}")));
    prop_oneof![
        (missing_member.clone(), arb_member_status())
            .prop_map(|(member_id, status)| Command::SetStatus { member_id, status }),
        (missing_member.clone(), "[A-Za-z ]{1,20}").prop_map(|(member_id, title)| {
            Command::AssignTask {
                member_id,
                title: format!("x{title}"),
                due_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            }
        }),
        (missing_member.clone(), any::<i32>()).prop_map(|(member_id, delta)| {
            Command::AdjustTaskProgress {
                member_id,
                task_id: TaskId::from("t1"),
                delta,
            }
        }),
        (missing_task.clone(), any::<i32>()).prop_map(|(task_id, delta)| {
            Command::AdjustTaskProgress {
                member_id: MemberId::from("1"),
                task_id,
                delta,
            }
        }),
        (missing_task, arb_task_status()).prop_map(|(task_id, status)| {
            Command::SetTaskStatus {
                member_id: MemberId::from("2"),
                task_id,
                status,
            }
        }),
    ]
}

proptest! {
    /// A single adjustment lands on `clamp(old + delta, 0, 100)`.
    #[test]
    fn adjust_progress_clamps(target in arb_seeded_task(), delta in any::<i32>()) {
        let (member, task) = target;
        let mut store = make_store();
        let old = i64::from(seeded_task(&store, member, task).progress);

        let outcome = store.dispatch(Command::AdjustTaskProgress {
            member_id: MemberId::from(member),
            task_id: TaskId::from(task),
            delta,
        });
        prop_assert_eq!(outcome, Outcome::Applied);

        let expected = (old + i64::from(delta)).clamp(0, 100);
        let updated = seeded_task(&store, member, task);
        prop_assert_eq!(i64::from(updated.progress), expected);
        assert_synced(&updated);
    }

    /// A sequence of adjustments follows the running clamp, step by step.
    #[test]
    fn adjust_progress_sequence_follows_running_clamp(
        target in arb_seeded_task(),
        deltas in prop::collection::vec(-150i32..150, 1..20),
    ) {
        let (member, task) = target;
        let mut store = make_store();
        let mut expected = i32::from(seeded_task(&store, member, task).progress);

        for delta in deltas {
            store.dispatch(Command::AdjustTaskProgress {
                member_id: MemberId::from(member),
                task_id: TaskId::from(task),
                delta,
            });
            expected = (expected + delta).clamp(0, 100);
            let updated = seeded_task(&store, member, task);
            prop_assert_eq!(i32::from(updated.progress), expected);
            assert_synced(&updated);
        }
    }

    /// Status changes keep the triple in sync, with the pending exception:
    /// partial progress survives a move to pending.
    #[test]
    fn set_task_status_derives_fields(target in arb_seeded_task(), status in arb_task_status()) {
        let (member, task) = target;
        let mut store = make_store();
        let before = seeded_task(&store, member, task);

        store.dispatch(Command::SetTaskStatus {
            member_id: MemberId::from(member),
            task_id: TaskId::from(task),
            status,
        });
        let after = seeded_task(&store, member, task);

        prop_assert_eq!(after.status, status);
        prop_assert_eq!(after.completed, status == TaskStatus::Completed);
        match status {
            TaskStatus::Completed => {
                prop_assert_eq!(after.progress, 100);
                prop_assert!(after.completed_at.is_some());
            }
            TaskStatus::Pending => {
                let expected = if before.progress == 100 { 0 } else { before.progress };
                prop_assert_eq!(after.progress, expected);
                prop_assert_eq!(after.completed_at, before.completed_at);
            }
            TaskStatus::InProgress => {
                prop_assert_eq!(after.progress, before.progress);
                prop_assert_eq!(after.completed_at, before.completed_at);
            }
        }
    }

    /// Commands with a dangling member or task ID change nothing at all.
    #[test]
    fn dangling_commands_leave_store_unchanged(command in arb_dangling_command()) {
        let mut store = make_store();
        let roster_before = store.roster().clone();
        let session_before = store.session().clone();

        let outcome = store.dispatch(command);

        prop_assert!(!outcome.is_applied());
        prop_assert_eq!(store.roster(), &roster_before);
        prop_assert_eq!(store.session(), &session_before);
    }

    /// Assigned task IDs are unique across the whole roster.
    #[test]
    fn assigned_ids_never_collide(
        assignments in prop::collection::vec((prop_oneof![
            Just("1"), Just("2"), Just("3"), Just("4"), Just("5")
        ], "[A-Za-z]{1,12}"), 1..40),
    ) {
        let mut store = make_store();
        let due = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        for (member, title) in &assignments {
            let outcome = store.dispatch(Command::AssignTask {
                member_id: MemberId::from(*member),
                title: title.clone(),
                due_date: due,
            });
            prop_assert!(outcome.is_applied());
        }

        let ids: Vec<&TaskId> = store
            .roster()
            .members()
            .iter()
            .flat_map(|m| m.tasks.iter().map(|t| &t.id))
            .collect();
        let unique: HashSet<&TaskId> = ids.iter().copied().collect();
        prop_assert_eq!(ids.len(), 5 + assignments.len());
        prop_assert_eq!(unique.len(), ids.len());
    }
}
