//! Integration tests for the dashboard store.
//!
//! Drives the seeded [`Store`] through the six commands and checks the
//! resulting roster and session state end to end.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use teamboard_core::clock::FixedClock;
use teamboard_core::command::{Command, Outcome};
use teamboard_core::member::{Member, MemberId, MemberStatus};
use teamboard_core::roster::RosterError;
use teamboard_core::seed;
use teamboard_core::session::Role;
use teamboard_core::store::Store;
use teamboard_core::task::{Task, TaskId, TaskStatus};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 4, 9, 0, 0).unwrap()
}

/// Creates a seeded store with a fixed clock.
fn make_store() -> Store<FixedClock> {
    Store::new(seed::roster(), seed::session(), FixedClock::new(now()))
}

fn member<'a>(store: &'a Store<FixedClock>, id: &str) -> &'a Member {
    store.roster().member(&MemberId::from(id)).unwrap()
}

fn task<'a>(store: &'a Store<FixedClock>, member_id: &str, task_id: &str) -> &'a Task {
    member(store, member_id).task(&TaskId::from(task_id)).unwrap()
}

fn adjust(store: &mut Store<FixedClock>, member_id: &str, task_id: &str, delta: i32) -> Outcome {
    store.dispatch(Command::AdjustTaskProgress {
        member_id: MemberId::from(member_id),
        task_id: TaskId::from(task_id),
        delta,
    })
}

fn set_task_status(
    store: &mut Store<FixedClock>,
    member_id: &str,
    task_id: &str,
    status: TaskStatus,
) -> Outcome {
    store.dispatch(Command::SetTaskStatus {
        member_id: MemberId::from(member_id),
        task_id: TaskId::from(task_id),
        status,
    })
}

// ===========================================================================
// Progress
// ===========================================================================

#[test]
fn four_steps_complete_the_seeded_task() {
    let mut store = make_store();
    let seeded = task(&store, "1", "t1");
    assert_eq!(seeded.progress, 60);
    assert_eq!(seeded.status, TaskStatus::InProgress);

    for expected in [70, 80, 90] {
        assert!(adjust(&mut store, "1", "t1", 10).is_applied());
        let t = task(&store, "1", "t1");
        assert_eq!(t.progress, expected);
        assert_eq!(t.status, TaskStatus::InProgress);
        assert!(!t.completed);
        assert!(t.completed_at.is_none());
    }

    assert!(adjust(&mut store, "1", "t1", 10).is_applied());
    let t = task(&store, "1", "t1");
    assert_eq!(t.progress, 100);
    assert_eq!(t.status, TaskStatus::Completed);
    assert!(t.completed);
    assert_eq!(t.completed_at, Some(now()));
}

#[test]
fn progress_saturates_at_both_bounds() {
    let mut store = make_store();
    adjust(&mut store, "3", "t4", 500);
    assert_eq!(task(&store, "3", "t4").progress, 100);

    adjust(&mut store, "3", "t4", i32::MIN);
    let t = task(&store, "3", "t4");
    assert_eq!(t.progress, 0);
    assert_eq!(t.status, TaskStatus::Pending);
    assert!(!t.completed);
}

#[test]
fn reopening_by_progress_keeps_completion_time() {
    let mut store = make_store();
    let stamped = task(&store, "2", "t2").completed_at;
    assert!(stamped.is_some());

    adjust(&mut store, "2", "t2", -20);
    let t = task(&store, "2", "t2");
    assert_eq!(t.progress, 80);
    assert_eq!(t.status, TaskStatus::InProgress);
    assert!(!t.completed);
    assert_eq!(t.completed_at, stamped);
}

// ===========================================================================
// Task status
// ===========================================================================

#[test]
fn pending_keeps_partial_progress() {
    let mut store = make_store();
    adjust(&mut store, "2", "t3", 25);
    assert_eq!(task(&store, "2", "t3").progress, 55);

    set_task_status(&mut store, "2", "t3", TaskStatus::Pending);
    let t = task(&store, "2", "t3");
    assert_eq!(t.progress, 55);
    assert_eq!(t.status, TaskStatus::Pending);
    assert!(!t.completed);
}

#[test]
fn pending_resets_completed_task() {
    let mut store = make_store();
    set_task_status(&mut store, "2", "t2", TaskStatus::Pending);
    let t = task(&store, "2", "t2");
    assert_eq!(t.progress, 0);
    assert_eq!(t.status, TaskStatus::Pending);
    assert!(!t.completed);
}

#[test]
fn in_progress_leaves_progress_alone() {
    let mut store = make_store();
    set_task_status(&mut store, "2", "t2", TaskStatus::InProgress);
    let t = task(&store, "2", "t2");
    assert_eq!(t.progress, 100);
    assert_eq!(t.status, TaskStatus::InProgress);
    assert!(!t.completed);
}

#[test]
fn completing_sets_full_progress_and_timestamp() {
    let mut store = make_store();
    set_task_status(&mut store, "5", "t5", TaskStatus::Completed);
    let t = task(&store, "5", "t5");
    assert_eq!(t.progress, 100);
    assert!(t.completed);
    assert_eq!(t.completed_at, Some(now()));
}

// ===========================================================================
// Assignment
// ===========================================================================

#[test]
fn assign_task_to_member_without_tasks() {
    let mut store = make_store();
    assert!(member(&store, "4").tasks.is_empty());

    let outcome = store.dispatch(Command::AssignTask {
        member_id: MemberId::from("4"),
        title: "Write report".to_string(),
        due_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
    });
    assert_eq!(outcome, Outcome::Applied);

    let tasks = &member(&store, "4").tasks;
    assert_eq!(tasks.len(), 1);
    let t = &tasks[0];
    assert_eq!(t.title, "Write report");
    assert_eq!(t.due_date, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
    assert_eq!(t.progress, 0);
    assert_eq!(t.status, TaskStatus::Pending);
    assert!(!t.completed);
    assert!(t.completed_at.is_none());
}

#[test]
fn rapid_assignments_get_distinct_ids() {
    let mut store = make_store();
    let due = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
    for title in ["First", "Second"] {
        store.dispatch(Command::AssignTask {
            member_id: MemberId::from("4"),
            title: title.to_string(),
            due_date: due,
        });
    }
    let tasks = &member(&store, "4").tasks;
    assert_eq!(tasks.len(), 2);
    assert_ne!(tasks[0].id, tasks[1].id);
}

#[test]
fn assigned_title_is_trimmed() {
    let mut store = make_store();
    store.dispatch(Command::AssignTask {
        member_id: MemberId::from("5"),
        title: "  Retro notes  ".to_string(),
        due_date: NaiveDate::from_ymd_opt(2025, 10, 9).unwrap(),
    });
    let tasks = &member(&store, "5").tasks;
    assert_eq!(tasks.last().unwrap().title, "Retro notes");
}

// ===========================================================================
// Not found
// ===========================================================================

#[test]
fn unknown_ids_leave_store_unchanged() {
    let mut store = make_store();
    let roster_before = store.roster().clone();
    let session_before = store.session().clone();

    let outcomes = [
        store.dispatch(Command::SetStatus {
            member_id: MemberId::from("99"),
            status: MemberStatus::Offline,
        }),
        store.dispatch(Command::AssignTask {
            member_id: MemberId::from("99"),
            title: "Orphan".to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
        }),
        adjust(&mut store, "1", "t99", 10),
        set_task_status(&mut store, "1", "t2", TaskStatus::Completed),
    ];

    assert_eq!(
        outcomes[0],
        Outcome::Ignored(RosterError::MemberNotFound(MemberId::from("99")))
    );
    assert_eq!(
        outcomes[2],
        Outcome::Ignored(RosterError::TaskNotFound(TaskId::from("t99")))
    );
    // t2 belongs to member 2, not member 1.
    assert_eq!(
        outcomes[3],
        Outcome::Ignored(RosterError::TaskNotFound(TaskId::from("t2")))
    );
    assert!(outcomes.iter().all(|o| !o.is_applied()));
    assert_eq!(store.roster(), &roster_before);
    assert_eq!(store.session(), &session_before);
}

// ===========================================================================
// Session
// ===========================================================================

#[test]
fn switch_role_is_idempotent() {
    let mut store = make_store();
    store.dispatch(Command::SwitchRole(Role::Lead));
    store.dispatch(Command::SwitchRole(Role::Lead));
    assert_eq!(store.session().current_role(), Role::Lead);
}

#[test]
fn dangling_selection_is_kept_and_resolved_to_first_member() {
    let mut store = make_store();
    assert!(
        store
            .dispatch(Command::SelectMember(MemberId::from("ghost")))
            .is_applied()
    );
    assert_eq!(
        store.session().selected_member_id(),
        &MemberId::from("ghost")
    );
    assert_eq!(store.selected_member().unwrap().id, MemberId::from("1"));
}

#[test]
fn member_status_change_is_reflected_in_snapshot() {
    let mut store = make_store();
    store.dispatch(Command::SetStatus {
        member_id: MemberId::from("4"),
        status: MemberStatus::Working,
    });
    let json = serde_json::to_value(store.snapshot()).unwrap();
    assert_eq!(json["members"][3]["status"], "Working");
    assert_eq!(json["role"]["teamMembers"][3]["name"], "Emily Davis");
    assert_eq!(json["role"]["selectedMemberId"], "1");
}
