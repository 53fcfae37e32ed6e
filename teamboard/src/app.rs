//! Application state and event handling.
//!
//! `App` is the view coordinator: it owns the [`Store`], keeps the purely
//! presentational state (list cursors, filter, sort, the assign form), turns
//! key presses into [`Command`]s, and exposes read helpers for rendering.

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use teamboard_core::clock::{Clock, SystemClock};
use teamboard_core::command::{Command, Outcome};
use teamboard_core::member::{Member, MemberId, MemberStatus};
use teamboard_core::session::Role;
use teamboard_core::store::Store;
use teamboard_core::summary::{MemberFilter, MemberSort, filter_and_sort};
use teamboard_core::task::{Task, TaskStatus};

/// Input format for due dates typed into the assign form.
pub const DUE_DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Length of a `YYYY-MM-DD` date.
const DUE_DATE_INPUT_LEN: usize = 10;

/// What the keyboard is currently feeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation and single-key commands.
    Normal,
    /// Typing the title of a task to assign.
    AssignTitle,
    /// Typing the due date of a task to assign.
    AssignDueDate,
}

/// Main application state.
pub struct App<C = SystemClock> {
    store: Store<C>,
    /// Member list filter on the lead dashboard.
    pub filter: MemberFilter,
    /// Member list ordering on the lead dashboard.
    pub sort: MemberSort,
    /// Highlighted row in the lead's (filtered, sorted) member list.
    pub member_cursor: usize,
    /// Highlighted task on the member dashboard.
    pub task_cursor: usize,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Text typed into the assign form field.
    pub input: String,
    /// Member the pending assignment goes to.
    assign_target: Option<MemberId>,
    /// Title captured in the first form step.
    draft_title: String,
    /// One-line feedback shown in the status bar.
    pub notice: Option<String>,
    /// Percentage points moved by one progress key press.
    progress_step: i32,
    /// Maximum task title length in characters.
    max_task_title_len: usize,
    /// Due date display format (chrono).
    pub date_format: String,
    /// Completion timestamp display format (chrono).
    pub timestamp_format: String,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<C: Clock> App<C> {
    /// Create a new application over an existing store.
    pub fn new(store: Store<C>) -> Self {
        Self {
            store,
            filter: MemberFilter::All,
            sort: MemberSort::Name,
            member_cursor: 0,
            task_cursor: 0,
            input_mode: InputMode::Normal,
            input: String::new(),
            assign_target: None,
            draft_title: String::new(),
            notice: None,
            progress_step: 10,
            max_task_title_len: 256,
            date_format: "%b %d, %Y".to_string(),
            timestamp_format: "%b %d, %Y %H:%M".to_string(),
            should_quit: false,
        }
    }

    /// Set the progress step used by `+` and `-`.
    #[must_use]
    pub fn with_progress_step(mut self, step: u8) -> Self {
        self.progress_step = i32::from(step);
        self
    }

    /// Set the maximum task title length accepted by the assign form.
    #[must_use]
    pub const fn with_max_task_title_len(mut self, len: usize) -> Self {
        self.max_task_title_len = len;
        self
    }

    /// Set the chrono display formats for due dates and completion times.
    #[must_use]
    pub fn with_formats(mut self, date_format: String, timestamp_format: String) -> Self {
        self.date_format = date_format;
        self.timestamp_format = timestamp_format;
        self
    }

    // -----------------------------------------------------------------------
    // Read helpers for rendering
    // -----------------------------------------------------------------------

    /// The underlying store.
    pub const fn store(&self) -> &Store<C> {
        &self.store
    }

    /// The active role.
    pub const fn role(&self) -> Role {
        self.store.session().current_role()
    }

    /// Members shown on the lead dashboard, after filter and sort.
    pub fn visible_members(&self) -> Vec<&Member> {
        filter_and_sort(self.store.roster().members(), self.filter, self.sort)
    }

    /// The highlighted member on the lead dashboard.
    pub fn highlighted_member(&self) -> Option<&Member> {
        self.visible_members().get(self.member_cursor).copied()
    }

    /// The member shown on the member dashboard (with fallback to the first).
    pub fn current_member(&self) -> Option<&Member> {
        self.store.selected_member()
    }

    /// Today's date in local time, according to the store's clock.
    pub fn today(&self) -> NaiveDate {
        self.store.now().with_timezone(&Local).date_naive()
    }

    /// The highlighted task on the member dashboard.
    pub fn selected_task(&self) -> Option<&Task> {
        self.current_member()?.tasks.get(self.task_cursor)
    }

    /// Name of the member the open assign form targets.
    pub fn assign_target_name(&self) -> Option<&str> {
        let target = self.assign_target.as_ref()?;
        self.store
            .roster()
            .member(target)
            .map(|m| m.name.as_str())
    }

    /// Title captured by the assign form, once past the first step.
    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    // -----------------------------------------------------------------------
    // Key handling
    // -----------------------------------------------------------------------

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::AssignTitle | InputMode::AssignDueDate => self.handle_form_key(key),
        }
    }

    /// Handle a key when no form is open.
    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('r') => {
                let role = self.role().toggle();
                self.switch_role(role);
                return;
            }
            _ => {}
        }

        match self.role() {
            Role::Lead => self.handle_lead_key(key),
            Role::Member => self.handle_member_key(key),
        }
    }

    /// Handle a key on the lead dashboard.
    fn handle_lead_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.member_cursor = self.member_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.member_cursor + 1 < self.visible_members().len() {
                    self.member_cursor += 1;
                }
            }
            KeyCode::Char('f') => {
                self.filter = self.filter.next();
                self.member_cursor = 0;
            }
            KeyCode::Char('s') => {
                self.sort = self.sort.toggle();
                self.member_cursor = 0;
            }
            KeyCode::Enter => self.open_member_dashboard(),
            KeyCode::Char('a') => self.open_assign_form(),
            _ => {}
        }
    }

    /// Handle a key on the member dashboard.
    fn handle_member_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.cycle_member(false),
            KeyCode::Right | KeyCode::Char('l') => self.cycle_member(true),
            KeyCode::Up | KeyCode::Char('k') => {
                self.task_cursor = self.task_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.current_member().map_or(0, |m| m.tasks.len());
                if self.task_cursor + 1 < count {
                    self.task_cursor += 1;
                }
            }
            KeyCode::Char(digit @ '1'..='4') => {
                let index = digit as usize - '1' as usize;
                self.set_member_status(MemberStatus::ALL[index]);
            }
            KeyCode::Char('+' | '=') => self.step_progress(true),
            KeyCode::Char('-') => self.step_progress(false),
            KeyCode::Char('p') => self.set_task_status(TaskStatus::Pending),
            KeyCode::Char('i') => self.set_task_status(TaskStatus::InProgress),
            KeyCode::Char('c') => self.set_task_status(TaskStatus::Completed),
            _ => {}
        }
    }

    /// Handle a key while the assign form is open.
    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.close_assign_form();
                self.notice = Some("Assignment cancelled".to_string());
            }
            KeyCode::Enter => self.submit_form_step(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => {
                let limit = match self.input_mode {
                    InputMode::AssignDueDate => DUE_DATE_INPUT_LEN,
                    _ => self.max_task_title_len,
                };
                if self.input.chars().count() < limit {
                    self.input.push(c);
                }
            }
            _ => {}
        }
    }

    // -----------------------------------------------------------------------
    // Intents
    // -----------------------------------------------------------------------

    /// Dispatch a command and surface ignored commands in the status bar.
    fn dispatch(&mut self, command: Command) -> Outcome {
        let outcome = self.store.dispatch(command);
        if let Outcome::Ignored(ref error) = outcome {
            tracing::warn!(%error, "dashboard command had no effect");
            self.notice = Some(format!("No change: {error}"));
        }
        self.clamp_cursors();
        outcome
    }

    /// Keep both cursors on a row after the lists they index change length.
    fn clamp_cursors(&mut self) {
        let members = self.visible_members().len();
        self.member_cursor = self.member_cursor.min(members.saturating_sub(1));
        let tasks = self.current_member().map_or(0, |m| m.tasks.len());
        self.task_cursor = self.task_cursor.min(tasks.saturating_sub(1));
    }

    fn switch_role(&mut self, role: Role) {
        self.dispatch(Command::SwitchRole(role));
        self.task_cursor = 0;
        self.notice = None;
    }

    /// Select the highlighted member and jump to their dashboard.
    fn open_member_dashboard(&mut self) {
        let Some(member_id) = self.highlighted_member().map(|m| m.id.clone()) else {
            return;
        };
        self.dispatch(Command::SelectMember(member_id));
        self.switch_role(Role::Member);
    }

    /// Move the member dashboard to the previous or next roster member.
    fn cycle_member(&mut self, forward: bool) {
        let members = self.store.roster().members();
        if members.is_empty() {
            return;
        }
        let current = self
            .current_member()
            .and_then(|cur| members.iter().position(|m| m.id == cur.id))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % members.len()
        } else {
            (current + members.len() - 1) % members.len()
        };
        let member_id = members[next].id.clone();
        self.dispatch(Command::SelectMember(member_id));
        self.task_cursor = 0;
    }

    fn set_member_status(&mut self, status: MemberStatus) {
        let Some(member_id) = self.current_member().map(|m| m.id.clone()) else {
            return;
        };
        self.dispatch(Command::SetStatus { member_id, status });
    }

    /// Apply one progress step to the highlighted task.
    ///
    /// Completed tasks have no progress controls, and a step that would not
    /// move past a bound is not offered.
    fn step_progress(&mut self, increase: bool) {
        let Some(member_id) = self.current_member().map(|m| m.id.clone()) else {
            return;
        };
        let Some(task) = self.selected_task() else {
            return;
        };
        let allowed = !task.completed
            && if increase {
                task.can_increase_progress()
            } else {
                task.can_decrease_progress()
            };
        if !allowed {
            return;
        }
        let task_id = task.id.clone();
        let delta = if increase {
            self.progress_step
        } else {
            -self.progress_step
        };
        self.dispatch(Command::AdjustTaskProgress {
            member_id,
            task_id,
            delta,
        });
    }

    fn set_task_status(&mut self, status: TaskStatus) {
        let Some(member_id) = self.current_member().map(|m| m.id.clone()) else {
            return;
        };
        let Some(task_id) = self.selected_task().map(|t| t.id.clone()) else {
            return;
        };
        self.dispatch(Command::SetTaskStatus {
            member_id,
            task_id,
            status,
        });
    }

    fn open_assign_form(&mut self) {
        let Some(member_id) = self.highlighted_member().map(|m| m.id.clone()) else {
            return;
        };
        self.assign_target = Some(member_id);
        self.input_mode = InputMode::AssignTitle;
        self.input.clear();
        self.draft_title.clear();
        self.notice = None;
    }

    fn close_assign_form(&mut self) {
        self.assign_target = None;
        self.input_mode = InputMode::Normal;
        self.input.clear();
        self.draft_title.clear();
    }

    /// Advance the assign form: title, then due date, then dispatch.
    fn submit_form_step(&mut self) {
        match self.input_mode {
            InputMode::AssignTitle => {
                if self.input.trim().is_empty() {
                    self.notice = Some("Task title cannot be empty".to_string());
                    return;
                }
                self.draft_title = std::mem::take(&mut self.input).trim().to_string();
                self.input_mode = InputMode::AssignDueDate;
                self.notice = None;
            }
            InputMode::AssignDueDate => {
                let Ok(due_date) =
                    NaiveDate::parse_from_str(self.input.trim(), DUE_DATE_INPUT_FORMAT)
                else {
                    self.notice = Some(format!(
                        "Invalid due date {:?} (expected YYYY-MM-DD)",
                        self.input.trim()
                    ));
                    return;
                };
                let Some(member_id) = self.assign_target.clone() else {
                    self.close_assign_form();
                    return;
                };
                let title = self.draft_title.clone();
                let name = self.assign_target_name().unwrap_or_default().to_string();
                let outcome = self.dispatch(Command::AssignTask {
                    member_id,
                    title: title.clone(),
                    due_date,
                });
                self.close_assign_form();
                if outcome.is_applied() {
                    self.notice = Some(format!("Assigned \"{title}\" to {name}"));
                }
            }
            InputMode::Normal => {}
        }
    }
}
