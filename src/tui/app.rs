//! Application state for the dashboard.

use crate::artifacts::{ArtifactStatus, MISSING_WARNING};
use crate::readiness::{ReadinessResult, ReadinessScorer, ScoreInputs, Skill};

/// Dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Landing page with feature cards
    #[default]
    Home,
    /// Input form plus results
    Calculator,
}

impl Page {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Calculator => "calculator",
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Calculator => "Calculator",
        }
    }
}

/// Increment applied by Left/Right on a field.
#[must_use]
pub const fn step_for(skill: Skill) -> f64 {
    match skill {
        Skill::Communication => 0.5,
        Skill::Cgpa => 0.1,
        _ => 1.0,
    }
}

/// Snap to the step grid so repeated 0.1 steps do not drift.
fn snap(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

fn clamp_to_domain(skill: Skill, value: f64) -> f64 {
    let (min, max) = skill.domain();
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Calculator form state.
///
/// Every committed value lies inside its skill's domain.
#[derive(Debug, Clone)]
pub struct FormState {
    values: ScoreInputs,
    defaults: ScoreInputs,
    selected: usize,
    /// Digits typed into the selected field, not yet committed
    buffer: Option<String>,
}

impl FormState {
    /// Create a form seeded with `defaults`, pulled into domain.
    #[must_use]
    pub fn new(defaults: ScoreInputs) -> Self {
        let mut values = defaults;
        for skill in Skill::ALL {
            values.set(skill, clamp_to_domain(skill, defaults.get(skill)));
        }
        Self {
            values,
            defaults: values,
            selected: 0,
            buffer: None,
        }
    }

    #[must_use]
    pub const fn values(&self) -> &ScoreInputs {
        &self.values
    }

    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub const fn selected_skill(&self) -> Skill {
        Skill::ALL[self.selected]
    }

    /// Text being typed into the selected field, if any.
    #[must_use]
    pub fn buffer(&self) -> Option<&str> {
        self.buffer.as_deref()
    }

    pub fn select_next(&mut self) -> Option<String> {
        let note = self.commit();
        self.selected = (self.selected + 1) % Skill::ALL.len();
        note
    }

    pub fn select_prev(&mut self) -> Option<String> {
        let note = self.commit();
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(Skill::ALL.len() - 1);
        note
    }

    /// Step the selected field up by its step size.
    pub fn increment(&mut self) -> Option<String> {
        self.step_by(1.0)
    }

    /// Step the selected field down by its step size.
    pub fn decrement(&mut self) -> Option<String> {
        self.step_by(-1.0)
    }

    fn step_by(&mut self, direction: f64) -> Option<String> {
        let note = self.commit();
        let skill = self.selected_skill();
        let step = step_for(skill);
        let next = snap(self.values.get(skill) + direction * step, step);
        self.values.set(skill, clamp_to_domain(skill, next));
        note
    }

    /// Append a typed character. Only digits and a single '.' are accepted.
    pub fn push_char(&mut self, c: char) -> bool {
        let buffer = self.buffer.get_or_insert_with(String::new);
        let accepted = c.is_ascii_digit() || (c == '.' && !buffer.contains('.'));
        if accepted && buffer.len() < 6 {
            buffer.push(c);
            true
        } else {
            false
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.pop();
            if buffer.is_empty() {
                self.buffer = None;
            }
        }
    }

    /// Drop any uncommitted typing.
    pub fn cancel_edit(&mut self) -> bool {
        self.buffer.take().is_some()
    }

    /// Commit typed text into the selected field.
    ///
    /// Returns a note for the status line when the text was rejected or
    /// pulled into range.
    pub fn commit(&mut self) -> Option<String> {
        let text = self.buffer.take()?;
        let skill = self.selected_skill();
        let Ok(parsed) = text.parse::<f64>() else {
            return Some(format!("'{text}' is not a number"));
        };
        let (min, max) = skill.domain();
        let value = clamp_to_domain(skill, parsed);
        self.values.set(skill, value);
        if value.to_bits() == parsed.to_bits() {
            None
        } else {
            Some(format!("{skill} limited to {min}-{max}"))
        }
    }

    /// Restore the starting values.
    pub fn reset(&mut self) {
        self.values = self.defaults;
        self.buffer = None;
    }
}

/// Ticks a status message stays up without further input.
const STATUS_TTL_TICKS: u64 = 16;

/// Main application state
pub struct App {
    /// Current page
    pub(crate) page: Page,
    /// Calculator form
    pub(crate) form: FormState,
    /// Last calculated result
    pub(crate) result: Option<ReadinessResult>,
    /// Help overlay visible
    pub(crate) show_help: bool,
    /// Should quit
    pub(crate) should_quit: bool,
    /// Status message to display temporarily
    pub(crate) status_message: Option<String>,
    /// Persistent capability warning (missing classifier artifacts)
    pub(crate) artifact_warning: Option<String>,
    /// Tick counter
    tick: u64,
    /// Tick at which the status message was set
    status_since: u64,
    scorer: ReadinessScorer,
}

impl App {
    /// Create a dashboard on the home page with the given form defaults.
    #[must_use]
    pub fn new(defaults: ScoreInputs) -> Self {
        Self {
            page: Page::Home,
            form: FormState::new(defaults),
            result: None,
            show_help: false,
            should_quit: false,
            status_message: None,
            artifact_warning: None,
            tick: 0,
            status_since: 0,
            scorer: ReadinessScorer::default(),
        }
    }

    /// Surface the artifact probe result on the status line.
    #[must_use]
    pub fn with_artifact_status(mut self, status: &ArtifactStatus) -> Self {
        self.artifact_warning = if status.is_available() {
            None
        } else {
            Some(MISSING_WARNING.to_string())
        };
        self
    }

    /// Open straight onto the calculator with a result already shown.
    #[must_use]
    pub fn calculated(mut self) -> Self {
        self.open_calculator();
        self.calculate();
        self
    }

    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub const fn result(&self) -> Option<&ReadinessResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub const fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn open_calculator(&mut self) {
        self.page = Page::Calculator;
    }

    pub fn go_home(&mut self) {
        self.form.cancel_edit();
        self.page = Page::Home;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Commit any typing and score the form.
    pub fn calculate(&mut self) {
        if let Some(note) = self.form.commit() {
            self.set_status_message(note);
        }
        match self.scorer.score(self.form.values()) {
            Ok(result) => {
                tracing::debug!("Dashboard calculated {:.2}", result.score);
                self.result = Some(result);
            }
            Err(e) => self.set_status_message(e.to_string()),
        }
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Route a form note (if any) to the status line.
    pub fn note(&mut self, note: Option<String>) {
        if let Some(msg) = note {
            self.set_status_message(msg);
        }
    }

    /// Set a temporary status message
    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_since = self.tick;
    }

    /// Advance the tick counter, expiring a stale status message.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if self.status_message.is_some()
            && self.tick.saturating_sub(self.status_since) >= STATUS_TTL_TICKS
        {
            self.status_message = None;
        }
    }

    /// Clear the status message.
    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ScoreInputs::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_page_transitions() {
        let mut app = App::default();
        assert_eq!(app.page(), Page::Home);
        app.open_calculator();
        assert_eq!(app.page(), Page::Calculator);
        app.go_home();
        assert_eq!(app.page(), Page::Home);
    }

    #[test]
    fn test_form_selection_wraps() {
        let mut form = FormState::new(ScoreInputs::default());
        assert_eq!(form.selected_skill(), Skill::Dsa);
        form.select_prev();
        assert_eq!(form.selected_skill(), Skill::Cgpa);
        form.select_next();
        assert_eq!(form.selected_skill(), Skill::Dsa);
    }

    #[test]
    fn test_form_steps_stay_in_domain() {
        let mut form = FormState::new(ScoreInputs::default());
        // Communication: 3.0 stepped by 0.5 up to 5.0
        while form.selected_skill() != Skill::Communication {
            form.select_next();
        }
        form.increment();
        assert_eq!(form.values().communication, 3.5);
        for _ in 0..10 {
            form.increment();
        }
        assert_eq!(form.values().communication, 5.0);
        for _ in 0..20 {
            form.decrement();
        }
        assert_eq!(form.values().communication, 1.0);
    }

    #[test]
    fn test_cgpa_steps_do_not_drift() {
        let mut form = FormState::new(ScoreInputs::default());
        form.select_prev();
        assert_eq!(form.selected_skill(), Skill::Cgpa);
        for _ in 0..3 {
            form.increment();
        }
        assert!((form.values().cgpa - 7.1).abs() < 1e-9);
    }

    #[test]
    fn test_typing_commits_and_clamps() {
        let mut form = FormState::new(ScoreInputs::default());
        for c in "85".chars() {
            assert!(form.push_char(c));
        }
        assert_eq!(form.buffer(), Some("85"));
        assert_eq!(form.commit(), None);
        assert_eq!(form.values().dsa, 85.0);

        for c in "150".chars() {
            form.push_char(c);
        }
        let note = form.commit();
        assert_eq!(form.values().dsa, 100.0);
        assert_eq!(note.as_deref(), Some("DSA limited to 0-100"));
    }

    #[test]
    fn test_typing_rejects_second_dot_and_letters() {
        let mut form = FormState::new(ScoreInputs::default());
        assert!(form.push_char('7'));
        assert!(form.push_char('.'));
        assert!(!form.push_char('.'));
        assert!(!form.push_char('x'));
        form.pop_char();
        form.pop_char();
        assert_eq!(form.buffer(), None);
    }

    #[test]
    fn test_form_new_clamps_defaults() {
        let form = FormState::new(ScoreInputs::default().with(Skill::Projects, 9.0));
        assert_eq!(form.values().projects, 5.0);
    }

    #[test]
    fn test_calculate_sets_result() {
        let mut app = App::default();
        app.open_calculator();
        app.calculate();
        let result = app.result().unwrap();
        assert!((result.score - 46.2).abs() < 1e-9);
    }

    #[test]
    fn test_calculated_builder() {
        let app = App::default().calculated();
        assert_eq!(app.page(), Page::Calculator);
        assert!(app.result().is_some());
    }

    #[test]
    fn test_status_message_expires() {
        let mut app = App::default();
        app.set_status_message("Theme: light");
        for _ in 0..STATUS_TTL_TICKS - 1 {
            app.on_tick();
        }
        assert!(app.status_message.is_some());
        app.on_tick();
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_artifact_warning() {
        let missing = ArtifactStatus::Missing(vec![PathBuf::from("rf_model.pkl")]);
        let app = App::default().with_artifact_status(&missing);
        assert_eq!(app.artifact_warning.as_deref(), Some(MISSING_WARNING));
        let app = App::default().with_artifact_status(&ArtifactStatus::Available);
        assert!(app.artifact_warning.is_none());
    }
}
