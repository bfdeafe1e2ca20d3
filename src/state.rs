//! Per-view state: the reorderable project board and the contact form.

use crate::models::Project;
use crate::relay::ContactMessage;
use crate::widgets::{InputBox, MessageArea};

// ============================================================================
// Project board
// ============================================================================

/// An in-flight reorder gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    /// Index the card was picked up from
    from: usize,
    /// Current drop target index
    over: usize,
}

/// The project list plus selection and drag state.
///
/// The list starts as the fixed showcase set and is only ever permuted;
/// cards are never created or destroyed at runtime.
#[derive(Debug, Clone)]
pub struct ProjectBoard {
    projects: Vec<Project>,
    /// Currently highlighted card
    pub selected: usize,
    drag: Option<Drag>,
}

impl Default for ProjectBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectBoard {
    pub fn new() -> Self {
        Self {
            projects: Project::showcase(),
            selected: 0,
            drag: None,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.projects.is_empty() {
            self.selected = (self.selected + 1) % self.projects.len();
        }
        if let Some(drag) = &mut self.drag {
            drag.over = self.selected;
        }
    }

    pub fn select_prev(&mut self) {
        if !self.projects.is_empty() {
            self.selected = (self.selected + self.projects.len() - 1) % self.projects.len();
        }
        if let Some(drag) = &mut self.drag {
            drag.over = self.selected;
        }
    }

    /// Move the card at `from` to position `to`: remove it, reinsert at
    /// the target index. Same-index moves and out-of-range indices are
    /// no-ops; the relative order of all other cards is preserved.
    pub fn move_card(&mut self, from: usize, to: usize) {
        if from == to || from >= self.projects.len() || to >= self.projects.len() {
            return;
        }
        let card = self.projects.remove(from);
        self.projects.insert(to, card);
        self.selected = to;
    }

    /// Pick up the card at `index`. Returns false if out of range.
    pub fn begin_drag(&mut self, index: usize) -> bool {
        if index >= self.projects.len() {
            return false;
        }
        self.selected = index;
        self.drag = Some(Drag { from: index, over: index });
        true
    }

    /// Update the drop target while dragging.
    pub fn drag_over(&mut self, index: usize) {
        if index >= self.projects.len() {
            return;
        }
        if let Some(drag) = &mut self.drag {
            drag.over = index;
            self.selected = index;
        }
    }

    /// Drop the dragged card, performing the move. Returns the
    /// `(from, to)` pair when a gesture was in progress.
    pub fn drop_card(&mut self) -> Option<(usize, usize)> {
        let drag = self.drag.take()?;
        self.move_card(drag.from, drag.over);
        Some((drag.from, drag.over))
    }

    /// Abandon the gesture without mutating the list.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_source(&self) -> Option<usize> {
        self.drag.map(|d| d.from)
    }

    pub fn drag_target(&self) -> Option<usize> {
        self.drag.map(|d| d.over)
    }
}

// ============================================================================
// Contact form
// ============================================================================

/// Which form control has the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Message,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
        }
    }
}

/// Submission lifecycle of the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    /// A send is in flight; the submit control is disabled.
    Sending,
    /// Last send succeeded; banner shown since this tick.
    Success { since_tick: u64 },
    /// Last send failed; fields are kept for retry.
    Failed { error: String },
}

/// The controlled name/email/message form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: InputBox,
    pub email: InputBox,
    pub message: MessageArea,
    pub focus: FormField,
    pub submit: SubmitState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: InputBox::new(),
            email: InputBox::new(),
            message: MessageArea::new(),
            focus: FormField::default(),
            submit: SubmitState::default(),
        }
    }

    /// All three fields populated (whitespace-only counts as empty).
    pub fn is_complete(&self) -> bool {
        !self.name.content().trim().is_empty()
            && !self.email.content().trim().is_empty()
            && !self.message.content().trim().is_empty()
    }

    /// Complete and not already sending.
    pub fn can_submit(&self) -> bool {
        self.is_complete() && self.submit != SubmitState::Sending
    }

    /// Snapshot the exact field values for the outbound send.
    pub fn values(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.content().to_string(),
            email: self.email.content().to_string(),
            message: self.message.content(),
        }
    }

    /// Clear all three fields (on successful send only).
    pub fn reset_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.focus = FormField::Name;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(board: &ProjectBoard) -> Vec<&'static str> {
        board.projects().iter().map(|p| p.title).collect()
    }

    #[test]
    fn move_card_forward_preserves_relative_order() {
        let mut board = ProjectBoard::new();
        let original = titles(&board);
        board.move_card(0, 2);
        assert_eq!(
            titles(&board),
            vec![original[1], original[2], original[0], original[3]]
        );
    }

    #[test]
    fn move_card_backward_preserves_relative_order() {
        let mut board = ProjectBoard::new();
        let original = titles(&board);
        board.move_card(3, 1);
        assert_eq!(
            titles(&board),
            vec![original[0], original[3], original[1], original[2]]
        );
    }

    #[test]
    fn move_card_same_index_is_a_noop() {
        let mut board = ProjectBoard::new();
        let original = titles(&board);
        board.move_card(2, 2);
        assert_eq!(titles(&board), original);
    }

    #[test]
    fn move_card_out_of_range_is_ignored() {
        let mut board = ProjectBoard::new();
        let original = titles(&board);
        board.move_card(0, 99);
        board.move_card(99, 0);
        assert_eq!(titles(&board), original);
    }

    #[test]
    fn drag_lifecycle_moves_on_drop_only() {
        let mut board = ProjectBoard::new();
        let original = titles(&board);

        assert!(board.begin_drag(1));
        board.drag_over(3);
        assert_eq!(titles(&board), original, "no mutation before drop");

        assert_eq!(board.drop_card(), Some((1, 3)));
        assert_eq!(
            titles(&board),
            vec![original[0], original[2], original[3], original[1]]
        );
        assert!(!board.is_dragging());
    }

    #[test]
    fn cancel_drag_leaves_list_unchanged() {
        let mut board = ProjectBoard::new();
        let original = titles(&board);
        board.begin_drag(0);
        board.drag_over(2);
        board.cancel_drag();
        assert_eq!(titles(&board), original);
        assert_eq!(board.drop_card(), None);
    }

    #[test]
    fn any_move_sequence_is_a_permutation() {
        let mut board = ProjectBoard::new();
        let mut original = titles(&board);
        board.move_card(0, 3);
        board.move_card(2, 0);
        board.move_card(1, 1);
        board.move_card(3, 2);
        let mut after = titles(&board);
        original.sort_unstable();
        after.sort_unstable();
        assert_eq!(after, original);
    }

    #[test]
    fn form_completeness_requires_all_fields() {
        let mut form = ContactForm::new();
        assert!(!form.is_complete());
        form.name.set_content("Ada");
        form.email.set_content("ada@example.com");
        assert!(!form.is_complete());
        form.message.insert_str("Hello!");
        assert!(form.is_complete());
    }

    #[test]
    fn whitespace_only_fields_do_not_count() {
        let mut form = ContactForm::new();
        form.name.set_content("   ");
        form.email.set_content("a@b.c");
        form.message.insert_str("hi");
        assert!(!form.is_complete());
    }

    #[test]
    fn sending_state_blocks_resubmission() {
        let mut form = ContactForm::new();
        form.name.set_content("Ada");
        form.email.set_content("ada@example.com");
        form.message.insert_str("Hello!");
        assert!(form.can_submit());
        form.submit = SubmitState::Sending;
        assert!(!form.can_submit());
    }

    #[test]
    fn values_snapshot_exact_field_contents() {
        let mut form = ContactForm::new();
        form.name.set_content("Ada Lovelace");
        form.email.set_content("ada@example.com");
        form.message.insert_str("line one");
        form.message.insert_newline();
        form.message.insert_str("line two");
        let values = form.values();
        assert_eq!(values.name, "Ada Lovelace");
        assert_eq!(values.email, "ada@example.com");
        assert_eq!(values.message, "line one\nline two");
    }

    #[test]
    fn reset_clears_fields_and_refocuses_name() {
        let mut form = ContactForm::new();
        form.name.set_content("Ada");
        form.email.set_content("ada@example.com");
        form.message.insert_str("Hello!");
        form.focus = FormField::Message;
        form.reset_fields();
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
        assert_eq!(form.focus, FormField::Name);
    }

    #[test]
    fn field_cycling_wraps_both_ways() {
        assert_eq!(FormField::Name.next(), FormField::Email);
        assert_eq!(FormField::Message.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Message);
    }
}
