//! Add-recipe form rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use crate::app::App;
use crate::app::layout::centered_rect;
use crate::app::state::AddField;

impl App {
    /// Renders the add-recipe form as a centered overlay.
    pub(crate) fn render_add_form(&self, frame: &mut Frame) {
        let area = centered_rect(70, 90, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::bordered()
            .title(" Add Recipe ")
            .title_style(self.theme.header_style())
            .title_bottom(Line::from(vec![
                Span::styled(" [Tab] ", self.theme.highlight_style()),
                Span::styled("Next field ", self.theme.muted_style()),
                Span::styled("[Ctrl+S] ", self.theme.highlight_style()),
                Span::styled("Submit ", self.theme.muted_style()),
                Span::styled("[Esc] ", self.theme.highlight_style()),
                Span::styled("Cancel ", self.theme.muted_style()),
            ]))
            .border_style(self.theme.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title, description, ingredients, instructions, prep_time, difficulty] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .areas(inner);

        self.render_form_input(frame, title, AddField::Title);
        self.render_form_input(frame, description, AddField::Description);
        self.render_form_input(frame, ingredients, AddField::Ingredients);
        self.render_form_input(frame, instructions, AddField::Instructions);
        self.render_form_input(frame, prep_time, AddField::PrepTime);
        self.render_difficulty(frame, difficulty);
    }

    fn render_form_input(&self, frame: &mut Frame, area: Rect, field: AddField) {
        let Some(input) = self.add_form.area_for(field) else {
            return;
        };
        let focused = self.add_form.field == field;
        let block = Block::bordered()
            .title(format!(" {} ", field.label()))
            .title_style(self.theme.header_style())
            .border_style(if focused {
                self.theme.highlight_style()
            } else {
                self.theme.border_style()
            });

        let mut textarea = input.clone();
        textarea.set_block(block);
        textarea.set_style(self.theme.normal_style());
        textarea.set_cursor_line_style(ratatui::style::Style::default());
        textarea.set_placeholder_style(self.theme.placeholder_style());
        frame.render_widget(&textarea, area);
    }

    fn render_difficulty(&self, frame: &mut Frame, area: Rect) {
        let focused = self.add_form.field == AddField::Difficulty;
        let line = Line::from(vec![
            Span::styled(
                format!(" {}: ", AddField::Difficulty.label()),
                if focused {
                    self.theme.highlight_style()
                } else {
                    self.theme.muted_style()
                },
            ),
            Span::styled(
                format!("< {} >", self.add_form.difficulty.name()),
                self.theme.normal_style(),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
