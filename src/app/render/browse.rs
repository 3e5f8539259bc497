//! Browse screen rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::app::layout::calculate_browse_layout;
use crate::app::state::{BrowseFocus, Listing};
use crate::tui::widgets::{CARD_HEIGHT, NoticeLogWidget, generated_card_lines, stored_card_lines};

/// Placeholder when a stored listing comes back empty.
pub const NO_RESULTS: &str = "No recipes found. Try different ingredients!";

/// Placeholder when an AI recommendation listing comes back empty.
pub const NO_RECOMMENDATIONS: &str = "No AI recommendations available.";

impl App {
    pub(crate) fn render_browse(&self, frame: &mut Frame) {
        let layout = calculate_browse_layout(frame.area());

        self.render_header(frame, layout.header);
        self.render_results(frame, layout.results);
        frame.render_widget(NoticeLogWidget::new(&self.notices, &self.theme), layout.notices);
        self.render_input(
            frame,
            layout.ingredients,
            &self.search.ingredients,
            " Ingredients ",
            self.focus == BrowseFocus::Ingredients,
        );
        self.render_input(
            frame,
            layout.dietary,
            &self.search.dietary,
            " Dietary ",
            self.focus == BrowseFocus::Dietary,
        );
        self.render_footer(frame, layout.footer);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(" Ladle ", self.theme.header_style())];
        if self.is_loading {
            spans.push(Span::styled("Loading...", self.theme.warning_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" {} ", self.results.title))
            .title_style(self.theme.header_style())
            .borders(Borders::ALL)
            .border_style(if self.focus == BrowseFocus::Results {
                self.theme.highlight_style()
            } else {
                self.theme.border_style()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.results.is_empty() {
            let placeholder = match &self.results.listing {
                Listing::Stored(_) => NO_RESULTS,
                Listing::Generated(_) => NO_RECOMMENDATIONS,
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    placeholder,
                    self.theme.muted_style(),
                ))),
                inner,
            );
            return;
        }

        let width = inner.width as usize;
        let visible_cards = (inner.height as usize / CARD_HEIGHT).max(1);

        // Window the listing so the selected card stays visible.
        let first = self
            .results
            .selected
            .saturating_sub(visible_cards.saturating_sub(1));
        let mut lines: Vec<Line<'static>> = Vec::new();
        match &self.results.listing {
            Listing::Stored(recipes) => {
                for (i, recipe) in recipes.iter().enumerate().skip(first).take(visible_cards) {
                    lines.extend(stored_card_lines(
                        recipe,
                        &self.theme,
                        i == self.results.selected,
                        width,
                    ));
                }
            }
            Listing::Generated(recipes) => {
                for (i, recipe) in recipes.iter().enumerate().skip(first).take(visible_cards) {
                    lines.extend(generated_card_lines(
                        recipe,
                        &self.theme,
                        i == self.results.selected,
                        width,
                    ));
                }
            }
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        input: &tui_textarea::TextArea<'static>,
        title: &str,
        focused: bool,
    ) {
        let block = Block::bordered()
            .title(title)
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

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = Line::from(vec![
            Span::styled(" [Enter] ", self.theme.highlight_style()),
            Span::styled("Search  ", self.theme.muted_style()),
            Span::styled("[Ctrl+R] ", self.theme.highlight_style()),
            Span::styled("AI Recommend  ", self.theme.muted_style()),
            Span::styled("[Ctrl+P] ", self.theme.highlight_style()),
            Span::styled("Popular  ", self.theme.muted_style()),
            Span::styled("[Ctrl+N] ", self.theme.highlight_style()),
            Span::styled("Add Recipe  ", self.theme.muted_style()),
            Span::styled("[Tab] ", self.theme.highlight_style()),
            Span::styled("Focus  ", self.theme.muted_style()),
            Span::styled("[Ctrl+C] ", self.theme.highlight_style()),
            Span::styled("Quit", self.theme.muted_style()),
        ]);
        frame.render_widget(Paragraph::new(footer), area);
    }
}
