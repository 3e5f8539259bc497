//! Recipe detail modal rendering.

use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::app::layout::centered_rect;
use crate::tui::widgets::recipe_card::NO_DESCRIPTION;

impl App {
    /// Renders the recipe detail modal as a centered overlay.
    pub(crate) fn render_detail(&self, frame: &mut Frame) {
        let Some(detail) = &self.detail else {
            return;
        };

        let area = centered_rect(70, 80, frame.area());
        frame.render_widget(Clear, area);

        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(Span::styled(
            detail.title.clone(),
            self.theme.header_style(),
        )));
        lines.push(Line::from(Span::styled(
            detail
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            self.theme.normal_style(),
        )));
        lines.push(Line::from(""));

        let prep = detail
            .prep_time
            .map_or_else(|| "N/A".to_string(), |t| t.to_string());
        let difficulty = detail
            .difficulty
            .clone()
            .unwrap_or_else(|| "Easy".to_string());
        let servings = detail
            .servings
            .map_or_else(|| "N/A".to_string(), |s| s.to_string());
        let meta = format!(
            "Prep time: {prep} min   Difficulty: {difficulty}   Servings: {servings}"
        );
        lines.push(Line::from(Span::styled(meta, self.theme.muted_style())));
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled(
            "Ingredients".to_string(),
            self.theme.header_style(),
        )));
        for ingredient in &detail.ingredients {
            lines.push(Line::from(Span::styled(
                format!("  • {ingredient}"),
                self.theme.normal_style(),
            )));
        }
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled(
            "Instructions".to_string(),
            self.theme.header_style(),
        )));
        for (i, step) in detail.instructions.iter().enumerate() {
            lines.push(Line::from(Span::styled(
                format!("  {}. {step}", i + 1),
                self.theme.normal_style(),
            )));
        }

        if let Some(why) = &detail.why_recommended {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Why recommended".to_string(),
                self.theme.header_style(),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {why}"),
                self.theme.normal_style(),
            )));
        }

        let footer = self.detail_footer(detail.can_rate(), detail.rating_choice);

        let block = Block::default()
            .title(" Recipe ")
            .title_style(self.theme.header_style())
            .title_bottom(footer)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());

        #[allow(clippy::cast_possible_truncation)] // scroll fits terminal rows
        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((detail.scroll as u16, 0));
        frame.render_widget(paragraph, area);
    }

    /// Builds the modal's bottom title line. The rating row appears only
    /// when the recipe is rateable.
    fn detail_footer(&self, can_rate: bool, rating_choice: u8) -> Line<'static> {
        if can_rate {
            let filled = usize::from(rating_choice);
            Line::from(vec![
                Span::styled(" Rate: ", self.theme.muted_style()),
                Span::styled(
                    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled)),
                    self.theme.rating_style(),
                ),
                Span::styled(" [←/→] ", self.theme.highlight_style()),
                Span::styled("Adjust ", self.theme.muted_style()),
                Span::styled("[Enter] ", self.theme.highlight_style()),
                Span::styled("Submit ", self.theme.muted_style()),
                Span::styled("[Esc] ", self.theme.highlight_style()),
                Span::styled("Close ", self.theme.muted_style()),
            ])
        } else {
            Line::from(vec![
                Span::styled(" [Esc] ", self.theme.highlight_style()),
                Span::styled("Close ", self.theme.muted_style()),
            ])
        }
    }
}
