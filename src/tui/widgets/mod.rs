//! Custom TUI widgets.

pub mod notice_log;
pub mod recipe_card;

pub use notice_log::{MAX_NOTICES, Notice, NoticeKind, NoticeLogWidget};
pub use recipe_card::{
    CARD_HEIGHT, generated_card_lines, ingredient_tag_spans, star_rating, stored_card_lines,
};
