pub mod card_animated;
pub mod section_header;
pub mod stat_card;
pub mod ui;
