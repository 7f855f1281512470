pub mod bar_chart;
pub mod pagination_controls;
pub mod search_input;
pub mod stat_card;
