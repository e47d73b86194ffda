mod case_card;
mod hero;
mod status_bar;

pub use case_card::CaseCardWidget;
pub use hero::HeroWidget;
pub use status_bar::StatusBarWidget;
