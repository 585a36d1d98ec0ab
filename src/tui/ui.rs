use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{FactBox, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, main_area, button_area] = layout.areas(frame.area());

    TitleBar::new(app.source.name(), app.fetch_count).render(frame, title_area);
    FactBox::new(&app.facts, spinner_frame).render(frame, main_area);
    tui.trigger.render(frame, button_area);
}
