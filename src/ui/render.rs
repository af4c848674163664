use crate::session::Phase;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::screens::{loading, question, result, start};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let phase = app.session().phase();

    let header_widget = Header::new(app.session(), app.source_label());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    match phase {
        Phase::Idle => start::render(frame, body, app),
        Phase::Loading => loading::render(frame, body, app.animation_tick()),
        Phase::InProgress => question::render(frame, body, app),
        Phase::Finished => result::render(frame, body, app),
    }

    let footer_widget = Footer::new(phase);
    frame.render_widget(footer_widget.widget(footer), footer);
}
