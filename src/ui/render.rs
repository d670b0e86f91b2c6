use crate::ui::app::App;
use crate::ui::char_info::render_char_info;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    let header_widget = Header::new(app.input(), app.panel().character_id(), app.input_error());
    frame.render_widget(header_widget.widget(), header);
    render_char_info(frame, body, app.panel().state());
    frame.render_widget(Footer::widget(footer), footer);
}
