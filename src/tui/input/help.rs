use crate::tui::app::{App, Mode};

use super::{Effect, Event};

pub(super) fn handle_help(app: &mut App, event: Event) -> Option<Effect> {
    if event == Event::Cancel {
        app.set_mode(Mode::Normal);
    }
    None
}
