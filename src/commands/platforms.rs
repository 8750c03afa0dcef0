// Platforms command: known keys and how they are displayed

use crate::platform::{self, FILTER_CHOICES};
use crate::ui;
use console::style;

pub fn platforms() -> anyhow::Result<()> {
    ui::header("Known platforms");
    for key in platform::known_keys() {
        let info = platform::describe(key);
        let marker = if FILTER_CHOICES.contains(&key) { "*" } else { " " };
        ui::block(&format!(
            "{} {:<20} {} {}",
            marker,
            key,
            info.icon.glyph(),
            style(info.name).dim()
        ));
    }
    ui::dim("* offered as a --platform filter choice; other keys are matched exactly");
    Ok(())
}
