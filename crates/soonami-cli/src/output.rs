use soonami_config::DisplayFormat;

use crate::screen::Screen;

/// Render the screen's regions, or `None` if nothing was ever shown.
pub fn render(screen: &Screen, format: DisplayFormat) -> anyhow::Result<Option<String>> {
    let Some(view) = screen.view() else {
        return Ok(None);
    };

    let rendered = match format {
        DisplayFormat::Json => serde_json::to_string_pretty(view)?,
        DisplayFormat::Text => format!(
            "{}\n{}\nTsunami alert: {}",
            view.title, view.date, view.tsunami_alert
        ),
    };
    Ok(Some(rendered))
}

/// Print the screen to stdout. A blank screen prints nothing.
pub fn output(screen: &Screen, format: DisplayFormat) -> anyhow::Result<()> {
    if let Some(rendered) = render(screen, format)? {
        println!("{rendered}");
    }
    Ok(())
}
