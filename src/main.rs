use clap::Parser;
use indoc::indoc;

use panel_wm::config::{Cli, Config};
use panel_wm::desktop::Desktop;
use panel_wm::document::{Document, DocumentBuilder, WindowSpec};
use panel_wm::drivers::console::{ConsoleDriver, TerminalSession};
use panel_wm::error::{Result, WmError};
use panel_wm::runner::{DesktopApp, run_desktop};
use panel_wm::theme::Theme;
use panel_wm::tracing_sub;
use panel_wm::window::Size;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::try_from(&cli)?;
    tracing_sub::init(config.log_file.as_deref())?;

    let document = portfolio(config.theme)?;
    if let Some(unknown) = config.open.iter().find(|id| document.window(id).is_none()) {
        return Err(WmError::InvalidConfig(format!("no window named `{unknown}`")));
    }
    let mut app = DesktopApp::new(Desktop::new(document), config.metrics);

    let mut session = TerminalSession::new()?;
    session.enter()?;
    app.resize(session.area()?);
    for id in &config.open {
        app.desktop_mut().open_window(id);
    }

    let mut driver = ConsoleDriver::new();
    tracing::info!(fps = config.fps, "desktop started");
    let result = run_desktop(&mut session, &mut driver, &mut app, config.frame_interval);
    session.exit()?;
    result
}

fn portfolio(theme: Theme) -> Result<Document> {
    DocumentBuilder::new(Size::default())
        .title("portfolio")
        .theme(theme)
        .theme_label()
        .window(
            WindowSpec::new("about", "About")
                .size(480.0, 320.0)
                .tab(
                    "bio",
                    "Bio",
                    indoc! {"
                        Hi! I build small, sharp tools for the terminal.

                        Drag this window by its title bar, resize it from
                        the right edge, the bottom edge or the corner, and
                        close it with [x]. It reopens where you left it.
                    "},
                )
                .tab(
                    "skills",
                    "Skills",
                    indoc! {"
                        Rust, systems programming, terminal user interfaces,
                        parsers, network services.
                    "},
                )
                .tab(
                    "now",
                    "Now",
                    indoc! {"
                        Polishing a floating window manager for the terminal.
                    "},
                ),
        )
        .window(
            WindowSpec::new("projects", "Projects")
                .size(560.0, 352.0)
                .body(indoc! {"
                    panel-wm
                      Floating panels with eased dragging, edge resizing,
                      tabbed content and light/dark themes.

                    render-bench
                      Frame pacing experiments for terminal renderers.

                    notes
                      A plain-text notebook with instant search.
                "}),
        )
        .window(
            WindowSpec::new("contact", "Contact")
                .size(400.0, 240.0)
                .body(indoc! {"
                    Say hello:

                      mail   hello@example.com
                      chat   @panel-wm
                "}),
        )
        .window(
            WindowSpec::new("help", "Keys")
                .size(440.0, 304.0)
                .body(indoc! {"
                    1-9          open a launcher entry
                    Esc, x       close the top window
                    t            toggle light/dark theme
                    Tab          next tab (Shift-Tab: previous)
                    Up/Down      scroll
                    PgUp/PgDn    scroll a page
                    q, Ctrl-C    quit
                "}),
        )
        .build()
}
