use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use simplelog::{Color, Level};

/// Install the terminal logger used by the `axisconv` binary.
///
/// Calling it twice is harmless; the second logger is simply not installed.
pub fn init(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .set_level_color(Level::Trace, Some(Color::White))
        .set_level_color(Level::Info, Some(Color::Green))
        .set_level_color(Level::Warn, Some(Color::Yellow))
        .set_level_color(Level::Error, Some(Color::Red))
        .build();

    let _ = TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto);
}
