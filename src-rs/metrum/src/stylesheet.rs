use owo_colors::Style;

pub const ERROR_COLOR: Style = Style::new().red();
pub const SOURCE_ANNOTATION: Style = Style::new().blue().bold();
pub const QUANTITY_VALUE: Style = Style::new().bold();
pub const UNIT: Style = Style::new().cyan();
pub const SUFFIX: Style = Style::new().green().bold();
pub const LABEL: Style = Style::new().dimmed();
