pub const WELCOME_MESSAGE: &str = "Hexagon art generator";
pub const INSTRUCTIONS: &str = "Pick a grid size, two colors and a coloring mode. Click the canvas to close it.";
pub const NUM_HEXAGONS_PROMPT: &str = "Number of hexagons per row (4-20): ";
pub const AVAILABLE_COLORS: &str = "Available colors:";
pub const CUSTOM_OPTION: &str = "custom";
pub const FIRST_COLOR_PROMPT: &str = "Choose the first color (1-12): ";
pub const SECOND_COLOR_PROMPT: &str = "Choose the second color (1-12): ";
pub const CUSTOM_COLOR_PROMPT: &str = "Enter a color name or a hex code like #1E90FF: ";
pub const AVAILABLE_MODES: &str = "Coloring modes:";
pub const CHOOSE_COLORING_MODE: &str = "Choose a coloring mode (1-4): ";
pub const TRY_AGAIN: &str = "Try again: ";
