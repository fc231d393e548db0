use std::io::{self, BufRead, Write};
use thiserror::Error;
use super::{
    MAX_GRID_SIZE, MIN_GRID_SIZE,
    color::{Color, ColorError},
    coloring::{ColoringMode, Palette},
    messages,
    translate::Translator,
};

/// The named colors offered in the menu, numbered from 1
pub const COLOR_MENU: [&str; 11] = [
    "red", "blue", "green", "yellow", "purple", "cyan", "turquoise", "magenta", "pink", "orange", "brown",
];

/// The menu number of the custom color option
pub const CUSTOM_COLOR_CHOICE: usize = COLOR_MENU.len() + 1;

/// Everything collected from the user
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    /// The number of hexagons along one side
    pub n: usize,
    /// The two colors
    pub palette: Palette,
    /// The coloring mode
    pub mode: ColoringMode,
}

/// Answers given up front, e.g. on the command line. Every answer given here skips its prompt.
#[derive(Clone, Debug, Default)]
pub struct Preset {
    /// The number of hexagons along one side
    pub n: Option<usize>,
    /// The first color as a name or hex code
    pub first: Option<String>,
    /// The second color as a name or hex code
    pub second: Option<String>,
    /// The coloring mode
    pub mode: Option<ColoringMode>,
}

/// A selection from the color menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorChoice {
    /// One of the named colors of the menu
    Named(&'static str),
    /// The user wants to type a color
    Custom,
}

/// Reads answers from an input stream and writes prompts to an output stream
pub struct Shell<R: BufRead, W: Write, T: Translator> {
    /// Where answers come from
    input: R,
    /// Where prompts go
    output: W,
    /// Translates free-text colors
    translator: T,
}

impl<R: BufRead, W: Write, T: Translator> Shell<R, W, T> {
    /// Creates a new shell
    ///
    /// # Parameters
    ///
    /// input: Where answers are read from
    ///
    /// output: Where prompts and messages are written to
    ///
    /// translator: Translates free-text custom colors
    pub fn new(input: R, output: W, translator: T) -> Self {
        Self {
            input,
            output,
            translator,
        }
    }

    /// Collects all settings, prompting only for the ones missing from the preset
    ///
    /// # Parameters
    ///
    /// preset: The answers given up front
    ///
    /// # Errors
    ///
    /// ShellError::Config if an answer in the preset is invalid, see ShellError for the rest
    pub fn collect(&mut self, preset: &Preset) -> Result<Settings, ShellError> {
        if preset.n.is_none() || preset.first.is_none() || preset.second.is_none() || preset.mode.is_none() {
            writeln!(self.output, "{}", messages::WELCOME_MESSAGE)?;
            writeln!(self.output, "{}", messages::INSTRUCTIONS)?;
        }

        let n = match preset.n {
            Some(n) => check_grid_size(n, &n.to_string()).map_err(ShellError::Config)?,
            None => self.read_grid_size()?,
        };

        let first = match &preset.first {
            Some(color) => resolve_custom_color(color, &self.translator).map_err(ShellError::Config)?,
            None => self.read_color(messages::FIRST_COLOR_PROMPT)?,
        };

        let second = match &preset.second {
            Some(color) => resolve_custom_color(color, &self.translator).map_err(ShellError::Config)?,
            None => self.read_color(messages::SECOND_COLOR_PROMPT)?,
        };

        let mode = match preset.mode {
            Some(mode) => mode,
            None => self.read_mode()?,
        };

        let settings = Settings {
            n,
            palette: Palette::new(first, second),
            mode,
        };
        log::info!("Settings: n = {}, colors = {} and {}, mode = {}", n, first, second, mode);

        Ok(settings)
    }

    /// Prompts for the number of hexagons along one side until a number in range is entered
    pub fn read_grid_size(&mut self) -> Result<usize, ShellError> {
        self.prompt(messages::NUM_HEXAGONS_PROMPT)?;
        self.read_until(parse_grid_size)
    }

    /// Shows the color menu and prompts until a valid color is chosen
    ///
    /// # Parameters
    ///
    /// prompt: The question to ask
    pub fn read_color(&mut self, prompt: &str) -> Result<Color, ShellError> {
        writeln!(self.output, "{}", messages::AVAILABLE_COLORS)?;
        for (index, name) in COLOR_MENU.iter().enumerate() {
            writeln!(self.output, "{:>2}. {}", index + 1, name)?;
        }
        writeln!(self.output, "{:>2}. {}", CUSTOM_COLOR_CHOICE, messages::CUSTOM_OPTION)?;
        self.prompt(prompt)?;

        match self.read_until(parse_color_choice)? {
            ColorChoice::Named(name) => Ok(Color::from_name(name)?),
            ColorChoice::Custom => self.read_custom_color(),
        }
    }

    /// Prompts for a hex code or a color name until one can be resolved
    pub fn read_custom_color(&mut self) -> Result<Color, ShellError> {
        self.prompt(messages::CUSTOM_COLOR_PROMPT)?;

        loop {
            let line = self.read_line()?;
            match resolve_custom_color(&line, &self.translator) {
                Ok(color) => return Ok(color),
                Err(error) => self.report(&error)?,
            }
        }
    }

    /// Shows the mode menu and prompts until a listed mode is chosen
    pub fn read_mode(&mut self) -> Result<ColoringMode, ShellError> {
        writeln!(self.output, "{}", messages::AVAILABLE_MODES)?;
        for mode in ColoringMode::ALL {
            writeln!(self.output, "{}. {}", mode.menu_number(), mode)?;
        }
        self.prompt(messages::CHOOSE_COLORING_MODE)?;

        self.read_until(parse_mode)
    }

    /// Reads lines until one parses, reporting every failure
    fn read_until<V>(&mut self, parse: impl Fn(&str) -> Result<V, InputError>) -> Result<V, ShellError> {
        loop {
            let line = self.read_line()?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(error) => self.report(&error)?,
            }
        }
    }

    /// Writes a prompt without a line break
    fn prompt(&mut self, text: &str) -> Result<(), ShellError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Tells the user what was wrong and asks again
    fn report(&mut self, error: &InputError) -> Result<(), ShellError> {
        log::debug!("Rejected input: {:?}", error);
        writeln!(self.output, "{}", error)?;
        self.prompt(messages::TRY_AGAIN)
    }

    /// Reads one trimmed line
    ///
    /// # Errors
    ///
    /// ShellError::InputClosed if the input has ended
    fn read_line(&mut self) -> Result<String, ShellError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

/// Parses the number of hexagons along one side
///
/// # Errors
///
/// InputError::InvalidNumericInput if it is not a whole number in the allowed range
pub fn parse_grid_size(input: &str) -> Result<usize, InputError> {
    let input = input.trim();
    let n = input.parse::<usize>().map_err(|_| InputError::InvalidNumericInput(input.to_string()))?;
    check_grid_size(n, input)
}

/// Checks that a grid size is within the allowed range
fn check_grid_size(n: usize, input: &str) -> Result<usize, InputError> {
    if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&n) {
        Ok(n)
    } else {
        Err(InputError::InvalidNumericInput(input.to_string()))
    }
}

/// Parses a selection from the color menu
///
/// # Errors
///
/// InputError::InvalidColorSelection if it is not one of the menu numbers
pub fn parse_color_choice(input: &str) -> Result<ColorChoice, InputError> {
    let input = input.trim();
    match input.parse::<usize>() {
        Ok(CUSTOM_COLOR_CHOICE) => Ok(ColorChoice::Custom),
        Ok(number) if (1..CUSTOM_COLOR_CHOICE).contains(&number) => Ok(ColorChoice::Named(COLOR_MENU[number - 1])),
        _ => Err(InputError::InvalidColorSelection(input.to_string())),
    }
}

/// Resolves a custom color. Input starting with '#' must be a 6 digit hex code,
/// anything else is translated and looked up as a color name, spaces are ignored.
///
/// # Parameters
///
/// input: What the user typed
///
/// translator: Translates the input into English
///
/// # Errors
///
/// InputError::InvalidHexFormat for a malformed hex code
///
/// InputError::UnresolvableCustomColor if the translation is not a known color
pub fn resolve_custom_color<T: Translator + ?Sized>(input: &str, translator: &T) -> Result<Color, InputError> {
    let input = input.trim();
    if input.starts_with('#') {
        return Color::from_hex(input).map_err(|_| InputError::InvalidHexFormat(input.to_string()));
    }

    let translated = translator
        .translate(input)
        .map_err(|_| InputError::UnresolvableCustomColor(input.to_string()))?;
    let name: String = translated.split_whitespace().collect();

    Color::from_name(&name).map_err(|_| InputError::UnresolvableCustomColor(input.to_string()))
}

/// Parses a selection from the mode menu
///
/// # Errors
///
/// InputError::InvalidModeSelection if it is not one of the menu numbers
pub fn parse_mode(input: &str) -> Result<ColoringMode, InputError> {
    let input = input.trim();
    input
        .parse::<usize>()
        .ok()
        .and_then(ColoringMode::from_menu_number)
        .ok_or_else(|| InputError::InvalidModeSelection(input.to_string()))
}

/// Input that is rejected and asked for again
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a whole number from {} to {}.", MIN_GRID_SIZE, MAX_GRID_SIZE)]
    InvalidNumericInput(String),
    #[error("'{0}' is not one of the listed colors, pick a number from 1 to {}.", CUSTOM_COLOR_CHOICE)]
    InvalidColorSelection(String),
    #[error("'{0}' is not a valid hex code, use the form #RRGGBB.")]
    InvalidHexFormat(String),
    #[error("'{0}' is not a color that can be drawn.")]
    UnresolvableCustomColor(String),
    #[error("'{0}' is not one of the listed modes, pick a number from 1 to 4.")]
    InvalidModeSelection(String),
}

/// Errors that end the prompts
#[derive(Error, Debug)]
pub enum ShellError {
    /// The input stream ended before all answers were given
    #[error("The input ended before all settings were entered")]
    InputClosed,
    /// Reading or writing the console failed
    #[error("Console error: {}", .0)]
    Io(io::Error),
    /// A menu color has no value
    #[error("{}", .0)]
    Color(ColorError),
    /// An answer given up front is invalid
    #[error("Invalid setting: {}", .0)]
    Config(InputError),
}

impl From<io::Error> for ShellError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ColorError> for ShellError {
    fn from(value: ColorError) -> Self {
        Self::Color(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::GlossaryTranslator;
    use std::io::Cursor;

    fn shell(input: &str) -> Shell<Cursor<Vec<u8>>, Vec<u8>, GlossaryTranslator> {
        Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), GlossaryTranslator)
    }

    fn output(shell: &Shell<Cursor<Vec<u8>>, Vec<u8>, GlossaryTranslator>) -> String {
        String::from_utf8_lossy(&shell.output).into_owned()
    }

    #[test]
    fn grid_size_range() {
        assert_eq!(parse_grid_size("4"), Ok(4));
        assert_eq!(parse_grid_size(" 20 "), Ok(20));
        assert_eq!(parse_grid_size("3"), Err(InputError::InvalidNumericInput("3".to_string())));
        assert_eq!(parse_grid_size("21"), Err(InputError::InvalidNumericInput("21".to_string())));
        assert_eq!(parse_grid_size("4.5"), Err(InputError::InvalidNumericInput("4.5".to_string())));
        assert_eq!(parse_grid_size("-5"), Err(InputError::InvalidNumericInput("-5".to_string())));
    }

    #[test]
    fn color_menu_choices() {
        assert_eq!(parse_color_choice("1"), Ok(ColorChoice::Named("red")));
        assert_eq!(parse_color_choice("11"), Ok(ColorChoice::Named("brown")));
        assert_eq!(parse_color_choice("12"), Ok(ColorChoice::Custom));
        assert!(parse_color_choice("0").is_err());
        assert!(parse_color_choice("13").is_err());
        assert!(parse_color_choice("red").is_err());
    }

    #[test]
    fn menu_colors_all_resolve() {
        assert!(COLOR_MENU.iter().all(|name| Color::from_name(name).is_ok()));
    }

    #[test]
    fn custom_colors() {
        let translator = GlossaryTranslator;
        assert_eq!(resolve_custom_color("#1e90ff", &translator), Ok(Color::new(0x1E, 0x90, 0xFF)));
        assert_eq!(resolve_custom_color("Dodger Blue", &translator), Ok(Color::new(0x1E, 0x90, 0xFF)));
        assert_eq!(resolve_custom_color("синий", &translator), Ok(Color::new(0x00, 0x00, 0xFF)));
        assert_eq!(resolve_custom_color("#12345", &translator), Err(InputError::InvalidHexFormat("#12345".to_string())));
        assert_eq!(resolve_custom_color("blorange", &translator), Err(InputError::UnresolvableCustomColor("blorange".to_string())));
        assert_eq!(resolve_custom_color("", &translator), Err(InputError::UnresolvableCustomColor(String::new())));
    }

    #[test]
    fn mode_menu() {
        assert_eq!(parse_mode("2"), Ok(ColoringMode::VerticalGradient));
        assert_eq!(parse_mode("random"), Err(InputError::InvalidModeSelection("random".to_string())));
        assert!(parse_mode("5").is_err());
    }

    #[test]
    fn prompts_repeat_until_valid() {
        let mut shell = shell("abc\n3\n7\n");
        assert_eq!(shell.read_grid_size().unwrap(), 7);

        let output = output(&shell);
        assert!(output.contains("'abc' is not a whole number"));
        assert!(output.contains("'3' is not a whole number"));
    }

    #[test]
    fn custom_color_after_bad_attempts() {
        let mut shell = shell("12\n#zzzzzz\nnot a color\nтёмно-красный\n");
        assert_eq!(shell.read_color(messages::FIRST_COLOR_PROMPT).unwrap(), Color::new(0x8B, 0x00, 0x00));

        let output = output(&shell);
        assert!(output.contains("'#zzzzzz' is not a valid hex code"));
        assert!(output.contains("'not a color' is not a color that can be drawn"));
    }

    #[test]
    fn collects_everything_from_prompts() {
        let mut shell = shell("4\n1\n2\n1\n");
        let settings = shell.collect(&Preset::default()).unwrap();
        assert_eq!(settings, Settings {
            n: 4,
            palette: Palette::new(Color::new(0xFF, 0, 0), Color::new(0, 0, 0xFF)),
            mode: ColoringMode::Classic,
        });
        assert!(output(&shell).starts_with(messages::WELCOME_MESSAGE));
    }

    #[test]
    fn preset_skips_prompts() {
        let mut shell = shell("");
        let preset = Preset {
            n: Some(10),
            first: Some("#00FF00".to_string()),
            second: Some("navy".to_string()),
            mode: Some(ColoringMode::Random),
        };
        let settings = shell.collect(&preset).unwrap();
        assert_eq!(settings.n, 10);
        assert_eq!(settings.palette.get_second(), Color::new(0, 0, 0x80));
        assert!(output(&shell).is_empty());
    }

    #[test]
    fn invalid_preset_is_fatal() {
        let mut shell = shell("");
        let preset = Preset { n: Some(2), ..Preset::default() };
        assert!(matches!(shell.collect(&preset), Err(ShellError::Config(InputError::InvalidNumericInput(_)))));
    }

    #[test]
    fn closed_input_is_fatal() {
        let mut shell = shell("banana\n");
        assert!(matches!(shell.read_mode(), Err(ShellError::InputClosed)));
    }
}
