pub const DEFAULT_MESSAGE: &str = "Hello, World!";
pub const DEFAULT_COUNT: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// How many times the greeting printer repeats its message.
    pub count: usize,
    /// Message uppercased by the greeting printer.
    pub message: String,
    /// Logging verbosity.
    ///
    /// Only affects what is written to stderr, never standard output.
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            message: DEFAULT_MESSAGE.to_string(),
            verbosity: 0,
        }
    }
}
