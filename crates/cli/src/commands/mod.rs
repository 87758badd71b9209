pub mod compare;
pub mod list;
pub mod run;

#[cfg(test)]
mod testing;

/// What a command leaves for the terminal: rendered output for stdout and
/// the session's current message for stderr.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandOutput {
    pub rendered: Vec<String>,
    pub message: Option<String>,
    pub failed: bool,
}

impl CommandOutput {
    pub fn stdout(&self) -> String {
        self.rendered.join("\n\n")
    }
}
