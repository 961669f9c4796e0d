use translit_core::settings::ChatSettings;

/// What an incoming chat message asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Empty or ignored input; no reply.
    Ignore,
    Help,
    /// Scheme selection; holds the text after the prefix.
    Select(&'a str),
    /// Text to transliterate.
    Convert(&'a str),
}

/// Classify a message. Input is trimmed first; help aliases win over the
/// command prefix so `:help` is never treated as a scheme name.
pub fn parse_command<'a>(input: &'a str, settings: &ChatSettings) -> Command<'a> {
    let input = input.trim();
    if input.is_empty() || settings.is_ignored(input) {
        return Command::Ignore;
    }
    if settings.is_help(input) {
        return Command::Help;
    }
    match input.strip_prefix(settings.command_prefix()) {
        Some(rest) => Command::Select(rest),
        None => Command::Convert(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use translit_core::settings::Settings;

    fn settings() -> ChatSettings {
        Settings::default_settings().chat
    }

    #[test]
    fn ignores_empty_and_none() {
        let s = settings();
        assert_eq!(parse_command("", &s), Command::Ignore);
        assert_eq!(parse_command("  \n\t", &s), Command::Ignore);
        assert_eq!(parse_command("None", &s), Command::Ignore);
        assert_eq!(parse_command(" NONE ", &s), Command::Ignore);
    }

    #[test]
    fn help_aliases() {
        let s = settings();
        for input in ["?", "help", "HELP", ":help", " :Help "] {
            assert_eq!(parse_command(input, &s), Command::Help, "input={input:?}");
        }
    }

    #[test]
    fn select_strips_prefix() {
        let s = settings();
        assert_eq!(parse_command(":iso9sysb", &s), Command::Select("iso9sysb"));
        assert_eq!(parse_command(" :Научная ", &s), Command::Select("Научная"));
        assert_eq!(parse_command(":", &s), Command::Select(""));
    }

    #[test]
    fn everything_else_converts() {
        let s = settings();
        assert_eq!(parse_command(" Привет ", &s), Command::Convert("Привет"));
        assert_eq!(parse_command("a:b", &s), Command::Convert("a:b"));
        assert_eq!(parse_command("??", &s), Command::Convert("??"));
    }
}
