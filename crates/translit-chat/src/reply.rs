use std::fmt;

use translit_core::SchemeId;

/// A reply to send back to the user. `Display` renders the message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Help {
        prefix: char,
        /// Display names, sorted.
        schemes: Vec<String>,
    },
    SchemeSelected(SchemeId),
    /// Holds the full input as received (after trimming).
    UnknownCommand(String),
    Converted { scheme: SchemeId, text: String },
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Help { prefix, schemes } => {
                write!(
                    f,
                    "Присылайте команду или текст. Команды начинаются с символа '{prefix}' и могут быть такими"
                )?;
                write!(f, "\nhelp")?;
                for name in schemes {
                    write!(f, "\n{name}")?;
                }
                Ok(())
            }
            Reply::SchemeSelected(id) => write!(
                f,
                "Установлен режим транслитерации по методу '{}'",
                id.name()
            ),
            Reply::UnknownCommand(input) => write!(f, "Незнакомая команда '{input}'"),
            Reply::Converted { scheme, text } => {
                write!(f, "Mode '{}', answer is:\n{text}", scheme.name())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_help() {
        let reply = Reply::Help {
            prefix: ':',
            schemes: vec!["A".to_string(), "B".to_string()],
        };
        let text = reply.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("':'"));
        assert_eq!(&lines[1..], ["help", "A", "B"]);
    }

    #[test]
    fn render_selected_and_unknown() {
        let id = SchemeId::new("gostr", "ГОСТ Р 52535.1-2006");
        assert_eq!(
            Reply::SchemeSelected(id).to_string(),
            "Установлен режим транслитерации по методу 'ГОСТ Р 52535.1-2006'"
        );
        assert_eq!(
            Reply::UnknownCommand(":klingon".to_string()).to_string(),
            "Незнакомая команда ':klingon'"
        );
    }

    #[test]
    fn render_converted() {
        let reply = Reply::Converted {
            scheme: SchemeId::new("bgnpcgn", "BGN/PCGN (1944)"),
            text: "Volga".to_string(),
        };
        assert_eq!(reply.to_string(), "Mode 'BGN/PCGN (1944)', answer is:\nVolga");
    }
}
