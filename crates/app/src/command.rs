use std::str::FromStr;

/// One line of user input on the quiz screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based option index; typed one-based.
    Select(usize),
    Submit,
    Next,
    Previous,
    Time,
    Restart,
    Help,
    Quit,
    /// Bare Enter.
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let trimmed = line.trim();
        let cmd = match trimmed.to_ascii_lowercase().as_str() {
            "" => Command::Continue,
            "s" | "submit" => Command::Submit,
            "n" | "next" => Command::Next,
            "p" | "prev" | "previous" => Command::Previous,
            "t" | "time" => Command::Time,
            "r" | "restart" => Command::Restart,
            "h" | "?" | "help" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => match other.parse::<usize>() {
                Ok(n) if n > 0 => Command::Select(n - 1),
                _ => return Err(UnknownCommand(trimmed.to_string())),
            },
        };
        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_numbers_are_one_based() {
        assert_eq!("1".parse(), Ok(Command::Select(0)));
        assert_eq!(" 4 ".parse(), Ok(Command::Select(3)));
        assert_eq!(
            "0".parse::<Command>(),
            Err(UnknownCommand("0".into()))
        );
    }

    #[test]
    fn words_and_letters_map_to_commands() {
        assert_eq!("S".parse(), Ok(Command::Submit));
        assert_eq!("next".parse(), Ok(Command::Next));
        assert_eq!("p".parse(), Ok(Command::Previous));
        assert_eq!("".parse(), Ok(Command::Continue));
        assert_eq!(
            "skip".parse::<Command>(),
            Err(UnknownCommand("skip".into()))
        );
    }
}
