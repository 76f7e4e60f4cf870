/// One line typed into the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Show,
    Webhook(String),
    VerifySsl(bool),
    Save,
    Reload,
    Test,
    ClearError,
    ClearResult,
    Help,
    Quit,
}

impl SessionCommand {
    pub const HELP: &'static str = "\
commands:
  show                 print current settings and last test
  webhook <url>        edit the webhook URL
  verify-ssl <bool>    edit the certificate check flag
  save                 write the settings to the server
  reload               discard edits and read the settings again
  test                 send a test notification
  clear                clear the error message
  clear-result         forget the last test result
  quit                 leave the session";

    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "show" | "" => Ok(Self::Show),
            "webhook" => Ok(Self::Webhook(rest.to_string())),
            "verify-ssl" => rest
                .parse::<bool>()
                .map(Self::VerifySsl)
                .map_err(|_| format!("expected true or false, got '{}'", rest)),
            "save" => Ok(Self::Save),
            "reload" => Ok(Self::Reload),
            "test" => Ok(Self::Test),
            "clear" => Ok(Self::ClearError),
            "clear-result" => Ok(Self::ClearResult),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command '{}', type 'help'", other)),
        }
    }
}
