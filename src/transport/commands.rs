/// The two read-only chat commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `!scoreboard`: current leaderboard
    Scoreboard,
    /// `!daily`: today's summary
    Daily,
}

impl Command {
    pub fn parse(content: &str) -> Option<Command> {
        match content.trim() {
            "!scoreboard" => Some(Command::Scoreboard),
            "!daily" => Some(Command::Daily),
            _ => None,
        }
    }
}
