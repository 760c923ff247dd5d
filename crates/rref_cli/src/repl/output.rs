//! Structured REPL messages, so line handling can be tested without a terminal.

#[derive(Debug, Clone, PartialEq)]
pub enum ReplMsg {
    /// Main output/result (what the user asked for)
    Output(String),
    Info(String),
    Error(String),
}

impl ReplMsg {
    pub fn output(s: impl Into<String>) -> Self {
        ReplMsg::Output(s.into())
    }

    pub fn info(s: impl Into<String>) -> Self {
        ReplMsg::Info(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        ReplMsg::Error(s.into())
    }
}

/// Messages produced by handling one input line
pub type ReplReply = Vec<ReplMsg>;

pub fn print_reply(reply: ReplReply) {
    for msg in reply {
        match msg {
            ReplMsg::Output(s) | ReplMsg::Info(s) => println!("{s}"),
            ReplMsg::Error(s) => eprintln!("✖ {s}"),
        }
    }
}
