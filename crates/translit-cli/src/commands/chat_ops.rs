use std::io::{self, BufRead, Write};

use translit_engine::TranslitEngine;

/// Local chat loop: each stdin line is one message from `user`.
pub fn chat_cmd(engine: &TranslitEngine, user: &str) {
    let bot = die!(engine.responder(), "Error: default scheme: {}");
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        if let Some(reply) = bot.respond(user, &line) {
            die!(writeln!(stdout, "{reply}"), "Error writing reply: {}");
            die!(stdout.flush(), "Error writing reply: {}");
        }
    }
}
