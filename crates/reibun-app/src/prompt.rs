use async_trait::async_trait;
use reibun_core::ports::Prompter;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

/// Numbered-list prompts on stdout, one answer read per line. An empty
/// answer takes the preselected row, `q` cancels.
pub struct TerminalPrompter {
    input: Mutex<Lines<BufReader<Stdin>>>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            input: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }
}

#[async_trait]
impl Prompter for TerminalPrompter {
    async fn choose(&self, message: &str, choices: &[String], start_row: usize) -> Option<usize> {
        println!();
        println!("{message}");
        for (number, choice) in choices.iter().enumerate() {
            // Continuation lines of a choice stay indented under its number
            let mut lines = choice.lines();
            if let Some(first) = lines.next() {
                println!("  {}) {first}", number + 1);
            }
            for rest in lines {
                println!("     {rest}");
            }
        }
        println!("Choice [{}], or q to cancel:", start_row + 1);

        let mut input = self.input.lock().await;
        loop {
            let line = match input.next_line().await {
                Ok(Some(line)) => line,
                _ => return None,
            };
            match parse_choice(&line, choices.len(), start_row) {
                Selection::Row(row) => return Some(row),
                Selection::Cancelled => return None,
                Selection::Invalid => {
                    println!("Enter a number between 1 and {}, or q:", choices.len())
                }
            }
        }
    }

    async fn notify(&self, message: &str) {
        println!("{message}");
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Selection {
    Row(usize),
    Cancelled,
    Invalid,
}

fn parse_choice(line: &str, count: usize, start_row: usize) -> Selection {
    let line = line.trim();
    if line.is_empty() {
        return Selection::Row(start_row);
    }
    if line.eq_ignore_ascii_case("q") {
        return Selection::Cancelled;
    }
    match line.parse::<usize>() {
        Ok(number) if (1..=count).contains(&number) => Selection::Row(number - 1),
        _ => Selection::Invalid,
    }
}
