use super::banner::{
    EMPTY_REMINDER, FAREWELL, GOODBYE, INPUT_PROMPT, THINKING, print_help, print_welcome,
};
use super::terminal::{ReadOutcome, Terminal};
use anyhow::Result;
use std::io::Write;
use thapar_core::assistant::Assistant;
use tracing::debug;

/// What a line of input asks the loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Exit,
    Help,
    Clear,
    Empty,
    Ask,
}

impl Command {
    /// Classifies a line, ignoring case and surrounding whitespace.
    fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "exit" | "quit" => Command::Exit,
            "help" => Command::Help,
            "clear" => Command::Clear,
            "" => Command::Empty,
            _ => Command::Ask,
        }
    }

    /// Executes the command for `line`.
    ///
    /// Returns `Ok(false)` if the loop should exit.
    async fn execute(
        self,
        line: &str,
        assistant: &Assistant,
        terminal: &mut impl Terminal,
        out: &mut impl Write,
    ) -> Result<bool> {
        match self {
            Command::Exit => {
                writeln!(out, "{FAREWELL}")?;
                return Ok(false);
            }
            Command::Help => print_help(out)?,
            Command::Clear => {
                terminal.clear_screen()?;
                print_welcome(out)?;
            }
            Command::Empty => writeln!(out, "{EMPTY_REMINDER}")?,
            Command::Ask => {
                writeln!(out, "{THINKING}")?;
                out.flush()?;
                // The question is forwarded exactly as typed
                let answer = assistant.answer(line).await;
                writeln!(out, "\n{answer}\n")?;
            }
        }
        Ok(true)
    }
}

/// Runs the question loop until exit, interrupt or end of input.
///
/// One turn at a time: the next line is read only after the previous answer
/// has been written.
pub async fn run(
    assistant: &Assistant,
    terminal: &mut impl Terminal,
    out: &mut impl Write,
) -> Result<()> {
    print_welcome(out)?;

    loop {
        if !terminal.shows_prompt() {
            write!(out, "{INPUT_PROMPT}")?;
        }
        out.flush()?;
        let line = match terminal.read_line(INPUT_PROMPT)? {
            ReadOutcome::Line(line) => line,
            ReadOutcome::Interrupted => {
                writeln!(out, "{GOODBYE}")?;
                break;
            }
            ReadOutcome::Eof => {
                debug!("Input closed");
                break;
            }
        };

        let command = Command::parse(&line);
        debug!(?command, "Dispatching input");
        if !command.execute(&line, assistant, terminal, out).await? {
            break;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_assistant;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use thapar_core::completion::{CompletionModel, CompletionResponse};
    use thapar_core::config::ProfileConfig;

    const WELCOME: &str = "\nWelcome to Thapar University Information Chatbot\n\
        Ask me anything about Thapar Institute of Engineering & Technology\n\
        Examples: admissions, placements, courses, facilities, rankings\n\
        Type \"exit\" to quit, \"help\" for more options\n\n";

    /// Replays scripted input and records prompts and screen clears.
    #[derive(Default)]
    struct ScriptedTerminal {
        input: VecDeque<ReadOutcome>,
        prompts: Vec<String>,
        clears: usize,
        piped: bool,
    }

    impl ScriptedTerminal {
        fn with_lines(lines: &[&str]) -> Self {
            Self {
                input: lines
                    .iter()
                    .map(|l| ReadOutcome::Line(l.to_string()))
                    .collect(),
                ..Default::default()
            }
        }
    }

    impl Terminal for ScriptedTerminal {
        fn shows_prompt(&self) -> bool {
            !self.piped
        }

        fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
            self.prompts.push(prompt.to_string());
            Ok(self.input.pop_front().unwrap_or(ReadOutcome::Eof))
        }

        fn clear_screen(&mut self) -> Result<()> {
            self.clears += 1;
            Ok(())
        }
    }

    struct CountingModel {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CompletionModel for CountingModel {
        fn name(&self) -> &str {
            "counting"
        }

        async fn complete(
            &self,
            _prompt: &str,
            _profile: &ProfileConfig,
        ) -> Result<CompletionResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(CompletionResponse {
                text: "counted".to_string(),
                ..Default::default()
            })
        }
    }

    async fn run_script(assistant: &Assistant, terminal: &mut ScriptedTerminal) -> String {
        let mut out = Vec::new();
        run(assistant, terminal, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("exit"), Command::Exit);
        assert_eq!(Command::parse("  QUIT \n"), Command::Exit);
        assert_eq!(Command::parse("Help"), Command::Help);
        assert_eq!(Command::parse(" clear"), Command::Clear);
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse(" \t "), Command::Empty);
        assert_eq!(Command::parse("exit now"), Command::Ask);
        assert_eq!(Command::parse("/help"), Command::Ask);
    }

    #[tokio::test]
    async fn test_exit_prints_farewell() {
        for word in ["exit", "quit", " Exit ", "QUIT"] {
            let assistant = test_assistant(&[]);
            let mut terminal = ScriptedTerminal::with_lines(&[word, "never read"]);
            let output = run_script(&assistant, &mut terminal).await;

            assert_eq!(
                output,
                format!("{WELCOME}\nThanks for using Thapar University Chatbot\n")
            );
            assert_eq!(terminal.prompts, vec!["Ask about Thapar: "]);
            assert_eq!(terminal.input.len(), 1);
        }
    }

    #[tokio::test]
    async fn test_help_prints_listing_and_continues() {
        let assistant = test_assistant(&[]);
        let mut terminal = ScriptedTerminal::with_lines(&["help", "exit"]);
        let output = run_script(&assistant, &mut terminal).await;

        let mut help = Vec::new();
        print_help(&mut help).unwrap();
        assert_eq!(
            output,
            format!(
                "{WELCOME}{}\nThanks for using Thapar University Chatbot\n",
                String::from_utf8(help).unwrap()
            )
        );
        assert_eq!(terminal.prompts.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_input_prints_reminder_without_model_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let assistant = Assistant::new(
            Box::new(CountingModel {
                calls: calls.clone(),
            }),
            ProfileConfig::default(),
        );
        let mut terminal = ScriptedTerminal::with_lines(&["", "   ", "exit"]);
        let output = run_script(&assistant, &mut terminal).await;

        let reminder = "Please ask a question about Thapar University\n\n";
        assert_eq!(
            output,
            format!("{WELCOME}{reminder}{reminder}\nThanks for using Thapar University Chatbot\n")
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_question_prints_thinking_and_answer() {
        let assistant = test_assistant(&[]);
        let mut terminal = ScriptedTerminal::with_lines(&["When was it founded?"]);
        let output = run_script(&assistant, &mut terminal).await;

        assert_eq!(
            output,
            format!("{WELCOME}\nThinking...\n\nThapar was established in - 1956.\n\n")
        );
        // Second read hits end of input
        assert_eq!(terminal.prompts.len(), 2);
    }

    #[tokio::test]
    async fn test_question_forwarded_as_typed() {
        let assistant = test_assistant(&[("response_mode", "echo")]);
        let mut terminal = ScriptedTerminal::with_lines(&["  What about HOSTELS?  ", "quit"]);
        let output = run_script(&assistant, &mut terminal).await;

        assert!(output.contains("USER QUESTION:   What about HOSTELS?  \n"));
    }

    #[tokio::test]
    async fn test_error_answer_keeps_loop_running() {
        let assistant = test_assistant(&[("response_mode", "error"), ("error_message", "timeout")]);
        let mut terminal = ScriptedTerminal::with_lines(&["placements?", "help", "exit"]);
        let output = run_script(&assistant, &mut terminal).await;

        assert!(output.contains("\nThinking...\n\nError getting information: timeout\n\n"));
        assert!(output.contains("You can ask about:"));
        assert!(output.ends_with("\nThanks for using Thapar University Chatbot\n"));
    }

    #[tokio::test]
    async fn test_clear_clears_screen_and_reprints_welcome() {
        let assistant = test_assistant(&[]);
        let mut terminal = ScriptedTerminal::with_lines(&["CLEAR", "exit"]);
        let output = run_script(&assistant, &mut terminal).await;

        assert_eq!(terminal.clears, 1);
        assert_eq!(
            output,
            format!("{WELCOME}{WELCOME}\nThanks for using Thapar University Chatbot\n")
        );
    }

    #[tokio::test]
    async fn test_interrupt_prints_goodbye() {
        let assistant = test_assistant(&[]);
        let mut terminal = ScriptedTerminal {
            input: VecDeque::from([ReadOutcome::Interrupted, ReadOutcome::Line("exit".into())]),
            ..Default::default()
        };
        let output = run_script(&assistant, &mut terminal).await;

        assert_eq!(
            output,
            format!("{WELCOME}\nGoodbye! Thanks for using Thapar University Chatbot\n")
        );
    }

    #[tokio::test]
    async fn test_end_of_input_stops_quietly() {
        let assistant = test_assistant(&[]);
        let mut terminal = ScriptedTerminal::default();
        let output = run_script(&assistant, &mut terminal).await;

        assert_eq!(output, WELCOME);
    }

    #[tokio::test]
    async fn test_piped_input_writes_prompt_to_output() {
        let assistant = test_assistant(&[]);
        let mut terminal = ScriptedTerminal {
            piped: true,
            ..ScriptedTerminal::with_lines(&["", "When?", "exit"])
        };
        let output = run_script(&assistant, &mut terminal).await;

        let prompt = "Ask about Thapar: ";
        assert_eq!(
            output,
            format!(
                "{WELCOME}{prompt}Please ask a question about Thapar University\n\n\
                 {prompt}\nThinking...\n\nThapar was established in - 1956.\n\n\
                 {prompt}\nThanks for using Thapar University Chatbot\n"
            )
        );
    }

    #[tokio::test]
    async fn test_interactive_terminal_owns_prompt() {
        let assistant = test_assistant(&[]);
        let mut terminal = ScriptedTerminal::with_lines(&["exit"]);
        let output = run_script(&assistant, &mut terminal).await;

        assert!(!output.contains("Ask about Thapar: "));
        assert_eq!(terminal.prompts, vec!["Ask about Thapar: "]);
    }

    #[tokio::test]
    async fn test_long_session_does_not_grow_stack() {
        let assistant = test_assistant(&[]);
        let lines: Vec<&str> = std::iter::repeat_n("help", 10_000).collect();
        let mut terminal = ScriptedTerminal::with_lines(&lines);
        let output = run_script(&assistant, &mut terminal).await;

        assert_eq!(output.matches("You can ask about:").count(), 10_000);
    }
}
