//! Fixed chat texts. Scripts scrape this output, keep it byte-stable.
use std::io::{self, Write};

pub const STARTING: &str = "Starting Thapar University Chatbot...";
pub const INPUT_PROMPT: &str = "Ask about Thapar: ";
pub const THINKING: &str = "\nThinking...";
pub const EMPTY_REMINDER: &str = "Please ask a question about Thapar University\n";
pub const FAREWELL: &str = "\nThanks for using Thapar University Chatbot";
pub const GOODBYE: &str = "\nGoodbye! Thanks for using Thapar University Chatbot";

const WELCOME: &str = r#"
Welcome to Thapar University Information Chatbot
Ask me anything about Thapar Institute of Engineering & Technology
Examples: admissions, placements, courses, facilities, rankings
Type "exit" to quit, "help" for more options

"#;

const HELP: &str = "
You can ask about:
Basic Information (establishment, location, history)
Academics (courses, schools, programs)
Admissions (eligibility, process, entrance exams)
Placements (statistics, companies, packages)
Facilities (hostels, library, sports, campus)
Rankings and Accreditation
Campus Life (festivals, clubs, events)
Alumni and Notable Graduates
Contact Information

";

pub fn print_welcome(out: &mut impl Write) -> io::Result<()> {
    out.write_all(WELCOME.as_bytes())
}

pub fn print_help(out: &mut impl Write) -> io::Result<()> {
    out.write_all(HELP.as_bytes())
}
