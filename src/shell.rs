//! Menu-driven terminal front end
//!
//! The shell is blocking and sequential: every line read is fully handled,
//! including the remote lookup, before the next prompt is written. Input and
//! output are injected so the binary can bind stdin/stdout and tests can use
//! in-memory buffers.

use crate::report::{self, RULE};
use crate::search::{IncidentSearch, QueryResult, DEFAULT_MAX_RESULTS};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// Descriptions used by batch mode and listed by "View Sample Test Cases"
pub const SAMPLE_TEST_CASES: [&str; 10] = [
    "VPN keeps asking for password and won't connect",
    "Outlook inbox not loading, application freezing",
    "Getting certificate error when opening internal website",
    "Teams meeting stuck on connecting screen",
    "Cannot access SharePoint files, getting access denied",
    "Printer not working, documents stuck in queue",
    "Application crashes after recent update",
    "Disk space alert, system running out of storage",
    "MFA authentication failing during login",
    "Email bouncing back with delivery errors",
];

/// Inputs that end interactive mode (compared case-insensitively)
pub const EXIT_KEYWORDS: [&str; 3] = ["quit", "exit", "q"];

const THIN_RULE: &str =
    "----------------------------------------------------------------------";
const HASH_RULE: &str =
    "######################################################################";

/// Entries of the mode menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Interactive,
    BatchTest,
    SingleQuery,
    ViewSamples,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Interactive),
            "2" => Some(MenuChoice::BatchTest),
            "3" => Some(MenuChoice::SingleQuery),
            "4" => Some(MenuChoice::ViewSamples),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// How a shell session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The menu was shown and the selected mode ran to completion
    Completed,
    /// The startup probe failed; the menu was never shown
    Unreachable,
}

pub fn is_exit_keyword(input: &str) -> bool {
    EXIT_KEYWORDS
        .iter()
        .any(|keyword| input.trim().eq_ignore_ascii_case(keyword))
}

pub struct Shell<'a, R, W> {
    search: &'a dyn IncidentSearch,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(search: &'a dyn IncidentSearch, input: R, output: W) -> Self {
        Self {
            search,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Full session: banner, connectivity probe, menu, selected mode.
    pub async fn run(&mut self, endpoint: &str, index_name: &str) -> io::Result<SessionEnd> {
        self.print_banner()?;

        if !self.check_connection(endpoint, index_name).await? {
            writeln!(
                self.output,
                "\n❌ Cannot proceed without connection. Please fix the issues above."
            )?;
            return Ok(SessionEnd::Unreachable);
        }

        self.run_menu().await?;
        Ok(SessionEnd::Completed)
    }

    fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", RULE)?;
        writeln!(self.output, "🚀 AIOps INCIDENT AUTO-RESOLVER")?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "\nLook up past incidents by describing your problem.")?;
        writeln!(self.output, "{}", RULE)
    }

    /// Probe the service and print either a summary or troubleshooting hints
    pub async fn check_connection(&mut self, endpoint: &str, index_name: &str) -> io::Result<bool> {
        writeln!(self.output, "\n{}", RULE)?;
        writeln!(self.output, "🔍 TESTING CONNECTION TO SEARCH SERVICE")?;
        writeln!(self.output, "{}", RULE)?;

        if self.search.check_connectivity().await {
            writeln!(self.output, "✅ Connection successful!")?;
            writeln!(self.output, "🌐 Endpoint: {}", endpoint)?;
            writeln!(self.output, "📊 Index: {}", index_name)?;
            writeln!(self.output, "✓ Search service is responding")?;
            return Ok(true);
        }

        writeln!(self.output, "❌ Connection failed!")?;
        writeln!(self.output, "The underlying error has been logged.")?;
        writeln!(self.output, "\n💡 Troubleshooting:")?;
        writeln!(self.output, "1. Check that the search API key is set and correct")?;
        writeln!(self.output, "2. Verify index name: {}", index_name)?;
        writeln!(self.output, "3. Ensure the search service is running at {}", endpoint)?;
        Ok(false)
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", RULE)?;
        writeln!(self.output, "SELECT MODE:")?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "1. Interactive Mode - Enter your own incident descriptions")?;
        writeln!(
            self.output,
            "2. Batch Test Mode - Run {} predefined test cases",
            SAMPLE_TEST_CASES.len()
        )?;
        writeln!(self.output, "3. Single Query Test")?;
        writeln!(self.output, "4. View Sample Test Cases")?;
        writeln!(self.output, "5. Exit")?;
        writeln!(self.output, "{}", RULE)
    }

    /// Show the menu, read one choice and run it. An invalid choice ends the session.
    pub async fn run_menu(&mut self) -> io::Result<()> {
        self.show_menu()?;

        let choice = self.prompt("\nEnter your choice (1-5): ")?.unwrap_or_default();
        match MenuChoice::parse(&choice) {
            Some(MenuChoice::Interactive) => self.interactive().await,
            Some(MenuChoice::BatchTest) => self.batch(&SAMPLE_TEST_CASES).await,
            Some(MenuChoice::SingleQuery) => self.single_query().await,
            Some(MenuChoice::ViewSamples) => self.show_samples(),
            Some(MenuChoice::Exit) => writeln!(self.output, "\n👋 Goodbye!"),
            None => writeln!(self.output, "\n⚠️ Invalid choice. Please run the program again."),
        }
    }

    /// Read-eval-print loop until an exit keyword or end of input
    pub async fn interactive(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", RULE)?;
        writeln!(self.output, "🤖 AIOps INCIDENT AUTO-RESOLVER - INTERACTIVE MODE")?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "\nType 'quit' or 'exit' to stop\n")?;

        loop {
            let line = match self.prompt("🎤 Describe your issue: ")? {
                Some(line) => line,
                None => break,
            };

            if is_exit_keyword(&line) {
                writeln!(self.output, "\n👋 Thank you for using AIOps Incident Resolver!")?;
                break;
            }

            if line.is_empty() {
                writeln!(self.output, "⚠️ Please enter a description")?;
                continue;
            }

            self.lookup(&line).await?;
            writeln!(self.output, "\n{}\n", THIN_RULE)?;
        }

        Ok(())
    }

    /// Run every case in turn, pausing for Enter after each one
    pub async fn batch(&mut self, cases: &[&str]) -> io::Result<()> {
        writeln!(self.output, "\n{}", RULE)?;
        writeln!(self.output, "🧪 RUNNING BATCH TESTS")?;
        writeln!(self.output, "{}", RULE)?;

        for (i, case) in cases.iter().enumerate() {
            writeln!(self.output, "\n\n{}", HASH_RULE)?;
            writeln!(self.output, "TEST CASE {}/{}", i + 1, cases.len())?;
            writeln!(self.output, "{}", HASH_RULE)?;

            self.lookup(case).await?;

            self.prompt("\nPress Enter to continue to next test...")?;
        }

        info!(cases = cases.len(), "Batch test run finished");
        Ok(())
    }

    /// Read one description and look it up
    pub async fn single_query(&mut self) -> io::Result<()> {
        let line = self
            .prompt("\n🎤 Enter incident description: ")?
            .unwrap_or_default();
        if line.is_empty() {
            return Ok(());
        }
        self.lookup(&line).await
    }

    pub fn show_samples(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", RULE)?;
        writeln!(self.output, "📋 SAMPLE TEST CASES:")?;
        writeln!(self.output, "{}", RULE)?;
        for (i, case) in SAMPLE_TEST_CASES.iter().enumerate() {
            writeln!(self.output, "{:2}. {}", i + 1, case)?;
        }
        writeln!(
            self.output,
            "\nYou can use these in Interactive Mode or run Batch Test Mode!"
        )
    }

    /// Query and render. Lookup failures are reported and never end the session.
    async fn lookup(&mut self, description: &str) -> io::Result<()> {
        let result = match self.search.search(description, DEFAULT_MAX_RESULTS).await {
            Ok(result) => result,
            Err(e) if e.is_query_error() => {
                warn!(error = %e, "Incident lookup failed");
                writeln!(self.output, "\n❌ Search error: {}", e)?;
                QueryResult::default()
            }
            Err(e) => {
                writeln!(self.output, "\n⚠️ {}", e)?;
                return Ok(());
            }
        };

        write!(self.output, "\n{}", report::render(description, &result))
    }

    /// Write `label`, then read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
