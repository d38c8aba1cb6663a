use crate::core::center::RequestCenter;
use crate::domain::model::{Outcome, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt::Display;
use std::io::{BufRead, Write};

const RULE: &str = "========================================";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    RegisterRequest,
    ServeNext,
    LastServed,
    ListCustomers,
    ListFrequentCustomers,
    ListPendingRequests,
    Exit,
    Invalid(String),
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::RegisterRequest,
            "2" => MenuChoice::ServeNext,
            "3" => MenuChoice::LastServed,
            "4" => MenuChoice::ListCustomers,
            "5" => MenuChoice::ListFrequentCustomers,
            "6" => MenuChoice::ListPendingRequests,
            "0" => MenuChoice::Exit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }
}

/// Text front end over a `RequestCenter`. Reads choices from `input` and
/// writes menus, prompts and reports to `output`.
pub struct MenuSession<'a, R, W> {
    center: &'a mut RequestCenter,
    input: R,
    output: W,
    title: String,
    format: OutputFormat,
    pause: bool,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new<C: ConfigProvider + ?Sized>(
        center: &'a mut RequestCenter,
        input: R,
        output: W,
        config: &C,
    ) -> Self {
        Self {
            center,
            input,
            output,
            title: config.center_name().to_string(),
            format: config.output_format(),
            pause: config.pause_after_action(),
        }
    }

    /// Runs until the user picks `0` or input ends. Returns the number of
    /// menu choices handled, the final exit included.
    pub fn run(&mut self) -> Result<usize> {
        let mut handled = 0;
        loop {
            self.show_menu()?;
            let Some(line) = self.read_line("Select an option: ")? else {
                tracing::debug!("Input closed, ending session");
                self.farewell()?;
                return Ok(handled);
            };

            let choice = MenuChoice::parse(&line);
            tracing::debug!("Menu choice: {:?}", choice);
            handled += 1;

            if !self.handle(choice)? {
                return Ok(handled);
            }

            if self.pause && self.read_line("\nPress Enter to continue...")?.is_none() {
                self.farewell()?;
                return Ok(handled);
            }
        }
    }

    /// Returns false when the session should end.
    fn handle(&mut self, choice: MenuChoice) -> Result<bool> {
        match choice {
            MenuChoice::RegisterRequest => {
                let Some(name) = self.read_line("Customer name: ")? else {
                    self.farewell()?;
                    return Ok(false);
                };
                let Some(description) = self.read_line("Request description: ")? else {
                    self.farewell()?;
                    return Ok(false);
                };
                let registration = self.center.register_request(&name, &description);
                match self.format {
                    OutputFormat::Text => writeln!(self.output, "{}", registration)?,
                    OutputFormat::Json => self.write_json(&Outcome::Done(registration))?,
                }
            }
            MenuChoice::ServeNext => {
                let outcome = self.center.serve_next_request();
                self.write_record("Now serving", &outcome)?;
            }
            MenuChoice::LastServed => {
                let outcome = self.center.query_last_served();
                self.write_record("Last served", &outcome)?;
            }
            MenuChoice::ListCustomers => {
                let outcome = self.center.list_customers();
                self.write_listing("REGISTERED CUSTOMERS", &outcome)?;
            }
            MenuChoice::ListFrequentCustomers => {
                let outcome = self.center.list_frequent_customers();
                self.write_listing("FREQUENT CUSTOMERS", &outcome)?;
            }
            MenuChoice::ListPendingRequests => {
                let outcome = self.center.list_pending_requests();
                self.write_listing("PENDING REQUESTS", &outcome)?;
            }
            MenuChoice::Exit => {
                self.farewell()?;
                return Ok(false);
            }
            MenuChoice::Invalid(raw) => {
                tracing::debug!("Invalid menu option: {:?}", raw);
                match self.format {
                    OutputFormat::Text => {
                        writeln!(self.output, "Invalid option. Please try again.")?
                    }
                    OutputFormat::Json => self.write_json(&serde_json::json!({
                        "status": "invalid_option",
                        "input": raw,
                    }))?,
                }
            }
        }
        Ok(true)
    }

    fn show_menu(&mut self) -> Result<()> {
        if self.format == OutputFormat::Json {
            return Ok(());
        }
        writeln!(self.output, "\n{}", RULE)?;
        writeln!(self.output, "{}", self.title.to_uppercase())?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "1. Register new request")?;
        writeln!(self.output, "2. Serve next request")?;
        writeln!(self.output, "3. Show last served request")?;
        writeln!(self.output, "4. List registered customers")?;
        writeln!(self.output, "5. List frequent customers")?;
        writeln!(self.output, "6. Show pending requests")?;
        writeln!(self.output, "0. Exit")?;
        writeln!(self.output, "{}", RULE)?;
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        if self.format == OutputFormat::Text {
            writeln!(self.output, "Thank you for using {}. Goodbye!", self.title)?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Prints `prompt` and reads one line without its line ending.
    /// Returns `None` at end of input. In JSON mode prompts are not printed,
    /// so `output` carries only one JSON object per line.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let text = self.format == OutputFormat::Text;
        if text {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            if text {
                writeln!(self.output)?;
            }
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn write_record<T: Display + Serialize>(
        &mut self,
        label: &str,
        outcome: &Outcome<T>,
    ) -> Result<()> {
        match (self.format, outcome) {
            (OutputFormat::Json, _) => self.write_json(outcome)?,
            (OutputFormat::Text, Outcome::Done(record)) => {
                writeln!(self.output, "{}: {}", label, record)?
            }
            (OutputFormat::Text, Outcome::Empty(notice)) => writeln!(self.output, "{}", notice)?,
        }
        Ok(())
    }

    fn write_listing<T: Display + Serialize>(
        &mut self,
        heading: &str,
        outcome: &Outcome<Vec<T>>,
    ) -> Result<()> {
        match (self.format, outcome) {
            (OutputFormat::Json, _) => self.write_json(outcome)?,
            (OutputFormat::Text, Outcome::Done(entries)) => {
                writeln!(self.output, "\n=== {} ===", heading)?;
                for (i, entry) in entries.iter().enumerate() {
                    writeln!(self.output, "{}. {}", i + 1, entry)?;
                }
            }
            (OutputFormat::Text, Outcome::Empty(notice)) => writeln!(self.output, "{}", notice)?,
        }
        Ok(())
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let line = serde_json::to_string(value)?;
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::CenterConfig;

    fn quiet_config() -> CenterConfig {
        let mut config = CenterConfig::default();
        config.display.pause = false;
        config
    }

    fn run_session(center: &mut RequestCenter, config: &CenterConfig, script: &str) -> String {
        let mut output = Vec::new();
        MenuSession::new(center, script.as_bytes(), &mut output, config)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::RegisterRequest);
        assert_eq!(MenuChoice::parse(" 6 "), MenuChoice::ListPendingRequests);
        assert_eq!(MenuChoice::parse("0"), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("7"), MenuChoice::Invalid("7".to_string()));
        assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid(String::new()));
    }

    #[test]
    fn test_register_and_serve_through_menu() {
        let mut center = RequestCenter::new();
        let output = run_session(&mut center, &quiet_config(), "1\nAna\nbilling\n2\n3\n0\n");

        assert!(output.contains("Request registered for Ana: billing"));
        assert!(output.contains("Now serving: Ana - billing"));
        assert!(output.contains("Last served: Ana - billing"));
        assert!(output.contains("Thank you for using Customer Service. Goodbye!"));
        assert_eq!(center.history().len(), 1);
    }

    #[test]
    fn test_description_keeps_inner_whitespace() {
        let mut center = RequestCenter::new();
        run_session(&mut center, &quiet_config(), "1\nAna\n  card declined twice \r\n0\n");

        let pending = center.list_pending_requests().into_done().unwrap();
        assert_eq!(pending[0].description, "  card declined twice ");
    }

    #[test]
    fn test_empty_notices_are_printed() {
        let mut center = RequestCenter::new();
        let output = run_session(&mut center, &quiet_config(), "2\n3\n4\n5\n6\n0\n");

        assert!(output.contains("No pending requests."));
        assert!(output.contains("No service history yet."));
        assert!(output.contains("No customers registered."));
        assert!(output.contains("No frequent customers registered."));
    }

    #[test]
    fn test_invalid_option_keeps_session_alive() {
        let mut center = RequestCenter::new();
        let output = run_session(&mut center, &quiet_config(), "9\n1\nBob\nlogin\n0\n");

        assert!(output.contains("Invalid option. Please try again."));
        assert_eq!(center.pending().len(), 1);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let mut center = RequestCenter::new();
        let mut output = Vec::new();
        let handled = MenuSession::new(&mut center, "4\n".as_bytes(), &mut output, &quiet_config())
            .run()
            .unwrap();

        assert_eq!(handled, 1);
        assert!(String::from_utf8(output).unwrap().contains("Goodbye!"));
    }

    #[test]
    fn test_pause_waits_for_enter() {
        let mut center = RequestCenter::new();
        let config = CenterConfig::default();
        let output = run_session(&mut center, &config, "4\n\n0\n");

        assert_eq!(output.matches("Press Enter to continue...").count(), 1);
        assert_eq!(output.matches("0. Exit").count(), 2);
    }

    #[test]
    fn test_listings_are_numbered() {
        let mut center = RequestCenter::new();
        center.register_request("Ana", "billing");
        center.register_request("Bob", "refund");
        let output = run_session(&mut center, &quiet_config(), "4\n6\n0\n");

        assert!(output.contains("=== REGISTERED CUSTOMERS ===\n1. Ana - Requests: 1\n2. Bob - Requests: 1"));
        assert!(output.contains("=== PENDING REQUESTS ===\n1. Ana - billing\n2. Bob - refund"));
    }

    #[derive(Clone, Default)]
    struct SharedBuf(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_invalid_option_is_not_logged_at_info() {
        let logs = SharedBuf::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .finish();

        let mut center = RequestCenter::new();
        let output = tracing::subscriber::with_default(subscriber, || {
            run_session(&mut center, &quiet_config(), "9\n0\n")
        });

        assert!(output.contains("Invalid option. Please try again."));
        let logged = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(!logged.contains("Invalid menu option"));
    }

    fn json_lines(output: &str) -> Vec<serde_json::Value> {
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_json_output() {
        let mut center = RequestCenter::new();
        let mut config = quiet_config();
        config.display.format = OutputFormat::Json;
        let output = run_session(&mut center, &config, "2\n1\nAna\nbilling\n0\n");

        let records = json_lines(&output);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["notice"], "no_pending_requests");
        assert_eq!(records[1]["data"]["customer"], "Ana");
        assert_eq!(records[1]["data"]["promoted"], false);
    }

    #[test]
    fn test_json_output_has_only_json_lines() {
        let mut center = RequestCenter::new();
        let mut config = CenterConfig::default();
        config.display.format = OutputFormat::Json;
        // pause stays on: the Enter prompts must not leak into the output
        let output = run_session(&mut center, &config, "2\n\n8\n\n4\n\n0\n");

        let records = json_lines(&output);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["status"], "empty");
        assert_eq!(records[1]["status"], "invalid_option");
        assert_eq!(records[1]["input"], "8");
        assert_eq!(records[2]["notice"], "no_customers");
    }

    #[test]
    fn test_json_session_ending_on_eof_prints_nothing_extra() {
        let mut center = RequestCenter::new();
        let mut config = quiet_config();
        config.display.format = OutputFormat::Json;
        let output = run_session(&mut center, &config, "1\nAna\n");

        assert!(output.is_empty());
        assert!(center.pending().is_empty());
    }
}
