//! Interactive menu session.
//!
//! # Responsibility
//! - Render the menu and dispatch add/view/search actions.
//! - Re-prompt a field until its validator accepts the value.
//!
//! # Invariants
//! - End of input ends the session cleanly, even mid-prompt.
//! - Store diagnostics are shown to the user; they never end the session.

use customer_tracker_core::{
    format_table, require_non_blank, validate_phone, CustomerInput, CustomerRepository,
    CustomerService, FieldValidationError, ReadOutcome,
};
use log::info;
use std::io::{self, BufRead, Write};

const BANNER_WIDTH: usize = 40;

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// One interactive session over arbitrary input/output streams.
pub struct Session<'s, R: CustomerRepository, In: BufRead, Out: Write> {
    service: &'s CustomerService<R>,
    input: In,
    output: Out,
}

impl<'s, R: CustomerRepository, In: BufRead, Out: Write> Session<'s, R, In, Out> {
    pub fn new(service: &'s CustomerService<R>, input: In, output: Out) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        info!("event=session_start module=cli status=ok");
        loop {
            self.print_menu()?;
            let flow = match self.prompt("\nEnter your choice (1-4): ")? {
                None => Flow::Quit,
                Some(choice) => match choice.trim() {
                    "1" => self.add_customer()?,
                    "2" => self.view_customers()?,
                    "3" => self.search_customers()?,
                    "4" => Flow::Quit,
                    _ => {
                        writeln!(self.output, "\nInvalid choice. Please enter 1-4.\n")?;
                        Flow::Continue
                    }
                },
            };

            if flow == Flow::Quit {
                writeln!(self.output, "\nGoodbye!\n")?;
                self.output.flush()?;
                info!("event=session_end module=cli status=ok");
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "{:^BANNER_WIDTH$}", "HVAC CUSTOMER TRACKER")?;
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "1. Add customer")?;
        writeln!(self.output, "2. View all customers")?;
        writeln!(self.output, "3. Search customer")?;
        writeln!(self.output, "4. Exit")?;
        writeln!(self.output, "{rule}")
    }

    fn add_customer(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n--- Add Customer ---")?;
        let min_digits = self.service.min_phone_digits();

        let Some(name) = self.prompt_valid("Customer name: ", require_non_blank)? else {
            return Ok(Flow::Quit);
        };
        let Some(phone) = self.prompt_valid("Phone: ", |raw| validate_phone(raw, min_digits))?
        else {
            return Ok(Flow::Quit);
        };
        let Some(address) = self.prompt_valid("Address: ", require_non_blank)? else {
            return Ok(Flow::Quit);
        };
        let Some(notes) = self.prompt("Notes (optional): ")? else {
            return Ok(Flow::Quit);
        };

        let input = CustomerInput {
            name,
            phone,
            address,
            notes,
        };
        match self.service.add_customer(&input) {
            Ok(record) => writeln!(self.output, "{} added successfully!\n", record.name)?,
            Err(err) => writeln!(self.output, "{err}\n")?,
        }
        Ok(Flow::Continue)
    }

    fn view_customers(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n--- Customer List ---")?;
        let outcome = self.service.list_customers();
        self.print_outcome(&outcome, "No customers recorded yet.")?;
        Ok(Flow::Continue)
    }

    fn search_customers(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n--- Search Customers ---")?;
        let Some(term) = self.prompt("Enter name, phone, or address: ")? else {
            return Ok(Flow::Quit);
        };

        match self.service.search_customers(&term) {
            Ok(outcome) => self.print_outcome(&outcome, "No matching customers found.")?,
            Err(err) => writeln!(self.output, "{err}\n")?,
        }
        Ok(Flow::Continue)
    }

    fn print_outcome(&mut self, outcome: &ReadOutcome, empty_message: &str) -> io::Result<()> {
        if let Some(err) = &outcome.error {
            writeln!(self.output, "{err}\n")?;
        }
        if outcome.is_empty() {
            return writeln!(self.output, "{empty_message}\n");
        }
        writeln!(self.output, "{}\n", format_table(&outcome.records))
    }

    /// Prompts until `validate` accepts; `None` when input ends.
    fn prompt_valid<F>(&mut self, label: &str, validate: F) -> io::Result<Option<String>>
    where
        F: Fn(&str) -> Result<String, FieldValidationError>,
    {
        loop {
            let Some(raw) = self.prompt(label)? else {
                return Ok(None);
            };
            match validate(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// Writes `label` and reads one line without its terminator.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
