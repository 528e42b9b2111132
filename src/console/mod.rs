//! Terminal frontend.
//!
//! A thin presentation layer over [`ContactBook`]: it renders the current
//! list and forwards add/delete actions to the service. It holds no state of
//! its own and performs no validation — failed submissions come back as the
//! per-field error mapping and are printed inline.
//!
//! The loop is generic over its reader and writer so tests can drive it with
//! in-memory buffers.

use crate::domain::ContactId;
use crate::models::Contact;
use crate::services::ContactBook;
use anyhow::Result;
use std::io::{BufRead, Write};

const HELP: &str = "Commands:
  add            add a contact (prompts for name, email, phone)
  list           show all contacts, newest first
  remove <id>    delete the contact with the given id
  help           show this help
  quit           exit";

/// Run the interactive loop until `quit` or end of input.
pub fn run<R, W>(book: &dyn ContactBook, input: &mut R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "Contact Book")?;
    writeln!(out, "{}", HELP)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let line = match read_line(input)? {
            Some(line) => line,
            None => break,
        };

        let mut parts = line.trim().splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or("");
        let rest = parts.next().unwrap_or("").trim();

        match command {
            "" => {}
            "add" => add_contact(book, input, out)?,
            "list" => render_list(&book.contacts(), out)?,
            "remove" => remove_contact(book, rest, out)?,
            "help" => writeln!(out, "{}", HELP)?,
            "quit" | "exit" => break,
            other => writeln!(out, "Unknown command: {} (try 'help')", other)?,
        }
    }

    Ok(())
}

fn add_contact<R, W>(book: &dyn ContactBook, input: &mut R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let name = prompt(input, out, "Name: ")?;
    let email = prompt(input, out, "Email: ")?;
    let phone = prompt(input, out, "Phone: ")?;

    match book.validate_and_add(&name, &email, &phone) {
        Ok(contact) => writeln!(out, "Added {} [{}]", contact.name, contact.id)?,
        Err(errors) => {
            for (field, message) in errors.iter() {
                writeln!(out, "  {}: {}", field, message)?;
            }
        }
    }
    Ok(())
}

fn remove_contact<W: Write>(book: &dyn ContactBook, arg: &str, out: &mut W) -> Result<()> {
    let id = match ContactId::new(arg) {
        Ok(id) => id,
        Err(e) => {
            writeln!(out, "  {}", e)?;
            return Ok(());
        }
    };

    if book.delete_contact(&id) {
        writeln!(out, "Removed {}", id)?;
    } else {
        writeln!(out, "No contact with id {}", id)?;
    }
    Ok(())
}

fn render_list<W: Write>(contacts: &[Contact], out: &mut W) -> Result<()> {
    if contacts.is_empty() {
        writeln!(out, "No contacts yet.")?;
        return Ok(());
    }

    for contact in contacts {
        writeln!(
            out,
            "{}  <{}>  {}  [{}]",
            contact.name,
            contact.email,
            contact.phone.formatted(),
            contact.id
        )?;
    }
    Ok(())
}

fn prompt<R, W>(input: &mut R, out: &mut W, label: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{}", label)?;
    out.flush()?;
    Ok(read_line(input)?.unwrap_or_default())
}

/// One line of input without its trailing newline; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ContactBookService;
    use std::io::Cursor;

    fn run_session(input: &str) -> String {
        let service = ContactBookService::new();
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        run(&service, &mut reader, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let output = run_session("add\nAda\nada@x.com\n(123) 456-7890\nlist\nquit\n");
        assert!(output.contains("Added Ada"));
        assert!(output.contains("Ada  <ada@x.com>  (123) 456-7890"));
    }

    #[test]
    fn test_invalid_submission_prints_field_errors() {
        let output = run_session("add\nA\nnope\n12345\nlist\nquit\n");
        assert!(output.contains("name: Name must be at least 2 characters"));
        assert!(output.contains("email: Please enter a valid email address"));
        assert!(output.contains("phone: Phone number must be exactly 10 digits"));
        assert!(output.contains("No contacts yet."));
    }

    #[test]
    fn test_remove_unknown_id_reports_noop() {
        let output = run_session("remove nope\nquit\n");
        assert!(output.contains("No contact with id nope"));
    }

    #[test]
    fn test_remove_without_id_complains() {
        let output = run_session("remove\nquit\n");
        assert!(output.contains("ID cannot be empty"));
    }

    #[test]
    fn test_eof_ends_loop() {
        let output = run_session("list\n");
        assert!(output.contains("No contacts yet."));
    }

    #[test]
    fn test_unknown_command() {
        let output = run_session("frobnicate\nquit\n");
        assert!(output.contains("Unknown command: frobnicate"));
    }
}
