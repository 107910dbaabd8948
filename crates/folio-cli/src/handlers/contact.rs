use anyhow::Result;
use folio_engine::{validate, ContactMessage};

pub fn handle(name: &str, email: &str, message: &str) -> Result<()> {
    let draft = ContactMessage {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    };

    let errors = validate(&draft);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("{}: {}", error.field, error.message);
        }
        anyhow::bail!("Please fix the errors above.");
    }

    println!("Sending…");
    println!("Thanks! Your message has been sent.");

    Ok(())
}
