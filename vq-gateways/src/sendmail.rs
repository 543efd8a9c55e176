use std::thread;
#[cfg(not(test))]
use std::{
    io::prelude::*,
    process::{Command, Stdio},
};

use vq_core::gateways::email::{EmailContent, EmailGateway};

/// Delivers mail by piping it into the local `sendmail` binary.
#[derive(Debug, Clone)]
pub struct Sendmail {
    from: String,
}

impl Sendmail {
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }

    fn send(&self, mail: String) {
        thread::spawn(move || {
            if let Err(err) = send_raw(&mail) {
                warn!("Could not send e-mail: {err}");
            }
        });
    }
}

#[cfg(not(test))]
fn send_raw(mail: &str) -> std::io::Result<()> {
    use std::io::{Error, ErrorKind};
    let mut child = Command::new("sendmail")
        .arg("-t")
        .stdin(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .as_mut()
        .ok_or_else(|| Error::new(ErrorKind::Other, "Could not get stdin"))?
        .write_all(mail.as_bytes())?;
    child.wait_with_output()?;
    Ok(())
}

/// Don't actually send emails while running the tests.
#[cfg(test)]
fn send_raw(mail: &str) -> std::io::Result<()> {
    debug!("Would send e-mail: {mail}");
    Ok(())
}

fn compose(from: &str, to: &str, content: &EmailContent) -> String {
    format!(
        "To: {to}\r\nFrom: {from}\r\nSubject: {subject}\r\n\r\n{body}\r\n",
        subject = content.subject,
        body = content.body,
    )
}

impl EmailGateway for Sendmail {
    fn compose_and_send(&self, recipients: &[String], email: &EmailContent) {
        debug!("Sending e-mails to: {recipients:?}");
        for to in recipients {
            self.send(compose(&self.from, to, email));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composed_mail_carries_headers_and_body() {
        let content = EmailContent {
            subject: "Milestone reached".into(),
            body: "Your tracker passed 50%.".into(),
        };
        let mail = compose("noreply@example.com", "owner@example.com", &content);
        assert!(mail.starts_with("To: owner@example.com\r\n"));
        assert!(mail.contains("Subject: Milestone reached\r\n"));
        assert!(mail.ends_with("Your tracker passed 50%.\r\n"));
    }
}
