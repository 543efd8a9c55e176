#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub body: String,
}

pub trait EmailGateway {
    fn compose_and_send(&self, recipients: &[String], email: &EmailContent);
}
