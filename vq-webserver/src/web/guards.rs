use std::ops::Deref;

use rocket::{
    http::Status,
    request::{FromRequest, Outcome, Request},
};

use vq_core::gateways::notify::NotificationGateway;

pub const COOKIE_EMAIL_KEY: &str = "vendquest-account-email";

/// The account e-mail taken from the private session cookie.
/// Authorization against a role happens in the route handlers.
#[derive(Debug)]
pub struct Account(String);

impl Account {
    pub fn email(&self) -> &str {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.cookies().get_private(COOKIE_EMAIL_KEY) {
            Some(cookie) => Outcome::Success(Account(cookie.value().to_owned())),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

/// The client address, used as the anonymous voter identity and for
/// the spin audit trail.
#[derive(Debug)]
pub struct ClientIp(String);

impl ClientIp {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ClientIp {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.client_ip() {
            Some(ip) => Outcome::Success(ClientIp(ip.to_string())),
            None => Outcome::Error((Status::BadRequest, ())),
        }
    }
}

pub struct Notify(pub Box<dyn NotificationGateway + Send + Sync>);

impl Deref for Notify {
    type Target = dyn NotificationGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct Version(pub &'static str);
